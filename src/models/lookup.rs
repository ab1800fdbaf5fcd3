use std::fmt;

use crate::sources::LookupError;

/// Which configured source a request or result belongs to.
///
/// The source's priority doubles as its tooltip slot: Primary renders in
/// slot 0 (top of the stack), Secondary in slot 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SourceId {
    Primary,
    Secondary,
}

impl SourceId {
    pub const ALL: [SourceId; 2] = [SourceId::Primary, SourceId::Secondary];

    pub const fn slot(&self) -> usize {
        match self {
            SourceId::Primary => 0,
            SourceId::Secondary => 1,
        }
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceId::Primary => write!(f, "primary"),
            SourceId::Secondary => write!(f, "secondary"),
        }
    }
}

/// One lookup issued for a selection
#[derive(Debug, Clone, PartialEq)]
pub struct LookupRequest {
    pub query: String,
    pub source: SourceId,
    /// Issue order within the session, starting at 0
    pub order: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupStatus {
    Ok,
    Empty,
    ParseError,
    TransportError,
    Timeout,
}

impl LookupStatus {
    fn placeholder(&self) -> Option<&'static str> {
        match self {
            LookupStatus::Ok => None,
            LookupStatus::Empty => Some("no result"),
            LookupStatus::ParseError => Some("parse failed"),
            LookupStatus::TransportError => Some("request failed"),
            LookupStatus::Timeout => Some("timed out"),
        }
    }
}

/// The final, rendered outcome of one source for one selection
#[derive(Debug, Clone, PartialEq)]
pub struct LookupResult {
    pub source: SourceId,
    pub status: LookupStatus,
    pub rendered_text: String,
}

impl LookupResult {
    /// Build the result for a lookup that settled before any timeout
    pub fn settled(source: SourceId, label: &str, outcome: Result<String, LookupError>) -> Self {
        match outcome {
            Ok(text) => Self {
                source,
                status: LookupStatus::Ok,
                rendered_text: format!("{}:\n{}", label, text),
            },
            Err(err) => Self::placeholder(source, label, err.status()),
        }
    }

    pub fn timed_out(source: SourceId, label: &str) -> Self {
        Self::placeholder(source, label, LookupStatus::Timeout)
    }

    fn placeholder(source: SourceId, label: &str, status: LookupStatus) -> Self {
        let message = status.placeholder().unwrap_or("no result");
        Self {
            source,
            status,
            rendered_text: format!("{}: {}", label, message),
        }
    }
}

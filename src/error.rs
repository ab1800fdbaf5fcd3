use thiserror::Error;

/// Startup and setup failures.
///
/// Lookup failures never show up here: they are rendered as tooltip
/// placeholders (see [`crate::sources::LookupError`]).
#[derive(Debug, Error)]
pub enum GlossError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Invalid replay script (line {line}): {message}")]
    Replay { line: usize, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GlossError>;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{GlossError, Result};

lazy_static! {
    // Word dictionaries only understand plain Latin words and phrases
    static ref ALPHABETIC_WORDS: Regex = Regex::new(r"^[a-zA-Z\s]+$").unwrap();
}

/// Content predicate restricting which queries reach the primary source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainGate {
    /// ASCII letters and whitespace only
    AlphabeticWords,
    /// Custom regular expression the whole query must match
    Pattern(String),
}

impl DomainGate {
    pub fn compile(&self) -> Result<GatePredicate> {
        let regex = match self {
            DomainGate::AlphabeticWords => ALPHABETIC_WORDS.clone(),
            DomainGate::Pattern(pattern) => Regex::new(pattern).map_err(|e| {
                GlossError::Config(format!("invalid domain gate pattern '{}': {}", pattern, e))
            })?,
        };
        Ok(GatePredicate { regex })
    }
}

/// A compiled [`DomainGate`]
#[derive(Debug, Clone)]
pub struct GatePredicate {
    regex: Regex,
}

impl GatePredicate {
    pub fn permits(&self, query: &str) -> bool {
        self.regex.is_match(query)
    }
}

use async_trait::async_trait;
use serde_json::Value;

use super::{endpoint, HttpClient, LookupError, SourceAdapter};

pub const DEFAULT_BASE_URL: &str = "https://dict.iciba.com";

/// iciba word-suggestion dictionary
pub struct Iciba {
    client: HttpClient,
    base_url: String,
}

impl Iciba {
    pub fn new(client: HttpClient, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl SourceAdapter for Iciba {
    fn label(&self) -> &str {
        "iciba"
    }

    async fn lookup(&self, query: &str) -> Result<String, LookupError> {
        let url = endpoint(&self.base_url, "/dictionary/word/suggestion");
        let body = self
            .client
            .get_text(&url, &[("word", query), ("nums", "1")])
            .await?;
        parse_response(&body)
    }
}

/// Extract `message[0].paraphrase`
pub fn parse_response(body: &str) -> Result<String, LookupError> {
    let data: Value = serde_json::from_str(body)?;

    data.get("message")
        .and_then(|m| m.get(0))
        .and_then(|m| m.get("paraphrase"))
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .ok_or(LookupError::Empty)
}

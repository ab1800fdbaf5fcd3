use async_trait::async_trait;
use serde::Deserialize;

use super::{endpoint, HttpClient, LookupError, SourceAdapter};

/// Self-hosted translate API guarded by a shared secret
pub struct SelfHostedTranslate {
    client: HttpClient,
    base_url: String,
    source_lang: String,
    target_lang: String,
    secret: String,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(default)]
    text: Option<String>,
}

impl SelfHostedTranslate {
    pub fn new(
        client: HttpClient,
        base_url: String,
        source_lang: String,
        target_lang: String,
        secret: String,
    ) -> Self {
        Self {
            client,
            base_url,
            source_lang,
            target_lang,
            secret,
        }
    }
}

#[async_trait]
impl SourceAdapter for SelfHostedTranslate {
    fn label(&self) -> &str {
        "Translate API"
    }

    async fn lookup(&self, query: &str) -> Result<String, LookupError> {
        let url = endpoint(&self.base_url, "/");
        let body = self
            .client
            .get_text(
                &url,
                &[
                    ("text", query),
                    ("source_language", self.source_lang.as_str()),
                    ("target_language", self.target_lang.as_str()),
                    ("secret", self.secret.as_str()),
                ],
            )
            .await?;
        parse_response(&body)
    }
}

/// Extract `{ "text": ... }`
pub fn parse_response(body: &str) -> Result<String, LookupError> {
    let response: TranslateResponse = serde_json::from_str(body)?;

    response
        .text
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or(LookupError::Empty)
}

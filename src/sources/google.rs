use async_trait::async_trait;
use serde_json::Value;

use super::{endpoint, HttpClient, LookupError, SourceAdapter};

pub const DEFAULT_BASE_URL: &str = "https://translate.googleapis.com";

/// Google `translate_a/single` (gtx client), auto-detecting the source language
pub struct GoogleTranslate {
    client: HttpClient,
    base_url: String,
    target_lang: String,
}

impl GoogleTranslate {
    pub fn new(client: HttpClient, base_url: String, target_lang: String) -> Self {
        Self {
            client,
            base_url,
            target_lang,
        }
    }
}

#[async_trait]
impl SourceAdapter for GoogleTranslate {
    fn label(&self) -> &str {
        "Google Translate"
    }

    async fn lookup(&self, query: &str) -> Result<String, LookupError> {
        let url = endpoint(&self.base_url, "/translate_a/single");
        let body = self
            .client
            .get_text(
                &url,
                &[
                    ("client", "gtx"),
                    ("sl", "auto"),
                    ("tl", self.target_lang.as_str()),
                    ("dt", "t"),
                    ("q", query),
                ],
            )
            .await?;
        parse_response(&body)
    }
}

/// The translation lives at `[0][i][0]`; one entry per sentence.
///
/// The first segment is mandatory, later ones are appended when present.
pub fn parse_response(body: &str) -> Result<String, LookupError> {
    let data: Value = serde_json::from_str(body)?;

    let segments = data
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| LookupError::Parse("missing segment list".to_string()))?;

    let first = segments
        .first()
        .and_then(|s| s.get(0))
        .and_then(Value::as_str)
        .ok_or_else(|| LookupError::Parse("missing first segment".to_string()))?;

    let mut translated = first.to_string();
    for segment in segments.iter().skip(1) {
        if let Some(text) = segment.get(0).and_then(Value::as_str) {
            translated.push_str(text);
        }
    }

    let translated = translated.trim();
    if translated.is_empty() {
        return Err(LookupError::Empty);
    }

    Ok(translated.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_segment() {
        let body = r#"[[["你好","hello",null,null,10]],null,"en"]"#;
        assert_eq!(parse_response(body).unwrap(), "你好");
    }

    #[test]
    fn test_parse_joins_sentence_segments() {
        let body = r#"[[["你好。","Hello.",null,null,3],["再见。","Bye.",null,null,3]],null,"en"]"#;
        assert_eq!(parse_response(body).unwrap(), "你好。再见。");
    }

    #[test]
    fn test_parse_wrong_shape() {
        assert!(matches!(
            parse_response(r#"{"error":"quota"}"#),
            Err(LookupError::Parse(_))
        ));
        assert!(matches!(parse_response("[[]]"), Err(LookupError::Parse(_))));
        assert!(matches!(
            parse_response("[[[null]]]"),
            Err(LookupError::Parse(_))
        ));
    }

    #[test]
    fn test_parse_blank_translation_is_empty() {
        assert_eq!(parse_response(r#"[[["  ","x"]]]"#), Err(LookupError::Empty));
    }
}

use async_trait::async_trait;
use serde_json::Value;

use super::{endpoint, HttpClient, LookupError, SourceAdapter};

pub const DEFAULT_BASE_URL: &str = "https://dict.youdao.com";

/// Youdao English-Chinese dictionary (`jsonapi`)
pub struct Youdao {
    client: HttpClient,
    base_url: String,
}

impl Youdao {
    pub fn new(client: HttpClient, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl SourceAdapter for Youdao {
    fn label(&self) -> &str {
        "Youdao"
    }

    async fn lookup(&self, query: &str) -> Result<String, LookupError> {
        let url = endpoint(&self.base_url, "/jsonapi");
        let body = self
            .client
            .get_text(
                &url,
                &[("xmlVersion", "5.1"), ("jsonversion", "2"), ("q", query)],
            )
            .await?;
        parse_response(&body)
    }
}

/// One bullet line per `ec.word[0].trs[*].tr[0].l.i[0]`.
///
/// A missing `ec` block means the word is unknown; a `trs` entry without
/// the nested line is a malformed response.
pub fn parse_response(body: &str) -> Result<String, LookupError> {
    let data: Value = serde_json::from_str(body)?;

    let Some(trs) = data
        .get("ec")
        .and_then(|ec| ec.get("word"))
        .and_then(|w| w.get(0))
        .and_then(|w| w.get("trs"))
        .and_then(Value::as_array)
    else {
        return Err(LookupError::Empty);
    };

    let lines = trs
        .iter()
        .map(|tr| {
            tr.get("tr")
                .and_then(|t| t.get(0))
                .and_then(|t| t.get("l"))
                .and_then(|l| l.get("i"))
                .and_then(|i| i.get(0))
                .and_then(Value::as_str)
                .map(|line| format!("· {}", line))
                .ok_or_else(|| LookupError::Parse("malformed trs entry".to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if lines.is_empty() {
        return Err(LookupError::Empty);
    }

    Ok(lines.join("\n"))
}

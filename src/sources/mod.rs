//! Dictionary and translation services the coordinator can query.
//!
//! Every service sits behind [`SourceAdapter`]. Adapters never panic or
//! propagate transport details: a lookup settles to a translation or to one
//! of the [`LookupError`] kinds, which the coordinator renders as a
//! placeholder.

pub mod gate;
pub mod google;
pub mod iciba;
pub mod self_hosted;
pub mod youdao;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::config::LookupConfig;
use crate::error::{GlossError, Result};
use crate::models::LookupStatus;

pub use gate::{DomainGate, GatePredicate};

/// Why a lookup produced no translation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// Network failure, HTTP error status or client timeout
    #[error("transport error: {0}")]
    Transport(String),
    /// Body was not JSON or did not have the expected shape
    #[error("parse error: {0}")]
    Parse(String),
    /// Well-formed response without a usable translation
    #[error("empty result")]
    Empty,
}

impl LookupError {
    pub fn status(&self) -> LookupStatus {
        match self {
            LookupError::Transport(_) => LookupStatus::TransportError,
            LookupError::Parse(_) => LookupStatus::ParseError,
            LookupError::Empty => LookupStatus::Empty,
        }
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(err: serde_json::Error) -> Self {
        LookupError::Parse(err.to_string())
    }
}

/// A single dictionary/translation backend
#[async_trait]
pub trait SourceAdapter: Send + Sync {
    /// Short human-readable name shown as the tooltip heading
    fn label(&self) -> &str;

    /// Translate or define `query`
    async fn lookup(&self, query: &str) -> std::result::Result<String, LookupError>;
}

/// Known services, as named in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceKind {
    /// Self-hosted translate API (`/?text=..&secret=..`)
    SelfHosted,
    /// iciba word-suggestion dictionary
    Iciba,
    /// Google `translate_a/single` endpoint
    Google,
    /// Youdao `jsonapi` bilingual dictionary
    Youdao,
}

impl SourceKind {
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "self-hosted" | "self_hosted" | "translate-api" => Some(SourceKind::SelfHosted),
            "iciba" => Some(SourceKind::Iciba),
            "google" => Some(SourceKind::Google),
            "youdao" => Some(SourceKind::Youdao),
            _ => None,
        }
    }
}

/// Thin GET-only HTTP client shared by every adapter
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
}

impl HttpClient {
    pub fn new(request_timeout: Duration) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .timeout(request_timeout)
            .user_agent(concat!("glosstip/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { inner })
    }

    /// GET `url` with URL-encoded `query` parameters and return the body
    pub async fn get_text(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> std::result::Result<String, LookupError> {
        let response = self
            .inner
            .get(url)
            .query(query)
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        response
            .text()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))
    }
}

/// Join a base URL and an absolute path without doubling the slash
pub(crate) fn endpoint(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

/// Instantiate the adapter for `kind` from configuration
pub fn build_adapter(
    kind: SourceKind,
    config: &LookupConfig,
    client: HttpClient,
) -> Result<Arc<dyn SourceAdapter>> {
    let endpoints = &config.endpoints;
    let adapter: Arc<dyn SourceAdapter> = match kind {
        SourceKind::SelfHosted => {
            let base = endpoints.translate_api.clone().ok_or_else(|| {
                GlossError::Config(
                    "self-hosted source needs GLOSSTIP_TRANSLATE_API_URL".to_string(),
                )
            })?;
            let secret = config.translate_api_secret.clone().unwrap_or_default();
            if secret.is_empty() {
                tracing::warn!("Self-hosted translate API configured without a secret");
            }
            Arc::new(self_hosted::SelfHostedTranslate::new(
                client,
                base,
                config.source_lang.clone(),
                config.target_lang.clone(),
                secret,
            ))
        }
        SourceKind::Iciba => Arc::new(iciba::Iciba::new(client, endpoints.iciba.clone())),
        SourceKind::Google => Arc::new(google::GoogleTranslate::new(
            client,
            endpoints.google.clone(),
            config.target_lang.clone(),
        )),
        SourceKind::Youdao => Arc::new(youdao::Youdao::new(client, endpoints.youdao.clone())),
    };

    Ok(adapter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_error_status_mapping() {
        assert_eq!(
            LookupError::Transport("x".into()).status(),
            LookupStatus::TransportError
        );
        assert_eq!(
            LookupError::Parse("x".into()).status(),
            LookupStatus::ParseError
        );
        assert_eq!(LookupError::Empty.status(), LookupStatus::Empty);
    }

    #[test]
    fn test_lookup_error_display() {
        assert_eq!(
            LookupError::Transport("refused".into()).to_string(),
            "transport error: refused"
        );
        assert_eq!(LookupError::Parse("eof".into()).to_string(), "parse error: eof");
        assert_eq!(LookupError::Empty.to_string(), "empty result");

        let err: LookupError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert!(matches!(err, LookupError::Parse(_)));
    }

    #[test]
    fn test_source_kind_parse() {
        assert_eq!(SourceKind::parse("Google"), Some(SourceKind::Google));
        assert_eq!(SourceKind::parse(" youdao "), Some(SourceKind::Youdao));
        assert_eq!(
            SourceKind::parse("self-hosted"),
            Some(SourceKind::SelfHosted)
        );
        assert_eq!(SourceKind::parse("bing"), None);
    }

    #[test]
    fn test_source_kind_serde_names() {
        let kinds: Vec<SourceKind> =
            serde_json::from_str(r#"["iciba","google","self-hosted"]"#).unwrap();
        assert_eq!(
            kinds,
            vec![SourceKind::Iciba, SourceKind::Google, SourceKind::SelfHosted]
        );
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        assert_eq!(
            endpoint("https://dict.youdao.com/", "/jsonapi"),
            "https://dict.youdao.com/jsonapi"
        );
        assert_eq!(
            endpoint("http://127.0.0.1:8080", "/jsonapi"),
            "http://127.0.0.1:8080/jsonapi"
        );
    }

    #[test]
    fn test_self_hosted_requires_url() {
        let config = LookupConfig::default();
        let client = HttpClient::new(Duration::from_secs(1)).unwrap();
        let result = build_adapter(SourceKind::SelfHosted, &config, client);
        assert!(matches!(result, Err(GlossError::Config(_))));
    }
}

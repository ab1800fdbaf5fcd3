use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use std::time::Duration;

use super::constants::{
    DEFAULT_REQUEST_TIMEOUT_SECS, FAST_SECONDARY_TIMEOUT_MS, MAX_SELECTION_CHARS,
    PATIENT_SECONDARY_TIMEOUT_MS,
};
use crate::error::{GlossError, Result};
use crate::sources::{google, iciba, youdao, DomainGate, SourceKind};

/// Base URLs of the external services; overridable for self-hosting and tests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub translate_api: Option<String>,
    pub iciba: String,
    pub google: String,
    pub youdao: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            translate_api: None,
            iciba: iciba::DEFAULT_BASE_URL.to_string(),
            google: google::DEFAULT_BASE_URL.to_string(),
            youdao: youdao::DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Everything the coordinator needs to know about which sources to query
/// and how
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Ordered by priority: the first entry is the primary source
    pub sources: Vec<SourceKind>,
    /// Start the secondary lookup only after the primary one settled
    pub chained: bool,
    /// Predicate a query must satisfy to reach the primary source
    pub domain_gate: Option<DomainGate>,
    /// Race timeout for the secondary source
    pub secondary_timeout_ms: u64,
    pub request_timeout_secs: u64,
    /// BCP-47 tag of the preferred speech voice
    pub speech_lang: String,
    pub source_lang: String,
    pub target_lang: String,
    pub translate_api_secret: Option<String>,
    pub endpoints: Endpoints,
    /// Speech synthesizer executable; `None` keeps the speaker silent
    pub speech_command: Option<String>,
    pub max_selection_chars: usize,
}

/// The built-in combinations of sources, timeouts and voices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Youdao dictionary only, English voice
    Youdao,
    /// iciba for plain words, then Google with a short race
    IcibaGoogle,
    /// Same chain with a patient race and a Korean voice
    IcibaGoogleKo,
    /// Self-hosted Korean-to-Chinese translate API
    SelfHosted,
}

impl Profile {
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "youdao" => Some(Profile::Youdao),
            "iciba-google" => Some(Profile::IcibaGoogle),
            "iciba-google-ko" => Some(Profile::IcibaGoogleKo),
            "self-hosted" => Some(Profile::SelfHosted),
            _ => None,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Profile::Youdao => "youdao",
            Profile::IcibaGoogle => "iciba-google",
            Profile::IcibaGoogleKo => "iciba-google-ko",
            Profile::SelfHosted => "self-hosted",
        }
    }

    pub const fn all() -> [Profile; 4] {
        [
            Profile::Youdao,
            Profile::IcibaGoogle,
            Profile::IcibaGoogleKo,
            Profile::SelfHosted,
        ]
    }

    pub fn config(&self) -> LookupConfig {
        let base = LookupConfig {
            sources: vec![SourceKind::Iciba, SourceKind::Google],
            chained: true,
            domain_gate: Some(DomainGate::AlphabeticWords),
            secondary_timeout_ms: FAST_SECONDARY_TIMEOUT_MS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            speech_lang: "en-US".to_string(),
            source_lang: "auto".to_string(),
            target_lang: "zh-CN".to_string(),
            translate_api_secret: None,
            endpoints: Endpoints::default(),
            speech_command: Some("espeak-ng".to_string()),
            max_selection_chars: MAX_SELECTION_CHARS,
        };

        match self {
            Profile::IcibaGoogle => base,
            Profile::IcibaGoogleKo => LookupConfig {
                secondary_timeout_ms: PATIENT_SECONDARY_TIMEOUT_MS,
                speech_lang: "ko-KR".to_string(),
                ..base
            },
            Profile::Youdao => LookupConfig {
                sources: vec![SourceKind::Youdao],
                chained: false,
                domain_gate: None,
                ..base
            },
            Profile::SelfHosted => LookupConfig {
                sources: vec![SourceKind::SelfHosted],
                chained: false,
                domain_gate: None,
                speech_lang: "ko-KR".to_string(),
                source_lang: "ko".to_string(),
                target_lang: "zh".to_string(),
                ..base
            },
        }
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Profile::IcibaGoogle.config()
    }
}

impl LookupConfig {
    /// Load configuration from the process environment. A `profile` chosen
    /// on the command line wins over `GLOSSTIP_CONFIG` and `GLOSSTIP_PROFILE`.
    pub fn from_env(profile: Option<Profile>) -> Result<Self> {
        Self::load(profile, |key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_vars<F>(get: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::load(None, get)
    }

    /// Resolution order: `profile`, else `GLOSSTIP_CONFIG` (JSON file), else
    /// `GLOSSTIP_PROFILE`, else the default profile; individual variables
    /// then override single fields.
    pub fn load<F>(profile: Option<Profile>, get: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = if let Some(profile) = profile {
            if let Some(path) = get("GLOSSTIP_CONFIG") {
                tracing::warn!(
                    profile = profile.name(),
                    config = %path,
                    "Command-line profile overrides GLOSSTIP_CONFIG"
                );
            }
            profile.config()
        } else if let Some(path) = get("GLOSSTIP_CONFIG") {
            Self::from_file(&path)?
        } else if let Some(name) = get("GLOSSTIP_PROFILE") {
            Profile::parse(&name)
                .ok_or_else(|| GlossError::Config(format!("unknown profile '{}'", name)))?
                .config()
        } else {
            Self::default()
        };

        if let Some(lang) = get("GLOSSTIP_TARGET_LANG") {
            config.target_lang = lang;
        }

        if let Some(lang) = get("GLOSSTIP_SOURCE_LANG") {
            config.source_lang = lang;
        }

        if let Some(lang) = get("GLOSSTIP_SPEECH_LANG") {
            config.speech_lang = lang;
        }

        if let Some(ms) = get("GLOSSTIP_SECONDARY_TIMEOUT_MS").and_then(|v| v.parse().ok()) {
            config.secondary_timeout_ms = ms;
        }

        if let Some(secs) = get("GLOSSTIP_REQUEST_TIMEOUT_SECONDS").and_then(|v| v.parse().ok())
        {
            config.request_timeout_secs = secs;
        }

        if let Some(url) = get("GLOSSTIP_TRANSLATE_API_URL") {
            config.endpoints.translate_api = Some(url);
        }

        if let Some(secret) = get("GLOSSTIP_TRANSLATE_API_SECRET") {
            config.translate_api_secret = Some(secret);
        }

        if let Some(url) = get("GLOSSTIP_ICIBA_URL") {
            config.endpoints.iciba = url;
        }

        if let Some(url) = get("GLOSSTIP_GOOGLE_URL") {
            config.endpoints.google = url;
        }

        if let Some(url) = get("GLOSSTIP_YOUDAO_URL") {
            config.endpoints.youdao = url;
        }

        if let Some(command) = get("GLOSSTIP_SPEECH_COMMAND") {
            config.speech_command = match command.trim() {
                "" | "none" => None,
                other => Some(other.to_string()),
            };
        }

        config.validate()?;
        Ok(config)
    }

    /// Read a JSON configuration file; missing fields take default values
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config: LookupConfig = serde_json::from_str(&raw)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.sources.is_empty() || self.sources.len() > 2 {
            return Err(GlossError::Config(format!(
                "expected 1 or 2 sources, got {}",
                self.sources.len()
            )));
        }

        if self.chained && self.sources.len() != 2 {
            return Err(GlossError::Config(
                "chained lookup needs exactly two sources".to_string(),
            ));
        }

        if self.sources.len() == 2 && self.secondary_timeout_ms == 0 {
            return Err(GlossError::Config(
                "secondary_timeout_ms must be greater than zero".to_string(),
            ));
        }

        if self.request_timeout_secs == 0 {
            return Err(GlossError::Config(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }

        if self.max_selection_chars == 0 {
            return Err(GlossError::Config(
                "max_selection_chars must be greater than zero".to_string(),
            ));
        }

        if let Some(gate) = &self.domain_gate {
            gate.compile()?;
        }

        Ok(())
    }

    pub fn secondary_timeout(&self) -> Duration {
        Duration::from_millis(self.secondary_timeout_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

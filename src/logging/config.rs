use std::env;

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Custom log directory path (overrides auto-detection)
    pub custom_log_dir: Option<String>,

    /// Console filter used when `RUST_LOG` is unset
    pub console_log_level: String,

    /// Filter for the JSON file log (default: "glosstip=debug")
    pub file_log_level: String,

    /// Write the JSON application log (default: false)
    pub file_enabled: bool,

    /// Rolled files older than this are deleted at startup (default: 14)
    pub retention_days: u32,

    /// Prune old files at startup (default: true)
    pub enable_cleanup: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            custom_log_dir: None,
            console_log_level: "glosstip=info".to_string(),
            file_log_level: "glosstip=debug".to_string(),
            file_enabled: false,
            retention_days: 14,
            enable_cleanup: true,
        }
    }
}

impl LogConfig {
    /// Load logging configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load logging configuration through an arbitrary variable lookup
    pub fn from_vars<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = get("GLOSSTIP_LOG_DIR") {
            config.custom_log_dir = Some(dir);
            // Naming a directory implies wanting the file
            config.file_enabled = true;
        }

        if let Some(level) = get("GLOSSTIP_FILE_LOG_LEVEL") {
            config.file_log_level = level;
        }

        if let Some(val) = get("GLOSSTIP_FILE_LOG") {
            config.file_enabled = parse_flag(&val);
        }

        if let Some(days) = get("GLOSSTIP_LOG_RETENTION_DAYS").and_then(|v| v.parse().ok()) {
            config.retention_days = days;
        }

        if let Some(val) = get("GLOSSTIP_LOG_CLEANUP") {
            config.enable_cleanup = parse_flag(&val);
        }

        config
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

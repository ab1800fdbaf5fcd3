pub mod cleanup;
pub mod config;
pub mod paths;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

pub use config::LogConfig;

/// File name prefix of the rolling application log
pub const LOG_FILE_PREFIX: &str = "glosstip.log";

/// Initialize logging: a compact console stream on stderr, plus a JSON
/// application log in daily rolling files when enabled.
///
/// Keep the returned guard alive for as long as the program runs; dropping
/// it flushes and closes the log file.
pub fn init_logging(config: &LogConfig) -> Result<Option<WorkerGuard>, Box<dyn std::error::Error>> {
    // Console layer. stdout is reserved for the tooltip board.
    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .with_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.console_log_level)),
        );

    if !config.file_enabled {
        tracing_subscriber::registry().with(console_layer).init();
        return Ok(None);
    }

    let log_dir = paths::get_log_directory(config.custom_log_dir.as_deref())?;
    let appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_writer(writer)
        .with_filter(EnvFilter::new(&config.file_log_level));

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    tracing::debug!("Log directory: {:?}", log_dir);

    if config.enable_cleanup {
        match cleanup::prune_old_logs(&log_dir, config.retention_days) {
            Ok(0) => {}
            Ok(removed) => tracing::info!(
                removed,
                retention_days = config.retention_days,
                "Pruned old log files"
            ),
            Err(e) => tracing::warn!(error = %e, log_dir = ?log_dir, "Log cleanup failed"),
        }
    }

    Ok(Some(guard))
}

/// Log platform-specific information on startup
pub fn log_platform_info() {
    tracing::debug!(
        platform = std::env::consts::OS,
        architecture = std::env::consts::ARCH,
        version = env!("CARGO_PKG_VERSION"),
        "glosstip starting"
    );
}

use std::fs;
use std::io;
use std::path::Path;
use std::time::{Duration, SystemTime};

use super::LOG_FILE_PREFIX;

/// Delete rolled log files older than the retention period.
///
/// Only files named after the application log are touched. Returns how
/// many were removed.
pub fn prune_old_logs(log_dir: &Path, retention_days: u32) -> io::Result<usize> {
    let cutoff_time = SystemTime::now() - Duration::from_secs(retention_days as u64 * 86400);
    let mut deleted_count = 0;

    for entry in fs::read_dir(log_dir)? {
        let entry = entry?;
        let path = entry.path();

        let is_log = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with(LOG_FILE_PREFIX));
        if !is_log {
            continue;
        }

        let metadata = entry.metadata()?;
        if !metadata.is_file() || metadata.modified()? >= cutoff_time {
            continue;
        }

        match fs::remove_file(&path) {
            Ok(()) => {
                deleted_count += 1;
                tracing::debug!(path = ?path, size_bytes = metadata.len(), "Deleted old log file");
            }
            Err(e) => {
                tracing::warn!(path = ?path, error = %e, "Failed to delete old log file");
            }
        }
    }

    Ok(deleted_count)
}

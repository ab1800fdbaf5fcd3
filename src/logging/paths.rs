use std::env;
use std::fs;
use std::path::PathBuf;

/// Get the log directory
///
/// Resolution order:
/// 1. Custom directory from parameter (if provided)
/// 2. Per-user data directory (`dirs::data_local_dir`)
/// 3. `~/.local/share` style fallback under the home directory
/// 4. Temp directory as last resort
pub fn get_log_directory(custom_dir: Option<&str>) -> Result<PathBuf, std::io::Error> {
    if let Some(dir) = custom_dir {
        return ensure_directory_exists(PathBuf::from(dir));
    }

    ensure_directory_exists(default_log_dir())
}

fn default_log_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        return data_dir.join("glosstip").join("logs");
    }

    if let Some(home_dir) = dirs::home_dir() {
        return home_dir.join(".glosstip").join("logs");
    }

    env::temp_dir().join("glosstip_logs")
}

fn ensure_directory_exists(path: PathBuf) -> Result<PathBuf, std::io::Error> {
    if !path.exists() {
        fs::create_dir_all(&path)?;
    }
    Ok(path)
}

//! File logging setup
//!
//! The screen owns the terminal, so log records never go to stdout or stderr.
//! When enabled in the `[logging]` config section, records produced by the
//! `log` macros are written to a file under the local data directory.

use crate::config::LoggingConfig;
use crate::constants::{APP_DIR_NAME, LOG_FILE_NAME};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Path of the log file: `<data_local_dir>/todoview/todoview.log`
pub fn get_log_file_path() -> Result<PathBuf> {
    dirs::data_local_dir()
        .or_else(dirs::cache_dir)
        .map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory for log file"))
}

/// Format a single log line the way it appears in the file
pub fn format_line(timestamp: &str, level: log::Level, target: &str, message: &std::fmt::Arguments) -> String {
    format!("[{}] [{}] [{}] {}", timestamp, level, target, message)
}

/// Install the global logger from configuration.
///
/// Returns the log file path when logging was enabled, `None` otherwise.
/// Must be called at most once per process.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let level = config.level_filter()?;
    let path = get_log_file_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

    fern::Dispatch::new()
        .format(|out, message, record| {
            let timestamp = chrono::Local::now().format("%H:%M:%S%.3f").to_string();
            out.finish(format_args!(
                "{}",
                format_line(&timestamp, record.level(), record.target(), message)
            ))
        })
        .level(level)
        .chain(file)
        .apply()
        .context("Failed to install logger")?;

    log::info!("Logging to {}", path.display());
    Ok(Some(path))
}

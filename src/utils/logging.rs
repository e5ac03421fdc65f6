//! File logging setup
//!
//! The TUI owns the terminal, so diagnostics go to a daily rolling file
//! instead of stderr. `RUST_LOG` overrides the default `info` filter.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const LOG_FILE_PREFIX: &str = "brandforge.log";

/// Default log directory: `<data_local_dir>/brandforge/logs`
pub fn default_log_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("brandforge").join("logs"))
}

/// Install the global subscriber writing to `log_dir` (or the default).
/// Returns the directory in use.
pub fn init_logging(log_dir: Option<&Path>) -> Result<PathBuf> {
    let dir = match log_dir {
        Some(dir) => dir.to_path_buf(),
        None => default_log_dir().context("Could not determine a local data directory")?,
    };
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let file_appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .try_init()
        .context("Logging already initialized")?;

    tracing::info!(dir = %dir.display(), "Logging initialized");
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_dir_layout() {
        if let Some(dir) = default_log_dir() {
            assert!(dir.ends_with("brandforge/logs"));
        }
    }
}

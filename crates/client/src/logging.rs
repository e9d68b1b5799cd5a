//! Tracing subscriber setup for the binary.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::LogConfig;

const LOG_FILE_PREFIX: &str = "scoreboard.log";

/// Keeps the file writer flushing. Hold it until the process exits.
#[must_use]
pub struct LoggingGuard {
    _file: Option<WorkerGuard>,
}

/// Log to stderr, and to a daily rolling file when enabled.
///
/// stdout is reserved for outbound sync messages.
pub fn setup_logging(config: &LogConfig) -> Result<LoggingGuard> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    let (file_layer, guard, log_dir) = if config.to_file {
        let log_dir = config.dir.clone().unwrap_or_else(default_log_dir);
        let (writer, guard) = file_writer(&log_dir)?;
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_ansi(false);
        (Some(layer), Some(guard), Some(log_dir))
    } else {
        (None, None, None)
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    if let Some(dir) = log_dir {
        tracing::info!("Log files: {}/{}.*", dir.display(), LOG_FILE_PREFIX);
    }

    Ok(LoggingGuard { _file: guard })
}

fn file_writer(
    log_dir: &Path,
) -> Result<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;
    let appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    Ok(tracing_appender::non_blocking(appender))
}

/// Get the platform-specific log directory
pub fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "scoreboard")
        .map(|dirs| dirs.data_local_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("scoreboard").join("logs"))
}

//! Tracing subscriber setup.
//!
//! Console output goes to stderr so command output on stdout stays
//! machine-readable. When file logging is enabled, a daily rolling file is
//! written under the logs directory as well.

use anyhow::{Result, anyhow};
use garage_core::config::LoggingSettings;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE_PREFIX: &str = "garage-console.log";

/// Keeps the file writer flushing until dropped.
pub struct LogGuard {
    _file: Option<WorkerGuard>,
}

/// Builds the filter: `RUST_LOG` wins, otherwise the configured level.
fn filter(settings: &LoggingSettings, verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.level))
}

pub fn init(settings: &LoggingSettings, logs_dir: &Path, verbose: bool) -> Result<LogGuard> {
    let (file_layer, file_guard) = if settings.log_to_file {
        std::fs::create_dir_all(logs_dir)?;
        let appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let layer = fmt::layer().with_ansi(false).with_writer(writer);
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter(settings, verbose))
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;

    Ok(LogGuard { _file: file_guard })
}

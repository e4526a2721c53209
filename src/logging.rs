//! File logging, so tracing output never lands on the terminal UI.

use std::path::Path;

use anyhow::{Result, anyhow};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Installs a daily-rolling log file under `dir`. Keep the returned guard
/// alive for the whole program or buffered lines are lost on exit.
pub fn init_logging(dir: &Path, default_level: &str) -> Result<WorkerGuard> {
    let appender = tracing_appender::rolling::daily(dir, "cricket-scorer.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialise logging: {}", e))?;

    Ok(guard)
}

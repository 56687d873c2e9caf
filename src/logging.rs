use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Log filter variable
pub const LOG_ENV: &str = "FOCUSUP_LOG";
const DEFAULT_FILTER: &str = "focusup=info";

/// Install the tracing subscriber.
///
/// The TUI owns the terminal, so events go to an append-only log file.
pub fn init(log_path: &Path) -> Result<()> {
    if let Some(dir) = log_path.parent() {
        crate::config::ensure_dir(dir)?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}

use std::env;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "TYPIST_LOG";
const DEFAULT_FILTER: &str = "typist=info";

/// `$TYPIST_LOG` wins over the configured path.
pub fn log_path(configured: Option<&str>) -> Option<PathBuf> {
    env::var(LOG_ENV)
        .ok()
        .filter(|p| !p.is_empty())
        .or_else(|| configured.filter(|p| !p.is_empty()).map(str::to_string))
        .map(PathBuf::from)
}

/// Install a file-backed subscriber. Stdout belongs to the terminal UI, so
/// without a log path nothing is installed and events are discarded.
pub fn init(configured: Option<&str>) -> Result<Option<PathBuf>> {
    let Some(path) = log_path(configured) else {
        return Ok(None);
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    // A second install (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();

    Ok(Some(path))
}

//! File-backed tracing setup.
//!
//! The TUI owns stdout, so log events go to
//! `$XDG_STATE_HOME/wheelpick/wheelpick.log` instead of the terminal.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::UtcTime;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "WHEELPICK_LOG";
const LOG_FILE: &str = "wheelpick.log";
const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber.
///
/// Returns the appender guard, which must live until exit so buffered events
/// are flushed. Returns None when the log directory is unusable; the app then
/// runs without logging.
pub fn init() -> Option<WorkerGuard> {
    let dir = log_dir().ok()?;
    fs::create_dir_all(&dir).ok()?;

    let appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_timer(UtcTime::rfc_3339())
        .try_init()
        .ok()?;

    tracing::debug!(dir = %dir.display(), "logger:initialized");
    Some(guard)
}

/// Get the directory log files are written to.
///
/// Checks XDG_STATE_HOME first, falls back to ~/.local/state.
fn log_dir() -> Result<PathBuf> {
    if let Ok(state_home) = std::env::var("XDG_STATE_HOME") {
        return Ok(PathBuf::from(state_home).join("wheelpick"));
    }

    home::home_dir()
        .map(|home| home.join(".local/state/wheelpick"))
        .context("Could not determine state directory")
}

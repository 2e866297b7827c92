//! Tracing setup
//!
//! The terminal belongs to the UI, so events go to
//! `~/.apihub-tui/apihub.log` only, without colours.

use crate::config::Config;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable overriding the configured log filter
pub const LOG_ENV: &str = "APIHUB_LOG";

pub fn log_path() -> Option<PathBuf> {
    Config::config_dir().map(|dir| dir.join("apihub.log"))
}

/// Install the global subscriber. `default_level` is used when `APIHUB_LOG`
/// is unset or unparsable.
pub fn initialize(default_level: &str) -> anyhow::Result<PathBuf> {
    let log_path =
        log_path().ok_or_else(|| anyhow::anyhow!("Could not determine log directory"))?;
    if let Some(dir) = log_path.parent() {
        fs::create_dir_all(dir)
            .map_err(|e| anyhow::anyhow!("Cannot create log directory: {}", e))?;
    }

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .map_err(|e| anyhow::anyhow!("Cannot open log file {}: {}", log_path.display(), e))?;

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Arc::new(log_file))
                .with_ansi(false),
        )
        .try_init()?;

    Ok(log_path)
}

//! File-backed tracing setup
//!
//! The terminal belongs to the TUI, so events go to a log file instead of
//! stderr. `RUST_LOG` takes precedence over the configured level.

use crate::config::LoggingConfig;
use crate::error::{GalleryError, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Returns the path being written to.
pub fn init(config: &LoggingConfig) -> Result<PathBuf> {
    let path = config.log_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&path)?;

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level)
            .map_err(|e| GalleryError::Logging(format!("bad level '{}': {e}", config.level)))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| GalleryError::Logging(format!("tracing init failed: {e}")))?;

    Ok(path)
}

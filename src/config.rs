//! Application configuration
//!
//! Loaded once at start-up from TOML. Every field has a default, so a missing
//! file or a partial file is fine; a malformed file is an error.

use crate::catalog::builtin::CatalogTab;
use crate::error::{GalleryError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Name of the per-user config directory and the local fallback file stem
pub const APP_NAME: &str = "tui-gallery";

const MAX_TICK_RATE_MS: u64 = 10_000;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub logging: LoggingConfig,
    pub demos: DemoConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Interval between demo ticks
    pub tick_rate_ms: u64,
    pub initial_tab: CatalogTab,
    /// Show entry descriptions under titles in the catalog list
    pub show_descriptions: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            initial_tab: CatalogTab::Controls,
            show_descriptions: true,
        }
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, overridden by `RUST_LOG`
    pub level: String,
    /// Log file; defaults to the per-user cache directory
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl LoggingConfig {
    pub fn log_path(&self) -> PathBuf {
        match &self.file {
            Some(path) => path.clone(),
            None => dirs::cache_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join(APP_NAME)
                .join("gallery.log"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Seed for all mock data generators
    pub seed: u64,
    /// Number of points kept by streaming charts
    pub chart_window: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed: 7,
            chart_window: 120,
        }
    }
}

impl Config {
    /// Find a config file in standard locations
    pub fn find_config_path() -> Option<PathBuf> {
        // Check in order: <config_dir>/tui-gallery, cwd
        let candidates = [
            dirs::config_dir().map(|p| p.join(APP_NAME).join("config.toml")),
            Some(PathBuf::from(format!("{}.toml", APP_NAME))),
        ];

        candidates.into_iter().flatten().find(|c| c.exists())
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load `explicit` if given, otherwise the first file found by
    /// [`find_config_path`](Self::find_config_path), otherwise defaults.
    ///
    /// Returns the path that was read alongside the config.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        let path = match explicit {
            Some(p) => Some(p.to_path_buf()),
            None => Self::find_config_path(),
        };
        match path {
            Some(p) => Ok((Self::load_from_path(&p)?, Some(p))),
            None => Ok((Self::default(), None)),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.ui.tick_rate_ms == 0 || self.ui.tick_rate_ms > MAX_TICK_RATE_MS {
            return Err(GalleryError::InvalidConfig(format!(
                "ui.tick_rate_ms must be between 1 and {}, got {}",
                MAX_TICK_RATE_MS, self.ui.tick_rate_ms
            )));
        }
        if self.demos.chart_window < 2 {
            return Err(GalleryError::InvalidConfig(format!(
                "demos.chart_window must be at least 2, got {}",
                self.demos.chart_window
            )));
        }
        if self.logging.level.trim().is_empty() {
            return Err(GalleryError::InvalidConfig(
                "logging.level must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

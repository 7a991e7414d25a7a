//! Driver configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for the terminal driver.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct DriverConfig {
    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Print views as JSON.
    #[serde(default)]
    json: bool,

    /// Print the history labels after every accepted command.
    #[serde(default = "default_show_history")]
    show_history: bool,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

fn default_show_history() -> bool {
    true
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            json: false,
            show_history: default_show_history(),
        }
    }
}

impl DriverConfig {
    /// Loads configuration from a TOML file.
    ///
    /// A missing file yields the defaults; an unreadable or malformed one is
    /// an error.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("No config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(json = config.json, show_history = config.show_history, "Config loaded");
        Ok(config)
    }

    /// Returns the config with JSON output forced on.
    pub fn with_json(mut self, json: bool) -> Self {
        self.json |= json;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

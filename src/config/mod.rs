//! Configuration system
//!
//! TOML-based settings for the monitoring loop and alert engine. The rule
//! catalog itself is static and deliberately not configurable; settings
//! cover engine behavior only.

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Whether alerting is enabled globally
    pub enabled: bool,
    /// Re-evaluation cadence for the watch loop, in seconds
    pub poll_interval_secs: u64,
    /// Maximum alerts to keep in history per hive
    pub max_history: usize,
    /// Emit ANSI colors in terminal notifications
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enabled: true,
            poll_interval_secs: 10,
            max_history: crate::alerts::DEFAULT_MAX_HISTORY,
            color: true,
        }
    }
}

impl Settings {
    /// Load settings from file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_str = path.as_ref().display().to_string();
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|_| ConfigError::FileNotFound(path_str.clone()))?;

        Ok(toml::from_str(&contents).map_err(|e| ConfigError::ParseError(format!("{}", e)))?)
    }

    /// Save settings to file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::ParseError(format!("Failed to serialize: {}", e)))?;

        fs::write(path.as_ref(), contents)?;

        Ok(())
    }

    /// Get default configuration path
    pub fn default_path() -> PathBuf {
        if let Some(config_dir) = dirs::config_dir() {
            config_dir.join("hivemon").join("hivemon.toml")
        } else {
            PathBuf::from("hivemon.toml")
        }
    }

    /// Load from the given path, or fall back to defaults when the file
    /// does not exist
    pub fn load_or_default(path: Option<&str>) -> Result<Self> {
        let path = path
            .map(PathBuf::from)
            .unwrap_or_else(Self::default_path);

        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate settings values
    pub fn validate(&self) -> Result<()> {
        if self.poll_interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "poll_interval_secs".to_string(),
                message: "must be at least 1 second".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::AppConfig;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl AppConfig {
    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `AppConfig::default()`.
    /// - If the file exists, parses it as TOML and validates.
    /// - Returns an error if reading, parsing, or validation fails.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: AppConfig = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The API base URL is non-empty
    /// - The counter step is positive
    /// - The counter bounds are ordered when both are set
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "api.base_url must not be empty".to_string(),
            });
        }

        if self.counter.step < 1 {
            return Err(ConfigError::ValidationError {
                message: format!("counter.step must be positive, got {}", self.counter.step),
            });
        }

        if let (Some(min), Some(max)) = (self.counter.min, self.counter.max) {
            if min > max {
                return Err(ConfigError::ValidationError {
                    message: format!("counter.min ({}) exceeds counter.max ({})", min, max),
                });
            }
        }

        Ok(())
    }
}

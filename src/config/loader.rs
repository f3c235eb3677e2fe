use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use regex::Regex;
use thiserror::Error;

use crate::config::types::{Config, PinConfig};
use crate::pin::{CharRule, PinFieldOptions};

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

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/pincode/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("pincode").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.pin.criteria()?;
        Ok(())
    }
}

impl PinConfig {
    /// Compiled `regex_criteria`.
    pub fn criteria(&self) -> Result<Regex, ConfigError> {
        Regex::new(&self.regex_criteria).map_err(|e| ConfigError::ValidationError {
            message: format!("Invalid regex_criteria '{}': {}", self.regex_criteria, e),
        })
    }

    /// Build widget options from this section.
    pub fn to_options(&self) -> Result<PinFieldOptions, ConfigError> {
        Ok(PinFieldOptions {
            length: self.length,
            rule: CharRule::new(self.mode, self.criteria()?),
            initial_value: self.initial_value.clone(),
            secret: self.secret,
            secret_delay: self.secret_delay_ms.map(Duration::from_millis),
            disabled: self.disabled,
            auto_focus: self.auto_focus,
            auto_select: self.auto_select,
            mask_char: self.mask_char,
            placeholder: self.placeholder,
            label: self.label.clone(),
        })
    }
}

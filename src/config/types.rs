use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::pin::cell::DEFAULT_MASK_CHAR;
use crate::pin::{InputMode, PinLength, DEFAULT_CRITERIA};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub pin: PinConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Widget configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PinConfig {
    /// Number of cells: 4 or 6.
    pub length: PinLength,
    /// `"numeric"` or `"free"`.
    pub mode: InputMode,
    /// Pattern a free-mode keystroke must match.
    pub regex_criteria: String,
    /// Mask characters once typed.
    pub secret: bool,
    /// Milliseconds a typed character stays visible before masking.
    pub secret_delay_ms: Option<u64>,
    pub disabled: bool,
    /// Focus the first cell on startup.
    pub auto_focus: bool,
    /// Select a cell's character on focus so typing replaces it.
    pub auto_select: bool,
    pub initial_value: Option<String>,
    pub mask_char: char,
    pub placeholder: Option<char>,
    pub label: Option<String>,
}

/// File logging settings. Off unless `file` (or `PINCODE_LOG`) is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for PinConfig {
    fn default() -> Self {
        Self {
            length: PinLength::default(),
            mode: InputMode::default(),
            regex_criteria: DEFAULT_CRITERIA.to_string(),
            secret: false,
            secret_delay_ms: None,
            disabled: false,
            auto_focus: true,
            auto_select: true,
            initial_value: None,
            mask_char: DEFAULT_MASK_CHAR,
            placeholder: None,
            label: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

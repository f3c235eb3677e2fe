use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};
use crate::pin::{InputMode, PinLength};

/// Segmented PIN/OTP entry in the terminal.
#[derive(Debug, Parser)]
#[command(name = "pincode", version, about)]
pub struct Cli {
    /// Config file (default: ~/.config/pincode/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of cells (4 or 6)
    #[arg(long)]
    pub length: Option<usize>,

    /// Accept digits only
    #[arg(long)]
    pub numeric: bool,

    /// Mask typed characters
    #[arg(long)]
    pub secret: bool,

    /// Milliseconds a typed character stays visible before masking
    #[arg(long, value_name = "MS")]
    pub secret_delay: Option<u64>,

    /// Prefill the cells
    #[arg(long, value_name = "CODE")]
    pub initial: Option<String>,

    /// Render the widget read-only
    #[arg(long)]
    pub disabled: bool,

    /// Do not select a cell's character on focus
    #[arg(long)]
    pub no_auto_select: bool,

    /// Title shown above the cells
    #[arg(long)]
    pub label: Option<String>,
}

impl Cli {
    /// Overlay command-line flags on top of file configuration.
    pub fn apply(&self, config: &mut Config) -> Result<(), ConfigError> {
        let pin = &mut config.pin;
        if let Some(length) = self.length {
            pin.length = PinLength::try_from(length).map_err(|e| ConfigError::ValidationError {
                message: e.to_string(),
            })?;
        }
        if self.numeric {
            pin.mode = InputMode::Numeric;
        }
        if self.secret {
            pin.secret = true;
        }
        if let Some(delay) = self.secret_delay {
            pin.secret_delay_ms = Some(delay);
        }
        if let Some(initial) = &self.initial {
            pin.initial_value = Some(initial.clone());
        }
        if self.disabled {
            pin.disabled = true;
        }
        if self.no_auto_select {
            pin.auto_select = false;
        }
        if let Some(label) = &self.label {
            pin.label = Some(label.clone());
        }
        Ok(())
    }
}

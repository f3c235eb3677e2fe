//! Configuration management for the PIN widget host.
//!
//! This module provides types and functions for loading, validating,
//! and converting configuration into widget options.

pub mod loader;
pub mod types;

pub use loader::ConfigError;
pub use types::{Config, LoggingConfig, PinConfig};

//! Tests for command-line overrides.

use clap::Parser;
use pincode::cli::Cli;
use pincode::config::{Config, ConfigError};
use pincode::pin::{InputMode, PinLength};

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("pincode").chain(args.iter().copied())).unwrap()
}

#[test]
fn test_no_flags_leave_config_untouched() {
    let mut config = Config::default();
    parse(&[]).apply(&mut config).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_flags_override_config() {
    let mut config = Config::default();
    parse(&[
        "--length",
        "6",
        "--numeric",
        "--secret",
        "--secret-delay",
        "250",
        "--initial",
        "42",
        "--no-auto-select",
        "--label",
        "PIN",
    ])
    .apply(&mut config)
    .unwrap();

    assert_eq!(config.pin.length, PinLength::Six);
    assert_eq!(config.pin.mode, InputMode::Numeric);
    assert!(config.pin.secret);
    assert_eq!(config.pin.secret_delay_ms, Some(250));
    assert_eq!(config.pin.initial_value.as_deref(), Some("42"));
    assert!(!config.pin.auto_select);
    assert_eq!(config.pin.label.as_deref(), Some("PIN"));
    assert!(!config.pin.disabled);
}

#[test]
fn test_invalid_length_is_rejected() {
    let mut config = Config::default();
    match parse(&["--length", "5"]).apply(&mut config) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("got 5"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_config_flag_is_captured() {
    let cli = parse(&["--config", "/tmp/custom.toml"]);
    assert_eq!(
        cli.config.as_deref(),
        Some(std::path::Path::new("/tmp/custom.toml"))
    );
}

#[test]
fn test_unknown_flag_fails() {
    assert!(Cli::try_parse_from(["pincode", "--backend", "x"]).is_err());
}

use pincode::config::{Config, ConfigError, LoggingConfig, PinConfig};
use pincode::pin::{InputMode, PinLength, DEFAULT_CRITERIA};
use std::time::Duration;

/// Test that Config::default() produces the expected values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.pin.length, PinLength::Four);
    assert_eq!(config.pin.mode, InputMode::Free);
    assert_eq!(config.pin.regex_criteria, DEFAULT_CRITERIA);
    assert!(!config.pin.secret);
    assert!(config.pin.secret_delay_ms.is_none());
    assert!(config.pin.auto_focus);
    assert!(config.pin.auto_select);
    assert_eq!(config.pin.mask_char, '•');
    assert_eq!(config.logging, LoggingConfig::default());
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("pincode/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_full_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[pin]
length = 6
mode = "numeric"
secret = true
secret_delay_ms = 500
initial_value = "12"
placeholder = "_"
label = "One-time code"

[logging]
level = "debug"
file = "/tmp/pincode.log"
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.pin.length, PinLength::Six);
    assert_eq!(config.pin.mode, InputMode::Numeric);
    assert!(config.pin.secret);
    assert_eq!(config.pin.secret_delay_ms, Some(500));
    assert_eq!(config.pin.placeholder, Some('_'));
    assert_eq!(config.logging.level, "debug");

    let options = config.pin.to_options().unwrap();
    assert_eq!(options.length.get(), 6);
    assert_eq!(options.secret_delay, Some(Duration::from_millis(500)));
    assert_eq!(options.rule.mode(), InputMode::Numeric);
    assert_eq!(options.initial_value.as_deref(), Some("12"));
    assert_eq!(options.label.as_deref(), Some("One-time code"));
}

#[test]
fn test_partial_pin_section_keeps_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[pin]\nsecret = true\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert!(config.pin.secret);
    assert_eq!(config.pin.length, PinLength::Four);
    assert!(config.pin.auto_select);
}

#[test]
fn test_invalid_length_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[pin]\nlength = 5\n").unwrap();

    match Config::load_from(&path) {
        Err(ConfigError::ParseError { source, .. }) => {
            assert!(source.to_string().contains("PIN length must be 4 or 6"));
        }
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

#[test]
fn test_invalid_regex_fails_validation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[pin]\nregex_criteria = \"[a-\"\n").unwrap();

    match Config::load_from(&path) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("regex_criteria"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_unreadable_path_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    // A directory exists but cannot be read as a file.
    match Config::load_from(dir.path()) {
        Err(ConfigError::ReadError { path, .. }) => assert_eq!(path, dir.path()),
        other => panic!("Expected ReadError, got {:?}", other),
    }
}

#[test]
fn test_custom_criteria_flows_into_rule() {
    let pin = PinConfig {
        regex_criteria: "^[0-7]$".to_string(),
        ..PinConfig::default()
    };
    let options = pin.to_options().unwrap();
    assert_eq!(options.rule.apply("5"), "5");
    assert_eq!(options.rule.apply("8"), "");
}

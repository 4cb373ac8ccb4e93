//! Unit tests for configuration validation.

use rotary_scanner::config::{parse_config, validate_config, ScannerConfig};
use rotary_scanner::error::{ConfigError, Error};

/// Test that the factory configuration is valid.
#[test]
fn test_default_config_is_valid() {
    assert!(validate_config(&ScannerConfig::default()).is_ok());
}

/// Test validation fails for a scan without samples per revolution.
#[test]
fn test_zero_steps_per_revolution() {
    let toml_str = r#"
[scan]
steps_per_revolution = 0
"#;

    let result = parse_config(toml_str);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidStepsPerRevolution(0)))
    ));
}

/// Test validation fails when a pin drives two coils of one motor.
#[test]
fn test_duplicate_pin_within_motor() {
    let toml_str = r#"
[motors.vertical]
pins = [4, 17, 17, 22]
"#;

    let config: ScannerConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let result = validate_config(&config);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::DuplicatePin(17)))
    ));
}

/// Test validation fails for a zero ADC scale.
#[test]
fn test_zero_volts_per_count() {
    let toml_str = r#"
[sensor]
volts_per_count = 0.0
"#;

    assert!(parse_config(toml_str).is_err());
}

/// Test that errors render a readable message.
#[test]
fn test_error_display() {
    let err = Error::Config(ConfigError::DuplicatePin(17));
    assert_eq!(
        err.to_string(),
        "Configuration error: GPIO pin 17 is assigned more than once"
    );
}

//! Unit tests for TOML configuration parsing.

use rotary_scanner::config::{parse_config, ScannerConfig};
use rotary_scanner::sensor::Calibration;

/// Test parsing the shipped scanner configuration.
#[test]
fn test_parse_shipped_config() {
    let config = parse_config(include_str!("../../scanner.toml")).expect("Failed to parse TOML");

    assert_eq!(config.scan.layer_max, 105);
    assert_eq!(config.scan.steps_per_revolution, 256);
    assert_eq!(config.scan.rotary_increment, 16);
    assert_eq!(config.scan.vertical_increment, 600);
    assert_eq!(config.scan.output.as_str(), "scanfile.txt");
    assert_eq!(config.motors.vertical.pins, [4, 17, 27, 22]);
    assert_eq!(config.motors.platform.pins, [5, 6, 13, 19]);
    assert_eq!(config.sensor.address, 0x4B);
    assert_eq!(config.sensor.command, 0x8F);
    assert_eq!(config.sensor.samples, 50);
    assert_eq!(config.sensor.calibration, Calibration::GP2Y0A51SK0F);
}

/// Test that the shipped configuration equals the built-in defaults.
#[test]
fn test_shipped_config_matches_defaults() {
    let parsed = parse_config(include_str!("../../scanner.toml")).unwrap();
    let defaults = ScannerConfig::default();

    assert_eq!(parsed.scan, defaults.scan);
    assert_eq!(parsed.sensor, defaults.sensor);
    assert_eq!(parsed.motors.vertical.pins, defaults.motors.vertical.pins);
}

/// Test parsing a motor section with custom speed.
#[test]
fn test_parse_slow_vertical_motor() {
    let toml_str = r#"
[motors.vertical]
name = "slow_lift"
pins = [20, 21, 26, 16]
speed = 3
"#;

    let config: ScannerConfig = toml::from_str(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.motors.vertical.name.as_str(), "slow_lift");
    assert_eq!(config.motors.vertical.speed, 3);
    // Untouched motor keeps factory wiring
    assert_eq!(config.motors.platform.pins, [5, 6, 13, 19]);
}

/// Test parsing a custom calibration polynomial.
#[test]
fn test_parse_custom_calibration() {
    let toml_str = r#"
[sensor]
volts_per_count = 0.0129
calibration = [0.0, 1.5, -2.0, 40.0]
"#;

    let config: ScannerConfig = toml::from_str(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.sensor.calibration.coefficients(), [0.0, 1.5, -2.0, 40.0]);
    assert!((config.sensor.volts_per_count - 0.0129).abs() < 1e-6);
    assert_eq!(config.sensor.samples, 50);
}

/// Test that a motor without pins is rejected.
#[test]
fn test_motor_without_pins_rejected() {
    let toml_str = r#"
[motors.platform]
name = "no_pins"
"#;

    let result: Result<ScannerConfig, _> = toml::from_str(toml_str);
    assert!(result.is_err(), "pins are required for an explicit motor section");
}

/// Test that a three-coil pin list is rejected.
#[test]
fn test_wrong_pin_count_rejected() {
    let toml_str = r#"
[motors.platform]
pins = [5, 6, 13]
"#;

    let result: Result<ScannerConfig, _> = toml::from_str(toml_str);
    assert!(result.is_err(), "Should reject pin lists that are not 4 long");
}

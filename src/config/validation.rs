//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::{MotorsConfig, ScanParams, ScannerConfig, SensorConfig};

/// Validate a scanner configuration.
///
/// Checks:
/// - The scan has at least one layer and one sample per revolution
/// - The sensor averages at least one sample with a positive ADC scale
/// - No GPIO pin drives more than one coil
pub fn validate_config(config: &ScannerConfig) -> Result<()> {
    validate_scan(&config.scan)?;
    validate_sensor(&config.sensor)?;
    validate_motors(&config.motors)?;

    Ok(())
}

fn validate_scan(scan: &ScanParams) -> Result<()> {
    if scan.layer_max == 0 {
        return Err(Error::Config(ConfigError::InvalidLayerMax(scan.layer_max)));
    }

    if scan.steps_per_revolution == 0 {
        return Err(Error::Config(ConfigError::InvalidStepsPerRevolution(
            scan.steps_per_revolution,
        )));
    }

    Ok(())
}

fn validate_sensor(sensor: &SensorConfig) -> Result<()> {
    if sensor.samples == 0 {
        return Err(Error::Config(ConfigError::InvalidSampleCount(sensor.samples)));
    }

    if !sensor.volts_per_count.is_finite() || sensor.volts_per_count <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidVoltsPerCount(
            sensor.volts_per_count,
        )));
    }

    Ok(())
}

fn validate_motors(motors: &MotorsConfig) -> Result<()> {
    let mut seen = [false; 256];

    for pin in motors.all_pins() {
        if seen[pin as usize] {
            return Err(Error::Config(ConfigError::DuplicatePin(pin)));
        }
        seen[pin as usize] = true;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MotorConfig;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&ScannerConfig::default()).is_ok());
    }

    #[test]
    fn test_zero_layers_rejected() {
        let mut config = ScannerConfig::default();
        config.scan.layer_max = 0;

        assert!(matches!(
            validate_config(&config),
            Err(Error::Config(ConfigError::InvalidLayerMax(0)))
        ));
    }

    #[test]
    fn test_pin_shared_between_motors_rejected() {
        let mut config = ScannerConfig::default();
        config.motors.platform = MotorConfig::new("Platform", [5, 6, 13, 22]);

        assert!(matches!(
            validate_config(&config),
            Err(Error::Config(ConfigError::DuplicatePin(22)))
        ));
    }

    #[test]
    fn test_negative_adc_scale_rejected() {
        let mut config = ScannerConfig::default();
        config.sensor.volts_per_count = -0.01;

        assert!(matches!(
            validate_config(&config),
            Err(Error::Config(ConfigError::InvalidVoltsPerCount(_)))
        ));
    }
}

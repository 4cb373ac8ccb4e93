//! Distance sensor configuration.

use serde::Deserialize;

use crate::sensor::Calibration;

/// I2C ADC and calibration settings for the distance sensor.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SensorConfig {
    /// 7-bit I2C address of the ADC.
    pub address: u8,

    /// Command byte selecting the channel and conversion mode.
    pub command: u8,

    /// Raw samples averaged per reading.
    pub samples: u16,

    /// Settle delay before each sample, in milliseconds.
    pub settle_ms: u32,

    /// ADC count to volts scale.
    pub volts_per_count: f32,

    /// Voltage to distance polynomial.
    pub calibration: Calibration,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            address: 0x4B,
            command: 0x8F,
            samples: 50,
            settle_ms: 10,
            volts_per_count: 0.01,
            calibration: Calibration::default(),
        }
    }
}

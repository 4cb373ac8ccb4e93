//! Scanner configuration - root configuration structure.

use serde::Deserialize;

use super::motor::MotorsConfig;
use super::scan::ScanParams;
use super::sensor::SensorConfig;

/// Root configuration structure from TOML.
///
/// Every section is optional; an empty document yields the factory scanner.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScannerConfig {
    /// Raster scan geometry and timing.
    #[serde(default)]
    pub scan: ScanParams,

    /// Vertical and platform motors.
    #[serde(default)]
    pub motors: MotorsConfig,

    /// Distance sensor.
    #[serde(default)]
    pub sensor: SensorConfig,
}

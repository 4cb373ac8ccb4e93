//! Configuration module for rotary-scanner.
//!
//! Provides types for loading and validating the scanner configuration
//! from TOML files (with `std` feature) or built in code from defaults.

mod motor;
mod scan;
mod sensor;
mod system;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use motor::{MotorConfig, MotorsConfig};
pub use scan::ScanParams;
pub use sensor::SensorConfig;
pub use system::ScannerConfig;
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Millimeters, Volts};

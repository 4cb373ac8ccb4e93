//! # rotary-scanner
//!
//! Driver for a rotary 3D object scanner: a vertical lift and a rotary
//! platform, both 4-coil unipolar steppers, plus an analog IR distance
//! sensor read through an I2C ADC.
//!
//! ## Features
//!
//! - **embedded-hal 1.0**: `OutputPin` coils, `I2c` ADC, `DelayNs` timing
//! - **no_std compatible**: Core library works without standard library
//! - **Half-step sequencing**: 8-phase coil table with phase kept per motor
//! - **Averaged sampling**: 50-sample mean through a cubic calibration
//! - **Raster scan**: one revolution per layer, `9999.00` layer markers
//! - **Configuration-driven**: Scan geometry, wiring and calibration in TOML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rotary_scanner::{DistanceSensor, ScanController, StepperMotorBuilder, WriteSink};
//!
//! let config = rotary_scanner::load_config("scanner.toml")?;
//!
//! let vertical = StepperMotorBuilder::new()
//!     .from_motor_config(&config.motors.vertical)
//!     .coils(z_pins)
//!     .delay(delay.clone())
//!     .build()?;
//! let platform = StepperMotorBuilder::new()
//!     .from_motor_config(&config.motors.platform)
//!     .coils(platform_pins)
//!     .delay(delay.clone())
//!     .build()?;
//! let sensor = DistanceSensor::from_config(i2c, delay.clone(), &config.sensor);
//! let sink = WriteSink::create(config.scan.output.as_str())?;
//!
//! let mut scan = ScanController::new(vertical, platform, sensor, sink, delay, config.scan);
//! let summary = scan.run()?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O, TOML parsing and [`WriteSink`]
//! - `log` (default): Routes progress messages through the `log` facade
//! - `defmt`: Routes progress messages through defmt and derives `defmt::Format`

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

// Must come first so the logging macros are visible to every module
mod fmt;

// Core modules
pub mod config;
pub mod error;
pub mod motor;
pub mod scan;
pub mod sensor;

#[cfg(test)]
mod test_support;

// Re-exports for ergonomic API
pub use config::{validate_config, MotorConfig, ScanParams, ScannerConfig, SensorConfig};
pub use error::{Error, Result};
pub use motor::{Direction, PhaseSequence, Stepper, StepperMotor, StepperMotorBuilder};
pub use scan::{RecordSink, ScanController, ScanRecord, ScanState, ScanSummary};
pub use sensor::{Calibration, DistanceSensor, RangeSensor, Reading};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

#[cfg(feature = "std")]
pub use scan::WriteSink;

// Unit types
pub use config::units::{Millimeters, Volts};

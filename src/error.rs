//! Error types for the rotary-scanner library.
//!
//! Sensor communication failures are deliberately absent: the sensor turns
//! them into [`Reading::NoReading`](crate::sensor::Reading::NoReading).

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all scanner operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Motor coil drive error
    Motor(MotorError),
    /// Record sink error
    Sink(SinkError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Layer count must be at least 1
    InvalidLayerMax(u32),
    /// Steps per revolution must be at least 1
    InvalidStepsPerRevolution(u32),
    /// Sensor sample count must be at least 1
    InvalidSampleCount(u16),
    /// ADC scale must be finite and > 0
    InvalidVoltsPerCount(f32),
    /// A GPIO pin is assigned to more than one coil
    DuplicatePin(u8),
    /// A required builder field was not provided
    MissingField(&'static str),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Motor operation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotorError {
    /// Pin operation failed
    PinError,
}

/// Record sink errors.
#[derive(Debug, Clone, PartialEq)]
pub enum SinkError {
    /// Underlying writer failed
    Io(heapless::String<128>),
    /// Formatted record did not fit the line buffer
    LineTooLong,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Motor(e) => write!(f, "Motor error: {}", e),
            Error::Sink(e) => write!(f, "Sink error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidLayerMax(v) => write!(f, "Invalid layer_max: {}. Must be > 0", v),
            ConfigError::InvalidStepsPerRevolution(v) => {
                write!(f, "Invalid steps_per_revolution: {}. Must be > 0", v)
            }
            ConfigError::InvalidSampleCount(v) => write!(f, "Invalid sample count: {}. Must be > 0", v),
            ConfigError::InvalidVoltsPerCount(v) => {
                write!(f, "Invalid volts_per_count: {}. Must be finite and > 0", v)
            }
            ConfigError::DuplicatePin(pin) => write!(f, "GPIO pin {} is assigned more than once", pin),
            ConfigError::MissingField(name) => write!(f, "{} is required", name),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for MotorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotorError::PinError => write!(f, "GPIO pin operation failed"),
        }
    }
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkError::Io(msg) => write!(f, "write failed: {}", msg),
            SinkError::LineTooLong => write!(f, "record does not fit the line buffer"),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<MotorError> for Error {
    fn from(e: MotorError) -> Self {
        Error::Motor(e)
    }
}

impl From<SinkError> for Error {
    fn from(e: SinkError) -> Self {
        Error::Sink(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for MotorError {}

#[cfg(feature = "std")]
impl std::error::Error for SinkError {}

//! Reading `scanner.toml` (std only).
//!
//! Every table and key is optional; whatever is missing keeps its factory
//! value. The merged result is validated before it is returned.

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};

use super::ScannerConfig;

/// Read a scanner configuration file.
///
/// # Errors
///
/// [`ConfigError::IoError`] if the file cannot be read, otherwise whatever
/// [`parse_config`] reports.
///
/// # Example
///
/// ```rust,ignore
/// let config = rotary_scanner::load_config("scanner.toml")?;
/// let sink = WriteSink::create(config.scan.output.as_str())?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ScannerConfig> {
    let content = fs::read_to_string(path.as_ref())
        .map_err(|e| Error::Config(ConfigError::IoError(truncated(&e.to_string()))))?;

    parse_config(&content)
}

/// Build a scanner configuration from TOML text.
///
/// An empty document yields the factory configuration: 105 layers of 256
/// samples with the GP2Y0A51SK0F calibration.
///
/// # Errors
///
/// [`ConfigError::ParseError`] for malformed TOML or wrongly typed keys, or
/// the first validation failure such as a GPIO pin used twice.
pub fn parse_config(content: &str) -> Result<ScannerConfig> {
    let config: ScannerConfig = toml::from_str(content)
        .map_err(|e| Error::Config(ConfigError::ParseError(truncated(e.message()))))?;

    super::validation::validate_config(&config)?;
    Ok(config)
}

/// Keep as much of `text` as fits in an error message.
fn truncated(text: &str) -> heapless::String<128> {
    let mut msg = heapless::String::new();
    for c in text.chars() {
        if msg.push(c).is_err() {
            break;
        }
    }
    msg
}

//! Unit types for physical quantities.
//!
//! Keeps ADC voltages and measured distances apart at compile time.

use core::fmt;
use core::ops::{Add, Div};

use serde::Deserialize;

/// Distance in millimetres.
///
/// Produced by the distance sensor and persisted by the scan controller.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Millimeters(pub f32);

impl Millimeters {
    /// Zero distance (the initial last-known-good value).
    pub const ZERO: Self = Self(0.0);

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Round to two decimal places (half away from zero).
    #[inline]
    pub fn round2(self) -> Self {
        Self(libm::roundf(self.0 * 100.0) / 100.0)
    }
}

impl Add for Millimeters {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Div<f32> for Millimeters {
    type Output = Self;

    fn div(self, rhs: f32) -> Self::Output {
        Self(self.0 / rhs)
    }
}

/// Always two decimals, the persisted record format.
impl fmt::Display for Millimeters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Voltage at the ADC input.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Volts(pub f32);

impl Volts {
    /// Convert a raw ADC count using a fixed volts-per-count scale.
    #[inline]
    pub fn from_raw(raw: u8, volts_per_count: f32) -> Self {
        Self(raw as f32 * volts_per_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(Millimeters(2.628_077).round2(), Millimeters(2.63));
        assert_eq!(Millimeters(4.712_96).round2(), Millimeters(4.71));
        assert_eq!(Millimeters(-1.004).round2(), Millimeters(-1.0));
    }

    #[test]
    fn test_display_two_decimals() {
        assert_eq!(format!("{}", Millimeters(12.34)), "12.34");
        assert_eq!(format!("{}", Millimeters(0.0)), "0.00");
        assert_eq!(format!("{}", Millimeters(15.0)), "15.00");
    }

    #[test]
    fn test_volts_from_raw() {
        let v = Volts::from_raw(150, 0.01);
        assert!((v.0 - 1.5).abs() < 1e-6);
    }
}

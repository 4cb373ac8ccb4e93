//! Voltage to distance calibration.

use serde::Deserialize;

use crate::config::units::{Millimeters, Volts};

/// Cubic fit converting sensor output voltage to distance.
///
/// Coefficients are stored highest power first: `[a3, a2, a1, a0]` for
/// `a3·v³ + a2·v² + a1·v + a0`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Calibration {
    coefficients: [f32; 4],
}

impl Calibration {
    /// Factory fit for the Sharp GP2Y0A51SK0F behind an 8-bit ADC.
    pub const GP2Y0A51SK0F: Self = Self::cubic(-5.40274, 28.4823, -49.7115, 31.3444);

    /// Create a calibration from cubic coefficients.
    pub const fn cubic(a3: f32, a2: f32, a1: f32, a0: f32) -> Self {
        Self {
            coefficients: [a3, a2, a1, a0],
        }
    }

    /// Coefficients, highest power first.
    #[inline]
    pub fn coefficients(&self) -> [f32; 4] {
        self.coefficients
    }

    /// Evaluate the polynomial at `volts`.
    #[inline]
    pub fn apply(&self, volts: Volts) -> Millimeters {
        let v = volts.0;
        let distance = self
            .coefficients
            .iter()
            .fold(0.0f32, |acc, &c| acc * v + c);
        Millimeters(distance)
    }
}

impl Default for Calibration {
    fn default() -> Self {
        Self::GP2Y0A51SK0F
    }
}

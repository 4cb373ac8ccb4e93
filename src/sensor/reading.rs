//! Tagged sensor reading.

use crate::config::units::Millimeters;

/// Outcome of one averaged distance measurement.
///
/// Keeps "the bus failed" apart from "the object is at 0 mm".
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Reading {
    /// Calibrated, averaged distance.
    Distance(Millimeters),
    /// Communication with the ADC failed during sampling.
    NoReading,
}

impl Reading {
    /// The distance, if the reading is valid.
    #[inline]
    pub fn distance(self) -> Option<Millimeters> {
        match self {
            Reading::Distance(mm) => Some(mm),
            Reading::NoReading => None,
        }
    }

    /// Legacy numeric form: the distance, or `0.0` for no reading.
    #[inline]
    pub fn value(self) -> f32 {
        self.distance().map_or(0.0, Millimeters::value)
    }
}

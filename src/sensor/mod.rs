//! Distance sensor module for rotary-scanner.
//!
//! Samples an analog IR range sensor through an I2C ADC and converts the
//! averaged voltage to a distance.

mod calibration;
mod distance;
mod reading;

pub use calibration::Calibration;
pub use distance::DistanceSensor;
pub use reading::Reading;

/// Source of distance readings for the scan controller.
pub trait RangeSensor {
    /// Take one (possibly averaged) reading. Never fails; communication
    /// problems yield [`Reading::NoReading`].
    fn read(&mut self) -> Reading;
}

impl<T: RangeSensor + ?Sized> RangeSensor for &mut T {
    fn read(&mut self) -> Reading {
        (**self).read()
    }
}

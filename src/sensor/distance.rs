//! Averaging distance sensor on an I2C ADC.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::config::units::{Millimeters, Volts};
use crate::config::SensorConfig;

use super::calibration::Calibration;
use super::reading::Reading;
use super::RangeSensor;

/// IR distance sensor read through a single-byte I2C ADC.
///
/// The bus handle is held for the sensor's whole lifetime and handed back
/// by [`DistanceSensor::release`].
pub struct DistanceSensor<I2C, DELAY>
where
    I2C: I2c,
    DELAY: DelayNs,
{
    bus: I2C,
    delay: DELAY,
    address: u8,
    command: u8,
    samples: u16,
    settle_ms: u32,
    volts_per_count: f32,
    calibration: Calibration,
}

impl<I2C, DELAY> DistanceSensor<I2C, DELAY>
where
    I2C: I2c,
    DELAY: DelayNs,
{
    /// Create a sensor with the factory ADC settings and calibration.
    pub fn new(bus: I2C, delay: DELAY) -> Self {
        Self::from_config(bus, delay, &SensorConfig::default())
    }

    /// Create a sensor from configuration.
    pub fn from_config(bus: I2C, delay: DELAY, config: &SensorConfig) -> Self {
        Self {
            bus,
            delay,
            address: config.address,
            command: config.command,
            samples: config.samples,
            settle_ms: config.settle_ms,
            volts_per_count: config.volts_per_count,
            calibration: config.calibration,
        }
    }

    /// Take `samples` raw samples and return their calibrated mean, rounded
    /// to two decimals.
    ///
    /// Any bus failure abandons the batch and yields [`Reading::NoReading`].
    pub fn read(&mut self) -> Reading {
        if self.samples == 0 {
            return Reading::NoReading;
        }

        let mut total = Millimeters::ZERO;
        for n in 0..self.samples {
            match self.sample_raw() {
                Ok(raw) => total = total + self.convert(raw),
                Err(_) => {
                    debug!("ADC 0x{:x}: transfer failed at sample {}", self.address, n);
                    return Reading::NoReading;
                }
            }
        }

        Reading::Distance((total / self.samples as f32).round2())
    }

    /// Legacy numeric reading: the distance, or `0.0` when the bus failed.
    pub fn read_distance(&mut self) -> f32 {
        self.read().value()
    }

    /// Settle, send the command byte and read one conversion back.
    pub fn sample_raw(&mut self) -> Result<u8, I2C::Error> {
        self.delay.delay_ms(self.settle_ms);
        self.bus.write(self.address, &[self.command])?;

        let mut buf = [0u8; 1];
        self.bus.read(self.address, &mut buf)?;
        Ok(buf[0])
    }

    /// Convert one raw ADC count to a calibrated distance.
    #[inline]
    pub fn convert(&self, raw: u8) -> Millimeters {
        self.calibration
            .apply(Volts::from_raw(raw, self.volts_per_count))
    }

    /// Consume the sensor and return the bus and delay provider.
    pub fn release(self) -> (I2C, DELAY) {
        (self.bus, self.delay)
    }
}

impl<I2C, DELAY> RangeSensor for DistanceSensor<I2C, DELAY>
where
    I2C: I2c,
    DELAY: DelayNs,
{
    fn read(&mut self) -> Reading {
        DistanceSensor::read(self)
    }
}

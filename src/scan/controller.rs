//! Raster scan controller.
//!
//! Two nested loops: the outer one walks vertical layers, the inner one
//! walks platform positions within a layer.

use embedded_hal::delay::DelayNs;

use crate::config::units::Millimeters;
use crate::config::ScanParams;
use crate::error::Result;
use crate::motor::{Direction, Stepper};
use crate::sensor::RangeSensor;

use super::record::ScanRecord;
use super::sink::RecordSink;

/// Progress of a scan.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScanState {
    /// Number of completed layers.
    pub layer: u32,
    /// Most recent valid distance; recorded in place of invalid samples.
    pub last_known_good: Millimeters,
}

/// Counters of what a scan wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScanSummary {
    /// Completed layers.
    pub layers: u32,
    /// Distance lines written.
    pub distance_records: u64,
    /// Layer-end lines written.
    pub layer_markers: u32,
    /// Samples for which the sensor returned no reading.
    pub invalid_samples: u64,
}

/// Drives the platform and vertical motors and records distances.
///
/// Owns every piece of hardware it touches for the duration of the scan.
pub struct ScanController<V, P, S, W, D>
where
    V: Stepper,
    P: Stepper,
    S: RangeSensor,
    W: RecordSink,
    D: DelayNs,
{
    vertical: V,
    platform: P,
    sensor: S,
    sink: W,
    delay: D,
    params: ScanParams,
    state: ScanState,
    summary: ScanSummary,
}

impl<V, P, S, W, D> ScanController<V, P, S, W, D>
where
    V: Stepper,
    P: Stepper,
    S: RangeSensor,
    W: RecordSink,
    D: DelayNs,
{
    /// Create a controller at layer 0 with a last-known-good of 0.
    pub fn new(vertical: V, platform: P, sensor: S, sink: W, delay: D, params: ScanParams) -> Self {
        Self {
            vertical,
            platform,
            sensor,
            sink,
            delay,
            params,
            state: ScanState::default(),
            summary: ScanSummary::default(),
        }
    }

    /// Current scan state.
    #[inline]
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Counters so far.
    #[inline]
    pub fn summary(&self) -> ScanSummary {
        self.summary
    }

    /// Whether every layer has been scanned.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.state.layer >= self.params.layer_max
    }

    /// Run every remaining layer, then de-energize both motors.
    ///
    /// Both motors are always asked to release, whether the scan finished or
    /// a motor or the sink failed. The first error is returned.
    pub fn run(&mut self) -> Result<ScanSummary> {
        info!(
            "scan: {} layers x {} samples",
            self.params.layer_max,
            self.params.steps_per_revolution
        );

        while !self.is_complete() {
            if let Err(e) = self.run_layer() {
                let _ = self.release_motors();
                return Err(e);
            }
        }

        let released = self.release_motors();
        let flushed = self.sink.flush();
        released.and(flushed)?;

        info!(
            "scan complete: {} records, {} invalid samples",
            self.summary.distance_records,
            self.summary.invalid_samples
        );
        Ok(self.summary)
    }

    /// Scan one full revolution and raise the sensor by one layer.
    ///
    /// Does nothing once the scan is complete.
    pub fn run_layer(&mut self) -> Result<()> {
        if self.is_complete() {
            return Ok(());
        }

        for step in 0..self.params.steps_per_revolution {
            self.sample_position(step)?;
        }

        self.sink.append_record(&ScanRecord::LayerEnd)?;
        self.summary.layer_markers += 1;

        let speed = self.vertical.speed();
        self.vertical
            .rotate(Direction::Clockwise, self.params.vertical_increment, speed)?;
        self.delay.delay_ms(self.params.layer_settle_ms);

        self.state.layer += 1;
        self.summary.layers = self.state.layer;
        self.sink.flush()?;

        info!("layer {} of {} done", self.state.layer, self.params.layer_max);
        Ok(())
    }

    /// Consume the controller and return its parts.
    pub fn into_parts(self) -> (V, P, S, W, D) {
        (self.vertical, self.platform, self.sensor, self.sink, self.delay)
    }

    fn sample_position(&mut self, step: u32) -> Result<()> {
        match self.sensor.read().distance() {
            Some(mm) => self.state.last_known_good = mm,
            None => self.summary.invalid_samples += 1,
        }

        let value = self.state.last_known_good;
        self.sink.append_record(&ScanRecord::Distance(value))?;
        self.summary.distance_records += 1;
        info!("{} {}", step, value.0);

        let speed = self.platform.speed();
        self.platform
            .rotate(Direction::Clockwise, self.params.rotary_increment, speed)
    }

    /// Release both motors even if the first fails; returns the first error.
    fn release_motors(&mut self) -> Result<()> {
        let vertical = self.vertical.release();
        if vertical.is_err() {
            warn!("{}: could not de-energize coils", self.vertical.name());
        }
        let platform = self.platform.release();
        if platform.is_err() {
            warn!("{}: could not de-energize coils", self.platform.name());
        }
        vertical.and(platform)
    }
}

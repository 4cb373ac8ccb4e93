//! Motor module for rotary-scanner.
//!
//! Provides the 4-coil stepper driver and its half-step phase sequence.

mod builder;
mod driver;
mod sequence;

pub use builder::StepperMotorBuilder;
pub use driver::StepperMotor;
pub use sequence::{CoilPattern, Direction, PhaseSequence, PHASE_COUNT};

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::error::Result;

/// Motor operations the scan controller depends on.
pub trait Stepper {
    /// Motor name for logging.
    fn name(&self) -> &str;

    /// Configured milliseconds per step.
    fn speed(&self) -> u32;

    /// Step `steps` times in `direction`, waiting `speed` ms after each step.
    fn rotate(&mut self, direction: Direction, steps: u32, speed: u32) -> Result<()>;

    /// De-energize every coil.
    fn release(&mut self) -> Result<()>;
}

impl<PIN, DELAY> Stepper for StepperMotor<PIN, DELAY>
where
    PIN: OutputPin,
    DELAY: DelayNs,
{
    fn name(&self) -> &str {
        StepperMotor::name(self)
    }

    fn speed(&self) -> u32 {
        StepperMotor::speed(self)
    }

    fn rotate(&mut self, direction: Direction, steps: u32, speed: u32) -> Result<()> {
        StepperMotor::rotate(self, direction, steps, speed)
    }

    fn release(&mut self) -> Result<()> {
        StepperMotor::release(self)
    }
}

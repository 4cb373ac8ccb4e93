//! Builder pattern for StepperMotor.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::MotorConfig;
use crate::error::{ConfigError, Error, Result};

use super::driver::StepperMotor;

/// Builder for creating StepperMotor instances.
pub struct StepperMotorBuilder<PIN, DELAY>
where
    PIN: OutputPin,
    DELAY: DelayNs,
{
    coils: Option<[PIN; 4]>,
    delay: Option<DELAY>,
    name: Option<heapless::String<32>>,
    speed: u32,
    initial_phase: u8,
}

impl<PIN, DELAY> Default for StepperMotorBuilder<PIN, DELAY>
where
    PIN: OutputPin,
    DELAY: DelayNs,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<PIN, DELAY> StepperMotorBuilder<PIN, DELAY>
where
    PIN: OutputPin,
    DELAY: DelayNs,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            coils: None,
            delay: None,
            name: None,
            speed: 1,
            initial_phase: 0,
        }
    }

    /// Set the four coil pins, in phase-table order.
    pub fn coils(mut self, coils: [PIN; 4]) -> Self {
        self.coils = Some(coils);
        self
    }

    /// Set the delay provider.
    pub fn delay(mut self, delay: DELAY) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Set the motor name.
    pub fn name(mut self, name: &str) -> Self {
        self.name = heapless::String::try_from(name).ok();
        self
    }

    /// Set milliseconds per step (1 = full speed).
    pub fn speed(mut self, speed: u32) -> Self {
        self.speed = speed;
        self
    }

    /// Set the phase index the first step continues from.
    pub fn initial_phase(mut self, phase: u8) -> Self {
        self.initial_phase = phase;
        self
    }

    /// Configure name and speed from a MotorConfig.
    ///
    /// Pin numbers in the config are only meaningful to the code that
    /// creates the pins; they are not used here.
    pub fn from_motor_config(mut self, config: &MotorConfig) -> Self {
        self.name = Some(config.name.clone());
        self.speed = config.speed;
        self
    }

    /// Build the StepperMotor with every coil de-energized.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing or a coil pin cannot
    /// be driven low.
    pub fn build(self) -> Result<StepperMotor<PIN, DELAY>> {
        let coils = self
            .coils
            .ok_or(Error::Config(ConfigError::MissingField("coils")))?;

        let delay = self
            .delay
            .ok_or(Error::Config(ConfigError::MissingField("delay")))?;

        let name = self
            .name
            .unwrap_or_else(|| heapless::String::try_from("motor").unwrap_or_default());

        let mut motor = StepperMotor::new(coils, delay, self.initial_phase, self.speed, name);
        motor.release()?;

        Ok(motor)
    }
}

//! Stepper motor driver.
//!
//! Generic over embedded-hal 1.0 output pins and delay provider. Each motor
//! owns its four coil pins and its phase index exclusively.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::error::{MotorError, Result};

use super::sequence::{CoilPattern, Direction, PhaseSequence};

/// 4-coil unipolar stepper motor (28BYJ-48 + ULN2003 style).
///
/// Generic over:
/// - `PIN`: coil pin type (must implement `OutputPin`)
/// - `DELAY`: Delay provider (must implement `DelayNs`)
pub struct StepperMotor<PIN, DELAY>
where
    PIN: OutputPin,
    DELAY: DelayNs,
{
    /// Coil pins in phase-table order.
    coils: [PIN; 4],

    /// Delay provider for step timing.
    delay: DELAY,

    /// Current index into the phase table, always in `[0, 8)`.
    phase: u8,

    /// Coil pattern table.
    sequence: PhaseSequence,

    /// Configured milliseconds per step.
    speed: u32,

    /// Motor name for logging/debugging.
    name: heapless::String<32>,
}

impl<PIN, DELAY> StepperMotor<PIN, DELAY>
where
    PIN: OutputPin,
    DELAY: DelayNs,
{
    /// Create a new motor at phase 0 without touching the pins.
    pub(crate) fn new(
        coils: [PIN; 4],
        delay: DELAY,
        phase: u8,
        speed: u32,
        name: heapless::String<32>,
    ) -> Self {
        Self {
            coils,
            delay,
            phase: PhaseSequence::normalize(phase as i32),
            sequence: PhaseSequence::HALF_STEP,
            speed,
            name,
        }
    }

    /// Get the motor name.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Get the current phase index.
    #[inline]
    pub fn phase_index(&self) -> u8 {
        self.phase
    }

    /// Set the phase index the next step continues from.
    ///
    /// The value is wrapped into `[0, 8)`; the coils are not driven until
    /// the next step.
    #[inline]
    pub fn set_phase_index(&mut self, phase: u8) {
        self.phase = PhaseSequence::normalize(phase as i32);
    }

    /// Coil pattern for the current phase index.
    #[inline]
    pub fn coil_pattern(&self) -> CoilPattern {
        self.sequence.pattern(self.phase)
    }

    /// Configured milliseconds to wait after each step.
    #[inline]
    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Advance exactly one phase in `direction` and drive the coils to the
    /// new pattern.
    pub fn step(&mut self, direction: Direction) -> Result<()> {
        let next = self.sequence.next_index(self.phase, direction);
        self.drive(self.sequence.pattern(next))?;
        self.phase = next;
        Ok(())
    }

    /// Step `steps` times, waiting `speed` milliseconds after every step.
    ///
    /// `speed` is a divisor: 1 is full speed, larger values are slower.
    pub fn rotate(&mut self, direction: Direction, steps: u32, speed: u32) -> Result<()> {
        trace!("{}: rotate {} steps, {} ms/step", self.name.as_str(), steps, speed);

        for _ in 0..steps {
            self.step(direction)?;
            self.delay.delay_ms(speed);
        }

        Ok(())
    }

    /// Rotate at the configured speed.
    pub fn rotate_at_speed(&mut self, direction: Direction, steps: u32) -> Result<()> {
        self.rotate(direction, steps, self.speed)
    }

    /// De-energize every coil. The phase index is kept.
    pub fn release(&mut self) -> Result<()> {
        self.drive([false; 4])
    }

    /// Consume the motor and return its pins and delay provider.
    pub fn into_parts(self) -> ([PIN; 4], DELAY) {
        (self.coils, self.delay)
    }

    fn drive(&mut self, pattern: CoilPattern) -> Result<()> {
        for (pin, energized) in self.coils.iter_mut().zip(pattern) {
            if energized {
                pin.set_high().map_err(|_| MotorError::PinError)?;
            } else {
                pin.set_low().map_err(|_| MotorError::PinError)?;
            }
        }
        Ok(())
    }
}

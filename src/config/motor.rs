//! Motor configuration from TOML.

use heapless::String;
use serde::Deserialize;

/// Configuration for one 4-coil stepper motor.
#[derive(Debug, Clone, Deserialize)]
pub struct MotorConfig {
    /// Human-readable name (max 32 chars).
    #[serde(default = "default_name")]
    pub name: String<32>,

    /// GPIO numbers of the four coils, in phase-table order.
    pub pins: [u8; 4],

    /// Milliseconds to wait after each step (1 = full speed, higher = slower).
    #[serde(default = "default_speed")]
    pub speed: u32,
}

fn default_name() -> String<32> {
    String::try_from("motor").unwrap_or_default()
}

fn default_speed() -> u32 {
    1
}

impl MotorConfig {
    /// Create a motor configuration at full speed.
    pub fn new(name: &str, pins: [u8; 4]) -> Self {
        Self {
            name: String::try_from(name).unwrap_or_default(),
            pins,
            speed: default_speed(),
        }
    }

    /// Factory wiring of the vertical (Z) lift motor.
    pub fn vertical() -> Self {
        Self::new("Z-Axis", [4, 17, 27, 22])
    }

    /// Factory wiring of the rotary platform motor.
    pub fn platform() -> Self {
        Self::new("Platform", [5, 6, 13, 19])
    }
}

/// The scanner's two motors.
#[derive(Debug, Clone, Deserialize)]
pub struct MotorsConfig {
    /// Vertical lift motor.
    #[serde(default = "MotorConfig::vertical")]
    pub vertical: MotorConfig,

    /// Rotary platform motor.
    #[serde(default = "MotorConfig::platform")]
    pub platform: MotorConfig,
}

impl Default for MotorsConfig {
    fn default() -> Self {
        Self {
            vertical: MotorConfig::vertical(),
            platform: MotorConfig::platform(),
        }
    }
}

impl MotorsConfig {
    /// Iterate every coil pin of both motors.
    pub fn all_pins(&self) -> impl Iterator<Item = u8> + '_ {
        self.vertical
            .pins
            .iter()
            .chain(self.platform.pins.iter())
            .copied()
    }
}

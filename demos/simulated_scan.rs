//! Simulated scan example.
//!
//! Runs a complete scan against simulated coil pins and a simulated ADC,
//! writing the record file named in the configuration.
//!
//! Usage: `cargo run --example simulated_scan [config.toml]`
//!
//! Without an argument `scanner.toml` is loaded if it exists, otherwise the
//! factory defaults are used. Per-step progress is logged at `info`; set
//! `RUST_LOG=warn` to silence it.

use std::cell::Cell;
use std::rc::Rc;

use embedded_hal::i2c::{ErrorKind, Operation};
use rotary_scanner::{
    load_config, DistanceSensor, ScanController, ScannerConfig, StepperMotorBuilder, WriteSink,
};

/// Delay provider that only accumulates simulated time.
#[derive(Clone, Default)]
struct SimDelay {
    elapsed_ns: Rc<Cell<u64>>,
}

impl embedded_hal::delay::DelayNs for SimDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.elapsed_ns.set(self.elapsed_ns.get() + ns as u64);
    }
}

/// Coil pin that does nothing.
struct SimPin;

impl embedded_hal::digital::ErrorType for SimPin {
    type Error = core::convert::Infallible;
}

impl embedded_hal::digital::OutputPin for SimPin {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// ADC looking at a slowly twisting vase.
struct SimAdc {
    conversions: u64,
    samples: u64,
    steps: u64,
}

impl embedded_hal::i2c::ErrorType for SimAdc {
    type Error = ErrorKind;
}

impl embedded_hal::i2c::I2c for SimAdc {
    fn transaction(&mut self, _address: u8, operations: &mut [Operation<'_>]) -> Result<(), Self::Error> {
        for op in operations {
            if let Operation::Read(buf) = op {
                let n = self.conversions;
                self.conversions += 1;

                // Drop one conversion in 5000 to exercise the fallback path
                if n % 5000 == 4999 {
                    return Err(ErrorKind::Other);
                }

                let reading = n / self.samples;
                let layer = reading / self.steps;
                let angle = (reading % self.steps) as f32 / self.steps as f32;
                let bulge = (layer as f32 / 30.0).sin() * 20.0;
                let lobes = (angle * core::f32::consts::TAU * 3.0 + layer as f32 * 0.05).cos() * 8.0;
                buf.fill((150.0 + bulge + lobes) as u8);
            }
        }
        Ok(())
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("=== Simulated Rotary Scan ===\n");

    let path = std::env::args().nth(1).unwrap_or_else(|| "scanner.toml".to_string());
    let config = if std::path::Path::new(&path).exists() {
        let config = load_config(&path).expect("Failed to load configuration");
        println!("Configuration: {}", path);
        config
    } else {
        println!("Configuration: factory defaults");
        ScannerConfig::default()
    };

    let scan = &config.scan;
    println!("Layers: {}", scan.layer_max);
    println!("Samples per layer: {}", scan.steps_per_revolution);
    println!("Platform steps per sample: {}", scan.rotary_increment);
    println!("Vertical steps per layer: {}", scan.vertical_increment);
    println!("Expected lines: {}", scan.total_lines());

    let delay = SimDelay::default();

    let vertical = StepperMotorBuilder::new()
        .from_motor_config(&config.motors.vertical)
        .coils([SimPin, SimPin, SimPin, SimPin])
        .delay(delay.clone())
        .build()
        .expect("Failed to build vertical motor");

    let platform = StepperMotorBuilder::new()
        .from_motor_config(&config.motors.platform)
        .coils([SimPin, SimPin, SimPin, SimPin])
        .delay(delay.clone())
        .build()
        .expect("Failed to build platform motor");

    let adc = SimAdc {
        conversions: 0,
        samples: config.sensor.samples.max(1) as u64,
        steps: scan.steps_per_revolution.max(1) as u64,
    };
    let sensor = DistanceSensor::from_config(adc, delay.clone(), &config.sensor);

    let sink = WriteSink::create(scan.output.as_str()).expect("Failed to create output file");

    println!("\nScanning into {} ...", scan.output);
    let mut controller =
        ScanController::new(vertical, platform, sensor, sink, delay.clone(), scan.clone());
    let summary = controller.run().expect("Scan failed");

    println!("\n=== Summary ===");
    println!("Layers: {}", summary.layers);
    println!("Distance records: {}", summary.distance_records);
    println!("Layer markers: {}", summary.layer_markers);
    println!("Invalid samples: {}", summary.invalid_samples);
    println!(
        "Simulated duration: {:.1} minutes",
        delay.elapsed_ns.get() as f64 / 60e9
    );
}

//! Raster scan parameters.

use heapless::String;
use serde::Deserialize;

/// Geometry and timing of the raster scan.
///
/// Every field falls back to the factory value when absent from TOML.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScanParams {
    /// Number of vertical layers to scan (each roughly 1 mm).
    pub layer_max: u32,

    /// Samples taken per full platform revolution.
    pub steps_per_revolution: u32,

    /// Platform motor steps between two samples.
    pub rotary_increment: u32,

    /// Vertical motor steps between two layers.
    pub vertical_increment: u32,

    /// Pause after each vertical move before sampling resumes.
    pub layer_settle_ms: u32,

    /// Output file for the scan records (used by `std` front ends).
    pub output: String<64>,
}

impl Default for ScanParams {
    fn default() -> Self {
        Self {
            layer_max: 105,
            steps_per_revolution: 256,
            rotary_increment: 16,
            vertical_increment: 600,
            layer_settle_ms: 1000,
            output: String::try_from("scanfile.txt").unwrap_or_default(),
        }
    }
}

impl ScanParams {
    /// Lines a complete scan writes: one per sample plus one marker per layer.
    pub fn total_lines(&self) -> u64 {
        self.layer_max as u64 * (self.steps_per_revolution as u64 + 1)
    }

    /// Platform steps in one full revolution.
    pub fn platform_steps_per_layer(&self) -> u64 {
        self.steps_per_revolution as u64 * self.rotary_increment as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_line_count() {
        let params = ScanParams::default();

        // 105 * (256 + 1)
        assert_eq!(params.total_lines(), 26_985);
    }

    #[test]
    fn test_platform_steps_per_layer() {
        // 256 * 16 = 4096 half-steps, one turn of a 28BYJ-48
        assert_eq!(ScanParams::default().platform_steps_per_layer(), 4096);
    }
}

//! Persisted scan records.

use core::fmt;

use crate::config::units::Millimeters;

/// Reserved value marking the end of a layer.
pub const LAYER_END_VALUE: f32 = 9999.0;

/// One line of scan output.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScanRecord {
    /// Distance recorded at one platform position.
    Distance(Millimeters),
    /// End of a full platform revolution.
    LayerEnd,
}

impl ScanRecord {
    /// Parse one output line back into a record.
    ///
    /// Returns `None` for anything that is not a number.
    pub fn parse(line: &str) -> Option<Self> {
        let value: f32 = line.trim().parse().ok()?;
        if value == LAYER_END_VALUE {
            Some(ScanRecord::LayerEnd)
        } else {
            Some(ScanRecord::Distance(Millimeters(value)))
        }
    }

    /// Whether this record closes a layer.
    #[inline]
    pub fn is_layer_end(&self) -> bool {
        matches!(self, ScanRecord::LayerEnd)
    }
}

impl fmt::Display for ScanRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanRecord::Distance(mm) => write!(f, "{}", mm),
            ScanRecord::LayerEnd => write!(f, "{:.2}", LAYER_END_VALUE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_end_renders_sentinel() {
        assert_eq!(format!("{}", ScanRecord::LayerEnd), "9999.00");
    }

    #[test]
    fn test_distance_renders_two_decimals() {
        assert_eq!(format!("{}", ScanRecord::Distance(Millimeters(7.5))), "7.50");
    }

    #[test]
    fn test_parse() {
        assert_eq!(ScanRecord::parse("9999.00"), Some(ScanRecord::LayerEnd));
        assert_eq!(
            ScanRecord::parse("12.34\n"),
            Some(ScanRecord::Distance(Millimeters(12.34)))
        );
        assert_eq!(ScanRecord::parse("layer"), None);
    }
}

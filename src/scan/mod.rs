//! Raster scan module for rotary-scanner.
//!
//! Interleaves platform rotation, distance sampling and layer advancement,
//! and persists the readings as a line-oriented record stream.

mod controller;
mod record;
mod sink;

pub use controller::{ScanController, ScanState, ScanSummary};
pub use record::{ScanRecord, LAYER_END_VALUE};
pub use sink::RecordSink;

#[cfg(feature = "std")]
pub use sink::WriteSink;

//! Append-only record sinks.

use core::fmt::Write as _;

use crate::error::{Result, SinkError};

use super::record::ScanRecord;

/// Append-only, line-oriented text destination.
///
/// Lines must land in call order; the scan output is only meaningful in
/// strict layer/record order.
pub trait RecordSink {
    /// Append `line` followed by a single `\n`.
    fn append_line(&mut self, line: &str) -> Result<()>;

    /// Push buffered lines to the underlying storage.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    /// Format and append one record.
    fn append_record(&mut self, record: &ScanRecord) -> Result<()> {
        let mut line: heapless::String<32> = heapless::String::new();
        write!(line, "{}", record).map_err(|_| SinkError::LineTooLong)?;
        self.append_line(&line)
    }
}

impl<S: RecordSink + ?Sized> RecordSink for &mut S {
    fn append_line(&mut self, line: &str) -> Result<()> {
        (**self).append_line(line)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }
}

/// Sink over any [`std::io::Write`], typically a file.
#[cfg(feature = "std")]
pub struct WriteSink<W: std::io::Write> {
    writer: W,
}

#[cfg(feature = "std")]
impl<W: std::io::Write> WriteSink<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Unwrap the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(feature = "std")]
impl WriteSink<std::io::BufWriter<std::fs::File>> {
    /// Create (or truncate) `path` for writing.
    pub fn create<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::create(path).map_err(io_error)?;
        Ok(Self::new(std::io::BufWriter::new(file)))
    }
}

#[cfg(feature = "std")]
impl<W: std::io::Write> RecordSink for WriteSink<W> {
    fn append_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line).map_err(io_error)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush().map_err(io_error)?;
        Ok(())
    }
}

#[cfg(feature = "std")]
fn io_error(e: std::io::Error) -> SinkError {
    SinkError::Io(heapless::String::try_from(e.to_string().as_str()).unwrap_or_default())
}

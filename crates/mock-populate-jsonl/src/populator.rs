//! Writers for generated sequences.
//!
//! Every output goes through one buffered, byte-counting writer; the
//! file helpers only decide how the file is opened.

use crate::args::OutputFormat;
use crate::error::JsonlPopulatorError;
use mock_core::MockSchema;
use mock_generator::MockGenerator;
use serde_json::Value;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Capacity of the buffer wrapped around every output.
pub const WRITE_BUFFER_CAPACITY: usize = 64 * 1024;

/// Rows between progress log lines.
const PROGRESS_INTERVAL: u64 = 10_000;

/// Throughput figures for one write.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PopulateMetrics {
    /// Instances written
    pub rows_written: u64,
    /// Bytes handed to the underlying writer
    pub bytes_written: u64,
    /// Wall time of the whole write
    pub elapsed: Duration,
    /// Part of `elapsed` spent synthesizing instances
    pub synthesis_time: Duration,
    /// Part of `elapsed` spent encoding JSON
    pub encode_time: Duration,
}

impl PopulateMetrics {
    pub fn rows_per_sec(&self) -> f64 {
        per_second(self.rows_written, self.elapsed)
    }

    pub fn bytes_per_sec(&self) -> f64 {
        per_second(self.bytes_written, self.elapsed)
    }
}

fn per_second(amount: u64, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs == 0.0 {
        0.0
    } else {
        amount as f64 / secs
    }
}

/// Adapter counting the bytes that reach `inner`.
struct CountingWriter<W> {
    inner: W,
    count: u64,
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let written = self.inner.write(buf)?;
        self.count += written as u64;
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Writes instances of one model at a time, continuing from the generator's
/// current index across calls.
pub struct JsonlPopulator {
    generator: MockGenerator,
}

impl JsonlPopulator {
    pub fn new(generator: MockGenerator) -> Self {
        Self { generator }
    }

    /// Build the generator for `schema` with `seed`.
    pub fn from_schema(schema: &MockSchema, seed: u64) -> Result<Self, JsonlPopulatorError> {
        Ok(Self::new(MockGenerator::new(schema, seed)?))
    }

    pub fn with_start_index(self, index: u64) -> Self {
        Self::new(self.generator.with_start_index(index))
    }

    /// Index of the next instance to be written.
    pub fn current_index(&self) -> u64 {
        self.generator.current_index()
    }

    /// Write `count` instances of `model` to `writer`.
    pub fn write_to<W: Write>(
        &mut self,
        model: &str,
        writer: W,
        count: u64,
        format: OutputFormat,
    ) -> Result<PopulateMetrics, JsonlPopulatorError> {
        let started = Instant::now();
        let mut out = BufWriter::with_capacity(
            WRITE_BUFFER_CAPACITY,
            CountingWriter {
                inner: writer,
                count: 0,
            },
        );

        let mut metrics = match format {
            OutputFormat::Jsonl => self.encode_lines(model, &mut out, count)?,
            OutputFormat::Json => self.encode_array(model, &mut out, count)?,
        };
        out.flush()?;

        metrics.bytes_written = out.get_ref().count;
        metrics.elapsed = started.elapsed();
        info!(
            "Wrote {} '{}' rows as {:?}: {} bytes in {:?} ({:.0} rows/s)",
            metrics.rows_written,
            model,
            format,
            metrics.bytes_written,
            metrics.elapsed,
            metrics.rows_per_sec()
        );
        Ok(metrics)
    }

    /// Create (or truncate) `path` and write `count` JSON lines.
    pub fn populate<P: AsRef<Path>>(
        &mut self,
        model: &str,
        path: P,
        count: u64,
    ) -> Result<PopulateMetrics, JsonlPopulatorError> {
        let file = File::create(path.as_ref())?;
        self.write_to(model, file, count, OutputFormat::Jsonl)
    }

    /// Append `count` JSON lines to `path`, creating it when missing.
    pub fn populate_append<P: AsRef<Path>>(
        &mut self,
        model: &str,
        path: P,
        count: u64,
    ) -> Result<PopulateMetrics, JsonlPopulatorError> {
        debug!(
            "Appending to {} from index {}",
            path.as_ref().display(),
            self.current_index()
        );
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path.as_ref())?;
        self.write_to(model, file, count, OutputFormat::Jsonl)
    }

    /// Create (or truncate) `path` and write one pretty-printed JSON array.
    pub fn write_json_array<P: AsRef<Path>>(
        &mut self,
        model: &str,
        path: P,
        count: u64,
    ) -> Result<PopulateMetrics, JsonlPopulatorError> {
        let file = File::create(path.as_ref())?;
        self.write_to(model, file, count, OutputFormat::Json)
    }

    fn encode_lines<W: Write>(
        &mut self,
        model: &str,
        out: &mut W,
        count: u64,
    ) -> Result<PopulateMetrics, JsonlPopulatorError> {
        let mut metrics = PopulateMetrics::default();

        for _ in 0..count {
            let mark = Instant::now();
            let value = self.generator.next_instance(model)?;
            metrics.synthesis_time += mark.elapsed();

            let mark = Instant::now();
            serde_json::to_writer(&mut *out, &Value::from(&value))?;
            out.write_all(b"\n")?;
            metrics.encode_time += mark.elapsed();

            metrics.rows_written += 1;
            if metrics.rows_written % PROGRESS_INTERVAL == 0 {
                debug!("{} rows of '{}' so far", metrics.rows_written, model);
            }
        }

        Ok(metrics)
    }

    fn encode_array<W: Write>(
        &mut self,
        model: &str,
        out: &mut W,
        count: u64,
    ) -> Result<PopulateMetrics, JsonlPopulatorError> {
        let mark = Instant::now();
        let rows: Vec<Value> = self.generator.instances(model, count)?.map(Value::from).collect();
        let synthesis_time = mark.elapsed();

        let mark = Instant::now();
        serde_json::to_writer_pretty(&mut *out, &rows)?;
        out.write_all(b"\n")?;

        Ok(PopulateMetrics {
            rows_written: rows.len() as u64,
            synthesis_time,
            encode_time: mark.elapsed(),
            ..PopulateMetrics::default()
        })
    }
}

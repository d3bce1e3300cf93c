//! `FleetOutputObserver<W>`: bridges `FleetObserver` to an `OutputWriter`.

use tracing::warn;
use ts_fleet::{FleetObserver, FleetSummary, GeneratedObject};

use crate::row::{CrossingRow, ObjectRow, TrajectoryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`FleetObserver`] that streams every generated object into any
/// [`OutputWriter`] backend (CSV, SQLite, Parquet, …) and finishes the
/// writer when the run ends.
///
/// Errors from the writer are stored internally because `FleetObserver`
/// methods have no return value.  After `fleet.run()` returns, check for
/// errors with [`take_error`][Self::take_error].  Once a write has failed,
/// later objects are skipped so a broken backend is not hammered.
pub struct FleetOutputObserver<W: OutputWriter> {
    writer:     W,
    written:    u64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> FleetOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0, last_error: None }
    }

    /// Take the stored write error (if any) after `fleet.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Objects fully written so far.
    pub fn written(&self) -> u64 {
        self.written
    }

    /// Unwrap the inner writer (e.g. to inspect it after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn write(&mut self, object: &GeneratedObject) -> OutputResult<()> {
        self.writer.write_object(&ObjectRow::from_object(object))?;
        self.writer.write_trajectory(&TrajectoryRow::from_object(object))?;
        self.writer.write_crossings(&CrossingRow::from_object(object))?;
        Ok(())
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!(error = %e, "output write failed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> FleetObserver for FleetOutputObserver<W> {
    fn on_object(&mut self, object: &GeneratedObject) {
        if self.last_error.is_some() {
            return;
        }
        let result = self.write(object);
        if result.is_ok() {
            self.written += 1;
        }
        self.store_err(result);
    }

    fn on_run_end(&mut self, _summary: &FleetSummary) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}

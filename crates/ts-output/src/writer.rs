//! The `OutputWriter` trait implemented by all backend writers.

use crate::{CrossingRow, ObjectRow, OutputResult, TrajectoryRow};

/// Trait implemented by the CSV, SQLite, and Parquet writers.
///
/// [`FleetOutputObserver`][crate::FleetOutputObserver] calls the three
/// `write_*` methods once per object, in that order, then `finish` after the
/// last object.
pub trait OutputWriter {
    /// Write one object's constants.
    fn write_object(&mut self, row: &ObjectRow<'_>) -> OutputResult<()>;

    /// Write every state of one object's trajectory, chronological.
    fn write_trajectory(&mut self, rows: &[TrajectoryRow<'_>]) -> OutputResult<()>;

    /// Write one object's section stays.
    fn write_crossings(&mut self, rows: &[CrossingRow<'_>]) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

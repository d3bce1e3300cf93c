//! Failures while writing a generated fleet to disk.
//!
//! Each backend surfaces its own library error through one variant, so the
//! CLI can report which output format broke without inspecting the source.

use thiserror::Error;

/// Why a fleet could not be written to its CSV, SQLite or Parquet output.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Creating or writing an output file failed at the filesystem level.
    #[error("cannot write fleet output: {0}")]
    Io(#[from] std::io::Error),

    /// `objects.csv`, `trajectories.csv` or `section_crossings.csv`.
    #[error("CSV output failed: {0}")]
    Csv(#[from] csv::Error),

    /// `tracks.db`, including its per-object and per-section tables.
    #[cfg(feature = "sqlite")]
    #[error("tracks.db write failed: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// A record batch did not match its Parquet schema.
    #[cfg(feature = "parquet")]
    #[error("cannot build Arrow batch for Parquet output: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[cfg(feature = "parquet")]
    #[error("Parquet output failed: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;

//! `ts-output`: persistence backends for generated fleets.
//!
//! Three backends are provided behind Cargo features:
//!
//! | Feature   | Backend     | Files created                                                       |
//! |-----------|-------------|---------------------------------------------------------------------|
//! | *(none)*  | CSV         | `objects.csv`, `trajectories.csv`, `section_crossings.csv`          |
//! | `sqlite`  | SQLite      | `tracks.db` (two tables per object plus one per section)            |
//! | `parquet` | Parquet     | `objects.parquet`, `trajectories.parquet`, `section_crossings.parquet` |
//!
//! All backends implement [`OutputWriter`] and are driven by
//! [`FleetOutputObserver`], which implements `ts_fleet::FleetObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ts_output::{CsvWriter, FleetOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = FleetOutputObserver::new(writer);
//! fleet.run(&mut obs)?;
//! if let Some(e) = obs.take_error() { return Err(e.into()); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "parquet")]
pub mod parquet;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::FleetOutputObserver;
pub use row::{CrossingRow, ObjectRow, TrajectoryRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;

#[cfg(feature = "parquet")]
pub use parquet::ParquetWriter;

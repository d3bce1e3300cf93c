//! Core error type.
//!
//! Downstream crates wrap `CoreError` as one variant of their own enum via
//! `#[from]`, so sampler failures surface unchanged at the fleet level.

use thiserror::Error;

use crate::Point;

/// The error type for `ts-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No point of the world can satisfy the requested distance band around
    /// `origin`, or none was found within the attempt cap.
    #[error(
        "unsatisfiable distance constraint: no world point within [{min}, {max}] of {origin} \
         after {attempts} attempts"
    )]
    UnsatisfiableDistance {
        origin:   Point,
        min:      f64,
        max:      f64,
        attempts: u64,
    },

    #[error("invalid simulation window: end {end} must be after start {start}")]
    InvalidWindow { start: i64, end: i64 },

    #[error("simulation window of {duration_ms} ms starting at {start} overflows the timestamp range")]
    WindowOverflow { start: i64, duration_ms: i64 },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `ts-core` operations.
pub type CoreResult<T> = Result<T, CoreError>;

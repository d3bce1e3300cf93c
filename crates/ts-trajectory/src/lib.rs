//! `ts-trajectory`: trajectory generation and section crossing bookkeeping.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                        |
//! |---------------|-----------------------------------------------------------------|
//! | [`state`]     | `State`, `Trajectory`: time-stamped positions and headings     |
//! | [`ledger`]    | `CrossingLedger`: per-section entry/exit timestamp pairs       |
//! | [`bezier`]    | `QuadraticBezier`: the curve and its control-polygon length    |
//! | [`generator`] | `TrajectoryGenerator`, `generate`: the sampling walk           |
//! | [`error`]     | `TrajectoryError`, `TrajectoryResult<T>`                        |
//!
//! # Sampling model
//!
//! The object moves along a quadratic Bezier curve at constant speed.  The
//! curve parameter is walked in steps fine enough that ~20 raw evaluations
//! fall between two emitted states; a running arc-length accumulator decides
//! when the object has covered `speed × 0.15 s` and a new state is emitted,
//! exactly 150 ms after the previous one.  The same pass records every
//! change of quadrant into the ledger, so consumers can answer "was the
//! object in section S during [a, b]?" without re-scanning the states.

pub mod bezier;
pub mod error;
pub mod generator;
pub mod ledger;
pub mod state;

#[cfg(test)]
mod tests;

pub use bezier::QuadraticBezier;
pub use error::{TrajectoryError, TrajectoryResult};
pub use generator::{
    MAX_TRAJECTORY_DURATION_MS, MIN_CONTROL_POLYGON_LENGTH, OVERSAMPLING_FACTOR,
    TrajectoryGenerator, generate,
};
pub use ledger::{CrossingLedger, SectionInterval};
pub use state::{State, Trajectory};

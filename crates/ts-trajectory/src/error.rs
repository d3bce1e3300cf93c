use thiserror::Error;
use ts_core::Timestamp;

#[derive(Debug, Error)]
pub enum TrajectoryError {
    #[error("speed must be finite and positive, got {0}")]
    InvalidSpeed(f64),

    #[error("simulation end {sim_end_time} must be after start {start_time}")]
    InvalidTimeRange {
        start_time:   Timestamp,
        sim_end_time: Timestamp,
    },

    #[error("degenerate control polygon: length {length} is below the minimum {minimum}")]
    DegenerateControlPolygon { length: f64, minimum: f64 },

    /// A post-condition of the generator did not hold.  This is a logic
    /// defect or an out-of-contract input, never an expected outcome.
    #[error("trajectory invariant violated: {0}")]
    InvariantViolation(String),
}

pub type TrajectoryResult<T> = Result<T, TrajectoryError>;

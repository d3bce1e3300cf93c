use thiserror::Error;
use ts_core::CoreError;
use ts_trajectory::TrajectoryError;

#[derive(Debug, Error)]
pub enum FleetError {
    #[error("fleet configuration error: {0}")]
    Config(String),

    #[error("sampling failed for object {index}: {source}")]
    Sampling {
        index:  u64,
        #[source]
        source: CoreError,
    },

    #[error("trajectory generation failed for object {index}: {source}")]
    Trajectory {
        index:  u64,
        #[source]
        source: TrajectoryError,
    },

    #[error("worker pool error: {0}")]
    ThreadPool(String),
}

pub type FleetResult<T> = Result<T, FleetError>;

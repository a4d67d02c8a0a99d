// error.rs - Error and warning types for the simulator

use thiserror::Error;

/// Rejected configuration. Raised once, at construction time.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("grid size must be at least 1")]
    InvalidSize,

    #[error("thread count must be at least 1")]
    InvalidThreadCount,

    #[error("spawn chance must be within [0, 1], got {0}")]
    InvalidChance(f64),

    #[error("speed must be a finite, non-negative number of steps per second, got {0}")]
    InvalidSpeed(f64),

    #[error("zoom must be at least 1")]
    InvalidZoom,

    #[error("failed to build worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}

/// Accepted but suspicious configuration. Logged, never fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    #[error(
        "{size} rows do not split evenly across {thread_count} workers; \
         the last band takes {remainder} extra row(s)"
    )]
    PartitionRemainder {
        size: usize,
        thread_count: usize,
        remainder: usize,
    },
}

/// Failure of the headless driver itself.
#[derive(Error, Debug)]
pub enum DriverError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

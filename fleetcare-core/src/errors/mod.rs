pub mod scheduler_error;
pub mod store_error;

pub use scheduler_error::SchedulerError;
pub use store_error::StoreError;

/// Top-level error type wrapping every subsystem error.
#[derive(Debug, thiserror::Error)]
pub enum FleetcareError {
    #[error("store error: {0}")]
    StoreError(#[from] StoreError),

    #[error("scheduler error: {0}")]
    SchedulerError(#[from] SchedulerError),

    #[error("config error: {0}")]
    ConfigError(#[from] toml::de::Error),
}

/// Convenience alias used throughout the workspace.
pub type FleetcareResult<T> = Result<T, FleetcareError>;

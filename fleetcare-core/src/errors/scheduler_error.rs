/// Scheduler lifecycle errors.
#[derive(Debug, thiserror::Error)]
pub enum SchedulerError {
    #[error("scheduler already started")]
    AlreadyStarted,

    #[error("scheduler is not running")]
    NotRunning,
}

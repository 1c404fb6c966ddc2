//! # fleetcare-scheduler
//!
//! The process-wide background scheduler: four independent periodic tasks
//! (mileage ladder, rule-table evaluation, document expiry, notification
//! retention purge) over the host's stores. Task bodies live in [`tasks`] as
//! plain functions taking `now`, so tests drive them directly without
//! timers; [`Scheduler`] owns the tokio loops and the start/stop lifecycle.

pub mod clock;
pub mod scheduler;
pub mod tasks;

pub use scheduler::{Scheduler, SchedulerStores};
pub use tasks::PassSummary;

//! # fleetcare-maintenance
//!
//! The maintenance decision table and the evaluator that walks it, plus the
//! distance-only mileage reminder ladder. Evaluation is pure: callers supply
//! the vehicle snapshot and `now`, and identical inputs yield an identical,
//! deterministically ordered recommendation list.

pub mod evaluator;
pub mod mileage;
pub mod rules;

pub use evaluator::evaluate;
pub use mileage::{band_for, MileageBand};
pub use rules::{oil_change_thresholds, rules_for_vehicle, MaintenanceRule};

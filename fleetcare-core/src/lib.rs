//! # fleetcare-core
//!
//! Foundation crate for the fleetcare maintenance engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod calendar;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod vehicle;

// Re-export the most commonly used types at the crate root.
pub use config::FleetcareConfig;
pub use errors::{FleetcareError, FleetcareResult};
pub use vehicle::{
    MaintenanceCategory, OilType, ServiceHistory, ServicePoint, UsageIntensity, UsageProfile,
    Vehicle,
};

pub mod base;
pub mod history;
pub mod types;

pub use base::Vehicle;
pub use history::{ServiceHistory, ServicePoint};
pub use types::{MaintenanceCategory, OilType, UsageIntensity, UsageProfile};

use crate::errors::FleetcareResult;
use crate::models::ServiceLogEntry;

/// Read access to workshop service logs.
pub trait ServiceLogStore: Send + Sync {
    /// Most recent service-log entry for a vehicle, by date descending.
    fn latest_entry(&self, vehicle_id: &str) -> FleetcareResult<Option<ServiceLogEntry>>;
}

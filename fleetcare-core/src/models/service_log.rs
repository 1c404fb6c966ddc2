use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A workshop service-log entry. The mileage ladder measures distance from
/// the most recent of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceLogEntry {
    pub vehicle_id: String,
    pub performed_at: DateTime<Utc>,
    pub odometer_km: u32,
}

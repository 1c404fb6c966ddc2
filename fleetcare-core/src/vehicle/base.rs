use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::history::ServiceHistory;
use super::types::{OilType, UsageIntensity, UsageProfile};

/// A vehicle snapshot as read from the host's store. The engine never writes
/// back to it; the "last performed" history is updated elsewhere by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub owner_id: String,
    pub plate: String,
    /// Current odometer reading in kilometers.
    pub odometer_km: u32,
    pub usage_profile: UsageProfile,
    pub oil_type: OilType,
    pub usage_intensity: UsageIntensity,
    #[serde(default)]
    pub service_history: ServiceHistory,
    /// SOAT purchase date; validity is exactly one calendar year.
    pub soat_purchased_at: Option<NaiveDate>,
    /// Technical-inspection purchase date; same 1-year validity model.
    pub inspection_purchased_at: Option<NaiveDate>,
}

//! Entity builders. Each returns a plausible default; tests tweak fields.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use fleetcare_core::models::{DocumentKind, ServiceLogEntry, VehicleDocument};
use fleetcare_core::{
    OilType, ServiceHistory, ServicePoint, UsageIntensity, UsageProfile, Vehicle,
};

/// A daily-use synthetic-oil vehicle at 12 000 km with an empty service
/// history and no document purchase dates.
pub fn make_vehicle(id: &str) -> Vehicle {
    Vehicle {
        id: id.to_string(),
        owner_id: format!("owner-{id}"),
        plate: format!("ABC-{id}"),
        odometer_km: 12_000,
        usage_profile: UsageProfile::Daily,
        oil_type: OilType::Synthetic,
        usage_intensity: UsageIntensity::Normal,
        service_history: ServiceHistory::default(),
        soat_purchased_at: None,
        inspection_purchased_at: None,
    }
}

/// A service point `months_ago` months in the past at `odometer_km`.
pub fn service_point(now: DateTime<Utc>, months_ago: i64, odometer_km: u32) -> ServicePoint {
    ServicePoint {
        // 30-day months are close enough for test offsets.
        performed_at: now - Duration::days(30 * months_ago),
        odometer_km,
    }
}

pub fn make_document(
    id: &str,
    vehicle: &Vehicle,
    kind: DocumentKind,
    expires_at: NaiveDate,
) -> VehicleDocument {
    VehicleDocument {
        id: id.to_string(),
        vehicle_id: vehicle.id.clone(),
        owner_id: vehicle.owner_id.clone(),
        kind,
        expires_at,
        expiry_notified: false,
    }
}

pub fn make_service_log_entry(
    vehicle_id: &str,
    performed_at: DateTime<Utc>,
    odometer_km: u32,
) -> ServiceLogEntry {
    ServiceLogEntry {
        vehicle_id: vehicle_id.to_string(),
        performed_at,
        odometer_km,
    }
}

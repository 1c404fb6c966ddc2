use chrono::NaiveDate;
use fleetcare_core::models::*;
use fleetcare_core::*;

#[test]
fn enums_serialize_as_snake_case() {
    assert_eq!(
        serde_json::to_string(&UsageProfile::Daily).unwrap(),
        r#""daily""#
    );
    assert_eq!(
        serde_json::to_string(&OilType::SemiSynthetic).unwrap(),
        r#""semi_synthetic""#
    );
    assert_eq!(
        serde_json::to_string(&UsageIntensity::StopAndGoCity).unwrap(),
        r#""stop_and_go_city""#
    );
    assert_eq!(
        serde_json::to_string(&Urgency::Important).unwrap(),
        r#""important""#
    );
}

#[test]
fn vehicle_roundtrips_through_json() {
    let vehicle = Vehicle {
        id: "v1".to_string(),
        owner_id: "u1".to_string(),
        plate: "XYZ-123".to_string(),
        odometer_km: 42_000,
        usage_profile: UsageProfile::Occasional,
        oil_type: OilType::Mineral,
        usage_intensity: UsageIntensity::Highway,
        service_history: ServiceHistory::default(),
        soat_purchased_at: NaiveDate::from_ymd_opt(2025, 8, 1),
        inspection_purchased_at: None,
    };

    let json = serde_json::to_string(&vehicle).unwrap();
    let back: Vehicle = serde_json::from_str(&json).unwrap();
    assert_eq!(back, vehicle);
}

#[test]
fn vehicle_with_missing_history_deserializes_empty() {
    let json = r#"{
        "id": "v1",
        "owner_id": "u1",
        "plate": "XYZ-123",
        "odometer_km": 1000,
        "usage_profile": "daily",
        "oil_type": "synthetic",
        "usage_intensity": "normal",
        "soat_purchased_at": null,
        "inspection_purchased_at": null
    }"#;
    let vehicle: Vehicle = serde_json::from_str(json).unwrap();
    assert_eq!(vehicle.service_history, ServiceHistory::default());
}

#[test]
fn notification_category_maps_to_store_keys() {
    assert_eq!(NotificationCategory::Maintenance.as_str(), "maintenance");
    assert_eq!(NotificationCategory::Document.as_str(), "document");
}

#[test]
fn category_display_names_are_title_keys() {
    assert_eq!(MaintenanceCategory::OilChange.to_string(), "Oil change");
    assert_eq!(MaintenanceCategory::BrakeFluid.to_string(), "Brake fluid");
    assert_eq!(MaintenanceCategory::TireCheck.to_string(), "Tire check");
}

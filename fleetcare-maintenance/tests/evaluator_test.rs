use chrono::{TimeZone, Utc};
use fleetcare_core::models::Urgency;
use fleetcare_core::{MaintenanceCategory, OilType, UsageIntensity, UsageProfile};
use fleetcare_maintenance::{evaluate, rules_for_vehicle};
use test_fixtures::{make_vehicle, service_point};

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap()
}

// ── Never-performed categories ────────────────────────────────────────────

#[test]
fn fresh_daily_vehicle_flags_every_category() {
    let vehicle = make_vehicle("v1");
    let recs = evaluate(&vehicle, now());

    // Empty history: all seven daily categories pending, table order.
    let categories: Vec<_> = recs.iter().map(|r| r.category).collect();
    assert_eq!(categories, MaintenanceCategory::ALL);
}

#[test]
fn first_time_oil_change_is_urgent_with_marker() {
    let vehicle = make_vehicle("v1");
    let recs = evaluate(&vehicle, now());

    let oil = &recs[0];
    assert_eq!(oil.category, MaintenanceCategory::OilChange);
    assert_eq!(oil.urgency, Urgency::Urgent);
    assert!(oil.first_time);
    assert!(oil.message.contains("(FIRST TIME)"));
    assert_eq!(oil.next_due.km, Some(0));
}

#[test]
fn first_time_flags_regardless_of_odometer() {
    let mut vehicle = make_vehicle("v1");
    vehicle.odometer_km = 0;
    let recs = evaluate(&vehicle, now());
    assert!(recs
        .iter()
        .any(|r| r.category == MaintenanceCategory::OilChange && r.first_time));
}

#[test]
fn first_time_urgency_overrides_per_category() {
    let vehicle = make_vehicle("v1");
    let recs = evaluate(&vehicle, now());

    let urgency_of = |category| {
        recs.iter()
            .find(|r| r.category == category)
            .map(|r| r.urgency)
            .unwrap()
    };
    assert_eq!(urgency_of(MaintenanceCategory::Filters), Urgency::Important);
    assert_eq!(urgency_of(MaintenanceCategory::Battery), Urgency::Normal);
    assert_eq!(urgency_of(MaintenanceCategory::TireCheck), Urgency::Normal);
    assert_eq!(urgency_of(MaintenanceCategory::Brakes), Urgency::Urgent);
}

// ── OR semantics ──────────────────────────────────────────────────────────

#[test]
fn distance_alone_triggers_oil_change() {
    let mut vehicle = make_vehicle("v1");
    // Serviced recently by time, but 10 000 km ago (synthetic/normal -> 10 000 km / 12 mo).
    vehicle.odometer_km = 22_000;
    vehicle
        .service_history
        .record(MaintenanceCategory::OilChange, service_point(now(), 1, 12_000));
    let recs = evaluate(&vehicle, now());

    let oil = recs
        .iter()
        .find(|r| r.category == MaintenanceCategory::OilChange)
        .expect("oil change pending");
    assert!(!oil.first_time);
    // Due by distance, not by time.
    assert_eq!(oil.urgency, Urgency::Important);
    assert_eq!(oil.next_due.km, Some(0));
}

#[test]
fn time_alone_triggers_oil_change_as_urgent() {
    let mut vehicle = make_vehicle("v1");
    // Only 1 000 km driven, but 13 months elapsed.
    vehicle.odometer_km = 13_000;
    vehicle
        .service_history
        .record(MaintenanceCategory::OilChange, service_point(now(), 13, 12_000));
    let recs = evaluate(&vehicle, now());

    let oil = recs
        .iter()
        .find(|r| r.category == MaintenanceCategory::OilChange)
        .expect("oil change pending");
    assert_eq!(oil.urgency, Urgency::Urgent);
    assert_eq!(oil.next_due.months, Some(0));
    assert!(oil.next_due.km.unwrap() > 0);
}

#[test]
fn neither_threshold_met_is_quiet() {
    let mut vehicle = make_vehicle("v1");
    vehicle.odometer_km = 13_000;
    vehicle
        .service_history
        .record(MaintenanceCategory::OilChange, service_point(now(), 1, 12_000));
    let recs = evaluate(&vehicle, now());
    assert!(!recs
        .iter()
        .any(|r| r.category == MaintenanceCategory::OilChange));
}

// ── Usage-intensity modulation ────────────────────────────────────────────

#[test]
fn city_driving_flags_earlier_than_normal() {
    let base = {
        let mut v = make_vehicle("v1");
        v.odometer_km = 21_000;
        // 9 000 km since last change: inside the normal synthetic threshold
        // (10 000) but past the city one (8 000).
        v.service_history
            .record(MaintenanceCategory::OilChange, service_point(now(), 1, 12_000));
        v
    };

    let normal_recs = evaluate(&base, now());
    assert!(!normal_recs
        .iter()
        .any(|r| r.category == MaintenanceCategory::OilChange));

    let mut city = base.clone();
    city.usage_intensity = UsageIntensity::StopAndGoCity;
    let city_recs = evaluate(&city, now());
    assert!(city_recs
        .iter()
        .any(|r| r.category == MaintenanceCategory::OilChange));
}

// ── Profile scoping ───────────────────────────────────────────────────────

#[test]
fn occasional_profile_tracks_three_categories() {
    let mut vehicle = make_vehicle("v1");
    vehicle.usage_profile = UsageProfile::Occasional;
    let categories: Vec<_> = rules_for_vehicle(&vehicle)
        .iter()
        .map(|r| r.category)
        .collect();
    assert_eq!(
        categories,
        vec![
            MaintenanceCategory::OilChange,
            MaintenanceCategory::PreventiveService,
            MaintenanceCategory::TireCheck,
        ]
    );
}

#[test]
fn tire_cadence_is_time_only() {
    let mut vehicle = make_vehicle("v1");
    // Checked 15 days ago at the current odometer: daily cadence is 14 days.
    vehicle.service_history.record(
        MaintenanceCategory::TireCheck,
        fleetcare_core::ServicePoint {
            performed_at: now() - chrono::Duration::days(15),
            odometer_km: vehicle.odometer_km,
        },
    );
    let recs = evaluate(&vehicle, now());
    let tires = recs
        .iter()
        .find(|r| r.category == MaintenanceCategory::TireCheck)
        .expect("tire check pending");
    assert_eq!(tires.urgency, Urgency::Normal);
    assert_eq!(tires.next_due.days, Some(0));
    assert_eq!(tires.next_due.km, None);
}

#[test]
fn neglected_tires_escalate_to_important() {
    let mut vehicle = make_vehicle("v1");
    // 30 days without a check is 2x the 14-day daily cadence.
    vehicle.service_history.record(
        MaintenanceCategory::TireCheck,
        fleetcare_core::ServicePoint {
            performed_at: now() - chrono::Duration::days(30),
            odometer_km: vehicle.odometer_km,
        },
    );
    let recs = evaluate(&vehicle, now());
    let tires = recs
        .iter()
        .find(|r| r.category == MaintenanceCategory::TireCheck)
        .expect("tire check pending");
    assert_eq!(tires.urgency, Urgency::Important);
}

// ── End-to-end reference scenario ─────────────────────────────────────────

#[test]
fn fresh_synthetic_daily_vehicle_matches_reference_scenario() {
    let mut vehicle = make_vehicle("v1");
    vehicle.usage_profile = UsageProfile::Daily;
    vehicle.oil_type = OilType::Synthetic;
    vehicle.usage_intensity = UsageIntensity::Normal;
    vehicle.odometer_km = 12_000;

    let recs = evaluate(&vehicle, now());
    let oil = &recs[0];
    assert_eq!(oil.category, MaintenanceCategory::OilChange);
    assert_eq!(oil.urgency, Urgency::Urgent);
    assert!(oil.message.contains("(FIRST TIME)"));
    assert_eq!(oil.next_due.km, Some(0));
}

// ── Determinism ───────────────────────────────────────────────────────────

#[test]
fn evaluation_is_deterministic() {
    let mut vehicle = make_vehicle("v1");
    vehicle.odometer_km = 55_000;
    vehicle
        .service_history
        .record(MaintenanceCategory::OilChange, service_point(now(), 7, 40_000));
    vehicle
        .service_history
        .record(MaintenanceCategory::Brakes, service_point(now(), 30, 20_000));

    let first = evaluate(&vehicle, now());
    let second = evaluate(&vehicle, now());
    assert_eq!(first, second);
}

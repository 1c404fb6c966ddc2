use chrono::{Duration, NaiveDate};
use fleetcare_core::models::{DocumentKind, ExpiryState};
use fleetcare_expiry::{collect_alerts, days_remaining, expiry_date, status};
use test_fixtures::make_vehicle;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A purchase date whose expiry lands exactly `days` from `today`.
fn purchased_expiring_in(today: NaiveDate, days: i64) -> NaiveDate {
    let mut purchased = today + Duration::days(days) - Duration::days(365);
    // Walk until the calendar-aware expiry actually lands on the target
    // (leap years shift it by a day).
    let target = today + Duration::days(days);
    while expiry_date(purchased) < target {
        purchased += Duration::days(1);
    }
    while expiry_date(purchased) > target {
        purchased -= Duration::days(1);
    }
    purchased
}

// ── Expiry date arithmetic ────────────────────────────────────────────────

#[test]
fn expiry_is_one_calendar_year_out() {
    assert_eq!(expiry_date(date(2025, 3, 15)), date(2026, 3, 15));
}

#[test]
fn leap_day_purchase_clamps_to_feb_28() {
    assert_eq!(expiry_date(date(2024, 2, 29)), date(2025, 2, 28));
}

#[test]
fn days_remaining_is_negative_after_expiry() {
    let today = date(2026, 4, 1);
    assert!(days_remaining(date(2025, 3, 15), today) < 0);
}

// ── Status boundaries ─────────────────────────────────────────────────────

#[test]
fn zero_days_remaining_is_expired() {
    let today = date(2026, 6, 1);
    let purchased = purchased_expiring_in(today, 0);
    let st = status(Some(purchased), today, "SOAT");
    assert_eq!(st.state, ExpiryState::Expired);
    assert!(st.state.alert());
}

#[test]
fn three_days_remaining_is_critical() {
    let today = date(2026, 6, 1);
    let purchased = purchased_expiring_in(today, 3);
    let st = status(Some(purchased), today, "SOAT");
    assert_eq!(st.state, ExpiryState::Critical);
    assert_eq!(st.days_remaining, Some(3));
}

#[test]
fn four_days_remaining_is_upcoming() {
    let today = date(2026, 6, 1);
    let purchased = purchased_expiring_in(today, 4);
    let st = status(Some(purchased), today, "SOAT");
    assert_eq!(st.state, ExpiryState::Upcoming);
}

#[test]
fn eight_days_remaining_is_ok() {
    let today = date(2026, 6, 1);
    let purchased = purchased_expiring_in(today, 8);
    let st = status(Some(purchased), today, "SOAT");
    assert_eq!(st.state, ExpiryState::Ok);
    assert!(!st.state.alert());
}

#[test]
fn missing_date_is_no_date_without_alert() {
    let st = status(None, date(2026, 6, 1), "technical inspection");
    assert_eq!(st.state, ExpiryState::NoDate);
    assert!(!st.state.alert());
    assert_eq!(st.days_remaining, None);
    assert!(st.message.contains("technical inspection"));
}

// ── Alert sweep ───────────────────────────────────────────────────────────

#[test]
fn sweep_returns_only_alerting_entries() {
    let today = date(2026, 6, 1);

    let mut critical = make_vehicle("v1");
    critical.soat_purchased_at = Some(purchased_expiring_in(today, 2));
    // Inspection far in the future, no alert for it.
    critical.inspection_purchased_at = Some(today - Duration::days(10));

    let mut quiet = make_vehicle("v2");
    quiet.soat_purchased_at = Some(today - Duration::days(10));

    let no_dates = make_vehicle("v3");

    let alerts = collect_alerts(&[critical, quiet, no_dates], today);
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].kind, DocumentKind::Soat);
    assert_eq!(alerts[0].vehicle_id, "v1");
    assert_eq!(alerts[0].state, ExpiryState::Critical);
    assert_eq!(alerts[0].days_remaining, 2);
}

#[test]
fn sweep_evaluates_both_documents_independently() {
    let today = date(2026, 6, 1);
    let mut vehicle = make_vehicle("v1");
    vehicle.soat_purchased_at = Some(purchased_expiring_in(today, 1));
    vehicle.inspection_purchased_at = Some(purchased_expiring_in(today, 6));

    let alerts = collect_alerts(std::slice::from_ref(&vehicle), today);
    assert_eq!(alerts.len(), 2);
    assert_eq!(alerts[0].kind, DocumentKind::Soat);
    assert_eq!(alerts[0].state, ExpiryState::Critical);
    assert_eq!(alerts[1].kind, DocumentKind::TechnicalInspection);
    assert_eq!(alerts[1].state, ExpiryState::Upcoming);
}

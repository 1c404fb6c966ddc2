use chrono::NaiveDate;

use fleetcare_core::calendar;
use fleetcare_core::constants::DOCUMENT_VALIDITY_MONTHS;
use fleetcare_core::models::{DocumentStatus, ExpiryState};

/// Expiry date of a document purchased on `purchased_at`: exactly one
/// calendar year later (a Feb 29 purchase clamps to Feb 28).
pub fn expiry_date(purchased_at: NaiveDate) -> NaiveDate {
    calendar::add_months(purchased_at, DOCUMENT_VALIDITY_MONTHS)
}

/// Days remaining until expiry at day granularity. Zero on the expiry date
/// itself, negative afterwards.
pub fn days_remaining(purchased_at: NaiveDate, today: NaiveDate) -> i64 {
    (expiry_date(purchased_at) - today).num_days()
}

/// Categorical status for a nullable purchase date. `label` names the
/// document in the human message ("SOAT", "technical inspection").
pub fn status(purchased_at: Option<NaiveDate>, today: NaiveDate, label: &str) -> DocumentStatus {
    let Some(purchased) = purchased_at else {
        return DocumentStatus {
            state: ExpiryState::NoDate,
            message: format!("No purchase date recorded for {label}"),
            days_remaining: None,
            expires_at: None,
        };
    };

    let expires = expiry_date(purchased);
    let days = (expires - today).num_days();

    let (state, message) = match days {
        d if d <= 0 => (
            ExpiryState::Expired,
            format!("{label} expired on {expires}"),
        ),
        d @ 1..=3 => (
            ExpiryState::Critical,
            format!("{label} expires in {d} day(s), renew immediately"),
        ),
        d @ 4..=7 => (
            ExpiryState::Upcoming,
            format!("{label} expires in {d} day(s)"),
        ),
        d => (
            ExpiryState::Ok,
            format!("{label} is valid, {d} day(s) remaining"),
        ),
    };

    DocumentStatus {
        state,
        message,
        days_remaining: Some(days),
        expires_at: Some(expires),
    }
}

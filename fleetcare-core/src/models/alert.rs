use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::document::DocumentKind;

/// Categorical expiry state for a purchase-date-stamped document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryState {
    /// No purchase date recorded.
    NoDate,
    /// Expiry date reached or passed.
    Expired,
    /// 1–3 days remaining.
    Critical,
    /// 4–7 days remaining.
    Upcoming,
    /// More than 7 days remaining.
    Ok,
}

impl ExpiryState {
    /// Whether this state should surface as a user-visible alert.
    pub fn alert(self) -> bool {
        matches!(
            self,
            ExpiryState::Expired | ExpiryState::Critical | ExpiryState::Upcoming
        )
    }
}

/// Full status for one document slot of one vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentStatus {
    pub state: ExpiryState,
    pub message: String,
    /// Day-granularity count; negative once expired. `None` without a date.
    pub days_remaining: Option<i64>,
    pub expires_at: Option<NaiveDate>,
}

/// An alert record returned by the document sweep, only for states where
/// [`ExpiryState::alert`] is true, so a date is always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentAlert {
    pub kind: DocumentKind,
    pub vehicle_id: String,
    pub vehicle_plate: String,
    pub state: ExpiryState,
    pub message: String,
    pub days_remaining: i64,
    pub expires_at: NaiveDate,
}

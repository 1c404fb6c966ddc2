use serde::{Deserialize, Serialize};
use std::fmt;

use crate::vehicle::MaintenanceCategory;

/// How urgently a recommendation should be acted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Normal,
    Important,
    Urgent,
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Urgency::Normal => "normal",
            Urgency::Important => "important",
            Urgency::Urgent => "urgent",
        };
        f.write_str(name)
    }
}

/// Remaining room before a category's thresholds, clamped to ≥ 0. Only the
/// dimensions the category defines are populated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextDue {
    pub km: Option<u32>,
    pub months: Option<u32>,
    pub days: Option<u32>,
}

/// A pending maintenance recommendation for one category. Ephemeral: produced
/// by the evaluator, consumed by the notification gate or the host, never
/// persisted by this engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub category: MaintenanceCategory,
    pub urgency: Urgency,
    pub title: String,
    pub message: String,
    /// True when the category was never performed on this vehicle.
    pub first_time: bool,
    pub next_due: NextDue,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category key stamped on notifications created by this engine. The store
/// holds arbitrary category strings; unrelated application code writes its
/// own keys alongside these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationCategory {
    Maintenance,
    Document,
}

impl NotificationCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationCategory::Maintenance => "maintenance",
            NotificationCategory::Document => "document",
        }
    }
}

impl fmt::Display for NotificationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A notification row as stored by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub message: String,
    pub category: String,
    /// Vehicle or document id this notification refers to.
    pub reference_id: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a notification. The store assigns id and timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewNotification {
    pub user_id: String,
    pub title: String,
    pub message: String,
    pub category: NotificationCategory,
    pub reference_id: String,
}

/// Match criteria for the dedup lookup. `title_contains` is a
/// case-insensitive substring match, applied store-side.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationFilter {
    pub user_id: String,
    pub category: NotificationCategory,
    pub reference_id: String,
    pub title_contains: Option<String>,
}

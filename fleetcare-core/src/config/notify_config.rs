use serde::{Deserialize, Serialize};

use super::defaults;

/// Notification subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifyConfig {
    /// Trailing window (days) within which an equivalent notification is
    /// suppressed.
    pub dedup_window_days: i64,
    /// Notifications older than this many days are purged, read or unread.
    pub retention_days: i64,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            dedup_window_days: defaults::DEFAULT_DEDUP_WINDOW_DAYS,
            retention_days: defaults::DEFAULT_RETENTION_DAYS,
        }
    }
}

use chrono::{DateTime, Utc};

use crate::errors::FleetcareResult;
use crate::models::{NewNotification, Notification, NotificationFilter};

/// The notification sink and the queries the dedup gate and purge task need.
/// Individual calls are atomic at the store layer; there is no cross-call
/// transaction.
pub trait NotificationStore: Send + Sync {
    /// Create a notification. The store assigns id and creation timestamp.
    fn create(&self, notification: NewNotification) -> FleetcareResult<()>;

    /// Notifications matching `filter` created at or after `since`.
    /// `title_contains` is matched as a case-insensitive substring.
    fn find_recent(
        &self,
        filter: &NotificationFilter,
        since: DateTime<Utc>,
    ) -> FleetcareResult<Vec<Notification>>;

    /// Delete every notification created before `cutoff`, read or unread.
    /// Returns the number removed.
    fn delete_older_than(&self, cutoff: DateTime<Utc>) -> FleetcareResult<usize>;
}

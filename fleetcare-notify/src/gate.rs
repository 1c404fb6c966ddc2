//! The dedup gate in front of the notification sink.

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use fleetcare_core::config::defaults::DEFAULT_DEDUP_WINDOW_DAYS;
use fleetcare_core::errors::FleetcareResult;
use fleetcare_core::models::{
    NewNotification, NotificationCategory, NotificationFilter, Recommendation,
};
use fleetcare_core::traits::NotificationStore;
use fleetcare_core::Vehicle;

use crate::message;

/// Suppresses a notification when an equivalent one (same user, category,
/// reference, and title substring) was already created inside the trailing
/// window.
///
/// The existence check and the subsequent create are not atomic; two
/// interleaved passes can both miss and write a duplicate. Accepted: the
/// cost is one extra reminder, and the next pass is suppressed again.
pub struct NotificationGate<'a> {
    store: &'a dyn NotificationStore,
    window: Duration,
}

impl<'a> NotificationGate<'a> {
    pub fn new(store: &'a dyn NotificationStore) -> Self {
        Self::with_window_days(store, DEFAULT_DEDUP_WINDOW_DAYS)
    }

    pub fn with_window_days(store: &'a dyn NotificationStore, days: i64) -> Self {
        Self {
            store,
            window: Duration::days(days),
        }
    }

    /// Create a notification unless an equivalent one exists inside the
    /// window. `title_key` is the substring matched against existing titles
    /// (case-insensitive). Returns true when a notification was created.
    pub fn try_notify(
        &self,
        user_id: &str,
        category: NotificationCategory,
        reference_id: &str,
        title_key: &str,
        title: &str,
        message: &str,
        now: DateTime<Utc>,
    ) -> FleetcareResult<bool> {
        let filter = NotificationFilter {
            user_id: user_id.to_string(),
            category,
            reference_id: reference_id.to_string(),
            title_contains: Some(title_key.to_string()),
        };

        let existing = self.store.find_recent(&filter, now - self.window)?;
        if !existing.is_empty() {
            debug!(
                user = user_id,
                reference = reference_id,
                key = title_key,
                "equivalent notification inside window, suppressed"
            );
            return Ok(false);
        }

        self.store.create(NewNotification {
            user_id: user_id.to_string(),
            title: title.to_string(),
            message: message.to_string(),
            category,
            reference_id: reference_id.to_string(),
        })?;
        Ok(true)
    }

    /// Emit a maintenance recommendation for a vehicle's owner, keyed by the
    /// category's display name and the vehicle id, with the next-due suffix
    /// appended to the message.
    pub fn try_notify_maintenance(
        &self,
        user_id: &str,
        vehicle: &Vehicle,
        recommendation: &Recommendation,
        now: DateTime<Utc>,
    ) -> FleetcareResult<bool> {
        let message = message::with_next_due(&recommendation.message, &recommendation.next_due);
        self.try_notify(
            user_id,
            NotificationCategory::Maintenance,
            &vehicle.id,
            &recommendation.category.to_string(),
            &recommendation.title,
            &message,
            now,
        )
    }
}

//! The four periodic pass bodies.
//!
//! Each is a plain function over the store traits taking an explicit `now`,
//! so tests invoke them directly without timers. Per-entity failures are
//! logged and skipped; only a failed listing query abandons a pass.

use chrono::{DateTime, Duration, Utc};
use tracing::warn;

use fleetcare_core::config::NotifyConfig;
use fleetcare_core::constants::DOCUMENT_EXPIRY_NOTICE_DAYS;
use fleetcare_core::errors::FleetcareResult;
use fleetcare_core::models::{NewNotification, NotificationCategory, VehicleDocument};
use fleetcare_core::traits::{NotificationStore, ServiceLogStore, VehicleStore};
use fleetcare_core::Vehicle;
use fleetcare_notify::NotificationGate;

/// Outcome counters for one pass, logged by the scheduler loop.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PassSummary {
    /// Entities the pass looked at.
    pub processed: usize,
    /// Notifications actually created.
    pub notified: usize,
    /// Entities skipped after a processing failure.
    pub failed: usize,
}

// ── Mileage ladder pass ───────────────────────────────────────────────────

/// Distance-only reminders measured from the last workshop service entry.
pub fn run_mileage_pass(
    vehicles: &dyn VehicleStore,
    service_logs: &dyn ServiceLogStore,
    notifications: &dyn NotificationStore,
    config: &NotifyConfig,
    now: DateTime<Utc>,
) -> FleetcareResult<PassSummary> {
    let gate = NotificationGate::with_window_days(notifications, config.dedup_window_days);
    let mut summary = PassSummary::default();

    for vehicle in vehicles.list_vehicles()? {
        summary.processed += 1;
        match mileage_check(&gate, service_logs, &vehicle, now) {
            Ok(true) => summary.notified += 1,
            Ok(false) => {}
            Err(error) => {
                summary.failed += 1;
                warn!(vehicle = %vehicle.id, %error, "mileage check failed, skipping vehicle");
            }
        }
    }

    Ok(summary)
}

fn mileage_check(
    gate: &NotificationGate<'_>,
    service_logs: &dyn ServiceLogStore,
    vehicle: &Vehicle,
    now: DateTime<Utc>,
) -> FleetcareResult<bool> {
    let delta_km = match service_logs.latest_entry(&vehicle.id)? {
        Some(entry) => vehicle.odometer_km.saturating_sub(entry.odometer_km),
        // No service log at all: the whole odometer counts.
        None => vehicle.odometer_km,
    };

    let Some(band) = fleetcare_maintenance::band_for(delta_km) else {
        return Ok(false);
    };

    gate.try_notify(
        &vehicle.owner_id,
        NotificationCategory::Maintenance,
        &vehicle.id,
        band.title(),
        band.title(),
        &band.message(delta_km),
        now,
    )
}

// ── Rule-table pass ───────────────────────────────────────────────────────

/// Full rule-table evaluation across all vehicles, gated per category.
pub fn run_rule_pass(
    vehicles: &dyn VehicleStore,
    notifications: &dyn NotificationStore,
    config: &NotifyConfig,
    now: DateTime<Utc>,
) -> FleetcareResult<PassSummary> {
    let gate = NotificationGate::with_window_days(notifications, config.dedup_window_days);
    let mut summary = PassSummary::default();

    for vehicle in vehicles.list_vehicles()? {
        summary.processed += 1;
        match rule_check(&gate, &vehicle, now) {
            Ok(created) => summary.notified += created,
            Err(error) => {
                summary.failed += 1;
                warn!(vehicle = %vehicle.id, %error, "rule evaluation failed, skipping vehicle");
            }
        }
    }

    Ok(summary)
}

fn rule_check(
    gate: &NotificationGate<'_>,
    vehicle: &Vehicle,
    now: DateTime<Utc>,
) -> FleetcareResult<usize> {
    let mut created = 0;
    for recommendation in fleetcare_maintenance::evaluate(vehicle, now) {
        if gate.try_notify_maintenance(&vehicle.owner_id, vehicle, &recommendation, now)? {
            created += 1;
        }
    }
    Ok(created)
}

// ── Document-expiry pass ──────────────────────────────────────────────────

/// Two independent expiry paths:
///
/// 1. Explicit document records expiring within the notice window, each
///    notified exactly once via the permanent `expiry_notified` flag.
/// 2. Purchase-date-derived SOAT/inspection expiry through the dedup window.
///
/// A vehicle carrying both a purchase date and an explicit record can
/// receive both notifications for the same real-world expiry; the paths are
/// deliberately not deduplicated against each other.
pub fn run_document_pass(
    vehicles: &dyn VehicleStore,
    notifications: &dyn NotificationStore,
    config: &NotifyConfig,
    now: DateTime<Utc>,
) -> FleetcareResult<PassSummary> {
    let gate = NotificationGate::with_window_days(notifications, config.dedup_window_days);
    let today = now.date_naive();
    let mut summary = PassSummary::default();

    // Path 1: explicit documents, one-shot flag. A failed listing abandons
    // only this path; the purchase-date sweep below still runs.
    match vehicles.list_documents_expiring_within(
        today,
        today + Duration::days(DOCUMENT_EXPIRY_NOTICE_DAYS),
    ) {
        Ok(documents) => {
            for document in documents {
                summary.processed += 1;
                match notify_document_once(vehicles, notifications, &document, now) {
                    Ok(true) => summary.notified += 1,
                    Ok(false) => {}
                    Err(error) => {
                        summary.failed += 1;
                        warn!(document = %document.id, %error, "document notification failed, skipping");
                    }
                }
            }
        }
        Err(error) => warn!(%error, "document listing failed, explicit-document path abandoned"),
    }

    // Path 2: purchase-date-derived expiry.
    for vehicle in vehicles.list_vehicles()? {
        summary.processed += 1;
        match purchase_expiry_check(&gate, &vehicle, now) {
            Ok(created) => summary.notified += created,
            Err(error) => {
                summary.failed += 1;
                warn!(vehicle = %vehicle.id, %error, "expiry check failed, skipping vehicle");
            }
        }
    }

    Ok(summary)
}

fn notify_document_once(
    vehicles: &dyn VehicleStore,
    notifications: &dyn NotificationStore,
    document: &VehicleDocument,
    now: DateTime<Utc>,
) -> FleetcareResult<bool> {
    // The listing already filters notified documents; double-checked so a
    // stale listing can't produce a second notification.
    if document.expiry_notified {
        return Ok(false);
    }

    let days_left = (document.expires_at - now.date_naive()).num_days();
    notifications.create(NewNotification {
        user_id: document.owner_id.clone(),
        title: format!("{} expiring soon", document.kind),
        message: format!(
            "Your {} expires on {} ({} day(s) left)",
            document.kind, document.expires_at, days_left
        ),
        category: NotificationCategory::Document,
        reference_id: document.id.clone(),
    })?;
    vehicles.mark_document_notified(&document.id)?;
    Ok(true)
}

fn purchase_expiry_check(
    gate: &NotificationGate<'_>,
    vehicle: &Vehicle,
    now: DateTime<Utc>,
) -> FleetcareResult<usize> {
    let mut created = 0;
    for alert in fleetcare_expiry::collect_alerts(std::slice::from_ref(vehicle), now.date_naive())
    {
        let kind = alert.kind.to_string();
        if gate.try_notify(
            &vehicle.owner_id,
            NotificationCategory::Document,
            &vehicle.id,
            &kind,
            &format!("{kind} expiry alert"),
            &alert.message,
            now,
        )? {
            created += 1;
        }
    }
    Ok(created)
}

// ── Retention purge pass ──────────────────────────────────────────────────

/// Delete every notification older than the retention window, read or
/// unread. Returns the number removed.
pub fn run_purge_pass(
    notifications: &dyn NotificationStore,
    config: &NotifyConfig,
    now: DateTime<Utc>,
) -> FleetcareResult<usize> {
    notifications.delete_older_than(now - Duration::days(config.retention_days))
}

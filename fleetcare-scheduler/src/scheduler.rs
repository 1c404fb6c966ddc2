//! Scheduler lifecycle: owns the four background loops.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration as StdDuration;

use chrono::Utc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{info, warn};

use fleetcare_core::config::FleetcareConfig;
use fleetcare_core::errors::{FleetcareResult, SchedulerError};
use fleetcare_core::traits::{NotificationStore, ServiceLogStore, VehicleStore};

use crate::clock;
use crate::tasks;

/// The host-provided stores the tasks run against.
#[derive(Clone)]
pub struct SchedulerStores {
    pub vehicles: Arc<dyn VehicleStore>,
    pub service_logs: Arc<dyn ServiceLogStore>,
    pub notifications: Arc<dyn NotificationStore>,
}

/// Process-wide background scheduler. Start it once at host startup; a
/// second `start` is refused rather than double-registering timers.
///
/// Within one task, the next tick only fires after the previous body
/// completes, so an overrun delays the next run instead of overlapping it.
/// Distinct tasks interleave freely; they share no mutable state beyond the
/// store, whose individual calls are atomic.
pub struct Scheduler {
    stores: SchedulerStores,
    config: FleetcareConfig,
    running: Arc<AtomicBool>,
    handles: Mutex<Vec<JoinHandle<()>>>,
}

impl Scheduler {
    pub fn new(stores: SchedulerStores, config: FleetcareConfig) -> Self {
        Self {
            stores,
            config,
            running: Arc::new(AtomicBool::new(false)),
            handles: Mutex::new(Vec::new()),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    /// Begin the four periodic tasks. Must be called from within a tokio
    /// runtime. Errors with [`SchedulerError::AlreadyStarted`] on re-entry.
    pub fn start(&self) -> FleetcareResult<()> {
        if self
            .running
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(SchedulerError::AlreadyStarted.into());
        }

        let spawned = vec![
            self.spawn_mileage_task(),
            self.spawn_rule_task(),
            self.spawn_document_task(),
            self.spawn_purge_task(),
        ];
        self.lock_handles().extend(spawned);

        info!("scheduler started");
        Ok(())
    }

    /// Abort the background tasks. Errors with
    /// [`SchedulerError::NotRunning`] when the scheduler isn't started.
    pub fn stop(&self) -> FleetcareResult<()> {
        if !self.running.swap(false, Ordering::SeqCst) {
            return Err(SchedulerError::NotRunning.into());
        }
        for handle in self.lock_handles().drain(..) {
            handle.abort();
        }
        info!("scheduler stopped");
        Ok(())
    }

    fn lock_handles(&self) -> std::sync::MutexGuard<'_, Vec<JoinHandle<()>>> {
        match self.handles.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn spawn_mileage_task(&self) -> JoinHandle<()> {
        let stores = self.stores.clone();
        let notify = self.config.notify.clone();
        // A zero period would panic the interval; clamp to one hour.
        let period =
            StdDuration::from_secs(self.config.scheduler.mileage_interval_hours.max(1) * 3600);

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately; skip it so the first
            // pass lands one full period after start.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                match tasks::run_mileage_pass(
                    stores.vehicles.as_ref(),
                    stores.service_logs.as_ref(),
                    stores.notifications.as_ref(),
                    &notify,
                    Utc::now(),
                ) {
                    Ok(summary) => info!(
                        task = "mileage",
                        processed = summary.processed,
                        notified = summary.notified,
                        failed = summary.failed,
                        "pass complete"
                    ),
                    Err(error) => {
                        warn!(task = "mileage", %error, "pass abandoned for this cycle")
                    }
                }
            }
        })
    }

    fn spawn_rule_task(&self) -> JoinHandle<()> {
        let stores = self.stores.clone();
        let notify = self.config.notify.clone();
        let period =
            StdDuration::from_secs(self.config.scheduler.rules_interval_hours.max(1) * 3600);

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            ticker.tick().await;
            loop {
                ticker.tick().await;
                match tasks::run_rule_pass(
                    stores.vehicles.as_ref(),
                    stores.notifications.as_ref(),
                    &notify,
                    Utc::now(),
                ) {
                    Ok(summary) => info!(
                        task = "rules",
                        processed = summary.processed,
                        notified = summary.notified,
                        failed = summary.failed,
                        "pass complete"
                    ),
                    Err(error) => {
                        warn!(task = "rules", %error, "pass abandoned for this cycle")
                    }
                }
            }
        })
    }

    fn spawn_document_task(&self) -> JoinHandle<()> {
        let stores = self.stores.clone();
        let notify = self.config.notify.clone();
        let hour = self.config.scheduler.document_check_hour;

        tokio::spawn(async move {
            sleep_until_boundary(hour).await;
            let mut ticker = tokio::time::interval(StdDuration::from_secs(24 * 3600));
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                // Immediate on the first iteration: the pass runs at the
                // boundary itself, then daily.
                ticker.tick().await;
                match tasks::run_document_pass(
                    stores.vehicles.as_ref(),
                    stores.notifications.as_ref(),
                    &notify,
                    Utc::now(),
                ) {
                    Ok(summary) => info!(
                        task = "documents",
                        processed = summary.processed,
                        notified = summary.notified,
                        failed = summary.failed,
                        "pass complete"
                    ),
                    Err(error) => {
                        warn!(task = "documents", %error, "pass abandoned for this cycle")
                    }
                }
            }
        })
    }

    fn spawn_purge_task(&self) -> JoinHandle<()> {
        let stores = self.stores.clone();
        let notify = self.config.notify.clone();
        let hour = self.config.scheduler.purge_hour;

        tokio::spawn(async move {
            sleep_until_boundary(hour).await;
            let mut ticker = tokio::time::interval(StdDuration::from_secs(24 * 3600));
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                match tasks::run_purge_pass(stores.notifications.as_ref(), &notify, Utc::now()) {
                    Ok(deleted) => info!(task = "purge", deleted, "pass complete"),
                    Err(error) => {
                        warn!(task = "purge", %error, "pass abandoned for this cycle")
                    }
                }
            }
        })
    }
}

async fn sleep_until_boundary(hour: u32) {
    let now = Utc::now();
    let delay = (clock::next_boundary(now, hour) - now)
        .to_std()
        .unwrap_or_default();
    tokio::time::sleep(delay).await;
}

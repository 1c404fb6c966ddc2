//! In-memory store implementations mirroring the host's store contracts.

use std::sync::Mutex;

use chrono::{DateTime, NaiveDate, Utc};

use fleetcare_core::errors::{FleetcareResult, StoreError};
use fleetcare_core::models::{
    NewNotification, Notification, NotificationFilter, ServiceLogEntry, VehicleDocument,
};
use fleetcare_core::traits::{NotificationStore, ServiceLogStore, VehicleStore};
use fleetcare_core::Vehicle;

/// Vehicles plus explicit document records behind a mutex.
#[derive(Default)]
pub struct InMemoryVehicleStore {
    vehicles: Mutex<Vec<Vehicle>>,
    documents: Mutex<Vec<VehicleDocument>>,
}

impl InMemoryVehicleStore {
    pub fn with_vehicles(vehicles: Vec<Vehicle>) -> Self {
        Self {
            vehicles: Mutex::new(vehicles),
            documents: Mutex::new(Vec::new()),
        }
    }

    pub fn add_document(&self, document: VehicleDocument) {
        self.documents.lock().unwrap().push(document);
    }

    pub fn document(&self, id: &str) -> Option<VehicleDocument> {
        self.documents
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.id == id)
            .cloned()
    }
}

impl VehicleStore for InMemoryVehicleStore {
    fn list_vehicles(&self) -> FleetcareResult<Vec<Vehicle>> {
        Ok(self.vehicles.lock().unwrap().clone())
    }

    fn list_documents_expiring_within(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> FleetcareResult<Vec<VehicleDocument>> {
        Ok(self
            .documents
            .lock()
            .unwrap()
            .iter()
            .filter(|d| !d.expiry_notified && d.expires_at >= from && d.expires_at <= to)
            .cloned()
            .collect())
    }

    fn mark_document_notified(&self, document_id: &str) -> FleetcareResult<()> {
        let mut documents = self.documents.lock().unwrap();
        match documents.iter_mut().find(|d| d.id == document_id) {
            Some(doc) => {
                doc.expiry_notified = true;
                Ok(())
            }
            None => Err(StoreError::NotFound {
                entity: "document",
                id: document_id.to_string(),
            }
            .into()),
        }
    }
}

/// Service-log entries behind a mutex.
#[derive(Default)]
pub struct InMemoryServiceLogStore {
    entries: Mutex<Vec<ServiceLogEntry>>,
}

impl InMemoryServiceLogStore {
    pub fn with_entries(entries: Vec<ServiceLogEntry>) -> Self {
        Self {
            entries: Mutex::new(entries),
        }
    }
}

impl ServiceLogStore for InMemoryServiceLogStore {
    fn latest_entry(&self, vehicle_id: &str) -> FleetcareResult<Option<ServiceLogEntry>> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.vehicle_id == vehicle_id)
            .max_by_key(|e| e.performed_at)
            .cloned())
    }
}

/// A service-log store that fails for one vehicle id, used to check that a
/// pass skips the failing entity and continues.
pub struct FlakyServiceLogStore {
    pub inner: InMemoryServiceLogStore,
    pub fail_for: String,
}

impl ServiceLogStore for FlakyServiceLogStore {
    fn latest_entry(&self, vehicle_id: &str) -> FleetcareResult<Option<ServiceLogEntry>> {
        if vehicle_id == self.fail_for {
            return Err(StoreError::QueryFailed {
                message: format!("injected failure for {vehicle_id}"),
            }
            .into());
        }
        self.inner.latest_entry(vehicle_id)
    }
}

/// A vehicle store whose document listing fails, used to check that the
/// purchase-date expiry path still runs when the explicit-document path is
/// abandoned.
pub struct FlakyVehicleStore {
    pub inner: InMemoryVehicleStore,
}

impl VehicleStore for FlakyVehicleStore {
    fn list_vehicles(&self) -> FleetcareResult<Vec<Vehicle>> {
        self.inner.list_vehicles()
    }

    fn list_documents_expiring_within(
        &self,
        _from: NaiveDate,
        _to: NaiveDate,
    ) -> FleetcareResult<Vec<VehicleDocument>> {
        Err(StoreError::QueryFailed {
            message: "injected document listing failure".to_string(),
        }
        .into())
    }

    fn mark_document_notified(&self, document_id: &str) -> FleetcareResult<()> {
        self.inner.mark_document_notified(document_id)
    }
}

/// Notification sink stamping ids and timestamps, with the case-insensitive
/// title matching the dedup gate relies on.
#[derive(Default)]
pub struct InMemoryNotificationStore {
    notifications: Mutex<Vec<Notification>>,
}

impl InMemoryNotificationStore {
    /// Insert a pre-built row, bypassing the stamping in `create`; lets
    /// tests plant notifications at arbitrary points in the past.
    pub fn insert_raw(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }

    pub fn all(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.notifications.lock().unwrap().len()
    }
}

impl NotificationStore for InMemoryNotificationStore {
    fn create(&self, notification: NewNotification) -> FleetcareResult<()> {
        self.notifications.lock().unwrap().push(Notification {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: notification.user_id,
            title: notification.title,
            message: notification.message,
            category: notification.category.as_str().to_string(),
            reference_id: notification.reference_id,
            read: false,
            created_at: Utc::now(),
        });
        Ok(())
    }

    fn find_recent(
        &self,
        filter: &NotificationFilter,
        since: DateTime<Utc>,
    ) -> FleetcareResult<Vec<Notification>> {
        let needle = filter
            .title_contains
            .as_ref()
            .map(|t| t.to_lowercase());
        Ok(self
            .notifications
            .lock()
            .unwrap()
            .iter()
            .filter(|n| {
                n.user_id == filter.user_id
                    && n.category == filter.category.as_str()
                    && n.reference_id == filter.reference_id
                    && n.created_at >= since
                    && needle
                        .as_ref()
                        .map_or(true, |t| n.title.to_lowercase().contains(t))
            })
            .cloned()
            .collect())
    }

    fn delete_older_than(&self, cutoff: DateTime<Utc>) -> FleetcareResult<usize> {
        let mut notifications = self.notifications.lock().unwrap();
        let before = notifications.len();
        notifications.retain(|n| n.created_at >= cutoff);
        Ok(before - notifications.len())
    }
}

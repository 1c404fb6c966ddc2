use chrono::NaiveDate;

use crate::errors::FleetcareResult;
use crate::models::VehicleDocument;
use crate::vehicle::Vehicle;

/// Read access to vehicles and their explicit document records, plus the
/// one write this engine performs: flipping a document's one-shot
/// notification flag.
pub trait VehicleStore: Send + Sync {
    /// All vehicles, owner reference populated.
    fn list_vehicles(&self) -> FleetcareResult<Vec<Vehicle>>;

    /// Documents with `expires_at` inside `[from, to]` (inclusive) that have
    /// not yet been notified of expiry.
    fn list_documents_expiring_within(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> FleetcareResult<Vec<VehicleDocument>>;

    /// Permanently mark a document's expiry notification as sent.
    fn mark_document_notified(&self, document_id: &str) -> FleetcareResult<()>;
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a vehicle document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Soat,
    TechnicalInspection,
    Other,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentKind::Soat => "SOAT",
            DocumentKind::TechnicalInspection => "technical inspection",
            DocumentKind::Other => "document",
        };
        f.write_str(name)
    }
}

/// An explicit document record owned by the host's store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleDocument {
    pub id: String,
    pub vehicle_id: String,
    pub owner_id: String,
    pub kind: DocumentKind,
    pub expires_at: NaiveDate,
    /// Set true exactly once, the first time a near-expiry notification is
    /// emitted. Reset externally if the document is re-issued.
    pub expiry_notified: bool,
}

//! In-memory mock stores and entity builders shared by integration tests
//! across the workspace.

pub mod builders;
pub mod stores;

pub use builders::{make_document, make_service_log_entry, make_vehicle, service_point};
pub use stores::{
    FlakyServiceLogStore, FlakyVehicleStore, InMemoryNotificationStore,
    InMemoryServiceLogStore, InMemoryVehicleStore,
};

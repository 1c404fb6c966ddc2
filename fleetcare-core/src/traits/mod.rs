pub mod notification_store;
pub mod service_log_store;
pub mod vehicle_store;

pub use notification_store::NotificationStore;
pub use service_log_store::ServiceLogStore;
pub use vehicle_store::VehicleStore;

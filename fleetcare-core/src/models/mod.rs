pub mod alert;
pub mod document;
pub mod notification;
pub mod recommendation;
pub mod service_log;

pub use alert::{DocumentAlert, DocumentStatus, ExpiryState};
pub use document::{DocumentKind, VehicleDocument};
pub use notification::{NewNotification, Notification, NotificationCategory, NotificationFilter};
pub use recommendation::{NextDue, Recommendation, Urgency};
pub use service_log::ServiceLogEntry;

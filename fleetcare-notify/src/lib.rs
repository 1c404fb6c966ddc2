//! # fleetcare-notify
//!
//! The dedup gate between recommendation producers and the host's
//! notification sink: an equivalent notification created inside the trailing
//! window suppresses a new one, so repeated scheduler passes within the same
//! week don't spam the user.

pub mod gate;
pub mod message;

pub use gate::NotificationGate;
pub use message::with_next_due;

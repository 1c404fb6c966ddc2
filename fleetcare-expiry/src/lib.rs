//! # fleetcare-expiry
//!
//! Pure expiry calculator for SOAT and technical-inspection documents
//! (1-year validity from purchase date). Shared by the scheduler's document
//! pass and the host's on-demand "my vehicle alerts" query: no side
//! effects, callers supply `today`.

pub mod alerts;
pub mod calculator;

pub use alerts::collect_alerts;
pub use calculator::{days_remaining, expiry_date, status};

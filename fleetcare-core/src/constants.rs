/// Fleetcare system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Validity of SOAT and technical-inspection documents, in calendar months.
pub const DOCUMENT_VALIDITY_MONTHS: u32 = 12;

/// How many days before an explicit document's expiry date the one-shot
/// near-expiry notification fires.
pub const DOCUMENT_EXPIRY_NOTICE_DAYS: i64 = 3;

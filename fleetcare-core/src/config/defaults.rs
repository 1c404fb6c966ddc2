// Single source of truth for all default values.

// --- Scheduler ---
pub const DEFAULT_MILEAGE_INTERVAL_HOURS: u64 = 6;
pub const DEFAULT_RULES_INTERVAL_HOURS: u64 = 12;
pub const DEFAULT_DOCUMENT_CHECK_HOUR: u32 = 8;
pub const DEFAULT_PURGE_HOUR: u32 = 2;

// --- Notifications ---
pub const DEFAULT_DEDUP_WINDOW_DAYS: i64 = 7;
pub const DEFAULT_RETENTION_DAYS: i64 = 10;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Scheduler subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Interval between mileage-ladder passes, in hours.
    pub mileage_interval_hours: u64,
    /// Interval between rule-table passes, in hours.
    pub rules_interval_hours: u64,
    /// Hour of day (UTC, 0–23) at which the daily document-expiry pass runs.
    pub document_check_hour: u32,
    /// Hour of day (UTC, 0–23) at which the daily retention purge runs.
    pub purge_hour: u32,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            mileage_interval_hours: defaults::DEFAULT_MILEAGE_INTERVAL_HOURS,
            rules_interval_hours: defaults::DEFAULT_RULES_INTERVAL_HOURS,
            document_check_hour: defaults::DEFAULT_DOCUMENT_CHECK_HOUR,
            purge_hour: defaults::DEFAULT_PURGE_HOUR,
        }
    }
}

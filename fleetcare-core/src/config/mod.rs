pub mod defaults;

mod notify_config;
mod scheduler_config;

pub use notify_config::NotifyConfig;
pub use scheduler_config::SchedulerConfig;

use serde::{Deserialize, Serialize};

use crate::errors::FleetcareResult;

/// Top-level configuration. Every field has a default, so an empty TOML
/// string yields a fully usable config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FleetcareConfig {
    pub scheduler: SchedulerConfig,
    pub notify: NotifyConfig,
}

impl FleetcareConfig {
    /// Parse a TOML document; missing sections and fields fall back to defaults.
    pub fn from_toml(input: &str) -> FleetcareResult<Self> {
        Ok(toml::from_str(input)?)
    }
}

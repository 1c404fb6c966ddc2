use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a vehicle is driven daily or occasionally. Governs which
/// maintenance categories the rule table tracks for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsageProfile {
    Daily,
    Occasional,
}

/// Engine oil formulation, the primary input to oil-change thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OilType {
    Mineral,
    SemiSynthetic,
    Synthetic,
}

/// Secondary usage modifier. Stop-and-go city driving tightens oil-change
/// thresholds; highway driving wears like normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsageIntensity {
    Normal,
    StopAndGoCity,
    Highway,
}

/// Maintenance categories tracked by the rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceCategory {
    OilChange,
    PreventiveService,
    Filters,
    Brakes,
    BrakeFluid,
    Battery,
    TireCheck,
}

impl MaintenanceCategory {
    /// All categories in canonical evaluation order.
    pub const ALL: [MaintenanceCategory; 7] = [
        MaintenanceCategory::OilChange,
        MaintenanceCategory::PreventiveService,
        MaintenanceCategory::Filters,
        MaintenanceCategory::Brakes,
        MaintenanceCategory::BrakeFluid,
        MaintenanceCategory::Battery,
        MaintenanceCategory::TireCheck,
    ];
}

/// Display names double as the title substring the dedup gate matches on.
impl fmt::Display for MaintenanceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MaintenanceCategory::OilChange => "Oil change",
            MaintenanceCategory::PreventiveService => "Preventive service",
            MaintenanceCategory::Filters => "Filter replacement",
            MaintenanceCategory::Brakes => "Brake inspection",
            MaintenanceCategory::BrakeFluid => "Brake fluid",
            MaintenanceCategory::Battery => "Battery check",
            MaintenanceCategory::TireCheck => "Tire check",
        };
        f.write_str(name)
    }
}

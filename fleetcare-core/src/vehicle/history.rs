use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::types::MaintenanceCategory;

/// A recorded service event for one maintenance category: when it was last
/// performed and at what odometer reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ServicePoint {
    pub performed_at: DateTime<Utc>,
    pub odometer_km: u32,
}

/// Per-category service history. `None` means the category was never
/// performed; the evaluator treats that as maximally overdue, with no
/// sentinel value involved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceHistory {
    pub oil_change: Option<ServicePoint>,
    pub preventive_service: Option<ServicePoint>,
    pub filters: Option<ServicePoint>,
    pub brakes: Option<ServicePoint>,
    pub brake_fluid: Option<ServicePoint>,
    pub battery: Option<ServicePoint>,
    pub tire_check: Option<ServicePoint>,
}

impl ServiceHistory {
    /// The last recorded service for a category, if any.
    pub fn last(&self, category: MaintenanceCategory) -> Option<&ServicePoint> {
        match category {
            MaintenanceCategory::OilChange => self.oil_change.as_ref(),
            MaintenanceCategory::PreventiveService => self.preventive_service.as_ref(),
            MaintenanceCategory::Filters => self.filters.as_ref(),
            MaintenanceCategory::Brakes => self.brakes.as_ref(),
            MaintenanceCategory::BrakeFluid => self.brake_fluid.as_ref(),
            MaintenanceCategory::Battery => self.battery.as_ref(),
            MaintenanceCategory::TireCheck => self.tire_check.as_ref(),
        }
    }

    /// Record a service for a category, replacing any previous entry.
    pub fn record(&mut self, category: MaintenanceCategory, point: ServicePoint) {
        let slot = match category {
            MaintenanceCategory::OilChange => &mut self.oil_change,
            MaintenanceCategory::PreventiveService => &mut self.preventive_service,
            MaintenanceCategory::Filters => &mut self.filters,
            MaintenanceCategory::Brakes => &mut self.brakes,
            MaintenanceCategory::BrakeFluid => &mut self.brake_fluid,
            MaintenanceCategory::Battery => &mut self.battery,
            MaintenanceCategory::TireCheck => &mut self.tire_check,
        };
        *slot = Some(point);
    }
}

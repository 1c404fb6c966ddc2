//! The maintenance decision table.
//!
//! One data structure the evaluator walks, so thresholds stay auditable and
//! testable independently of the evaluation logic. A category is due when
//! elapsed distance OR elapsed time meets its threshold.

use fleetcare_core::{MaintenanceCategory, OilType, UsageIntensity, UsageProfile, Vehicle};

/// One row of the decision table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaintenanceRule {
    pub category: MaintenanceCategory,
    /// Distance threshold in km; `None` when the category is not
    /// distance-tracked.
    pub distance_km: Option<u32>,
    /// Time threshold in whole calendar months.
    pub time_months: Option<u32>,
    /// Cadence in days; tire checks recur on elapsed days alone.
    pub time_days: Option<u32>,
}

impl MaintenanceRule {
    const fn new(
        category: MaintenanceCategory,
        distance_km: Option<u32>,
        time_months: Option<u32>,
        time_days: Option<u32>,
    ) -> Self {
        Self {
            category,
            distance_km,
            time_months,
            time_days,
        }
    }
}

/// Oil-change threshold pair (km, months) by oil type and usage intensity.
///
/// Stop-and-go city driving tightens both dimensions for every oil type;
/// highway driving wears like normal.
pub fn oil_change_thresholds(oil: OilType, intensity: UsageIntensity) -> (u32, u32) {
    let city = matches!(intensity, UsageIntensity::StopAndGoCity);
    match (oil, city) {
        (OilType::Mineral, false) => (4500, 5),
        (OilType::Mineral, true) => (4000, 4),
        (OilType::SemiSynthetic, false) => (6000, 6),
        (OilType::SemiSynthetic, true) => (5500, 5),
        (OilType::Synthetic, false) => (10_000, 12),
        (OilType::Synthetic, true) => (8000, 10),
    }
}

/// The rule rows applicable to a vehicle, in evaluation order: oil change,
/// preventive service, filters, brakes, brake fluid, battery, tire check.
///
/// Only the daily profile tracks filters, brakes, brake fluid, and battery;
/// low-mileage vehicles don't accrue wear on those subsystems at a schedule
/// worth tracking. Tire cadence: 14 days daily, 30 days occasional.
pub fn rules_for_vehicle(vehicle: &Vehicle) -> Vec<MaintenanceRule> {
    use MaintenanceCategory::*;

    let (oil_km, oil_months) =
        oil_change_thresholds(vehicle.oil_type, vehicle.usage_intensity);
    let oil = MaintenanceRule::new(OilChange, Some(oil_km), Some(oil_months), None);

    match vehicle.usage_profile {
        UsageProfile::Daily => vec![
            oil,
            MaintenanceRule::new(PreventiveService, Some(10_000), Some(12), None),
            MaintenanceRule::new(Filters, Some(10_000), Some(12), None),
            MaintenanceRule::new(Brakes, Some(20_000), Some(24), None),
            MaintenanceRule::new(BrakeFluid, Some(40_000), Some(24), None),
            MaintenanceRule::new(Battery, None, Some(48), None),
            MaintenanceRule::new(TireCheck, None, None, Some(14)),
        ],
        UsageProfile::Occasional => vec![
            oil,
            MaintenanceRule::new(PreventiveService, Some(5000), Some(12), None),
            MaintenanceRule::new(TireCheck, None, None, Some(30)),
        ],
    }
}

//! Walks the decision table for a vehicle snapshot and emits pending
//! recommendations with urgency tags.

use chrono::{DateTime, Utc};

use fleetcare_core::calendar;
use fleetcare_core::models::{NextDue, Recommendation, Urgency};
use fleetcare_core::{MaintenanceCategory, ServicePoint, Vehicle};

use crate::rules::{self, MaintenanceRule};

/// Pending recommendations for a vehicle at `now`, in rule-table order.
/// Pure: identical snapshot and `now` yield an identical list.
pub fn evaluate(vehicle: &Vehicle, now: DateTime<Utc>) -> Vec<Recommendation> {
    rules::rules_for_vehicle(vehicle)
        .into_iter()
        .filter_map(|rule| evaluate_rule(vehicle, &rule, now))
        .collect()
}

fn evaluate_rule(
    vehicle: &Vehicle,
    rule: &MaintenanceRule,
    now: DateTime<Utc>,
) -> Option<Recommendation> {
    match vehicle.service_history.last(rule.category) {
        // Never performed: always pending, structurally.
        None => Some(first_time_recommendation(rule)),
        Some(point) => evaluate_elapsed(vehicle, rule, point, now),
    }
}

fn evaluate_elapsed(
    vehicle: &Vehicle,
    rule: &MaintenanceRule,
    point: &ServicePoint,
    now: DateTime<Utc>,
) -> Option<Recommendation> {
    let elapsed_km = vehicle.odometer_km.saturating_sub(point.odometer_km);
    let elapsed_months = calendar::months_between(point.performed_at, now);
    let elapsed_days = calendar::days_between(point.performed_at, now);

    let distance_due = rule.distance_km.is_some_and(|t| elapsed_km >= t);
    let months_due = rule.time_months.is_some_and(|t| elapsed_months >= t);
    let days_due = rule.time_days.is_some_and(|t| elapsed_days >= t);

    if !(distance_due || months_due || days_due) {
        return None;
    }

    let urgency = repeat_urgency(rule, months_due, elapsed_months, elapsed_days);
    let next_due = NextDue {
        km: rule.distance_km.map(|t| t.saturating_sub(elapsed_km)),
        months: rule.time_months.map(|t| t.saturating_sub(elapsed_months)),
        days: rule.time_days.map(|t| t.saturating_sub(elapsed_days)),
    };

    Some(Recommendation {
        category: rule.category,
        urgency,
        title: title_for(rule.category),
        message: base_message(rule.category).to_string(),
        first_time: false,
        next_due,
    })
}

fn first_time_recommendation(rule: &MaintenanceRule) -> Recommendation {
    let urgency = match rule.category {
        MaintenanceCategory::Filters => Urgency::Important,
        MaintenanceCategory::Battery | MaintenanceCategory::TireCheck => Urgency::Normal,
        _ => Urgency::Urgent,
    };

    Recommendation {
        category: rule.category,
        urgency,
        title: title_for(rule.category),
        message: format!("{} (FIRST TIME)", base_message(rule.category)),
        first_time: true,
        next_due: NextDue {
            km: rule.distance_km.map(|_| 0),
            months: rule.time_months.map(|_| 0),
            days: rule.time_days.map(|_| 0),
        },
    }
}

/// Urgency for a category that has been performed before.
fn repeat_urgency(
    rule: &MaintenanceRule,
    months_due: bool,
    elapsed_months: u32,
    elapsed_days: u32,
) -> Urgency {
    match rule.category {
        // Overdue by calendar time outranks overdue by distance.
        MaintenanceCategory::OilChange => {
            if months_due {
                Urgency::Urgent
            } else {
                Urgency::Important
            }
        }
        MaintenanceCategory::PreventiveService
        | MaintenanceCategory::Filters
        | MaintenanceCategory::Brakes
        | MaintenanceCategory::BrakeFluid => Urgency::Important,
        // Routine checks stay calm unless badly neglected (2x the cadence).
        MaintenanceCategory::Battery => {
            if rule.time_months.is_some_and(|t| elapsed_months >= 2 * t) {
                Urgency::Important
            } else {
                Urgency::Normal
            }
        }
        MaintenanceCategory::TireCheck => {
            if rule.time_days.is_some_and(|t| elapsed_days >= 2 * t) {
                Urgency::Important
            } else {
                Urgency::Normal
            }
        }
    }
}

fn title_for(category: MaintenanceCategory) -> String {
    format!("{category} due")
}

fn base_message(category: MaintenanceCategory) -> &'static str {
    match category {
        MaintenanceCategory::OilChange => "Engine oil change is due",
        MaintenanceCategory::PreventiveService => "Preventive service is due",
        MaintenanceCategory::Filters => "Air and fuel filter replacement is due",
        MaintenanceCategory::Brakes => "Brake system inspection is due",
        MaintenanceCategory::BrakeFluid => "Brake fluid replacement is due",
        MaintenanceCategory::Battery => "Battery condition check is due",
        MaintenanceCategory::TireCheck => "Tire pressure and wear check is due",
    }
}

use chrono::NaiveDate;

use fleetcare_core::models::{DocumentAlert, DocumentKind};
use fleetcare_core::Vehicle;

use crate::calculator;

/// Evaluate SOAT and technical inspection independently for every vehicle.
/// Returns a flat list containing only alerting entries (expired, critical,
/// or upcoming).
pub fn collect_alerts(vehicles: &[Vehicle], today: NaiveDate) -> Vec<DocumentAlert> {
    let mut alerts = Vec::new();

    for vehicle in vehicles {
        let slots = [
            (DocumentKind::Soat, vehicle.soat_purchased_at),
            (DocumentKind::TechnicalInspection, vehicle.inspection_purchased_at),
        ];
        for (kind, purchased_at) in slots {
            let status = calculator::status(purchased_at, today, &kind.to_string());
            if !status.state.alert() {
                continue;
            }
            // Alerting states always carry a date.
            let (Some(days_remaining), Some(expires_at)) =
                (status.days_remaining, status.expires_at)
            else {
                continue;
            };
            alerts.push(DocumentAlert {
                kind,
                vehicle_id: vehicle.id.clone(),
                vehicle_plate: vehicle.plate.clone(),
                state: status.state,
                message: status.message,
                days_remaining,
                expires_at,
            });
        }
    }

    alerts
}

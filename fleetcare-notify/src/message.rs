//! Human-readable next-due suffixes appended to notification messages.

use fleetcare_core::models::NextDue;

/// Append the next-due suffix for whichever remaining dimension is nonzero.
/// Distance wins over months when both are present; tire cadence uses days.
/// Nothing is appended when every dimension is zero or absent (already due).
pub fn with_next_due(message: &str, next_due: &NextDue) -> String {
    let km = next_due.km.filter(|v| *v > 0);
    let months = next_due.months.filter(|v| *v > 0);
    let days = next_due.days.filter(|v| *v > 0);

    if let Some(km) = km {
        format!("{message} (in approximately {km} km)")
    } else if let Some(months) = months {
        format!("{message} (in approximately {months} months)")
    } else if let Some(days) = days {
        format!("{message} (next check in {days} days)")
    } else {
        message.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_wins_over_months() {
        let next_due = NextDue {
            km: Some(1200),
            months: Some(2),
            days: None,
        };
        assert_eq!(
            with_next_due("Oil change is due", &next_due),
            "Oil change is due (in approximately 1200 km)"
        );
    }

    #[test]
    fn months_used_when_distance_exhausted() {
        let next_due = NextDue {
            km: Some(0),
            months: Some(3),
            days: None,
        };
        assert!(with_next_due("m", &next_due).contains("3 months"));
    }

    #[test]
    fn days_suffix_for_cadence_categories() {
        let next_due = NextDue {
            km: None,
            months: None,
            days: Some(9),
        };
        assert_eq!(
            with_next_due("Tire check", &next_due),
            "Tire check (next check in 9 days)"
        );
    }

    #[test]
    fn no_suffix_when_everything_is_due() {
        let next_due = NextDue {
            km: Some(0),
            months: Some(0),
            days: None,
        };
        assert_eq!(with_next_due("m", &next_due), "m");
    }
}

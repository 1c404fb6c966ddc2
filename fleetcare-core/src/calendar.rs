//! Calendar arithmetic shared by the evaluator and the expiry calculator.

use chrono::{DateTime, Datelike, Months, NaiveDate, Utc};

/// Whole calendar months elapsed between `from` and `to`.
///
/// Partial months floor: Jan 15 → Feb 14 is 0 months, Jan 15 → Feb 15 is 1.
/// Returns 0 when `to` precedes `from`.
pub fn months_between(from: DateTime<Utc>, to: DateTime<Utc>) -> u32 {
    if to < from {
        return 0;
    }
    let mut months =
        (to.year() - from.year()) * 12 + (to.month() as i32 - from.month() as i32);
    if to.day() < from.day() {
        months -= 1;
    }
    months.max(0) as u32
}

/// Whole days elapsed between `from` and `to` (0 when `to` precedes `from`).
pub fn days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> u32 {
    (to - from).num_days().max(0) as u32
}

/// Add `months` calendar months to a date. Day-of-month clamps to the end of
/// the target month (Feb 29 + 12 months → Feb 28).
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    // None only on year overflow; clamp rather than propagate.
    date.checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}

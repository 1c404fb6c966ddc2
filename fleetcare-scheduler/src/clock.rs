//! Boundary arithmetic for the daily tasks.

use chrono::{DateTime, Duration, NaiveTime, Utc};

/// Next occurrence of `hour:00:00` UTC strictly after `now`. Hours above 23
/// clamp to 23.
pub fn next_boundary(now: DateTime<Utc>, hour: u32) -> DateTime<Utc> {
    let time = NaiveTime::from_hms_opt(hour.min(23), 0, 0).unwrap_or(NaiveTime::MIN);
    let candidate = now.date_naive().and_time(time).and_utc();
    if candidate > now {
        candidate
    } else {
        candidate + Duration::days(1)
    }
}

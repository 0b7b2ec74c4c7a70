//! Relative age formatting
//!
//! Turns a timestamp into "just now", "5 minutes ago", "yesterday", etc.
//! for session listings.

use std::fmt::Display;

use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

/// Format the age of a Unix timestamp relative to the current local time
///
/// Timestamps in the future are not rejected; they come out as "just now".
pub fn format_age(epoch_seconds: i64) -> String {
    format_age_at(epoch_to_local(epoch_seconds), Local::now())
}

/// Format the age of `then` as seen from `now`
///
/// | age         | output                     |
/// |-------------|----------------------------|
/// | < 1 minute  | `just now`                 |
/// | < 1 hour    | `N minutes ago`            |
/// | < 1 day     | `N hours ago`              |
/// | < 2 days    | `yesterday`                |
/// | otherwise   | `N days ago (YYYY-MM-DD)`  |
///
/// Minutes and hours are taken from the seconds left over after whole days,
/// and the date is rendered in `then`'s time zone.
pub fn format_age_at<Tz>(then: DateTime<Tz>, now: DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let age = now - then.clone();

    if age < TimeDelta::minutes(1) {
        return "just now".to_string();
    }

    let seconds = age.num_seconds();
    let seconds_of_day = seconds.rem_euclid(SECONDS_PER_DAY);

    if age < TimeDelta::hours(1) {
        format!("{} minutes ago", seconds_of_day / SECONDS_PER_MINUTE)
    } else if age < TimeDelta::days(1) {
        format!("{} hours ago", seconds_of_day / SECONDS_PER_HOUR)
    } else if age < TimeDelta::days(2) {
        "yesterday".to_string()
    } else {
        format!(
            "{} days ago ({})",
            seconds.div_euclid(SECONDS_PER_DAY),
            then.format("%Y-%m-%d")
        )
    }
}

/// Out-of-range epochs clamp to the earliest/latest representable instant.
fn epoch_to_local(epoch_seconds: i64) -> DateTime<Local> {
    let utc = DateTime::from_timestamp(epoch_seconds, 0).unwrap_or(if epoch_seconds < 0 {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    });
    utc.with_timezone(&Local)
}

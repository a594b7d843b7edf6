//! Date, date-time and duration formatting in the viewer's timezone.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// How much of the clock a date-time shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Precision {
    /// `YYYY-MM-DD HH:MM`
    #[default]
    Minutes,
    /// `YYYY-MM-DD HH:MM:SS`
    Seconds,
}

/// Formats an instant as a local date-time in `tz`.
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use viewkit_format::{format_datetime, Precision};
///
/// let instant = Utc.with_ymd_and_hms(2024, 3, 1, 22, 30, 15).unwrap();
/// let berlin: chrono_tz::Tz = "Europe/Berlin".parse().unwrap();
/// assert_eq!(format_datetime(instant, berlin, Precision::Minutes), "2024-03-01 23:30");
/// assert_eq!(format_datetime(instant, berlin, Precision::Seconds), "2024-03-01 23:30:15");
/// ```
pub fn format_datetime(instant: DateTime<Utc>, tz: Tz, precision: Precision) -> String {
    let local = instant.with_timezone(&tz);
    match precision {
        Precision::Minutes => local.format("%Y-%m-%d %H:%M").to_string(),
        Precision::Seconds => local.format("%Y-%m-%d %H:%M:%S").to_string(),
    }
}

/// Formats the calendar date of an instant in `tz`.
pub fn format_date(instant: DateTime<Utc>, tz: Tz) -> String {
    instant.with_timezone(&tz).format("%Y-%m-%d").to_string()
}

/// Formats a duration in seconds as `HH:MM`, or `{days}d HH:MM` from one day up.
///
/// ```rust
/// use viewkit_format::format_time_length;
///
/// assert_eq!(format_time_length(2700), "00:45");
/// assert_eq!(format_time_length(183_900), "2d 03:05");
/// ```
pub fn format_time_length(seconds: i64) -> String {
    if seconds < 0 {
        return format!("-{}", format_time_length_abs(seconds.unsigned_abs()));
    }
    format_time_length_abs(seconds as u64)
}

fn format_time_length_abs(seconds: u64) -> String {
    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3_600;
    let minutes = (seconds % 3_600) / 60;
    if days == 0 {
        format!("{hours:02}:{minutes:02}")
    } else {
        format!("{days}d {hours:02}:{minutes:02}")
    }
}

/// Whole minutes in a duration, rounded down (toward negative infinity).
pub fn time_length_minutes(seconds: i64) -> i64 {
    seconds.div_euclid(60)
}

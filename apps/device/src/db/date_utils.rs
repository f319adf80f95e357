//! Date utilities for daily reset hour handling.

use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone, Timelike};

/// Activity day that `now` belongs to.
///
/// Before `daily_reset_hour` the previous calendar day is still running, so
/// late-night practice counts towards the day it started on.
pub fn adjusted_date<Tz: TimeZone>(now: &DateTime<Tz>, daily_reset_hour: u32) -> NaiveDate {
    if now.hour() < daily_reset_hour {
        (now.clone() - Duration::days(1)).date_naive()
    } else {
        now.date_naive()
    }
}

/// Get adjusted "today" based on daily_reset_hour.
pub fn get_adjusted_today(daily_reset_hour: u32) -> NaiveDate {
    adjusted_date(&Local::now(), daily_reset_hour)
}

//! Business-day calendar arithmetic.
//!
//! Pure functions over a configuration's working-day set. Weekday indices
//! count from Sunday (0) to Saturday (6).

use chrono::{Datelike, NaiveDate};

use crate::config::SchedulingConfig;
use crate::core::SchedulerError;

/// Canonical date key format.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Upper bound on calendar days inspected when looking for a working day.
pub const MAX_WORKING_DAY_SCAN: u32 = 14;

fn weekday_index(date: NaiveDate) -> u8 {
    // num_days_from_sunday is always in 0..=6
    u8::try_from(date.weekday().num_days_from_sunday()).unwrap_or(u8::MAX)
}

/// True iff `date` falls on a configured working day.
pub fn is_working_day(config: &SchedulingConfig, date: NaiveDate) -> bool {
    config.working_days.contains(&weekday_index(date))
}

/// Earliest working day at or after `from`.
pub fn next_working_day(
    config: &SchedulingConfig,
    from: NaiveDate,
) -> Result<NaiveDate, SchedulerError> {
    let mut day = from;
    for _ in 0..MAX_WORKING_DAY_SCAN {
        if is_working_day(config, day) {
            return Ok(day);
        }
        day = day
            .succ_opt()
            .ok_or_else(|| SchedulerError::Config("calendar overflow".into()))?;
    }
    Err(SchedulerError::Config(format!(
        "no working day within {MAX_WORKING_DAY_SCAN} days of {}",
        format_date_key(from)
    )))
}

/// Advance `n` working days from the first working day at or after `from`.
///
/// `n == 0` returns `from` itself when it is a working day.
pub fn add_business_days(
    config: &SchedulingConfig,
    from: NaiveDate,
    n: u32,
) -> Result<NaiveDate, SchedulerError> {
    let mut day = next_working_day(config, from)?;
    for _ in 0..n {
        let after = day
            .succ_opt()
            .ok_or_else(|| SchedulerError::Config("calendar overflow".into()))?;
        day = next_working_day(config, after)?;
    }
    Ok(day)
}

/// Render `date` as `YYYY-MM-DD`.
pub fn format_date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` key.
pub fn parse_date_key(key: &str) -> Result<NaiveDate, SchedulerError> {
    NaiveDate::parse_from_str(key.trim(), DATE_KEY_FORMAT)
        .map_err(|e| SchedulerError::InvalidDateKey(format!("{key:?}: {e}")))
}

/// Every calendar date in `[start, end]`, in order. Empty when `start > end`.
pub fn dates_inclusive(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |d| *d <= end)
}

use anyhow::{Context, Result};
use chrono::{Duration, Local, NaiveDate};

/// Format of the date keys items are scheduled under, e.g. `2026-08-30`.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Format a calendar day as a date key.
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Date key for the current local calendar day.
///
/// The local timezone is applied here and nowhere else; everything downstream
/// works on plain date keys.
pub fn today_key() -> String {
    date_key(Local::now().date_naive())
}

pub fn parse_date_key(key: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(key, DATE_KEY_FORMAT)
        .with_context(|| format!("invalid date key '{key}', expected YYYY-MM-DD"))
}

/// Date key `days` days after `key` (negative moves backwards).
pub fn offset_date_key(key: &str, days: i64) -> Result<String> {
    let date = parse_date_key(key)?;
    Ok(date_key(date + Duration::days(days)))
}

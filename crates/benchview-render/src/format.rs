//! Formatting rules shared by the run and suite views.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use rust_decimal::{Decimal, RoundingStrategy};

pub const NOT_AVAILABLE: &str = "N/A";
pub const INVALID_DATE: &str = "Invalid Date";

/// Fixed-point text with ties rounded away from zero on the exact binary
/// value, matching JavaScript's `toFixed`.
pub fn fixed(value: f64, dp: u32) -> String {
    match Decimal::from_f64_retain(value) {
        Some(d) => {
            let rounded = d.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
            format!("{:.*}", dp as usize, rounded)
        }
        None => format!("{:.*}", dp as usize, value),
    }
}

/// Raw score to 3 decimal places.
pub fn score(value: Option<f64>) -> String {
    match value {
        Some(v) => fixed(v, 3),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Score in `0..=1` as a percentage with one decimal, e.g. `0.5` -> `50.0%`.
pub fn percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{}%", fixed(v * 100.0, 1)),
        None => NOT_AVAILABLE.to_string(),
    }
}

pub fn usd(value: f64) -> String {
    format!("${}", fixed(value, 4))
}

pub fn optional_usd(value: Option<f64>) -> String {
    value.map(usd).unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub fn millis(value: i64) -> String {
    format!("{}ms", value)
}

/// Locale-style local date and time, e.g. `3/5/2024, 2:07:09 PM`.
///
/// Timestamps without an offset are taken as local time, date-only values as
/// UTC midnight.
pub fn timestamp(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string(),
        None => INVALID_DATE.to_string(),
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Local>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local));
    }

    for pattern in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
    ] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Local.from_local_datetime(&naive).earliest();
        }
    }

    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?.and_utc();
    Some(midnight.with_timezone(&Local))
}

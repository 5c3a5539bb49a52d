//! Field-level parsers for the booking export.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use revopt_core::{Price, RevoptError, RevoptResult};

/// Tried in order. `%.f` also matches when there is no fractional part.
/// Slash dates are month-first; the day-first forms only match when the
/// leading field cannot be a month.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S%.f",
    "%m/%d/%Y %H:%M",
    "%d/%m/%Y %H:%M:%S%.f",
    "%d/%m/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%d/%m/%Y"];

/// Keep digits and `.` only, then parse. `"THB 1,250.50"` becomes `1250.5`.
pub fn parse_price(raw: &str) -> RevoptResult<Price> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if cleaned.is_empty() {
        return Err(RevoptError::Parse(format!("price '{raw}' has no digits")));
    }
    cleaned
        .parse::<f64>()
        .map(Price)
        .map_err(|_| RevoptError::Parse(format!("price '{raw}' is not numeric")))
}

/// Parse a timestamp; a bare date is taken as midnight.
pub fn parse_timestamp(raw: &str) -> RevoptResult<NaiveDateTime> {
    let trimmed = raw.trim();
    for format in DATETIME_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(ts);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(date.and_time(NaiveTime::MIN));
        }
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(ts.naive_local());
    }
    Err(RevoptError::Parse(format!("unrecognised date '{raw}'")))
}

/// Parse a calendar date, discarding any time of day.
pub fn parse_date(raw: &str) -> RevoptResult<NaiveDate> {
    parse_timestamp(raw).map(|ts| ts.date())
}

//! Timestamp parsing for event dates.
//!
//! Scraped listings carry dates in many shapes: ISO strings from APIs, day-first
//! European dates from venue pages, and free-text ranges such as
//! `14/12/2024 – 16/12/2024`. Everything is parsed to a naive local timestamp;
//! date-only values land at midnight.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// Formats tried for values that carry a time of day.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%d.%m.%Y %H:%M",
    "%d-%m-%Y %H:%M",
];

/// Formats tried for date-only values. Ambiguous dates are read day-first.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y", "%d.%m.%Y", "%d-%m-%Y"];

/// Separators that split a date range into its start and end.
const RANGE_SEPARATORS: &[&str] = &["–", "—", " - ", " to "];

/// Parses a single timestamp.
///
/// Accepts RFC 3339 (the offset is dropped, keeping wall-clock time), ISO dates and
/// datetimes, and day-first `dd/mm/yyyy`, `dd.mm.yyyy`, `dd-mm-yyyy` forms.
/// Returns `None` for blank or unrecognized input.
pub fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_local());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}

/// Parses the start of a possibly ranged date text.
///
/// The text is cut at the first range separator and the leading part is parsed
/// with [`parse_timestamp`].
pub fn parse_range_start(text: &str) -> Option<NaiveDateTime> {
    let cut = RANGE_SEPARATORS
        .iter()
        .filter_map(|sep| text.find(sep))
        .min()
        .unwrap_or(text.len());
    parse_timestamp(&text[..cut])
}

/// Returns January 1st, midnight, of the given year text.
///
/// Accepts float-formatted years (`"2024.0"`) as written by spreadsheet exports.
pub fn year_start(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    let year = text
        .parse::<i32>()
        .ok()
        .or_else(|| text.parse::<f64>().ok().filter(|y| y.fract() == 0.0).map(|y| y as i32))?;
    NaiveDate::from_ymd_opt(year, 1, 1).map(|date| date.and_time(NaiveTime::MIN))
}

//! Start-date range filtering.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use evt_table::parse_timestamp;

/// Inclusive bounds on an event's start timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// Earliest accepted start.
    pub start: Option<NaiveDateTime>,
    /// Latest accepted start.
    pub end: Option<NaiveDateTime>,
}

impl DateRange {
    /// Resolves request bounds into a range.
    ///
    /// Without a usable `start`, the range begins at midnight of `today`, so past
    /// events are excluded by default. An explicit `start` replaces that floor
    /// entirely. Malformed bounds are ignored.
    pub fn resolve(start: Option<&str>, end: Option<&str>, today: NaiveDate) -> Self {
        let start = start
            .and_then(parse_bound)
            .unwrap_or_else(|| today.and_time(NaiveTime::MIN));
        Self {
            start: Some(start),
            end: end.and_then(parse_bound),
        }
    }

    /// Whether a start timestamp falls within the range.
    ///
    /// A missing timestamp fails every active bound.
    pub fn contains(&self, start: Option<NaiveDateTime>) -> bool {
        if self.start.is_none() && self.end.is_none() {
            return true;
        }
        let Some(ts) = start else {
            return false;
        };
        self.start.is_none_or(|lo| ts >= lo) && self.end.is_none_or(|hi| ts <= hi)
    }
}

/// Parses a request date bound, logging and discarding malformed input.
fn parse_bound(text: &str) -> Option<NaiveDateTime> {
    if text.trim().is_empty() {
        return None;
    }
    let parsed = parse_timestamp(text);
    if parsed.is_none() {
        tracing::debug!(bound = text, "ignoring malformed date bound");
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(date: NaiveDate, h: u32) -> Option<NaiveDateTime> {
        date.and_hms_opt(h, 0, 0)
    }

    #[test]
    fn default_floor_is_today_midnight() {
        let today = day(2025, 6, 15);
        let range = DateRange::resolve(None, None, today);
        assert!(!range.contains(at(day(2025, 6, 14), 23)));
        assert!(range.contains(at(today, 0)));
        assert!(range.contains(at(day(2026, 1, 1), 12)));
    }

    #[test]
    fn explicit_start_replaces_default_floor() {
        let today = day(2025, 6, 15);
        let range = DateRange::resolve(Some("2025-06-14"), None, today);
        assert!(range.contains(at(day(2025, 6, 14), 9)));
        assert!(!range.contains(at(day(2025, 6, 13), 9)));
    }

    #[test]
    fn end_bound_is_inclusive_at_midnight() {
        let today = day(2025, 6, 15);
        let range = DateRange::resolve(None, Some("2025-06-30"), today);
        assert!(range.contains(at(day(2025, 6, 30), 0)));
        assert!(!range.contains(at(day(2025, 6, 30), 20)));
        assert!(range.contains(at(day(2025, 6, 29), 20)));
    }

    #[test]
    fn malformed_bounds_are_ignored() {
        let today = day(2025, 6, 15);
        let range = DateRange::resolve(Some("soon"), Some("later"), today);
        assert_eq!(range.start, at(today, 0));
        assert_eq!(range.end, None);
    }

    #[test]
    fn missing_start_timestamp_is_excluded() {
        let range = DateRange::resolve(None, None, day(2025, 6, 15));
        assert!(!range.contains(None));
    }

    #[test]
    fn unbounded_range_accepts_everything() {
        let range = DateRange {
            start: None,
            end: None,
        };
        assert!(range.contains(None));
        assert!(range.contains(at(day(1999, 1, 1), 0)));
    }
}

//! Calendar-date helpers: parsing of the accepted textual formats and the
//! inclusive day-count arithmetic used by the accident accountant.
//!
//! All counts are in whole calendar days, inclusive of both endpoints.
//! A reversed interval (`end < start`) counts 0 days and is never an error.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use regex::Regex;
use std::fmt;

/// A `YYYY-MM` calendar month selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    /// Parse a strict `YYYY-MM` key. Anything else (including month 00 or
    /// 13) is `None`.
    pub fn parse(s: &str) -> Option<Self> {
        let re = Regex::new(r"^(\d{4})-(\d{2})$").ok()?;
        let caps = re.captures(s.trim())?;
        let year: i32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        if !(1..=12).contains(&month) {
            return None;
        }
        Some(Self { year, month })
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap()
    }

    pub fn last_day(&self) -> NaiveDate {
        end_of_month(self.first_day())
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Parse a date string into a calendar date.
///
/// Accepted, in priority order:
/// 1. ISO `YYYY-MM-DD`
/// 2. `D/M/YYYY` or `DD/MM/YYYY` (day/month order, never month/day)
/// 3. a narrow lossy fallback: ISO date-times (with or without offset)
///    truncated to their calendar date, and `YYYY/MM/DD`
///
/// Returns `None` on empty or unparseable input, and on calendar-invalid
/// components (month 13, day 40); the caller never gets a guess.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }

    if let Some(d) = parse_dmy(s) {
        return Some(d);
    }

    parse_lossy(s)
}

fn parse_dmy(s: &str) -> Option<NaiveDate> {
    let re = Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{4})$").ok()?;
    let caps = re.captures(s)?;
    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let year: i32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

// Last-resort formats. Store documents carry RFC3339 timestamps for dates
// normalized from provider timestamp values; everything is truncated to
// calendar-date granularity.
fn parse_lossy(s: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    NaiveDate::parse_from_str(s, "%Y/%m/%d").ok()
}

/// Number of calendar days from `a` to `b`, counting both endpoints.
/// 0 when `b` precedes `a`; never negative. `days_inclusive(d, d) == 1`.
pub fn days_inclusive(a: NaiveDate, b: NaiveDate) -> i64 {
    let diff = (b - a).num_days();
    if diff >= 0 { diff + 1 } else { 0 }
}

/// Inclusive day count of the intersection of `[a, b]` and `[x, y]`;
/// 0 when the intervals are disjoint. Delegates to [`days_inclusive`] so
/// the two can never disagree on inclusivity.
pub fn overlap_days(a: NaiveDate, b: NaiveDate, x: NaiveDate, y: NaiveDate) -> i64 {
    let start = a.max(x);
    let end = b.min(y);
    if end < start {
        return 0;
    }
    days_inclusive(start, end)
}

pub fn start_of_month(d: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(d.year(), d.month(), 1).unwrap()
}

pub fn end_of_month(d: NaiveDate) -> NaiveDate {
    let (year, month) = if d.month() == 12 {
        (d.year() + 1, 1)
    } else {
        (d.year(), d.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .unwrap()
        .pred_opt()
        .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn parse_iso_first() {
        assert_eq!(parse_date("2024-01-20"), Some(d(2024, 1, 20)));
        assert_eq!(parse_date(" 2024-01-20 "), Some(d(2024, 1, 20)));
    }

    #[test]
    fn parse_day_month_order() {
        // 5/2 is the 5th of February, never May 2nd
        assert_eq!(parse_date("5/2/2024"), Some(d(2024, 2, 5)));
        assert_eq!(parse_date("05/02/2024"), Some(d(2024, 2, 5)));
    }

    #[test]
    fn parse_lossy_truncates_datetimes() {
        assert_eq!(parse_date("2024-02-05T10:30:00"), Some(d(2024, 2, 5)));
        assert_eq!(
            parse_date("2024-02-05T10:30:00+03:00"),
            Some(d(2024, 2, 5))
        );
        assert_eq!(parse_date("2024/02/05"), Some(d(2024, 2, 5)));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("   "), None);
        assert_eq!(parse_date("not a date"), None);
        assert_eq!(parse_date("2024-13-40"), None);
        assert_eq!(parse_date("32/1/2024"), None);
        assert_eq!(parse_date("1/13/2024"), None);
    }

    #[test]
    fn single_day_counts_one() {
        assert_eq!(days_inclusive(d(2024, 3, 10), d(2024, 3, 10)), 1);
    }

    #[test]
    fn reversed_interval_counts_zero() {
        assert_eq!(days_inclusive(d(2024, 3, 11), d(2024, 3, 10)), 0);
    }

    #[test]
    fn overlap_is_symmetric() {
        let pairs = [
            (d(2024, 1, 20), d(2024, 2, 5), d(2024, 2, 1), d(2024, 2, 29)),
            (d(2024, 1, 1), d(2024, 1, 2), d(2024, 3, 1), d(2024, 3, 31)),
            (d(2024, 1, 1), d(2024, 12, 31), d(2024, 6, 1), d(2024, 6, 30)),
        ];
        for (a, b, x, y) in pairs {
            assert_eq!(overlap_days(a, b, x, y), overlap_days(x, y, a, b));
        }
    }

    #[test]
    fn containment_reduces_to_days_inclusive() {
        let a = d(2024, 2, 10);
        let b = d(2024, 2, 20);
        // [x, y] fully contains [a, b]
        let x = d(2024, 1, 1);
        let y = d(2024, 12, 31);
        assert_eq!(overlap_days(a, b, x, y), days_inclusive(a, b));
    }

    #[test]
    fn disjoint_intervals_overlap_zero() {
        assert_eq!(
            overlap_days(d(2024, 1, 1), d(2024, 1, 5), d(2024, 1, 6), d(2024, 1, 9)),
            0
        );
    }

    #[test]
    fn month_bounds_handle_leap_years() {
        assert_eq!(end_of_month(d(2024, 2, 10)), d(2024, 2, 29));
        assert_eq!(end_of_month(d(2023, 2, 10)), d(2023, 2, 28));
        assert_eq!(end_of_month(d(2024, 12, 31)), d(2024, 12, 31));
        assert_eq!(start_of_month(d(2024, 12, 31)), d(2024, 12, 1));
    }

    #[test]
    fn month_key_roundtrip() {
        let mk = MonthKey::parse("2024-02").unwrap();
        assert_eq!(mk.to_string(), "2024-02");
        assert_eq!(mk.first_day(), d(2024, 2, 1));
        assert_eq!(mk.last_day(), d(2024, 2, 29));
        assert_eq!(MonthKey::parse("2024-13"), None);
        assert_eq!(MonthKey::parse("2024-2"), None);
        assert_eq!(MonthKey::parse("feb 2024"), None);
    }
}

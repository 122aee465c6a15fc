//! Timestamp parsing and the recency cutoff policy

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};

/// Group key for values with no usable date
pub const UNKNOWN_KEY: &str = "unknown";

/// Parse an ISO-8601 date or timestamp. Values without an offset are read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Result of checking a date against a recency cutoff.
///
/// Only `OutOfRange` excludes an entry: a missing or malformed date keeps it,
/// so schema drift upstream can over-include but never lose rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CutoffOutcome {
    InRange,
    OutOfRange,
    Missing,
    Unparseable,
}

impl CutoffOutcome {
    pub fn classify(value: Option<&str>, cutoff: DateTime<Utc>) -> Self {
        match value {
            None => CutoffOutcome::Missing,
            Some(raw) => match parse_timestamp(raw) {
                Some(ts) if ts >= cutoff => CutoffOutcome::InRange,
                Some(_) => CutoffOutcome::OutOfRange,
                None => CutoffOutcome::Unparseable,
            },
        }
    }

    pub fn is_kept(self) -> bool {
        !matches!(self, CutoffOutcome::OutOfRange)
    }
}

/// `{ISO year}-W{week:02}` for a timestamp, or `unknown`
pub fn week_key(created_time: Option<&str>) -> String {
    match created_time.and_then(parse_timestamp) {
        Some(ts) => {
            let week = ts.iso_week();
            format!("{}-W{:02}", week.year(), week.week())
        }
        None => UNKNOWN_KEY.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_parse_formats() {
        assert_eq!(parse_timestamp("2024-01-10"), Some(at(2024, 1, 10)));
        assert_eq!(
            parse_timestamp("2024-01-10T00:00:00.000Z"),
            Some(at(2024, 1, 10))
        );
        assert_eq!(
            parse_timestamp("2024-01-10T08:00:00+08:00"),
            Some(at(2024, 1, 10))
        );
        assert_eq!(parse_timestamp("2024-01-10T00:00:00"), Some(at(2024, 1, 10)));
        assert_eq!(parse_timestamp("last tuesday"), None);
        assert_eq!(parse_timestamp(""), None);
    }

    #[test]
    fn test_cutoff_outcomes() {
        let cutoff = at(2024, 1, 5);
        assert_eq!(
            CutoffOutcome::classify(Some("2024-01-10"), cutoff),
            CutoffOutcome::InRange
        );
        assert_eq!(
            CutoffOutcome::classify(Some("2024-01-05"), cutoff),
            CutoffOutcome::InRange
        );
        assert_eq!(
            CutoffOutcome::classify(Some("2023-12-01"), cutoff),
            CutoffOutcome::OutOfRange
        );
        assert_eq!(
            CutoffOutcome::classify(None, cutoff),
            CutoffOutcome::Missing
        );
        assert_eq!(
            CutoffOutcome::classify(Some("10/01/2024"), cutoff),
            CutoffOutcome::Unparseable
        );
    }

    #[test]
    fn test_only_out_of_range_is_dropped() {
        assert!(CutoffOutcome::InRange.is_kept());
        assert!(CutoffOutcome::Missing.is_kept());
        assert!(CutoffOutcome::Unparseable.is_kept());
        assert!(!CutoffOutcome::OutOfRange.is_kept());
    }

    #[test]
    fn test_week_keys() {
        assert_eq!(week_key(Some("2024-01-01T00:00:00Z")), "2024-W01");
        assert_eq!(week_key(Some("2024-01-08T00:00:00Z")), "2024-W02");
        // ISO year differs from calendar year at the boundary
        assert_eq!(week_key(Some("2024-12-30T10:00:00Z")), "2025-W01");
        assert_eq!(week_key(Some("2021-01-03T10:00:00Z")), "2020-W53");
        assert_eq!(week_key(Some("garbage")), "unknown");
        assert_eq!(week_key(None), "unknown");
    }
}

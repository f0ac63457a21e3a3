//! Clock-time helpers.
//!
//! Shift times are fractional hours (`13.5` = 13:30). The wire format is
//! always a 24h `"HH:MM"` string; fractional hours past 24.0 exist only
//! internally, to represent shifts that cross midnight.
//!
//! # Interval Model
//! Intervals are half-open `[start, end)`. Two intervals overlap iff
//! `max(start) < min(end)`, so back-to-back shifts do not conflict.

use serde::{Deserialize, Serialize};

/// Parses a 24h `"HH:MM"` string into fractional hours.
///
/// Returns `None` for anything malformed. Malformed input is treated as
/// absent data by callers, never as an error.
pub fn parse_time(s: &str) -> Option<f64> {
    let (h, m) = s.trim().split_once(':')?;
    let hours: u32 = h.trim().parse().ok()?;
    let minutes: u32 = m.trim().parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(hours as f64 + minutes as f64 / 60.0)
}

/// Formats fractional hours as a 24h `"HH:MM"` string.
///
/// Hours wrap via modulo 24, so a cross-midnight end of `25.5`
/// renders as `"01:30"`.
pub fn format_time(hours: f64) -> String {
    let total_minutes = (hours * 60.0).round() as i64;
    let h = total_minutes.div_euclid(60).rem_euclid(24);
    let m = total_minutes.rem_euclid(60);
    format!("{h:02}:{m:02}")
}

/// Parses a raw `"HH:MM-HH:MM"` slot window into `(start, end)` hours.
///
/// An end before the start is taken to cross midnight and gets 24h
/// added. Windows without the `-` separator, or with an unparsable side,
/// return `None` and are silently skipped upstream.
pub fn parse_window(s: &str) -> Option<(f64, f64)> {
    let (a, b) = s.split_once('-')?;
    let start = parse_time(a)?;
    let mut end = parse_time(b)?;
    if end < start {
        end += 24.0;
    }
    Some((start, end))
}

/// Whether two half-open intervals overlap.
#[inline]
pub fn overlaps(a_start: f64, a_end: f64, b_start: f64, b_end: f64) -> bool {
    a_start.max(b_start) < a_end.min(b_end)
}

/// Half of a service day, split at 17:00.
///
/// Used as the granularity for availability entries and absence records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Session {
    /// Shifts starting before 17:00.
    Lunch,
    /// Shifts starting at or after 17:00.
    Dinner,
}

impl Session {
    /// Boundary between the lunch and dinner sessions (hours).
    pub const BOUNDARY: f64 = 17.0;

    /// Classifies a shift by its start time.
    pub fn of(start: f64) -> Self {
        if start < Self::BOUNDARY {
            Session::Lunch
        } else {
            Session::Dinner
        }
    }
}

/// Serde adapter serializing fractional-hour fields as `"HH:MM"`.
///
/// Apply with `#[serde(with = "crate::time::serde_hhmm")]`.
pub mod serde_hhmm {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(hours: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_time(*hours))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_time(&s)
            .ok_or_else(|| D::Error::custom(format!("invalid HH:MM time: '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time() {
        assert_eq!(parse_time("10:00"), Some(10.0));
        assert_eq!(parse_time("13:30"), Some(13.5));
        assert_eq!(parse_time("00:00"), Some(0.0));
        assert_eq!(parse_time("23:45"), Some(23.75));
        assert_eq!(parse_time(" 9:15 "), Some(9.25));
    }

    #[test]
    fn test_parse_time_malformed() {
        assert_eq!(parse_time(""), None);
        assert_eq!(parse_time("1030"), None);
        assert_eq!(parse_time("25:00"), None);
        assert_eq!(parse_time("10:75"), None);
        assert_eq!(parse_time("ab:cd"), None);
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(10.0), "10:00");
        assert_eq!(format_time(13.5), "13:30");
        assert_eq!(format_time(0.0), "00:00");
        // Cross-midnight values wrap
        assert_eq!(format_time(25.5), "01:30");
        assert_eq!(format_time(24.0), "00:00");
    }

    #[test]
    fn test_format_parse_roundtrip() {
        for s in ["00:00", "09:15", "16:59", "23:45"] {
            assert_eq!(format_time(parse_time(s).unwrap()), s);
        }
    }

    #[test]
    fn test_parse_window() {
        assert_eq!(parse_window("10:00-15:00"), Some((10.0, 15.0)));
        assert_eq!(parse_window("12:30-14:00"), Some((12.5, 14.0)));
    }

    #[test]
    fn test_parse_window_cross_midnight() {
        // 22:00-02:00 crosses midnight → end is normalized to 26.0
        assert_eq!(parse_window("22:00-02:00"), Some((22.0, 26.0)));
    }

    #[test]
    fn test_parse_window_malformed() {
        assert_eq!(parse_window(""), None);
        assert_eq!(parse_window("10:00"), None); // no separator
        assert_eq!(parse_window("10:00-99:00"), None);
        assert_eq!(parse_window("x-y"), None);
    }

    #[test]
    fn test_overlaps() {
        assert!(overlaps(10.0, 15.0, 14.0, 18.0));
        assert!(overlaps(14.0, 18.0, 10.0, 15.0));
        assert!(overlaps(10.0, 15.0, 11.0, 12.0)); // containment
        // Touching endpoints do not overlap (half-open)
        assert!(!overlaps(10.0, 15.0, 15.0, 18.0));
        assert!(!overlaps(10.0, 15.0, 16.0, 18.0));
    }

    #[test]
    fn test_overlaps_cross_midnight() {
        // 22:00-26:00 vs 01:00-03:00 same calendar day do not overlap:
        // the cross-midnight shift belongs to the day it started on.
        assert!(overlaps(22.0, 26.0, 25.0, 27.0));
        assert!(!overlaps(22.0, 26.0, 1.0, 3.0));
    }

    #[test]
    fn test_session_of() {
        assert_eq!(Session::of(10.0), Session::Lunch);
        assert_eq!(Session::of(16.99), Session::Lunch);
        assert_eq!(Session::of(17.0), Session::Dinner);
        assert_eq!(Session::of(20.0), Session::Dinner);
    }

    #[test]
    fn test_serde_hhmm() {
        #[derive(serde::Serialize, serde::Deserialize)]
        struct S {
            #[serde(with = "super::serde_hhmm")]
            t: f64,
        }

        let json = serde_json::to_string(&S { t: 13.5 }).unwrap();
        assert_eq!(json, r#"{"t":"13:30"}"#);

        let s: S = serde_json::from_str(r#"{"t":"09:45"}"#).unwrap();
        assert!((s.t - 9.75).abs() < 1e-10);

        assert!(serde_json::from_str::<S>(r#"{"t":"bogus"}"#).is_err());
    }
}

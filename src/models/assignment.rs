//! Shift assignment records.
//!
//! `Assignment` is the engine's output unit: one worker covering one
//! station for one time window on one date. The engine only ever emits
//! draft assignments; promotion to published is a collaborator concern.
//!
//! `RecurringShift` is an input: a weekday-keyed standing shift folded
//! into run state before generation starts.

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::time::serde_hhmm;

/// One worker-station-window shift for one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Service date.
    pub date: NaiveDate,
    /// Assigned worker ID.
    pub worker_id: String,
    /// Station covered.
    pub station: String,
    /// Shift start (serialized as `"HH:MM"`).
    #[serde(with = "serde_hhmm")]
    pub start: f64,
    /// Shift end (serialized as `"HH:MM"`, wrapping past midnight).
    #[serde(with = "serde_hhmm")]
    pub end: f64,
    /// Lifecycle status.
    pub status: AssignmentStatus,
    /// Segment tag when emitted under the segmented-shift policy.
    pub segment: Option<Segment>,
}

/// Assignment lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssignmentStatus {
    /// Generated, awaiting human review.
    Draft,
    /// Confirmed by a planner.
    Published,
}

/// Which fixed block of a segmented shift an assignment covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Segment {
    /// The fixed lunch block.
    Lunch,
    /// The fixed dinner block.
    Dinner,
}

impl Assignment {
    /// Creates a draft assignment.
    pub fn draft(
        date: NaiveDate,
        worker_id: impl Into<String>,
        station: impl Into<String>,
        start: f64,
        end: f64,
    ) -> Self {
        Self {
            date,
            worker_id: worker_id.into(),
            station: station.into(),
            start,
            end,
            status: AssignmentStatus::Draft,
            segment: None,
        }
    }

    /// Tags this assignment as one block of a segmented shift.
    pub fn with_segment(mut self, segment: Segment) -> Self {
        self.segment = Some(segment);
        self
    }

    /// Shift duration in hours.
    #[inline]
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// A weekday-keyed standing shift.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurringShift {
    /// Worker the shift belongs to.
    pub worker_id: String,
    /// Weekday the shift recurs on.
    pub weekday: Weekday,
    /// Shift start (fractional hours).
    pub start: f64,
    /// Shift end (fractional hours).
    pub end: f64,
    /// Station covered.
    pub station: String,
}

impl RecurringShift {
    /// Creates a recurring shift.
    pub fn new(
        worker_id: impl Into<String>,
        weekday: Weekday,
        start: f64,
        end: f64,
        station: impl Into<String>,
    ) -> Self {
        Self {
            worker_id: worker_id.into(),
            weekday,
            start,
            end,
            station: station.into(),
        }
    }

    /// Shift duration in hours.
    #[inline]
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 3).unwrap()
    }

    #[test]
    fn test_draft_assignment() {
        let a = Assignment::draft(date(), "W1", "BAR", 10.0, 15.0);
        assert_eq!(a.status, AssignmentStatus::Draft);
        assert_eq!(a.segment, None);
        assert!((a.duration() - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_segment_tag() {
        let a = Assignment::draft(date(), "W1", "BAR", 12.0, 15.0).with_segment(Segment::Lunch);
        assert_eq!(a.segment, Some(Segment::Lunch));
    }

    #[test]
    fn test_wire_format_times() {
        let a = Assignment::draft(date(), "W1", "BAR", 10.5, 15.0);
        let json = serde_json::to_string(&a).unwrap();
        assert!(json.contains(r#""start":"10:30""#));
        assert!(json.contains(r#""end":"15:00""#));

        let back: Assignment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, a);
    }

    #[test]
    fn test_cross_midnight_wire_format_wraps() {
        // End 25.5 renders as 01:30 on the wire; hours past 24:00 are
        // internal only.
        let a = Assignment::draft(date(), "W1", "BAR", 22.0, 25.5);
        let json = serde_json::to_string(&a).unwrap();
        assert!(json.contains(r#""end":"01:30""#));
    }

    #[test]
    fn test_recurring_shift() {
        let r = RecurringShift::new("W1", Weekday::Mon, 9.0, 13.0, "KITCHEN");
        assert_eq!(r.weekday, Weekday::Mon);
        assert!((r.duration() - 4.0).abs() < 1e-10);
    }
}

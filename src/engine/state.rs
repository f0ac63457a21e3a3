//! Per-run worker state.
//!
//! `RunState` owns the two maps the generation loop mutates: accumulated
//! hours per worker and busy intervals per (date, worker). One state
//! belongs to exactly one planning run; concurrent runs must each build
//! their own.
//!
//! Pre-loading folds recurring shifts and pre-existing assignments into
//! the state before generation starts. That baseline is only ever added
//! to. Loads are deduplicated on the `(date, worker, start)` triple, so
//! loading the same records twice neither double-counts hours nor
//! duplicates busy intervals.

use chrono::{Datelike, NaiveDate};
use std::collections::{HashMap, HashSet};

use crate::models::{Assignment, RecurringShift, Worker};
use crate::time::overlaps;

/// Key quantizing a shift start to whole minutes for deduplication.
fn start_key(start: f64) -> i64 {
    (start * 60.0).round() as i64
}

/// Mutable worker state for one planning run.
#[derive(Debug, Clone, Default)]
pub struct RunState {
    /// Accumulated hours per worker. Monotonically non-decreasing
    /// within a run.
    hours: HashMap<String, f64>,
    /// Busy intervals per (date, worker), in load order.
    busy: HashMap<(NaiveDate, String), Vec<(f64, f64)>>,
    /// Load-deduplication keys: (date, worker, start in minutes).
    seen: HashSet<(NaiveDate, String, i64)>,
}

impl RunState {
    /// Creates an empty run state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a worker busy for `[start, end)` on a date and accrues the
    /// duration.
    ///
    /// Returns `false` (and changes nothing) when an identical
    /// `(date, worker, start)` triple was already loaded.
    pub fn occupy(&mut self, date: NaiveDate, worker_id: &str, start: f64, end: f64) -> bool {
        if !self
            .seen
            .insert((date, worker_id.to_string(), start_key(start)))
        {
            return false;
        }
        self.busy
            .entry((date, worker_id.to_string()))
            .or_default()
            .push((start, end));
        *self.hours.entry(worker_id.to_string()).or_insert(0.0) += end - start;
        true
    }

    /// Accumulated hours for a worker (0 if never assigned).
    pub fn accumulated(&self, worker_id: &str) -> f64 {
        self.hours.get(worker_id).copied().unwrap_or(0.0)
    }

    /// Remaining headroom toward a worker's hour cap.
    pub fn headroom(&self, worker: &Worker) -> f64 {
        worker.max_hours - self.accumulated(&worker.id)
    }

    /// Whether `[start, end)` is free of existing busy intervals for the
    /// worker on that date.
    pub fn is_free(&self, date: NaiveDate, worker_id: &str, start: f64, end: f64) -> bool {
        match self.busy.get(&(date, worker_id.to_string())) {
            Some(intervals) => !intervals
                .iter()
                .any(|&(s, e)| overlaps(start, end, s, e)),
            None => true,
        }
    }

    /// Whether the worker already holds any interval on the date.
    pub fn has_assignment_on(&self, date: NaiveDate, worker_id: &str) -> bool {
        self.busy
            .get(&(date, worker_id.to_string()))
            .is_some_and(|v| !v.is_empty())
    }

    /// Busy intervals for a (date, worker), in load order.
    pub fn intervals(&self, date: NaiveDate, worker_id: &str) -> &[(f64, f64)] {
        self.busy
            .get(&(date, worker_id.to_string()))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Folds recurring shifts into the state for every day in the
    /// inclusive range.
    ///
    /// A worker with a whole-day absence on a date is skipped for that
    /// date. Workers not on the roster are ignored.
    pub fn preload_recurring(
        &mut self,
        shifts: &[RecurringShift],
        workers: &[Worker],
        start: NaiveDate,
        end: NaiveDate,
    ) {
        let mut date = start;
        while date <= end {
            for shift in shifts {
                if shift.weekday != date.weekday() {
                    continue;
                }
                let Some(worker) = workers.iter().find(|w| w.id == shift.worker_id) else {
                    continue;
                };
                if worker.is_absent_whole_day(date) {
                    continue;
                }
                self.occupy(date, &shift.worker_id, shift.start, shift.end);
            }
            match date.succ_opt() {
                Some(next) => date = next,
                None => break,
            }
        }
    }

    /// Folds pre-existing assignments within the range into the state.
    ///
    /// An assignment whose `(date, worker, start)` triple is already
    /// present (from recurring rules or an earlier load) is skipped.
    pub fn preload_existing(
        &mut self,
        assignments: &[Assignment],
        start: NaiveDate,
        end: NaiveDate,
    ) {
        for a in assignments {
            if a.date < start || a.date > end {
                continue;
            }
            self.occupy(a.date, &a.worker_id, a.start, a.end);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Absence, Role};
    use chrono::Weekday;

    // 2025-03-03 is a Monday
    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 3).unwrap()
    }

    fn sunday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 9).unwrap()
    }

    #[test]
    fn test_occupy_accrues_hours() {
        let mut state = RunState::new();
        assert!(state.occupy(monday(), "W1", 10.0, 15.0));
        assert!((state.accumulated("W1") - 5.0).abs() < 1e-10);
        assert_eq!(state.intervals(monday(), "W1"), &[(10.0, 15.0)]);
    }

    #[test]
    fn test_occupy_dedupes_same_start() {
        let mut state = RunState::new();
        assert!(state.occupy(monday(), "W1", 10.0, 15.0));
        assert!(!state.occupy(monday(), "W1", 10.0, 15.0));
        assert!((state.accumulated("W1") - 5.0).abs() < 1e-10);
        assert_eq!(state.intervals(monday(), "W1").len(), 1);
    }

    #[test]
    fn test_is_free() {
        let mut state = RunState::new();
        state.occupy(monday(), "W1", 10.0, 15.0);

        assert!(!state.is_free(monday(), "W1", 14.0, 18.0));
        assert!(state.is_free(monday(), "W1", 15.0, 18.0)); // back-to-back
        assert!(state.is_free(monday(), "W2", 14.0, 18.0)); // other worker
        assert!(state.is_free(sunday(), "W1", 10.0, 15.0)); // other day
    }

    #[test]
    fn test_has_assignment_on() {
        let mut state = RunState::new();
        assert!(!state.has_assignment_on(monday(), "W1"));
        state.occupy(monday(), "W1", 10.0, 15.0);
        assert!(state.has_assignment_on(monday(), "W1"));
        assert!(!state.has_assignment_on(sunday(), "W1"));
    }

    #[test]
    fn test_headroom() {
        let worker = Worker::operator("W1").with_hours(0.0, 40.0);
        let mut state = RunState::new();
        state.occupy(monday(), "W1", 10.0, 20.0);
        assert!((state.headroom(&worker) - 30.0).abs() < 1e-10);
    }

    #[test]
    fn test_preload_recurring_expands_weekdays() {
        let workers = vec![Worker::operator("W1")];
        let shifts = vec![RecurringShift::new("W1", Weekday::Mon, 9.0, 13.0, "KITCHEN")];
        let mut state = RunState::new();
        // Mon..Sun: the Monday rule fires once
        state.preload_recurring(&shifts, &workers, monday(), sunday());

        assert!((state.accumulated("W1") - 4.0).abs() < 1e-10);
        assert_eq!(state.intervals(monday(), "W1"), &[(9.0, 13.0)]);
        assert!(state.intervals(sunday(), "W1").is_empty());
    }

    #[test]
    fn test_preload_recurring_skips_whole_day_absence() {
        let workers = vec![
            Worker::operator("W1").with_absence(Absence::whole_day(monday())),
        ];
        let shifts = vec![RecurringShift::new("W1", Weekday::Mon, 9.0, 13.0, "KITCHEN")];
        let mut state = RunState::new();
        state.preload_recurring(&shifts, &workers, monday(), sunday());

        assert!((state.accumulated("W1") - 0.0).abs() < 1e-10);
        assert!(state.intervals(monday(), "W1").is_empty());
    }

    #[test]
    fn test_preload_recurring_ignores_unknown_worker() {
        let workers = vec![Worker::operator("W1")];
        let shifts = vec![RecurringShift::new("GHOST", Weekday::Mon, 9.0, 13.0, "BAR")];
        let mut state = RunState::new();
        state.preload_recurring(&shifts, &workers, monday(), sunday());
        assert!((state.accumulated("GHOST") - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_preload_existing_within_range() {
        let assignments = vec![
            Assignment::draft(monday(), "W1", "BAR", 10.0, 15.0),
            // Outside the window: dropped
            Assignment::draft(
                NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
                "W1",
                "BAR",
                10.0,
                15.0,
            ),
        ];
        let mut state = RunState::new();
        state.preload_existing(&assignments, monday(), sunday());
        assert!((state.accumulated("W1") - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_preload_existing_idempotent() {
        let assignments = vec![Assignment::draft(monday(), "W1", "BAR", 10.0, 15.0)];
        let mut state = RunState::new();
        state.preload_existing(&assignments, monday(), sunday());
        state.preload_existing(&assignments, monday(), sunday());

        assert!((state.accumulated("W1") - 5.0).abs() < 1e-10);
        assert_eq!(state.intervals(monday(), "W1").len(), 1);
    }

    #[test]
    fn test_existing_does_not_duplicate_recurring() {
        let workers = vec![Worker::operator("W1")];
        let shifts = vec![RecurringShift::new("W1", Weekday::Mon, 10.0, 15.0, "BAR")];
        let assignments = vec![Assignment::draft(monday(), "W1", "BAR", 10.0, 15.0)];

        let mut state = RunState::new();
        state.preload_recurring(&shifts, &workers, monday(), sunday());
        state.preload_existing(&assignments, monday(), sunday());

        // Same (date, worker, start): the manual record is skipped
        assert!((state.accumulated("W1") - 5.0).abs() < 1e-10);
        assert_eq!(state.intervals(monday(), "W1").len(), 1);
    }
}

//! Per-worker scheduling policy tables.
//!
//! Data-driven rule tables the engine consults generically instead of
//! special-casing worker identities: pinned overrides grant a worker forced
//! precedence and a forced window for qualifying demand, and the
//! segmented-shift policy splits a worker's single daily assignment into
//! two fixed blocks.

use chrono::{Datelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::{normalize_token, DemandUnit};

/// A time window in fractional hours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Window start.
    pub start: f64,
    /// Window end (may exceed 24.0).
    pub end: f64,
}

impl TimeWindow {
    /// Creates a time window.
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Window duration in hours.
    #[inline]
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Whether `[start, end)` lies fully inside this window.
    pub fn contains_window(&self, start: f64, end: f64) -> bool {
        start >= self.start && end <= self.end
    }
}

/// A rule granting one worker forced scheduling precedence.
///
/// When a demand unit qualifies (its interval inside `condition`, its
/// day and station within the optional restrictions), the pinned worker
/// outranks every other candidate and is assigned the `forced` window
/// instead of the literal demand window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PinnedOverride {
    /// Worker the rule applies to.
    pub worker_id: String,
    /// Demand must fall fully inside this window to qualify.
    pub condition: TimeWindow,
    /// Window actually assigned when the rule applies.
    pub forced: TimeWindow,
    /// When set, restricts the rule (and locks the named stations to
    /// workers holding such a rule).
    pub station_lock: Option<Vec<String>>,
    /// When set, the rule only applies on these weekdays.
    pub day_restriction: Option<Vec<Weekday>>,
}

impl PinnedOverride {
    /// Creates a pinned override with the given qualifying condition and
    /// forced window.
    pub fn new(worker_id: impl Into<String>, condition: TimeWindow, forced: TimeWindow) -> Self {
        Self {
            worker_id: worker_id.into(),
            condition,
            forced,
            station_lock: None,
            day_restriction: None,
        }
    }

    /// Locks the rule (and the stations themselves) to the named
    /// stations. Tokens are normalized on entry.
    pub fn with_station_lock(mut self, stations: Vec<String>) -> Self {
        self.station_lock = Some(stations.iter().map(|s| normalize_token(s)).collect());
        self
    }

    /// Restricts the rule to the given weekdays.
    pub fn with_day_restriction(mut self, days: Vec<Weekday>) -> Self {
        self.day_restriction = Some(days);
        self
    }

    /// Whether the rule's station lock names the given station.
    pub fn locks_station(&self, station: &str) -> bool {
        match &self.station_lock {
            Some(stations) => {
                let token = normalize_token(station);
                stations.iter().any(|s| *s == token)
            }
            None => false,
        }
    }

    /// Whether this rule qualifies for the given demand unit.
    pub fn applies_to(&self, unit: &DemandUnit) -> bool {
        if !self.condition.contains_window(unit.start, unit.end) {
            return false;
        }
        if let Some(days) = &self.day_restriction {
            if !days.contains(&unit.date.weekday()) {
                return false;
            }
        }
        if let Some(stations) = &self.station_lock {
            let token = normalize_token(&unit.station);
            if !stations.iter().any(|s| *s == token) {
                return false;
            }
        }
        true
    }
}

/// Segmented-shift rule: one worker's daily assignment is always the
/// two fixed blocks below, regardless of the triggering demand window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentedShift {
    /// Worker the rule applies to.
    pub worker_id: String,
    /// Fixed lunch block.
    pub lunch: TimeWindow,
    /// Fixed dinner block.
    pub dinner: TimeWindow,
}

impl SegmentedShift {
    /// Creates a segmented-shift rule.
    pub fn new(worker_id: impl Into<String>, lunch: TimeWindow, dinner: TimeWindow) -> Self {
        Self {
            worker_id: worker_id.into(),
            lunch,
            dinner,
        }
    }

    /// Combined duration of both blocks in hours.
    pub fn total_duration(&self) -> f64 {
        self.lunch.duration() + self.dinner.duration()
    }
}

/// The policy tables consulted during one planning run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanPolicies {
    /// Pinned precedence rules.
    pub pinned: Vec<PinnedOverride>,
    /// Segmented-shift rules.
    pub segmented: Vec<SegmentedShift>,
    /// Hours a worker may exceed `max_hours` by before rejection.
    pub hour_tolerance: f64,
}

impl Default for PlanPolicies {
    fn default() -> Self {
        Self {
            pinned: Vec::new(),
            segmented: Vec::new(),
            hour_tolerance: 1.0,
        }
    }
}

impl PlanPolicies {
    /// Creates an empty policy set with the default 1h tolerance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a pinned override.
    pub fn with_pinned(mut self, rule: PinnedOverride) -> Self {
        self.pinned.push(rule);
        self
    }

    /// Adds a segmented-shift rule.
    pub fn with_segmented(mut self, rule: SegmentedShift) -> Self {
        self.segmented.push(rule);
        self
    }

    /// Sets the hour-budget tolerance.
    pub fn with_hour_tolerance(mut self, tolerance: f64) -> Self {
        self.hour_tolerance = tolerance;
        self
    }

    /// The pin applying to a (worker, demand) pair, if any.
    pub fn applicable_pin(&self, worker_id: &str, unit: &DemandUnit) -> Option<&PinnedOverride> {
        self.pinned
            .iter()
            .find(|p| p.worker_id == worker_id && p.applies_to(unit))
    }

    /// The segmented-shift rule for a worker, if any.
    pub fn segmented_for(&self, worker_id: &str) -> Option<&SegmentedShift> {
        self.segmented.iter().find(|s| s.worker_id == worker_id)
    }

    /// Whether any rule locks the station, and if so whether the given
    /// worker holds one of the locking rules.
    pub fn station_lock_allows(&self, station: &str, worker_id: &str) -> bool {
        let locking: Vec<&PinnedOverride> = self
            .pinned
            .iter()
            .filter(|p| p.locks_station(station))
            .collect();
        if locking.is_empty() {
            return true; // station not locked
        }
        locking.iter().any(|p| p.worker_id == worker_id)
    }
}

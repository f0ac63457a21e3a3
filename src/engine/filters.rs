//! Eligibility filter chain.
//!
//! A (worker, demand) pair must pass every predicate, applied in a fixed
//! order, before assignment. The first failure rejects the candidate for
//! that unit and the loop moves to the next candidate.
//!
//! # Filter Order
//! 1. Hour budget (against the emission plan, with tolerance)
//! 2. Skill / station match
//! 3. Absence (whole-day or session)
//! 4. Fixed availability for the (weekday, session) slot
//! 5. Busy-interval overlap (against the emission plan)
//! 6. Station exclusivity locks
//!
//! # Emission Plan
//! What gets emitted for a candidate is not always the demand window: a
//! pinned override substitutes its forced window, and a segmented-shift
//! worker with no assignment that day gets both fixed blocks. Budget and
//! overlap checks run against those actual windows so emitted output
//! never breaks the no-overlap and hour-cap invariants.

use chrono::Datelike;
use std::fmt;

use crate::engine::RunState;
use crate::models::{Availability, DemandUnit, PlanPolicies, Segment, Worker};
use crate::time::Session;

/// One planned emission window: `(start, end, segment tag)`.
pub type PlannedWindow = (f64, f64, Option<Segment>);

/// Why a candidate was rejected for a demand unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Accepting would exceed the hour budget plus tolerance.
    OverHourBudget,
    /// No skill matches the demand's station.
    SkillMismatch,
    /// An absence record blocks the date/session.
    Absent,
    /// Fixed availability forbids the slot or window.
    Unavailable,
    /// An existing busy interval overlaps.
    Busy,
    /// The station is locked to other workers.
    StationLocked,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Rejection::OverHourBudget => "over hour budget",
            Rejection::SkillMismatch => "skill mismatch",
            Rejection::Absent => "absent",
            Rejection::Unavailable => "unavailable",
            Rejection::Busy => "busy interval overlap",
            Rejection::StationLocked => "station locked",
        };
        f.write_str(s)
    }
}

/// The windows that would be emitted if this candidate is chosen.
///
/// A segmented-shift worker with no assignment yet that day gets both
/// fixed blocks; an applicable pin substitutes its forced window;
/// otherwise the demand window is used as-is.
pub fn emission_plan(
    worker: &Worker,
    unit: &DemandUnit,
    state: &RunState,
    policies: &PlanPolicies,
) -> Vec<PlannedWindow> {
    if let Some(rule) = policies.segmented_for(&worker.id) {
        if !state.has_assignment_on(unit.date, &worker.id) {
            return vec![
                (rule.lunch.start, rule.lunch.end, Some(Segment::Lunch)),
                (rule.dinner.start, rule.dinner.end, Some(Segment::Dinner)),
            ];
        }
    }
    if let Some(pin) = policies.applicable_pin(&worker.id, unit) {
        return vec![(pin.forced.start, pin.forced.end, None)];
    }
    vec![(unit.start, unit.end, None)]
}

/// Runs the filter chain for one candidate.
///
/// Returns `Ok(())` when every predicate passes, or the first failing
/// predicate's rejection.
pub fn check(
    worker: &Worker,
    unit: &DemandUnit,
    plan: &[PlannedWindow],
    state: &RunState,
    policies: &PlanPolicies,
) -> Result<(), Rejection> {
    let session = Session::of(unit.start);
    let weekday = unit.date.weekday();

    // 1. Hour budget, over what would actually be emitted
    let planned_hours: f64 = plan.iter().map(|(s, e, _)| e - s).sum();
    if state.accumulated(&worker.id) + planned_hours > worker.max_hours + policies.hour_tolerance {
        return Err(Rejection::OverHourBudget);
    }

    // 2. Skill / station
    if !worker.skill_matches(&unit.station) {
        return Err(Rejection::SkillMismatch);
    }

    // 3. Absence
    if worker.is_absent(unit.date, session) {
        return Err(Rejection::Absent);
    }

    // 4. Fixed availability
    match worker.availability_for(weekday, session) {
        Availability::Unconstrained => {}
        Availability::Unavailable { .. } => return Err(Rejection::Unavailable),
        Availability::Preferred { start, end } | Availability::Forced { start, end } => {
            if unit.start < *start || unit.end > *end {
                return Err(Rejection::Unavailable);
            }
        }
    }

    // 5. Busy overlap, over what would actually be emitted
    if plan
        .iter()
        .any(|(s, e, _)| !state.is_free(unit.date, &worker.id, *s, *e))
    {
        return Err(Rejection::Busy);
    }

    // 6. Station exclusivity
    if !policies.station_lock_allows(&unit.station, &worker.id) {
        return Err(Rejection::StationLocked);
    }

    Ok(())
}

//! Greedy shift planner.
//!
//! # Algorithm
//!
//! 1. Fail fast on an inverted planning window, before any state mutation.
//! 2. Preload recurring shifts, then pre-existing assignments, into a
//!    fresh `RunState`.
//! 3. For each day in the window, synthesize that day's demand units in
//!    canonical order; for each unit, rank candidates and apply the
//!    eligibility filter chain in rank order. The first passing candidate
//!    is committed: its emission plan becomes draft assignments and the
//!    state is updated in place. Units nobody passes go to the unmet
//!    list, which is an expected output rather than an error.
//!
//! There is no backtracking: once a unit is matched, the choice stands.
//! The run is single-threaded, has no suspension points, and terminates
//! in O(days x units x workers).
//!
//! # Determinism
//! With identical inputs (including list order), two runs produce
//! identical outputs: demand order is declaration order, ranking is a
//! stable total order, and state mutation follows the loop.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::engine::demand::synthesize_day;
use crate::engine::filters::{check, emission_plan};
use crate::engine::rank::rank_candidates;
use crate::engine::RunState;
use crate::error::PlanError;
use crate::models::{
    Assignment, DemandUnit, PlanPolicies, RecurringShift, StationRow, Worker,
};

/// Inclusive date range of one planning run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanningWindow {
    /// First day planned.
    pub start: NaiveDate,
    /// Last day planned (inclusive).
    pub end: NaiveDate,
}

impl PlanningWindow {
    /// Creates a planning window.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Iterates the days of the window in ascending order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        let mut current = Some(self.start);
        let end = self.end;
        std::iter::from_fn(move || {
            let date = current?;
            if date > end {
                return None;
            }
            current = date.succ_opt();
            Some(date)
        })
    }
}

/// Input container for one planning run.
///
/// Snapshots of collaborator state; the engine reads them and writes
/// nothing back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Date range to plan.
    pub window: PlanningWindow,
    /// Roster, in stable iteration order.
    pub workers: Vec<Worker>,
    /// Weekly demand configuration, in declaration order.
    pub demand_config: Vec<StationRow>,
    /// Standing weekday shifts to preload.
    pub recurring: Vec<RecurringShift>,
    /// Pre-existing assignments to preload (re-runs, manual overrides).
    pub existing: Vec<Assignment>,
    /// Policy tables for this run.
    pub policies: PlanPolicies,
}

impl PlanRequest {
    /// Creates a request with an empty roster and configuration.
    pub fn new(window: PlanningWindow) -> Self {
        Self {
            window,
            workers: Vec::new(),
            demand_config: Vec::new(),
            recurring: Vec::new(),
            existing: Vec::new(),
            policies: PlanPolicies::default(),
        }
    }

    /// Sets the roster.
    pub fn with_workers(mut self, workers: Vec<Worker>) -> Self {
        self.workers = workers;
        self
    }

    /// Sets the demand configuration.
    pub fn with_demand_config(mut self, config: Vec<StationRow>) -> Self {
        self.demand_config = config;
        self
    }

    /// Sets the recurring shifts.
    pub fn with_recurring(mut self, recurring: Vec<RecurringShift>) -> Self {
        self.recurring = recurring;
        self
    }

    /// Sets the pre-existing assignments.
    pub fn with_existing(mut self, existing: Vec<Assignment>) -> Self {
        self.existing = existing;
        self
    }

    /// Sets the policy tables.
    pub fn with_policies(mut self, policies: PlanPolicies) -> Self {
        self.policies = policies;
        self
    }
}

/// Output of one planning run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanOutcome {
    /// Draft assignments, in emission order.
    pub assignments: Vec<Assignment>,
    /// Demand units no candidate passed for, in processing order.
    pub unmet: Vec<DemandUnit>,
}

/// Greedy, deterministic shift planner.
///
/// # Example
///
/// ```
/// use chrono::{NaiveDate, Weekday};
/// use rota_engine::engine::{PlanRequest, PlanningWindow, ShiftPlanner};
/// use rota_engine::models::{StationRow, Worker};
///
/// let monday = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
/// let request = PlanRequest::new(PlanningWindow::new(monday, monday))
///     .with_workers(vec![Worker::operator("W1").with_skill("BAR")])
///     .with_demand_config(vec![
///         StationRow::new("BAR").with_slot(Weekday::Mon, "10:00-15:00"),
///     ]);
///
/// let outcome = ShiftPlanner::new().plan(&request).unwrap();
/// assert_eq!(outcome.assignments.len(), 1);
/// assert!(outcome.unmet.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShiftPlanner;

impl ShiftPlanner {
    /// Creates a planner.
    pub fn new() -> Self {
        Self
    }

    /// Runs one planning pass over the request snapshot.
    ///
    /// Fails only on structural input defects; everything else is
    /// expressed in the outcome.
    pub fn plan(&self, request: &PlanRequest) -> Result<PlanOutcome, PlanError> {
        let window = request.window;
        if window.end < window.start {
            return Err(PlanError::InvalidWindow {
                start: window.start,
                end: window.end,
            });
        }

        let mut state = RunState::new();
        state.preload_recurring(&request.recurring, &request.workers, window.start, window.end);
        state.preload_existing(&request.existing, window.start, window.end);

        let mut outcome = PlanOutcome::default();

        for date in window.days() {
            let units = synthesize_day(&request.demand_config, date);
            debug!(%date, units = units.len(), "synthesized demand");

            for unit in units {
                let Some(assigned) = self.assign_unit(&unit, request, &mut state, &mut outcome)
                else {
                    trace!(station = %unit.station, %date, "demand unit unmet");
                    outcome.unmet.push(unit);
                    continue;
                };
                trace!(worker = %assigned, station = %unit.station, %date, "demand unit matched");
            }
        }

        let kpi = crate::engine::PlanKpi::calculate(&outcome);
        info!(
            assignments = outcome.assignments.len(),
            unmet = outcome.unmet.len(),
            coverage = kpi.coverage_rate,
            "planning run complete"
        );
        Ok(outcome)
    }

    /// Tries candidates in rank order; commits the first full pass.
    ///
    /// Returns the assigned worker's ID, or `None` when nobody passes.
    fn assign_unit(
        &self,
        unit: &DemandUnit,
        request: &PlanRequest,
        state: &mut RunState,
        outcome: &mut PlanOutcome,
    ) -> Option<String> {
        let order = rank_candidates(&request.workers, unit, state, &request.policies);

        for idx in order {
            let worker = &request.workers[idx];
            let plan = emission_plan(worker, unit, state, &request.policies);

            match check(worker, unit, &plan, state, &request.policies) {
                Ok(()) => {
                    for (start, end, segment) in plan {
                        state.occupy(unit.date, &worker.id, start, end);
                        let mut assignment =
                            Assignment::draft(unit.date, &worker.id, &unit.station, start, end);
                        assignment.segment = segment;
                        outcome.assignments.push(assignment);
                    }
                    return Some(worker.id.clone());
                }
                Err(rejection) => {
                    trace!(worker = %worker.id, %rejection, "candidate rejected");
                }
            }
        }

        None
    }
}

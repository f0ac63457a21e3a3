//! The shift assignment engine.
//!
//! A pure batch pipeline: it consumes a snapshot of roster, demand
//! configuration, and prior assignments, and produces draft assignments
//! plus the demand it could not satisfy. It reads and writes no storage.
//!
//! # Pipeline
//!
//! 1. **`demand`** expands the weekly slot grid into per-day units.
//! 2. **`state`** tracks accumulated hours and busy intervals, seeded
//!    from recurring shifts and pre-existing assignments.
//! 3. **`rank`** orders candidates per unit by priority tier and
//!    headroom.
//! 4. **`filters`** applies the eligibility predicate chain in rank
//!    order.
//! 5. **`planner`** drives the greedy loop and emits draft assignments;
//!    **`kpi`** summarizes the outcome.

pub mod demand;
pub mod filters;
pub mod kpi;
pub mod planner;
pub mod rank;
mod state;

pub use kpi::PlanKpi;
pub use planner::{PlanOutcome, PlanRequest, PlanningWindow, ShiftPlanner};
pub use rank::PriorityTier;
pub use state::RunState;

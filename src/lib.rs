//! Weekly shift assignment engine for hospitality rosters.
//!
//! Given a declarative weekly staffing-demand configuration per station
//! and a roster of workers with skills, availability rules, and hour
//! budgets, the engine produces a conflict-free set of draft shift
//! assignments plus the demand it could not satisfy.
//!
//! The engine is a pure batch function: it consumes snapshots of state
//! and produces a result. Persistence, transport, import/export, and
//! rendering belong to collaborators. It is a deterministic greedy
//! heuristic rather than a global optimizer: identical inputs always
//! produce identical output, and every rejection has a nameable cause.
//!
//! # Modules
//!
//! - **`models`**: Domain types (`Worker`, `StationRow`, `DemandUnit`,
//!   `Assignment`, `RecurringShift`, `PlanPolicies`)
//! - **`engine`**: The planning pipeline: demand synthesis, run state,
//!   candidate ranking, eligibility filters, the greedy planner, KPIs
//! - **`time`**: `"HH:MM"` clock math, interval overlap, sessions
//! - **`validation`**: Structural input checks
//!
//! # Example
//!
//! ```
//! use chrono::{NaiveDate, Weekday};
//! use rota_engine::engine::{PlanRequest, PlanningWindow, ShiftPlanner};
//! use rota_engine::models::{StationRow, Worker};
//!
//! let monday = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
//! let request = PlanRequest::new(PlanningWindow::new(monday, monday))
//!     .with_workers(vec![Worker::operator("W1").with_skill("BAR")])
//!     .with_demand_config(vec![
//!         StationRow::new("BAR").with_slot(Weekday::Mon, "10:00-15:00"),
//!     ]);
//!
//! let outcome = ShiftPlanner::new().plan(&request)?;
//! assert_eq!(outcome.assignments.len(), 1);
//! # Ok::<(), rota_engine::PlanError>(())
//! ```

pub mod engine;
mod error;
pub mod models;
pub mod time;
pub mod validation;

pub use error::PlanError;

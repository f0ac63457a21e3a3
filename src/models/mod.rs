//! Shift-planning domain models.
//!
//! Input and output types for the assignment engine:
//!
//! | Type | Meaning |
//! |------|---------|
//! | `Worker` | Roster member with skills, availability, hour budget |
//! | `StationRow` | One row of the weekly demand configuration |
//! | `DemandUnit` | One required staffing slot for one day |
//! | `Assignment` | One worker covering one window (engine output) |
//! | `RecurringShift` | Weekday-keyed standing shift (preloaded input) |
//! | `PlanPolicies` | Pinned-override and segmented-shift rule tables |

mod assignment;
mod demand;
mod policy;
mod worker;

pub use assignment::{Assignment, AssignmentStatus, RecurringShift, Segment};
pub use demand::{DemandUnit, StationRow};
pub use policy::{PinnedOverride, PlanPolicies, SegmentedShift, TimeWindow};
pub use worker::{
    normalize_token, Absence, AbsenceScope, Availability, AvailabilityRule, Role, Worker,
};

//! Engine error types.
//!
//! Business-rule failures are never errors here: unmet demand, malformed
//! slot strings, and unknown worker references are all normal, skippable
//! data. The only fatal conditions are structural input defects that
//! would make partial processing misleading; those fail fast, before any
//! state mutation.

use chrono::NaiveDate;
use thiserror::Error;

/// Fatal planning-input error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// The planning window ends before it starts.
    #[error("invalid planning window: end {end} is before start {start}")]
    InvalidWindow {
        /// Window start date.
        start: NaiveDate,
        /// Window end date.
        end: NaiveDate,
    },
}

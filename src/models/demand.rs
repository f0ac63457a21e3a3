//! Staffing demand models.
//!
//! `StationRow` is one row of the weekly demand configuration: which
//! station needs cover, on which weekdays, in which slot windows, and
//! how many people per window. `DemandUnit` is the flat, per-day
//! expansion the engine actually processes.
//!
//! Slot windows are kept as raw `"HH:MM-HH:MM"` strings; parsing happens
//! during synthesis, and malformed windows are skipped there.

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One station row of the weekly demand configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationRow {
    /// Station identifier (raw; may carry suffix annotations).
    pub station: String,
    /// People required per slot window.
    pub frequency: u32,
    /// Disabled rows contribute no demand.
    pub enabled: bool,
    /// Raw slot windows per weekday, in declaration order (up to two).
    pub slots: HashMap<Weekday, Vec<String>>,
}

impl StationRow {
    /// Creates an enabled station row requiring one person per slot.
    pub fn new(station: impl Into<String>) -> Self {
        Self {
            station: station.into(),
            frequency: 1,
            enabled: true,
            slots: HashMap::new(),
        }
    }

    /// Sets the people required per slot window.
    pub fn with_frequency(mut self, frequency: u32) -> Self {
        self.frequency = frequency;
        self
    }

    /// Disables this row.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Adds a raw `"HH:MM-HH:MM"` slot window on a weekday.
    pub fn with_slot(mut self, weekday: Weekday, window: impl Into<String>) -> Self {
        self.slots.entry(weekday).or_default().push(window.into());
        self
    }

    /// Raw windows configured for a weekday (empty if none).
    pub fn windows_for(&self, weekday: Weekday) -> &[String] {
        self.slots.get(&weekday).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// One required (station, time-window) staffing slot for one day.
///
/// Quantity is already collapsed: a row with frequency 3 yields three
/// identical units. End may exceed 24.0 for cross-midnight shifts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandUnit {
    /// Station identifier (raw).
    pub station: String,
    /// Service date.
    pub date: NaiveDate,
    /// Shift start (serialized as `"HH:MM"`).
    #[serde(with = "crate::time::serde_hhmm")]
    pub start: f64,
    /// Shift end (serialized as `"HH:MM"`, wrapping past midnight).
    #[serde(with = "crate::time::serde_hhmm")]
    pub end: f64,
}

impl DemandUnit {
    /// Creates a demand unit.
    pub fn new(station: impl Into<String>, date: NaiveDate, start: f64, end: f64) -> Self {
        Self {
            station: station.into(),
            date,
            start,
            end,
        }
    }

    /// Shift duration in hours.
    #[inline]
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

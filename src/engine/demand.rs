//! Demand synthesis.
//!
//! Expands the per-station weekly slot grid into the flat list of
//! `DemandUnit`s the planning loop processes.
//!
//! # Ordering
//! Output order is the canonical processing order for the greedy loop
//! and therefore part of the engine's contract: days ascend through the
//! window; within a day, station rows in declaration order, then slot
//! windows in declaration order, then repetition index. Identical
//! configuration always yields an identical unit sequence.

use chrono::{Datelike, NaiveDate};

use crate::models::{DemandUnit, StationRow};
use crate::time::parse_window;

/// Expands one day of the demand configuration.
///
/// Disabled rows contribute nothing. Malformed slot windows (missing
/// separator, unparsable times) are silently skipped, never an error.
/// Each parsed window yields `frequency` identical units.
pub fn synthesize_day(config: &[StationRow], date: NaiveDate) -> Vec<DemandUnit> {
    let weekday = date.weekday();
    let mut units = Vec::new();

    for row in config {
        if !row.enabled {
            continue;
        }
        for raw in row.windows_for(weekday) {
            let Some((start, end)) = parse_window(raw) else {
                continue;
            };
            for _ in 0..row.frequency {
                units.push(DemandUnit::new(row.station.clone(), date, start, end));
            }
        }
    }

    units
}

/// Expands the demand configuration over an inclusive date range.
pub fn synthesize(
    config: &[StationRow],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<DemandUnit> {
    let mut units = Vec::new();
    let mut date = start;
    while date <= end {
        units.extend(synthesize_day(config, date));
        match date.succ_opt() {
            Some(next) => date = next,
            None => break,
        }
    }
    units
}

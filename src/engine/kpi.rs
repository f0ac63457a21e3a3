//! Plan summary metrics.
//!
//! Computes coverage and load figures from a finished `PlanOutcome`.
//! This is a value computation only; rendering and reporting stay with
//! collaborators.
//!
//! Segment-tagged assignments always come in pairs (one lunch, one
//! dinner block per matched unit), so the number of matched demand units
//! is `untagged + tagged / 2`.

use std::collections::HashMap;

use crate::engine::PlanOutcome;

/// Coverage and load summary for one planning run.
#[derive(Debug, Clone)]
pub struct PlanKpi {
    /// Demand units processed (matched + unmet).
    pub demand_units: usize,
    /// Demand units that received a worker.
    pub matched_units: usize,
    /// Demand units nobody passed for.
    pub unmet_units: usize,
    /// Assignment records emitted (segmented units emit two).
    pub assignments_emitted: usize,
    /// Matched fraction (1.0 when there was no demand).
    pub coverage_rate: f64,
    /// Assigned hours per worker.
    pub hours_by_worker: HashMap<String, f64>,
    /// Total assigned hours.
    pub total_hours: f64,
}

impl PlanKpi {
    /// Computes KPIs from a plan outcome.
    pub fn calculate(outcome: &PlanOutcome) -> Self {
        let tagged = outcome
            .assignments
            .iter()
            .filter(|a| a.segment.is_some())
            .count();
        let untagged = outcome.assignments.len() - tagged;
        let matched_units = untagged + tagged / 2;
        let unmet_units = outcome.unmet.len();
        let demand_units = matched_units + unmet_units;

        let mut hours_by_worker: HashMap<String, f64> = HashMap::new();
        let mut total_hours = 0.0;
        for a in &outcome.assignments {
            let duration = a.duration();
            *hours_by_worker.entry(a.worker_id.clone()).or_insert(0.0) += duration;
            total_hours += duration;
        }

        let coverage_rate = if demand_units == 0 {
            1.0
        } else {
            matched_units as f64 / demand_units as f64
        };

        Self {
            demand_units,
            matched_units,
            unmet_units,
            assignments_emitted: outcome.assignments.len(),
            coverage_rate,
            hours_by_worker,
            total_hours,
        }
    }

    /// Whether every demand unit was matched.
    pub fn is_fully_covered(&self) -> bool {
        self.unmet_units == 0
    }
}

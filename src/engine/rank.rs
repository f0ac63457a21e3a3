//! Candidate ranking for demand units.
//!
//! Orders the worker pool for one demand unit by a strict total order:
//!
//! 1. A worker with an applicable pinned override outranks everyone.
//! 2. Remaining workers rank by role tier (trainee, then operator, then
//!    unspecified, then on-call last).
//! 3. Ties break by remaining headroom, largest first, which balances
//!    load across the pool.
//! 4. Full ties keep input order (stable sort), so identical inputs
//!    always rank identically.
//!
//! Tiers are an ordered enum compared lexicographically with headroom.
//! Exclusion-flagged roles never enter the ranking.

use crate::engine::RunState;
use crate::models::{DemandUnit, PlanPolicies, Role, Worker};

/// Ranking tier. Earlier variants rank first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PriorityTier {
    /// Applicable pinned override.
    Pinned,
    /// Trainee role.
    Trainee,
    /// Standard operator role.
    Operator,
    /// No declared role.
    Unspecified,
    /// On-call cover; assigned only when nobody else passes.
    LastResort,
}

/// The ranking tier of a worker for one demand unit.
///
/// Returns `None` for exclusion-flagged roles, which never rank.
pub fn tier_for(worker: &Worker, unit: &DemandUnit, policies: &PlanPolicies) -> Option<PriorityTier> {
    if worker.role.is_excluded() {
        return None;
    }
    if policies.applicable_pin(&worker.id, unit).is_some() {
        return Some(PriorityTier::Pinned);
    }
    Some(match worker.role {
        Role::Trainee => PriorityTier::Trainee,
        Role::Operator => PriorityTier::Operator,
        Role::OnCall => PriorityTier::LastResort,
        Role::Unspecified => PriorityTier::Unspecified,
        // Excluded above
        Role::Manager => return None,
    })
}

/// Ranks workers for a demand unit.
///
/// Returns indices into `workers`, best candidate first. Excluded roles
/// are absent from the result.
pub fn rank_candidates(
    workers: &[Worker],
    unit: &DemandUnit,
    state: &RunState,
    policies: &PlanPolicies,
) -> Vec<usize> {
    let mut ranked: Vec<(usize, PriorityTier, f64)> = workers
        .iter()
        .enumerate()
        .filter_map(|(i, w)| tier_for(w, unit, policies).map(|t| (i, t, state.headroom(w))))
        .collect();

    // Stable sort: ties keep roster order, keeping runs reproducible.
    ranked.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| b.2.total_cmp(&a.2)));
    ranked.into_iter().map(|(i, _, _)| i).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PinnedOverride, TimeWindow};
    use chrono::NaiveDate;

    fn unit() -> DemandUnit {
        DemandUnit::new(
            "BAR",
            NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
            10.0,
            15.0,
        )
    }

    fn ids(workers: &[Worker], order: &[usize]) -> Vec<String> {
        order.iter().map(|&i| workers[i].id.clone()).collect()
    }

    #[test]
    fn test_tier_order() {
        assert!(PriorityTier::Pinned < PriorityTier::Trainee);
        assert!(PriorityTier::Trainee < PriorityTier::Operator);
        assert!(PriorityTier::Operator < PriorityTier::Unspecified);
        assert!(PriorityTier::Unspecified < PriorityTier::LastResort);
    }

    #[test]
    fn test_manager_never_ranks() {
        let workers = vec![
            Worker::new("M", Role::Manager).with_skill("BAR"),
            Worker::operator("W1").with_skill("BAR"),
        ];
        let order = rank_candidates(&workers, &unit(), &RunState::new(), &PlanPolicies::new());
        assert_eq!(ids(&workers, &order), vec!["W1"]);
    }

    #[test]
    fn test_role_tiers() {
        let workers = vec![
            Worker::new("oncall", Role::OnCall),
            Worker::new("none", Role::Unspecified),
            Worker::new("op", Role::Operator),
            Worker::new("trainee", Role::Trainee),
        ];
        let order = rank_candidates(&workers, &unit(), &RunState::new(), &PlanPolicies::new());
        assert_eq!(ids(&workers, &order), vec!["trainee", "op", "none", "oncall"]);
    }

    #[test]
    fn test_applicable_pin_outranks_all() {
        let workers = vec![
            Worker::new("trainee", Role::Trainee),
            Worker::operator("P"),
        ];
        let policies = PlanPolicies::new().with_pinned(PinnedOverride::new(
            "P",
            TimeWindow::new(10.0, 16.0),
            TimeWindow::new(10.5, 15.5),
        ));
        let order = rank_candidates(&workers, &unit(), &RunState::new(), &policies);
        assert_eq!(ids(&workers, &order), vec!["P", "trainee"]);
    }

    #[test]
    fn test_inapplicable_pin_ranks_by_role() {
        let workers = vec![
            Worker::new("trainee", Role::Trainee),
            Worker::operator("P"),
        ];
        // Condition window does not contain the demand interval
        let policies = PlanPolicies::new().with_pinned(PinnedOverride::new(
            "P",
            TimeWindow::new(17.0, 23.0),
            TimeWindow::new(18.0, 22.0),
        ));
        let order = rank_candidates(&workers, &unit(), &RunState::new(), &policies);
        assert_eq!(ids(&workers, &order), vec!["trainee", "P"]);
    }

    #[test]
    fn test_headroom_breaks_ties() {
        let workers = vec![
            Worker::operator("tapped").with_hours(0.0, 40.0),
            Worker::operator("fresh").with_hours(0.0, 40.0),
        ];
        let mut state = RunState::new();
        state.occupy(
            NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
            "tapped",
            8.0,
            18.0,
        );

        let order = rank_candidates(&workers, &unit(), &state, &PlanPolicies::new());
        assert_eq!(ids(&workers, &order), vec!["fresh", "tapped"]);
    }

    #[test]
    fn test_full_tie_keeps_roster_order() {
        let workers = vec![
            Worker::operator("first").with_hours(0.0, 40.0),
            Worker::operator("second").with_hours(0.0, 40.0),
        ];
        let order = rank_candidates(&workers, &unit(), &RunState::new(), &PlanPolicies::new());
        assert_eq!(ids(&workers, &order), vec!["first", "second"]);
    }
}

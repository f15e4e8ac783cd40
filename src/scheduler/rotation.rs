//! Group rotation fairness.
//!
//! Assigns a responsible group to every group-mode event, balancing two
//! pressures: groups that served less often come first, and among those,
//! groups that served longest ago come first. Never-assigned groups
//! always win over previously assigned ones.
//!
//! # Scoring
//!
//! For each candidate group, `score = count * 100 - gap * 10`, where
//! `count` is how often the group was assigned in this run and `gap` is
//! the number of events (across all rules, the global event index) since
//! its last assignment, or 1000 when it never was. Lowest score wins; a
//! seeded shuffle of the pool decides ties, so tie-breaking is stable
//! for a given date and seed offset but varies across dates.

use std::collections::HashMap;

use tracing::trace;

use crate::models::{Event, ResponsibilityMode};
use crate::scheduler::RosterState;
use crate::sequence::{date_seed, SequenceGenerator};

/// Gap value for a group that was never assigned in this run. Scores as
/// -10000, below any assigned group's score.
const NEVER_ASSIGNED_GAP: i64 = 1_000;

/// Assigns responsible groups to all group-mode events in place.
///
/// `events` must be in ascending date order; their index in the slice is
/// the recency clock for gap measurement. Records one rotation per
/// assignment in the carried state, keyed by the pool's membership.
pub fn assign_rotating_groups(events: &mut [Event], state: &mut RosterState, seed_offset: i64) {
    let mut counts: HashMap<String, u64> = HashMap::new();
    let mut last_assigned: HashMap<String, usize> = HashMap::new();

    for (index, event) in events.iter_mut().enumerate() {
        if event.responsibility_mode != ResponsibilityMode::Group
            || event.rotation_pool.is_empty()
        {
            continue;
        }

        let mut pool = event.rotation_pool.clone();
        let mut gen = SequenceGenerator::new(date_seed(event.date).wrapping_add(seed_offset));
        gen.shuffle(&mut pool);

        // First strictly-lowest score in shuffled order wins.
        let mut best: Option<usize> = None;
        let mut best_score = 0i64;
        for (i, group) in pool.iter().enumerate() {
            let count = counts.get(group.as_str()).copied().unwrap_or(0) as i64;
            let gap = match last_assigned.get(group.as_str()) {
                Some(&last) => (index - last) as i64,
                None => NEVER_ASSIGNED_GAP,
            };
            let score = count * 100 - gap * 10;
            if best.is_none() || score < best_score {
                best = Some(i);
                best_score = score;
            }
        }

        if let Some(i) = best {
            let group = pool[i].clone();
            *counts.entry(group.clone()).or_insert(0) += 1;
            last_assigned.insert(group.clone(), index);
            state.record_rotation(&RosterState::pool_key(&event.rotation_pool));
            trace!(date = %event.date, group = %group, "rotation assignment");
            event.responsible_group = Some(group);
        }
    }
}

//! Roster fairness metrics.
//!
//! Computes distribution summaries from a completed roster: who served
//! how often, and how far apart the busiest and quietest participants
//! are. Pure reporting, no thresholds; display layers and tests decide
//! what counts as unfair.

use std::collections::HashMap;

use crate::models::Roster;

/// Fairness indicators of a completed roster.
///
/// Spreads are `max - min` over participants that appear in the roster
/// at least once; participants a roster never touched are unknown to it
/// and carry no count. An empty category has spread 0.
#[derive(Debug, Clone, PartialEq)]
pub struct FairnessReport {
    /// Leader name to slots staffed.
    pub leader_counts: HashMap<String, u64>,
    /// Helper name to events helped.
    pub helper_counts: HashMap<String, u64>,
    /// Group name to events held responsible.
    pub rotation_counts: HashMap<String, u64>,
    /// Busiest minus quietest leader.
    pub leader_spread: u64,
    /// Busiest minus quietest helper.
    pub helper_spread: u64,
    /// Busiest minus quietest responsible group.
    pub rotation_spread: u64,
}

impl FairnessReport {
    /// Computes the report from a roster.
    pub fn calculate(roster: &Roster) -> Self {
        let leader_counts = roster.leader_counts();
        let helper_counts = roster.helper_counts();
        let rotation_counts = roster.rotation_counts();
        let leader_spread = spread(&leader_counts);
        let helper_spread = spread(&helper_counts);
        let rotation_spread = spread(&rotation_counts);
        Self {
            leader_counts,
            helper_counts,
            rotation_counts,
            leader_spread,
            helper_spread,
            rotation_spread,
        }
    }
}

fn spread(counts: &HashMap<String, u64>) -> u64 {
    let max = counts.values().max().copied().unwrap_or(0);
    let min = counts.values().min().copied().unwrap_or(0);
    max - min
}

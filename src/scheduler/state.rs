//! Carried scheduling state.
//!
//! Rosters are usually generated a window at a time (a term, a quarter).
//! [`RosterState`] is the snapshot that carries fairness across windows:
//! the caller persists the state returned with one roster and feeds it
//! into the next run, and leader and helper balancing continue where the
//! previous window left off.
//!
//! Rotation continuity is coarser: the state tracks one total per
//! rotation pool, keyed by the pool's sorted membership, while per-group
//! recency is re-derived within each run.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Counters carried between scheduling runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterState {
    /// Leader name to number of events led.
    #[serde(default)]
    pub leader_counts: HashMap<String, u64>,
    /// Helper name to number of events helped.
    #[serde(default)]
    pub helper_counts: HashMap<String, u64>,
    /// Rotation pool key to number of rotation assignments made.
    #[serde(default)]
    pub rotation_counts: HashMap<String, u64>,
}

impl RosterState {
    /// Creates an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The carried-state key of a rotation pool: its group names,
    /// sorted, joined with `|`. Pools with the same membership share
    /// one key regardless of declaration order.
    pub fn pool_key(pool: &[String]) -> String {
        let mut names: Vec<&str> = pool.iter().map(String::as_str).collect();
        names.sort_unstable();
        names.join("|")
    }

    /// Seeds a leader count (for tests and migrations).
    pub fn with_leader_count(mut self, name: impl Into<String>, count: u64) -> Self {
        self.leader_counts.insert(name.into(), count);
        self
    }

    /// Seeds a helper count (for tests and migrations).
    pub fn with_helper_count(mut self, name: impl Into<String>, count: u64) -> Self {
        self.helper_counts.insert(name.into(), count);
        self
    }

    /// Times the given leader has led.
    pub fn leader_count(&self, name: &str) -> u64 {
        self.leader_counts.get(name).copied().unwrap_or(0)
    }

    /// Times the given helper has helped.
    pub fn helper_count(&self, name: &str) -> u64 {
        self.helper_counts.get(name).copied().unwrap_or(0)
    }

    /// Rotation assignments recorded for the given pool key.
    pub fn rotation_count(&self, pool_key: &str) -> u64 {
        self.rotation_counts.get(pool_key).copied().unwrap_or(0)
    }

    /// Records one led event for the leader.
    pub fn record_leader(&mut self, name: &str) {
        *self.leader_counts.entry(name.to_string()).or_insert(0) += 1;
    }

    /// Records one helped event for the helper.
    pub fn record_helper(&mut self, name: &str) {
        *self.helper_counts.entry(name.to_string()).or_insert(0) += 1;
    }

    /// Records one rotation assignment for the pool key.
    pub fn record_rotation(&mut self, pool_key: &str) {
        *self.rotation_counts.entry(pool_key.to_string()).or_insert(0) += 1;
    }
}

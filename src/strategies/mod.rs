//! Leader assignment strategies.
//!
//! Three strategies decide which eligible leaders staff an event. All
//! three are deterministic: any randomness comes from a
//! [`SequenceGenerator`] seeded by the event date, so re-running the
//! engine replays the same picks.
//!
//! | Strategy | Ordering |
//! |----------|----------|
//! | `RoundRobin` | fewest past assignments first, seeded shuffle breaks ties |
//! | `Random` | seeded shuffle only, counts ignored |
//! | `Weighted` | weight descending, then fewest past assignments |
//!
//! The weighted strategy deliberately skips the shuffle: leaders tied on
//! both weight and count keep their declaration order, which makes weight
//! configuration errors visible instead of hiding them behind noise.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::models::{Event, Leader};
use crate::sequence::{date_seed, SequenceGenerator};

/// Strategy for picking leaders from an eligible pool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeaderStrategy {
    /// Evens out assignment counts; ties broken by seeded shuffle.
    #[default]
    RoundRobin,
    /// Pure seeded shuffle; ignores past assignment counts.
    Random,
    /// Prefers heavier weights; counts break weight ties, declaration
    /// order breaks full ties.
    Weighted,
}

impl LeaderStrategy {
    /// Applies the eligibility filter and selects up to `count` leaders
    /// for the event, updating `counts` for each pick.
    pub fn select_leaders(
        &self,
        event: &Event,
        leaders: &[Leader],
        count: usize,
        counts: &mut HashMap<String, u64>,
        seed_offset: i64,
    ) -> Vec<String> {
        let eligible = eligible_leaders(event, leaders);
        self.select_from(&eligible, event.date, count, counts, seed_offset)
    }

    /// Selects up to `count` leaders from pre-filtered candidates,
    /// updating `counts` for each pick.
    ///
    /// Fewer candidates than `count` yields all of them; an empty
    /// candidate list yields an empty result. Candidate order matters
    /// for the weighted strategy (declaration order breaks full ties).
    pub fn select_from(
        &self,
        candidates: &[&Leader],
        date: NaiveDate,
        count: usize,
        counts: &mut HashMap<String, u64>,
        seed_offset: i64,
    ) -> Vec<String> {
        if candidates.is_empty() || count == 0 {
            return Vec::new();
        }
        let mut pool: Vec<&Leader> = candidates.to_vec();

        match self {
            LeaderStrategy::RoundRobin => {
                let mut gen = SequenceGenerator::new(date_seed(date).wrapping_add(seed_offset));
                gen.shuffle(&mut pool);
                // Stable sort: the shuffled order survives among equal counts.
                pool.sort_by_key(|leader| count_of(counts, &leader.name));
            }
            LeaderStrategy::Random => {
                let mut gen = SequenceGenerator::new(date_seed(date).wrapping_add(seed_offset));
                gen.shuffle(&mut pool);
            }
            LeaderStrategy::Weighted => {
                pool.sort_by(|a, b| {
                    b.weight
                        .cmp(&a.weight)
                        .then(count_of(counts, &a.name).cmp(&count_of(counts, &b.name)))
                });
            }
        }

        let chosen: Vec<String> = pool
            .iter()
            .take(count)
            .map(|leader| leader.name.clone())
            .collect();
        for name in &chosen {
            *counts.entry(name.clone()).or_insert(0) += 1;
        }
        trace!(strategy = ?self, date = %date, chosen = ?chosen, "leader selection");
        chosen
    }
}

impl fmt::Display for LeaderStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LeaderStrategy::RoundRobin => "round-robin",
            LeaderStrategy::Random => "random",
            LeaderStrategy::Weighted => "weighted",
        };
        f.write_str(name)
    }
}

/// Error returned when parsing an unknown strategy name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStrategyError(String);

impl fmt::Display for UnknownStrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown leader strategy '{}' (expected round-robin, random, or weighted)",
            self.0
        )
    }
}

impl std::error::Error for UnknownStrategyError {}

impl FromStr for LeaderStrategy {
    type Err = UnknownStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "round-robin" | "round_robin" | "roundrobin" => Ok(LeaderStrategy::RoundRobin),
            "random" => Ok(LeaderStrategy::Random),
            "weighted" => Ok(LeaderStrategy::Weighted),
            _ => Err(UnknownStrategyError(s.to_string())),
        }
    }
}

/// The common eligibility filter, applied before any strategy runs:
/// a leader is eligible when they serve at least one of the event's
/// involved groups and are available on the event date.
pub fn eligible_leaders<'a>(event: &Event, leaders: &'a [Leader]) -> Vec<&'a Leader> {
    leaders
        .iter()
        .filter(|leader| {
            leader.serves_any(&event.groups_involved) && leader.is_available_on(event.date)
        })
        .collect()
}

fn count_of(counts: &HashMap<String, u64>, name: &str) -> u64 {
    counts.get(name).copied().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EventKind, ResponsibilityMode};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_event(on: NaiveDate) -> Event {
        Event {
            date: on,
            kind: EventKind::Combined,
            description: "event".into(),
            groups_involved: vec!["north".into()],
            responsibility_mode: ResponsibilityMode::Leader,
            rotation_pool: Vec::new(),
            responsible_group: None,
            leader_required: true,
            start_time: None,
            duration_minutes: None,
            helpers_per_leader: 0,
        }
    }

    fn make_leader(name: &str) -> Leader {
        Leader::new(name).with_group("north")
    }

    #[test]
    fn test_eligibility_filters_groups_and_availability() {
        let event = make_event(date(2025, 3, 3)); // a Monday
        let leaders = vec![
            make_leader("Ana"),
            Leader::new("Ben").with_group("south"),
            make_leader("Cleo").with_availability("tue"),
        ];
        let eligible = eligible_leaders(&event, &leaders);
        let names: Vec<&str> = eligible.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Ana"]);
    }

    #[test]
    fn test_round_robin_prefers_fewest_assignments() {
        let event = make_event(date(2025, 3, 3));
        let leaders = vec![make_leader("Ana"), make_leader("Ben"), make_leader("Cleo")];
        let mut counts = HashMap::from([("Ana".to_string(), 2), ("Cleo".to_string(), 1)]);

        let chosen =
            LeaderStrategy::RoundRobin.select_leaders(&event, &leaders, 1, &mut counts, 0);
        assert_eq!(chosen, vec!["Ben"]);
        assert_eq!(counts.get("Ben"), Some(&1));
    }

    #[test]
    fn test_round_robin_breaks_ties_by_seeded_shuffle() {
        // With all counts equal, the date-seeded shuffle of three
        // candidates on 2025-03-03 puts the second declared leader first.
        let event = make_event(date(2025, 3, 3));
        let leaders = vec![make_leader("Ana"), make_leader("Ben"), make_leader("Cleo")];
        let mut counts = HashMap::new();

        let chosen =
            LeaderStrategy::RoundRobin.select_leaders(&event, &leaders, 1, &mut counts, 0);
        assert_eq!(chosen, vec!["Ben"]);
    }

    #[test]
    fn test_random_ignores_counts() {
        let event = make_event(date(2025, 3, 3));
        let leaders = vec![make_leader("Ana"), make_leader("Ben"), make_leader("Cleo")];

        // Ben leads the shuffled order even with the highest count.
        let mut counts = HashMap::from([("Ben".to_string(), 5)]);
        let chosen = LeaderStrategy::Random.select_leaders(&event, &leaders, 1, &mut counts, 0);
        assert_eq!(chosen, vec!["Ben"]);

        // RoundRobin, given the same inputs, avoids Ben.
        let mut counts = HashMap::from([("Ben".to_string(), 5)]);
        let chosen =
            LeaderStrategy::RoundRobin.select_leaders(&event, &leaders, 1, &mut counts, 0);
        assert_eq!(chosen, vec!["Ana"]);
    }

    #[test]
    fn test_weighted_prefers_heavier_leaders() {
        let event = make_event(date(2025, 3, 3));
        let leaders = vec![
            make_leader("Ana").with_weight(1),
            make_leader("Ben").with_weight(3),
            make_leader("Cleo").with_weight(2),
        ];
        let mut counts = HashMap::new();

        let chosen = LeaderStrategy::Weighted.select_leaders(&event, &leaders, 2, &mut counts, 0);
        assert_eq!(chosen, vec!["Ben", "Cleo"]);
    }

    #[test]
    fn test_weighted_breaks_weight_ties_by_count_then_declaration() {
        let event = make_event(date(2025, 3, 3));
        let leaders = vec![make_leader("Ana"), make_leader("Ben"), make_leader("Cleo")];

        let mut counts = HashMap::from([("Ana".to_string(), 2)]);
        let chosen = LeaderStrategy::Weighted.select_leaders(&event, &leaders, 1, &mut counts, 0);
        assert_eq!(chosen, vec!["Ben"]);

        // Full tie: declaration order wins, regardless of date.
        let mut counts = HashMap::new();
        let chosen = LeaderStrategy::Weighted.select_leaders(&event, &leaders, 1, &mut counts, 0);
        assert_eq!(chosen, vec!["Ana"]);
    }

    #[test]
    fn test_count_larger_than_pool_takes_everyone() {
        let event = make_event(date(2025, 3, 3));
        let leaders = vec![make_leader("Ana"), make_leader("Ben")];
        let mut counts = HashMap::new();

        let chosen =
            LeaderStrategy::RoundRobin.select_leaders(&event, &leaders, 5, &mut counts, 0);
        assert_eq!(chosen.len(), 2);
    }

    #[test]
    fn test_no_eligible_leaders_yields_empty() {
        let event = make_event(date(2025, 3, 3));
        let leaders = vec![Leader::new("Ben").with_group("south")];
        let mut counts = HashMap::new();

        let chosen =
            LeaderStrategy::RoundRobin.select_leaders(&event, &leaders, 1, &mut counts, 0);
        assert!(chosen.is_empty());
        assert!(counts.is_empty());
    }

    #[test]
    fn test_selection_increments_counts() {
        let event = make_event(date(2025, 3, 3));
        let leaders = vec![make_leader("Ana"), make_leader("Ben"), make_leader("Cleo")];
        let mut counts = HashMap::new();

        LeaderStrategy::RoundRobin.select_leaders(&event, &leaders, 2, &mut counts, 0);
        let total: u64 = counts.values().sum();
        assert_eq!(total, 2);
    }

    #[test]
    fn test_strategy_parsing() {
        assert_eq!(
            "round-robin".parse::<LeaderStrategy>().unwrap(),
            LeaderStrategy::RoundRobin
        );
        assert_eq!(
            "round_robin".parse::<LeaderStrategy>().unwrap(),
            LeaderStrategy::RoundRobin
        );
        assert_eq!(
            "Random".parse::<LeaderStrategy>().unwrap(),
            LeaderStrategy::Random
        );
        assert_eq!(
            "weighted".parse::<LeaderStrategy>().unwrap(),
            LeaderStrategy::Weighted
        );
        assert!("fairness".parse::<LeaderStrategy>().is_err());
    }

    #[test]
    fn test_strategy_display_round_trips() {
        for strategy in [
            LeaderStrategy::RoundRobin,
            LeaderStrategy::Random,
            LeaderStrategy::Weighted,
        ] {
            let parsed: LeaderStrategy = strategy.to_string().parse().unwrap();
            assert_eq!(parsed, strategy);
        }
    }

    #[test]
    fn test_strategy_serde_names() {
        let json = serde_json::to_string(&LeaderStrategy::RoundRobin).unwrap();
        assert_eq!(json, "\"round-robin\"");
        let back: LeaderStrategy = serde_json::from_str("\"weighted\"").unwrap();
        assert_eq!(back, LeaderStrategy::Weighted);
    }
}

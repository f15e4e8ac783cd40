//! Roster output model.
//!
//! The roster is the engine's result: one assignment row per expanded
//! event, in date order, with resolved responsibility and staffing.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::EventKind;

/// One staffed leader on an assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderSlot {
    /// Leader name.
    pub leader: String,
    /// For separate events, the group this leader covers.
    pub group: Option<String>,
    /// Helper names attached to this leader.
    pub helpers: Vec<String>,
}

/// One calendar-bound roster row.
///
/// Every expanded event produces a row, including events that need no
/// leader; their `leaders` list is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Event date.
    pub date: NaiveDate,
    /// Combined or separate.
    pub kind: EventKind,
    /// Display description.
    pub description: String,
    /// Start time, when declared by the rule.
    pub start_time: Option<NaiveTime>,
    /// Duration in minutes, when declared by the rule.
    pub duration_minutes: Option<u32>,
    /// Responsible group, for rotation-mode events.
    pub responsible_group: Option<String>,
    /// Staffed leaders with their helpers.
    pub leaders: Vec<LeaderSlot>,
}

/// An ordered collection of assignments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    /// Assignment rows in ascending date order.
    pub assignments: Vec<Assignment>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an assignment row.
    pub fn add_assignment(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    /// Number of assignment rows.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether the roster has no rows.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// All rows on the given date.
    pub fn assignments_on(&self, date: NaiveDate) -> Vec<&Assignment> {
        self.assignments.iter().filter(|a| a.date == date).collect()
    }

    /// All rows staffing the given leader.
    pub fn assignments_for_leader(&self, name: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.leaders.iter().any(|slot| slot.leader == name))
            .collect()
    }

    /// All rows within the given date range (inclusive).
    pub fn between(&self, start: NaiveDate, end: NaiveDate) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.date >= start && a.date <= end)
            .collect()
    }

    /// Leader name to number of slots staffed across the roster.
    pub fn leader_counts(&self) -> HashMap<String, u64> {
        let mut counts = HashMap::new();
        for assignment in &self.assignments {
            for slot in &assignment.leaders {
                *counts.entry(slot.leader.clone()).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Helper name to number of times attached across the roster.
    pub fn helper_counts(&self) -> HashMap<String, u64> {
        let mut counts = HashMap::new();
        for assignment in &self.assignments {
            for slot in &assignment.leaders {
                for helper in &slot.helpers {
                    *counts.entry(helper.clone()).or_insert(0) += 1;
                }
            }
        }
        counts
    }

    /// Group name to number of times held responsible across the roster.
    pub fn rotation_counts(&self) -> HashMap<String, u64> {
        let mut counts = HashMap::new();
        for assignment in &self.assignments {
            if let Some(group) = &assignment.responsible_group {
                *counts.entry(group.clone()).or_insert(0) += 1;
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_row(day: u32, leader: &str, group: Option<&str>) -> Assignment {
        Assignment {
            date: date(2025, 1, day),
            kind: EventKind::Combined,
            description: "event".into(),
            start_time: None,
            duration_minutes: None,
            responsible_group: group.map(String::from),
            leaders: vec![LeaderSlot {
                leader: leader.into(),
                group: None,
                helpers: vec!["Dana".into()],
            }],
        }
    }

    #[test]
    fn test_roster_queries() {
        let mut roster = Roster::new();
        roster.add_assignment(make_row(6, "Ana", Some("north")));
        roster.add_assignment(make_row(13, "Ben", Some("south")));
        roster.add_assignment(make_row(20, "Ana", Some("north")));

        assert_eq!(roster.len(), 3);
        assert!(!roster.is_empty());
        assert_eq!(roster.assignments_on(date(2025, 1, 13)).len(), 1);
        assert_eq!(roster.assignments_for_leader("Ana").len(), 2);
        assert_eq!(roster.between(date(2025, 1, 10), date(2025, 1, 20)).len(), 2);
    }

    #[test]
    fn test_roster_counts() {
        let mut roster = Roster::new();
        roster.add_assignment(make_row(6, "Ana", Some("north")));
        roster.add_assignment(make_row(13, "Ben", None));
        roster.add_assignment(make_row(20, "Ana", Some("north")));

        assert_eq!(roster.leader_counts().get("Ana"), Some(&2));
        assert_eq!(roster.leader_counts().get("Ben"), Some(&1));
        assert_eq!(roster.rotation_counts().get("north"), Some(&2));
        assert_eq!(roster.helper_counts().get("Dana"), Some(&3));
    }
}

//! Leader model.
//!
//! A leader is an adult responsible for running events. Leaders declare
//! which groups they serve and, optionally, when they are available.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// A leader who can be assigned to events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leader {
    /// Unique leader name.
    pub name: String,
    /// Names of the groups this leader serves.
    pub groups: Vec<String>,
    /// Availability entries: ISO dates (`2025-01-06`) or weekday names
    /// (`mon`, `monday`, case-insensitive). Empty means always available.
    pub availability: Vec<String>,
    /// Relative weight for the weighted strategy (higher = preferred).
    pub weight: u32,
}

impl Leader {
    /// Creates a new leader with the given name.
    ///
    /// Starts with no groups, universal availability, and weight 1.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            groups: Vec::new(),
            availability: Vec::new(),
            weight: 1,
        }
    }

    /// Adds a group this leader serves.
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.groups.push(group.into());
        self
    }

    /// Sets the full list of groups this leader serves.
    pub fn with_groups(mut self, groups: Vec<String>) -> Self {
        self.groups = groups;
        self
    }

    /// Adds an availability entry (an ISO date or a weekday name).
    pub fn with_availability(mut self, entry: impl Into<String>) -> Self {
        self.availability.push(entry.into());
        self
    }

    /// Sets the weight used by the weighted strategy.
    pub fn with_weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    /// Whether this leader serves the given group.
    pub fn serves_group(&self, group: &str) -> bool {
        self.groups.iter().any(|g| g == group)
    }

    /// Whether this leader serves at least one of the given groups.
    pub fn serves_any(&self, groups: &[String]) -> bool {
        groups.iter().any(|g| self.serves_group(g))
    }

    /// Whether this leader is available on the given date.
    ///
    /// An empty availability list means always available. Otherwise at
    /// least one entry must match: an ISO date entry matches that exact
    /// date, a weekday entry matches every date falling on that weekday.
    /// Entries that parse as neither never match (validation reports
    /// them, see [`crate::validation`]).
    pub fn is_available_on(&self, date: NaiveDate) -> bool {
        if self.availability.is_empty() {
            return true;
        }
        self.availability.iter().any(|entry| {
            if let Ok(day) = NaiveDate::parse_from_str(entry, "%Y-%m-%d") {
                return day == date;
            }
            entry
                .parse::<Weekday>()
                .map(|weekday| weekday == date.weekday())
                .unwrap_or(false)
        })
    }
}

//! Expanded event occurrence.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::{EventKind, ResponsibilityMode};

/// One concrete occurrence of a recurring rule.
///
/// Produced by the recurrence expander and consumed by the rotation
/// assigner and the staffing pass. `responsible_group` starts as `None`
/// and is filled in by the rotation assigner for group-mode events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Calendar date of the occurrence.
    pub date: NaiveDate,
    /// Combined or separate.
    pub kind: EventKind,
    /// Display description (rule description, or the rule name).
    pub description: String,
    /// Groups taking part; never empty after expansion.
    pub groups_involved: Vec<String>,
    /// How responsibility is resolved.
    pub responsibility_mode: ResponsibilityMode,
    /// Rotation pool; empty unless `responsibility_mode` is `Group`.
    pub rotation_pool: Vec<String>,
    /// Group responsible for this occurrence, once assigned.
    pub responsible_group: Option<String>,
    /// Whether the staffing pass must pick leaders for this event.
    pub leader_required: bool,
    /// Start time, when the rule declares one.
    pub start_time: Option<NaiveTime>,
    /// Duration in minutes, when the rule declares one.
    pub duration_minutes: Option<u32>,
    /// Helpers to attach to each assigned leader.
    pub helpers_per_leader: u32,
}

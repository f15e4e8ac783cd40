//! Recurring rule model.
//!
//! A rule describes one family of recurring events declaratively: how
//! often it occurs, which groups take part, and how responsibility for
//! each occurrence is resolved. Rules carry no dates of their own; the
//! recurrence expander turns them into concrete events for a window.

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// How often a rule recurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// Every week on a fixed weekday.
    Weekly,
    /// Every month on the nth occurrence of a weekday.
    Monthly,
    /// Every year on a fixed month and day.
    Yearly,
}

/// Whether the groups meet together or each on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// All involved groups meet as one event.
    Combined,
    /// Each involved group meets separately and needs its own leader.
    Separate,
}

/// How responsibility for an occurrence is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponsibilityMode {
    /// Nobody is responsible; the event is informational.
    None,
    /// A group from the rotation pool is responsible (rotation fairness).
    Group,
    /// One or more leaders are responsible (leader strategies).
    Leader,
}

/// Responsibility settings of a rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Responsibility {
    /// Resolution mode.
    pub mode: ResponsibilityMode,
    /// Group names rotating responsibility. Only read when `mode` is
    /// [`ResponsibilityMode::Group`].
    #[serde(default)]
    pub rotation_pool: Vec<String>,
}

impl Responsibility {
    /// No responsibility.
    pub fn none() -> Self {
        Self {
            mode: ResponsibilityMode::None,
            rotation_pool: Vec::new(),
        }
    }

    /// Group rotation over the given pool.
    pub fn rotating(pool: Vec<String>) -> Self {
        Self {
            mode: ResponsibilityMode::Group,
            rotation_pool: pool,
        }
    }

    /// Leader responsibility (staffed by an assignment strategy).
    pub fn leader() -> Self {
        Self {
            mode: ResponsibilityMode::Leader,
            rotation_pool: Vec::new(),
        }
    }
}

/// A declarative recurring event rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurringRule {
    /// Rule name; doubles as the event description when none is set.
    pub name: String,
    /// Recurrence frequency.
    pub frequency: Frequency,
    /// Weekday for weekly and monthly rules. Defaults to Monday when
    /// unset.
    pub weekday: Option<Weekday>,
    /// Occurrence index for monthly rules: 1 to 5 from the start of the
    /// month, negative from the end (-1 = last). Defaults to 1 when
    /// unset.
    pub nth: Option<i8>,
    /// Month (1-12) for yearly rules. Defaults to January when unset.
    pub month: Option<u32>,
    /// Day of month for yearly rules. Defaults to 1 when unset.
    pub month_day: Option<u32>,
    /// Combined or separate event.
    pub kind: EventKind,
    /// Groups taking part. Empty means every known group.
    #[serde(default)]
    pub groups_involved: Vec<String>,
    /// How responsibility is resolved.
    pub responsibility: Responsibility,
    /// Event description override.
    pub description: Option<String>,
    /// Start time of each occurrence.
    pub start_time: Option<NaiveTime>,
    /// Duration of each occurrence in minutes.
    pub duration_minutes: Option<u32>,
    /// Helpers to attach to each assigned leader. 0 = none.
    #[serde(default)]
    pub helpers_per_leader: u32,
}

impl RecurringRule {
    fn base(name: impl Into<String>, frequency: Frequency) -> Self {
        Self {
            name: name.into(),
            frequency,
            weekday: None,
            nth: None,
            month: None,
            month_day: None,
            kind: EventKind::Combined,
            groups_involved: Vec::new(),
            responsibility: Responsibility::none(),
            description: None,
            start_time: None,
            duration_minutes: None,
            helpers_per_leader: 0,
        }
    }

    /// Creates a weekly rule on the given weekday.
    pub fn weekly(name: impl Into<String>, weekday: Weekday) -> Self {
        let mut rule = Self::base(name, Frequency::Weekly);
        rule.weekday = Some(weekday);
        rule
    }

    /// Creates a monthly rule on the nth occurrence of a weekday
    /// (1 to 5 from the start, -1 for the last).
    pub fn monthly(name: impl Into<String>, weekday: Weekday, nth: i8) -> Self {
        let mut rule = Self::base(name, Frequency::Monthly);
        rule.weekday = Some(weekday);
        rule.nth = Some(nth);
        rule
    }

    /// Creates a yearly rule on a fixed month and day.
    pub fn yearly(name: impl Into<String>, month: u32, month_day: u32) -> Self {
        let mut rule = Self::base(name, Frequency::Yearly);
        rule.month = Some(month);
        rule.month_day = Some(month_day);
        rule
    }

    /// Sets the event kind.
    pub fn with_kind(mut self, kind: EventKind) -> Self {
        self.kind = kind;
        self
    }

    /// Adds an involved group.
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.groups_involved.push(group.into());
        self
    }

    /// Sets the full list of involved groups.
    pub fn with_groups(mut self, groups: Vec<String>) -> Self {
        self.groups_involved = groups;
        self
    }

    /// Sets the responsibility settings.
    pub fn with_responsibility(mut self, responsibility: Responsibility) -> Self {
        self.responsibility = responsibility;
        self
    }

    /// Sets the event description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the start time of each occurrence.
    pub fn with_start_time(mut self, start_time: NaiveTime) -> Self {
        self.start_time = Some(start_time);
        self
    }

    /// Sets the duration of each occurrence in minutes.
    pub fn with_duration_minutes(mut self, minutes: u32) -> Self {
        self.duration_minutes = Some(minutes);
        self
    }

    /// Sets how many helpers accompany each assigned leader.
    pub fn with_helpers_per_leader(mut self, count: u32) -> Self {
        self.helpers_per_leader = count;
        self
    }
}

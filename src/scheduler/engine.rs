//! Roster generation engine.
//!
//! # Pipeline
//!
//! 1. Expand all rules over the window into dated events.
//! 2. Assign responsible groups to rotation events (global date order).
//! 3. Staff each event: leaders via the configured strategy, then
//!    helpers per staffed leader.
//! 4. Return the roster together with the final state snapshot.
//!
//! The engine is total: events nobody can staff produce rows with gaps
//! instead of errors, and an empty window produces an empty roster. Run
//! [`crate::validation::validate_request`] beforehand to catch
//! configuration mistakes.

use std::collections::HashSet;

use chrono::NaiveDate;
use tracing::debug;

use crate::models::{
    Assignment, Event, EventKind, Group, Leader, LeaderSlot, RecurringRule, Roster,
};
use crate::recurrence::expand;
use crate::scheduler::helpers::assign_helpers;
use crate::scheduler::rotation::assign_rotating_groups;
use crate::scheduler::RosterState;
use crate::strategies::LeaderStrategy;

/// Input container for roster generation.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterRequest {
    /// Leader registry.
    pub leaders: Vec<Leader>,
    /// Known groups with their members.
    pub groups: Vec<Group>,
    /// Recurring rules to expand.
    pub rules: Vec<RecurringRule>,
    /// First date of the window (inclusive).
    pub window_start: NaiveDate,
    /// Last date of the window (inclusive).
    pub window_end: NaiveDate,
    /// State carried over from the previous window, if any.
    pub initial_state: Option<RosterState>,
}

impl RosterRequest {
    /// Creates a request for the given window.
    pub fn new(window_start: NaiveDate, window_end: NaiveDate) -> Self {
        Self {
            leaders: Vec::new(),
            groups: Vec::new(),
            rules: Vec::new(),
            window_start,
            window_end,
            initial_state: None,
        }
    }

    /// Sets the leader registry.
    pub fn with_leaders(mut self, leaders: Vec<Leader>) -> Self {
        self.leaders = leaders;
        self
    }

    /// Sets the groups.
    pub fn with_groups(mut self, groups: Vec<Group>) -> Self {
        self.groups = groups;
        self
    }

    /// Sets the rules.
    pub fn with_rules(mut self, rules: Vec<RecurringRule>) -> Self {
        self.rules = rules;
        self
    }

    /// Sets the carried state from a previous run.
    pub fn with_initial_state(mut self, state: RosterState) -> Self {
        self.initial_state = Some(state);
        self
    }
}

/// A generated roster and the state to carry into the next window.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterOutcome {
    /// The resolved roster, in date order.
    pub roster: Roster,
    /// Final counter snapshot; persist it and pass it to the next run.
    pub state: RosterState,
}

/// Deterministic roster generator.
///
/// Configuration lives on the scheduler; inputs travel in the request.
/// The same scheduler value can serve many requests.
///
/// # Example
///
/// ```
/// use rota::models::{Group, Leader, RecurringRule};
/// use rota::scheduler::{RosterRequest, RosterScheduler};
/// use chrono::{NaiveDate, Weekday};
///
/// let request = RosterRequest::new(
///     NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
/// )
/// .with_rules(vec![RecurringRule::weekly("standup", Weekday::Mon)])
/// .with_groups(vec![Group::new("north")])
/// .with_leaders(vec![Leader::new("Ana").with_group("north")]);
///
/// let outcome = RosterScheduler::new().schedule(&request);
/// assert_eq!(outcome.roster.len(), 4); // Mondays: Jan 6, 13, 20, 27
/// ```
#[derive(Debug, Clone)]
pub struct RosterScheduler {
    strategy: LeaderStrategy,
    leaders_per_combined: usize,
    seed_offset: i64,
}

impl RosterScheduler {
    /// Creates a scheduler with round-robin staffing, two leaders per
    /// combined event, and seed offset 0.
    pub fn new() -> Self {
        Self {
            strategy: LeaderStrategy::RoundRobin,
            leaders_per_combined: 2,
            seed_offset: 0,
        }
    }

    /// Sets the leader selection strategy.
    pub fn with_strategy(mut self, strategy: LeaderStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets how many leaders staff each combined event.
    pub fn with_leaders_per_combined(mut self, count: usize) -> Self {
        self.leaders_per_combined = count;
        self
    }

    /// Sets the global seed offset mixed into every shuffle seed.
    /// Different offsets give independently shuffled rosters. The mix
    /// wraps on overflow, so any `i64` is a usable offset.
    pub fn with_seed_offset(mut self, seed_offset: i64) -> Self {
        self.seed_offset = seed_offset;
        self
    }

    /// Generates the roster for a request.
    pub fn schedule(&self, request: &RosterRequest) -> RosterOutcome {
        let mut state = request.initial_state.clone().unwrap_or_default();
        let group_names: Vec<String> = request.groups.iter().map(|g| g.name.clone()).collect();

        let mut events = expand(
            &request.rules,
            &group_names,
            request.window_start,
            request.window_end,
        );
        debug!(
            events = events.len(),
            start = %request.window_start,
            end = %request.window_end,
            "expanded recurrence rules"
        );

        assign_rotating_groups(&mut events, &mut state, self.seed_offset);

        let mut roster = Roster::new();
        for event in &events {
            let leaders = self.staff_event(event, request, &mut state);
            roster.add_assignment(Assignment {
                date: event.date,
                kind: event.kind,
                description: event.description.clone(),
                start_time: event.start_time,
                duration_minutes: event.duration_minutes,
                responsible_group: event.responsible_group.clone(),
                leaders,
            });
        }

        debug!(assignments = roster.len(), "roster complete");
        RosterOutcome { roster, state }
    }

    fn staff_event(
        &self,
        event: &Event,
        request: &RosterRequest,
        state: &mut RosterState,
    ) -> Vec<LeaderSlot> {
        if !event.leader_required {
            return Vec::new();
        }
        match event.kind {
            EventKind::Combined => self.staff_combined(event, request, state),
            EventKind::Separate => self.staff_separate(event, request, state),
        }
    }

    /// Combined events take `leaders_per_combined` leaders from the
    /// common eligible pool; each gets helpers from all groups they
    /// share with the event.
    fn staff_combined(
        &self,
        event: &Event,
        request: &RosterRequest,
        state: &mut RosterState,
    ) -> Vec<LeaderSlot> {
        let chosen = self.strategy.select_leaders(
            event,
            &request.leaders,
            self.leaders_per_combined,
            &mut state.leader_counts,
            self.seed_offset,
        );
        chosen
            .into_iter()
            .map(|name| {
                let helpers = match request.leaders.iter().find(|l| l.name == name) {
                    Some(leader) => assign_helpers(
                        event,
                        leader,
                        None,
                        &request.groups,
                        &request.leaders,
                        state,
                        self.seed_offset,
                    ),
                    None => Vec::new(),
                };
                LeaderSlot {
                    leader: name,
                    group: None,
                    helpers,
                }
            })
            .collect()
    }

    /// Separate events take one leader per involved group, in the
    /// event's group order. A leader already staffed on this event is
    /// not considered for later groups, so nobody covers two groups on
    /// the same date. Groups with no remaining candidate get no slot.
    fn staff_separate(
        &self,
        event: &Event,
        request: &RosterRequest,
        state: &mut RosterState,
    ) -> Vec<LeaderSlot> {
        let mut slots = Vec::new();
        let mut used: HashSet<String> = HashSet::new();
        for group in &event.groups_involved {
            let candidates: Vec<&Leader> = request
                .leaders
                .iter()
                .filter(|leader| {
                    leader.serves_group(group)
                        && leader.is_available_on(event.date)
                        && !used.contains(leader.name.as_str())
                })
                .collect();
            let chosen = self.strategy.select_from(
                &candidates,
                event.date,
                1,
                &mut state.leader_counts,
                self.seed_offset,
            );
            if let Some(name) = chosen.into_iter().next() {
                used.insert(name.clone());
                let helpers = match request.leaders.iter().find(|l| l.name == name) {
                    Some(leader) => assign_helpers(
                        event,
                        leader,
                        Some(group),
                        &request.groups,
                        &request.leaders,
                        state,
                        self.seed_offset,
                    ),
                    None => Vec::new(),
                };
                slots.push(LeaderSlot {
                    leader: name,
                    group: Some(group.clone()),
                    helpers,
                });
            }
        }
        slots
    }
}

impl Default for RosterScheduler {
    fn default() -> Self {
        Self::new()
    }
}

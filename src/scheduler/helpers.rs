//! Helper assignment.
//!
//! Helpers are group members who accompany an assigned leader. Selection
//! balances carried helper counts the same way round-robin balances
//! leaders, with one extra seed ingredient: the leader's name, so two
//! leaders on the same event draw from independently shuffled pools.

use std::collections::HashSet;

use crate::models::{Event, Group, Leader};
use crate::scheduler::RosterState;
use crate::sequence::{date_seed, name_seed, SequenceGenerator};

/// Picks helpers for one leader on one event, updating the carried
/// helper counts.
///
/// The candidate pool is the membership of `restrict_group` when given
/// (separate events), otherwise the union of every group both served by
/// the leader and involved in the event, in declaration order. Names
/// that belong to the leader registry are excluded; members appearing in
/// several groups are considered once. Fewer candidates than the event
/// requests yields all of them.
pub fn assign_helpers(
    event: &Event,
    leader: &Leader,
    restrict_group: Option<&str>,
    groups: &[Group],
    leaders: &[Leader],
    state: &mut RosterState,
    seed_offset: i64,
) -> Vec<String> {
    let requested = event.helpers_per_leader as usize;
    if requested == 0 {
        return Vec::new();
    }

    let leader_names: HashSet<&str> = leaders.iter().map(|l| l.name.as_str()).collect();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut pool: Vec<String> = Vec::new();
    for group in groups {
        let in_pool = match restrict_group {
            Some(name) => group.name == name,
            None => {
                leader.serves_group(&group.name)
                    && event.groups_involved.iter().any(|g| *g == group.name)
            }
        };
        if !in_pool {
            continue;
        }
        for member in &group.members {
            if leader_names.contains(member.as_str()) {
                continue;
            }
            if seen.insert(member.as_str()) {
                pool.push(member.clone());
            }
        }
    }
    if pool.is_empty() {
        return Vec::new();
    }

    let seed = date_seed(event.date)
        .wrapping_add(name_seed(&leader.name))
        .wrapping_add(seed_offset);
    let mut gen = SequenceGenerator::new(seed);
    gen.shuffle(&mut pool);
    // Stable sort: the shuffled order survives among equal counts.
    pool.sort_by_key(|member| state.helper_count(member));
    pool.truncate(requested);

    for member in &pool {
        state.record_helper(member);
    }
    pool
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EventKind, ResponsibilityMode};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_event(helpers_per_leader: u32, groups_involved: Vec<&str>) -> Event {
        Event {
            date: date(2025, 3, 3),
            kind: EventKind::Combined,
            description: "event".into(),
            groups_involved: groups_involved.into_iter().map(String::from).collect(),
            responsibility_mode: ResponsibilityMode::Leader,
            rotation_pool: Vec::new(),
            responsible_group: None,
            leader_required: true,
            start_time: None,
            duration_minutes: None,
            helpers_per_leader,
        }
    }

    fn north() -> Group {
        Group::new("north")
            .with_member("Dana")
            .with_member("Eli")
            .with_member("Fay")
            .with_member("Gus")
    }

    #[test]
    fn test_zero_requested_yields_empty() {
        let event = make_event(0, vec!["north"]);
        let leader = Leader::new("Alice").with_group("north");
        let mut state = RosterState::new();

        let helpers = assign_helpers(&event, &leader, None, &[north()], &[], &mut state, 0);
        assert!(helpers.is_empty());
        assert!(state.helper_counts.is_empty());
    }

    #[test]
    fn test_known_picks_per_leader() {
        // Same event, different leaders: the name-seeded shuffles differ.
        let event = make_event(2, vec!["north"]);
        let alice = Leader::new("Alice").with_group("north");
        let bob = Leader::new("Bob").with_group("north");

        let mut state = RosterState::new();
        let helpers = assign_helpers(&event, &alice, None, &[north()], &[], &mut state, 0);
        assert_eq!(helpers, vec!["Eli", "Fay"]);

        let mut state = RosterState::new();
        let helpers = assign_helpers(&event, &bob, None, &[north()], &[], &mut state, 0);
        assert_eq!(helpers, vec!["Gus", "Eli"]);
    }

    #[test]
    fn test_sequential_leaders_balance_helpers() {
        let event = make_event(2, vec!["north"]);
        let alice = Leader::new("Alice").with_group("north");
        let bob = Leader::new("Bob").with_group("north");
        let mut state = RosterState::new();

        let first = assign_helpers(&event, &alice, None, &[north()], &[], &mut state, 0);
        let second = assign_helpers(&event, &bob, None, &[north()], &[], &mut state, 0);

        assert_eq!(first, vec!["Eli", "Fay"]);
        // Bob's picks avoid the members Alice already used.
        assert_eq!(second, vec!["Gus", "Dana"]);
    }

    #[test]
    fn test_leaders_are_excluded_from_pool() {
        let event = make_event(4, vec!["north"]);
        let leader = Leader::new("Alice").with_group("north");
        // Dana is also a configured leader and must not appear.
        let registry = vec![leader.clone(), Leader::new("Dana").with_group("north")];
        let mut state = RosterState::new();

        let helpers = assign_helpers(&event, &leader, None, &[north()], &registry, &mut state, 0);
        assert_eq!(helpers.len(), 3);
        assert!(!helpers.contains(&"Dana".to_string()));
    }

    #[test]
    fn test_restrict_group_limits_pool() {
        let event = make_event(4, vec!["north", "south"]);
        let leader = Leader::new("Alice").with_group("north").with_group("south");
        let groups = vec![north(), Group::new("south").with_member("Hana")];
        let mut state = RosterState::new();

        let helpers = assign_helpers(
            &event,
            &leader,
            Some("south"),
            &groups,
            &[],
            &mut state,
            0,
        );
        assert_eq!(helpers, vec!["Hana"]);
    }

    #[test]
    fn test_union_covers_only_served_and_involved_groups() {
        // Leader serves north and south; the event involves north and east.
        // Only north members qualify.
        let event = make_event(10, vec!["north", "east"]);
        let leader = Leader::new("Alice").with_group("north").with_group("south");
        let groups = vec![
            north(),
            Group::new("south").with_member("Hana"),
            Group::new("east").with_member("Iris"),
        ];
        let mut state = RosterState::new();

        let mut helpers =
            assign_helpers(&event, &leader, None, &groups, &[], &mut state, 0);
        helpers.sort_unstable();
        assert_eq!(helpers, vec!["Dana", "Eli", "Fay", "Gus"]);
    }

    #[test]
    fn test_duplicate_members_counted_once() {
        let event = make_event(10, vec!["north", "south"]);
        let leader = Leader::new("Alice").with_group("north").with_group("south");
        let groups = vec![
            Group::new("north").with_member("Dana"),
            Group::new("south").with_member("Dana").with_member("Hana"),
        ];
        let mut state = RosterState::new();

        let mut helpers =
            assign_helpers(&event, &leader, None, &groups, &[], &mut state, 0);
        helpers.sort_unstable();
        assert_eq!(helpers, vec!["Dana", "Hana"]);
    }

    #[test]
    fn test_carried_counts_deprioritize_busy_helpers() {
        let event = make_event(1, vec!["north"]);
        let leader = Leader::new("Alice").with_group("north");
        let mut state = RosterState::new()
            .with_helper_count("Eli", 5)
            .with_helper_count("Fay", 5)
            .with_helper_count("Gus", 5);

        let helpers = assign_helpers(&event, &leader, None, &[north()], &[], &mut state, 0);
        assert_eq!(helpers, vec!["Dana"]);
        assert_eq!(state.helper_count("Dana"), 1);
    }
}

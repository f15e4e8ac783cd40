//! Recurrence expansion.
//!
//! Turns declarative [`RecurringRule`]s into concrete [`Event`]s for a
//! date window. Expansion is total: rules that produce no occurrence in
//! the window (a 5th Monday in a 4-Monday month, Feb 29 off leap years)
//! contribute nothing, silently. Missing rule fields fall back to the
//! defaults documented on [`RecurringRule`] rather than failing.
//!
//! The output is sorted ascending by date with a stable sort, so events
//! sharing a date keep rule declaration order. That order is the global
//! clock the rotation assigner measures gaps against.
//!
//! # Reference
//! RFC 5545 (iCalendar), 3.3.10: recurrence rule semantics

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::models::{Event, EventKind, Frequency, RecurringRule, ResponsibilityMode};

const DEFAULT_WEEKDAY: Weekday = Weekday::Mon;
const DEFAULT_NTH: i8 = 1;
const DEFAULT_MONTH: u32 = 1;
const DEFAULT_MONTH_DAY: u32 = 1;

/// Expands all rules over the window into dated events.
///
/// `group_names` is the full set of known groups; rules with an empty
/// `groups_involved` list involve all of them. A window whose start is
/// after its end yields an empty list.
pub fn expand(
    rules: &[RecurringRule],
    group_names: &[String],
    window_start: NaiveDate,
    window_end: NaiveDate,
) -> Vec<Event> {
    let mut events = Vec::new();
    for rule in rules {
        for date in occurrence_dates(rule, window_start, window_end) {
            events.push(build_event(rule, date, group_names));
        }
    }
    events.sort_by_key(|e| e.date);
    events
}

fn occurrence_dates(rule: &RecurringRule, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    if start > end {
        return Vec::new();
    }
    match rule.frequency {
        Frequency::Weekly => weekly_dates(rule.weekday.unwrap_or(DEFAULT_WEEKDAY), start, end),
        Frequency::Monthly => monthly_dates(
            rule.weekday.unwrap_or(DEFAULT_WEEKDAY),
            rule.nth.unwrap_or(DEFAULT_NTH),
            start,
            end,
        ),
        Frequency::Yearly => yearly_dates(
            rule.month.unwrap_or(DEFAULT_MONTH),
            rule.month_day.unwrap_or(DEFAULT_MONTH_DAY),
            start,
            end,
        ),
    }
}

fn weekly_dates(weekday: Weekday, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let offset = (7 + weekday.num_days_from_monday() as i64
        - start.weekday().num_days_from_monday() as i64)
        % 7;
    let mut date = match start.checked_add_days(Days::new(offset as u64)) {
        Some(first) => first,
        None => return Vec::new(),
    };
    let mut dates = Vec::new();
    while date <= end {
        dates.push(date);
        date = match date.checked_add_days(Days::new(7)) {
            Some(next) => next,
            None => break,
        };
    }
    dates
}

fn monthly_dates(weekday: Weekday, nth: i8, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let (mut year, mut month) = (start.year(), start.month());
    loop {
        if let Some(date) = nth_weekday_of_month(year, month, weekday, nth) {
            if date >= start && date <= end {
                dates.push(date);
            }
        }
        if year == end.year() && month == end.month() {
            break;
        }
        month += 1;
        if month > 12 {
            month = 1;
            year += 1;
        }
    }
    dates
}

fn yearly_dates(month: u32, day: u32, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    (start.year()..=end.year())
        .filter_map(|year| NaiveDate::from_ymd_opt(year, month, day))
        .filter(|date| *date >= start && *date <= end)
        .collect()
}

/// The nth occurrence of a weekday within a month.
///
/// Positive `nth` counts from the month's start, negative from its end
/// (-1 = last). Returns `None` when the month has no such occurrence.
fn nth_weekday_of_month(year: i32, month: u32, weekday: Weekday, nth: i8) -> Option<NaiveDate> {
    let occurrences = weekday_occurrences(year, month, weekday);
    if nth >= 1 {
        occurrences.get(nth as usize - 1).copied()
    } else if nth <= -1 {
        let back = nth.unsigned_abs() as usize;
        occurrences
            .len()
            .checked_sub(back)
            .and_then(|i| occurrences.get(i))
            .copied()
    } else {
        None
    }
}

/// All dates in the month falling on the weekday, ascending (4 or 5).
fn weekday_occurrences(year: i32, month: u32, weekday: Weekday) -> Vec<NaiveDate> {
    let first = match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(first) => first,
        None => return Vec::new(),
    };
    let offset = (7 + weekday.num_days_from_monday() as i64
        - first.weekday().num_days_from_monday() as i64)
        % 7;
    let mut date = match first.checked_add_days(Days::new(offset as u64)) {
        Some(date) => date,
        None => return Vec::new(),
    };
    let mut dates = Vec::new();
    while date.month() == month {
        dates.push(date);
        date = match date.checked_add_days(Days::new(7)) {
            Some(next) => next,
            None => break,
        };
    }
    dates
}

fn build_event(rule: &RecurringRule, date: NaiveDate, group_names: &[String]) -> Event {
    let mode = rule.responsibility.mode;
    let groups_involved = if rule.groups_involved.is_empty() {
        group_names.to_vec()
    } else {
        rule.groups_involved.clone()
    };
    Event {
        date,
        kind: rule.kind,
        description: rule
            .description
            .clone()
            .unwrap_or_else(|| rule.name.clone()),
        groups_involved,
        responsibility_mode: mode,
        rotation_pool: if mode == ResponsibilityMode::Group {
            rule.responsibility.rotation_pool.clone()
        } else {
            Vec::new()
        },
        responsible_group: None,
        leader_required: mode == ResponsibilityMode::Leader || rule.kind == EventKind::Separate,
        start_time: rule.start_time,
        duration_minutes: rule.duration_minutes,
        helpers_per_leader: rule.helpers_per_leader,
    }
}

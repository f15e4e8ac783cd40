//! Input validation for roster requests.
//!
//! Checks semantic integrity of leaders, groups, rules, and the window
//! before scheduling. Detects:
//! - Duplicate names
//! - References to unknown groups
//! - Rotation mode without a rotation pool
//! - Malformed availability entries
//! - Out-of-range recurrence fields
//! - Inverted windows
//!
//! Validation is advisory and caller-invoked. The engine itself never
//! fails: it falls back to documented defaults and produces gaps instead
//! of errors, so rosters come out even from imperfect configuration.
//! Run this first when you would rather hear about the imperfections.

use std::collections::HashSet;

use chrono::{NaiveDate, Weekday};

use crate::models::{Frequency, Leader, RecurringRule, ResponsibilityMode};
use crate::scheduler::RosterRequest;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same name.
    DuplicateName,
    /// A leader or group has an empty name.
    EmptyName,
    /// Something references a group that doesn't exist.
    UnknownGroup,
    /// A rule rotates responsibility over an empty pool.
    EmptyRotationPool,
    /// A leader's weight is zero.
    InvalidWeight,
    /// An availability entry is neither an ISO date nor a weekday name.
    InvalidAvailability,
    /// A recurrence field is outside its documented range.
    InvalidRecurrence,
    /// The window ends before it starts.
    InvalidWindow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a roster request.
///
/// Checks:
/// 1. No duplicate leader or group names, no empty names
/// 2. Leader group references point to existing groups
/// 3. Leader weights are positive
/// 4. Availability entries parse as ISO dates or weekday names
/// 5. Rule group references (involved and rotation pool) exist
/// 6. Group-mode rules have a non-empty rotation pool
/// 7. Recurrence fields are in range (nth in -1 or 1..=5, month in
///    1..=12, month day in 1..=31)
/// 8. The window does not end before it starts
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_request(request: &RosterRequest) -> ValidationResult {
    let mut errors = Vec::new();

    let mut group_names = HashSet::new();
    for group in &request.groups {
        if group.name.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                "Group with an empty name",
            ));
        }
        if !group_names.insert(group.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate group name: {}", group.name),
            ));
        }
    }

    let mut leader_names = HashSet::new();
    for leader in &request.leaders {
        if leader.name.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                "Leader with an empty name",
            ));
        }
        if !leader_names.insert(leader.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate leader name: {}", leader.name),
            ));
        }
        validate_leader(leader, &group_names, &mut errors);
    }

    for rule in &request.rules {
        validate_rule(rule, &group_names, &mut errors);
    }

    if request.window_end < request.window_start {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidWindow,
            format!(
                "Window end {} is before start {}",
                request.window_end, request.window_start
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_leader(
    leader: &Leader,
    group_names: &HashSet<&str>,
    errors: &mut Vec<ValidationError>,
) {
    for group in &leader.groups {
        if !group_names.contains(group.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownGroup,
                format!("Leader '{}' references unknown group '{}'", leader.name, group),
            ));
        }
    }

    if leader.weight == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidWeight,
            format!("Leader '{}' has zero weight", leader.name),
        ));
    }

    for entry in &leader.availability {
        let is_date = NaiveDate::parse_from_str(entry, "%Y-%m-%d").is_ok();
        let is_weekday = entry.parse::<Weekday>().is_ok();
        if !is_date && !is_weekday {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidAvailability,
                format!(
                    "Leader '{}' has availability entry '{}' that is neither a date nor a weekday",
                    leader.name, entry
                ),
            ));
        }
    }
}

fn validate_rule(
    rule: &RecurringRule,
    group_names: &HashSet<&str>,
    errors: &mut Vec<ValidationError>,
) {
    for group in &rule.groups_involved {
        if !group_names.contains(group.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownGroup,
                format!("Rule '{}' involves unknown group '{}'", rule.name, group),
            ));
        }
    }

    for group in &rule.responsibility.rotation_pool {
        if !group_names.contains(group.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownGroup,
                format!(
                    "Rule '{}' rotation pool references unknown group '{}'",
                    rule.name, group
                ),
            ));
        }
    }

    if rule.responsibility.mode == ResponsibilityMode::Group
        && rule.responsibility.rotation_pool.is_empty()
    {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyRotationPool,
            format!("Rule '{}' rotates responsibility over an empty pool", rule.name),
        ));
    }

    if rule.frequency == Frequency::Monthly {
        if let Some(nth) = rule.nth {
            if nth != -1 && !(1..=5).contains(&nth) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidRecurrence,
                    format!("Rule '{}' has out-of-range nth {}", rule.name, nth),
                ));
            }
        }
    }

    if rule.frequency == Frequency::Yearly {
        if let Some(month) = rule.month {
            if !(1..=12).contains(&month) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidRecurrence,
                    format!("Rule '{}' has out-of-range month {}", rule.name, month),
                ));
            }
        }
        if let Some(day) = rule.month_day {
            if !(1..=31).contains(&day) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidRecurrence,
                    format!("Rule '{}' has out-of-range month day {}", rule.name, day),
                ));
            }
        }
    }
}

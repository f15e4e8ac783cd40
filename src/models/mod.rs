//! Roster domain models.
//!
//! Core data types for describing recurring duties and their resolved
//! assignments. Organization-agnostic: the same types cover club duty
//! rosters, on-call rotations, and volunteer schedules.
//!
//! # Pipeline
//!
//! | Type | Role |
//! |------|------|
//! | `RecurringRule` | declarative input, no dates |
//! | `Event` | one expanded occurrence, pre-assignment |
//! | `Assignment` | one resolved roster row |
//! | `Roster` | ordered assignment collection |

mod event;
mod group;
mod leader;
mod roster;
mod rule;

pub use event::Event;
pub use group::Group;
pub use leader::Leader;
pub use roster::{Assignment, LeaderSlot, Roster};
pub use rule::{EventKind, Frequency, RecurringRule, Responsibility, ResponsibilityMode};

//! Roster generation: rotation, staffing, carried state, and fairness.
//!
//! [`RosterScheduler`] drives the full pipeline over a [`RosterRequest`]
//! and returns a [`RosterOutcome`]: the roster plus the state snapshot
//! that carries fairness into the next scheduling window.
//!
//! The lower-level passes are public too: [`rotation`] assigns
//! responsible groups, [`helpers`] attaches helpers to a staffed leader,
//! and [`FairnessReport`] summarizes a finished roster.

pub mod helpers;
pub mod rotation;

mod engine;
mod fairness;
mod state;

pub use engine::{RosterOutcome, RosterRequest, RosterScheduler};
pub use fairness::FairnessReport;
pub use state::RosterState;

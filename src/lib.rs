//! Deterministic duty-roster engine.
//!
//! Expands recurring event rules over a date window, rotates responsibility
//! across groups, and assigns leaders and helpers with seeded, reproducible
//! randomness. Given the same inputs, the engine always produces the same
//! roster: there is no clock, no I/O, and no global random state.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Leader`, `Group`, `RecurringRule`, `Event`,
//!   `Roster`, `Assignment`, `LeaderSlot`
//! - **`recurrence`**: Expands rules into dated events (weekly, nth-weekday
//!   monthly, yearly)
//! - **`sequence`**: Seeded pseudo-random sequence generator and seed
//!   derivation from dates and names
//! - **`strategies`**: Leader selection strategies (round-robin, random,
//!   weighted)
//! - **`scheduler`**: The scheduling engine, rotation and helper assignment,
//!   carried state, fairness reporting
//! - **`validation`**: Input integrity checks (duplicate names, group refs,
//!   recurrence ranges)
//!
//! # Determinism
//!
//! Every random-looking decision draws from a small linear congruential
//! generator seeded from the event date (and, for helper picks, the leader
//! name) plus a caller-supplied offset. Changing the offset reshuffles
//! tie-breaks across the whole roster; keeping it fixed reproduces the
//! roster bit for bit. Scheduling a window in two halves with carried
//! state yields the same assignment counts as scheduling it whole.
//!
//! # References
//!
//! - Knuth (1997), "The Art of Computer Programming", Vol. 2, Ch. 3.2.1
//! - RFC 5545, Internet Calendaring and Scheduling (iCalendar), §3.3.10

pub mod models;
pub mod recurrence;
pub mod scheduler;
pub mod sequence;
pub mod strategies;
pub mod validation;

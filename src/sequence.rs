//! Deterministic pseudo-random sequencing.
//!
//! Every randomized decision in this crate (shuffles, tie-breaks) draws
//! from [`SequenceGenerator`], a small linear congruential generator with
//! fixed constants. The constants are part of the engine's observable
//! behavior: two builds of this crate, on any platform, produce the same
//! sequence for the same seed, and therefore the same rosters.
//!
//! Generators are cheap throwaway values. Callers construct one per
//! decision point from a date-derived seed (see [`date_seed`] and
//! [`name_seed`]) and discard it afterwards, so no sequencing state leaks
//! between decisions.
//!
//! # Reference
//! Knuth (1997), "The Art of Computer Programming", Vol. 2, Ch. 3.2.1

use chrono::{NaiveDate, NaiveTime};

const MULTIPLIER: i64 = 9_301;
const INCREMENT: i64 = 49_297;
const MODULUS: i64 = 233_280;

/// Seeded linear congruential generator.
///
/// Advances as `seed = (seed * 9301 + 49297) mod 233280` using exact
/// integer arithmetic. Outputs are `seed / 233280` in `[0, 1)`.
#[derive(Debug, Clone)]
pub struct SequenceGenerator {
    seed: i64,
}

impl SequenceGenerator {
    /// Creates a generator from the given seed.
    ///
    /// The seed is reduced modulo the generator period; the reduction
    /// leaves the output sequence unchanged while keeping every later
    /// multiplication far from `i64` overflow. Negative seeds are valid.
    pub fn new(seed: i64) -> Self {
        Self {
            seed: seed.rem_euclid(MODULUS),
        }
    }

    /// Advances the generator and returns the next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.seed = (self.seed * MULTIPLIER + INCREMENT) % MODULUS;
        self.seed as f64 / MODULUS as f64
    }

    /// Advances the generator and returns an index in `0..bound`,
    /// computed as `floor(next * bound)`.
    pub fn next_index(&mut self, bound: usize) -> usize {
        (self.next_f64() * bound as f64) as usize
    }

    /// Shuffles the slice in place with the Fisher-Yates algorithm,
    /// walking from the last position down and consuming exactly
    /// `len - 1` values. Slices shorter than two elements consume none.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.next_index(i + 1);
            items.swap(i, j);
        }
    }
}

/// Seed contribution of an event date: milliseconds since the Unix epoch
/// at midnight UTC of that date.
pub fn date_seed(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
}

/// Seed contribution of a person's name: the sum of its character code
/// points. Distinct leaders on the same event get distinct seeds.
pub fn name_seed(name: &str) -> i64 {
    name.chars().map(|c| c as i64).sum()
}

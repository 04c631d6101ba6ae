//! Daily puzzle generation
//!
//! A puzzle is nine letters derived deterministically from a calendar date:
//! the same date always produces the same grid, across runs and platforms.

mod generator;
mod rng;

pub use generator::{CENTER_INDEX, GRID_SIZE, date_seed, generate};
pub use rng::unit_value;

use chrono::NaiveDate;
use serde::Serialize;

/// One day's puzzle grid
///
/// Invariants: exactly [`GRID_SIZE`] letters forming a permutation of some
/// nine-letter dictionary word, with the required letter at [`CENTER_INDEX`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Puzzle {
    date: NaiveDate,
    letters: [char; GRID_SIZE],
}

impl Puzzle {
    pub(crate) const fn new(date: NaiveDate, letters: [char; GRID_SIZE]) -> Self {
        Self { date, letters }
    }

    /// The calendar day this puzzle belongs to
    #[inline]
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// The grid letters in display order
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[char; GRID_SIZE] {
        &self.letters
    }

    /// The required letter, always at [`CENTER_INDEX`]
    #[inline]
    #[must_use]
    pub const fn center_letter(&self) -> char {
        self.letters[CENTER_INDEX]
    }

    /// The grid letters sorted into a canonical string
    ///
    /// Used to compare letter multisets: a stored shuffled arrangement is
    /// only honored when its signature matches the canonical puzzle's.
    #[must_use]
    pub fn sorted_signature(&self) -> String {
        let mut sorted = self.letters;
        sorted.sort_unstable();
        sorted.iter().collect()
    }
}

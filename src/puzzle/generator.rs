//! Deterministic daily grid generation
//!
//! Pipeline: date -> integer seed -> seeded pick of a nine-letter dictionary
//! word -> seeded pick of the required letter -> seeded Fisher-Yates shuffle
//! -> required letter swapped into the center slot.

use super::rng;
use crate::dictionary::Dictionary;
use crate::puzzle::Puzzle;
use chrono::{Datelike, NaiveDate};

/// Number of letters in a puzzle grid
pub const GRID_SIZE: usize = 9;

/// Fixed position of the required letter
pub const CENTER_INDEX: usize = 4;

/// Grid shown when the dictionary has no nine-letter word at all
const FALLBACK_LETTER: char = 'X';

// Distinct seed streams for the three random draws of one puzzle.
const CENTER_SEED_OFFSET: u64 = 1000;
const SHUFFLE_SEED_OFFSET: u64 = 7919;

/// Derive the integer seed for a calendar date
///
/// `year * 10000 + month * 100 + day` — injective over any realistic date
/// range, so no two dates share a puzzle seed.
#[must_use]
pub fn date_seed(date: NaiveDate) -> u64 {
    let year = date.year().max(0) as u64;
    year * 10_000 + u64::from(date.month()) * 100 + u64::from(date.day())
}

/// Generate the puzzle for a date
///
/// Deterministic: the same dictionary and date always produce the identical
/// grid. If the dictionary holds no nine-letter word the grid degenerates to
/// nine [`FALLBACK_LETTER`]s instead of failing, so a front end can always
/// render.
#[must_use]
pub fn generate(dictionary: &Dictionary, date: NaiveDate) -> Puzzle {
    let seed = date_seed(date);

    // Dictionary entries are alphabet-clean at load time, so length is the
    // only remaining filter.
    let candidates: Vec<_> = dictionary
        .words()
        .iter()
        .filter(|w| w.len() == GRID_SIZE)
        .collect();

    if candidates.is_empty() {
        return Puzzle::new(date, [FALLBACK_LETTER; GRID_SIZE]);
    }

    let word = candidates[rng::pick_index(seed, candidates.len())];
    let mut letters: [char; GRID_SIZE] = word
        .chars()
        .try_into()
        .expect("candidates are exactly nine letters");

    let center = letters[rng::pick_index(seed + CENTER_SEED_OFFSET, GRID_SIZE)];

    // Seeded Fisher-Yates, last position to first.
    for i in (1..GRID_SIZE).rev() {
        let j = rng::pick_index(seed + SHUFFLE_SEED_OFFSET + i as u64, i + 1);
        letters.swap(i, j);
    }

    // The required letter always sits in the center slot. On duplicates the
    // first occurrence wins.
    if letters[CENTER_INDEX] != center {
        let pos = letters
            .iter()
            .position(|&c| c == center)
            .expect("center letter is drawn from the shuffled word");
        letters.swap(CENTER_INDEX, pos);
    }

    Puzzle::new(date, letters)
}

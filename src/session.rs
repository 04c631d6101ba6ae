//! Per-date play session state
//!
//! Tracks the word under composition, which grid positions it has consumed,
//! and the words already found for the active date. Reset whenever the
//! active date changes.

use crate::puzzle::GRID_SIZE;
use rustc_hash::FxHashSet;

/// Mutable state of the current play session
#[derive(Debug, Default, Clone)]
pub struct SessionState {
    current_word: String,
    selected_positions: FxHashSet<usize>,
    found_words: FxHashSet<String>,
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The word being composed, uppercase
    #[inline]
    #[must_use]
    pub fn current_word(&self) -> &str {
        &self.current_word
    }

    /// Grid positions consumed by the current word
    #[must_use]
    pub fn selected_positions(&self) -> &FxHashSet<usize> {
        &self.selected_positions
    }

    /// Words confirmed for the active date
    #[must_use]
    pub fn found_words(&self) -> &FxHashSet<String> {
        &self.found_words
    }

    /// Append a grid letter to the current word
    ///
    /// Each position may be used at most once per word; a reused or
    /// out-of-range position is refused.
    pub fn add_letter(&mut self, letter: char, position: usize) -> bool {
        if position >= GRID_SIZE || !self.selected_positions.insert(position) {
            return false;
        }
        self.current_word.push(letter);
        true
    }

    /// Drop the word under composition, freeing its positions
    pub fn clear_current_word(&mut self) {
        self.current_word.clear();
        self.selected_positions.clear();
    }

    /// Confirm a word as found; returns false if it was already there
    pub fn add_found_word(&mut self, word: impl Into<String>) -> bool {
        self.found_words.insert(word.into())
    }

    /// Replace the found-word set, e.g. from storage on a date switch
    pub fn set_found_words(&mut self, words: FxHashSet<String>) {
        self.found_words = words;
    }

    /// Full reset for a date change
    pub fn reset(&mut self) {
        self.clear_current_word();
        self.found_words.clear();
    }
}

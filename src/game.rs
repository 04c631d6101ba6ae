//! Game facade
//!
//! The surface a front end talks to: one active puzzle date, the session
//! being played on it, and the wiring between generator, matcher, progress
//! store, and achievement engine. All operations are synchronous; a word
//! submission persists the found words before achievements read them.

use crate::achievements::{self, AchievementDef, AchievementStatus, WordAccepted};
use crate::core::Alphabet;
use crate::dictionary::Dictionary;
use crate::matcher::{PossibleWords, RuleViolation, WordMatcher};
use crate::puzzle::{CENTER_INDEX, GRID_SIZE, Puzzle, generate};
use crate::session::SessionState;
use crate::storage::{KeyValueStore, ProgressStore};
use chrono::{Local, NaiveDate, NaiveDateTime};
use rand::seq::SliceRandom;
use serde::Serialize;

/// Outcome of submitting a word
#[derive(Debug, Clone, Serialize)]
pub struct Submission {
    pub accepted: bool,
    pub violations: Vec<RuleViolation>,
    pub newly_unlocked: Vec<AchievementDef>,
}

/// Possible words of one length, with how many are already found
#[derive(Debug, Clone, Serialize)]
pub struct LengthGroup {
    pub length: usize,
    pub words: Vec<String>,
    pub found_count: usize,
}

/// Grouped-by-length display view of the possible words
#[derive(Debug, Clone, Serialize)]
pub struct PossibleWordsView {
    pub groups: Vec<LengthGroup>,
    pub total: usize,
    pub found_total: usize,
    pub remaining: usize,
}

/// One day's game over a dictionary and a persistent store
pub struct Game<S: KeyValueStore> {
    dictionary: Dictionary,
    progress: ProgressStore<S>,
    session: SessionState,
    puzzle: Puzzle,
    /// Display arrangement; a player shuffle of the canonical grid
    letters: [char; GRID_SIZE],
    /// Unfiltered possible words for the active date
    possible: PossibleWords,
    nine_letter_only: bool,
}

impl<S: KeyValueStore> Game<S> {
    /// Start a game on the given date
    ///
    /// Generates the day's puzzle, loads any found words, and restores a
    /// stored shuffled arrangement when it still matches the puzzle's
    /// letters.
    pub fn new(dictionary: Dictionary, store: S, date: NaiveDate) -> Self {
        let mut progress = ProgressStore::new(store);
        let puzzle = generate(&dictionary, date);
        let letters = progress
            .load_fresh_shuffled_grid(&puzzle)
            .unwrap_or(*puzzle.letters());

        let mut session = SessionState::new();
        session.set_found_words(progress.load_found_words(date));

        let possible = WordMatcher::for_puzzle(&dictionary, &puzzle).possible_words(false);

        Self {
            dictionary,
            progress,
            session,
            puzzle,
            letters,
            possible,
            nine_letter_only: false,
        }
    }

    /// Switch the active date, resetting the session
    pub fn set_date(&mut self, date: NaiveDate) {
        self.session.reset();
        self.puzzle = generate(&self.dictionary, date);
        self.letters = self
            .progress
            .load_fresh_shuffled_grid(&self.puzzle)
            .unwrap_or(*self.puzzle.letters());
        self.session
            .set_found_words(self.progress.load_found_words(date));
        self.possible =
            WordMatcher::for_puzzle(&self.dictionary, &self.puzzle).possible_words(false);
    }

    /// The canonical puzzle for the active date
    #[inline]
    #[must_use]
    pub const fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// The grid in display order; the required letter is at [`CENTER_INDEX`]
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[char; GRID_SIZE] {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub const fn center_letter(&self) -> char {
        self.puzzle.center_letter()
    }

    #[inline]
    #[must_use]
    pub const fn active_date(&self) -> NaiveDate {
        self.puzzle.date()
    }

    #[inline]
    #[must_use]
    pub const fn nine_letter_only(&self) -> bool {
        self.nine_letter_only
    }

    /// Toggle the nine-letter display mode
    ///
    /// Only changes the filtered view; the unfiltered possible-word set, and
    /// with it the "all words" achievement, is untouched.
    pub fn set_nine_letter_only(&mut self, on: bool) {
        self.nine_letter_only = on;
    }

    /// The word currently being composed
    #[must_use]
    pub fn current_word(&self) -> &str {
        self.session.current_word()
    }

    /// Words already found for the active date
    #[must_use]
    pub fn found_words(&self) -> Vec<String> {
        let mut words: Vec<String> = self.session.found_words().iter().cloned().collect();
        words.sort();
        words
    }

    /// Append the letter at a grid position to the current word
    pub fn add_letter(&mut self, position: usize) -> bool {
        if position >= GRID_SIZE {
            return false;
        }
        self.session.add_letter(self.letters[position], position)
    }

    /// Drop the word under composition
    pub fn clear_current_word(&mut self) {
        self.session.clear_current_word();
    }

    /// Submit a word at the current wall-clock time
    pub fn submit_word(&mut self, word: &str) -> Submission {
        self.submit_word_at(word, Local::now().naive_local())
    }

    /// Submit a word, with the submission time made explicit
    ///
    /// On acceptance the found words are saved before the achievement engine
    /// runs, so achievement evaluation always observes the latest state.
    pub fn submit_word_at(&mut self, word: &str, now: NaiveDateTime) -> Submission {
        let validation =
            WordMatcher::for_puzzle(&self.dictionary, &self.puzzle).validate(
                word,
                self.nine_letter_only,
                self.session.found_words(),
            );

        if !validation.is_valid() {
            return Submission {
                accepted: false,
                violations: validation.violations().to_vec(),
                newly_unlocked: Vec::new(),
            };
        }

        let normalized = Alphabet::normalize(word);
        self.session.add_found_word(normalized.clone());
        self.progress
            .save_found_words(self.active_date(), self.session.found_words());

        let puzzle_date = self.active_date();
        let newly_unlocked = achievements::evaluate(
            &mut self.progress,
            &WordAccepted {
                word: &normalized,
                puzzle_date,
                found_count: self.session.found_words().len(),
                possible_count: self.possible.len(),
                now,
            },
        );

        Submission {
            accepted: true,
            violations: Vec::new(),
            newly_unlocked,
        }
    }

    /// Submit the composed word; clears it when accepted
    pub fn submit_current_word_at(&mut self, now: NaiveDateTime) -> Submission {
        let word = self.session.current_word().to_string();
        let submission = self.submit_word_at(&word, now);
        if submission.accepted {
            self.session.clear_current_word();
        }
        submission
    }

    /// The unfiltered possible words, independent of display mode
    #[must_use]
    pub const fn all_possible_words(&self) -> &PossibleWords {
        &self.possible
    }

    /// The possible words grouped by length, honoring the display mode
    #[must_use]
    pub fn possible_words_view(&self) -> PossibleWordsView {
        let filtered;
        let words = if self.nine_letter_only {
            filtered = WordMatcher::for_puzzle(&self.dictionary, &self.puzzle)
                .possible_words(true);
            &filtered
        } else {
            &self.possible
        };

        let found = self.session.found_words();
        let groups: Vec<LengthGroup> = words
            .grouped_by_length()
            .into_iter()
            .map(|(length, group)| {
                let found_count = group.iter().filter(|w| found.contains(w.text())).count();
                LengthGroup {
                    length,
                    words: group.iter().map(|w| w.text().to_string()).collect(),
                    found_count,
                }
            })
            .collect();

        let total = words.len();
        let found_total = groups.iter().map(|g| g.found_count).sum();
        PossibleWordsView {
            groups,
            total,
            found_total,
            remaining: total - found_total,
        }
    }

    /// Reshuffle the eight outer letters; the center letter stays put
    ///
    /// The new arrangement is persisted for the active date and restored on
    /// the next visit.
    pub fn shuffle_letters(&mut self) -> &[char; GRID_SIZE] {
        let mut outer: Vec<char> = self
            .letters
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != CENTER_INDEX)
            .map(|(_, &c)| c)
            .collect();
        outer.shuffle(&mut rand::rng());

        let mut next = outer.into_iter();
        for (i, slot) in self.letters.iter_mut().enumerate() {
            if i != CENTER_INDEX {
                *slot = next.next().unwrap_or(*slot);
            }
        }

        self.progress
            .save_shuffled_grid(self.active_date(), &self.letters);
        &self.letters
    }

    /// Every achievement with unlock state, as of now
    #[must_use]
    pub fn achievement_status(&self) -> Vec<AchievementStatus> {
        self.achievement_status_at(Local::now().date_naive())
    }

    /// Achievement status with the real current date made explicit
    #[must_use]
    pub fn achievement_status_at(&self, today: NaiveDate) -> Vec<AchievementStatus> {
        achievements::all_statuses(&self.progress, self.active_date(), today)
    }

    /// Reconstruct historical achievement state from stored found words
    ///
    /// Idempotent; safe to call on every startup.
    pub fn run_migration(&mut self) {
        self.run_migration_at(Local::now().naive_local());
    }

    pub fn run_migration_at(&mut self, now: NaiveDateTime) {
        achievements::run_migration(&mut self.progress, &self.dictionary, now);
    }

    /// Give the underlying store back, e.g. to flush it elsewhere
    #[must_use]
    pub fn into_store(self) -> S {
        self.progress.into_inner()
    }
}

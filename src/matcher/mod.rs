//! Word validation and possible-word enumeration
//!
//! Both operations share the same rules: minimum length, required center
//! letter, and letter availability. Availability is a multiset test — a grid
//! with one A can never cover a word needing two — or, in nine-letter mode,
//! an exact anagram test against the whole grid.

use crate::core::{Alphabet, Word};
use crate::dictionary::{Dictionary, MIN_WORD_LENGTH};
use crate::messages::MessageKey;
use crate::puzzle::{GRID_SIZE, Puzzle};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use std::collections::BTreeMap;

/// A single violated validity rule
///
/// Validation accumulates every violated rule instead of short-circuiting,
/// so a front end can report all problems or just the first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RuleViolation {
    /// Shorter than the minimum playable length
    TooShort,
    /// Does not contain the required center letter
    MissingRequiredLetter(char),
    /// Nine-letter mode: not an exact anagram of the full grid
    RequiresAllNineLetters,
    /// Needs more copies of some letter than the grid holds
    LettersNotAvailable,
    /// Already confirmed for the active date
    AlreadyFound,
    /// Not in the dictionary
    NotInDictionary,
}

impl RuleViolation {
    /// The translation key for this rule, with its parameters attached
    #[must_use]
    pub fn message_key(&self) -> MessageKey {
        match self {
            Self::TooShort => {
                MessageKey::new("validation.too_short").with_param("min", MIN_WORD_LENGTH)
            }
            Self::MissingRequiredLetter(letter) => {
                MessageKey::new("validation.missing_required_letter").with_param("letter", letter)
            }
            Self::RequiresAllNineLetters => MessageKey::new("validation.requires_all_nine_letters"),
            Self::LettersNotAvailable => MessageKey::new("validation.letters_not_available"),
            Self::AlreadyFound => MessageKey::new("validation.already_found"),
            Self::NotInDictionary => MessageKey::new("validation.not_in_dictionary"),
        }
    }
}

/// Outcome of validating one candidate word
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Validation {
    violations: Vec<RuleViolation>,
}

impl Validation {
    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    #[must_use]
    pub fn violations(&self) -> &[RuleViolation] {
        &self.violations
    }

    #[must_use]
    pub fn first_violation(&self) -> Option<&RuleViolation> {
        self.violations.first()
    }
}

/// The full set of dictionary words playable on a grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PossibleWords {
    words: Vec<Word>,
}

impl PossibleWords {
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        let normalized = Alphabet::normalize(word);
        self.words.iter().any(|w| w.text() == normalized)
    }

    /// Partition the words by length for display
    #[must_use]
    pub fn grouped_by_length(&self) -> BTreeMap<usize, Vec<&Word>> {
        let mut groups: BTreeMap<usize, Vec<&Word>> = BTreeMap::new();
        for word in &self.words {
            groups.entry(word.len()).or_default().push(word);
        }
        groups
    }
}

/// Validates candidate words and enumerates possible words for one grid
///
/// Holds the grid's letters and required letter; the letters may be a player
/// shuffle of the canonical puzzle since only the multiset matters.
pub struct WordMatcher<'a> {
    dictionary: &'a Dictionary,
    letters: [char; GRID_SIZE],
    center: char,
}

impl<'a> WordMatcher<'a> {
    #[must_use]
    pub const fn new(dictionary: &'a Dictionary, letters: [char; GRID_SIZE], center: char) -> Self {
        Self {
            dictionary,
            letters,
            center,
        }
    }

    #[must_use]
    pub fn for_puzzle(dictionary: &'a Dictionary, puzzle: &Puzzle) -> Self {
        Self::new(dictionary, *puzzle.letters(), puzzle.center_letter())
    }

    /// The required letter of this grid
    #[inline]
    #[must_use]
    pub const fn center_letter(&self) -> char {
        self.center
    }

    /// Validate a single candidate against every rule
    ///
    /// `found` holds the words already confirmed for the active date, in
    /// normalized (uppercase) form.
    #[must_use]
    pub fn validate(
        &self,
        word: &str,
        nine_letter_only: bool,
        found: &FxHashSet<String>,
    ) -> Validation {
        let normalized = Alphabet::normalize(word);
        let chars: Vec<char> = normalized.chars().collect();
        let mut violations = Vec::new();

        if !chars.contains(&self.center) {
            violations.push(RuleViolation::MissingRequiredLetter(self.center));
        }

        if chars.len() < MIN_WORD_LENGTH {
            violations.push(RuleViolation::TooShort);
        }

        if nine_letter_only {
            if !self.is_grid_anagram(&chars) {
                violations.push(RuleViolation::RequiresAllNineLetters);
            }
        } else if !Self::fits_letter_counts(&chars, &self.letter_counts()) {
            violations.push(RuleViolation::LettersNotAvailable);
        }

        if found.contains(&normalized) {
            violations.push(RuleViolation::AlreadyFound);
        }

        if !self.dictionary.contains(&normalized) {
            violations.push(RuleViolation::NotInDictionary);
        }

        Validation { violations }
    }

    /// Enumerate every dictionary word playable on this grid
    ///
    /// One pass over the dictionary; the grid's letter-count table is built
    /// once, not per candidate.
    #[must_use]
    pub fn possible_words(&self, nine_letter_only: bool) -> PossibleWords {
        let grid_counts = self.letter_counts();

        let words = self
            .dictionary
            .words()
            .iter()
            .filter(|word| {
                if word.len() < MIN_WORD_LENGTH || !word.contains_letter(self.center) {
                    return false;
                }
                if nine_letter_only {
                    self.is_grid_anagram(word.chars())
                } else {
                    Self::fits_letter_counts(word.chars(), &grid_counts)
                }
            })
            .cloned()
            .collect();

        PossibleWords { words }
    }

    /// Letter-count table of the grid
    fn letter_counts(&self) -> FxHashMap<char, u8> {
        let mut counts = FxHashMap::default();
        for &c in &self.letters {
            *counts.entry(c).or_insert(0u8) += 1;
        }
        counts
    }

    /// Multiset-subset test: every letter of the word available in the grid
    fn fits_letter_counts(chars: &[char], grid_counts: &FxHashMap<char, u8>) -> bool {
        if chars.len() > GRID_SIZE {
            return false;
        }
        let mut used: FxHashMap<char, u8> = FxHashMap::default();
        for &c in chars {
            let needed = used.entry(c).or_insert(0);
            *needed += 1;
            if grid_counts.get(&c).copied().unwrap_or(0) < *needed {
                return false;
            }
        }
        true
    }

    /// Exact anagram test against the whole grid
    fn is_grid_anagram(&self, chars: &[char]) -> bool {
        if chars.len() != GRID_SIZE {
            return false;
        }
        let mut word_sorted: Vec<char> = chars.to_vec();
        word_sorted.sort_unstable();
        let mut grid_sorted = self.letters;
        grid_sorted.sort_unstable();
        word_sorted == grid_sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        Dictionary::from_text(
            "GÅRDSTRÄD\nGÅRD\nTRÄD\nRÅD\nDRAG\nGRÅDASK",
            Alphabet::swedish(),
        )
        .unwrap()
    }

    /// Grid holding the letters of GÅRDSTRÄD with Å required.
    fn matcher(dict: &Dictionary) -> WordMatcher<'_> {
        WordMatcher::new(dict, ['G', 'R', 'D', 'S', 'Å', 'T', 'R', 'Ä', 'D'], 'Å')
    }

    fn no_found() -> FxHashSet<String> {
        FxHashSet::default()
    }

    #[test]
    fn possible_words_require_center_letter() {
        let dict = dictionary();
        let possible = matcher(&dict).possible_words(false);

        assert!(possible.contains("GÅRD"));
        assert!(possible.contains("RÅD"));
        // TRÄD is a letter-subset of the grid but lacks Å.
        assert!(!possible.contains("TRÄD"));
    }

    #[test]
    fn possible_words_respect_letter_multiset() {
        // Grid has one A; DRAG fits, but a word needing two A's would not.
        let dict = Dictionary::from_text("DRAG\nAGAR", Alphabet::swedish()).unwrap();
        let m = WordMatcher::new(&dict, ['D', 'R', 'A', 'G', 'S', 'T', 'K', 'L', 'M'], 'A');
        let possible = m.possible_words(false);

        assert!(possible.contains("DRAG"));
        assert!(!possible.contains("AGAR"));
    }

    #[test]
    fn nine_letter_mode_keeps_only_full_grid_anagrams() {
        let dict = dictionary();
        let m = matcher(&dict);

        let filtered = m.possible_words(true);
        assert!(filtered.contains("GÅRDSTRÄD"));
        assert!(!filtered.contains("GÅRD"));
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn mode_toggle_never_alters_the_unfiltered_set() {
        let dict = dictionary();
        let m = matcher(&dict);

        let before = m.possible_words(false);
        let _ = m.possible_words(true);
        let after = m.possible_words(false);
        assert_eq!(before, after);
    }

    #[test]
    fn validate_accepts_a_playable_word() {
        let dict = dictionary();
        let validation = matcher(&dict).validate("gård", false, &no_found());
        assert!(validation.is_valid());
        assert!(validation.first_violation().is_none());
    }

    #[test]
    fn validate_accumulates_every_violation() {
        let dict = dictionary();
        // Two letters, no Å, not a dictionary word.
        let validation = matcher(&dict).validate("XY", false, &no_found());

        assert!(!validation.is_valid());
        assert_eq!(
            validation.violations(),
            &[
                RuleViolation::MissingRequiredLetter('Å'),
                RuleViolation::TooShort,
                RuleViolation::LettersNotAvailable,
                RuleViolation::NotInDictionary,
            ]
        );
    }

    #[test]
    fn validate_rejects_overdrawn_letters() {
        // Grid has a single A; AGAR needs two.
        let dict = Dictionary::from_text("DRAG\nAGAR", Alphabet::swedish()).unwrap();
        let m = WordMatcher::new(&dict, ['D', 'R', 'A', 'G', 'S', 'T', 'K', 'L', 'M'], 'A');

        let validation = m.validate("AGAR", false, &no_found());
        assert_eq!(
            validation.violations(),
            &[RuleViolation::LettersNotAvailable]
        );
        assert!(m.validate("DRAG", false, &no_found()).is_valid());
    }

    #[test]
    fn validate_rejects_already_found() {
        let dict = dictionary();
        let mut found = no_found();
        found.insert("GÅRD".to_string());

        let validation = matcher(&dict).validate("gård", false, &found);
        assert_eq!(validation.violations(), &[RuleViolation::AlreadyFound]);
    }

    #[test]
    fn validate_nine_letter_mode_rejects_partial_words() {
        let dict = dictionary();
        let validation = matcher(&dict).validate("GÅRD", true, &no_found());
        assert_eq!(
            validation.violations(),
            &[RuleViolation::RequiresAllNineLetters]
        );
    }

    #[test]
    fn validate_nine_letter_mode_rejects_nine_letter_non_anagrams() {
        // GRÅDASK plus two extra letters is nine long but not the grid's
        // multiset.
        let dict = Dictionary::from_text("GRÅDASKAR", Alphabet::swedish()).unwrap();
        let m = matcher(&dict);
        let validation = m.validate("GRÅDASKAR", true, &no_found());
        assert!(
            validation
                .violations()
                .contains(&RuleViolation::RequiresAllNineLetters)
        );
    }

    #[test]
    fn every_valid_word_appears_in_possible_words() {
        let dict = dictionary();
        let m = matcher(&dict);
        let possible = m.possible_words(false);

        for word in dict.words() {
            let validation = m.validate(word.text(), false, &no_found());
            if validation.is_valid() {
                assert!(possible.contains(word.text()), "{word} missing");
            }
        }
    }

    #[test]
    fn grouping_partitions_by_length() {
        let dict = dictionary();
        let possible = matcher(&dict).possible_words(false);
        let groups = possible.grouped_by_length();

        let total: usize = groups.values().map(Vec::len).sum();
        assert_eq!(total, possible.len());
        for (len, words) in &groups {
            assert!(words.iter().all(|w| w.len() == *len));
        }
    }

    #[test]
    fn message_keys_carry_parameters() {
        let key = RuleViolation::MissingRequiredLetter('Å').message_key();
        assert_eq!(key.key(), "validation.missing_required_letter");
        assert_eq!(key.params(), &[("letter", "Å".to_string())]);
    }
}

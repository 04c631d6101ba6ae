//! Puzzle word representation
//!
//! A Word stores an uppercase-normalized word together with its character
//! sequence, so that multi-byte letters (Å, Ä, Ö) index correctly.

use crate::core::Alphabet;
use rustc_hash::FxHashMap;
use std::fmt;

/// An uppercase word drawn from the game alphabet
///
/// Equality and hashing use the normalized text, so `Word` is case-insensitive
/// at construction: "gård" and "GÅRD" produce equal values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: Vec<char>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    InvalidCharacter(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::InvalidCharacter(c) => {
                write!(f, "Word contains a character outside the alphabet: {c}")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string, normalizing to uppercase
    ///
    /// # Errors
    /// Returns `WordError` if the trimmed input is empty or contains a
    /// character outside the given alphabet.
    pub fn new(text: impl AsRef<str>, alphabet: &Alphabet) -> Result<Self, WordError> {
        let text = Alphabet::normalize(text.as_ref());

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if let Some(bad) = text.chars().find(|&c| !alphabet.contains(c)) {
            return Err(WordError::InvalidCharacter(bad));
        }

        let chars = text.chars().collect();
        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's characters
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of letters (characters, not bytes)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Check if the word contains a specific uppercase letter
    #[inline]
    #[must_use]
    pub fn contains_letter(&self, letter: char) -> bool {
        self.chars.contains(&letter)
    }

    /// Get the count of each letter in the word
    ///
    /// Used for the multiset-subset test against a grid's letter counts.
    #[must_use]
    pub fn letter_counts(&self) -> FxHashMap<char, u8> {
        let mut counts = FxHashMap::default();
        for &c in &self.chars {
            *counts.entry(c).or_insert(0u8) += 1;
        }
        counts
    }

    /// The word's letters sorted into a canonical string
    ///
    /// Two words are anagrams exactly when their signatures are equal.
    #[must_use]
    pub fn sorted_signature(&self) -> String {
        let mut sorted = self.chars.clone();
        sorted.sort_unstable();
        sorted.into_iter().collect()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

// Serialized as its plain text, not as a struct.
impl serde::Serialize for Word {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alphabet() -> Alphabet {
        Alphabet::swedish()
    }

    #[test]
    fn word_creation_normalizes_case() {
        let word = Word::new("gård", &alphabet()).unwrap();
        assert_eq!(word.text(), "GÅRD");

        let word2 = Word::new("GÅRD", &alphabet()).unwrap();
        assert_eq!(word, word2);
    }

    #[test]
    fn word_creation_rejects_empty() {
        assert_eq!(Word::new("", &alphabet()), Err(WordError::Empty));
        assert_eq!(Word::new("   ", &alphabet()), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_rejects_foreign_characters() {
        assert_eq!(
            Word::new("CAFÉ", &alphabet()),
            Err(WordError::InvalidCharacter('É'))
        );
        assert!(Word::new("RÅD3", &alphabet()).is_err());
        assert!(Word::new("TWO WORDS", &alphabet()).is_err());
    }

    #[test]
    fn len_counts_characters_not_bytes() {
        let word = Word::new("TRÄDGÅRD", &alphabet()).unwrap();
        assert_eq!(word.len(), 8);
        assert!(word.text().len() > 8); // Å and Ä are multi-byte
    }

    #[test]
    fn contains_letter() {
        let word = Word::new("GÅRD", &alphabet()).unwrap();
        assert!(word.contains_letter('Å'));
        assert!(word.contains_letter('G'));
        assert!(!word.contains_letter('X'));
    }

    #[test]
    fn letter_counts_tracks_duplicates() {
        let word = Word::new("ABBA", &alphabet()).unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts.get(&'A'), Some(&2));
        assert_eq!(counts.get(&'B'), Some(&2));
        assert_eq!(counts.get(&'C'), None);
    }

    #[test]
    fn sorted_signature_detects_anagrams() {
        let a = Word::new("GRÅDA", &alphabet()).unwrap();
        let b = Word::new("DAGRÅ", &alphabet()).unwrap();
        let c = Word::new("GÅRD", &alphabet()).unwrap();
        assert_eq!(a.sorted_signature(), b.sorted_signature());
        assert_ne!(a.sorted_signature(), c.sorted_signature());
    }
}

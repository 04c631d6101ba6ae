//! Dictionary loading and membership
//!
//! The dictionary is loaded once at startup from a newline-delimited word
//! list and is immutable afterwards. Lookup is case-insensitive: words are
//! uppercased at insertion and at query time.

use crate::core::{Alphabet, Word};
use rustc_hash::FxHashSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Minimum playable word length; shorter entries are dropped at load time.
pub const MIN_WORD_LENGTH: usize = 3;

/// Error loading the dictionary
///
/// This is the single fatal error of the crate: without a dictionary no core
/// operation can proceed.
#[derive(Debug)]
pub enum DictionaryError {
    Io(io::Error),
    Empty,
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to read word list: {e}"),
            Self::Empty => write!(f, "Word list contained no usable words"),
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Empty => None,
        }
    }
}

impl From<io::Error> for DictionaryError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Immutable set of playable words
#[derive(Debug, Clone)]
pub struct Dictionary {
    alphabet: Alphabet,
    words: Vec<Word>,
    index: FxHashSet<String>,
}

impl Dictionary {
    /// Load a dictionary from newline-delimited text
    ///
    /// Blank lines are ignored. Entries are uppercased; entries shorter than
    /// [`MIN_WORD_LENGTH`] or containing characters outside the alphabet are
    /// skipped rather than rejected, so a noisy word list still loads.
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if no entry survives filtering.
    pub fn from_text(text: &str, alphabet: Alphabet) -> Result<Self, DictionaryError> {
        let mut index = FxHashSet::default();
        let mut words = Vec::new();

        for line in text.lines() {
            let Ok(word) = Word::new(line, &alphabet) else {
                continue;
            };
            if word.len() < MIN_WORD_LENGTH {
                continue;
            }
            if index.insert(word.text().to_string()) {
                words.push(word);
            }
        }

        if words.is_empty() {
            return Err(DictionaryError::Empty);
        }

        Ok(Self {
            alphabet,
            words,
            index,
        })
    }

    /// Load a dictionary from a word-list file
    ///
    /// # Errors
    /// Returns `DictionaryError::Io` if the file cannot be read, or
    /// `DictionaryError::Empty` if it yields no usable words.
    pub fn load_from_file<P: AsRef<Path>>(
        path: P,
        alphabet: Alphabet,
    ) -> Result<Self, DictionaryError> {
        let content = fs::read_to_string(path)?;
        Self::from_text(&content, alphabet)
    }

    /// Case-insensitive membership test
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(&Alphabet::normalize(word))
    }

    /// All words, in load order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words in the dictionary
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

    /// The alphabet this dictionary was loaded against
    #[inline]
    #[must_use]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }
}

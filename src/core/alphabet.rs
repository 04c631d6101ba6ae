//! Game alphabet
//!
//! The letter set a puzzle draws from: ASCII A-Z plus locale-specific extra
//! letters. The default locale is Swedish (Å, Ä, Ö).

/// The set of letters valid in puzzle words
///
/// Membership is checked against uppercase letters; callers normalize input
/// with [`Alphabet::normalize`] before testing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    extra: Vec<char>,
}

impl Alphabet {
    /// The Swedish alphabet: A-Z plus Å, Ä, Ö
    #[must_use]
    pub fn swedish() -> Self {
        Self {
            extra: vec!['Å', 'Ä', 'Ö'],
        }
    }

    /// Build an alphabet with custom extra letters beyond A-Z
    ///
    /// Extra letters are normalized to uppercase.
    #[must_use]
    pub fn with_extra_letters(extra: &[char]) -> Self {
        Self {
            extra: extra.iter().flat_map(|c| c.to_uppercase()).collect(),
        }
    }

    /// Check whether an uppercase character belongs to the alphabet
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        c.is_ascii_uppercase() || self.extra.contains(&c)
    }

    /// Uppercase a string for alphabet membership tests and dictionary lookup
    #[must_use]
    pub fn normalize(text: &str) -> String {
        text.trim().chars().flat_map(char::to_uppercase).collect()
    }

    /// Check whether every character of an already-normalized string is valid
    #[must_use]
    pub fn is_clean(&self, normalized: &str) -> bool {
        !normalized.is_empty() && normalized.chars().all(|c| self.contains(c))
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::swedish()
    }
}

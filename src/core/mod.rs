//! Core domain types for the nine-letter puzzle
//!
//! This module contains the fundamental domain types with zero external
//! dependencies beyond hashing. All types here are pure and have clear
//! invariants.

mod alphabet;
mod word;

pub use alphabet::Alphabet;
pub use word::{Word, WordError};

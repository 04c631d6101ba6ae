//! Niogram
//!
//! Engine for a daily nine-letter word puzzle: each calendar date maps
//! deterministically to a grid of nine letters drawn from a dictionary word,
//! with a required letter in the center. Players form dictionary words from
//! the grid (each position used at most once, the center letter mandatory)
//! while progress, streaks, and achievements persist in a key-value store.
//!
//! # Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use niogram::core::Alphabet;
//! use niogram::dictionary::Dictionary;
//! use niogram::game::Game;
//! use niogram::storage::MemoryStore;
//!
//! let dictionary =
//!     Dictionary::from_text("GÅRDSTRÄD\nGÅRD\nTRÄD\nRÅD", Alphabet::swedish()).unwrap();
//! let date = NaiveDate::from_ymd_opt(2026, 8, 28).unwrap();
//!
//! let mut game = Game::new(dictionary, MemoryStore::new(), date);
//! println!("today's letters: {:?}", game.letters());
//!
//! let result = game.submit_word("gård");
//! println!("accepted: {}", result.accepted);
//! ```

// Core domain types
pub mod core;

// Word list loading and membership
pub mod dictionary;

// Deterministic daily puzzle generation
pub mod puzzle;

// Word validation and possible-word enumeration
pub mod matcher;

// Persistence over a key-value store
pub mod storage;

// Achievement definitions and evaluation
pub mod achievements;

// Per-date session state
pub mod session;

// The facade a front end drives
pub mod game;

// Translation keys and the message-provider seam
pub mod messages;

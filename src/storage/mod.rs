//! Persistence primitives
//!
//! The game persists through a string-keyed, string-valued store with
//! synchronous operations — the shape of a browser's local storage. Writes
//! may fail (finite capacity); reads never fail, they return absence.

mod progress;

pub use progress::{FoundWordsRecord, ProgressStore};

use rustc_hash::FxHashMap;
use std::fmt;

/// Error writing to the persistent store
///
/// Callers log and continue: the game stays playable without persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageError {
    message: String,
}

impl StorageError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Storage write failed: {}", self.message)
    }
}

impl std::error::Error for StorageError {}

/// Synchronous string key-value store
///
/// The single shared mutable resource of the core. Access is single-threaded;
/// unrelated concerns stay apart through distinct key prefixes.
pub trait KeyValueStore {
    /// Read a value, `None` when absent
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value
    ///
    /// # Errors
    /// Returns `StorageError` when the store cannot take the write, e.g. it
    /// is full.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a key; absent keys are fine
    fn remove(&mut self, key: &str);

    /// All current keys, in no particular order
    fn keys(&self) -> Vec<String>;
}

/// In-memory store
///
/// The reference implementation, also used throughout the tests. An optional
/// capacity cap exercises the write-failure path.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: FxHashMap<String, String>,
    capacity: Option<usize>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that refuses writes beyond `capacity` entries
    #[must_use]
    pub fn with_capacity_limit(capacity: usize) -> Self {
        Self {
            entries: FxHashMap::default(),
            capacity: Some(capacity),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(cap) = self.capacity {
            if self.entries.len() >= cap && !self.entries.contains_key(key) {
                return Err(StorageError::new(format!("capacity of {cap} reached")));
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }

    fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("a"), None);

        store.set("a", "1").unwrap();
        assert_eq!(store.get("a"), Some("1".to_string()));

        store.remove("a");
        assert_eq!(store.get("a"), None);
        store.remove("a"); // absent is fine
    }

    #[test]
    fn keys_lists_all_entries() {
        let mut store = MemoryStore::new();
        store.set("x:1", "a").unwrap();
        store.set("y:2", "b").unwrap();

        let mut keys = store.keys();
        keys.sort();
        assert_eq!(keys, vec!["x:1".to_string(), "y:2".to_string()]);
    }

    #[test]
    fn capacity_limit_rejects_new_keys_but_allows_updates() {
        let mut store = MemoryStore::with_capacity_limit(1);
        store.set("a", "1").unwrap();

        assert!(store.set("b", "2").is_err());
        // Overwriting an existing key is not growth.
        assert!(store.set("a", "3").is_ok());
        assert_eq!(store.get("a"), Some("3".to_string()));
    }
}

//! Per-date progress repository
//!
//! Wraps the raw key-value store with date-scoped records: found words,
//! shuffled grid arrangements, play sessions, and achievement unlocks. Every
//! concern has its own key prefix so date switches and prefix scans never
//! cross-contaminate.
//!
//! Reads degrade: corrupt or missing data yields an empty result and a log
//! line, never an error. Write failures are logged and swallowed — the game
//! stays playable without persistence.

use super::KeyValueStore;
use crate::puzzle::{GRID_SIZE, Puzzle};
use chrono::{NaiveDate, NaiveDateTime};
use log::warn;
use rustc_hash::FxHashSet;
use serde::Serialize;

const FOUND_WORDS_PREFIX: &str = "found-words:";
const SHUFFLED_GRID_PREFIX: &str = "shuffled-grid:";
const PLAY_SESSION_PREFIX: &str = "play-session:";
const DATE_ACHIEVEMENT_PREFIX: &str = "achievement:";
const GLOBAL_ACHIEVEMENT_PREFIX: &str = "global-achievement:";
const MIGRATION_KEY: &str = "migration:achievements-v1";

/// The found words stored for one date
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoundWordsRecord {
    pub date: NaiveDate,
    pub words: Vec<String>,
}

/// Date-scoped progress persistence over a [`KeyValueStore`]
#[derive(Debug)]
pub struct ProgressStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> ProgressStore<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Give the wrapped store back
    #[must_use]
    pub fn into_inner(self) -> S {
        self.store
    }

    fn found_words_key(date: NaiveDate) -> String {
        format!("{FOUND_WORDS_PREFIX}{date}")
    }

    fn shuffled_grid_key(date: NaiveDate) -> String {
        format!("{SHUFFLED_GRID_PREFIX}{date}")
    }

    fn play_session_key(date: NaiveDate) -> String {
        format!("{PLAY_SESSION_PREFIX}{date}")
    }

    fn date_achievement_key(id: &str, date: NaiveDate) -> String {
        format!("{DATE_ACHIEVEMENT_PREFIX}{id}:{date}")
    }

    fn global_achievement_key(id: &str) -> String {
        format!("{GLOBAL_ACHIEVEMENT_PREFIX}{id}")
    }

    fn write(&mut self, key: &str, value: &str) {
        if let Err(e) = self.store.set(key, value) {
            warn!("ignoring failed write of {key}: {e}");
        }
    }

    /// Found words for a date; empty on absence or corrupt data
    pub fn load_found_words(&self, date: NaiveDate) -> FxHashSet<String> {
        let Some(raw) = self.store.get(&Self::found_words_key(date)) else {
            return FxHashSet::default();
        };
        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(words) => words.into_iter().collect(),
            Err(e) => {
                warn!("discarding corrupt found-words record for {date}: {e}");
                FxHashSet::default()
            }
        }
    }

    /// Persist the found words for a date
    pub fn save_found_words(&mut self, date: NaiveDate, words: &FxHashSet<String>) {
        let mut sorted: Vec<&String> = words.iter().collect();
        sorted.sort();
        match serde_json::to_string(&sorted) {
            Ok(json) => self.write(&Self::found_words_key(date), &json),
            Err(e) => warn!("could not encode found words for {date}: {e}"),
        }
    }

    /// Raw stored shuffled grid for a date, if present and well-formed
    pub fn load_shuffled_grid(&self, date: NaiveDate) -> Option<[char; GRID_SIZE]> {
        let raw = self.store.get(&Self::shuffled_grid_key(date))?;
        match serde_json::from_str::<Vec<char>>(&raw) {
            Ok(letters) => letters.try_into().ok(),
            Err(e) => {
                warn!("discarding corrupt shuffled grid for {date}: {e}");
                None
            }
        }
    }

    /// Stored shuffled grid for the puzzle's date, discarded when stale
    ///
    /// A stored arrangement is only honored while it holds the same letter
    /// multiset as the canonical puzzle; anything else is left over from an
    /// older grid and is silently cleared.
    pub fn load_fresh_shuffled_grid(&mut self, puzzle: &Puzzle) -> Option<[char; GRID_SIZE]> {
        let letters = self.load_shuffled_grid(puzzle.date())?;

        let mut sorted = letters;
        sorted.sort_unstable();
        if sorted.iter().collect::<String>() == puzzle.sorted_signature() {
            return Some(letters);
        }

        warn!("clearing stale shuffled grid for {}", puzzle.date());
        self.clear_shuffled_grid(puzzle.date());
        None
    }

    /// Persist a player-shuffled arrangement for a date
    pub fn save_shuffled_grid(&mut self, date: NaiveDate, letters: &[char; GRID_SIZE]) {
        match serde_json::to_string(&letters[..]) {
            Ok(json) => self.write(&Self::shuffled_grid_key(date), &json),
            Err(e) => warn!("could not encode shuffled grid for {date}: {e}"),
        }
    }

    /// Drop the stored arrangement for a date
    pub fn clear_shuffled_grid(&mut self, date: NaiveDate) {
        self.store.remove(&Self::shuffled_grid_key(date));
    }

    /// Record that the player played on a (real) date; first write wins
    pub fn record_play_session(&mut self, date: NaiveDate, at: NaiveDateTime) {
        let key = Self::play_session_key(date);
        if self.store.get(&key).is_none() {
            self.write(&key, &at.to_string());
        }
    }

    /// Whether a play session is recorded for a date
    #[must_use]
    pub fn has_play_session(&self, date: NaiveDate) -> bool {
        self.store.get(&Self::play_session_key(date)).is_some()
    }

    /// All dates with a recorded play session, ascending
    #[must_use]
    pub fn all_play_dates(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = self
            .store
            .keys()
            .iter()
            .filter_map(|key| key.strip_prefix(PLAY_SESSION_PREFIX))
            .filter_map(|raw| raw.parse().ok())
            .collect();
        dates.sort_unstable();
        dates
    }

    /// Every stored found-words record, ascending by date
    #[must_use]
    pub fn all_found_word_records(&self) -> Vec<FoundWordsRecord> {
        let mut dates: Vec<NaiveDate> = self
            .store
            .keys()
            .iter()
            .filter_map(|key| key.strip_prefix(FOUND_WORDS_PREFIX))
            .filter_map(|raw| raw.parse().ok())
            .collect();
        dates.sort_unstable();

        dates
            .into_iter()
            .map(|date| {
                let mut words: Vec<String> = self.load_found_words(date).into_iter().collect();
                words.sort();
                FoundWordsRecord { date, words }
            })
            .collect()
    }

    /// Whether a per-date achievement is unlocked for a date
    #[must_use]
    pub fn date_achievement_unlocked(&self, id: &str, date: NaiveDate) -> bool {
        self.store
            .get(&Self::date_achievement_key(id, date))
            .is_some()
    }

    /// Unlock a per-date achievement; keeps the earliest timestamp
    pub fn unlock_date_achievement(&mut self, id: &str, date: NaiveDate, at: NaiveDateTime) {
        let key = Self::date_achievement_key(id, date);
        if self.store.get(&key).is_none() {
            self.write(&key, &at.to_string());
        }
    }

    /// How many dates have a given per-date achievement unlocked
    #[must_use]
    pub fn date_achievement_count(&self, id: &str) -> usize {
        let prefix = format!("{DATE_ACHIEVEMENT_PREFIX}{id}:");
        self.store
            .keys()
            .iter()
            .filter(|key| key.starts_with(&prefix))
            .count()
    }

    /// Whether a global achievement has ever been unlocked
    #[must_use]
    pub fn global_achievement_unlocked(&self, id: &str) -> bool {
        self.store.get(&Self::global_achievement_key(id)).is_some()
    }

    /// Unlock a global achievement, one-shot
    pub fn unlock_global_achievement(&mut self, id: &str, at: NaiveDateTime) {
        let key = Self::global_achievement_key(id);
        if self.store.get(&key).is_none() {
            self.write(&key, &at.to_string());
        }
    }

    /// Whether the historical achievement migration already ran
    #[must_use]
    pub fn migration_done(&self) -> bool {
        self.store.get(MIGRATION_KEY).is_some()
    }

    /// Mark the historical achievement migration as done
    pub fn mark_migration_done(&mut self, at: NaiveDateTime) {
        self.write(MIGRATION_KEY, &at.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn noon(d: NaiveDate) -> NaiveDateTime {
        d.and_hms_opt(12, 0, 0).unwrap()
    }

    fn words(items: &[&str]) -> FxHashSet<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn found_words_roundtrip_per_date() {
        let mut progress = ProgressStore::new(MemoryStore::new());
        let monday = date(2026, 8, 24);
        let tuesday = date(2026, 8, 25);

        progress.save_found_words(monday, &words(&["GÅRD", "RÅD"]));
        progress.save_found_words(tuesday, &words(&["TRÄD"]));

        assert_eq!(progress.load_found_words(monday), words(&["GÅRD", "RÅD"]));
        assert_eq!(progress.load_found_words(tuesday), words(&["TRÄD"]));
        assert!(progress.load_found_words(date(2026, 8, 26)).is_empty());
    }

    #[test]
    fn corrupt_found_words_degrade_to_empty() {
        let mut store = MemoryStore::new();
        store.set("found-words:2026-08-24", "not json").unwrap();

        let progress = ProgressStore::new(store);
        assert!(progress.load_found_words(date(2026, 8, 24)).is_empty());
    }

    #[test]
    fn write_failure_is_swallowed() {
        let mut progress = ProgressStore::new(MemoryStore::with_capacity_limit(0));
        // The write fails, the call does not.
        progress.save_found_words(date(2026, 8, 24), &words(&["GÅRD"]));
        assert!(progress.load_found_words(date(2026, 8, 24)).is_empty());
    }

    #[test]
    fn shuffled_grid_roundtrip_and_clear() {
        let mut progress = ProgressStore::new(MemoryStore::new());
        let d = date(2026, 8, 24);
        let grid = ['G', 'R', 'D', 'S', 'Å', 'T', 'R', 'Ä', 'D'];

        progress.save_shuffled_grid(d, &grid);
        assert_eq!(progress.load_shuffled_grid(d), Some(grid));

        progress.clear_shuffled_grid(d);
        assert_eq!(progress.load_shuffled_grid(d), None);
    }

    #[test]
    fn stale_shuffled_grid_is_discarded() {
        let mut progress = ProgressStore::new(MemoryStore::new());
        let d = date(2026, 8, 24);
        // Arrangement from some older puzzle with different letters.
        progress.save_shuffled_grid(d, &['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I']);

        let puzzle = Puzzle::new(d, ['G', 'R', 'D', 'S', 'Å', 'T', 'R', 'Ä', 'D']);
        assert_eq!(progress.load_fresh_shuffled_grid(&puzzle), None);
        // The stale record is gone for good.
        assert_eq!(progress.load_shuffled_grid(d), None);
    }

    #[test]
    fn fresh_shuffled_grid_is_honored() {
        let mut progress = ProgressStore::new(MemoryStore::new());
        let d = date(2026, 8, 24);
        let canonical = ['G', 'R', 'D', 'S', 'Å', 'T', 'R', 'Ä', 'D'];
        let rearranged = ['D', 'Ä', 'R', 'T', 'Å', 'S', 'D', 'R', 'G'];
        progress.save_shuffled_grid(d, &rearranged);

        let puzzle = Puzzle::new(d, canonical);
        assert_eq!(progress.load_fresh_shuffled_grid(&puzzle), Some(rearranged));
    }

    #[test]
    fn play_sessions_first_write_wins() {
        let mut progress = ProgressStore::new(MemoryStore::new());
        let d = date(2026, 8, 24);

        progress.record_play_session(d, noon(d));
        progress.record_play_session(d, d.and_hms_opt(23, 0, 0).unwrap());

        assert!(progress.has_play_session(d));
        assert_eq!(progress.all_play_dates(), vec![d]);
    }

    #[test]
    fn all_play_dates_sorted_across_prefixes() {
        let mut progress = ProgressStore::new(MemoryStore::new());
        let a = date(2026, 8, 25);
        let b = date(2026, 8, 23);
        progress.record_play_session(a, noon(a));
        progress.record_play_session(b, noon(b));
        // Unrelated prefixes must not leak into the scan.
        progress.save_found_words(date(2026, 8, 24), &words(&["GÅRD"]));

        assert_eq!(progress.all_play_dates(), vec![b, a]);
    }

    #[test]
    fn found_word_records_query() {
        let mut progress = ProgressStore::new(MemoryStore::new());
        let a = date(2026, 8, 23);
        let b = date(2026, 8, 25);
        progress.save_found_words(b, &words(&["TRÄD"]));
        progress.save_found_words(a, &words(&["RÅD", "GÅRD"]));

        let records = progress.all_found_word_records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].date, a);
        assert_eq!(records[0].words, vec!["GÅRD", "RÅD"]);
        assert_eq!(records[1].date, b);
    }

    #[test]
    fn date_achievements_keyed_by_date() {
        let mut progress = ProgressStore::new(MemoryStore::new());
        let a = date(2026, 8, 24);
        let b = date(2026, 8, 25);

        progress.unlock_date_achievement("nine_letter_word", a, noon(a));
        assert!(progress.date_achievement_unlocked("nine_letter_word", a));
        assert!(!progress.date_achievement_unlocked("nine_letter_word", b));

        progress.unlock_date_achievement("nine_letter_word", b, noon(b));
        assert_eq!(progress.date_achievement_count("nine_letter_word"), 2);
        assert_eq!(progress.date_achievement_count("all_words"), 0);
    }

    #[test]
    fn global_achievements_are_one_shot() {
        let mut progress = ProgressStore::new(MemoryStore::new());
        let d = date(2026, 8, 24);

        assert!(!progress.global_achievement_unlocked("night_owl"));
        progress.unlock_global_achievement("night_owl", noon(d));
        progress.unlock_global_achievement("night_owl", noon(date(2026, 8, 25)));
        assert!(progress.global_achievement_unlocked("night_owl"));
    }
}

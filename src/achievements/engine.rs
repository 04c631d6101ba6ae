//! Achievement evaluation
//!
//! Derives unlock state from the progress repository. Per-date achievements
//! key on (id, puzzle date); global ones key on id alone and unlock exactly
//! once. "All words" always measures against the unfiltered possible-word
//! count, so a display filter can never unlock or block it.

use super::definitions::{AchievementDef, AchievementScope, DEFINITIONS, Metric, definition};
use crate::dictionary::Dictionary;
use crate::matcher::WordMatcher;
use crate::puzzle::{GRID_SIZE, generate};
use crate::storage::{KeyValueStore, ProgressStore};
use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;

/// Hour (exclusive) at which the night-owl window closes
const NIGHT_END_HOUR: u32 = 4;

const NINE_LETTER_WORD: &str = "nine_letter_word";
const ALL_WORDS: &str = "all_words";
const SEVEN_DAY_STREAK: &str = "seven_day_streak";
const NIGHT_OWL: &str = "night_owl";

/// A word was accepted for the active puzzle date
#[derive(Debug, Clone)]
pub struct WordAccepted<'a> {
    /// The accepted word, uppercase
    pub word: &'a str,
    /// The puzzle date the word belongs to
    pub puzzle_date: NaiveDate,
    /// Found words for the puzzle date, including this one
    pub found_count: usize,
    /// Unfiltered possible-word count for the puzzle date
    pub possible_count: usize,
    /// Real wall-clock time of the submission
    pub now: NaiveDateTime,
}

/// Progress toward a progressive achievement, clamped to the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub current: u32,
    pub target: u32,
}

/// An achievement with its current unlock state
#[derive(Debug, Clone, Serialize)]
pub struct AchievementStatus {
    pub definition: AchievementDef,
    pub unlocked: bool,
    pub progress: Option<Progress>,
}

/// Evaluate all achievements after an accepted word
///
/// Records the play session for the real date, then checks night owl,
/// streak, the per-date achievements, and the cumulative counters. Returns
/// the definitions that just unlocked, in evaluation order.
pub fn evaluate<S: KeyValueStore>(
    progress: &mut ProgressStore<S>,
    event: &WordAccepted<'_>,
) -> Vec<AchievementDef> {
    let mut newly = Vec::new();
    let today = event.now.date();

    progress.record_play_session(today, event.now);

    if event.now.hour() < NIGHT_END_HOUR {
        unlock_global(progress, NIGHT_OWL, event.now, &mut newly);
    }

    if let Some(def) = definition(SEVEN_DAY_STREAK) {
        if current_streak(progress, today) >= def.target {
            unlock_global(progress, SEVEN_DAY_STREAK, event.now, &mut newly);
        }
    }

    let is_nine_letter = event.word.chars().count() == GRID_SIZE;
    if is_nine_letter {
        unlock_per_date(progress, NINE_LETTER_WORD, event.puzzle_date, event.now, &mut newly);
    }

    let all_words_completed = event.possible_count > 0 && event.found_count == event.possible_count;
    if all_words_completed {
        unlock_per_date(progress, ALL_WORDS, event.puzzle_date, event.now, &mut newly);
    }

    if is_nine_letter {
        let total = total_nine_letter_words(progress);
        unlock_reached_totals(progress, Metric::NineLetterTotal, total, event.now, &mut newly);
    }

    if all_words_completed {
        let total = progress.date_achievement_count(ALL_WORDS) as u32;
        unlock_reached_totals(progress, Metric::AllWordsTotal, total, event.now, &mut newly);
    }

    newly
}

/// Every achievement with unlock state and progress
///
/// Per-date achievements report against `active_date`; streak progress
/// counts back from `today`, the real current date.
pub fn all_statuses<S: KeyValueStore>(
    progress: &ProgressStore<S>,
    active_date: NaiveDate,
    today: NaiveDate,
) -> Vec<AchievementStatus> {
    let nine_letter_total = total_nine_letter_words(progress);
    let all_words_total = progress.date_achievement_count(ALL_WORDS) as u32;
    let streak = current_streak(progress, today);

    DEFINITIONS
        .iter()
        .map(|def| {
            let unlocked = match def.scope {
                AchievementScope::PerDate => progress.date_achievement_unlocked(def.id, active_date),
                AchievementScope::Global => progress.global_achievement_unlocked(def.id),
            };
            let progress_pair = def.metric.is_progressive().then(|| {
                let current = match def.metric {
                    Metric::StreakDays => streak,
                    Metric::NineLetterTotal => nine_letter_total,
                    _ => all_words_total,
                };
                Progress {
                    current: current.min(def.target),
                    target: def.target,
                }
            });
            AchievementStatus {
                definition: *def,
                unlocked,
                progress: progress_pair,
            }
        })
        .collect()
}

/// Consecutive days played, counted back from `today`
///
/// A missing session today does not end the run; the first missing day
/// strictly before today does.
#[must_use]
pub fn current_streak<S: KeyValueStore>(progress: &ProgressStore<S>, today: NaiveDate) -> u32 {
    let mut streak = u32::from(progress.has_play_session(today));
    let mut day = today.pred_opt();
    while let Some(d) = day {
        if !progress.has_play_session(d) {
            break;
        }
        streak += 1;
        day = d.pred_opt();
    }
    streak
}

/// Reconstruct achievement state from found-word records that predate
/// achievement tracking
///
/// Re-derives per-date unlocks (regenerating each historical puzzle to
/// recompute its unfiltered possible set) and then the cumulative global
/// unlocks. Idempotent: every write only fills absent keys, and a version
/// key skips the scan on later runs.
pub fn run_migration<S: KeyValueStore>(
    progress: &mut ProgressStore<S>,
    dictionary: &Dictionary,
    now: NaiveDateTime,
) {
    if progress.migration_done() {
        return;
    }

    let records = progress.all_found_word_records();
    for record in &records {
        if record.words.iter().any(|w| w.chars().count() == GRID_SIZE) {
            progress.unlock_date_achievement(NINE_LETTER_WORD, record.date, now);
        }

        let puzzle = generate(dictionary, record.date);
        let possible = WordMatcher::for_puzzle(dictionary, &puzzle).possible_words(false);
        if !possible.is_empty()
            && possible.words().iter().all(|w| record.words.contains(&w.text().to_string()))
        {
            progress.unlock_date_achievement(ALL_WORDS, record.date, now);
        }
    }

    let mut newly = Vec::new();
    let nine_total = total_nine_letter_words(progress);
    unlock_reached_totals(progress, Metric::NineLetterTotal, nine_total, now, &mut newly);
    let all_total = progress.date_achievement_count(ALL_WORDS) as u32;
    unlock_reached_totals(progress, Metric::AllWordsTotal, all_total, now, &mut newly);

    progress.mark_migration_done(now);
}

/// Nine-letter words found across every stored date
fn total_nine_letter_words<S: KeyValueStore>(progress: &ProgressStore<S>) -> u32 {
    progress
        .all_found_word_records()
        .iter()
        .flat_map(|record| &record.words)
        .filter(|w| w.chars().count() == GRID_SIZE)
        .count() as u32
}

fn unlock_global<S: KeyValueStore>(
    progress: &mut ProgressStore<S>,
    id: &str,
    at: NaiveDateTime,
    newly: &mut Vec<AchievementDef>,
) {
    if progress.global_achievement_unlocked(id) {
        return;
    }
    progress.unlock_global_achievement(id, at);
    if let Some(def) = definition(id) {
        newly.push(*def);
    }
}

fn unlock_per_date<S: KeyValueStore>(
    progress: &mut ProgressStore<S>,
    id: &str,
    date: NaiveDate,
    at: NaiveDateTime,
    newly: &mut Vec<AchievementDef>,
) {
    if progress.date_achievement_unlocked(id, date) {
        return;
    }
    progress.unlock_date_achievement(id, date, at);
    if let Some(def) = definition(id) {
        newly.push(*def);
    }
}

/// Unlock every global achievement of a metric whose target is reached
fn unlock_reached_totals<S: KeyValueStore>(
    progress: &mut ProgressStore<S>,
    metric: Metric,
    total: u32,
    at: NaiveDateTime,
    newly: &mut Vec<AchievementDef>,
) {
    for def in DEFINITIONS {
        if def.metric == metric && total >= def.target {
            unlock_global(progress, def.id, at, newly);
        }
    }
}

//! Achievement definition table
//!
//! An explicit schema: every achievement declares its scope (per-date or
//! global one-shot) and the metric that drives it, instead of leaving those
//! to be inferred from naming conventions.

use crate::messages::MessageKey;
use serde::Serialize;

/// How an achievement's unlock state is keyed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AchievementScope {
    /// Re-evaluated for every puzzle date; keyed by (id, date)
    PerDate,
    /// Keyed by id alone; once unlocked, never re-locked
    Global,
}

/// The quantity an achievement measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Metric {
    /// A nine-letter word found on the active date
    NineLetterToday,
    /// Every possible word found on the active date
    AllWordsToday,
    /// Consecutive days played, counted back from the real current date
    StreakDays,
    /// Nine-letter words found across all dates
    NineLetterTotal,
    /// Dates on which every possible word was found
    AllWordsTotal,
    /// Played during the night hours (00:00-03:59)
    NightOwl,
}

impl Metric {
    /// Whether this metric accumulates toward a target worth displaying
    #[must_use]
    pub const fn is_progressive(self) -> bool {
        matches!(
            self,
            Self::StreakDays | Self::NineLetterTotal | Self::AllWordsTotal
        )
    }
}

/// One achievement definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AchievementDef {
    pub id: &'static str,
    pub scope: AchievementScope,
    pub metric: Metric,
    pub target: u32,
}

impl AchievementDef {
    /// Translation key for the display name
    #[must_use]
    pub fn name_key(&self) -> MessageKey {
        MessageKey::new(format!("achievement.{}.name", self.id))
    }

    /// Translation key for the description, carrying the target
    #[must_use]
    pub fn description_key(&self) -> MessageKey {
        MessageKey::new(format!("achievement.{}.description", self.id))
            .with_param("target", self.target)
    }
}

/// Every achievement, per-date first, then global
pub const DEFINITIONS: &[AchievementDef] = &[
    AchievementDef {
        id: "nine_letter_word",
        scope: AchievementScope::PerDate,
        metric: Metric::NineLetterToday,
        target: 1,
    },
    AchievementDef {
        id: "all_words",
        scope: AchievementScope::PerDate,
        metric: Metric::AllWordsToday,
        target: 1,
    },
    AchievementDef {
        id: "seven_day_streak",
        scope: AchievementScope::Global,
        metric: Metric::StreakDays,
        target: 7,
    },
    AchievementDef {
        id: "nine_letter_10",
        scope: AchievementScope::Global,
        metric: Metric::NineLetterTotal,
        target: 10,
    },
    AchievementDef {
        id: "nine_letter_25",
        scope: AchievementScope::Global,
        metric: Metric::NineLetterTotal,
        target: 25,
    },
    AchievementDef {
        id: "nine_letter_50",
        scope: AchievementScope::Global,
        metric: Metric::NineLetterTotal,
        target: 50,
    },
    AchievementDef {
        id: "nine_letter_100",
        scope: AchievementScope::Global,
        metric: Metric::NineLetterTotal,
        target: 100,
    },
    AchievementDef {
        id: "all_words_10",
        scope: AchievementScope::Global,
        metric: Metric::AllWordsTotal,
        target: 10,
    },
    AchievementDef {
        id: "all_words_25",
        scope: AchievementScope::Global,
        metric: Metric::AllWordsTotal,
        target: 25,
    },
    AchievementDef {
        id: "all_words_50",
        scope: AchievementScope::Global,
        metric: Metric::AllWordsTotal,
        target: 50,
    },
    AchievementDef {
        id: "all_words_100",
        scope: AchievementScope::Global,
        metric: Metric::AllWordsTotal,
        target: 100,
    },
    AchievementDef {
        id: "night_owl",
        scope: AchievementScope::Global,
        metric: Metric::NightOwl,
        target: 1,
    },
];

/// Look up a definition by id
#[must_use]
pub fn definition(id: &str) -> Option<&'static AchievementDef> {
    DEFINITIONS.iter().find(|def| def.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        for (i, def) in DEFINITIONS.iter().enumerate() {
            assert!(
                DEFINITIONS.iter().skip(i + 1).all(|d| d.id != def.id),
                "duplicate id {}",
                def.id
            );
        }
    }

    #[test]
    fn per_date_achievements_are_not_progressive() {
        for def in DEFINITIONS {
            if def.scope == AchievementScope::PerDate {
                assert!(!def.metric.is_progressive());
            }
        }
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(definition("night_owl").unwrap().metric, Metric::NightOwl);
        assert_eq!(definition("nine_letter_50").unwrap().target, 50);
        assert!(definition("no_such").is_none());
    }

    #[test]
    fn message_keys_are_dotted_and_parameterized() {
        let def = definition("nine_letter_25").unwrap();
        assert_eq!(def.name_key().key(), "achievement.nine_letter_25.name");
        let description = def.description_key();
        assert_eq!(description.params(), &[("target", "25".to_string())]);
    }
}

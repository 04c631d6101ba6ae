//! Achievements
//!
//! Typed achievement definitions plus the engine that derives unlock state
//! from stored progress. Definitions carry translation keys, never display
//! text, so any locale can render them.

mod definitions;
mod engine;

pub use definitions::{
    AchievementDef, AchievementScope, DEFINITIONS, Metric, definition,
};
pub use engine::{
    AchievementStatus, Progress, WordAccepted, all_statuses, current_streak, evaluate,
    run_migration,
};

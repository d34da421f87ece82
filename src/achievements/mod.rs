//! Achievement evaluation.
//!
//! Each achievement has a fixed, independent unlock predicate checked
//! against the hero's current state. Unlocks are permanent and each one
//! logs exactly once, at the locked-to-unlocked transition.

pub mod data;
pub mod types;

pub use data::{get_achievement_def, ALL_ACHIEVEMENTS};
pub use types::{AchievementDef, AchievementId, Achievements};

use crate::character::Hero;
use crate::core::constants::{DRAGON_SLAYER_LEVEL, TREASURE_HUNTER_ITEM_COUNT};
use crate::log::GameLog;

fn try_unlock(achievements: &mut Achievements, id: AchievementId, log: &mut GameLog) {
    if achievements.unlock(id) {
        log.push(format!(
            "Achievement unlocked: {}",
            get_achievement_def(id).name
        ));
    }
}

/// Evaluate every unlock predicate against the hero.
pub fn check_achievements(hero: &Hero, achievements: &mut Achievements, log: &mut GameLog) {
    if hero.gold > 0 {
        try_unlock(achievements, AchievementId::FirstBlood, log);
    }
    if hero.inventory.total_count() >= TREASURE_HUNTER_ITEM_COUNT {
        try_unlock(achievements, AchievementId::TreasureHunter, log);
    }
    if hero.level >= DRAGON_SLAYER_LEVEL {
        try_unlock(achievements, AchievementId::DragonSlayer, log);
    }
}

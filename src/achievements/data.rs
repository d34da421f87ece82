//! Static achievement definitions.

use super::types::{AchievementDef, AchievementId};

/// All achievement definitions in display order.
pub const ALL_ACHIEVEMENTS: &[AchievementDef] = &[
    AchievementDef {
        id: AchievementId::FirstBlood,
        name: "First Blood",
        description: "Defeat your first monster",
    },
    AchievementDef {
        id: AchievementId::TreasureHunter,
        name: "Treasure Hunter",
        description: "Collect 10 items",
    },
    AchievementDef {
        id: AchievementId::DragonSlayer,
        name: "Dragon Slayer",
        description: "Reach level 10",
    },
];

/// Look up the static definition for an achievement id.
pub fn get_achievement_def(id: AchievementId) -> &'static AchievementDef {
    ALL_ACHIEVEMENTS
        .iter()
        .find(|def| def.id == id)
        .unwrap_or(&ALL_ACHIEVEMENTS[0])
}

//! Achievement types and unlock state.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Unique identifier for each achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AchievementId {
    FirstBlood,
    TreasureHunter,
    DragonSlayer,
}

/// Static definition of an achievement.
#[derive(Debug, Clone)]
pub struct AchievementDef {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
}

/// Record of an unlocked achievement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnlockedAchievement {
    pub unlocked_at: i64,
}

/// Unlock state. Unlocks are monotonic: once set, an id is never cleared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Achievements {
    unlocked: HashMap<AchievementId, UnlockedAchievement>,
}

impl Achievements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        self.unlocked.contains_key(&id)
    }

    /// Unlock an achievement. Returns true only when newly unlocked.
    pub fn unlock(&mut self, id: AchievementId) -> bool {
        if self.is_unlocked(id) {
            return false;
        }
        self.unlocked.insert(
            id,
            UnlockedAchievement {
                unlocked_at: chrono::Utc::now().timestamp(),
            },
        );
        true
    }

    pub fn unlocked_count(&self) -> usize {
        self.unlocked.len()
    }
}

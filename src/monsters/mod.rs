//! Monsters and their loot tables.

pub mod data;

use crate::log::GameLog;
use crate::skills::{tick_skills, Skill};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One possible drop. Each entry is rolled independently when the monster
/// is defeated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LootTableEntry {
    /// Item template reference.
    pub base_id: String,
    /// Drop chance as a percentage in [0, 100].
    pub weight: u32,
    /// Inclusive quantity range.
    pub min_quantity: u32,
    pub max_quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    pub name: String,
    pub hp: u32,
    pub max_hp: u32,
    pub xp_reward: u32,
    pub gold_reward: u32,
    pub skills: Vec<Skill>,
    pub loot_table: Vec<LootTableEntry>,
}

impl Monster {
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Take damage, flooring HP at zero.
    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    /// Advance skill cooldowns by one time step.
    pub fn tick_cooldowns(&mut self, delta_ms: u32) {
        tick_skills(&mut self.skills, delta_ms);
    }

    /// Skills currently off cooldown.
    pub fn ready_skills(&self) -> Vec<usize> {
        self.skills
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_ready())
            .map(|(i, _)| i)
            .collect()
    }
}

/// Pick a monster uniformly from the catalog, with all cooldowns reset,
/// and announce it.
pub fn spawn_monster(rng: &mut impl Rng, log: &mut GameLog) -> Monster {
    let catalog = data::monster_catalog();
    let mut monster = catalog[rng.gen_range(0..catalog.len())].clone();
    monster.hp = monster.max_hp;
    for skill in &mut monster.skills {
        skill.current_cooldown_ms = 0;
    }
    log.push(format!("A {} appears!", monster.name));
    monster
}

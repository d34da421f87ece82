//! The hero: stats, equipment, inventory, skills, and active effects.

pub mod classes;

use crate::items::{Equipment, Inventory, ItemEffect};
use crate::skills::{tick_skills, Skill};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub name: String,
    pub level: u32,
    pub hp: u32,
    pub max_hp: u32,
    /// Class-given damage, grown by leveling.
    pub base_damage: u32,
    /// Equipment-given damage on top of `base_damage`.
    pub bonus_damage: u32,
    pub xp: u32,
    pub gold: u32,
    pub equipment: Equipment,
    pub inventory: Inventory,
    pub skills: Vec<Skill>,
    /// Active status effects (poison, stun), from skills or equipment.
    pub effects: Vec<ItemEffect>,
}

impl Hero {
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Restore HP, clamped to max HP.
    pub fn heal(&mut self, amount: u32) {
        self.hp = (self.hp + amount).min(self.max_hp);
    }

    /// Take damage, flooring HP at zero.
    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    /// Advance skill cooldowns by one time step.
    pub fn tick_cooldowns(&mut self, delta_ms: u32) {
        tick_skills(&mut self.skills, delta_ms);
    }

    /// Clear all skill cooldowns, as happens after a victory.
    pub fn reset_cooldowns(&mut self) {
        for skill in &mut self.skills {
            skill.current_cooldown_ms = 0;
        }
    }
}

//! Skills shared by heroes and monsters.
//!
//! A skill's secondary behavior is a tagged [`SkillEffect`] variant rather
//! than a callback, so skill definitions stay plain serializable data and
//! the combat engine owns all interpretation.

use serde::{Deserialize, Serialize};

/// Secondary behavior attached to a skill.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum SkillEffect {
    #[default]
    None,
    /// Restores the user's HP, clamped to max HP.
    Heal { amount: u32 },
    /// Multiplies the computed damage; the result is floored.
    DamageMultiplier { factor: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub damage: u32,
    /// Full cooldown in milliseconds.
    pub cooldown_ms: u32,
    /// Milliseconds remaining before the skill is usable again.
    pub current_cooldown_ms: u32,
    pub description: String,
    #[serde(default)]
    pub effect: SkillEffect,
}

impl Skill {
    pub fn new(
        name: &str,
        damage: u32,
        cooldown_ms: u32,
        description: &str,
        effect: SkillEffect,
    ) -> Self {
        Self {
            name: name.to_string(),
            damage,
            cooldown_ms,
            current_cooldown_ms: 0,
            description: description.to_string(),
            effect,
        }
    }

    /// A skill is usable only when fully cooled down.
    pub fn is_ready(&self) -> bool {
        self.current_cooldown_ms == 0
    }

    /// Put the skill on full cooldown after use.
    pub fn trigger_cooldown(&mut self) {
        self.current_cooldown_ms = self.cooldown_ms;
    }
}

/// Advance every skill's cooldown by one time step, flooring at zero.
pub fn tick_skills(skills: &mut [Skill], delta_ms: u32) {
    for skill in skills.iter_mut() {
        skill.current_cooldown_ms = skill.current_cooldown_ms.saturating_sub(delta_ms);
    }
}

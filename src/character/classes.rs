//! Hero class templates and character creation.

use super::Hero;
use crate::items::{Equipment, Inventory};
use crate::skills::{Skill, SkillEffect};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroClass {
    pub name: String,
    pub base_hp: u32,
    pub base_damage: u32,
    pub skills: Vec<Skill>,
}

/// All playable classes in display order.
pub fn class_catalog() -> Vec<HeroClass> {
    vec![
        HeroClass {
            name: "Warrior".to_string(),
            base_hp: 120,
            base_damage: 6,
            skills: vec![
                Skill::new("Slash", 10, 1000, "A basic sword attack", SkillEffect::None),
                Skill::new(
                    "Block",
                    0,
                    3000,
                    "Reduce incoming damage and heal for 10 HP",
                    SkillEffect::Heal { amount: 10 },
                ),
                Skill::new(
                    "Whirlwind",
                    15,
                    5000,
                    "A powerful spinning attack",
                    SkillEffect::DamageMultiplier { factor: 1.5 },
                ),
            ],
        },
        HeroClass {
            name: "Mage".to_string(),
            base_hp: 90,
            base_damage: 8,
            skills: vec![
                Skill::new("Fireball", 12, 1500, "Hurls a ball of flame", SkillEffect::None),
                Skill::new(
                    "Mend",
                    0,
                    4000,
                    "Knit wounds closed with restorative magic",
                    SkillEffect::Heal { amount: 15 },
                ),
                Skill::new(
                    "Arcane Surge",
                    18,
                    6000,
                    "Channel raw arcane power into a devastating blast",
                    SkillEffect::DamageMultiplier { factor: 1.5 },
                ),
            ],
        },
    ]
}

/// Create a fresh level-1 hero from a class template.
pub fn create_hero(class: &HeroClass) -> Hero {
    Hero {
        name: class.name.clone(),
        level: 1,
        hp: class.base_hp,
        max_hp: class.base_hp,
        base_damage: class.base_damage,
        bonus_damage: 0,
        xp: 0,
        gold: 0,
        equipment: Equipment::new(),
        inventory: Inventory::new(),
        skills: class.skills.clone(),
        effects: Vec::new(),
    }
}

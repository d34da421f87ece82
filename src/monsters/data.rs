//! Static monster catalog.

use super::{LootTableEntry, Monster};
use crate::skills::{Skill, SkillEffect};

fn loot(base_id: &str, weight: u32, min_quantity: u32, max_quantity: u32) -> LootTableEntry {
    LootTableEntry {
        base_id: base_id.to_string(),
        weight,
        min_quantity,
        max_quantity,
    }
}

/// All monster types. Spawning picks uniformly from this list.
pub fn monster_catalog() -> Vec<Monster> {
    vec![
        Monster {
            name: "Skeleton".to_string(),
            hp: 50,
            max_hp: 50,
            xp_reward: 30,
            gold_reward: 15,
            skills: vec![
                Skill::new(
                    "Bone Throw",
                    5,
                    1500,
                    "Throws a bone at the hero",
                    SkillEffect::None,
                ),
                Skill::new(
                    "Skeletal Slash",
                    8,
                    3000,
                    "A powerful slash with bony arms",
                    SkillEffect::DamageMultiplier { factor: 1.2 },
                ),
            ],
            loot_table: vec![
                loot("sw1", 50, 1, 1),
                loot("ar1", 30, 1, 1),
                loot("pot1", 70, 1, 1),
            ],
        },
        Monster {
            name: "Goblin".to_string(),
            hp: 40,
            max_hp: 40,
            xp_reward: 25,
            gold_reward: 20,
            skills: vec![
                Skill::new("Stab", 6, 1200, "A quick jab with a crude dagger", SkillEffect::None),
                Skill::new(
                    "Sneak Attack",
                    10,
                    4000,
                    "Strikes from an unexpected angle",
                    SkillEffect::DamageMultiplier { factor: 1.5 },
                ),
            ],
            loot_table: vec![
                loot("pot1", 60, 1, 2),
                loot("sw1", 25, 1, 1),
                loot("sw2", 10, 1, 1),
            ],
        },
        Monster {
            name: "Dire Wolf".to_string(),
            hp: 65,
            max_hp: 65,
            xp_reward: 40,
            gold_reward: 10,
            skills: vec![
                Skill::new("Bite", 7, 1500, "Snaps with powerful jaws", SkillEffect::None),
                Skill::new(
                    "Rending Claws",
                    11,
                    3500,
                    "Rakes the hero with savage claws",
                    SkillEffect::DamageMultiplier { factor: 1.2 },
                ),
            ],
            loot_table: vec![
                loot("pot1", 50, 1, 1),
                loot("pot2", 30, 1, 1),
                loot("ar2", 15, 1, 1),
            ],
        },
    ]
}

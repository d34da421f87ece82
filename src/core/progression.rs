//! Loot generation, rewards, and leveling.

use crate::character::Hero;
use crate::core::constants::{LEVEL_UP_GROWTH, XP_PER_LEVEL};
use crate::items::data::find_template;
use crate::items::Item;
use crate::log::GameLog;
use crate::monsters::Monster;
use rand::Rng;

/// One generated drop. Non-stackable templates produce one drop per
/// instance; stackable templates produce a single drop with a quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct LootDrop {
    pub item: Item,
    pub quantity: u32,
}

/// XP needed to clear the given level.
pub fn xp_required(level: u32) -> u32 {
    level * XP_PER_LEVEL
}

/// Roll the monster's loot table. Every entry is rolled independently
/// against its percentage weight; quantity is uniform in the entry's
/// inclusive range. Entries referencing unknown templates are logged and
/// skipped without aborting generation.
pub fn generate_loot(monster: &Monster, rng: &mut impl Rng, log: &mut GameLog) -> Vec<LootDrop> {
    let mut loot = Vec::new();
    for entry in &monster.loot_table {
        if rng.gen::<f64>() * 100.0 >= entry.weight as f64 {
            continue;
        }
        let quantity = rng.gen_range(entry.min_quantity..=entry.max_quantity);

        let Some(template) = find_template(&entry.base_id) else {
            log.push(format!("Unknown item template: {}", entry.base_id));
            continue;
        };

        if template.stackable {
            loot.push(LootDrop {
                item: template.instantiate(),
                quantity,
            });
        } else {
            for _ in 0..quantity {
                loot.push(LootDrop {
                    item: template.instantiate(),
                    quantity: 1,
                });
            }
        }
    }
    loot
}

/// Advance the hero one level: stats grow by 10% (floored), the cleared
/// threshold is subtracted from XP (overflow carries), and HP refills.
pub fn level_up(hero: &mut Hero, log: &mut GameLog) {
    let old_level = hero.level;
    hero.level += 1;
    hero.max_hp = (hero.max_hp as f64 * LEVEL_UP_GROWTH) as u32;
    hero.base_damage = (hero.base_damage as f64 * LEVEL_UP_GROWTH) as u32;
    hero.xp = hero.xp.saturating_sub(xp_required(old_level));
    hero.hp = hero.max_hp;
    log.push(format!(
        "Level Up! You are now level {}. All stats increased!",
        hero.level
    ));
}

/// Award the defeated monster's XP and gold, merge its loot into the
/// inventory, and run a single level-up check.
pub fn handle_monster_defeat(
    hero: &mut Hero,
    monster: &Monster,
    log: &mut GameLog,
    rng: &mut impl Rng,
) {
    let loot = generate_loot(monster, rng, log);

    hero.xp += monster.xp_reward;
    hero.gold += monster.gold_reward;

    log.push(format!(
        "{} defeated! Gained {} XP and {} gold.",
        monster.name, monster.xp_reward, monster.gold_reward
    ));

    for drop in loot {
        log.push(format!("Found {} x{}!", drop.item.name, drop.quantity));
        hero.inventory.add(drop.item, drop.quantity);
    }

    // One check per defeat; overshoot XP carries to the next kill
    if hero.xp >= xp_required(hero.level) {
        level_up(hero, log);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::classes::{class_catalog, create_hero};
    use crate::monsters::data::monster_catalog;
    use crate::monsters::LootTableEntry;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn warrior() -> Hero {
        create_hero(&class_catalog()[0])
    }

    fn skeleton() -> Monster {
        monster_catalog()[0].clone()
    }

    #[test]
    fn test_xp_required() {
        assert_eq!(xp_required(1), 100);
        assert_eq!(xp_required(7), 700);
    }

    #[test]
    fn test_generate_loot_respects_quantity_bounds() {
        let mut monster = skeleton();
        monster.loot_table = vec![LootTableEntry {
            base_id: "pot1".to_string(),
            weight: 100,
            min_quantity: 2,
            max_quantity: 4,
        }];
        let mut log = GameLog::new();
        for seed in 0..100 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let loot = generate_loot(&monster, &mut rng, &mut log);
            assert_eq!(loot.len(), 1);
            assert!((2..=4).contains(&loot[0].quantity));
        }
    }

    #[test]
    fn test_generate_loot_zero_weight_never_drops() {
        let mut monster = skeleton();
        monster.loot_table = vec![LootTableEntry {
            base_id: "pot1".to_string(),
            weight: 0,
            min_quantity: 1,
            max_quantity: 1,
        }];
        let mut log = GameLog::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..100 {
            assert!(generate_loot(&monster, &mut rng, &mut log).is_empty());
        }
    }

    #[test]
    fn test_generate_loot_skips_unknown_template() {
        let mut monster = skeleton();
        monster.loot_table = vec![
            LootTableEntry {
                base_id: "bogus".to_string(),
                weight: 100,
                min_quantity: 1,
                max_quantity: 1,
            },
            LootTableEntry {
                base_id: "pot1".to_string(),
                weight: 100,
                min_quantity: 1,
                max_quantity: 1,
            },
        ];
        let mut log = GameLog::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let loot = generate_loot(&monster, &mut rng, &mut log);
        // Bad entry skipped, good entry still processed
        assert_eq!(loot.len(), 1);
        assert_eq!(loot[0].item.base_id, "pot1");
        assert!(log.contains("Unknown item template: bogus"));
    }

    #[test]
    fn test_level_up_exact_threshold() {
        let mut hero = warrior();
        let mut log = GameLog::new();
        hero.xp = 100;
        hero.hp = 40;

        level_up(&mut hero, &mut log);
        assert_eq!(hero.level, 2);
        assert_eq!(hero.xp, 0);
        assert_eq!(hero.max_hp, 132);
        assert_eq!(hero.base_damage, 6); // floor(6 * 1.1)
        assert_eq!(hero.hp, hero.max_hp);
        assert!(log.contains("Level Up! You are now level 2."));
    }

    #[test]
    fn test_level_up_carries_overflow_xp() {
        let mut hero = warrior();
        let mut log = GameLog::new();
        hero.xp = 130;
        level_up(&mut hero, &mut log);
        assert_eq!(hero.xp, 30);
    }

    #[test]
    fn test_defeat_awards_rewards_and_logs() {
        let mut hero = warrior();
        let monster = skeleton();
        let mut log = GameLog::new();
        let mut rng = ChaCha8Rng::seed_from_u64(12345);

        handle_monster_defeat(&mut hero, &monster, &mut log, &mut rng);
        assert_eq!(hero.xp, 30);
        assert_eq!(hero.gold, 15);
        assert!(log.contains("Skeleton defeated! Gained 30 XP and 15 gold."));
    }

    #[test]
    fn test_defeat_merges_loot_into_inventory() {
        let mut hero = warrior();
        let mut monster = skeleton();
        monster.loot_table = vec![LootTableEntry {
            base_id: "pot1".to_string(),
            weight: 100,
            min_quantity: 2,
            max_quantity: 2,
        }];
        let mut log = GameLog::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        handle_monster_defeat(&mut hero, &monster, &mut log, &mut rng);
        handle_monster_defeat(&mut hero, &monster, &mut log, &mut rng);
        assert_eq!(hero.inventory.entries().len(), 1);
        assert_eq!(hero.inventory.count_of("pot1"), 4);
        assert!(log.contains("Found Minor Health Potion x2!"));
    }

    #[test]
    fn test_defeat_triggers_single_level_up() {
        let mut hero = warrior();
        let monster = skeleton();
        let mut log = GameLog::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        // 310 XP clears level 1 (100) and the remainder would clear
        // level 2 (200), but only one level-up runs per defeat event.
        hero.xp = 280;
        handle_monster_defeat(&mut hero, &monster, &mut log, &mut rng);
        assert_eq!(hero.level, 2);
        assert_eq!(hero.xp, 210);
    }
}

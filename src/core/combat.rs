//! The combat turn engine: one hero action, one monster action.

use crate::character::Hero;
use crate::core::combat_math::{compute_damage, multiply_damage};
use crate::core::effects::apply_status_effects;
use crate::log::GameLog;
use crate::monsters::Monster;
use crate::skills::SkillEffect;
use rand::Rng;

/// Outcome of a hero action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroActionReport {
    /// False when the action was rejected (cooldown, bad index) and no
    /// state changed.
    pub performed: bool,
    pub damage: u32,
    pub monster_defeated: bool,
}

/// Outcome of a monster action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonsterActionReport {
    /// False when every skill was on cooldown and no state changed.
    pub attacked: bool,
    pub damage: u32,
    pub hero_defeated: bool,
}

fn multiplier_percent(factor: f64) -> i64 {
    ((factor - 1.0) * 100.0).round() as i64
}

/// Execute one hero skill against the monster.
///
/// Sequence: damage roll, skill effect (heal or multiplier), the hero's own
/// status effects, damage to the monster, then the used skill goes on full
/// cooldown. A skill on cooldown rejects the whole action without mutating
/// either combatant.
pub fn hero_action(
    hero: &mut Hero,
    monster: &mut Monster,
    skill_index: usize,
    log: &mut GameLog,
    rng: &mut impl Rng,
) -> HeroActionReport {
    let rejected = HeroActionReport {
        performed: false,
        damage: 0,
        monster_defeated: false,
    };

    let Some(skill) = hero.skills.get(skill_index).cloned() else {
        log.push("No such skill.");
        return rejected;
    };
    if !skill.is_ready() {
        log.push(format!("{} is still on cooldown!", skill.name));
        return rejected;
    }

    let mut damage = compute_damage(hero.base_damage, hero.bonus_damage, skill.damage, rng);

    match skill.effect {
        SkillEffect::Heal { amount } => {
            hero.heal(amount);
            log.push(format!("Hero uses {}! Gained {} HP.", skill.name, amount));
        }
        SkillEffect::DamageMultiplier { factor } => {
            damage = multiply_damage(damage, factor);
            log.push(format!(
                "Hero uses {}! Damage increased by {}%.",
                skill.name,
                multiplier_percent(factor)
            ));
        }
        SkillEffect::None => {
            log.push(format!("Hero uses {}!", skill.name));
        }
    }

    apply_status_effects(hero, log);

    monster.take_damage(damage);
    log.push(format!(
        "{} deals {} damage to {}",
        skill.name, damage, monster.name
    ));

    hero.skills[skill_index].trigger_cooldown();

    HeroActionReport {
        performed: true,
        damage,
        monster_defeated: !monster.is_alive(),
    }
}

/// Execute one monster action against the hero.
///
/// The monster picks uniformly among its ready skills; with none ready it
/// only announces that it is preparing. Monster damage is the skill's flat
/// value, adjusted by a multiplier effect if present — monsters do not
/// roll variance or self-heal.
pub fn monster_action(
    hero: &mut Hero,
    monster: &mut Monster,
    log: &mut GameLog,
    rng: &mut impl Rng,
) -> MonsterActionReport {
    let ready = monster.ready_skills();
    if ready.is_empty() {
        log.push(format!("{} is preparing for its next move.", monster.name));
        return MonsterActionReport {
            attacked: false,
            damage: 0,
            hero_defeated: false,
        };
    }

    let skill_index = ready[rng.gen_range(0..ready.len())];
    let skill = monster.skills[skill_index].clone();

    let mut damage = skill.damage;
    match skill.effect {
        SkillEffect::DamageMultiplier { factor } => {
            damage = multiply_damage(damage, factor);
            log.push(format!(
                "{} uses {}! Damage increased by {}%.",
                monster.name,
                skill.name,
                multiplier_percent(factor)
            ));
        }
        SkillEffect::None | SkillEffect::Heal { .. } => {
            log.push(format!("{} uses {}!", monster.name, skill.name));
        }
    }

    hero.take_damage(damage);
    log.push(format!("{} deals {} damage to Hero", monster.name, damage));

    monster.skills[skill_index].trigger_cooldown();

    MonsterActionReport {
        attacked: true,
        damage,
        hero_defeated: !hero.is_alive(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::classes::{class_catalog, create_hero};
    use crate::monsters::data::monster_catalog;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn setup() -> (Hero, Monster, GameLog, ChaCha8Rng) {
        (
            create_hero(&class_catalog()[0]),
            monster_catalog()[0].clone(),
            GameLog::new(),
            ChaCha8Rng::seed_from_u64(12345),
        )
    }

    #[test]
    fn test_hero_action_on_cooldown_changes_nothing() {
        let (mut hero, mut monster, mut log, mut rng) = setup();
        hero.skills[0].trigger_cooldown();
        let before_hero = hero.clone();
        let before_monster = monster.clone();

        let report = hero_action(&mut hero, &mut monster, 0, &mut log, &mut rng);
        assert!(!report.performed);
        assert_eq!(hero, before_hero);
        assert_eq!(monster, before_monster);
        assert!(log.contains("Slash is still on cooldown!"));
    }

    #[test]
    fn test_hero_action_bad_index_changes_nothing() {
        let (mut hero, mut monster, mut log, mut rng) = setup();
        let before_monster = monster.clone();
        let report = hero_action(&mut hero, &mut monster, 9, &mut log, &mut rng);
        assert!(!report.performed);
        assert_eq!(monster, before_monster);
        assert!(log.contains("No such skill."));
    }

    #[test]
    fn test_hero_action_sets_only_used_cooldown() {
        let (mut hero, mut monster, mut log, mut rng) = setup();
        let report = hero_action(&mut hero, &mut monster, 0, &mut log, &mut rng);
        assert!(report.performed);
        assert_eq!(hero.skills[0].current_cooldown_ms, 1000);
        assert_eq!(hero.skills[1].current_cooldown_ms, 0);
        assert_eq!(hero.skills[2].current_cooldown_ms, 0);
    }

    #[test]
    fn test_hero_action_damage_in_expected_range() {
        // base 6, bonus 0, Slash 10: damage in [16, 19]
        for seed in 0..50 {
            let (mut hero, mut monster, mut log, _) = setup();
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let report = hero_action(&mut hero, &mut monster, 0, &mut log, &mut rng);
            assert!(
                (16..=19).contains(&report.damage),
                "damage {} out of range",
                report.damage
            );
            assert_eq!(monster.hp, monster.max_hp - report.damage);
        }
    }

    #[test]
    fn test_hero_heal_skill() {
        let (mut hero, mut monster, mut log, mut rng) = setup();
        hero.hp = 60;
        let report = hero_action(&mut hero, &mut monster, 1, &mut log, &mut rng);
        assert!(report.performed);
        assert_eq!(hero.hp, 70);
        assert!(log.contains("Hero uses Block! Gained 10 HP."));
        // Block has 0 skill damage: damage in [6, 9]
        assert!((6..=9).contains(&report.damage));
    }

    #[test]
    fn test_hero_multiplier_skill() {
        // Whirlwind: base roll in [21, 24], times 1.5 floored
        let (mut hero, mut monster, mut log, mut rng) = setup();
        let report = hero_action(&mut hero, &mut monster, 2, &mut log, &mut rng);
        assert!(report.performed);
        assert!((31..=46).contains(&report.damage), "damage {}", report.damage);
        assert!(log.contains("Hero uses Whirlwind! Damage increased by 50%."));
    }

    #[test]
    fn test_monster_hp_floors_at_zero() {
        let (mut hero, mut monster, mut log, mut rng) = setup();
        monster.hp = 5;
        let report = hero_action(&mut hero, &mut monster, 0, &mut log, &mut rng);
        assert!(report.monster_defeated);
        assert_eq!(monster.hp, 0);
    }

    #[test]
    fn test_monster_action_deals_flat_skill_damage() {
        let (mut hero, mut monster, mut log, mut rng) = setup();
        let report = monster_action(&mut hero, &mut monster, &mut log, &mut rng);
        assert!(report.attacked);
        // Skeleton: Bone Throw 5, or Skeletal Slash 8 * 1.2 = 9
        assert!(report.damage == 5 || report.damage == 9, "damage {}", report.damage);
        assert_eq!(hero.hp, hero.max_hp - report.damage);
        assert!(log.contains("damage to Hero"));
    }

    #[test]
    fn test_monster_action_all_cooldowns_preparing() {
        let (mut hero, mut monster, mut log, mut rng) = setup();
        for skill in &mut monster.skills {
            skill.trigger_cooldown();
        }
        let before_hero = hero.clone();
        let before_monster = monster.clone();

        let report = monster_action(&mut hero, &mut monster, &mut log, &mut rng);
        assert!(!report.attacked);
        assert_eq!(hero, before_hero);
        assert_eq!(monster, before_monster);
        assert!(log.contains("Skeleton is preparing for its next move."));
    }

    #[test]
    fn test_monster_action_sets_used_cooldown() {
        let (mut hero, mut monster, mut log, mut rng) = setup();
        monster_action(&mut hero, &mut monster, &mut log, &mut rng);
        let on_cooldown = monster
            .skills
            .iter()
            .filter(|s| !s.is_ready())
            .count();
        assert_eq!(on_cooldown, 1);
    }

    #[test]
    fn test_hero_hp_floors_at_zero() {
        let (mut hero, mut monster, mut log, mut rng) = setup();
        hero.hp = 1;
        // Run turns until the monster lands a hit
        loop {
            let report = monster_action(&mut hero, &mut monster, &mut log, &mut rng);
            if report.attacked {
                assert!(report.hero_defeated);
                assert_eq!(hero.hp, 0);
                break;
            }
            monster.tick_cooldowns(1000);
        }
    }
}

//! Status-effect and equipment-modifier resolution.

use crate::character::Hero;
use crate::core::constants::POISON_HP_FLOOR;
use crate::items::{EffectKind, Item};
use crate::log::GameLog;

/// Apply the hero's active status effects for one action, then age them.
///
/// Poison deals its magnitude but never drops HP below 1 on its own. Stun
/// is deliberately inert. Effects with a duration expire once it reaches
/// zero; duration-less effects persist until removed by unequipping.
pub fn apply_status_effects(hero: &mut Hero, log: &mut GameLog) {
    for effect in &hero.effects {
        match effect.kind {
            EffectKind::Poison => {
                let floored = hero.hp.saturating_sub(effect.magnitude).max(POISON_HP_FLOOR);
                if floored < hero.hp {
                    log.push(format!("Poison deals {} damage!", hero.hp - floored));
                }
                hero.hp = floored;
            }
            // Stun has no behavioral effect yet
            EffectKind::Stun => {}
            EffectKind::Damage | EffectKind::Health => {}
        }
    }

    for effect in &mut hero.effects {
        if let Some(duration) = effect.duration.as_mut() {
            *duration = duration.saturating_sub(1);
        }
    }
    hero.effects
        .retain(|e| e.duration.map(|d| d > 0).unwrap_or(true));
}

/// Apply or reverse an item's modifiers on the hero.
///
/// Equipping with `equipping == true` and then calling again with `false`
/// restores `bonus_damage`, `max_hp`, and the active-effect list exactly.
pub fn apply_item_effects(hero: &mut Hero, item: &Item, equipping: bool) {
    if item.equippable {
        if let Some(slot) = item.kind.slot() {
            if equipping {
                hero.equipment.set(slot, Some(item.clone()));
            } else {
                hero.equipment.set(slot, None);
            }
        }
    }

    for effect in &item.effects {
        match effect.kind {
            EffectKind::Damage => {
                if equipping {
                    hero.bonus_damage += effect.magnitude;
                } else {
                    hero.bonus_damage = hero.bonus_damage.saturating_sub(effect.magnitude);
                }
            }
            EffectKind::Health => {
                if equipping {
                    hero.max_hp += effect.magnitude;
                    hero.hp = (hero.hp + effect.magnitude).min(hero.max_hp);
                } else {
                    hero.max_hp = hero.max_hp.saturating_sub(effect.magnitude);
                    hero.hp = hero.hp.min(hero.max_hp);
                }
            }
            EffectKind::Poison | EffectKind::Stun => {
                if equipping {
                    hero.effects.push(*effect);
                } else if let Some(pos) = hero.effects.iter().position(|e| e == effect) {
                    hero.effects.remove(pos);
                }
            }
        }
    }
}

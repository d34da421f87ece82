//! Equipment slots and the equip/unequip/consume operations.

use super::types::{EffectKind, EquipmentSlot, Item, ItemKind};
use crate::character::Hero;
use crate::core::effects::apply_item_effects;
use crate::log::GameLog;
use serde::{Deserialize, Serialize};

/// Hero equipment. Each slot holds at most one item; an equipped item is
/// moved out of the inventory, never duplicated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Equipment {
    pub weapon: Option<Item>,
    pub armor: Option<Item>,
}

impl Equipment {
    pub fn new() -> Self {
        Self {
            weapon: None,
            armor: None,
        }
    }

    pub fn get(&self, slot: EquipmentSlot) -> &Option<Item> {
        match slot {
            EquipmentSlot::Weapon => &self.weapon,
            EquipmentSlot::Armor => &self.armor,
        }
    }

    pub fn set(&mut self, slot: EquipmentSlot, item: Option<Item>) {
        match slot {
            EquipmentSlot::Weapon => self.weapon = item,
            EquipmentSlot::Armor => self.armor = item,
        }
    }

    pub fn iter_equipped(&self) -> impl Iterator<Item = &Item> {
        [&self.weapon, &self.armor]
            .into_iter()
            .filter_map(|item| item.as_ref())
    }
}

/// Use an inventory item by instance id: equip it, or drink it if it is a
/// potion. Returns false (with a log line) when nothing happened.
pub fn use_item(hero: &mut Hero, item_id: &str, log: &mut GameLog) -> bool {
    let Some(entry) = hero.inventory.find_by_id(item_id) else {
        log.push("Item not found in inventory.");
        return false;
    };
    let item = entry.item.clone();

    if item.equippable {
        equip_item(hero, &item, log)
    } else if item.kind == ItemKind::Potion {
        drink_potion(hero, &item, log)
    } else {
        log.push("Unknown item type.");
        false
    }
}

/// Move an item from the inventory into its equipment slot, displacing any
/// current occupant back into the inventory with its effects reversed.
pub fn equip_item(hero: &mut Hero, item: &Item, log: &mut GameLog) -> bool {
    let Some(slot) = item.kind.slot() else {
        log.push(format!("{} cannot be equipped.", item.name));
        return false;
    };
    let Some(taken) = hero.inventory.take_one(&item.id) else {
        log.push("Item not found in inventory.");
        return false;
    };

    if let Some(previous) = hero.equipment.get(slot).clone() {
        apply_item_effects(hero, &previous, false);
        hero.inventory.add(previous.clone(), 1);
        log.push(format!("Unequipped {}.", previous.name));
    }

    apply_item_effects(hero, &taken, true);
    log.push(format!("Equipped {}.", taken.name));
    true
}

/// Clear an equipment slot, reversing the item's effects and returning it
/// to the inventory.
pub fn unequip_slot(hero: &mut Hero, slot: EquipmentSlot, log: &mut GameLog) -> bool {
    let Some(item) = hero.equipment.get(slot).clone() else {
        return false;
    };
    apply_item_effects(hero, &item, false);
    hero.inventory.add(item.clone(), 1);
    log.push(format!("Unequipped {}.", item.name));
    true
}

/// Consume one potion: health effects heal the hero, clamped to max HP.
fn drink_potion(hero: &mut Hero, item: &Item, log: &mut GameLog) -> bool {
    let Some(consumed) = hero.inventory.take_one(&item.id) else {
        log.push("Item not found in inventory.");
        return false;
    };
    for effect in &consumed.effects {
        if effect.kind == EffectKind::Health {
            hero.hp = (hero.hp + effect.magnitude).min(hero.max_hp);
        }
    }
    log.push(format!("Used {}.", consumed.name));
    true
}

//! Static item catalog.
//!
//! Every template here can appear in the shop and be referenced from a
//! monster loot table by `base_id`.

use super::types::{EffectKind, ItemEffect, ItemKind, ItemTemplate, Rarity};

/// All item templates in shop display order.
pub fn item_catalog() -> Vec<ItemTemplate> {
    vec![
        ItemTemplate {
            base_id: "sw1".to_string(),
            name: "Rusty Sword".to_string(),
            kind: ItemKind::Weapon,
            equippable: true,
            rarity: Rarity::Common,
            effects: vec![ItemEffect::new(EffectKind::Damage, 2)],
            value: 10,
            stackable: true,
        },
        ItemTemplate {
            base_id: "ar1".to_string(),
            name: "Leather Vest".to_string(),
            kind: ItemKind::Armor,
            equippable: true,
            rarity: Rarity::Common,
            effects: vec![ItemEffect::new(EffectKind::Health, 10)],
            value: 20,
            stackable: true,
        },
        ItemTemplate {
            base_id: "pot1".to_string(),
            name: "Minor Health Potion".to_string(),
            kind: ItemKind::Potion,
            equippable: false,
            rarity: Rarity::Common,
            effects: vec![ItemEffect::new(EffectKind::Health, 20)],
            value: 5,
            stackable: true,
        },
        ItemTemplate {
            base_id: "sw2".to_string(),
            name: "Steel Sword".to_string(),
            kind: ItemKind::Weapon,
            equippable: true,
            rarity: Rarity::Common,
            effects: vec![ItemEffect::new(EffectKind::Damage, 5)],
            value: 50,
            stackable: true,
        },
        ItemTemplate {
            base_id: "sw3".to_string(),
            name: "Gold Sword".to_string(),
            kind: ItemKind::Weapon,
            equippable: true,
            rarity: Rarity::Rare,
            effects: vec![ItemEffect::new(EffectKind::Damage, 8)],
            value: 100,
            stackable: true,
        },
        ItemTemplate {
            base_id: "ar2".to_string(),
            name: "Leather Armor".to_string(),
            kind: ItemKind::Armor,
            equippable: true,
            rarity: Rarity::Common,
            effects: vec![ItemEffect::new(EffectKind::Health, 10)],
            value: 30,
            stackable: true,
        },
        ItemTemplate {
            base_id: "ar3".to_string(),
            name: "Chain Mail".to_string(),
            kind: ItemKind::Armor,
            equippable: true,
            rarity: Rarity::Rare,
            effects: vec![ItemEffect::new(EffectKind::Health, 20)],
            value: 80,
            stackable: true,
        },
        ItemTemplate {
            base_id: "pot2".to_string(),
            name: "Health Potion".to_string(),
            kind: ItemKind::Potion,
            equippable: false,
            rarity: Rarity::Common,
            effects: vec![ItemEffect::new(EffectKind::Health, 30)],
            value: 20,
            stackable: true,
        },
    ]
}

/// Look up a template by its stable id.
pub fn find_template(base_id: &str) -> Option<ItemTemplate> {
    item_catalog().into_iter().find(|t| t.base_id == base_id)
}

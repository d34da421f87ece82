use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquipmentSlot {
    Weapon,
    Armor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Weapon,
    Armor,
    Potion,
}

impl ItemKind {
    /// Equipment slot this kind of item occupies, if any.
    pub fn slot(&self) -> Option<EquipmentSlot> {
        match self {
            ItemKind::Weapon => Some(EquipmentSlot::Weapon),
            ItemKind::Armor => Some(EquipmentSlot::Armor),
            ItemKind::Potion => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rarity {
    Common = 0,
    Rare = 1,
    Unique = 2,
    Legendary = 3,
    Godlike = 4,
}

impl Rarity {
    /// Returns the display name for this rarity tier.
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Unique => "Unique",
            Rarity::Legendary => "Legendary",
            Rarity::Godlike => "Godlike",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectKind {
    Damage,
    Health,
    Poison,
    Stun,
}

/// A single stat or status effect carried by an item.
///
/// Effects with a `duration` expire after that many hero actions; effects
/// without one persist until the granting item is unequipped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemEffect {
    pub kind: EffectKind,
    pub magnitude: u32,
    pub duration: Option<u32>,
}

impl ItemEffect {
    pub fn new(kind: EffectKind, magnitude: u32) -> Self {
        Self {
            kind,
            magnitude,
            duration: None,
        }
    }

    pub fn with_duration(kind: EffectKind, magnitude: u32, duration: u32) -> Self {
        Self {
            kind,
            magnitude,
            duration: Some(duration),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Instance id. Stackable items share their template's `base_id`;
    /// non-stackable instances get a fresh unique id.
    pub id: String,
    /// Stable template id shared by all instances of the same item.
    pub base_id: String,
    pub name: String,
    pub kind: ItemKind,
    pub equippable: bool,
    pub rarity: Rarity,
    pub effects: Vec<ItemEffect>,
    /// Gold value in the shop.
    pub value: u32,
    pub stackable: bool,
}

/// An item definition before instantiation: everything but the instance id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemTemplate {
    pub base_id: String,
    pub name: String,
    pub kind: ItemKind,
    pub equippable: bool,
    pub rarity: Rarity,
    pub effects: Vec<ItemEffect>,
    pub value: u32,
    pub stackable: bool,
}

impl ItemTemplate {
    /// Create a concrete item from this template.
    pub fn instantiate(&self) -> Item {
        let id = if self.stackable {
            self.base_id.clone()
        } else {
            Uuid::new_v4().to_string()
        };
        Item {
            id,
            base_id: self.base_id.clone(),
            name: self.name.clone(),
            kind: self.kind,
            equippable: self.equippable,
            rarity: self.rarity,
            effects: self.effects.clone(),
            value: self.value,
            stackable: self.stackable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::data::find_template;

    #[test]
    fn test_stackable_instances_share_id() {
        let template = find_template("pot1").unwrap();
        let a = template.instantiate();
        let b = template.instantiate();
        assert_eq!(a.id, "pot1");
        assert_eq!(a.id, b.id);
    }

    #[test]
    fn test_non_stackable_instances_get_unique_ids() {
        let template = ItemTemplate {
            base_id: "relic1".to_string(),
            name: "Cracked Relic".to_string(),
            kind: ItemKind::Weapon,
            equippable: true,
            rarity: Rarity::Unique,
            effects: vec![ItemEffect::new(EffectKind::Damage, 12)],
            value: 200,
            stackable: false,
        };
        let a = template.instantiate();
        let b = template.instantiate();
        assert_ne!(a.id, b.id);
        assert_eq!(a.base_id, b.base_id);
    }

    #[test]
    fn test_kind_slot_mapping() {
        assert_eq!(ItemKind::Weapon.slot(), Some(EquipmentSlot::Weapon));
        assert_eq!(ItemKind::Armor.slot(), Some(EquipmentSlot::Armor));
        assert_eq!(ItemKind::Potion.slot(), None);
    }

    #[test]
    fn test_rarity_ordering() {
        assert!(Rarity::Common < Rarity::Rare);
        assert!(Rarity::Rare < Rarity::Unique);
        assert!(Rarity::Unique < Rarity::Legendary);
        assert!(Rarity::Legendary < Rarity::Godlike);
    }
}

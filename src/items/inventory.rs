//! Hero inventory: stackable quantities and unique instances.

use super::types::Item;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryEntry {
    pub item: Item,
    pub quantity: u32,
}

/// Inventory invariant: every entry has quantity > 0; stackable items occupy
/// exactly one entry per `base_id`; non-stackable items occupy one entry per
/// instance with quantity 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Inventory {
    entries: Vec<InventoryEntry>,
}

impl Inventory {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn entries(&self) -> &[InventoryEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total item count across all entries (stack quantities included).
    pub fn total_count(&self) -> u32 {
        self.entries.iter().map(|e| e.quantity).sum()
    }

    pub fn count_of(&self, base_id: &str) -> u32 {
        self.entries
            .iter()
            .filter(|e| e.item.base_id == base_id)
            .map(|e| e.quantity)
            .sum()
    }

    /// Add items. Stackable items merge into the existing entry for their
    /// `base_id`; non-stackable items get their own entry, one call per
    /// instance.
    pub fn add(&mut self, item: Item, quantity: u32) {
        if quantity == 0 {
            return;
        }
        if item.stackable {
            if let Some(entry) = self
                .entries
                .iter_mut()
                .find(|e| e.item.base_id == item.base_id)
            {
                entry.quantity += quantity;
                return;
            }
            self.entries.push(InventoryEntry { item, quantity });
        } else {
            self.entries.push(InventoryEntry { item, quantity: 1 });
        }
    }

    pub fn find_by_id(&self, item_id: &str) -> Option<&InventoryEntry> {
        self.entries.iter().find(|e| e.item.id == item_id)
    }

    /// Remove one unit by instance id, pruning the entry at zero quantity.
    /// Returns the removed item.
    pub fn take_one(&mut self, item_id: &str) -> Option<Item> {
        let index = self.entries.iter().position(|e| e.item.id == item_id)?;
        let item = self.entries[index].item.clone();
        self.entries[index].quantity -= 1;
        if self.entries[index].quantity == 0 {
            self.entries.remove(index);
        }
        Some(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::data::find_template;
    use crate::items::types::{EffectKind, ItemEffect, ItemKind, ItemTemplate, Rarity};

    fn unique_template() -> ItemTemplate {
        ItemTemplate {
            base_id: "relic1".to_string(),
            name: "Cracked Relic".to_string(),
            kind: ItemKind::Weapon,
            equippable: true,
            rarity: Rarity::Unique,
            effects: vec![ItemEffect::new(EffectKind::Damage, 12)],
            value: 200,
            stackable: false,
        }
    }

    #[test]
    fn test_stackable_items_merge() {
        let mut inv = Inventory::new();
        let potion = find_template("pot1").unwrap();
        inv.add(potion.instantiate(), 2);
        inv.add(potion.instantiate(), 3);
        assert_eq!(inv.entries().len(), 1);
        assert_eq!(inv.total_count(), 5);
        assert_eq!(inv.count_of("pot1"), 5);
    }

    #[test]
    fn test_non_stackable_items_get_own_entries() {
        let mut inv = Inventory::new();
        let template = unique_template();
        inv.add(template.instantiate(), 1);
        inv.add(template.instantiate(), 1);
        assert_eq!(inv.entries().len(), 2);
        assert_eq!(inv.total_count(), 2);
        assert_ne!(inv.entries()[0].item.id, inv.entries()[1].item.id);
    }

    #[test]
    fn test_take_one_prunes_empty_entries() {
        let mut inv = Inventory::new();
        let potion = find_template("pot1").unwrap();
        inv.add(potion.instantiate(), 1);

        let taken = inv.take_one("pot1").unwrap();
        assert_eq!(taken.base_id, "pot1");
        assert!(inv.is_empty());
        assert!(inv.take_one("pot1").is_none());
    }

    #[test]
    fn test_take_one_decrements_stack() {
        let mut inv = Inventory::new();
        let potion = find_template("pot2").unwrap();
        inv.add(potion.instantiate(), 3);
        inv.take_one("pot2").unwrap();
        assert_eq!(inv.count_of("pot2"), 2);
        assert_eq!(inv.entries().len(), 1);
    }

    #[test]
    fn test_add_zero_quantity_is_noop() {
        let mut inv = Inventory::new();
        let potion = find_template("pot1").unwrap();
        inv.add(potion.instantiate(), 0);
        assert!(inv.is_empty());
    }
}

//! Items: templates, instances, inventory, equipment, and the shop.

pub mod data;
pub mod equipment;
pub mod inventory;
pub mod shop;
pub mod types;

pub use equipment::Equipment;
pub use inventory::{Inventory, InventoryEntry};
pub use types::{EffectKind, EquipmentSlot, Item, ItemEffect, ItemKind, ItemTemplate, Rarity};

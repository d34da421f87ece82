//! Shop purchases.

use super::types::ItemTemplate;
use crate::character::Hero;
use crate::log::GameLog;

/// Buy one instance of a template. Insufficient gold leaves the hero
/// untouched and only logs the failure.
pub fn purchase_item(hero: &mut Hero, template: &ItemTemplate, log: &mut GameLog) -> bool {
    if hero.gold < template.value {
        log.push(format!("Not enough gold to buy {}.", template.name));
        return false;
    }

    hero.gold -= template.value;
    hero.inventory.add(template.instantiate(), 1);
    log.push(format!(
        "Bought {} for {} gold!",
        template.name, template.value
    ));
    true
}

//! Equipment wear, breakage, and repair pricing.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, ItemDef};
use crate::constants::REPAIR_COST_FACTOR;
use crate::error::{GameError, GameResult};
use crate::player::equipment::EquipSlot;
use crate::player::inventory::ItemInstance;
use crate::player::stats::recalculate_stats;
use crate::player::Player;

/// Where the item being repaired lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepairTarget {
    Inventory(usize),
    Equipment(EquipSlot),
}

/// Wears the instance down by `amount` uses, clamping at zero. Returns true
/// exactly when this call broke the item. Items without durability never
/// wear.
pub fn consume_durability(instance: &mut ItemInstance, amount: u32) -> bool {
    match instance.durability {
        Some(current) if current > 0 => {
            let next = current.saturating_sub(amount);
            instance.durability = Some(next);
            next == 0
        }
        _ => false,
    }
}

/// Gold cost to restore the instance to full durability: repairing from
/// empty costs half the item's value, scaled by the missing fraction, with
/// a floor of 1. `None` when the item has no durability or is already full.
pub fn repair_cost(def: &ItemDef, instance: &ItemInstance) -> Option<u64> {
    let max = def.max_durability?;
    let current = instance.durability.unwrap_or(max);
    let missing = max.checked_sub(current)?;
    if missing == 0 {
        return None;
    }
    let cost = (missing as f64 * (def.value as f64 / max as f64) * REPAIR_COST_FACTOR).ceil();
    Some((cost as u64).max(1))
}

/// Restores the targeted item to full durability, charging the repair cost.
/// Rejects when the item cannot be repaired, needs no repair, or gold is
/// insufficient. Returns the log message and the gold spent.
pub fn repair(
    catalog: &Catalog,
    player: &mut Player,
    target: RepairTarget,
) -> GameResult<(String, u64)> {
    let instance = match target {
        RepairTarget::Inventory(index) => player.inventory.get(index),
        RepairTarget::Equipment(slot) => player.equipment.get(slot).as_ref(),
    }
    .ok_or_else(|| GameError::validation("Item not found"))?;

    let def = catalog.item_or_fallback(&instance.item_id)?;
    let cost = repair_cost(def, instance)
        .ok_or_else(|| GameError::validation("Nothing to repair"))?;

    if player.gold < cost {
        return Err(GameError::validation(format!(
            "Not enough gold! Need {cost} G."
        )));
    }

    player.gold -= cost;
    let max = def.max_durability;
    let name = def.name;
    let instance = match target {
        RepairTarget::Inventory(index) => player.inventory.get_mut(index),
        RepairTarget::Equipment(slot) => player.equipment.get_mut(slot).as_mut(),
    }
    .expect("target checked above");
    instance.durability = max;

    recalculate_stats(catalog, player);
    Ok((format!("Repaired {name} for {cost} G."), cost))
}

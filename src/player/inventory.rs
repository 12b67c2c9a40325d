//! Item instances and inventory manipulation: stacking, splitting,
//! equipping, and consumption.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::{Catalog, ConsumableEffect, ItemDef, ItemType};
use crate::constants::MATERIAL_STACK_MAX;
use crate::error::{GameError, GameResult};
use crate::player::equipment::EquipSlot;
use crate::player::stats::recalculate_stats;
use crate::player::Player;

/// A concrete, owned copy of a catalog item. Material stacks share one
/// instance; everything else is one instance per unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemInstance {
    pub item_id: String,
    pub instance_id: Uuid,
    pub quantity: u32,
    pub durability: Option<u32>,
}

impl ItemInstance {
    pub fn new(item_id: &str, quantity: u32, durability: Option<u32>) -> Self {
        Self {
            item_id: item_id.to_string(),
            instance_id: Uuid::new_v4(),
            quantity,
            durability,
        }
    }

    /// A broken item stays equipped but contributes nothing.
    pub fn is_broken(&self) -> bool {
        self.durability == Some(0)
    }
}

/// Adds `quantity` units of an item to the inventory. Materials merge into
/// existing same-id stacks up to the 64-unit cap before opening new stacks;
/// everything else gets one instance per unit, with durability initialized
/// to the definition's maximum.
pub fn grant_item(player: &mut Player, def: &ItemDef, quantity: u32) {
    if def.item_type == ItemType::Material {
        let mut remaining = quantity;
        if let Some(stack) = player
            .inventory
            .iter_mut()
            .find(|i| i.item_id == def.id && i.quantity < MATERIAL_STACK_MAX)
        {
            let space = MATERIAL_STACK_MAX - stack.quantity;
            let add = space.min(remaining);
            stack.quantity += add;
            remaining -= add;
        }
        while remaining > 0 {
            let count = remaining.min(MATERIAL_STACK_MAX);
            player.inventory.push(ItemInstance::new(def.id, count, None));
            remaining -= count;
        }
    } else {
        for _ in 0..quantity {
            player
                .inventory
                .push(ItemInstance::new(def.id, 1, def.max_durability));
        }
    }
}

/// Total units of an item id across inventory stacks.
pub fn count_in_inventory(player: &Player, item_id: &str) -> u32 {
    player
        .inventory
        .iter()
        .filter(|i| i.item_id == item_id)
        .map(|i| i.quantity)
        .sum()
}

/// Whether the player owns the item anywhere: inventory or equipment.
pub fn owns_item(player: &Player, item_id: &str) -> bool {
    player.inventory.iter().any(|i| i.item_id == item_id) || player.equipment.holds(item_id)
}

/// Removes exactly `amount` units of an item id from the inventory, deleting
/// emptied stacks. Returns false (and removes nothing) when the inventory
/// holds fewer than `amount` units.
pub fn remove_quantity(player: &mut Player, item_id: &str, amount: u32) -> bool {
    if count_in_inventory(player, item_id) < amount {
        return false;
    }
    let mut remaining = amount;
    let mut idx = player.inventory.len();
    while idx > 0 && remaining > 0 {
        idx -= 1;
        if player.inventory[idx].item_id != item_id {
            continue;
        }
        let qty = player.inventory[idx].quantity;
        if qty > remaining {
            player.inventory[idx].quantity -= remaining;
            remaining = 0;
        } else {
            remaining -= qty;
            player.inventory.remove(idx);
        }
    }
    true
}

/// Re-packs all material stacks into as few full stacks as possible.
/// Non-material items are left untouched and keep their relative order.
pub fn stack_inventory(catalog: &Catalog, player: &mut Player) {
    let mut totals: Vec<(String, u32)> = Vec::new();
    let mut rest = Vec::new();

    for item in player.inventory.drain(..) {
        let is_material = catalog
            .item(&item.item_id)
            .map(|d| d.item_type == ItemType::Material)
            .unwrap_or(false);
        if is_material {
            match totals.iter_mut().find(|(id, _)| *id == item.item_id) {
                Some((_, qty)) => *qty += item.quantity,
                None => totals.push((item.item_id, item.quantity)),
            }
        } else {
            rest.push(item);
        }
    }

    for (id, mut qty) in totals {
        while qty > 0 {
            let count = qty.min(MATERIAL_STACK_MAX);
            player.inventory.push(ItemInstance::new(&id, count, None));
            qty -= count;
        }
    }
    player.inventory.extend(rest);
}

/// Splits the stack at `index` in half, appending the new stack. Rejects
/// single items.
pub fn split_stack(player: &mut Player, index: usize) -> GameResult<(u32, u32)> {
    let item = player
        .inventory
        .get(index)
        .ok_or_else(|| GameError::validation("Item not found"))?;
    if item.quantity < 2 {
        return Err(GameError::validation("Cannot split single item"));
    }

    let half = item.quantity / 2;
    let kept = item.quantity - half;

    let mut new_stack = player.inventory[index].clone();
    new_stack.instance_id = Uuid::new_v4();
    new_stack.quantity = half;

    player.inventory[index].quantity = kept;
    player.inventory.push(new_stack);
    Ok((kept, half))
}

/// Moves the item at `index` into its equipment slot, returning any
/// displaced item to the inventory, then refreshes derived stats.
pub fn equip(catalog: &Catalog, player: &mut Player, index: usize) -> GameResult<EquipSlot> {
    let item = player
        .inventory
        .get(index)
        .ok_or_else(|| GameError::validation("Item not found"))?;
    let def = catalog.item_or_fallback(&item.item_id)?;

    let slot = player
        .equipment
        .target_slot(def.item_type)
        .ok_or_else(|| GameError::validation("Cannot equip this item"))?;

    let instance = player.inventory.remove(index);
    if let Some(displaced) = player.equipment.get_mut(slot).take() {
        player.inventory.push(displaced);
    }
    player.equipment.set(slot, Some(instance));

    recalculate_stats(catalog, player);
    Ok(slot)
}

/// Returns the item in `slot` to the inventory and refreshes derived stats.
pub fn unequip(catalog: &Catalog, player: &mut Player, slot: EquipSlot) -> GameResult<()> {
    let item = player
        .equipment
        .get_mut(slot)
        .take()
        .ok_or_else(|| GameError::validation("Slot empty"))?;
    player.inventory.push(item);
    recalculate_stats(catalog, player);
    Ok(())
}

/// Consumes the item at `index`, applying its effect. The instance is
/// destroyed.
pub fn use_item(catalog: &Catalog, player: &mut Player, index: usize) -> GameResult<String> {
    let item = player
        .inventory
        .get(index)
        .ok_or_else(|| GameError::validation("Item not found"))?;
    let def = catalog.item_or_fallback(&item.item_id)?;

    if def.item_type != ItemType::Consumable {
        return Err(GameError::validation("Not usable"));
    }

    let message = match def.effect {
        Some(ConsumableEffect::Heal(amount)) => {
            player.current_hp = (player.current_hp + amount).min(player.max_hp);
            format!("Used {}, healed {} HP.", def.name, amount)
        }
        None => format!("Used {}. Nothing happened.", def.name),
    };

    player.inventory.remove(index);
    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn setup() -> (Catalog, Player) {
        let catalog = Catalog::standard();
        let player = Player::new("Tester");
        (catalog, player)
    }

    #[test]
    fn test_materials_merge_into_stacks() {
        let (catalog, mut player) = setup();
        let wood = catalog.item("mat_wood").unwrap();

        grant_item(&mut player, wood, 10);
        grant_item(&mut player, wood, 20);
        assert_eq!(player.inventory.len(), 1);
        assert_eq!(player.inventory[0].quantity, 30);
    }

    #[test]
    fn test_material_stacks_cap_at_64() {
        let (catalog, mut player) = setup();
        let wood = catalog.item("mat_wood").unwrap();

        grant_item(&mut player, wood, 100);
        assert_eq!(player.inventory.len(), 2);
        assert_eq!(player.inventory[0].quantity, 64);
        assert_eq!(player.inventory[1].quantity, 36);
        assert_eq!(count_in_inventory(&player, "mat_wood"), 100);
    }

    #[test]
    fn test_equipment_gets_individual_instances_with_durability() {
        let (catalog, mut player) = setup();
        let stick = catalog.item("item_stick").unwrap();

        grant_item(&mut player, stick, 2);
        assert_eq!(player.inventory.len(), 2);
        assert_eq!(player.inventory[0].durability, Some(20));
        assert_ne!(
            player.inventory[0].instance_id,
            player.inventory[1].instance_id
        );
    }

    #[test]
    fn test_remove_quantity_deletes_emptied_stacks() {
        let (catalog, mut player) = setup();
        let berry = catalog.item("mat_berry").unwrap();
        grant_item(&mut player, berry, 3);

        assert!(remove_quantity(&mut player, "mat_berry", 3));
        assert!(player.inventory.is_empty());
    }

    #[test]
    fn test_remove_quantity_rejects_shortfall_without_mutation() {
        let (catalog, mut player) = setup();
        let berry = catalog.item("mat_berry").unwrap();
        grant_item(&mut player, berry, 2);

        assert!(!remove_quantity(&mut player, "mat_berry", 3));
        assert_eq!(count_in_inventory(&player, "mat_berry"), 2);
    }

    #[test]
    fn test_stack_inventory_repacks_materials() {
        let (catalog, mut player) = setup();
        // Three fragmented stone stacks plus a sword
        player.inventory.push(ItemInstance::new("mat_stone", 40, None));
        player.inventory.push(ItemInstance::new("item_stick", 1, Some(20)));
        player.inventory.push(ItemInstance::new("mat_stone", 40, None));
        player.inventory.push(ItemInstance::new("mat_stone", 10, None));

        stack_inventory(&catalog, &mut player);

        let stone: Vec<_> = player
            .inventory
            .iter()
            .filter(|i| i.item_id == "mat_stone")
            .collect();
        assert_eq!(stone.len(), 2);
        assert_eq!(stone[0].quantity, 64);
        assert_eq!(stone[1].quantity, 26);
        assert_eq!(count_in_inventory(&player, "item_stick"), 1);
    }

    #[test]
    fn test_split_stack() {
        let (_, mut player) = setup();
        player.inventory.push(ItemInstance::new("mat_wood", 7, None));

        let (kept, split) = split_stack(&mut player, 0).unwrap();
        assert_eq!((kept, split), (4, 3));
        assert_eq!(player.inventory.len(), 2);
        assert_ne!(
            player.inventory[0].instance_id,
            player.inventory[1].instance_id
        );
    }

    #[test]
    fn test_split_rejects_single_item() {
        let (_, mut player) = setup();
        player.inventory.push(ItemInstance::new("mat_wood", 1, None));
        assert!(split_stack(&mut player, 0).is_err());
        assert_eq!(player.inventory[0].quantity, 1);
    }

    #[test]
    fn test_equip_swaps_existing_item_back_to_inventory() {
        let (catalog, mut player) = setup();
        grant_item(&mut player, catalog.item("item_stick").unwrap(), 1);
        grant_item(&mut player, catalog.item("item_rock").unwrap(), 1);

        equip(&catalog, &mut player, 0).unwrap();
        assert_eq!(
            player.equipment.weapon.as_ref().unwrap().item_id,
            "item_stick"
        );
        assert_eq!(player.inventory.len(), 1);

        equip(&catalog, &mut player, 0).unwrap();
        assert_eq!(
            player.equipment.weapon.as_ref().unwrap().item_id,
            "item_rock"
        );
        // The stick came back
        assert_eq!(player.inventory[0].item_id, "item_stick");
    }

    #[test]
    fn test_equip_rejects_materials() {
        let (catalog, mut player) = setup();
        grant_item(&mut player, catalog.item("mat_wood").unwrap(), 1);
        assert!(equip(&catalog, &mut player, 0).is_err());
    }

    #[test]
    fn test_equip_updates_calculated_stats() {
        let (catalog, mut player) = setup();
        recalculate_stats(&catalog, &mut player);
        let base_max = player.calculated_stats.damage_max;

        grant_item(&mut player, catalog.item("item_stick").unwrap(), 1);
        equip(&catalog, &mut player, 0).unwrap();
        // Sturdy Stick: +2 damage
        assert_eq!(player.calculated_stats.damage_max, base_max + 2);

        unequip(&catalog, &mut player, EquipSlot::Weapon).unwrap();
        assert_eq!(player.calculated_stats.damage_max, base_max);
    }

    #[test]
    fn test_use_consumable_heals_and_destroys_instance() {
        let (catalog, mut player) = setup();
        player.current_hp = 50;
        grant_item(&mut player, catalog.item("item_apple").unwrap(), 1);

        let msg = use_item(&catalog, &mut player, 0).unwrap();
        assert!(msg.contains("healed 10 HP"));
        assert_eq!(player.current_hp, 60);
        assert!(player.inventory.is_empty());
    }

    #[test]
    fn test_use_item_rejects_non_consumable() {
        let (catalog, mut player) = setup();
        grant_item(&mut player, catalog.item("item_stick").unwrap(), 1);
        assert!(use_item(&catalog, &mut player, 0).is_err());
        assert_eq!(player.inventory.len(), 1);
    }

    #[test]
    fn test_heal_capped_at_max_hp() {
        let (catalog, mut player) = setup();
        player.current_hp = player.max_hp - 2;
        grant_item(&mut player, catalog.item("item_apple").unwrap(), 1);
        use_item(&catalog, &mut player, 0).unwrap();
        assert_eq!(player.current_hp, player.max_hp);
    }
}

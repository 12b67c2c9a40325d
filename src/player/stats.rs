//! Stat aggregation: base stats plus equipped, non-broken item modifiers.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::constants::{PLAYER_BASE_DAMAGE_MAX, PLAYER_BASE_DAMAGE_MIN};
use crate::player::Player;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    pub damage_min: i32,
    pub damage_max: i32,
    pub defense: i32,
    pub luck: i32,
}

impl StatBlock {
    pub fn base() -> Self {
        Self {
            damage_min: PLAYER_BASE_DAMAGE_MIN,
            damage_max: PLAYER_BASE_DAMAGE_MAX,
            defense: 0,
            luck: 0,
        }
    }
}

/// Recomputes `calculated_stats` and `bonus_stats` from base stats and
/// equipment. Items with zero durability are skipped entirely; an item's
/// `damage` modifier raises both ends of the damage range. Must run after
/// every equip, unequip, break, or repair.
pub fn recalculate_stats(catalog: &Catalog, player: &mut Player) {
    let mut calculated = player.base_stats;
    let mut bonus = StatBlock::default();

    for instance in player.equipment.iter_equipped() {
        if instance.is_broken() {
            continue;
        }
        // Unknown ids contribute nothing rather than failing the recompute
        let Some(def) = catalog.item(&instance.item_id) else {
            continue;
        };
        calculated.damage_min += def.stats.damage;
        calculated.damage_max += def.stats.damage;
        calculated.defense += def.stats.defense;
        calculated.luck += def.stats.luck;

        bonus.damage_min += def.stats.damage;
        bonus.damage_max += def.stats.damage;
        bonus.defense += def.stats.defense;
        bonus.luck += def.stats.luck;
    }

    player.calculated_stats = calculated;
    player.bonus_stats = bonus;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::equipment::EquipSlot;
    use crate::player::inventory::ItemInstance;

    fn setup() -> (Catalog, Player) {
        (Catalog::standard(), Player::new("Tester"))
    }

    #[test]
    fn test_no_equipment_yields_base_stats() {
        let (catalog, mut player) = setup();
        recalculate_stats(&catalog, &mut player);
        assert_eq!(player.calculated_stats, player.base_stats);
        assert_eq!(player.bonus_stats, StatBlock::default());
    }

    #[test]
    fn test_damage_modifier_raises_both_ends() {
        let (catalog, mut player) = setup();
        // Sturdy Stick: damage 2, luck 1
        player.equipment.set(
            EquipSlot::Weapon,
            Some(ItemInstance::new("item_stick", 1, Some(20))),
        );
        recalculate_stats(&catalog, &mut player);

        assert_eq!(
            player.calculated_stats.damage_min,
            player.base_stats.damage_min + 2
        );
        assert_eq!(
            player.calculated_stats.damage_max,
            player.base_stats.damage_max + 2
        );
        assert_eq!(player.calculated_stats.luck, 1);
        assert_eq!(player.bonus_stats.damage_max, 2);
    }

    #[test]
    fn test_multiple_items_accumulate() {
        let (catalog, mut player) = setup();
        // Stick (dmg 2, luck 1) + Tattered Rags (def 1, luck 1)
        player.equipment.set(
            EquipSlot::Weapon,
            Some(ItemInstance::new("item_stick", 1, Some(20))),
        );
        player.equipment.set(
            EquipSlot::Armor,
            Some(ItemInstance::new("item_rags", 1, Some(15))),
        );
        recalculate_stats(&catalog, &mut player);

        assert_eq!(player.calculated_stats.defense, 1);
        assert_eq!(player.calculated_stats.luck, 2);
        assert_eq!(player.bonus_stats.damage_min, 2);
    }

    #[test]
    fn test_broken_item_contributes_nothing() {
        let (catalog, mut player) = setup();
        player.equipment.set(
            EquipSlot::Weapon,
            Some(ItemInstance::new("item_stick", 1, Some(0))),
        );
        recalculate_stats(&catalog, &mut player);
        assert_eq!(player.calculated_stats, player.base_stats);
    }

    #[test]
    fn test_unknown_item_id_is_skipped() {
        let (catalog, mut player) = setup();
        player.equipment.set(
            EquipSlot::Weapon,
            Some(ItemInstance::new("item_gone", 1, None)),
        );
        recalculate_stats(&catalog, &mut player);
        assert_eq!(player.calculated_stats, player.base_stats);
    }
}

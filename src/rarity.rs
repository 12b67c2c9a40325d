//! Weighted rarity selection with a luck modifier.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::{Catalog, EnemyDef, ItemDef, Rarity, RarityWeight};
use crate::constants::LUCK_RARITY_WEIGHT_SCALE;

/// Rolls a rarity from the weighted table. Every non-Common entry has its
/// weight scaled by `1 + luck/10`, truncated to an integer, before the draw;
/// entries are then walked in table order subtracting from a uniform draw
/// over the total. A zero-weight entry (Boss) can never win the walk.
pub fn roll_rarity(table: &[RarityWeight], luck: i32, rng: &mut impl Rng) -> Rarity {
    let scale = 1.0 + luck as f64 * LUCK_RARITY_WEIGHT_SCALE;
    let weights: Vec<(Rarity, f64)> = table
        .iter()
        .map(|entry| {
            let weight = if entry.rarity == Rarity::Common {
                entry.weight as f64
            } else {
                (entry.weight as f64 * scale).floor().max(0.0)
            };
            (entry.rarity, weight)
        })
        .collect();

    let total: f64 = weights.iter().map(|(_, w)| w).sum();
    let mut remaining = rng.gen::<f64>() * total;
    for (rarity, weight) in &weights {
        remaining -= weight;
        if remaining <= 0.0 {
            return *rarity;
        }
    }
    Rarity::Common
}

/// Picks a random non-gacha item of the given rarity, falling back to the
/// Common pool when the rarity has no items, and `None` when even that pool
/// is empty.
pub fn pick_item_of_rarity<'a>(
    catalog: &'a Catalog,
    rarity: Rarity,
    rng: &mut impl Rng,
) -> Option<&'a ItemDef> {
    let pool = catalog.items_by_rarity(rarity, false);
    if let Some(def) = pool.choose(rng) {
        return Some(def);
    }
    catalog
        .items_by_rarity(Rarity::Common, false)
        .choose(rng)
        .copied()
}

/// Luck-adjusted rarity roll followed by an item pick from that pool.
pub fn roll_loot_item<'a>(
    catalog: &'a Catalog,
    luck: i32,
    rng: &mut impl Rng,
) -> Option<&'a ItemDef> {
    let rarity = roll_rarity(&catalog.rarities, luck, rng);
    pick_item_of_rarity(catalog, rarity, rng)
}

/// Picks a random enemy of the given rarity. Rarities with no enemies
/// (Epic and up in the standard tables) fall back to the Common pool, then
/// to the first enemy.
pub fn pick_enemy_of_rarity<'a>(
    catalog: &'a Catalog,
    rarity: Rarity,
    rng: &mut impl Rng,
) -> Option<&'a EnemyDef> {
    let pool = catalog.enemies_by_rarity(rarity);
    if let Some(def) = pool.choose(rng) {
        return Some(def);
    }
    let common = catalog.enemies_by_rarity(Rarity::Common);
    common.choose(rng).copied().or_else(|| catalog.enemies.first())
}

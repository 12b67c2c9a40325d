//! The town shop: marked-up purchases and full-value sales.

use crate::catalog::{Catalog, ItemDef};
use crate::constants::SHOP_MARKUP;
use crate::error::{GameError, GameResult};
use crate::player::inventory::grant_item;
use crate::player::Player;

/// Shop price for an item: its value with the standard markup, rounded up.
pub fn buy_price(def: &ItemDef) -> u64 {
    (def.value as f64 * SHOP_MARKUP).ceil() as u64
}

/// Buys one unit of an item at the marked-up price.
pub fn buy(catalog: &Catalog, player: &mut Player, item_id: &str) -> GameResult<String> {
    let def = catalog
        .item(item_id)
        .ok_or_else(|| GameError::validation("Item not found"))?;

    let price = buy_price(def);
    if player.gold < price {
        return Err(GameError::validation("Not enough gold"));
    }
    player.gold -= price;
    grant_item(player, def, 1);
    Ok(format!("Bought {}", def.name))
}

/// Sells the whole stack at `index` for its catalog value per unit. The
/// instance is destroyed.
pub fn sell(catalog: &Catalog, player: &mut Player, index: usize) -> GameResult<String> {
    let instance = player
        .inventory
        .get(index)
        .ok_or_else(|| GameError::validation("Item not found"))?;
    let def = catalog.item_or_fallback(&instance.item_id)?;

    let proceeds = def.value * instance.quantity as u64;
    player.gold += proceeds;
    player.inventory.remove(index);
    Ok(format!("Sold item for {proceeds} G"))
}

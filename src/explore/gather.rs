//! Timed resource gathering: mining and foraging.

use rand::Rng;

use crate::catalog::Catalog;
use crate::constants::GATHER_COOLDOWN_MS;
use crate::error::{GameError, GameResult};
use crate::player::inventory::{grant_item, owns_item};
use crate::player::{GatherKind, Player};

#[derive(Debug)]
pub struct GatherOutcome {
    pub message: String,
    /// Item ids granted, one per unit.
    pub loot: Vec<String>,
    pub xp: u64,
    pub level_ups: u32,
}

/// Performs one gather of the given type.
///
/// Each type has an independent 60-second cooldown, checked against the
/// caller-supplied clock. Mining additionally requires a pickaxe somewhere
/// on the player. Each gather grants one material off a fixed three-tier
/// table plus a fixed xp amount, then stamps the cooldown.
pub fn gather(
    catalog: &Catalog,
    player: &mut Player,
    kind: GatherKind,
    now_ms: i64,
    rng: &mut impl Rng,
) -> GameResult<GatherOutcome> {
    let last = *player.gathering.get(&kind).unwrap_or(&0);
    let elapsed = now_ms - last;
    if elapsed < GATHER_COOLDOWN_MS {
        let remaining = (GATHER_COOLDOWN_MS - elapsed + 999) / 1000;
        return Err(GameError::validation(format!(
            "Cooldown active: {remaining}s"
        )));
    }

    if kind == GatherKind::Mining && !owns_item(player, "item_pickaxe") {
        return Err(GameError::validation("Requires Iron Pickaxe"));
    }

    let roll = rng.gen::<f64>();
    let (item_id, message, xp) = match kind {
        // 60% stone, 30% iron, 10% gold ore
        GatherKind::Mining => {
            if roll < 0.6 {
                ("mat_stone", "You mined some Stone.", 5)
            } else if roll < 0.9 {
                ("mat_iron_ore", "You found Iron Ore!", 15)
            } else {
                ("mat_gold_ore", "Jackpot! Gold Ore!", 30)
            }
        }
        // 50% berry, 30% wood, 20% mushroom
        GatherKind::Foraging => {
            if roll < 0.5 {
                ("mat_berry", "You gathered Wild Berries.", 5)
            } else if roll < 0.8 {
                ("mat_wood", "You gathered some Wood.", 10)
            } else {
                ("mat_mushroom", "You found a Red Mushroom.", 15)
            }
        }
    };

    let def = catalog.item_or_fallback(item_id)?;
    grant_item(player, def, 1);
    let level_ups = player.grant_xp(catalog, xp);
    player.gathering.insert(kind, now_ms);

    Ok(GatherOutcome {
        message: message.to_string(),
        loot: vec![def.id.to_string()],
        xp,
        level_ups,
    })
}

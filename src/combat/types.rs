use serde::{Deserialize, Serialize};

use crate::catalog::{DifficultyDef, EnemyDef, Rarity};
use crate::constants::ENEMY_LEVEL_DEFAULT;

/// One rolled-independently loot entry carried on an enemy snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LootEntry {
    pub item_id: String,
    pub chance: f64,
    /// Inclusive quantity range; `None` grants exactly one.
    pub quantity: Option<(u32, u32)>,
}

/// A combat-ready copy of an enemy definition with difficulty multipliers
/// baked in and its own mutable hp. Persisted inside the player's combat
/// session so an in-progress fight survives a save/load cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemySnapshot {
    pub id: String,
    pub name: String,
    pub hp: i64,
    pub max_hp: u32,
    pub level: u32,
    pub xp: u64,
    pub gold: u64,
    pub rarity: Rarity,
    pub loot: Vec<LootEntry>,
}

impl EnemySnapshot {
    /// Clones the definition, scaling max hp and xp by the difficulty.
    pub fn spawn(def: &EnemyDef, difficulty: &DifficultyDef) -> Self {
        let m = difficulty.multipliers;
        let max_hp = (def.max_hp as f64 * m.enemy_hp).floor() as u32;
        Self {
            id: def.id.to_string(),
            name: def.name.to_string(),
            hp: max_hp as i64,
            max_hp,
            level: ENEMY_LEVEL_DEFAULT,
            xp: (def.xp as f64 * m.xp).floor() as u64,
            gold: def.gold,
            rarity: def.rarity,
            loot: def
                .loot
                .iter()
                .map(|d| LootEntry {
                    item_id: d.item_id.to_string(),
                    chance: d.chance,
                    quantity: d.quantity,
                })
                .collect(),
        }
    }

    pub fn is_defeated(&self) -> bool {
        self.hp <= 0
    }
}

//! Read-only registry of static game content.
//!
//! Built once at startup and shared by reference into every resolver. The
//! catalog is never mutated after construction, so it is freely `Sync`.

mod data;
pub mod types;

pub use types::*;

use crate::error::{GameError, GameResult};

/// What a lookup does when a referenced id is missing from the content
/// tables. `Substitute` mirrors the historical behavior of falling back to
/// the first entry of the collection; `Strict` surfaces the bad reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackPolicy {
    #[default]
    Substitute,
    Strict,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    pub rarities: Vec<RarityWeight>,
    pub items: Vec<ItemDef>,
    pub enemies: Vec<EnemyDef>,
    pub events: Vec<EventDef>,
    pub encounters: Vec<&'static str>,
    pub worlds: Vec<WorldDef>,
    pub ranks: Vec<RankDef>,
    pub difficulties: Vec<DifficultyDef>,
    pub banners: Vec<GachaBanner>,
    pub quests: Vec<QuestTemplate>,
    fallback: FallbackPolicy,
}

impl Catalog {
    /// Builds the standard content set with the substitute fallback policy.
    pub fn standard() -> Self {
        Self::with_fallback(FallbackPolicy::Substitute)
    }

    pub fn with_fallback(fallback: FallbackPolicy) -> Self {
        Self {
            rarities: data::rarity_table(),
            items: data::items(),
            enemies: data::enemies(),
            events: data::events(),
            encounters: data::encounters(),
            worlds: data::worlds(),
            ranks: data::ranks(),
            difficulties: data::difficulties(),
            banners: data::banners(),
            quests: data::quests(),
            fallback,
        }
    }

    pub fn fallback_policy(&self) -> FallbackPolicy {
        self.fallback
    }

    // Plain lookups: None when the id is unknown.

    pub fn item(&self, id: &str) -> Option<&ItemDef> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn enemy(&self, id: &str) -> Option<&EnemyDef> {
        self.enemies.iter().find(|e| e.id == id)
    }

    pub fn event(&self, id: &str) -> Option<&EventDef> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn world(&self, id: &str) -> Option<&WorldDef> {
        self.worlds.iter().find(|w| w.id == id)
    }

    pub fn difficulty(&self, id: &str) -> Option<&DifficultyDef> {
        self.difficulties.iter().find(|d| d.id == id)
    }

    pub fn banner(&self, id: &str) -> Option<&GachaBanner> {
        self.banners.iter().find(|b| b.id == id)
    }

    pub fn quest(&self, id: &str) -> Option<&QuestTemplate> {
        self.quests.iter().find(|q| q.id == id)
    }

    // Policy-aware lookups used on player-referenced ids, where a stale save
    // or a content edit can leave a dangling reference.

    pub fn item_or_fallback(&self, id: &str) -> GameResult<&ItemDef> {
        self.resolve(self.item(id), &self.items, id, "item")
    }

    pub fn enemy_or_fallback(&self, id: &str) -> GameResult<&EnemyDef> {
        self.resolve(self.enemy(id), &self.enemies, id, "enemy")
    }

    fn resolve<'a, T>(
        &self,
        found: Option<&'a T>,
        all: &'a [T],
        id: &str,
        kind: &str,
    ) -> GameResult<&'a T> {
        match found {
            Some(def) => Ok(def),
            None => match self.fallback {
                FallbackPolicy::Strict => Err(GameError::MissingCatalogId(id.to_string())),
                FallbackPolicy::Substitute => {
                    log::warn!("unknown {kind} id '{id}', substituting first entry");
                    all.first()
                        .ok_or_else(|| GameError::MissingCatalogId(id.to_string()))
                }
            },
        }
    }

    /// Difficulty lookup defaults to Normal when the id is unknown; every
    /// legacy save carries one of the three ids so this only ever triggers
    /// on hand-edited records.
    pub fn difficulty_or_normal(&self, id: &str) -> &DifficultyDef {
        self.difficulty(id)
            .or_else(|| self.difficulty("difficulty_normal"))
            .unwrap_or(&self.difficulties[0])
    }

    /// The highest rank whose level gate the player meets.
    pub fn rank_for_level(&self, level: u32) -> &RankDef {
        self.ranks
            .iter()
            .rev()
            .find(|r| level >= r.min_level)
            .unwrap_or(&self.ranks[0])
    }

    /// Items of a given rarity, filtered on the gacha-exclusive flag.
    pub fn items_by_rarity(&self, rarity: Rarity, gacha_exclusive: bool) -> Vec<&ItemDef> {
        self.items
            .iter()
            .filter(|i| i.rarity == rarity && i.gacha_exclusive == gacha_exclusive)
            .collect()
    }

    pub fn enemies_by_rarity(&self, rarity: Rarity) -> Vec<&EnemyDef> {
        self.enemies.iter().filter(|e| e.rarity == rarity).collect()
    }
}

//! The mutable player record and its progression rules.

pub mod equipment;
pub mod inventory;
pub mod stats;

pub use equipment::{EquipSlot, Equipment};
pub use inventory::ItemInstance;
pub use stats::StatBlock;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::combat::types::EnemySnapshot;
use crate::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GatherKind {
    Mining,
    Foraging,
}

impl GatherKind {
    pub fn name(&self) -> &'static str {
        match self {
            GatherKind::Mining => "mining",
            GatherKind::Foraging => "foraging",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestProgress {
    pub template_id: String,
    pub progress: u32,
    pub is_completed: bool,
    pub is_claimed: bool,
}

impl QuestProgress {
    pub fn fresh(template_id: &str) -> Self {
        Self {
            template_id: template_id.to_string(),
            progress: 0,
            is_completed: false,
            is_claimed: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestLog {
    pub active: Vec<QuestProgress>,
    /// Epoch milliseconds of the last daily generation.
    pub last_generated: i64,
}

/// Combat session attached to the player record. The enemy snapshot carries
/// its own mutable hp so the catalog stays untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CombatSession {
    pub in_combat: bool,
    pub enemy: Option<EnemySnapshot>,
}

impl CombatSession {
    pub fn clear(&mut self) {
        self.in_combat = false;
        self.enemy = None;
    }
}

/// One player's full persistent state. Exclusively owned by the handling
/// request; see the store module for per-player serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    /// Optimistic-concurrency counter, bumped by every successful save.
    pub revision: u64,

    pub level: u32,
    pub xp: u64,
    pub max_xp: u64,
    pub gold: u64,
    pub current_hp: u32,
    pub max_hp: u32,
    pub rank: String,
    pub difficulty: String,

    pub base_stats: StatBlock,
    /// Derived caches, refreshed by `stats::recalculate_stats`.
    pub calculated_stats: StatBlock,
    pub bonus_stats: StatBlock,

    pub equipment: Equipment,
    pub inventory: Vec<ItemInstance>,

    pub pity: u32,
    pub current_world: String,
    pub current_zone: usize,
    /// Highest unlocked zone index per world.
    pub unlocked_zones: HashMap<String, usize>,
    /// Mastery 0-100 keyed by "{world}_{zone}".
    pub zone_mastery: HashMap<String, u32>,

    pub quests: QuestLog,
    /// Last gather timestamp (epoch ms) per gather type.
    pub gathering: HashMap<GatherKind, i64>,

    pub combat: CombatSession,
    /// Event awaiting a choice, if any.
    pub active_event: Option<String>,
}

impl Player {
    pub fn new(name: &str) -> Self {
        let mut unlocked_zones = HashMap::new();
        unlocked_zones.insert("world_green_valley".to_string(), 0);

        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            revision: 0,
            level: 1,
            xp: 0,
            max_xp: PLAYER_BASE_MAX_XP,
            gold: 0,
            current_hp: PLAYER_BASE_HP,
            max_hp: PLAYER_BASE_HP,
            rank: "rank_adventurer".to_string(),
            difficulty: "difficulty_normal".to_string(),
            base_stats: StatBlock::base(),
            calculated_stats: StatBlock::base(),
            bonus_stats: StatBlock::default(),
            equipment: Equipment::new(),
            inventory: Vec::new(),
            pity: 0,
            current_world: "world_green_valley".to_string(),
            current_zone: 0,
            unlocked_zones,
            zone_mastery: HashMap::new(),
            quests: QuestLog::default(),
            gathering: HashMap::new(),
            combat: CombatSession::default(),
            active_event: None,
        }
    }

    /// Mastery map key for the player's current world and zone.
    pub fn mastery_key(&self) -> String {
        format!("{}_{}", self.current_world, self.current_zone)
    }

    pub fn current_mastery(&self) -> u32 {
        *self.zone_mastery.get(&self.mastery_key()).unwrap_or(&0)
    }

    /// Raises mastery for the current zone, capped at 100.
    pub fn add_mastery(&mut self, amount: u32) {
        let key = self.mastery_key();
        let entry = self.zone_mastery.entry(key).or_insert(0);
        *entry = (*entry + amount).min(MASTERY_MAX);
    }

    pub fn reset_mastery(&mut self) {
        let key = self.mastery_key();
        self.zone_mastery.insert(key, 0);
    }

    /// The unlocked zone frontier for the current world.
    pub fn unlocked_frontier(&self) -> usize {
        *self.unlocked_zones.get(&self.current_world).unwrap_or(&0)
    }

    /// Adds xp and processes level-ups: each level consumes `max_xp`, grows
    /// the next threshold by the level multiplier, raises max hp, and fully
    /// heals. The rank is refreshed afterwards. Returns levels gained.
    pub fn grant_xp(&mut self, catalog: &Catalog, amount: u64) -> u32 {
        self.xp += amount;
        self.apply_level_ups(catalog)
    }

    pub fn apply_level_ups(&mut self, catalog: &Catalog) -> u32 {
        let mut levels = 0;
        while self.xp >= self.max_xp {
            self.xp -= self.max_xp;
            self.level += 1;
            self.max_xp = (self.max_xp as f64 * XP_LEVEL_MULTIPLIER).floor() as u64;
            self.max_hp += HP_GAIN_PER_LEVEL;
            self.current_hp = self.max_hp;
            levels += 1;
        }
        if levels > 0 {
            self.update_rank(catalog);
            log::info!("{} reached level {}", self.name, self.level);
        }
        levels
    }

    /// Refreshes the rank to the highest one the current level qualifies
    /// for. Returns true when the rank changed.
    pub fn update_rank(&mut self, catalog: &Catalog) -> bool {
        let rank = catalog.rank_for_level(self.level);
        if self.rank != rank.id {
            self.rank = rank.id.to_string();
            true
        } else {
            false
        }
    }
}

//! Static definition types held by the [`Catalog`](super::Catalog).
//!
//! Everything here is immutable content: definitions reference each other by
//! `&'static str` id and never by pointer, so the catalog can be built once
//! and shared freely.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common = 0,
    Uncommon = 1,
    Rare = 2,
    Epic = 3,
    Legendary = 4,
    /// Boss rarity carries weight 0 in the roll table; boss enemies are only
    /// reachable through the explicit boss-challenge path.
    Boss = 5,
}

impl Rarity {
    /// Returns the display name for this rarity tier.
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
            Rarity::Boss => "Boss",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemType {
    Weapon,
    Armor,
    Head,
    Legs,
    Feet,
    Accessory,
    Tool,
    Consumable,
    Material,
}

impl ItemType {
    /// Whether items of this type can occupy an equipment slot.
    pub fn is_equippable(&self) -> bool {
        !matches!(self, ItemType::Consumable | ItemType::Material)
    }

    /// Whether this type counts as gear for equipment-only gacha pools.
    /// Tools are deliberately excluded: they are utility items, not gear.
    pub fn is_gear(&self) -> bool {
        matches!(
            self,
            ItemType::Weapon
                | ItemType::Armor
                | ItemType::Head
                | ItemType::Legs
                | ItemType::Feet
                | ItemType::Accessory
        )
    }
}

/// Stat modifiers contributed by an equipped item. `damage` raises both ends
/// of the damage range when aggregated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemStats {
    pub damage: i32,
    pub defense: i32,
    pub luck: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsumableEffect {
    Heal(u32),
}

#[derive(Debug, Clone)]
pub struct ItemDef {
    pub id: &'static str,
    pub name: &'static str,
    pub item_type: ItemType,
    pub rarity: Rarity,
    pub value: u64,
    pub stats: ItemStats,
    pub max_durability: Option<u32>,
    pub effect: Option<ConsumableEffect>,
    pub gacha_exclusive: bool,
}

impl ItemDef {
    /// Baseline for struct-update syntax in the content tables.
    pub const DEFAULT: ItemDef = ItemDef {
        id: "",
        name: "",
        item_type: ItemType::Material,
        rarity: Rarity::Common,
        value: 0,
        stats: ItemStats {
            damage: 0,
            defense: 0,
            luck: 0,
        },
        max_durability: None,
        effect: None,
        gacha_exclusive: false,
    };
}

/// One entry of an enemy's loot table, rolled independently on defeat.
#[derive(Debug, Clone, Copy)]
pub struct LootDrop {
    pub item_id: &'static str,
    pub chance: f64,
    /// Inclusive quantity range; `None` means exactly one.
    pub quantity: Option<(u32, u32)>,
}

#[derive(Debug, Clone)]
pub struct EnemyDef {
    pub id: &'static str,
    pub name: &'static str,
    pub max_hp: u32,
    pub xp: u64,
    pub gold: u64,
    pub rarity: Rarity,
    pub loot: Vec<LootDrop>,
}

/// Stats an event requirement or aggregation can reference by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    DamageMin,
    DamageMax,
    Defense,
    Luck,
}

impl StatKind {
    pub fn name(&self) -> &'static str {
        match self {
            StatKind::DamageMin => "min damage",
            StatKind::DamageMax => "max damage",
            StatKind::Defense => "defense",
            StatKind::Luck => "luck",
        }
    }
}

/// Gate on an event choice, checked before the effect resolves.
#[derive(Debug, Clone)]
pub enum Requirement {
    Gold(u64),
    Item {
        id: &'static str,
        name: &'static str,
        consume: bool,
    },
    Stat {
        stat: StatKind,
        amount: i32,
    },
}

/// How an item-granting effect selects what to give.
#[derive(Debug, Clone, Copy)]
pub enum ItemFilter {
    ByRarity(Rarity),
    ById(&'static str),
}

#[derive(Debug, Clone)]
pub enum EffectKind {
    Heal(u32),
    Damage(u32),
    Gold(u64),
    Xp(u64),
    GrantItem(ItemFilter),
    Combat(Rarity),
    Text,
}

/// An event choice's outcome: the effect, its success chance, and what
/// happens instead when the roll fails.
#[derive(Debug, Clone)]
pub struct ChoiceEffect {
    pub kind: EffectKind,
    pub chance: f64,
    pub message: Option<&'static str>,
    pub fail: Option<Box<ChoiceEffect>>,
}

impl ChoiceEffect {
    pub fn new(kind: EffectKind) -> Self {
        Self {
            kind,
            chance: 1.0,
            message: None,
            fail: None,
        }
    }

    pub fn chance(mut self, chance: f64) -> Self {
        self.chance = chance;
        self
    }

    pub fn msg(mut self, message: &'static str) -> Self {
        self.message = Some(message);
        self
    }

    pub fn or_fail(mut self, fail: ChoiceEffect) -> Self {
        self.fail = Some(Box::new(fail));
        self
    }
}

#[derive(Debug, Clone)]
pub struct EventChoice {
    pub id: &'static str,
    pub text: &'static str,
    pub req: Option<Requirement>,
    pub effect: ChoiceEffect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Narrative,
    Gathering,
}

#[derive(Debug, Clone)]
pub struct EventDef {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub kind: EventKind,
    pub choices: Vec<EventChoice>,
}

#[derive(Debug, Clone)]
pub struct ZoneDef {
    pub name: &'static str,
    pub description: &'static str,
    pub min_level: u32,
    pub boss_id: &'static str,
}

#[derive(Debug, Clone)]
pub struct WorldDef {
    pub id: &'static str,
    pub name: &'static str,
    pub min_level: u32,
    pub zones: Vec<ZoneDef>,
}

#[derive(Debug, Clone)]
pub struct RankDef {
    pub id: &'static str,
    pub name: &'static str,
    pub min_level: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct DifficultyMultipliers {
    pub xp: f64,
    pub enemy_hp: f64,
    pub enemy_dmg: f64,
    pub loot_chance: f64,
    pub rare_loot_chance: f64,
}

#[derive(Debug, Clone)]
pub struct DifficultyDef {
    pub id: &'static str,
    pub name: &'static str,
    pub multipliers: DifficultyMultipliers,
}

/// One row of the weighted rarity table, in declared roll order.
#[derive(Debug, Clone, Copy)]
pub struct RarityWeight {
    pub rarity: Rarity,
    pub weight: u32,
}

/// One bucket of a banner's percentage table, in declared walk order.
#[derive(Debug, Clone, Copy)]
pub struct BannerRate {
    pub rarity: Rarity,
    pub percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerPool {
    All,
    Equipment,
}

#[derive(Debug, Clone)]
pub struct GachaBanner {
    pub id: &'static str,
    pub name: &'static str,
    pub cost: u64,
    pub rates: Vec<BannerRate>,
    pub pool: BannerPool,
}

impl GachaBanner {
    /// The best rarity this banner can produce; the pity counter forces and
    /// resets on it.
    pub fn highest_rarity(&self) -> Rarity {
        self.rates
            .iter()
            .map(|r| r.rarity)
            .max()
            .unwrap_or(Rarity::Common)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestKind {
    Hunt,
    Collect,
}

#[derive(Debug, Clone)]
pub struct QuestTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub kind: QuestKind,
    pub target_id: &'static str,
    pub target_name: &'static str,
    pub amount: u32,
    pub reward_gold: u64,
    pub reward_xp: u64,
}

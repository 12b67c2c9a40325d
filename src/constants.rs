// Player baseline
pub const PLAYER_BASE_HP: u32 = 100;
pub const PLAYER_BASE_MAX_XP: u64 = 100;
pub const PLAYER_BASE_DAMAGE_MIN: i32 = 5;
pub const PLAYER_BASE_DAMAGE_MAX: i32 = 10;

// Level curve
pub const XP_LEVEL_MULTIPLIER: f64 = 1.5;
pub const HP_GAIN_PER_LEVEL: u32 = 10;

// Combat tuning
pub const HEAL_COST: u64 = 5;
pub const HEAL_AMOUNT: u32 = 20;
pub const RETALIATE_ROLL_MIN: u32 = 2;
pub const RETALIATE_ROLL_MAX: u32 = 10;
pub const FLEE_BASE_CHANCE: i32 = 50;
pub const FLEE_LUCK_BONUS: i32 = 2;
pub const FLEE_LEVEL_PENALTY: i32 = 5;
pub const FLEE_MIN_CHANCE: i32 = 10;
pub const FLEE_MAX_CHANCE: i32 = 90;
pub const FLEE_FAIL_HP_FRACTION: f64 = 0.1;
pub const ENEMY_LEVEL_DEFAULT: u32 = 1;

// Luck scaling: +10% rare weight and +5% loot chance per point
pub const LUCK_RARITY_WEIGHT_SCALE: f64 = 0.1;
pub const LUCK_LOOT_CHANCE_SCALE: f64 = 0.05;

// Exploration branch thresholds (percent of a d100 roll)
pub const EXPLORE_EVENT_BELOW: f64 = 35.0;
pub const EXPLORE_ENEMY_BELOW: f64 = 75.0;
pub const EXPLORE_ITEM_BASE: f64 = 90.0;
pub const EXPLORE_ITEM_LOOT_BONUS: f64 = 5.0;
pub const GATHERING_EVENT_BIAS: f64 = 0.8;

// Zone mastery
pub const MASTERY_MAX: u32 = 100;
pub const MASTERY_PER_KILL: u32 = 5;
pub const MASTERY_PER_EVENT: u32 = 2;
pub const MASTERY_PER_ITEM: u32 = 3;
pub const MASTERY_PER_TEXT: u32 = 1;

// Gathering
pub const GATHER_COOLDOWN_MS: i64 = 60_000;

// Inventory
pub const MATERIAL_STACK_MAX: u32 = 64;
pub const SHOP_MARKUP: f64 = 1.5;

// Gacha
pub const PITY_THRESHOLD: u32 = 50;

// Durability: repairing from 0 to full costs half the item's value
pub const REPAIR_COST_FACTOR: f64 = 0.5;

// Daily quests
pub const DAILY_QUEST_COUNT: usize = 3;

// Save system constants
pub const SAVE_MAGIC: u64 = 0x4752_4E56_414C_4500; // "GRNVALE\0" in hex
pub const SAVE_FORMAT_VERSION: u16 = 1;

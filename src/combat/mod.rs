//! Combat: enemy snapshots and turn resolution.

pub mod resolver;
pub mod types;

pub use resolver::{attack, enter_combat, flee, heal, AttackOutcome, FleeOutcome};
pub use types::{EnemySnapshot, LootEntry};

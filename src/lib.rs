//! Greenvale - Browser RPG Simulation Core
//!
//! The deterministic-given-a-seed game engine behind a browser RPG: stat
//! aggregation, weighted rarity rolls, turn-based combat, exploration
//! events, gacha pulls with pity, daily quests, zone mastery, and equipment
//! durability. Transport, UI, and account management live elsewhere; this
//! crate takes a player record plus an action and produces the next player
//! record plus a result descriptor.
//!
//! Every resolver takes the read-only [`catalog::Catalog`] by reference and
//! an injected `rand::Rng`, so outcomes are reproducible under a seeded RNG.

pub mod catalog;
pub mod combat;
pub mod constants;
pub mod durability;
pub mod error;
pub mod explore;
pub mod gacha;
pub mod player;
pub mod quests;
pub mod rarity;
pub mod shop;
pub mod simulator;
pub mod store;

pub use catalog::Catalog;
pub use error::{GameError, GameResult};
pub use player::Player;

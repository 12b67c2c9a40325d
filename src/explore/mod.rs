//! Exploration: the wander roll, boss challenges, and zone travel.

pub mod events;
pub mod gather;

pub use events::{resolve_event_choice, EventResolution};
pub use gather::{gather, GatherOutcome};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::{Catalog, EventKind, Rarity};
use crate::combat::resolver::enter_combat;
use crate::combat::EnemySnapshot;
use crate::constants::*;
use crate::error::{GameError, GameResult};
use crate::player::inventory::grant_item;
use crate::player::Player;
use crate::rarity::{pick_enemy_of_rarity, roll_loot_item, roll_rarity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExploreAction {
    #[default]
    Wander,
    Boss,
}

/// What an explore action produced, for the caller to render.
#[derive(Debug)]
pub enum ExploreOutcome {
    Encounter {
        enemy: EnemySnapshot,
        is_boss: bool,
    },
    Event {
        event_id: String,
        title: String,
    },
    ItemFound {
        item_id: String,
        name: String,
        rarity: Rarity,
    },
    Text(String),
}

/// Resolves one explore action in the player's current zone.
///
/// A `Boss` action requires full mastery and a configured boss. A `Wander`
/// rolls a d100 over the four branches: choice event, enemy encounter, item
/// find, flavor text. Each branch nudges zone mastery.
pub fn explore(
    catalog: &Catalog,
    player: &mut Player,
    action: ExploreAction,
    rng: &mut impl Rng,
) -> GameResult<ExploreOutcome> {
    if player.combat.in_combat {
        return Err(GameError::validation("You are busy with an enemy!"));
    }

    let world = catalog.world(&player.current_world);
    let zone = world.and_then(|w| w.zones.get(player.current_zone));

    if let Some(world) = world {
        if player.level < world.min_level {
            return Err(GameError::validation(format!(
                "Level {} required.",
                world.min_level
            )));
        }
    }
    if let Some(zone) = zone {
        if player.level < zone.min_level {
            return Err(GameError::validation(format!(
                "Level {} required for this zone.",
                zone.min_level
            )));
        }
    }

    if action == ExploreAction::Boss {
        return challenge_boss(catalog, player, rng);
    }

    let difficulty = catalog.difficulty_or_normal(&player.difficulty);
    let roll = rng.gen::<f64>() * 100.0;

    if roll < EXPLORE_EVENT_BELOW {
        let event = pick_event(catalog, rng);
        player.active_event = Some(event.id.to_string());
        player.add_mastery(MASTERY_PER_EVENT);
        Ok(ExploreOutcome::Event {
            event_id: event.id.to_string(),
            title: event.title.to_string(),
        })
    } else if roll < EXPLORE_ENEMY_BELOW {
        let rarity = roll_rarity(&catalog.rarities, 0, rng);
        let def = pick_enemy_of_rarity(catalog, rarity, rng)
            .ok_or_else(|| GameError::validation("The wilds are eerily quiet..."))?
            .clone();
        enter_combat(catalog, player, &def)?;
        let enemy = player.combat.enemy.clone().expect("combat just entered");
        Ok(ExploreOutcome::Encounter {
            enemy,
            is_boss: false,
        })
    } else if roll
        < EXPLORE_ITEM_BASE + EXPLORE_ITEM_LOOT_BONUS * difficulty.multipliers.loot_chance
    {
        let luck = player.calculated_stats.luck;
        match roll_loot_item(catalog, luck, rng) {
            Some(def) => {
                grant_item(player, def, 1);
                player.add_mastery(MASTERY_PER_ITEM);
                Ok(ExploreOutcome::ItemFound {
                    item_id: def.id.to_string(),
                    name: def.name.to_string(),
                    rarity: def.rarity,
                })
            }
            None => Ok(ExploreOutcome::Text(
                "You found nothing of note.".to_string(),
            )),
        }
    } else {
        let text = catalog
            .encounters
            .choose(rng)
            .copied()
            .unwrap_or("The path ahead is clear.");
        player.add_mastery(MASTERY_PER_TEXT);
        Ok(ExploreOutcome::Text(text.to_string()))
    }
}

/// The boss-challenge path: the only way to face a Boss-rarity enemy.
fn challenge_boss(
    catalog: &Catalog,
    player: &mut Player,
    _rng: &mut impl Rng,
) -> GameResult<ExploreOutcome> {
    if player.current_mastery() < MASTERY_MAX {
        return Err(GameError::validation("Zone not mastered yet."));
    }
    let boss_id = catalog
        .world(&player.current_world)
        .and_then(|w| w.zones.get(player.current_zone))
        .map(|z| z.boss_id);
    let def = boss_id
        .and_then(|id| catalog.enemy(id))
        .ok_or_else(|| GameError::validation("No boss found for this zone."))?
        .clone();

    enter_combat(catalog, player, &def)?;
    let enemy = player.combat.enemy.clone().expect("combat just entered");
    log::info!("{} challenges {}", player.name, def.name);
    Ok(ExploreOutcome::Encounter {
        enemy,
        is_boss: true,
    })
}

/// Gathering-type events dominate the event branch; narrative events fill
/// the rest, and an empty sub-pool falls back to the full table.
fn pick_event<'a>(catalog: &'a Catalog, rng: &mut impl Rng) -> &'a crate::catalog::EventDef {
    let gathering: Vec<_> = catalog
        .events
        .iter()
        .filter(|e| e.kind == EventKind::Gathering)
        .collect();
    let narrative: Vec<_> = catalog
        .events
        .iter()
        .filter(|e| e.kind == EventKind::Narrative)
        .collect();

    let pool = if rng.gen::<f64>() < GATHERING_EVENT_BIAS && !gathering.is_empty() {
        gathering
    } else if !narrative.is_empty() {
        narrative
    } else {
        catalog.events.iter().collect()
    };
    pool.choose(rng).expect("catalog events are never empty")
}

/// Moves the player to a zone of the current world. Rejects zones past the
/// unlock frontier.
pub fn set_zone(catalog: &Catalog, player: &mut Player, zone_index: usize) -> GameResult<String> {
    if zone_index > player.unlocked_frontier() {
        return Err(GameError::validation("Zone locked."));
    }
    let exists = catalog
        .world(&player.current_world)
        .map(|w| zone_index < w.zones.len())
        .unwrap_or(false);
    if !exists {
        return Err(GameError::validation("No such zone."));
    }
    player.current_zone = zone_index;
    Ok(format!("Entered Zone {}", zone_index + 1))
}

//! Drives randomized play sessions against the real engine.
//!
//! The runner exercises the same resolver entry points a request handler
//! would call, with a seeded RNG and a simulated clock, so a batch doubles
//! as a balance probe and an end-to-end smoke test.

use chrono::{TimeZone, Utc};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::catalog::{Catalog, Rarity};
use crate::combat::resolver::{attack, flee, heal};
use crate::explore::{explore, gather, resolve_event_choice, ExploreAction, ExploreOutcome};
use crate::gacha;
use crate::player::stats::recalculate_stats;
use crate::player::{GatherKind, Player};
use crate::quests;
use crate::shop;

/// Milliseconds of simulated time per player action.
const ACTION_INTERVAL_MS: i64 = 1_500;

/// Runs the full batch and aggregates a report.
pub fn run_simulation(catalog: &Catalog, config: &SimConfig) -> SimReport {
    let mut runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed + run_idx as u64),
            None => ChaCha8Rng::from_entropy(),
        };
        let stats = simulate_run(catalog, config, &mut rng);

        if config.verbosity >= 1 {
            println!(
                "Run {}/{} - Level {}, Gold {}, Kills {}, Deaths {}, Pulls {}",
                run_idx + 1,
                config.num_runs,
                stats.final_level,
                stats.final_gold,
                stats.kills,
                stats.deaths,
                stats.gacha_pulls,
            );
        }
        runs.push(stats);
    }

    SimReport::from_runs(runs)
}

fn simulate_run(catalog: &Catalog, config: &SimConfig, rng: &mut ChaCha8Rng) -> RunStats {
    let mut player = Player::new("Simulated Hero");
    recalculate_stats(catalog, &mut player);

    let mut stats = RunStats::default();
    let start_ms: i64 = 1_700_000_000_000;

    for action_idx in 0..config.actions_per_run {
        let now_ms = start_ms + action_idx as i64 * ACTION_INTERVAL_MS;
        let now = Utc.timestamp_millis_opt(now_ms).unwrap();
        quests::generate_daily(catalog, &mut player, now, rng);

        if player.active_event.is_some() {
            answer_event(catalog, &mut player, &mut stats, rng);
        } else if player.combat.in_combat {
            fight_turn(catalog, &mut player, &mut stats, rng);
        } else {
            idle_turn(catalog, &mut player, &mut stats, now_ms, rng);
        }
    }

    stats.final_level = player.level;
    stats.final_gold = player.gold;
    stats.zones_unlocked = player.unlocked_frontier() as u32;
    stats
}

fn answer_event(catalog: &Catalog, player: &mut Player, stats: &mut RunStats, rng: &mut ChaCha8Rng) {
    let Some(event) = player
        .active_event
        .as_deref()
        .and_then(|id| catalog.event(id))
    else {
        player.active_event = None;
        return;
    };
    let choice_idx = rng.gen_range(0..event.choices.len());
    let choice_id = event.choices[choice_idx].id;
    match resolve_event_choice(catalog, player, choice_id, rng) {
        Ok(_) => stats.events_resolved += 1,
        // Unmet requirement: walk away from the event instead
        Err(_) => player.active_event = None,
    }
}

fn fight_turn(catalog: &Catalog, player: &mut Player, stats: &mut RunStats, rng: &mut ChaCha8Rng) {
    let low_hp = player.current_hp < player.max_hp / 4;
    let facing_boss = player
        .combat
        .enemy
        .as_ref()
        .map(|e| e.rarity == Rarity::Boss)
        .unwrap_or(false);

    if low_hp && heal(player).is_ok() {
        return;
    }
    if low_hp && !facing_boss && rng.gen::<f64>() < 0.5 {
        if let Ok(outcome) = flee(player, rng) {
            if outcome.success {
                stats.flees += 1;
                return;
            }
        }
        return;
    }

    if let Ok(outcome) = attack(catalog, player, rng) {
        if outcome.victory {
            stats.kills += 1;
            if facing_boss {
                stats.boss_kills += 1;
            }
            stats.items_looted += outcome.loot.len() as u64;
        }
        if outcome.defeat {
            stats.deaths += 1;
            // Respawn at full health before the next action
            player.current_hp = player.max_hp;
        }
    }
}

fn idle_turn(
    catalog: &Catalog,
    player: &mut Player,
    stats: &mut RunStats,
    now_ms: i64,
    rng: &mut ChaCha8Rng,
) {
    // Keep a pickaxe around once affordable so mining stays reachable
    if !crate::player::inventory::owns_item(player, "item_pickaxe") && player.gold >= 100 {
        let _ = shop::buy(catalog, player, "item_pickaxe");
    }
    // Chase the unlock frontier once the level gate allows it
    let frontier = player.unlocked_frontier();
    if player.current_zone < frontier {
        let gate_met = catalog
            .world(&player.current_world)
            .and_then(|w| w.zones.get(frontier))
            .map(|z| player.level >= z.min_level)
            .unwrap_or(false);
        if gate_met {
            let _ = crate::explore::set_zone(catalog, player, frontier);
        }
    }

    let roll = rng.gen::<f64>();
    if roll < 0.08 {
        for index in 0..player.quests.active.len() {
            if quests::claim(catalog, player, index).is_ok() {
                stats.quests_claimed += 1;
            }
        }
    } else if roll < 0.18 {
        let kind = if rng.gen::<bool>() {
            GatherKind::Mining
        } else {
            GatherKind::Foraging
        };
        if gather(catalog, player, kind, now_ms, rng).is_ok() {
            stats.gathers += 1;
        }
    } else if roll < 0.26 && player.gold >= 50 {
        if let Ok(pulled) = gacha::pull(catalog, player, "banner_standard", 1, rng) {
            stats.gacha_pulls += pulled.len() as u64;
            stats.legendaries += pulled
                .iter()
                .filter(|d| d.rarity == Rarity::Legendary)
                .count() as u64;
        }
    } else if roll < 0.32 {
        try_equip_something(catalog, player);
    } else {
        let action = if player.current_mastery() >= 100 {
            ExploreAction::Boss
        } else {
            ExploreAction::Wander
        };
        match explore(catalog, player, action, rng) {
            Ok(ExploreOutcome::ItemFound { .. }) => stats.items_found += 1,
            Ok(ExploreOutcome::Encounter { is_boss, .. }) => {
                if is_boss {
                    stats.boss_challenges += 1;
                }
            }
            Ok(_) | Err(_) => {}
        }
    }
}

fn try_equip_something(catalog: &Catalog, player: &mut Player) {
    let candidate = player.inventory.iter().position(|i| {
        catalog
            .item(&i.item_id)
            .map(|d| d.item_type.is_equippable())
            .unwrap_or(false)
    });
    if let Some(index) = candidate {
        let _ = crate::player::inventory::equip(catalog, player, index);
    }
}

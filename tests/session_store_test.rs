//! Store and session integration tests
//!
//! Runs real engine actions through the session manager against both
//! stores, and round-trips a richly populated player through the on-disk
//! record format.

use greenvale::catalog::Catalog;
use greenvale::combat::resolver::{attack, enter_combat};
use greenvale::explore::{explore, ExploreAction};
use greenvale::player::equipment::EquipSlot;
use greenvale::player::inventory::ItemInstance;
use greenvale::player::stats::recalculate_stats;
use greenvale::player::{GatherKind, Player};
use greenvale::store::{FileStore, MemoryStore, PlayerStore, SessionManager};
use greenvale::GameError;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn populated_player(catalog: &Catalog) -> Player {
    let mut player = Player::new("Persistent Hero");
    player.gold = 1234;
    player.pity = 17;
    player.zone_mastery.insert("world_green_valley_0".to_string(), 64);
    player.gathering.insert(GatherKind::Mining, 555_000);
    player.equipment.set(
        EquipSlot::Weapon,
        Some(ItemInstance::new("item_shortsword", 1, Some(33))),
    );
    player.inventory.push(ItemInstance::new("mat_wood", 40, None));
    recalculate_stats(catalog, &mut player);
    player
}

#[test]
fn file_store_roundtrips_full_player_state() {
    let catalog = Catalog::standard();
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::at(dir.path().to_path_buf()).unwrap();

    let mut player = populated_player(&catalog);
    // Mid-fight save: the combat session must survive the trip
    let wolf = catalog.enemy("enemy_wolf").unwrap().clone();
    enter_combat(&catalog, &mut player, &wolf).unwrap();

    store.save(&mut player).unwrap();
    let loaded = store.load(&player.id).unwrap();

    assert_eq!(loaded, player);
    assert!(loaded.combat.in_combat);
    assert_eq!(loaded.combat.enemy.as_ref().unwrap().id, "enemy_wolf");
    assert_eq!(loaded.current_mastery(), 64);
}

#[test]
fn session_manager_runs_engine_actions_end_to_end() {
    let catalog = Catalog::standard();
    let sessions = SessionManager::new(MemoryStore::new());

    let mut player = Player::new("Session Hero");
    recalculate_stats(&catalog, &mut player);
    let id = sessions.register(player).unwrap();

    // Action 1: wander (may start combat or an event)
    sessions
        .with_player(&id, |player| {
            let mut rng = ChaCha8Rng::seed_from_u64(11);
            explore(&catalog, player, ExploreAction::Wander, &mut rng)?;
            Ok(())
        })
        .unwrap();

    // Action 2: if a fight started, attack once
    sessions
        .with_player(&id, |player| {
            if player.combat.in_combat {
                let mut rng = ChaCha8Rng::seed_from_u64(12);
                attack(&catalog, player, &mut rng)?;
            }
            Ok(())
        })
        .unwrap();

    // Revision advanced once per persisted action (register + 2 actions)
    let revision = sessions.with_player(&id, |p| Ok(p.revision)).unwrap();
    assert_eq!(revision, 3);
}

#[test]
fn rejected_action_leaves_stored_state_untouched() {
    let sessions = SessionManager::new(MemoryStore::new());
    let id = sessions.register(Player::new("Session Hero")).unwrap();

    // heal with zero gold: a validation rejection
    let result = sessions.with_player(&id, |player| {
        greenvale::combat::resolver::heal(player).map(|_| ())
    });
    assert!(matches!(result, Err(GameError::Validation(_))));

    let (gold, revision) = sessions
        .with_player(&id, |p| Ok((p.gold, p.revision)))
        .unwrap();
    assert_eq!(gold, 0);
    // The failed action never saved: only the register bump is visible
    assert_eq!(revision, 1);
}

#[test]
fn stale_writer_gets_a_conflict() {
    let store = MemoryStore::new();
    let mut player = Player::new("Racer");
    store.save(&mut player).unwrap();

    let mut fresh = store.load(&player.id).unwrap();
    let mut stale = store.load(&player.id).unwrap();

    fresh.gold = 10;
    store.save(&mut fresh).unwrap();

    stale.gold = 99;
    match store.save(&mut stale).unwrap_err() {
        GameError::StateConflict {
            expected, found, ..
        } => {
            assert_eq!(expected, 1);
            assert_eq!(found, 2);
        }
        other => panic!("expected StateConflict, got {other:?}"),
    }
}

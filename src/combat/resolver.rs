//! Turn-based combat resolution: enter, attack, heal, flee.

use rand::Rng;

use crate::catalog::{Catalog, EnemyDef, Rarity};
use crate::combat::types::EnemySnapshot;
use crate::constants::*;
use crate::durability::consume_durability;
use crate::error::{GameError, GameResult};
use crate::player::inventory::grant_item;
use crate::player::stats::recalculate_stats;
use crate::player::Player;
use crate::quests;

/// What a single attack turn produced.
#[derive(Debug, Default)]
pub struct AttackOutcome {
    pub log: Vec<String>,
    pub victory: bool,
    pub defeat: bool,
    /// Item ids dropped on victory, one entry per unit granted.
    pub loot: Vec<String>,
    pub level_ups: u32,
}

#[derive(Debug)]
pub struct FleeOutcome {
    pub success: bool,
    pub message: String,
}

/// Starts a fight against the given enemy, applying the player's difficulty
/// to the snapshot. Rejects when a fight is already running.
pub fn enter_combat(catalog: &Catalog, player: &mut Player, def: &EnemyDef) -> GameResult<()> {
    if player.combat.in_combat {
        return Err(GameError::validation("Already in combat"));
    }
    let difficulty = catalog.difficulty_or_normal(&player.difficulty);
    player.combat.enemy = Some(EnemySnapshot::spawn(def, difficulty));
    player.combat.in_combat = true;
    log::debug!("{} engages {}", player.name, def.name);
    Ok(())
}

/// Resolves one attack turn: the player strikes, the weapon wears, and the
/// enemy either dies (victory path) or retaliates (possible defeat).
pub fn attack(catalog: &Catalog, player: &mut Player, rng: &mut impl Rng) -> GameResult<AttackOutcome> {
    if !player.combat.in_combat || player.combat.enemy.is_none() {
        return Err(GameError::validation("Not in combat"));
    }

    let mut outcome = AttackOutcome::default();
    let stats = player.calculated_stats;

    let low = stats.damage_min.min(stats.damage_max).max(0);
    let high = stats.damage_max.max(0);
    let damage = rng.gen_range(low..=high);

    let enemy = player.combat.enemy.as_mut().expect("checked above");
    enemy.hp -= damage as i64;
    let enemy_name = enemy.name.clone();
    outcome
        .log
        .push(format!("You hit {enemy_name} for {damage} damage."));

    // Weapon wear: one use per swing
    let weapon_broke = player
        .equipment
        .weapon
        .as_mut()
        .map(|weapon| consume_durability(weapon, 1))
        .unwrap_or(false);
    if weapon_broke {
        outcome.log.push("Your weapon has broken!".to_string());
        recalculate_stats(catalog, player);
    }

    let enemy = player.combat.enemy.as_ref().expect("checked above");
    if enemy.is_defeated() {
        let defeated = player.combat.enemy.take().expect("checked above");
        player.combat.clear();
        resolve_victory(catalog, player, &defeated, rng, &mut outcome);
    } else {
        resolve_retaliation(catalog, player, &mut outcome, rng);
    }

    Ok(outcome)
}

fn resolve_victory(
    catalog: &Catalog,
    player: &mut Player,
    enemy: &EnemySnapshot,
    rng: &mut impl Rng,
    outcome: &mut AttackOutcome,
) {
    outcome.victory = true;
    player.xp += enemy.xp;
    player.gold += enemy.gold;
    outcome.log.push(format!(
        "Victory! Gained {} XP and {} Gold.",
        enemy.xp, enemy.gold
    ));

    quests::on_enemy_defeated(catalog, player, &enemy.id, &mut outcome.log);

    if enemy.rarity == Rarity::Boss {
        apply_boss_progression(catalog, player, outcome);
    } else {
        player.add_mastery(MASTERY_PER_KILL);
    }

    outcome.level_ups = player.apply_level_ups(catalog);
    if outcome.level_ups > 0 {
        outcome
            .log
            .push(format!("Level Up! You are now level {}.", player.level));
    }

    roll_loot(catalog, player, enemy, rng, outcome);
}

/// Boss kill: mastery resets so the zone can be farmed again, and the
/// unlock frontier advances when this zone was the frontier and is not the
/// world's final zone.
fn apply_boss_progression(catalog: &Catalog, player: &mut Player, outcome: &mut AttackOutcome) {
    player.reset_mastery();
    outcome
        .log
        .push("Zone Boss Defeated! Mastery reset for replayability.".to_string());

    let Some(world) = catalog.world(&player.current_world) else {
        return;
    };
    let frontier = player.unlocked_frontier();
    if player.current_zone == frontier && player.current_zone + 1 < world.zones.len() {
        player
            .unlocked_zones
            .insert(player.current_world.clone(), frontier + 1);
        outcome.log.push("New Zone Unlocked!".to_string());
        log::info!(
            "{} unlocked zone {} of {}",
            player.name,
            frontier + 1,
            world.name
        );
    }
}

fn roll_loot(
    catalog: &Catalog,
    player: &mut Player,
    enemy: &EnemySnapshot,
    rng: &mut impl Rng,
    outcome: &mut AttackOutcome,
) {
    if enemy.loot.is_empty() {
        return;
    }
    let difficulty = catalog.difficulty_or_normal(&player.difficulty);
    let luck_bonus = 1.0 + player.calculated_stats.luck.max(0) as f64 * LUCK_LOOT_CHANCE_SCALE;

    for drop in &enemy.loot {
        let chance = (drop.chance * difficulty.multipliers.loot_chance * luck_bonus).min(1.0);
        if rng.gen::<f64>() >= chance {
            continue;
        }
        let quantity = match drop.quantity {
            Some((min, max)) => rng.gen_range(min..=max),
            None => 1,
        };
        if let Ok(def) = catalog.item_or_fallback(&drop.item_id) {
            grant_item(player, def, quantity);
            for _ in 0..quantity {
                outcome.loot.push(def.id.to_string());
            }
            outcome
                .log
                .push(format!("Loot: {} x{}!", def.name, quantity));
        }
    }
}

fn resolve_retaliation(
    catalog: &Catalog,
    player: &mut Player,
    outcome: &mut AttackOutcome,
    rng: &mut impl Rng,
) {
    let difficulty = catalog.difficulty_or_normal(&player.difficulty);
    let roll = rng.gen_range(RETALIATE_ROLL_MIN..=RETALIATE_ROLL_MAX);
    let scaled = (roll as f64 * difficulty.multipliers.enemy_dmg).floor() as i64;
    let mitigation = (player.calculated_stats.defense.max(0) / 2) as i64;
    let damage = (scaled - mitigation).max(1) as u32;

    let enemy_name = player
        .combat
        .enemy
        .as_ref()
        .map(|e| e.name.clone())
        .unwrap_or_default();

    player.current_hp = player.current_hp.saturating_sub(damage);
    outcome
        .log
        .push(format!("{enemy_name} hits you for {damage} damage."));

    if player.current_hp == 0 {
        outcome.defeat = true;
        player.combat.clear();
        outcome.log.push("You were defeated.".to_string());
        log::debug!("{} was defeated by {}", player.name, enemy_name);
    }
}

/// Pays gold for a fixed heal. Rejects at full health or when gold is
/// short.
pub fn heal(player: &mut Player) -> GameResult<String> {
    if player.gold < HEAL_COST {
        return Err(GameError::validation("Not enough gold"));
    }
    if player.current_hp >= player.max_hp {
        return Err(GameError::validation("Full health"));
    }
    player.gold -= HEAL_COST;
    player.current_hp = (player.current_hp + HEAL_AMOUNT).min(player.max_hp);
    Ok(format!("Healed for {HEAL_AMOUNT} HP."))
}

/// Attempts to escape the current fight. Success odds scale up with luck
/// and down with the enemy's level, clamped to 10-90%. Failure costs a
/// tenth of max hp but never drops the player below 1.
pub fn flee(player: &mut Player, rng: &mut impl Rng) -> GameResult<FleeOutcome> {
    if !player.combat.in_combat {
        return Err(GameError::validation("Not in combat"));
    }

    let luck = player.calculated_stats.luck;
    let enemy_level = player
        .combat
        .enemy
        .as_ref()
        .map(|e| e.level)
        .unwrap_or(ENEMY_LEVEL_DEFAULT);
    let chance = (FLEE_BASE_CHANCE + FLEE_LUCK_BONUS * luck
        - FLEE_LEVEL_PENALTY * enemy_level as i32)
        .clamp(FLEE_MIN_CHANCE, FLEE_MAX_CHANCE);

    if rng.gen::<f64>() * 100.0 < chance as f64 {
        player.combat.clear();
        Ok(FleeOutcome {
            success: true,
            message: "You fled safely!".to_string(),
        })
    } else {
        let damage = (player.max_hp as f64 * FLEE_FAIL_HP_FRACTION).floor() as u32;
        player.current_hp = player.current_hp.saturating_sub(damage).max(1);
        Ok(FleeOutcome {
            success: false,
            message: format!("Failed to flee! Took {damage} damage."),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn setup() -> (Catalog, Player) {
        let catalog = Catalog::standard();
        let mut player = Player::new("Tester");
        recalculate_stats(&catalog, &mut player);
        (catalog, player)
    }

    fn start_fight(catalog: &Catalog, player: &mut Player, enemy_id: &str) {
        let def = catalog.enemy(enemy_id).unwrap().clone();
        enter_combat(catalog, player, &def).unwrap();
    }

    #[test]
    fn test_enter_combat_rejects_double_entry() {
        let (catalog, mut player) = setup();
        start_fight(&catalog, &mut player, "enemy_slime");
        let slime = catalog.enemy("enemy_slime").unwrap().clone();
        assert!(enter_combat(&catalog, &mut player, &slime).is_err());
    }

    #[test]
    fn test_attack_requires_combat() {
        let (catalog, mut player) = setup();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(attack(&catalog, &mut player, &mut rng).is_err());
    }

    #[test]
    fn test_single_hit_victory_grants_rewards_once() {
        let (catalog, mut player) = setup();
        start_fight(&catalog, &mut player, "enemy_slime");
        // Force a one-shot: enemy at 1 hp, rewards from the snapshot
        let enemy = player.combat.enemy.as_mut().unwrap();
        enemy.hp = 1;
        let (xp, gold) = (enemy.xp, enemy.gold);

        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let outcome = attack(&catalog, &mut player, &mut rng).unwrap();

        assert!(outcome.victory);
        assert!(!outcome.defeat);
        assert_eq!(player.xp, xp);
        assert_eq!(player.gold, gold);
        assert!(!player.combat.in_combat);
        assert!(player.combat.enemy.is_none());
    }

    #[test]
    fn test_victory_raises_mastery() {
        let (catalog, mut player) = setup();
        start_fight(&catalog, &mut player, "enemy_slime");
        player.combat.enemy.as_mut().unwrap().hp = 1;

        let mut rng = ChaCha8Rng::seed_from_u64(1);
        attack(&catalog, &mut player, &mut rng).unwrap();
        assert_eq!(player.current_mastery(), MASTERY_PER_KILL);
    }

    #[test]
    fn test_retaliation_damages_player() {
        let (catalog, mut player) = setup();
        start_fight(&catalog, &mut player, "enemy_golem");

        let hp_before = player.current_hp;
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let outcome = attack(&catalog, &mut player, &mut rng).unwrap();

        assert!(!outcome.victory);
        assert!(player.current_hp < hp_before);
        assert!(player.combat.in_combat);
    }

    #[test]
    fn test_defeat_clamps_hp_and_clears_combat() {
        let (catalog, mut player) = setup();
        start_fight(&catalog, &mut player, "enemy_golem");
        player.current_hp = 1;

        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let outcome = attack(&catalog, &mut player, &mut rng).unwrap();

        assert!(outcome.defeat);
        assert_eq!(player.current_hp, 0);
        assert!(!player.combat.in_combat);
    }

    #[test]
    fn test_retaliation_has_damage_floor_of_one() {
        let (catalog, mut player) = setup();
        // Massive defense: mitigation far exceeds the roll
        player.base_stats.defense = 1000;
        recalculate_stats(&catalog, &mut player);
        start_fight(&catalog, &mut player, "enemy_golem");

        let hp_before = player.current_hp;
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        attack(&catalog, &mut player, &mut rng).unwrap();
        assert_eq!(player.current_hp, hp_before - 1);
    }

    #[test]
    fn test_weapon_durability_decrements_per_attack() {
        use crate::player::equipment::EquipSlot;
        use crate::player::inventory::ItemInstance;

        let (catalog, mut player) = setup();
        player.equipment.set(
            EquipSlot::Weapon,
            Some(ItemInstance::new("item_stick", 1, Some(2))),
        );
        recalculate_stats(&catalog, &mut player);
        start_fight(&catalog, &mut player, "enemy_golem");

        let mut rng = ChaCha8Rng::seed_from_u64(1);
        attack(&catalog, &mut player, &mut rng).unwrap();
        assert_eq!(
            player.equipment.weapon.as_ref().unwrap().durability,
            Some(1)
        );
    }

    #[test]
    fn test_weapon_break_excludes_stats_immediately() {
        use crate::player::equipment::EquipSlot;
        use crate::player::inventory::ItemInstance;

        let (catalog, mut player) = setup();
        player.equipment.set(
            EquipSlot::Weapon,
            Some(ItemInstance::new("item_stick", 1, Some(1))),
        );
        recalculate_stats(&catalog, &mut player);
        assert_eq!(
            player.calculated_stats.damage_max,
            player.base_stats.damage_max + 2
        );
        start_fight(&catalog, &mut player, "enemy_golem");

        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let outcome = attack(&catalog, &mut player, &mut rng).unwrap();

        assert!(outcome.log.iter().any(|l| l.contains("broken")));
        assert_eq!(
            player.equipment.weapon.as_ref().unwrap().durability,
            Some(0)
        );
        // Broken weapon no longer contributes
        assert_eq!(player.calculated_stats.damage_max, player.base_stats.damage_max);
        // It stays equipped
        assert!(player.equipment.weapon.is_some());
    }

    #[test]
    fn test_boss_kill_resets_mastery_and_unlocks_next_zone() {
        let (catalog, mut player) = setup();
        player.add_mastery(100);
        start_fight(&catalog, &mut player, "boss_slime_king");
        player.combat.enemy.as_mut().unwrap().hp = 1;

        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let outcome = attack(&catalog, &mut player, &mut rng).unwrap();

        assert!(outcome.victory);
        assert_eq!(player.current_mastery(), 0);
        assert_eq!(player.unlocked_frontier(), 1);
    }

    #[test]
    fn test_boss_kill_off_frontier_does_not_unlock() {
        let (catalog, mut player) = setup();
        player
            .unlocked_zones
            .insert("world_green_valley".to_string(), 2);
        player.current_zone = 0;
        start_fight(&catalog, &mut player, "boss_slime_king");
        player.combat.enemy.as_mut().unwrap().hp = 1;

        let mut rng = ChaCha8Rng::seed_from_u64(1);
        attack(&catalog, &mut player, &mut rng).unwrap();
        // Frontier already past this zone: unchanged
        assert_eq!(player.unlocked_frontier(), 2);
    }

    #[test]
    fn test_final_zone_boss_does_not_advance_frontier() {
        let (catalog, mut player) = setup();
        player
            .unlocked_zones
            .insert("world_green_valley".to_string(), 2);
        player.current_zone = 2;
        start_fight(&catalog, &mut player, "boss_treant");
        player.combat.enemy.as_mut().unwrap().hp = 1;

        let mut rng = ChaCha8Rng::seed_from_u64(1);
        attack(&catalog, &mut player, &mut rng).unwrap();
        assert_eq!(player.unlocked_frontier(), 2);
    }

    #[test]
    fn test_heal_costs_gold() {
        let (_, mut player) = setup();
        player.gold = 10;
        player.current_hp = 50;

        let msg = heal(&mut player).unwrap();
        assert!(msg.contains("20 HP"));
        assert_eq!(player.gold, 5);
        assert_eq!(player.current_hp, 70);
    }

    #[test]
    fn test_heal_rejects_broke_player_without_mutation() {
        let (_, mut player) = setup();
        player.gold = 0;
        player.current_hp = 50;

        assert!(heal(&mut player).is_err());
        assert_eq!(player.current_hp, 50);
        assert_eq!(player.gold, 0);
    }

    #[test]
    fn test_heal_rejects_full_health() {
        let (_, mut player) = setup();
        player.gold = 100;
        assert!(heal(&mut player).is_err());
        assert_eq!(player.gold, 100);
    }

    #[test]
    fn test_flee_requires_combat() {
        let (_, mut player) = setup();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(flee(&mut player, &mut rng).is_err());
    }

    #[test]
    fn test_flee_failure_floors_hp_at_one() {
        let (catalog, mut player) = setup();
        start_fight(&catalog, &mut player, "enemy_golem");
        player.current_hp = 3;

        let mut rng = ChaCha8Rng::seed_from_u64(1);
        // Run until a failed flee happens; hp never drops below 1
        for _ in 0..20 {
            if !player.combat.in_combat {
                break;
            }
            let outcome = flee(&mut player, &mut rng).unwrap();
            if !outcome.success {
                assert!(player.current_hp >= 1);
            }
        }
    }

    #[test]
    fn test_flee_success_ends_combat() {
        let (catalog, mut player) = setup();
        // Max out luck so the clamped 90% success rate applies
        player.base_stats.luck = 100;
        recalculate_stats(&catalog, &mut player);
        start_fight(&catalog, &mut player, "enemy_slime");

        let mut rng = ChaCha8Rng::seed_from_u64(4);
        for _ in 0..50 {
            if !player.combat.in_combat {
                break;
            }
            flee(&mut player, &mut rng).unwrap();
        }
        assert!(!player.combat.in_combat);
        assert!(player.combat.enemy.is_none());
    }
}

//! Resolution of choice-based exploration events.

use rand::Rng;

use crate::catalog::{Catalog, ChoiceEffect, EffectKind, ItemFilter, Requirement, StatKind};
use crate::combat::resolver::enter_combat;
use crate::combat::EnemySnapshot;
use crate::error::{GameError, GameResult};
use crate::player::inventory::grant_item;
use crate::player::Player;
use crate::rarity::{pick_enemy_of_rarity, pick_item_of_rarity};

/// Result of answering an event choice.
#[derive(Debug)]
pub struct EventResolution {
    pub message: String,
    /// Set when the effect dropped the player into a fight.
    pub triggered_combat: Option<EnemySnapshot>,
    pub level_ups: u32,
}

/// Applies the chosen option of the player's pending event.
///
/// The choice's requirement is validated (and paid) first; the effect then
/// resolves against its success chance, substituting the fail effect on a
/// miss. The pending event is cleared in every successful call.
pub fn resolve_event_choice(
    catalog: &Catalog,
    player: &mut Player,
    choice_id: &str,
    rng: &mut impl Rng,
) -> GameResult<EventResolution> {
    let event_id = player
        .active_event
        .clone()
        .ok_or_else(|| GameError::validation("No active event"))?;

    let Some(event) = catalog.event(&event_id) else {
        // A stale reference from an older content set: drop it
        player.active_event = None;
        return Err(GameError::validation("Invalid event"));
    };

    let choice = event
        .choices
        .iter()
        .find(|c| c.id == choice_id)
        .ok_or_else(|| GameError::validation("Invalid choice"))?;

    if let Some(req) = &choice.req {
        check_and_pay_requirement(player, req)?;
    }

    let failed = rng.gen::<f64>() > choice.effect.chance;
    let fallback_fail;
    let effect: &ChoiceEffect = if failed {
        match &choice.effect.fail {
            Some(fail) => fail.as_ref(),
            None => {
                fallback_fail = ChoiceEffect::new(EffectKind::Text).msg("Nothing happened.");
                &fallback_fail
            }
        }
    } else {
        &choice.effect
    };

    let mut resolution = apply_effect(catalog, player, effect, rng)?;
    if resolution.message.is_empty() {
        resolution.message = choice.text.to_string();
    }

    player.active_event = None;
    Ok(resolution)
}

/// Validates a requirement and applies its cost. Gold is deducted; a
/// consumable item requirement takes one unit from the inventory (equipped
/// copies satisfy the check but are never consumed).
fn check_and_pay_requirement(player: &mut Player, req: &Requirement) -> GameResult<()> {
    match req {
        Requirement::Gold(amount) => {
            if player.gold < *amount {
                return Err(GameError::validation("Not enough gold"));
            }
            player.gold -= amount;
        }
        Requirement::Item { id, name, consume } => {
            let inventory_index = player.inventory.iter().position(|i| i.item_id == *id);
            let equipped = player.equipment.holds(id);
            if inventory_index.is_none() && !equipped {
                return Err(GameError::validation(format!(
                    "Missing required item: {name}"
                )));
            }
            if *consume {
                if let Some(index) = inventory_index {
                    if player.inventory[index].quantity > 1 {
                        player.inventory[index].quantity -= 1;
                    } else {
                        player.inventory.remove(index);
                    }
                }
            }
        }
        Requirement::Stat { stat, amount } => {
            let value = stat_value(player, *stat);
            if value < *amount {
                return Err(GameError::validation(format!(
                    "Requires {amount} {}",
                    stat.name()
                )));
            }
        }
    }
    Ok(())
}

fn stat_value(player: &Player, stat: StatKind) -> i32 {
    let stats = player.calculated_stats;
    match stat {
        StatKind::DamageMin => stats.damage_min,
        StatKind::DamageMax => stats.damage_max,
        StatKind::Defense => stats.defense,
        StatKind::Luck => stats.luck,
    }
}

fn apply_effect(
    catalog: &Catalog,
    player: &mut Player,
    effect: &ChoiceEffect,
    rng: &mut impl Rng,
) -> GameResult<EventResolution> {
    let mut triggered_combat = None;
    let mut level_ups = 0;

    let default_message = match &effect.kind {
        EffectKind::Heal(amount) => {
            player.current_hp = (player.current_hp + amount).min(player.max_hp);
            format!("You healed for {amount} HP.")
        }
        EffectKind::Damage(amount) => {
            player.current_hp = player.current_hp.saturating_sub(*amount);
            format!("You took {amount} damage.")
        }
        EffectKind::Gold(amount) => {
            player.gold += amount;
            format!("You found {amount} Gold.")
        }
        EffectKind::Xp(amount) => {
            level_ups = player.grant_xp(catalog, *amount);
            format!("You gained {amount} XP.")
        }
        EffectKind::GrantItem(filter) => {
            let def = match filter {
                ItemFilter::ByRarity(rarity) => pick_item_of_rarity(catalog, *rarity, rng)
                    .ok_or_else(|| GameError::validation("Nothing to receive"))?,
                ItemFilter::ById(id) => catalog.item_or_fallback(id)?,
            };
            grant_item(player, def, 1);
            format!("You received: {}", def.name)
        }
        EffectKind::Combat(rarity) => {
            let def = pick_enemy_of_rarity(catalog, *rarity, rng)
                .ok_or_else(|| GameError::validation("The wilds are eerily quiet..."))?
                .clone();
            enter_combat(catalog, player, &def)?;
            triggered_combat = player.combat.enemy.clone();
            format!("A {} attacks!", def.name)
        }
        EffectKind::Text => String::new(),
    };

    let message = effect
        .message
        .map(str::to_string)
        .unwrap_or(default_message);

    Ok(EventResolution {
        message,
        triggered_combat,
        level_ups,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::inventory::{count_in_inventory, grant_item};
    use crate::player::stats::recalculate_stats;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn setup(event_id: &str) -> (Catalog, Player, ChaCha8Rng) {
        let catalog = Catalog::standard();
        let mut player = Player::new("Tester");
        recalculate_stats(&catalog, &mut player);
        player.active_event = Some(event_id.to_string());
        (catalog, player, ChaCha8Rng::seed_from_u64(13))
    }

    #[test]
    fn test_no_active_event_rejected() {
        let (catalog, mut player, mut rng) = setup("evt_shrine");
        player.active_event = None;
        assert!(resolve_event_choice(&catalog, &mut player, "pray", &mut rng).is_err());
    }

    #[test]
    fn test_invalid_choice_rejected_and_event_kept() {
        let (catalog, mut player, mut rng) = setup("evt_shrine");
        assert!(resolve_event_choice(&catalog, &mut player, "nope", &mut rng).is_err());
        // A bad choice id is user error; the event stays pending
        assert!(player.active_event.is_some());
    }

    #[test]
    fn test_stale_event_reference_cleared() {
        let (catalog, mut player, mut rng) = setup("evt_removed_long_ago");
        assert!(resolve_event_choice(&catalog, &mut player, "x", &mut rng).is_err());
        assert!(player.active_event.is_none());
    }

    #[test]
    fn test_text_choice_clears_event() {
        let (catalog, mut player, mut rng) = setup("evt_shrine");
        let resolution = resolve_event_choice(&catalog, &mut player, "leave", &mut rng).unwrap();
        assert_eq!(resolution.message, "You walk away respectfully.");
        assert!(player.active_event.is_none());
        assert!(resolution.triggered_combat.is_none());
    }

    #[test]
    fn test_gold_requirement_deducted() {
        // Toll Bridge: pay 25G, sure-thing text effect
        let (catalog, mut player, mut rng) = setup("evt_troll_bridge");
        player.gold = 30;
        let resolution = resolve_event_choice(&catalog, &mut player, "pay", &mut rng).unwrap();
        assert_eq!(player.gold, 5);
        assert!(resolution.message.contains("troll lets you pass"));
    }

    #[test]
    fn test_gold_requirement_rejects_poor_player() {
        let (catalog, mut player, mut rng) = setup("evt_troll_bridge");
        player.gold = 10;
        let err = resolve_event_choice(&catalog, &mut player, "pay", &mut rng).unwrap_err();
        assert!(err.to_string().contains("Not enough gold"));
        assert_eq!(player.gold, 10);
        // Failed requirement leaves the event pending
        assert!(player.active_event.is_some());
    }

    #[test]
    fn test_item_requirement_checks_equipment_too() {
        use crate::player::equipment::EquipSlot;
        use crate::player::inventory::ItemInstance;

        // Vein of Gold: requires a pickaxe, grants 75 gold
        let (catalog, mut player, mut rng) = setup("evt_gold_vein");
        assert!(resolve_event_choice(&catalog, &mut player, "mine", &mut rng).is_err());

        player.active_event = Some("evt_gold_vein".to_string());
        player.equipment.set(
            EquipSlot::Tool1,
            Some(ItemInstance::new("item_pickaxe", 1, None)),
        );
        let resolution = resolve_event_choice(&catalog, &mut player, "mine", &mut rng).unwrap();
        assert_eq!(player.gold, 75);
        assert!(resolution.message.contains("chip away"));
        // Non-consume requirement: pickaxe untouched
        assert!(player.equipment.holds("item_pickaxe"));
    }

    #[test]
    fn test_consumable_item_requirement_takes_one_unit() {
        // Locked Chest: the key is consumed, a Rare item comes out
        let (catalog, mut player, mut rng) = setup("evt_locked_chest");
        grant_item(&mut player, catalog.item("item_key").unwrap(), 1);

        let resolution = resolve_event_choice(&catalog, &mut player, "key", &mut rng).unwrap();
        assert_eq!(count_in_inventory(&player, "item_key"), 0);
        assert!(resolution.message.contains("clicks open"));
        // Something Rare arrived
        assert_eq!(player.inventory.len(), 1);
        assert_eq!(
            catalog.item(&player.inventory[0].item_id).unwrap().rarity,
            crate::catalog::Rarity::Rare
        );
    }

    #[test]
    fn test_stat_requirement() {
        // Locked Chest "pick" needs 5 luck
        let (catalog, mut player, mut rng) = setup("evt_locked_chest");
        let err = resolve_event_choice(&catalog, &mut player, "pick", &mut rng).unwrap_err();
        assert!(err.to_string().contains("luck"));

        player.base_stats.luck = 5;
        recalculate_stats(&catalog, &mut player);
        player.active_event = Some("evt_locked_chest".to_string());
        assert!(resolve_event_choice(&catalog, &mut player, "pick", &mut rng).is_ok());
    }

    #[test]
    fn test_combat_trigger_starts_fight() {
        // Ancient Monolith "destroy" always triggers Rare combat
        let (catalog, mut player, mut rng) = setup("evt_monolith");
        let resolution =
            resolve_event_choice(&catalog, &mut player, "destroy", &mut rng).unwrap();
        assert!(player.combat.in_combat);
        let enemy = resolution.triggered_combat.unwrap();
        assert_eq!(enemy.rarity, crate::catalog::Rarity::Rare);
        assert_eq!(resolution.message, "You awoke something ancient!");
    }

    #[test]
    fn test_chance_effect_applies_success_or_fail() {
        // Shrine "pray": 80% heal 50, else 10 damage. Either way hp moves
        // in a known direction from 60.
        let catalog = Catalog::standard();
        let mut rng = ChaCha8Rng::seed_from_u64(77);
        let mut healed = 0;
        let mut hurt = 0;

        for _ in 0..200 {
            let mut player = Player::new("Tester");
            recalculate_stats(&catalog, &mut player);
            player.current_hp = 60;
            player.active_event = Some("evt_shrine".to_string());

            resolve_event_choice(&catalog, &mut player, "pray", &mut rng).unwrap();
            if player.current_hp > 60 {
                healed += 1;
            } else if player.current_hp < 60 {
                hurt += 1;
            }
        }
        assert!(healed > hurt, "80% heal chance: {healed} heals vs {hurt} hurts");
        assert!(hurt > 0, "fail path never taken in 200 tries");
    }

    #[test]
    fn test_xp_effect_levels_up() {
        // Injured Traveler "help": pay 20G for 100 xp
        let (catalog, mut player, mut rng) = setup("evt_traveler");
        player.gold = 20;
        player.xp = 50;

        let resolution = resolve_event_choice(&catalog, &mut player, "help", &mut rng).unwrap();
        assert_eq!(resolution.level_ups, 1);
        assert_eq!(player.level, 2);
        assert_eq!(player.xp, 50);
    }

    #[test]
    fn test_damage_effect_clamps_at_zero() {
        let catalog = Catalog::standard();
        let mut player = Player::new("Tester");
        recalculate_stats(&catalog, &mut player);
        player.current_hp = 5;

        let effect = ChoiceEffect::new(EffectKind::Damage(50));
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        apply_effect(&catalog, &mut player, &effect, &mut rng).unwrap();
        assert_eq!(player.current_hp, 0);
    }
}

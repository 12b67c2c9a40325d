//! Daily quest generation, hunt progress, and reward claiming.

use chrono::{DateTime, TimeZone, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::{Catalog, QuestKind};
use crate::constants::DAILY_QUEST_COUNT;
use crate::error::{GameError, GameResult};
use crate::player::inventory::{count_in_inventory, remove_quantity};
use crate::player::{Player, QuestProgress};

/// Regenerates the daily quest slate when the calendar day has rolled over
/// since the last generation, or when no quests are active. Picks three
/// distinct templates without replacement and stamps the generation time.
/// Returns true when a new slate was issued.
pub fn generate_daily(
    catalog: &Catalog,
    player: &mut Player,
    now: DateTime<Utc>,
    rng: &mut impl Rng,
) -> bool {
    let last = Utc
        .timestamp_millis_opt(player.quests.last_generated)
        .single()
        .unwrap_or_else(|| Utc.timestamp_millis_opt(0).unwrap());
    let is_new_day = now.date_naive() != last.date_naive();

    if !is_new_day && !player.quests.active.is_empty() {
        return false;
    }

    let mut pool: Vec<&str> = catalog.quests.iter().map(|q| q.id).collect();
    pool.shuffle(rng);
    player.quests.active = pool
        .into_iter()
        .take(DAILY_QUEST_COUNT)
        .map(QuestProgress::fresh)
        .collect();
    player.quests.last_generated = now.timestamp_millis();
    log::debug!("issued {} daily quests to {}", player.quests.active.len(), player.name);
    true
}

/// Advances every active, uncompleted hunt quest targeting the defeated
/// enemy, marking completion at the threshold.
pub fn on_enemy_defeated(
    catalog: &Catalog,
    player: &mut Player,
    enemy_id: &str,
    log: &mut Vec<String>,
) {
    for quest in &mut player.quests.active {
        if quest.is_completed {
            continue;
        }
        let Some(template) = catalog.quest(&quest.template_id) else {
            continue;
        };
        if template.kind != QuestKind::Hunt || template.target_id != enemy_id {
            continue;
        }
        quest.progress = (quest.progress + 1).min(template.amount);
        if quest.progress >= template.amount {
            quest.is_completed = true;
            log.push(format!("Quest Complete: {}!", template.name));
        }
    }
}

/// Claims the quest at `index`. Hunt quests must already be completed;
/// collect quests verify the inventory holds the target amount and deduct
/// exactly that many units. Rewards run through the level-up loop. Claiming
/// is a one-time transition.
pub fn claim(catalog: &Catalog, player: &mut Player, index: usize) -> GameResult<String> {
    let quest = player
        .quests
        .active
        .get(index)
        .ok_or_else(|| GameError::validation("Quest not found"))?;
    if quest.is_claimed {
        return Err(GameError::validation("Already claimed"));
    }
    let template = catalog
        .quest(&quest.template_id)
        .ok_or_else(|| GameError::validation("Invalid quest template"))?;

    match template.kind {
        QuestKind::Hunt => {
            if !quest.is_completed {
                return Err(GameError::validation("Quest not complete"));
            }
        }
        QuestKind::Collect => {
            let held = count_in_inventory(player, template.target_id);
            if held < template.amount {
                return Err(GameError::validation(format!(
                    "Need {} {}",
                    template.amount, template.target_name
                )));
            }
            let removed = remove_quantity(player, template.target_id, template.amount);
            debug_assert!(removed, "count checked above");
            player.quests.active[index].is_completed = true;
        }
    }

    let quest = &mut player.quests.active[index];
    quest.is_claimed = true;

    player.gold += template.reward_gold;
    player.grant_xp(catalog, template.reward_xp);

    Ok(format!(
        "Claimed: {} Gold, {} XP",
        template.reward_gold, template.reward_xp
    ))
}

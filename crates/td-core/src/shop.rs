//! Shop card generation.
//!
//! Rarity weights come from the wave bracket, shifted toward high rarities
//! by tower level, then cards are rolled with bounded retries so a batch
//! never contains duplicates or maxed-out abilities.

use serde::{Deserialize, Serialize};

use crate::ability::{find_def, AbilityDef, AbilityId, OwnedAbility, Rarity};
use crate::consts::*;
use crate::rng::GameRng;
use crate::tower::TowerState;

/// What buying a card does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShopOffer {
    NewAcquisition,
    Upgrade { current_level: u32 },
    Evolution { replaces: AbilityId },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopCard {
    pub ability: AbilityId,
    pub rarity: Rarity,
    pub offer: ShopOffer,
    pub cost: u32,
}

/// The shop reopens after enough waves or enough kills, whichever first.
pub fn should_unlock(wave: u32, kills: u32, last_shop_wave: u32, last_shop_kills: u32) -> bool {
    wave.saturating_sub(last_shop_wave) >= SHOP_UNLOCK_WAVES
        || kills.saturating_sub(last_shop_kills) >= SHOP_UNLOCK_KILLS
}

/// Upgrade cost grows with the level being left behind.
pub fn upgrade_cost(base_cost: u32, current_level: u32) -> u32 {
    base_cost + base_cost * current_level / 2
}

fn bracket_weights(wave: u32) -> [f32; 6] {
    let mut weights = SHOP_WEIGHTS_BY_BRACKET[0].1;
    for (bracket, row) in SHOP_WEIGHTS_BY_BRACKET {
        if wave >= bracket {
            weights = row;
        }
    }
    weights
}

/// [rare, unique, mythic, legend] bonus for a tower level. Past the table
/// the last row keeps growing with diminishing returns, approaching 2x.
fn level_bonus(tower_level: u32) -> [f32; 4] {
    let table_len = LEVEL_SHOP_BONUS.len() as u32;
    let level = tower_level.max(1);
    if level <= table_len {
        LEVEL_SHOP_BONUS[(level - 1) as usize]
    } else {
        let extra = (level - table_len) as i32;
        let scale = 2.0 - 0.9f32.powi(extra);
        let last = LEVEL_SHOP_BONUS[LEVEL_SHOP_BONUS.len() - 1];
        [
            last[0] * scale,
            last[1] * scale,
            last[2] * scale,
            last[3] * scale,
        ]
    }
}

/// Wave bracket weights with the tower-level bonus folded in and the
/// result renormalized.
pub fn adjusted_weights(wave: u32, tower_level: u32) -> [f32; 6] {
    let mut weights = bracket_weights(wave);
    let bonus = level_bonus(tower_level);
    let total: f32 = bonus.iter().sum();
    for (i, b) in bonus.iter().enumerate() {
        weights[i + 2] += b;
    }
    let half = total / 2.0;
    weights[0] = (weights[0] - half).max(0.0);
    weights[1] = (weights[1] - half).max(0.0);

    let sum: f32 = weights.iter().sum();
    if sum > 0.0 {
        for w in &mut weights {
            *w /= sum;
        }
    }
    weights
}

fn roll_rarity(weights: &[f32; 6], rng: &mut GameRng) -> Rarity {
    const ORDER: [Rarity; 6] = [
        Rarity::Normal,
        Rarity::Magic,
        Rarity::Rare,
        Rarity::Unique,
        Rarity::Mythic,
        Rarity::Legend,
    ];
    let idx = rng.weighted_index(weights).unwrap_or(0);
    ORDER[idx.min(5)]
}

fn roll_card(
    weights: &[f32; 6],
    owned: &[OwnedAbility],
    catalog: &[AbilityDef],
    used: &[AbilityId],
    rng: &mut GameRng,
) -> Option<ShopCard> {
    for _ in 0..SHOP_ROLL_RETRIES {
        let rarity = roll_rarity(weights, rng);
        let pool: Vec<&AbilityDef> = catalog.iter().filter(|d| d.rarity == rarity).collect();
        let Some(def) = rng.choose(&pool) else {
            continue;
        };
        if used.contains(&def.id) {
            continue;
        }
        match owned.iter().find(|o| o.id() == def.id) {
            Some(slot) => {
                if slot.level() >= def.max_level {
                    continue;
                }
                return Some(ShopCard {
                    ability: def.id,
                    rarity: def.rarity,
                    offer: ShopOffer::Upgrade { current_level: slot.level() },
                    cost: upgrade_cost(def.base_cost, slot.level()),
                });
            }
            None => {
                return Some(ShopCard {
                    ability: def.id,
                    rarity: def.rarity,
                    offer: ShopOffer::NewAcquisition,
                    cost: def.base_cost,
                });
            }
        }
    }
    None
}

/// Evolution offers available right now: owned, non-fused abilities at
/// evolution level whose successor isn't owned yet.
fn evolution_cards(
    tower: &TowerState,
    catalog: &[AbilityDef],
    evolutions: &[(AbilityId, AbilityId)],
) -> Vec<ShopCard> {
    let mut cards = Vec::new();
    for slot in &tower.abilities {
        if slot.is_fused() || slot.level() < EVOLUTION_LEVEL {
            continue;
        }
        let Some(&(_, target)) = evolutions.iter().find(|(from, _)| *from == slot.id()) else {
            continue;
        };
        if tower.owns(target) {
            continue;
        }
        let Some(def) = find_def(catalog, target) else {
            continue;
        };
        cards.push(ShopCard {
            ability: target,
            rarity: def.rarity,
            offer: ShopOffer::Evolution { replaces: slot.id() },
            cost: def.base_cost,
        });
    }
    cards
}

/// Roll a full shop batch. Evolution offers take up to half the slots
/// first; the remaining slots fill with weighted random cards. Exhausted
/// retries simply yield a shorter batch.
pub fn generate_cards(
    wave: u32,
    tower: &TowerState,
    catalog: &[AbilityDef],
    evolutions: &[(AbilityId, AbilityId)],
    rng: &mut GameRng,
) -> Vec<ShopCard> {
    let weights = adjusted_weights(wave, tower.level);
    let evolution_slots =
        (SHOP_CARD_COUNT as f32 * SHOP_EVOLUTION_SLOT_FRACTION).floor() as usize;
    let mut cards = evolution_cards(tower, catalog, evolutions);
    cards.truncate(evolution_slots);

    let mut used: Vec<AbilityId> = cards.iter().map(|c| c.ability).collect();
    while cards.len() < SHOP_CARD_COUNT {
        let Some(card) = roll_card(&weights, &tower.abilities, catalog, &used, rng) else {
            break;
        };
        used.push(card.ability);
        cards.push(card);
    }
    cards
}

/// The two pre-game selection rounds use fixed low-rarity weights and
/// ignore ownership.
pub fn generate_initial_cards(round: u32, catalog: &[AbilityDef], rng: &mut GameRng) -> Vec<ShopCard> {
    let weights = if round <= 1 { INITIAL_SELECT_1 } else { INITIAL_SELECT_2 };
    let mut cards = Vec::new();
    let mut used: Vec<AbilityId> = Vec::new();
    for _ in 0..SHOP_CARD_COUNT {
        let Some(card) = roll_card(&weights, &[], catalog, &used, rng) else {
            break;
        };
        used.push(card.ability);
        cards.push(card);
    }
    cards
}

/// Boss kills reward a pick from rare-or-better cards only.
pub fn generate_boss_reward_cards(
    wave: u32,
    tower: &TowerState,
    catalog: &[AbilityDef],
    rng: &mut GameRng,
) -> Vec<ShopCard> {
    let mut weights = adjusted_weights(wave, tower.level);
    weights[0] = 0.0;
    weights[1] = 0.0;
    let sum: f32 = weights.iter().sum();
    if sum > 0.0 {
        for w in &mut weights {
            *w /= sum;
        }
    }
    let mut cards = Vec::new();
    let mut used: Vec<AbilityId> = Vec::new();
    for _ in 0..SHOP_CARD_COUNT {
        let Some(card) = roll_card(&weights, &tower.abilities, catalog, &used, rng) else {
            break;
        };
        used.push(card.ability);
        cards.push(card);
    }
    cards
}

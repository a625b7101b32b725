//! Stat aggregation.
//!
//! Folds the tower's baseline, every owned passive ability and the active
//! synergy bonuses into one [`ComputedStats`] snapshot. The snapshot is
//! rebuilt whole on every change and never partially mutated.

use serde::{Deserialize, Serialize};

use crate::ability::{find_def, AbilityDef, AbilityId, EffectKey, OwnedAbility};
use crate::consts::*;

/// Baseline tower stats at a given level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Baseline {
    pub damage: f32,
    pub fire_rate: f32,
    pub range: f32,
}

/// Baseline stats for a tower level. Levels past the table extrapolate
/// linearly, with range capped.
pub fn baseline_for_level(level: u32) -> Baseline {
    let level = level.max(1);
    let last = TOWER_LEVEL_STATS.len() as u32;
    if level <= last {
        let (damage, fire_rate, range) = TOWER_LEVEL_STATS[(level - 1) as usize];
        Baseline { damage, fire_rate, range }
    } else {
        let extra = (level - last) as f32;
        let (damage, fire_rate, range) = TOWER_LEVEL_STATS[(last - 1) as usize];
        Baseline {
            damage: damage + BASELINE_EXTRA_DAMAGE * extra,
            fire_rate: fire_rate + BASELINE_EXTRA_FIRE_RATE * extra,
            range: (range + BASELINE_EXTRA_RANGE * extra).min(BASELINE_RANGE_CAP),
        }
    }
}

/// Snapshot of the tower's effective combat stats.
///
/// `*_percent` fields hold percent points (0-100); `crit_chance`,
/// `slow_percent`, `execute_threshold` and `chain_damage_ratio` are
/// fractions in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputedStats {
    pub damage: f32,
    pub fire_rate: f32,
    pub range: f32,
    pub crit_chance: f32,
    pub crit_damage: f32,
    pub multi_shot: u32,
    pub splash_radius: f32,
    pub chain_count: u32,
    pub chain_damage_ratio: f32,
    pub pierce_count: u32,
    pub burn_dps: f32,
    pub poison_dps: f32,
    pub bleed_dps: f32,
    pub dot_duration: f32,
    pub slow_percent: f32,
    pub slow_duration: f32,
    pub stun_duration: f32,
    pub freeze_duration: f32,
    pub fear_duration: f32,
    pub knockback: f32,
    pub execute_threshold: f32,
    pub gold_bonus_percent: f32,
    pub exp_bonus_percent: f32,
    pub max_enemies_bonus: u32,
    /// Owned abilities that fight as independent orbs rather than folding
    /// into these numbers.
    pub active_orbs: Vec<AbilityId>,
}

impl Default for ComputedStats {
    fn default() -> Self {
        compute_stats(1, &[], &[], &[])
    }
}

/// Running accumulators for the fold.
#[derive(Debug, Default)]
struct Acc {
    flat_damage: f32,
    damage_percent: f32,
    flat_fire_rate: f32,
    fire_rate_percent: f32,
    flat_range: f32,
    range_percent: f32,
    crit_chance: f32,
    crit_damage: f32,
    multi_shot: f32,
    splash_radius: f32,
    chain_count: f32,
    chain_damage_ratio: f32,
    pierce_count: f32,
    burn_dps: f32,
    poison_dps: f32,
    bleed_dps: f32,
    dot_duration: f32,
    slow_percent: f32,
    slow_duration: f32,
    stun_duration: f32,
    freeze_duration: f32,
    fear_duration: f32,
    knockback: f32,
    execute_threshold: f32,
    gold_bonus_percent: f32,
    exp_bonus_percent: f32,
    max_enemies_bonus: f32,
}

impl Acc {
    fn add(&mut self, key: EffectKey, value: f32) {
        use EffectKey::*;
        match key {
            FlatDamage => self.flat_damage += value,
            DamagePercent => self.damage_percent += value,
            FlatFireRate => self.flat_fire_rate += value,
            FireRatePercent => self.fire_rate_percent += value,
            FlatRange => self.flat_range += value,
            RangePercent => self.range_percent += value,
            CritChance => self.crit_chance += value,
            CritDamage => self.crit_damage += value,
            MultiShot => self.multi_shot += value,
            SplashRadius => self.splash_radius += value,
            ChainCount => self.chain_count += value,
            // Best ratio wins; a zero entry leaves the default in place.
            ChainDamageRatio => {
                self.chain_damage_ratio = self.chain_damage_ratio.max(value)
            }
            PierceCount => self.pierce_count += value,
            BurnDps => self.burn_dps += value,
            PoisonDps => self.poison_dps += value,
            BleedDps => self.bleed_dps += value,
            DotDuration => self.dot_duration = self.dot_duration.max(value),
            SlowPercent => self.slow_percent += value,
            SlowDuration => self.slow_duration = self.slow_duration.max(value),
            StunDuration => self.stun_duration += value,
            FreezeDuration => self.freeze_duration += value,
            FearDuration => self.fear_duration += value,
            Knockback => self.knockback += value,
            ExecuteThreshold => self.execute_threshold += value,
            GoldBonusPercent => self.gold_bonus_percent += value,
            ExpBonusPercent => self.exp_bonus_percent += value,
            MaxEnemiesBonus => self.max_enemies_bonus += value,
            // Orb-only keys never fold into tower stats.
            OrbDamage | OrbRange | OrbFireRate | MissileCount | AreaDuration | AreaRadius
            | AreaTicks => {}
        }
    }
}

/// Fold baseline + passives + synergy bonuses into a stat snapshot.
///
/// Flat contributions add; percent contributions add (not compound) and are
/// applied once at the end; counts sum then floor. Active abilities and all
/// fused abilities skip the fold and are listed in `active_orbs`. An ability
/// missing from the catalog contributes nothing.
pub fn compute_stats(
    tower_level: u32,
    owned: &[OwnedAbility],
    catalog: &[AbilityDef],
    synergy_bonuses: &[(EffectKey, f32)],
) -> ComputedStats {
    let base = baseline_for_level(tower_level);
    let mut acc = Acc::default();
    let mut active_orbs = Vec::new();

    for slot in owned {
        match slot {
            OwnedAbility::Fused { primary, .. } => {
                active_orbs.push(*primary);
            }
            OwnedAbility::Simple { id, level } => {
                let Some(def) = find_def(catalog, *id) else {
                    continue;
                };
                if !def.passive {
                    active_orbs.push(*id);
                    continue;
                }
                for (key, formula) in def.effects {
                    acc.add(*key, formula.at_level(*level));
                }
            }
        }
    }

    for (key, value) in synergy_bonuses {
        acc.add(*key, *value);
    }

    let damage = ((base.damage + acc.flat_damage) * (1.0 + acc.damage_percent / 100.0))
        .round()
        .max(MIN_DAMAGE);
    let fire_rate = ((base.fire_rate + acc.flat_fire_rate)
        * (1.0 + acc.fire_rate_percent / 100.0))
        .max(MIN_FIRE_RATE);
    let range =
        ((base.range + acc.flat_range) * (1.0 + acc.range_percent / 100.0)).max(MIN_RANGE);

    ComputedStats {
        damage,
        fire_rate,
        range,
        crit_chance: acc.crit_chance.min(CRIT_CHANCE_CAP),
        crit_damage: BASE_CRIT_DAMAGE + acc.crit_damage,
        multi_shot: acc.multi_shot.max(0.0).floor() as u32,
        splash_radius: acc.splash_radius.max(0.0),
        chain_count: acc.chain_count.max(0.0).floor() as u32,
        chain_damage_ratio: if acc.chain_damage_ratio > 0.0 {
            acc.chain_damage_ratio
        } else {
            DEFAULT_CHAIN_RATIO
        },
        pierce_count: acc.pierce_count.max(0.0).floor() as u32,
        burn_dps: acc.burn_dps,
        poison_dps: acc.poison_dps,
        bleed_dps: acc.bleed_dps,
        dot_duration: if acc.dot_duration > 0.0 {
            acc.dot_duration
        } else {
            DEFAULT_DOT_DURATION
        },
        slow_percent: acc.slow_percent.min(SLOW_PERCENT_CAP),
        slow_duration: if acc.slow_duration > 0.0 {
            acc.slow_duration
        } else {
            DEFAULT_SLOW_DURATION
        },
        stun_duration: acc.stun_duration,
        freeze_duration: acc.freeze_duration,
        fear_duration: acc.fear_duration,
        knockback: acc.knockback,
        execute_threshold: acc.execute_threshold.min(EXECUTE_THRESHOLD_CAP),
        gold_bonus_percent: acc.gold_bonus_percent,
        exp_bonus_percent: acc.exp_bonus_percent,
        max_enemies_bonus: acc.max_enemies_bonus.max(0.0).floor() as u32,
        active_orbs,
    }
}

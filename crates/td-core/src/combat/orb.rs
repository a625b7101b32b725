//! Active orb abilities.
//!
//! An active (non-passive) ability fights as an orb circling the tower with
//! its own damage, range and fire cycle, read from the ability's orb effect
//! keys. A fused ability aggregates every source's orb profile.

use serde::{Deserialize, Serialize};

use crate::ability::{find_def, AbilityDef, AbilityId, EffectKey, OwnedAbility};
use crate::combat::{resolve::resolve_hit, zone::GroundZone, AttackSpec};
use crate::consts::{
    DEFAULT_CHAIN_RATIO, DEFAULT_DOT_DURATION, DEFAULT_SLOW_DURATION, SLOW_PERCENT_CAP,
};
use crate::enemy::{EnemyState, LoopPath};
use crate::stats::{baseline_for_level, ComputedStats};
use crate::events::EventQueue;
use crate::rng::GameRng;
use crate::status::StatusPayload;
use crate::target::{find_multiple_targets, find_target, TargetingStrategy};

const ORBIT_RADIUS: f32 = 80.0;
const ORBIT_SPEED: f32 = 0.5; // radians per second
const FALLBACK_ORB_DAMAGE: f32 = 10.0;
const FALLBACK_ORB_RANGE: f32 = 150.0;
const FALLBACK_ORB_FIRE_RATE: f32 = 1.0;

/// One ability's orb profile at a given level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbSpec {
    pub attack: AttackSpec,
    pub range: f32,
    pub fire_rate: f32,
    /// Extra simultaneous targets beyond the primary.
    pub missile_count: u32,
    /// Lingering zone dropped at the impact, if the ability has one.
    pub zone: Option<ZoneProfile>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneProfile {
    pub radius: f32,
    pub duration: f32,
    pub ticks_per_second: f32,
}

/// Accumulates one source ability's effects into the profile. Damage-like
/// values sum across fused sources; ranges, ratios and durations keep the
/// best.
#[derive(Debug, Default)]
struct OrbAcc {
    damage: f32,
    range: f32,
    fire_rate: f32,
    missile_count: f32,
    splash_radius: f32,
    chain_count: f32,
    chain_ratio: f32,
    pierce_count: f32,
    burn_dps: f32,
    poison_dps: f32,
    bleed_dps: f32,
    dot_duration: f32,
    slow_fraction: f32,
    slow_duration: f32,
    stun: f32,
    freeze: f32,
    fear: f32,
    knockback: f32,
    area_radius: f32,
    area_duration: f32,
    area_ticks: f32,
}

impl OrbAcc {
    fn fold(&mut self, def: &AbilityDef, level: u32) {
        use EffectKey::*;
        self.damage += def.effect(OrbDamage, level);
        self.range = self.range.max(def.effect(OrbRange, level));
        self.fire_rate = self.fire_rate.max(def.effect(OrbFireRate, level));
        self.missile_count += def.effect(MissileCount, level);
        self.splash_radius = self.splash_radius.max(def.effect(SplashRadius, level));
        self.chain_count += def.effect(ChainCount, level);
        self.chain_ratio = self.chain_ratio.max(def.effect(ChainDamageRatio, level));
        self.pierce_count += def.effect(PierceCount, level);
        self.burn_dps += def.effect(BurnDps, level);
        self.poison_dps += def.effect(PoisonDps, level);
        self.bleed_dps += def.effect(BleedDps, level);
        self.dot_duration = self.dot_duration.max(def.effect(DotDuration, level));
        self.slow_fraction = self.slow_fraction.max(def.effect(SlowPercent, level));
        self.slow_duration = self.slow_duration.max(def.effect(SlowDuration, level));
        self.stun = self.stun.max(def.effect(StunDuration, level));
        self.freeze = self.freeze.max(def.effect(FreezeDuration, level));
        self.fear = self.fear.max(def.effect(FearDuration, level));
        self.knockback += def.effect(Knockback, level);
        self.area_radius = self.area_radius.max(def.effect(AreaRadius, level));
        self.area_duration = self.area_duration.max(def.effect(AreaDuration, level));
        self.area_ticks = self.area_ticks.max(def.effect(AreaTicks, level));
    }
}

/// Build the orb profile for an owned active ability, folding the tower's
/// passive bonuses into the attack: damage, range and fire rate scale by
/// the snapshot's ratio over the tower-level baseline, crit and execute
/// come from the snapshot, and DOT/slow/stun/splash/chain/knockback/pierce
/// contributions add to the orb's own. `None` if nothing in the catalog
/// matches (reduced test catalogs).
pub fn build_orb_spec(
    owned: &OwnedAbility,
    catalog: &[AbilityDef],
    tower_level: u32,
    stats: &ComputedStats,
) -> Option<OrbSpec> {
    let mut acc = OrbAcc::default();
    let level = owned.level();
    let mut any = false;
    match owned {
        OwnedAbility::Simple { id, .. } => {
            if let Some(def) = find_def(catalog, *id) {
                acc.fold(def, level);
                any = true;
            }
        }
        OwnedAbility::Fused { sources, .. } => {
            for id in sources {
                if let Some(def) = find_def(catalog, *id) {
                    acc.fold(def, level);
                    any = true;
                }
            }
        }
    }
    if !any {
        return None;
    }

    let bonus = owned.fusion_bonus();
    // Passive multipliers are the snapshot's ratio over the raw baseline
    // for the same tower level; additive passives stack onto the orb's own.
    let base = baseline_for_level(tower_level);
    let damage_mult = stats.damage / base.damage;
    let range_mult = stats.range / base.range;
    let fire_rate_mult = stats.fire_rate / base.fire_rate;

    let dot_duration = if acc.dot_duration > 0.0 { acc.dot_duration } else { DEFAULT_DOT_DURATION };
    let slow_duration =
        if acc.slow_duration > 0.0 { acc.slow_duration } else { DEFAULT_SLOW_DURATION };
    let poison_dps = acc.poison_dps * bonus + stats.poison_dps;
    let burn_dps = acc.burn_dps * bonus + stats.burn_dps;
    let bleed_dps = acc.bleed_dps * bonus + stats.bleed_dps;
    let slow_fraction = (acc.slow_fraction + stats.slow_percent).min(SLOW_PERCENT_CAP);
    let status = StatusPayload {
        slow: (slow_fraction > 0.0).then_some((slow_fraction, slow_duration)),
        poison: (poison_dps > 0.0).then_some((poison_dps, dot_duration)),
        burn: (burn_dps > 0.0).then_some((burn_dps, dot_duration)),
        bleed: (bleed_dps > 0.0).then_some((bleed_dps, dot_duration)),
        stun: acc.stun + stats.stun_duration,
        freeze: acc.freeze,
        fear: acc.fear,
        knockback: acc.knockback + stats.knockback,
    };

    let damage = if acc.damage > 0.0 { acc.damage } else { FALLBACK_ORB_DAMAGE };
    let attack = AttackSpec {
        damage: (damage * bonus * damage_mult).round().max(1.0),
        crit_chance: stats.crit_chance,
        crit_damage: stats.crit_damage,
        execute_threshold: stats.execute_threshold,
        splash_radius: acc.splash_radius + stats.splash_radius,
        chain_count: acc.chain_count.max(0.0).floor() as u32 + stats.chain_count,
        chain_damage_ratio: if acc.chain_ratio > 0.0 { acc.chain_ratio } else { DEFAULT_CHAIN_RATIO },
        pierce_count: acc.pierce_count.max(0.0).floor() as u32 + stats.pierce_count,
        status,
    };

    let zone = (acc.area_radius > 0.0 && acc.area_duration > 0.0).then_some(ZoneProfile {
        radius: acc.area_radius,
        duration: acc.area_duration,
        ticks_per_second: if acc.area_ticks > 0.0 { acc.area_ticks } else { 1.0 },
    });

    let range = if acc.range > 0.0 { acc.range } else { FALLBACK_ORB_RANGE };
    let fire_rate = if acc.fire_rate > 0.0 { acc.fire_rate } else { FALLBACK_ORB_FIRE_RATE };
    Some(OrbSpec {
        attack,
        range: range * range_mult,
        fire_rate: fire_rate * fire_rate_mult,
        missile_count: acc.missile_count.max(0.0).floor() as u32,
        zone,
    })
}

/// A live orb circling the tower.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrbState {
    pub ability: AbilityId,
    pub spec: OrbSpec,
    pub angle: f32,
    pub cooldown: f32,
    pub x: f32,
    pub y: f32,
}

impl OrbState {
    pub fn new(ability: AbilityId, spec: OrbSpec) -> Self {
        Self {
            ability,
            spec,
            angle: 0.0,
            cooldown: 0.0,
            x: 0.0,
            y: 0.0,
        }
    }

    /// Orbit and fire. New ground zones are appended to `zones`.
    #[allow(clippy::too_many_arguments)]
    pub fn tick(
        &mut self,
        dt: f32,
        tower: (f32, f32),
        enemies: &mut [EnemyState],
        path: &LoopPath,
        zones: &mut Vec<GroundZone>,
        rng: &mut GameRng,
        events: &mut EventQueue,
    ) {
        self.angle = (self.angle + ORBIT_SPEED * dt).rem_euclid(std::f32::consts::TAU);
        self.x = tower.0 + ORBIT_RADIUS * self.angle.cos();
        self.y = tower.1 + ORBIT_RADIUS * self.angle.sin();

        self.cooldown -= dt;
        if self.cooldown > 0.0 {
            return;
        }

        let targets = if self.spec.missile_count > 0 {
            find_multiple_targets(
                self.x,
                self.y,
                self.spec.range,
                enemies,
                1 + self.spec.missile_count as usize,
            )
        } else {
            find_target(self.x, self.y, self.spec.range, enemies, TargetingStrategy::Closest)
                .into_iter()
                .collect()
        };
        if targets.is_empty() {
            return;
        }
        self.cooldown = 1.0 / self.spec.fire_rate.max(0.1);

        for target in targets {
            let report = resolve_hit(
                (self.x, self.y),
                target,
                self.spec.range,
                &self.spec.attack,
                enemies,
                path,
                rng,
                events,
            );
            if let (Some(profile), Some(first)) = (self.spec.zone, report.hit.first()) {
                if let Some(e) = enemies.iter().find(|e| e.handle == *first) {
                    zones.push(GroundZone::new(
                        e.x,
                        e.y,
                        profile,
                        self.spec.attack.damage,
                        self.spec.attack.status.clone(),
                    ));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ability::{EffectFormula, Rarity, TagSet};
    use crate::enemy::{EnemyDef, EnemyHandle, EnemyKind};

    const ORB_A: &[(EffectKey, EffectFormula)] = &[
        (EffectKey::OrbDamage, EffectFormula::new(20.0, 5.0)),
        (EffectKey::OrbRange, EffectFormula::flat(150.0)),
        (EffectKey::OrbFireRate, EffectFormula::flat(2.0)),
        (EffectKey::BurnDps, EffectFormula::flat(6.0)),
        (EffectKey::DotDuration, EffectFormula::flat(4.0)),
    ];
    const ORB_B: &[(EffectKey, EffectFormula)] = &[
        (EffectKey::OrbDamage, EffectFormula::flat(10.0)),
        (EffectKey::OrbRange, EffectFormula::flat(200.0)),
        (EffectKey::ChainCount, EffectFormula::flat(2.0)),
    ];

    fn catalog() -> Vec<AbilityDef> {
        vec![
            AbilityDef {
                id: AbilityId::InfernoCore,
                name: "a",
                description: "",
                rarity: Rarity::Unique,
                tags: TagSet::FIRE,
                base_cost: 400,
                max_level: 4,
                passive: false,
                effects: ORB_A,
            },
            AbilityDef {
                id: AbilityId::ChainLightning,
                name: "b",
                description: "",
                rarity: Rarity::Rare,
                tags: TagSet::CHAIN,
                base_cost: 150,
                max_level: 5,
                passive: false,
                effects: ORB_B,
            },
        ]
    }

    #[test]
    fn test_simple_orb_spec() {
        let cat = catalog();
        let owned = OwnedAbility::simple(AbilityId::InfernoCore, 2);
        let spec = build_orb_spec(&owned, &cat, 1, &ComputedStats::default()).unwrap();
        assert_eq!(spec.attack.damage, 25.0);
        assert_eq!(spec.range, 150.0);
        assert_eq!(spec.fire_rate, 2.0);
        assert_eq!(spec.attack.status.burn, Some((6.0, 4.0)));
    }

    #[test]
    fn test_fused_aggregates_and_boosts() {
        let cat = catalog();
        let owned = OwnedAbility::Fused {
            primary: AbilityId::InfernoCore,
            sources: vec![AbilityId::InfernoCore, AbilityId::ChainLightning],
            level: 3,
            bonus: 1.5,
        };
        let spec = build_orb_spec(&owned, &cat, 1, &ComputedStats::default()).unwrap();
        // Damage sums (30 + 10) then x1.5
        assert_eq!(spec.attack.damage, 60.0);
        // Best range wins
        assert_eq!(spec.range, 200.0);
        // Counts carry over
        assert_eq!(spec.attack.chain_count, 2);
        // DOT boosted by the fusion bonus
        assert_eq!(spec.attack.status.burn, Some((9.0, 4.0)));
    }

    #[test]
    fn test_tower_passives_reach_orb_attacks() {
        let cat = catalog();
        let owned = OwnedAbility::simple(AbilityId::InfernoCore, 2);
        let stats = ComputedStats {
            damage: 20.0,  // 2x the level-1 baseline of 10
            range: 300.0,  // 2x the baseline 150
            crit_chance: 0.25,
            crit_damage: 2.0,
            execute_threshold: 0.2,
            poison_dps: 4.0,
            chain_count: 1,
            ..Default::default()
        };
        let spec = build_orb_spec(&owned, &cat, 1, &stats).unwrap();
        // Orb's own 25 damage scaled by the 2x passive multiplier
        assert_eq!(spec.attack.damage, 50.0);
        assert_eq!(spec.range, 300.0);
        assert_eq!(spec.attack.crit_chance, 0.25);
        assert_eq!(spec.attack.crit_damage, 2.0);
        assert_eq!(spec.attack.execute_threshold, 0.2);
        assert_eq!(spec.attack.chain_count, 1);
        // Passive DOT adds alongside the orb's own burn
        assert_eq!(spec.attack.status.poison, Some((4.0, 4.0)));
        assert_eq!(spec.attack.status.burn, Some((6.0, 4.0)));
    }

    #[test]
    fn test_unknown_catalog_is_none() {
        let owned = OwnedAbility::simple(AbilityId::InfernoCore, 1);
        assert!(build_orb_spec(&owned, &[], 1, &ComputedStats::default()).is_none());
    }

    #[test]
    fn test_orb_fires_when_ready() {
        let cat = catalog();
        let owned = OwnedAbility::simple(AbilityId::InfernoCore, 1);
        let spec = build_orb_spec(&owned, &cat, 1, &ComputedStats::default()).unwrap();
        let mut orb = OrbState::new(AbilityId::InfernoCore, spec);
        let path = LoopPath::rect(0.0, 0.0, 200.0, 200.0);
        let def = EnemyDef {
            kind: EnemyKind::Normal,
            name: "t",
            base_hp: 100.0,
            speed: 0.0,
            exp_reward: 4,
            gold_reward: 5,
            armor: 0.0,
            size: 12.0,
        };
        let mut enemies = [EnemyState::spawn(EnemyHandle(1), &def, 1.0, 1.0, &path, 0.0)];
        enemies[0].x = 50.0;
        enemies[0].y = 0.0;
        let mut zones = Vec::new();
        let mut rng = GameRng::new(1);
        let mut events = EventQueue::new();
        orb.tick(0.1, (0.0, 0.0), &mut enemies, &path, &mut zones, &mut rng, &mut events);
        assert!(enemies[0].hp < 100.0);
        assert!(orb.cooldown > 0.0);
    }
}

//! Attack resolution: hit payloads, projectiles, orbiting orbs and
//! lingering ground zones.

mod orb;
mod projectile;
mod resolve;
mod zone;

pub use orb::{build_orb_spec, OrbState};
pub use projectile::{Projectile, ProjectileStatus};
pub use resolve::{resolve_hit, HitReport};
pub use zone::GroundZone;

use serde::{Deserialize, Serialize};

use crate::stats::ComputedStats;
use crate::status::StatusPayload;

/// Everything one attack carries: damage, secondary effects, status
/// payload. Built fresh per shot from the current stat snapshot, so a
/// stats rebuild mid-flight never retroactively changes a projectile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackSpec {
    pub damage: f32,
    pub crit_chance: f32,
    pub crit_damage: f32,
    pub execute_threshold: f32,
    pub splash_radius: f32,
    pub chain_count: u32,
    pub chain_damage_ratio: f32,
    pub pierce_count: u32,
    pub status: StatusPayload,
}

impl AttackSpec {
    /// Plain attack with no secondaries, for tests and basic orbs.
    pub fn simple(damage: f32) -> Self {
        Self {
            damage,
            crit_chance: 0.0,
            crit_damage: 1.5,
            execute_threshold: 0.0,
            splash_radius: 0.0,
            chain_count: 0,
            chain_damage_ratio: 0.7,
            pierce_count: 0,
            status: StatusPayload::default(),
        }
    }
}

/// The tower's main attack, derived from the full stat snapshot.
pub fn attack_spec_from_stats(stats: &ComputedStats) -> AttackSpec {
    let status = StatusPayload {
        slow: (stats.slow_percent > 0.0)
            .then_some((stats.slow_percent, stats.slow_duration)),
        poison: (stats.poison_dps > 0.0).then_some((stats.poison_dps, stats.dot_duration)),
        burn: (stats.burn_dps > 0.0).then_some((stats.burn_dps, stats.dot_duration)),
        bleed: (stats.bleed_dps > 0.0).then_some((stats.bleed_dps, stats.dot_duration)),
        stun: stats.stun_duration,
        freeze: stats.freeze_duration,
        fear: stats.fear_duration,
        knockback: stats.knockback,
    };
    AttackSpec {
        damage: stats.damage,
        crit_chance: stats.crit_chance,
        crit_damage: stats.crit_damage,
        execute_threshold: stats.execute_threshold,
        splash_radius: stats.splash_radius,
        chain_count: stats.chain_count,
        chain_damage_ratio: stats.chain_damage_ratio,
        pierce_count: stats.pierce_count,
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::compute_stats;

    #[test]
    fn test_spec_from_baseline_stats() {
        let stats = compute_stats(1, &[], &[], &[]);
        let spec = attack_spec_from_stats(&stats);
        assert_eq!(spec.damage, 10.0);
        assert_eq!(spec.chain_damage_ratio, 0.7);
        assert!(spec.status.is_empty());
    }
}

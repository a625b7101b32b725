//! Tuning constants shared across the combat core.

/// Maximum number of ability slots on the tower.
pub const MAX_ABILITY_SLOTS: usize = 8;

/// Hard cap on simultaneously alive enemies.
pub const MAX_ENEMIES_ALIVE: usize = 50;

/// Number of cards offered per shop roll.
pub const SHOP_CARD_COUNT: usize = 4;

/// At most this fraction of a shop batch may be evolution offers; the rest
/// always stay available to the weighted rolls.
pub const SHOP_EVOLUTION_SLOT_FRACTION: f32 = 0.5;

/// Minimum ability level required before an ability can evolve.
pub const EVOLUTION_LEVEL: u32 = 5;

/// Cumulative experience required to reach each tower level (index 0 = level 1).
pub const EXP_TABLE: [u32; 10] = [0, 200, 500, 1000, 1800, 3000, 5000, 8000, 13000, 20000];

/// Exp growth factor applied per level beyond the table.
pub const EXP_BEYOND_TABLE_GROWTH: f32 = 1.15;

/// Baseline tower stats per level: (damage, fire_rate, range).
pub const TOWER_LEVEL_STATS: [(f32, f32, f32); 10] = [
    (10.0, 1.0, 150.0),
    (14.0, 1.1, 158.0),
    (18.0, 1.2, 166.0),
    (23.0, 1.3, 174.0),
    (28.0, 1.4, 182.0),
    (34.0, 1.5, 190.0),
    (40.0, 1.6, 198.0),
    (47.0, 1.8, 206.0),
    (55.0, 2.0, 214.0),
    (65.0, 2.2, 225.0),
];

/// Per-level damage gain when extrapolating past the baseline table.
pub const BASELINE_EXTRA_DAMAGE: f32 = 5.0;
/// Per-level fire-rate gain past the table.
pub const BASELINE_EXTRA_FIRE_RATE: f32 = 0.2;
/// Per-level range gain past the table, capped at `BASELINE_RANGE_CAP`.
pub const BASELINE_EXTRA_RANGE: f32 = 5.0;
pub const BASELINE_RANGE_CAP: f32 = 400.0;

/// Base crit damage multiplier before bonuses.
pub const BASE_CRIT_DAMAGE: f32 = 1.5;

// ===== Stat caps and floors =====

pub const CRIT_CHANCE_CAP: f32 = 1.0;
pub const SLOW_PERCENT_CAP: f32 = 0.9;
pub const EXECUTE_THRESHOLD_CAP: f32 = 0.5;
pub const MIN_DAMAGE: f32 = 1.0;
pub const MIN_FIRE_RATE: f32 = 0.1;
pub const MIN_RANGE: f32 = 50.0;

/// Default ratio of damage carried to each subsequent chain hop.
pub const DEFAULT_CHAIN_RATIO: f32 = 0.7;
/// Default duration in seconds for damage-over-time effects.
pub const DEFAULT_DOT_DURATION: f32 = 3.0;
/// Default duration in seconds for slow effects.
pub const DEFAULT_SLOW_DURATION: f32 = 2.0;

/// Search radius for chain-lightning hops.
pub const CHAIN_SEARCH_RADIUS: f32 = 200.0;
/// Collision radius for piercing projectiles.
pub const PIERCE_HIT_RADIUS: f32 = 8.0;
/// Execute kills are dealt as a massive multiple of max HP.
pub const EXECUTE_DAMAGE_FACTOR: f32 = 10.0;

// ===== Wave scaling =====

/// Boss waves occur every this many waves.
pub const BOSS_WAVE_INTERVAL: u32 = 10;

/// Wave where HP/speed scaling switches to the steeper late-game curve.
pub const SCALING_KINK_WAVE: u32 = 20;
pub const HP_GROWTH_EARLY: f32 = 1.062;
pub const HP_GROWTH_LATE: f32 = 1.085;
pub const SPEED_GROWTH_EARLY: f32 = 1.009;
pub const SPEED_GROWTH_LATE: f32 = 1.012;
pub const SPEED_MULT_CAP: f32 = 2.0;

/// Wave numbers where new enemy archetypes start appearing.
pub const FAST_UNLOCK_WAVE: u32 = 6;
pub const TINY_UNLOCK_WAVE: u32 = 11;
pub const TANK_UNLOCK_WAVE: u32 = 16;

/// Fraction of the base enemy count spawned as boss escorts.
pub const BOSS_ESCORT_FRACTION: f32 = 0.6;

/// Seconds over which a wave's spawns are spread.
pub const SPAWN_WINDOW_SECS: f32 = 20.0;
/// Floor on the delay between consecutive spawns.
pub const MIN_SPAWN_INTERVAL_SECS: f32 = 0.4;

// ===== Shop =====

/// Retries when sampling a shop card before giving up on dedup.
pub const SHOP_ROLL_RETRIES: u32 = 50;

/// Gold cost of an ability card by rarity (normal..legend).
pub const RARITY_COSTS: [u32; 6] = [20, 60, 150, 400, 750, 1000];

/// A shop opens every this many waves, or
pub const SHOP_UNLOCK_WAVES: u32 = 5;
/// ...after this many kills since the last shop, whichever comes first.
pub const SHOP_UNLOCK_KILLS: u32 = 30;

/// Rarity weight rows [normal, magic, rare, unique, mythic, legend] by
/// wave bracket (the largest bracket at or below the current wave applies).
pub const SHOP_WEIGHTS_BY_BRACKET: [(u32, [f32; 6]); 5] = [
    (0, [0.40, 0.35, 0.18, 0.06, 0.01, 0.0]),
    (10, [0.40, 0.35, 0.18, 0.06, 0.01, 0.0]),
    (20, [0.25, 0.35, 0.25, 0.12, 0.025, 0.005]),
    (30, [0.15, 0.28, 0.30, 0.18, 0.07, 0.02]),
    (40, [0.08, 0.20, 0.30, 0.22, 0.14, 0.06]),
];

/// Extra [rare, unique, mythic, legend] weight granted per tower level,
/// paid for out of the normal/magic weights.
pub const LEVEL_SHOP_BONUS: [[f32; 4]; 10] = [
    [0.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 0.0],
    [0.02, 0.01, 0.0, 0.0],
    [0.04, 0.02, 0.01, 0.0],
    [0.05, 0.04, 0.02, 0.0],
    [0.06, 0.05, 0.03, 0.01],
    [0.07, 0.07, 0.05, 0.02],
    [0.08, 0.09, 0.07, 0.03],
    [0.10, 0.12, 0.10, 0.05],
];

/// Weight rows for the two initial selection rounds (low rarities only).
pub const INITIAL_SELECT_1: [f32; 6] = [0.60, 0.35, 0.05, 0.0, 0.0, 0.0];
pub const INITIAL_SELECT_2: [f32; 6] = [0.40, 0.45, 0.15, 0.0, 0.0, 0.0];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exp_table_monotonic() {
        for w in EXP_TABLE.windows(2) {
            assert!(w[0] < w[1]);
        }
    }

    #[test]
    fn test_baseline_table_monotonic() {
        for w in TOWER_LEVEL_STATS.windows(2) {
            assert!(w[0].0 < w[1].0, "damage must grow per level");
            assert!(w[0].2 < w[1].2, "range must grow per level");
        }
    }
}

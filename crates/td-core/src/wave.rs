//! Wave generation and spawn scheduling.
//!
//! `generate_wave` is pure and total: any wave number maps to a config, so
//! waves continue indefinitely. The [`WaveSpawner`] turns a config into
//! time-ordered spawns.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::enemy::EnemyKind;

/// One homogeneous group of spawns within a wave.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnGroup {
    pub kind: EnemyKind,
    pub count: u32,
    /// Seconds between spawns within the group.
    pub interval: f32,
    /// Seconds after wave start before the first spawn.
    pub delay: f32,
    pub hp_multiplier: f32,
    pub speed_multiplier: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveConfig {
    pub wave_number: u32,
    pub is_boss_wave: bool,
    pub groups: Vec<SpawnGroup>,
}

impl WaveConfig {
    pub fn total_enemies(&self) -> u32 {
        self.groups.iter().map(|g| g.count).sum()
    }
}

fn growth(wave: u32, early: f32, late: f32) -> f32 {
    let wave = wave.max(1);
    if wave <= SCALING_KINK_WAVE {
        early.powi((wave - 1) as i32)
    } else {
        early.powi((SCALING_KINK_WAVE - 1) as i32) * late.powi((wave - SCALING_KINK_WAVE) as i32)
    }
}

/// Enemy HP multiplier for a wave: gentle exponential growth early, steeper
/// after the kink wave.
pub fn hp_multiplier(wave: u32) -> f32 {
    growth(wave, HP_GROWTH_EARLY, HP_GROWTH_LATE)
}

/// Boss HP grows at double the regular rate.
pub fn boss_hp_multiplier(wave: u32) -> f32 {
    growth(
        wave,
        1.0 + (HP_GROWTH_EARLY - 1.0) * 2.0,
        1.0 + (HP_GROWTH_LATE - 1.0) * 2.0,
    )
}

/// Speed multiplier, capped so late waves stay hittable.
pub fn speed_multiplier(wave: u32) -> f32 {
    growth(wave, SPEED_GROWTH_EARLY, SPEED_GROWTH_LATE).min(SPEED_MULT_CAP)
}

/// Archetypes that may appear on a given wave, in spawn-priority order.
pub fn available_kinds(wave: u32) -> Vec<EnemyKind> {
    let mut kinds = vec![EnemyKind::Normal];
    if wave >= FAST_UNLOCK_WAVE {
        kinds.push(EnemyKind::Fast);
    }
    if wave >= TINY_UNLOCK_WAVE {
        kinds.push(EnemyKind::Tiny);
    }
    if wave >= TANK_UNLOCK_WAVE {
        kinds.push(EnemyKind::Tank);
    }
    kinds
}

/// Build the spawn plan for a wave. Deterministic: the same wave number
/// always yields the same config.
pub fn generate_wave(wave: u32) -> WaveConfig {
    let wave = wave.max(1);
    let is_boss_wave = wave % BOSS_WAVE_INTERVAL == 0;
    let hp_mult = hp_multiplier(wave);
    let speed_mult = speed_multiplier(wave);
    let enemy_count = (3.0 + wave as f32 * 0.8).floor() as u32;
    let interval = (SPAWN_WINDOW_SECS / enemy_count as f32).max(MIN_SPAWN_INTERVAL_SECS);
    let kinds = available_kinds(wave);

    let mut groups = Vec::new();

    if is_boss_wave {
        groups.push(SpawnGroup {
            kind: EnemyKind::Boss,
            count: 1,
            interval: 0.0,
            delay: 0.0,
            hp_multiplier: boss_hp_multiplier(wave),
            speed_multiplier: speed_mult,
        });

        let escort_count = (enemy_count as f32 * BOSS_ESCORT_FRACTION).floor() as u32;
        if escort_count > 0 {
            // Rough even split; the remainder is simply not spawned.
            let per_type = (escort_count / kinds.len() as u32).max(1);
            let mut delay = interval * 2.0;
            for kind in kinds {
                groups.push(SpawnGroup {
                    kind,
                    count: per_type,
                    interval,
                    delay,
                    hp_multiplier: hp_mult,
                    speed_multiplier: speed_mult,
                });
                delay += interval * per_type as f32 * 0.3;
            }
        }
    } else {
        let mut remaining = enemy_count;
        let mut delay = 0.0;
        let n = kinds.len();
        for (i, kind) in kinds.into_iter().enumerate() {
            let is_last = i == n - 1;
            let count = if is_last {
                remaining
            } else {
                // The first archetype takes the biggest share.
                let ratio = if i == 0 { 0.4 } else { 1.0 / n as f32 };
                let c = ((enemy_count as f32 * ratio).floor() as u32).max(1);
                c.min(remaining.saturating_sub((n - i - 1) as u32))
            };
            if count > 0 {
                groups.push(SpawnGroup {
                    kind,
                    count,
                    interval,
                    delay,
                    hp_multiplier: hp_mult,
                    speed_multiplier: speed_mult,
                });
                delay += count as f32 * interval * 0.5;
                remaining -= count;
            }
        }
    }

    WaveConfig {
        wave_number: wave,
        is_boss_wave,
        groups,
    }
}

/// One enemy due to spawn now.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnOrder {
    pub kind: EnemyKind,
    pub hp_multiplier: f32,
    pub speed_multiplier: f32,
}

/// Drives a wave config through time, emitting spawn orders as their
/// moments pass. Dropping the spawner abandons the rest of the schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaveSpawner {
    config: WaveConfig,
    elapsed: f32,
    /// Spawns already emitted, per group.
    emitted: Vec<u32>,
}

impl WaveSpawner {
    pub fn new(config: WaveConfig) -> Self {
        let emitted = vec![0; config.groups.len()];
        Self {
            config,
            elapsed: 0.0,
            emitted,
        }
    }

    pub fn wave_number(&self) -> u32 {
        self.config.wave_number
    }

    pub fn is_boss_wave(&self) -> bool {
        self.config.is_boss_wave
    }

    /// All scheduled spawns have been emitted.
    pub fn is_exhausted(&self) -> bool {
        self.config
            .groups
            .iter()
            .zip(&self.emitted)
            .all(|(g, e)| *e >= g.count)
    }

    /// Advance time and collect every spawn whose moment has passed.
    pub fn tick(&mut self, dt: f32) -> Vec<SpawnOrder> {
        self.elapsed += dt;
        let mut orders = Vec::new();
        for (group, emitted) in self.config.groups.iter().zip(self.emitted.iter_mut()) {
            while *emitted < group.count {
                let due = group.delay + group.interval * *emitted as f32;
                if due > self.elapsed {
                    break;
                }
                orders.push(SpawnOrder {
                    kind: group.kind,
                    hp_multiplier: group.hp_multiplier,
                    speed_multiplier: group.speed_multiplier,
                });
                *emitted += 1;
            }
        }
        orders
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        for wave in [1, 7, 10, 25, 100] {
            assert_eq!(generate_wave(wave), generate_wave(wave));
        }
    }

    #[test]
    fn test_total_and_pure() {
        // Any wave number yields a non-empty config
        for wave in [0, 1, 50, 500, 10_000] {
            let config = generate_wave(wave);
            assert!(!config.groups.is_empty());
            assert!(config.total_enemies() > 0);
        }
    }

    #[test]
    fn test_boss_every_tenth() {
        for wave in 1..=40 {
            let config = generate_wave(wave);
            assert_eq!(config.is_boss_wave, wave % 10 == 0);
            let has_boss = config.groups.iter().any(|g| g.kind == EnemyKind::Boss);
            assert_eq!(has_boss, config.is_boss_wave);
        }
    }

    #[test]
    fn test_unlock_schedule() {
        assert_eq!(available_kinds(5), vec![EnemyKind::Normal]);
        assert_eq!(available_kinds(6), vec![EnemyKind::Normal, EnemyKind::Fast]);
        assert!(available_kinds(11).contains(&EnemyKind::Tiny));
        assert!(!available_kinds(15).contains(&EnemyKind::Tank));
        assert!(available_kinds(16).contains(&EnemyKind::Tank));
    }

    #[test]
    fn test_boss_wave_escort_share() {
        let config = generate_wave(10);
        assert!(config.is_boss_wave);
        let escorts: u32 = config
            .groups
            .iter()
            .filter(|g| g.kind != EnemyKind::Boss)
            .map(|g| g.count)
            .sum();
        // Base count at wave 10 is 11; escorts come to roughly 60% of that
        let base = 11;
        assert!(escorts >= 1);
        assert!(escorts <= (base as f32 * 0.6).floor() as u32 + 1);
    }

    #[test]
    fn test_regular_wave_count_adds_up() {
        for wave in [1, 6, 11, 16, 27] {
            let config = generate_wave(wave);
            if !config.is_boss_wave {
                let expected = (3.0 + wave as f32 * 0.8).floor() as u32;
                assert_eq!(config.total_enemies(), expected, "wave {wave}");
            }
        }
    }

    #[test]
    fn test_scaling_monotonic_with_kink() {
        let mut prev = 0.0;
        for wave in 1..=40 {
            let m = hp_multiplier(wave);
            assert!(m > prev, "hp multiplier must grow");
            prev = m;
        }
        // Post-kink grows faster than pre-kink
        let pre = hp_multiplier(20) / hp_multiplier(19);
        let post = hp_multiplier(22) / hp_multiplier(21);
        assert!(post > pre);
        // Boss multiplier outpaces regular
        assert!(boss_hp_multiplier(10) > hp_multiplier(10));
    }

    #[test]
    fn test_speed_capped() {
        assert!(speed_multiplier(500) <= SPEED_MULT_CAP);
    }

    #[test]
    fn test_spawn_interval_floor() {
        let config = generate_wave(200);
        for group in &config.groups {
            if group.count > 1 {
                assert!(group.interval >= MIN_SPAWN_INTERVAL_SECS);
            }
        }
    }

    #[test]
    fn test_spawner_cadence() {
        let config = WaveConfig {
            wave_number: 1,
            is_boss_wave: false,
            groups: vec![SpawnGroup {
                kind: EnemyKind::Normal,
                count: 3,
                interval: 1.0,
                delay: 0.5,
                hp_multiplier: 1.0,
                speed_multiplier: 1.0,
            }],
        };
        let mut spawner = WaveSpawner::new(config);
        assert!(spawner.tick(0.4).is_empty());
        assert_eq!(spawner.tick(0.2).len(), 1); // t=0.6, first due at 0.5
        assert_eq!(spawner.tick(1.0).len(), 1); // t=1.6, second due at 1.5
        assert!(!spawner.is_exhausted());
        assert_eq!(spawner.tick(10.0).len(), 1);
        assert!(spawner.is_exhausted());
    }

    #[test]
    fn test_spawner_catches_up_after_long_tick() {
        let mut spawner = WaveSpawner::new(generate_wave(1));
        let total = spawner.config.total_enemies();
        let orders = spawner.tick(1000.0);
        assert_eq!(orders.len() as u32, total);
        assert!(spawner.is_exhausted());
    }
}

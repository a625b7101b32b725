//! Target selection.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::enemy::{EnemyHandle, EnemyState};

/// How the tower (or an orb) picks its target.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
    EnumIter,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TargetingStrategy {
    /// Furthest along the path (progress + laps).
    #[default]
    First,
    /// Least far along the path.
    Last,
    /// Smallest distance to the attacker.
    Closest,
    /// Highest current HP.
    Strongest,
}

fn score(strategy: TargetingStrategy, enemy: &EnemyState, dist: f32) -> f32 {
    match strategy {
        TargetingStrategy::First => enemy.laps as f32 + enemy.path_progress,
        TargetingStrategy::Last => -(enemy.laps as f32 + enemy.path_progress),
        TargetingStrategy::Closest => -dist,
        TargetingStrategy::Strongest => enemy.hp,
    }
}

/// Pick the best alive enemy in range by the current strategy.
///
/// Ties keep the first enemy encountered in iteration order, so callers must
/// present a stable ordering for reproducible runs.
pub fn find_target(
    x: f32,
    y: f32,
    range: f32,
    enemies: &[EnemyState],
    strategy: TargetingStrategy,
) -> Option<EnemyHandle> {
    let mut best: Option<(EnemyHandle, f32)> = None;
    for enemy in enemies {
        if !enemy.is_alive() {
            continue;
        }
        let dist = enemy.distance_to(x, y);
        if dist > range {
            continue;
        }
        let s = score(strategy, enemy, dist);
        match best {
            Some((_, best_s)) if s <= best_s => {}
            _ => best = Some((enemy.handle, s)),
        }
    }
    best.map(|(h, _)| h)
}

/// Up to `count` nearest alive enemies in range, closest first.
pub fn find_multiple_targets(
    x: f32,
    y: f32,
    range: f32,
    enemies: &[EnemyState],
    count: usize,
) -> Vec<EnemyHandle> {
    let mut in_range: Vec<(EnemyHandle, f32)> = enemies
        .iter()
        .filter(|e| e.is_alive())
        .filter_map(|e| {
            let dist = e.distance_to(x, y);
            (dist <= range).then_some((e.handle, dist))
        })
        .collect();
    in_range.sort_by(|a, b| a.1.total_cmp(&b.1));
    in_range.truncate(count);
    in_range.into_iter().map(|(h, _)| h).collect()
}

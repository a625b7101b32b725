//! Status effects: application, per-tick decay and movement.
//!
//! All magnitudes stack max-wins: re-applying a weaker effect never
//! downgrades a stronger one, re-applying refreshes the timer only if the
//! incoming duration is longer.

use serde::{Deserialize, Serialize};

use crate::enemy::{EnemyState, LoopPath};
use crate::events::{EventQueue, GameEvent};

/// Status portion of an attack: what sticks to the enemy after the hit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusPayload {
    /// (fraction 0-1, duration s)
    pub slow: Option<(f32, f32)>,
    /// (dps, duration s)
    pub poison: Option<(f32, f32)>,
    pub burn: Option<(f32, f32)>,
    pub bleed: Option<(f32, f32)>,
    pub stun: f32,
    pub freeze: f32,
    pub fear: f32,
    /// World-units pushback along the path.
    pub knockback: f32,
}

impl StatusPayload {
    pub fn is_empty(&self) -> bool {
        *self == StatusPayload::default()
    }
}

// Magnitude and timer max independently: a weaker instance with a longer
// duration keeps the stronger magnitude but extends the timer.
fn apply_max(magnitude: &mut f32, timer: &mut f32, new_mag: f32, new_dur: f32) {
    *magnitude = magnitude.max(new_mag);
    *timer = timer.max(new_dur);
}

/// Stick a payload's status effects onto an enemy, max-wins.
pub fn apply_status(enemy: &mut EnemyState, payload: &StatusPayload, path: &LoopPath) {
    if let Some((frac, dur)) = payload.slow {
        apply_max(&mut enemy.slow_fraction, &mut enemy.slow_timer, frac, dur);
    }
    if let Some((dps, dur)) = payload.poison {
        apply_max(&mut enemy.poison_dps, &mut enemy.poison_timer, dps, dur);
    }
    if let Some((dps, dur)) = payload.burn {
        apply_max(&mut enemy.burn_dps, &mut enemy.burn_timer, dps, dur);
    }
    if let Some((dps, dur)) = payload.bleed {
        apply_max(&mut enemy.bleed_dps, &mut enemy.bleed_timer, dps, dur);
    }
    enemy.stun_timer = enemy.stun_timer.max(payload.stun);
    enemy.freeze_timer = enemy.freeze_timer.max(payload.freeze);
    enemy.fear_timer = enemy.fear_timer.max(payload.fear);
    if payload.knockback > 0.0 {
        knockback(enemy, payload.knockback, path);
    }
}

/// Push an enemy backwards along the path by `dist` world units.
pub fn knockback(enemy: &mut EnemyState, dist: f32, path: &LoopPath) {
    let perimeter = path.perimeter();
    if perimeter <= 0.0 {
        return;
    }
    enemy.path_progress -= dist / perimeter;
    if enemy.path_progress < 0.0 {
        if enemy.laps > 0 {
            enemy.laps -= 1;
            enemy.path_progress = enemy.path_progress.rem_euclid(1.0);
        } else {
            enemy.path_progress = 0.0;
        }
    }
    let (x, y) = path.point_at(enemy.path_progress);
    enemy.x = x;
    enemy.y = y;
}

/// Deal direct damage to an enemy, emitting events. Returns true if this
/// call killed it; `EnemyKilled` fires exactly once per enemy.
pub fn damage_enemy(
    enemy: &mut EnemyState,
    amount: f32,
    crit: bool,
    events: &mut EventQueue,
) -> bool {
    if !enemy.is_alive() {
        return false;
    }
    enemy.hp -= amount;
    events.push(GameEvent::EnemyDamaged {
        enemy: enemy.handle,
        amount,
        crit,
    });
    if enemy.hp <= 0.0 {
        enemy.hp = 0.0;
        events.push(GameEvent::EnemyKilled {
            enemy: enemy.handle,
            kind: enemy.kind,
            exp: enemy.exp_reward,
            gold: enemy.gold_reward,
        });
        true
    } else {
        false
    }
}

/// Advance one enemy by `dt` seconds: movement (gated by stun/freeze,
/// reversed by fear, scaled by slow), DOT ticks, status timer decay.
///
/// Returns the number of full laps completed this tick.
pub fn tick_enemy(
    enemy: &mut EnemyState,
    path: &LoopPath,
    dt: f32,
    events: &mut EventQueue,
) -> u32 {
    let mut laps_completed = 0;

    // Movement. Stun and freeze stop it entirely; DOT below still ticks.
    if enemy.is_alive() && enemy.stun_timer <= 0.0 && enemy.freeze_timer <= 0.0 {
        let perimeter = path.perimeter();
        if perimeter > 0.0 {
            let mut delta = enemy.current_speed() * dt / perimeter;
            if enemy.fear_timer > 0.0 {
                delta = -delta;
            }
            enemy.path_progress += delta;
            while enemy.path_progress >= 1.0 {
                enemy.path_progress -= 1.0;
                enemy.laps += 1;
                laps_completed += 1;
            }
            if enemy.path_progress < 0.0 {
                enemy.path_progress = enemy.path_progress.rem_euclid(1.0);
            }
            let (x, y) = path.point_at(enemy.path_progress);
            enemy.x = x;
            enemy.y = y;
        }
    }

    // Damage over time, all sources summed.
    let dot = dps_active(enemy.poison_dps, enemy.poison_timer)
        + dps_active(enemy.burn_dps, enemy.burn_timer)
        + dps_active(enemy.bleed_dps, enemy.bleed_timer);
    if dot > 0.0 && enemy.is_alive() {
        damage_enemy(enemy, dot * dt, false, events);
    }

    // Timer decay; magnitudes reset exactly on expiry.
    decay(&mut enemy.slow_timer, &mut enemy.slow_fraction, dt);
    decay(&mut enemy.poison_timer, &mut enemy.poison_dps, dt);
    decay(&mut enemy.burn_timer, &mut enemy.burn_dps, dt);
    decay(&mut enemy.bleed_timer, &mut enemy.bleed_dps, dt);
    enemy.stun_timer = (enemy.stun_timer - dt).max(0.0);
    enemy.freeze_timer = (enemy.freeze_timer - dt).max(0.0);
    enemy.fear_timer = (enemy.fear_timer - dt).max(0.0);

    laps_completed
}

fn dps_active(dps: f32, timer: f32) -> f32 {
    if timer > 0.0 { dps } else { 0.0 }
}

fn decay(timer: &mut f32, magnitude: &mut f32, dt: f32) {
    if *timer > 0.0 {
        *timer -= dt;
        if *timer <= 0.0 {
            *timer = 0.0;
            *magnitude = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enemy::{EnemyDef, EnemyHandle, EnemyKind};

    fn make_enemy(path: &LoopPath) -> EnemyState {
        let def = EnemyDef {
            kind: EnemyKind::Normal,
            name: "t",
            base_hp: 100.0,
            speed: 60.0,
            exp_reward: 4,
            gold_reward: 5,
            armor: 0.0,
            size: 12.0,
        };
        EnemyState::spawn(EnemyHandle(1), &def, 1.0, 1.0, path, 0.0)
    }

    #[test]
    fn test_max_wins_stacking() {
        let path = LoopPath::rect(0.0, 0.0, 100.0, 100.0);
        let mut e = make_enemy(&path);
        apply_status(
            &mut e,
            &StatusPayload { slow: Some((0.5, 2.0)), ..Default::default() },
            &path,
        );
        // A weaker slow never lowers the magnitude, but its longer
        // duration still extends the timer
        apply_status(
            &mut e,
            &StatusPayload { slow: Some((0.3, 10.0)), ..Default::default() },
            &path,
        );
        assert_eq!(e.slow_fraction, 0.5);
        assert_eq!(e.slow_timer, 10.0);
        // A stronger, shorter slow raises the magnitude and keeps the timer
        apply_status(
            &mut e,
            &StatusPayload { slow: Some((0.8, 1.0)), ..Default::default() },
            &path,
        );
        assert_eq!(e.slow_fraction, 0.8);
        assert_eq!(e.slow_timer, 10.0);
    }

    #[test]
    fn test_stun_gates_movement_but_not_dot() {
        let path = LoopPath::rect(0.0, 0.0, 100.0, 100.0);
        let mut e = make_enemy(&path);
        e.stun_timer = 1.0;
        e.burn_dps = 10.0;
        e.burn_timer = 3.0;
        let mut events = EventQueue::new();
        tick_enemy(&mut e, &path, 0.5, &mut events);
        assert_eq!(e.path_progress, 0.0);
        assert_eq!(e.hp, 95.0);
    }

    #[test]
    fn test_dot_sums_sources() {
        let path = LoopPath::rect(0.0, 0.0, 100.0, 100.0);
        let mut e = make_enemy(&path);
        e.poison_dps = 4.0;
        e.poison_timer = 5.0;
        e.burn_dps = 6.0;
        e.burn_timer = 5.0;
        let mut events = EventQueue::new();
        tick_enemy(&mut e, &path, 1.0, &mut events);
        assert_eq!(e.hp, 90.0);
    }

    #[test]
    fn test_timer_expiry_resets_magnitude() {
        let path = LoopPath::rect(0.0, 0.0, 100.0, 100.0);
        let mut e = make_enemy(&path);
        e.slow_fraction = 0.5;
        e.slow_timer = 0.3;
        let mut events = EventQueue::new();
        tick_enemy(&mut e, &path, 0.5, &mut events);
        assert_eq!(e.slow_timer, 0.0);
        assert_eq!(e.slow_fraction, 0.0);
    }

    #[test]
    fn test_fear_reverses_movement() {
        let path = LoopPath::rect(0.0, 0.0, 100.0, 100.0);
        let mut e = make_enemy(&path);
        e.path_progress = 0.5;
        e.fear_timer = 1.0;
        let mut events = EventQueue::new();
        tick_enemy(&mut e, &path, 0.5, &mut events);
        assert!(e.path_progress < 0.5);
    }

    #[test]
    fn test_zero_perimeter_no_movement() {
        let path = LoopPath::new(vec![(0.0, 0.0)]);
        let mut e = make_enemy(&path);
        let mut events = EventQueue::new();
        tick_enemy(&mut e, &path, 1.0, &mut events);
        assert_eq!(e.path_progress, 0.0);
    }

    #[test]
    fn test_lap_wrap() {
        let path = LoopPath::rect(0.0, 0.0, 10.0, 5.0); // perimeter 60
        let mut e = make_enemy(&path);
        e.path_progress = 0.9;
        let mut events = EventQueue::new();
        // speed 60, dt 0.2 -> +0.2 progress
        let laps = tick_enemy(&mut e, &path, 0.2, &mut events);
        assert_eq!(laps, 1);
        assert_eq!(e.laps, 1);
        assert!(e.path_progress < 0.2);
    }

    #[test]
    fn test_knockback_clamps_at_start() {
        let path = LoopPath::rect(0.0, 0.0, 100.0, 100.0); // perimeter 800
        let mut e = make_enemy(&path);
        e.path_progress = 0.05;
        knockback(&mut e, 80.0, &path); // 0.1 progress back
        assert_eq!(e.path_progress, 0.0);
        assert_eq!(e.laps, 0);
    }

    #[test]
    fn test_killed_emits_once() {
        let path = LoopPath::rect(0.0, 0.0, 100.0, 100.0);
        let mut e = make_enemy(&path);
        let mut events = EventQueue::new();
        assert!(damage_enemy(&mut e, 150.0, false, &mut events));
        assert!(!damage_enemy(&mut e, 10.0, false, &mut events));
        let kills = events
            .iter()
            .filter(|ev| matches!(ev, GameEvent::EnemyKilled { .. }))
            .count();
        assert_eq!(kills, 1);
    }
}

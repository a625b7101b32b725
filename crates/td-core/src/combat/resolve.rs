//! Single-hit resolution: crit, execute, armor, splash, chain, status.

use crate::combat::AttackSpec;
use crate::consts::{CHAIN_SEARCH_RADIUS, EXECUTE_DAMAGE_FACTOR};
use crate::enemy::{EnemyHandle, EnemyState, LoopPath};
use crate::events::EventQueue;
use crate::rng::GameRng;
use crate::status::{apply_status, damage_enemy};

/// Outcome of one resolved hit.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct HitReport {
    pub crit: bool,
    pub total_damage: f32,
    /// Every enemy touched by this hit, primary first.
    pub hit: Vec<EnemyHandle>,
    pub killed: Vec<EnemyHandle>,
}

fn index_of(enemies: &[EnemyState], handle: EnemyHandle) -> Option<usize> {
    enemies.iter().position(|e| e.handle == handle)
}

fn nearest_alive_excluding(
    enemies: &[EnemyState],
    x: f32,
    y: f32,
    max_dist: f32,
    exclude: &[EnemyHandle],
) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, e) in enemies.iter().enumerate() {
        if !e.is_alive() || exclude.contains(&e.handle) {
            continue;
        }
        let d = e.distance_to(x, y);
        if d > max_dist {
            continue;
        }
        if best.is_none_or(|(_, bd)| d < bd) {
            best = Some((i, d));
        }
    }
    best.map(|(i, _)| i)
}

/// Armor reduces each packet of direct damage, floored at 1.
fn after_armor(damage: f32, armor: f32) -> f32 {
    (damage - armor).max(1.0)
}

fn hit_one(
    enemies: &mut [EnemyState],
    idx: usize,
    damage: f32,
    execute_threshold: f32,
    crit: bool,
    status: &crate::status::StatusPayload,
    path: &LoopPath,
    report: &mut HitReport,
    events: &mut EventQueue,
) {
    let enemy = &mut enemies[idx];
    let hp_fraction = if enemy.max_hp > 0.0 { enemy.hp / enemy.max_hp } else { 0.0 };
    let amount = if execute_threshold > 0.0 && hp_fraction <= execute_threshold {
        enemy.max_hp * EXECUTE_DAMAGE_FACTOR
    } else {
        after_armor(damage, enemy.armor)
    };
    let handle = enemy.handle;
    report.hit.push(handle);
    report.total_damage += amount;
    if damage_enemy(enemy, amount, crit, events) {
        report.killed.push(handle);
    }
    apply_status(&mut enemies[idx], status, path);
}

/// Resolve one attack landing on `target`.
///
/// A dead target retargets to the nearest alive enemy around `origin`
/// within `retarget_range`; no candidate means the shot fizzles. The crit
/// roll happens once and the flag carries to every secondary hit.
#[allow(clippy::too_many_arguments)]
pub fn resolve_hit(
    origin: (f32, f32),
    target: EnemyHandle,
    retarget_range: f32,
    spec: &AttackSpec,
    enemies: &mut [EnemyState],
    path: &LoopPath,
    rng: &mut GameRng,
    events: &mut EventQueue,
) -> HitReport {
    let mut report = HitReport::default();

    let idx = match index_of(enemies, target) {
        Some(i) if enemies[i].is_alive() => i,
        _ => match nearest_alive_excluding(enemies, origin.0, origin.1, retarget_range, &[]) {
            Some(i) => i,
            None => return report,
        },
    };

    let crit = rng.chance(spec.crit_chance);
    report.crit = crit;
    let damage = if crit { spec.damage * spec.crit_damage } else { spec.damage };

    let impact = (enemies[idx].x, enemies[idx].y);
    hit_one(
        enemies,
        idx,
        damage,
        spec.execute_threshold,
        crit,
        &spec.status,
        path,
        &mut report,
        events,
    );

    // Splash: full damage to every other alive enemy around the impact.
    if spec.splash_radius > 0.0 {
        let primary = report.hit[0];
        let victims: Vec<usize> = enemies
            .iter()
            .enumerate()
            .filter(|(_, e)| {
                e.handle != primary
                    && e.is_alive()
                    && e.distance_to(impact.0, impact.1) <= spec.splash_radius
            })
            .map(|(i, _)| i)
            .collect();
        for i in victims {
            hit_one(
                enemies,
                i,
                damage,
                spec.execute_threshold,
                crit,
                &spec.status,
                path,
                &mut report,
                events,
            );
        }
    }

    // Chain: hop to the nearest un-hit enemy, damage decaying per hop.
    if spec.chain_count > 0 {
        let mut from = impact;
        let mut chain_damage = damage;
        for _ in 0..spec.chain_count {
            chain_damage = (chain_damage * spec.chain_damage_ratio).round();
            if chain_damage < 1.0 {
                break;
            }
            let Some(i) = nearest_alive_excluding(
                enemies,
                from.0,
                from.1,
                CHAIN_SEARCH_RADIUS,
                &report.hit,
            ) else {
                break;
            };
            from = (enemies[i].x, enemies[i].y);
            hit_one(
                enemies,
                i,
                chain_damage,
                spec.execute_threshold,
                crit,
                &spec.status,
                path,
                &mut report,
                events,
            );
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enemy::{EnemyDef, EnemyKind};
    use crate::events::GameEvent;
    use crate::status::StatusPayload;

    fn path() -> LoopPath {
        LoopPath::rect(0.0, 0.0, 200.0, 200.0)
    }

    fn enemy_at(handle: u64, x: f32, y: f32, hp: f32, armor: f32) -> EnemyState {
        let def = EnemyDef {
            kind: EnemyKind::Normal,
            name: "t",
            base_hp: hp,
            speed: 60.0,
            exp_reward: 4,
            gold_reward: 5,
            armor,
            size: 12.0,
        };
        let mut e = EnemyState::spawn(EnemyHandle(handle), &def, 1.0, 1.0, &path(), 0.0);
        e.x = x;
        e.y = y;
        e
    }

    #[test]
    fn test_armor_floor() {
        let mut enemies = [enemy_at(1, 0.0, 0.0, 100.0, 50.0)];
        let spec = AttackSpec::simple(10.0);
        let mut rng = GameRng::new(1);
        let mut events = EventQueue::new();
        let report = resolve_hit(
            (0.0, 0.0),
            EnemyHandle(1),
            500.0,
            &spec,
            &mut enemies,
            &path(),
            &mut rng,
            &mut events,
        );
        assert_eq!(report.total_damage, 1.0);
        assert_eq!(enemies[0].hp, 99.0);
    }

    #[test]
    fn test_execute_kills_low_hp() {
        let mut enemies = [enemy_at(1, 0.0, 0.0, 100.0, 0.0)];
        enemies[0].hp = 5.0;
        let mut spec = AttackSpec::simple(1.0);
        spec.execute_threshold = 0.15;
        let mut rng = GameRng::new(1);
        let mut events = EventQueue::new();
        let report = resolve_hit(
            (0.0, 0.0),
            EnemyHandle(1),
            500.0,
            &spec,
            &mut enemies,
            &path(),
            &mut rng,
            &mut events,
        );
        assert_eq!(report.killed, vec![EnemyHandle(1)]);
        assert_eq!(enemies[0].hp, 0.0);
    }

    #[test]
    fn test_splash_hits_all_in_radius() {
        let mut enemies = [
            enemy_at(1, 0.0, 0.0, 100.0, 0.0),
            enemy_at(2, 30.0, 0.0, 100.0, 0.0),
            enemy_at(3, 0.0, 40.0, 100.0, 0.0),
            enemy_at(4, 300.0, 0.0, 100.0, 0.0),
        ];
        let mut spec = AttackSpec::simple(20.0);
        spec.splash_radius = 60.0;
        let mut rng = GameRng::new(1);
        let mut events = EventQueue::new();
        let report = resolve_hit(
            (0.0, 0.0),
            EnemyHandle(1),
            500.0,
            &spec,
            &mut enemies,
            &path(),
            &mut rng,
            &mut events,
        );
        assert_eq!(report.hit.len(), 3);
        for e in &enemies[..3] {
            assert_eq!(e.hp, 80.0);
        }
        assert_eq!(enemies[3].hp, 100.0);
    }

    #[test]
    fn test_chain_decay_and_exclusion() {
        let mut enemies = [
            enemy_at(1, 0.0, 0.0, 1000.0, 0.0),
            enemy_at(2, 50.0, 0.0, 1000.0, 0.0),
            enemy_at(3, 100.0, 0.0, 1000.0, 0.0),
        ];
        let mut spec = AttackSpec::simple(100.0);
        spec.chain_count = 5;
        spec.chain_damage_ratio = 0.5;
        let mut rng = GameRng::new(1);
        let mut events = EventQueue::new();
        let report = resolve_hit(
            (0.0, 0.0),
            EnemyHandle(1),
            500.0,
            &spec,
            &mut enemies,
            &path(),
            &mut rng,
            &mut events,
        );
        // Primary 100, first hop 50, second hop 25; no un-hit enemies left
        assert_eq!(report.hit, vec![EnemyHandle(1), EnemyHandle(2), EnemyHandle(3)]);
        assert_eq!(enemies[0].hp, 900.0);
        assert_eq!(enemies[1].hp, 950.0);
        assert_eq!(enemies[2].hp, 975.0);
    }

    #[test]
    fn test_retarget_when_target_dead() {
        let mut enemies = [
            enemy_at(1, 0.0, 0.0, 100.0, 0.0),
            enemy_at(2, 50.0, 0.0, 100.0, 0.0),
        ];
        enemies[0].hp = 0.0;
        let spec = AttackSpec::simple(10.0);
        let mut rng = GameRng::new(1);
        let mut events = EventQueue::new();
        let report = resolve_hit(
            (0.0, 0.0),
            EnemyHandle(1),
            500.0,
            &spec,
            &mut enemies,
            &path(),
            &mut rng,
            &mut events,
        );
        assert_eq!(report.hit, vec![EnemyHandle(2)]);
    }

    #[test]
    fn test_no_target_fizzles() {
        let mut enemies: [EnemyState; 0] = [];
        let spec = AttackSpec::simple(10.0);
        let mut rng = GameRng::new(1);
        let mut events = EventQueue::new();
        let report = resolve_hit(
            (0.0, 0.0),
            EnemyHandle(9),
            500.0,
            &spec,
            &mut enemies,
            &path(),
            &mut rng,
            &mut events,
        );
        assert!(report.hit.is_empty());
        assert!(events.is_empty());
    }

    #[test]
    fn test_status_applied_on_hit() {
        let mut enemies = [enemy_at(1, 0.0, 0.0, 100.0, 0.0)];
        let mut spec = AttackSpec::simple(10.0);
        spec.status = StatusPayload {
            burn: Some((8.0, 3.0)),
            slow: Some((0.4, 2.0)),
            ..Default::default()
        };
        let mut rng = GameRng::new(1);
        let mut events = EventQueue::new();
        resolve_hit(
            (0.0, 0.0),
            EnemyHandle(1),
            500.0,
            &spec,
            &mut enemies,
            &path(),
            &mut rng,
            &mut events,
        );
        assert_eq!(enemies[0].burn_dps, 8.0);
        assert_eq!(enemies[0].slow_fraction, 0.4);
        assert!(events
            .iter()
            .any(|e| matches!(e, GameEvent::EnemyDamaged { .. })));
    }
}

//! Lingering ground zones (frozen fields, poison clouds, fire trails).

use serde::{Deserialize, Serialize};

use crate::combat::orb::ZoneProfile;
use crate::enemy::{EnemyState, LoopPath};
use crate::events::EventQueue;
use crate::status::{apply_status, damage_enemy, StatusPayload};

/// An area effect parked on the ground. Ticks periodically, dealing a
/// fraction of the spawning attack's damage and re-applying its status to
/// every alive enemy inside.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroundZone {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub remaining: f32,
    tick_interval: f32,
    until_next_tick: f32,
    damage_per_tick: f32,
    status: StatusPayload,
}

/// Zone ticks hit for this fraction of the source attack's damage.
const ZONE_DAMAGE_FRACTION: f32 = 0.25;

impl GroundZone {
    pub fn new(
        x: f32,
        y: f32,
        profile: ZoneProfile,
        source_damage: f32,
        status: StatusPayload,
    ) -> Self {
        let tick_interval = 1.0 / profile.ticks_per_second.max(0.1);
        Self {
            x,
            y,
            radius: profile.radius,
            remaining: profile.duration,
            tick_interval,
            until_next_tick: tick_interval,
            damage_per_tick: (source_damage * ZONE_DAMAGE_FRACTION).max(1.0),
            status,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.remaining <= 0.0
    }

    /// Advance the zone; applies at most one pulse per call, so callers
    /// should tick at least as often as the pulse interval.
    pub fn tick(
        &mut self,
        dt: f32,
        enemies: &mut [EnemyState],
        path: &LoopPath,
        events: &mut EventQueue,
    ) {
        if self.is_expired() {
            return;
        }
        self.remaining -= dt;
        self.until_next_tick -= dt;
        if self.until_next_tick > 0.0 {
            return;
        }
        self.until_next_tick += self.tick_interval;

        for enemy in enemies.iter_mut() {
            if !enemy.is_alive() || enemy.distance_to(self.x, self.y) > self.radius {
                continue;
            }
            damage_enemy(enemy, self.damage_per_tick, false, events);
            apply_status(enemy, &self.status, path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enemy::{EnemyDef, EnemyHandle, EnemyKind};

    fn path() -> LoopPath {
        LoopPath::rect(0.0, 0.0, 200.0, 200.0)
    }

    fn enemy_at(handle: u64, x: f32, y: f32) -> EnemyState {
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
        let mut e = EnemyState::spawn(EnemyHandle(handle), &def, 1.0, 1.0, &path(), 0.0);
        e.x = x;
        e.y = y;
        e
    }

    fn profile() -> ZoneProfile {
        ZoneProfile {
            radius: 50.0,
            duration: 3.0,
            ticks_per_second: 2.0,
        }
    }

    #[test]
    fn test_pulses_damage_in_radius() {
        let mut zone = GroundZone::new(0.0, 0.0, profile(), 40.0, StatusPayload::default());
        let mut enemies = [enemy_at(1, 10.0, 0.0), enemy_at(2, 100.0, 0.0)];
        let mut events = EventQueue::new();
        zone.tick(0.5, &mut enemies, &path(), &mut events);
        assert_eq!(enemies[0].hp, 90.0);
        assert_eq!(enemies[1].hp, 100.0);
    }

    #[test]
    fn test_expires() {
        let mut zone = GroundZone::new(0.0, 0.0, profile(), 40.0, StatusPayload::default());
        let mut enemies = [enemy_at(1, 10.0, 0.0)];
        let mut events = EventQueue::new();
        for _ in 0..8 {
            zone.tick(0.5, &mut enemies, &path(), &mut events);
        }
        assert!(zone.is_expired());
    }

    #[test]
    fn test_reapplies_status() {
        let status = StatusPayload { slow: Some((0.5, 1.0)), ..Default::default() };
        let mut zone = GroundZone::new(0.0, 0.0, profile(), 40.0, status);
        let mut enemies = [enemy_at(1, 10.0, 0.0)];
        let mut events = EventQueue::new();
        zone.tick(0.5, &mut enemies, &path(), &mut events);
        assert_eq!(enemies[0].slow_fraction, 0.5);
    }
}

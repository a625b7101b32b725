//! Persistent projectiles with pierce.

use serde::{Deserialize, Serialize};

use crate::combat::{resolve::resolve_hit, AttackSpec};
use crate::consts::{CHAIN_SEARCH_RADIUS, PIERCE_HIT_RADIUS};
use crate::enemy::{EnemyHandle, EnemyState, LoopPath};
use crate::events::EventQueue;
use crate::rng::GameRng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectileStatus {
    InFlight,
    Done,
}

/// A projectile in flight. Carries its own copy of the attack spec so the
/// shot is unaffected by later stat rebuilds, and a hit set so a piercing
/// shot never strikes the same enemy twice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    pub target: EnemyHandle,
    pub spec: AttackSpec,
    pub pierce_remaining: u32,
    hit: Vec<EnemyHandle>,
}

impl Projectile {
    pub fn new(x: f32, y: f32, speed: f32, target: EnemyHandle, spec: AttackSpec) -> Self {
        let pierce_remaining = spec.pierce_count;
        Self {
            x,
            y,
            speed,
            target,
            spec,
            pierce_remaining,
            hit: Vec::new(),
        }
    }

    fn target_pos(&self, enemies: &[EnemyState]) -> Option<(f32, f32)> {
        enemies
            .iter()
            .find(|e| e.handle == self.target && e.is_alive())
            .map(|e| (e.x, e.y))
    }

    fn retarget(&mut self, enemies: &[EnemyState]) -> bool {
        let mut best: Option<(EnemyHandle, f32)> = None;
        for e in enemies {
            if !e.is_alive() || self.hit.contains(&e.handle) {
                continue;
            }
            let d = e.distance_to(self.x, self.y);
            if d > CHAIN_SEARCH_RADIUS {
                continue;
            }
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((e.handle, d));
            }
        }
        match best {
            Some((h, _)) => {
                self.target = h;
                true
            }
            None => false,
        }
    }

    /// Advance the projectile by `dt`. On impact the full attack spec
    /// resolves at the struck enemy; with pierce remaining, the projectile
    /// retargets the nearest un-hit enemy and keeps flying.
    pub fn tick(
        &mut self,
        dt: f32,
        enemies: &mut [EnemyState],
        path: &LoopPath,
        rng: &mut GameRng,
        events: &mut EventQueue,
    ) -> ProjectileStatus {
        // Target may have died in flight.
        if self.target_pos(enemies).is_none() && !self.retarget(enemies) {
            return ProjectileStatus::Done;
        }
        let Some((tx, ty)) = self.target_pos(enemies) else {
            return ProjectileStatus::Done;
        };

        let dx = tx - self.x;
        let dy = ty - self.y;
        let dist = (dx * dx + dy * dy).sqrt();
        let step = self.speed * dt;

        if dist > PIERCE_HIT_RADIUS && step < dist - PIERCE_HIT_RADIUS {
            self.x += dx / dist * step;
            self.y += dy / dist * step;
            return ProjectileStatus::InFlight;
        }

        // Impact.
        self.x = tx;
        self.y = ty;
        let report = resolve_hit(
            (self.x, self.y),
            self.target,
            PIERCE_HIT_RADIUS,
            &self.spec,
            enemies,
            path,
            rng,
            events,
        );
        self.hit.extend(report.hit);

        if self.pierce_remaining == 0 {
            return ProjectileStatus::Done;
        }
        self.pierce_remaining -= 1;
        if self.retarget(enemies) {
            ProjectileStatus::InFlight
        } else {
            ProjectileStatus::Done
        }
    }
}

//! Enemy state and the loop path enemies travel on.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

// ===== Archetypes =====

/// Enemy archetype ids.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EnemyKind {
    Normal,
    Fast,
    Tank,
    Tiny,
    Boss,
}

/// Static archetype definition; the full table lives in the data crate.
#[derive(Debug, Clone, Copy)]
pub struct EnemyDef {
    pub kind: EnemyKind,
    pub name: &'static str,
    pub base_hp: f32,
    pub speed: f32,
    pub exp_reward: u32,
    pub gold_reward: u32,
    pub armor: f32,
    pub size: f32,
}

pub fn find_enemy_def(table: &[EnemyDef], kind: EnemyKind) -> Option<&EnemyDef> {
    table.iter().find(|d| d.kind == kind)
}

// ===== Path =====

/// Closed polyline loop the enemies walk. Progress is normalized to [0, 1)
/// per lap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoopPath {
    points: Vec<(f32, f32)>,
    perimeter: f32,
}

impl LoopPath {
    pub fn new(points: Vec<(f32, f32)>) -> Self {
        let mut perimeter = 0.0;
        let n = points.len();
        if n >= 2 {
            for i in 0..n {
                let (x0, y0) = points[i];
                let (x1, y1) = points[(i + 1) % n];
                perimeter += ((x1 - x0).powi(2) + (y1 - y0).powi(2)).sqrt();
            }
        }
        Self { points, perimeter }
    }

    /// Axis-aligned rectangular loop centered on (cx, cy).
    pub fn rect(cx: f32, cy: f32, half_w: f32, half_h: f32) -> Self {
        Self::new(vec![
            (cx - half_w, cy - half_h),
            (cx + half_w, cy - half_h),
            (cx + half_w, cy + half_h),
            (cx - half_w, cy + half_h),
        ])
    }

    pub fn perimeter(&self) -> f32 {
        self.perimeter
    }

    /// Position at normalized progress. A degenerate path reports its
    /// first point (or the origin when empty).
    pub fn point_at(&self, progress: f32) -> (f32, f32) {
        if self.points.is_empty() {
            return (0.0, 0.0);
        }
        if self.perimeter <= 0.0 || self.points.len() < 2 {
            return self.points[0];
        }
        let mut remaining = progress.rem_euclid(1.0) * self.perimeter;
        let n = self.points.len();
        for i in 0..n {
            let (x0, y0) = self.points[i];
            let (x1, y1) = self.points[(i + 1) % n];
            let seg = ((x1 - x0).powi(2) + (y1 - y0).powi(2)).sqrt();
            if remaining <= seg {
                let t = if seg > 0.0 { remaining / seg } else { 0.0 };
                return (x0 + (x1 - x0) * t, y0 + (y1 - y0) * t);
            }
            remaining -= seg;
        }
        self.points[0]
    }
}

// ===== Live state =====

/// Opaque handle identifying a live enemy within a simulation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct EnemyHandle(pub u64);

/// Mutable per-enemy state. Status magnitudes stack max-wins; each magnitude
/// resets when its timer expires.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyState {
    pub handle: EnemyHandle,
    pub kind: EnemyKind,
    pub hp: f32,
    pub max_hp: f32,
    pub armor: f32,
    pub base_speed: f32,
    pub exp_reward: u32,
    pub gold_reward: u32,
    pub size: f32,

    /// Normalized position along the loop, [0, 1) per lap.
    pub path_progress: f32,
    pub laps: u32,
    pub x: f32,
    pub y: f32,

    // Status effects
    pub slow_fraction: f32,
    pub slow_timer: f32,
    pub poison_dps: f32,
    pub poison_timer: f32,
    pub burn_dps: f32,
    pub burn_timer: f32,
    pub bleed_dps: f32,
    pub bleed_timer: f32,
    pub stun_timer: f32,
    pub freeze_timer: f32,
    pub fear_timer: f32,
}

impl EnemyState {
    /// Build a fresh enemy from its archetype and the wave's scaling
    /// multipliers, placed at `progress` on `path`.
    pub fn spawn(
        handle: EnemyHandle,
        def: &EnemyDef,
        hp_mult: f32,
        speed_mult: f32,
        path: &LoopPath,
        progress: f32,
    ) -> Self {
        let hp = (def.base_hp * hp_mult).max(1.0);
        let (x, y) = path.point_at(progress);
        Self {
            handle,
            kind: def.kind,
            hp,
            max_hp: hp,
            armor: def.armor,
            base_speed: def.speed * speed_mult,
            exp_reward: def.exp_reward,
            gold_reward: def.gold_reward,
            size: def.size,
            path_progress: progress.rem_euclid(1.0),
            laps: 0,
            x,
            y,
            slow_fraction: 0.0,
            slow_timer: 0.0,
            poison_dps: 0.0,
            poison_timer: 0.0,
            burn_dps: 0.0,
            burn_timer: 0.0,
            bleed_dps: 0.0,
            bleed_timer: 0.0,
            stun_timer: 0.0,
            freeze_timer: 0.0,
            fear_timer: 0.0,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0.0
    }

    /// Current movement speed after slow. Stun/freeze gating is the status
    /// engine's job, not the speed's.
    pub fn current_speed(&self) -> f32 {
        self.base_speed * (1.0 - self.slow_fraction)
    }

    pub fn distance_to(&self, x: f32, y: f32) -> f32 {
        ((self.x - x).powi(2) + (self.y - y).powi(2)).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_def() -> EnemyDef {
        EnemyDef {
            kind: EnemyKind::Normal,
            name: "Walker",
            base_hp: 50.0,
            speed: 60.0,
            exp_reward: 4,
            gold_reward: 5,
            armor: 0.0,
            size: 12.0,
        }
    }

    #[test]
    fn test_rect_path_perimeter() {
        let path = LoopPath::rect(0.0, 0.0, 100.0, 50.0);
        assert!((path.perimeter() - 600.0).abs() < 1e-3);
        let (x, y) = path.point_at(0.0);
        assert_eq!((x, y), (-100.0, -50.0));
    }

    #[test]
    fn test_point_at_wraps() {
        let path = LoopPath::rect(0.0, 0.0, 100.0, 100.0);
        let a = path.point_at(0.25);
        let b = path.point_at(1.25);
        assert!((a.0 - b.0).abs() < 1e-3 && (a.1 - b.1).abs() < 1e-3);
    }

    #[test]
    fn test_degenerate_path() {
        let path = LoopPath::new(vec![]);
        assert_eq!(path.point_at(0.5), (0.0, 0.0));
        let single = LoopPath::new(vec![(3.0, 4.0)]);
        assert_eq!(single.point_at(0.9), (3.0, 4.0));
        assert_eq!(single.perimeter(), 0.0);
    }

    #[test]
    fn test_spawn_applies_multipliers() {
        let path = LoopPath::rect(0.0, 0.0, 100.0, 100.0);
        let e = EnemyState::spawn(EnemyHandle(1), &test_def(), 2.0, 1.5, &path, 0.0);
        assert_eq!(e.hp, 100.0);
        assert_eq!(e.max_hp, 100.0);
        assert_eq!(e.base_speed, 90.0);
        assert!(e.is_alive());
    }

    #[test]
    fn test_current_speed_slow() {
        let path = LoopPath::rect(0.0, 0.0, 100.0, 100.0);
        let mut e = EnemyState::spawn(EnemyHandle(1), &test_def(), 1.0, 1.0, &path, 0.0);
        e.slow_fraction = 0.5;
        assert_eq!(e.current_speed(), 30.0);
    }
}

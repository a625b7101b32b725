//! Game event sink.
//!
//! Systems push events into an [`EventQueue`] owned by the caller instead of
//! broadcasting through a global bus. The host drains the queue once per
//! frame to drive UI, audio and meta-progression.

use serde::Serialize;

use crate::ability::{AbilityId, Rarity};
use crate::enemy::{EnemyHandle, EnemyKind};

/// Everything the combat core reports back to the host. Serializable for
/// logging; never read back, since synergy ids borrow from the static
/// tables.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GameEvent {
    EnemySpawned {
        enemy: EnemyHandle,
        kind: EnemyKind,
    },
    EnemyDamaged {
        enemy: EnemyHandle,
        amount: f32,
        crit: bool,
    },
    EnemyKilled {
        enemy: EnemyHandle,
        kind: EnemyKind,
        exp: u32,
        gold: u32,
    },
    EnemyReachedTower {
        enemy: EnemyHandle,
        damage: u32,
    },
    TowerLevelUp {
        level: u32,
    },
    ExpGained {
        amount: u32,
    },
    TowerDamaged {
        hp: i32,
        max_hp: i32,
    },
    TowerDestroyed,
    AbilityAcquired {
        ability: AbilityId,
    },
    AbilityUpgraded {
        ability: AbilityId,
        level: u32,
    },
    AbilityFused {
        sources: Vec<AbilityId>,
        result: AbilityId,
    },
    AbilityEvolved {
        from: AbilityId,
        into: AbilityId,
    },
    SynergyActivated {
        synergy: &'static str,
    },
    SynergyDeactivated {
        synergy: &'static str,
    },
    WaveStarted {
        wave: u32,
        is_boss: bool,
    },
    WaveCleared {
        wave: u32,
    },
    GoldEarned {
        amount: u32,
        total: u32,
    },
    GoldSpent {
        amount: u32,
        total: u32,
    },
    CardPurchased {
        ability: AbilityId,
        rarity: Rarity,
        cost: u32,
    },
}

/// Per-frame event buffer.
#[derive(Debug, Default, Clone, Serialize)]
pub struct EventQueue {
    events: Vec<GameEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Iterate without consuming.
    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.events.iter()
    }

    /// Take all queued events, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

//! The tower: level progression, HP and ability slots.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ability::{clamp_level, find_def, AbilityDef, AbilityId, OwnedAbility};
use crate::consts::{EVOLUTION_LEVEL, EXP_BEYOND_TABLE_GROWTH, EXP_TABLE, MAX_ABILITY_SLOTS};
use crate::events::{EventQueue, GameEvent};
use crate::target::TargetingStrategy;

/// Recoverable failures of tower mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TowerError {
    #[error("all {MAX_ABILITY_SLOTS} ability slots are in use")]
    SlotsFull,
    #[error("ability {0} is already owned")]
    AlreadyOwned(AbilityId),
    #[error("ability {0} is not owned")]
    NotOwned(AbilityId),
    #[error("ability {0} is already at max level")]
    MaxLevel(AbilityId),
    #[error("fusion needs 2 or 3 distinct source abilities, got {0}")]
    BadFusionCount(usize),
    #[error("ability {0} is fused and cannot be used here")]
    IsFused(AbilityId),
    #[error("ability {0} has not reached evolution level {EVOLUTION_LEVEL}")]
    EvolutionNotReady(AbilityId),
    #[error("ability {0} has no evolution")]
    NoEvolution(AbilityId),
}

/// Total exp required to reach `level`. Levels past the table grow
/// geometrically from the last table entry.
pub fn exp_required_for_level(level: u32) -> u32 {
    let table_len = EXP_TABLE.len() as u32;
    if level == 0 {
        return 0;
    }
    if level <= table_len {
        EXP_TABLE[(level - 1) as usize]
    } else {
        let last = EXP_TABLE[EXP_TABLE.len() - 1] as f32;
        let beyond = (level - table_len) as i32;
        (last * EXP_BEYOND_TABLE_GROWTH.powi(beyond)).floor() as u32
    }
}

/// Persistent tower state. Combat numbers live in the separately computed
/// stat snapshot, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TowerState {
    pub level: u32,
    pub exp: u32,
    pub hp: i32,
    pub max_hp: i32,
    pub kills: u32,
    pub targeting: TargetingStrategy,
    pub abilities: Vec<OwnedAbility>,
}

impl Default for TowerState {
    fn default() -> Self {
        Self::new(100)
    }
}

impl TowerState {
    pub fn new(max_hp: i32) -> Self {
        Self {
            level: 1,
            exp: 0,
            hp: max_hp,
            max_hp,
            kills: 0,
            targeting: TargetingStrategy::default(),
            abilities: Vec::new(),
        }
    }

    pub fn exp_to_next(&self) -> u32 {
        exp_required_for_level(self.level + 1)
    }

    /// Add experience, levelling up as many times as the total allows.
    /// Returns the number of levels gained.
    pub fn add_exp(&mut self, amount: u32, events: &mut EventQueue) -> u32 {
        self.exp = self.exp.saturating_add(amount);
        let mut gained = 0;
        while self.exp >= exp_required_for_level(self.level + 1) {
            self.level += 1;
            gained += 1;
            events.push(GameEvent::TowerLevelUp { level: self.level });
        }
        gained
    }

    pub fn take_damage(&mut self, amount: u32, events: &mut EventQueue) {
        if self.hp <= 0 {
            return;
        }
        self.hp -= amount as i32;
        events.push(GameEvent::TowerDamaged {
            hp: self.hp.max(0),
            max_hp: self.max_hp,
        });
        if self.hp <= 0 {
            self.hp = 0;
            events.push(GameEvent::TowerDestroyed);
        }
    }

    // ===== Ability slots =====

    pub fn find_ability(&self, id: AbilityId) -> Option<&OwnedAbility> {
        self.abilities.iter().find(|a| a.id() == id)
    }

    fn find_ability_mut(&mut self, id: AbilityId) -> Option<&mut OwnedAbility> {
        self.abilities.iter_mut().find(|a| a.id() == id)
    }

    pub fn owns(&self, id: AbilityId) -> bool {
        self.find_ability(id).is_some()
    }

    pub fn free_slots(&self) -> usize {
        MAX_ABILITY_SLOTS.saturating_sub(self.abilities.len())
    }

    pub fn acquire(&mut self, id: AbilityId, events: &mut EventQueue) -> Result<(), TowerError> {
        if self.owns(id) {
            return Err(TowerError::AlreadyOwned(id));
        }
        if self.free_slots() == 0 {
            return Err(TowerError::SlotsFull);
        }
        self.abilities.push(OwnedAbility::simple(id, 1));
        events.push(GameEvent::AbilityAcquired { ability: id });
        Ok(())
    }

    pub fn upgrade(
        &mut self,
        id: AbilityId,
        catalog: &[AbilityDef],
        events: &mut EventQueue,
    ) -> Result<u32, TowerError> {
        let max_level = find_def(catalog, id).map(|d| d.max_level).unwrap_or(1);
        let slot = self.find_ability_mut(id).ok_or(TowerError::NotOwned(id))?;
        if slot.level() >= max_level {
            return Err(TowerError::MaxLevel(id));
        }
        let new_level = clamp_level(slot.level() + 1, max_level);
        slot.set_level(new_level);
        events.push(GameEvent::AbilityUpgraded {
            ability: id,
            level: new_level,
        });
        Ok(new_level)
    }

    pub fn remove(&mut self, id: AbilityId) -> Result<OwnedAbility, TowerError> {
        let idx = self
            .abilities
            .iter()
            .position(|a| a.id() == id)
            .ok_or(TowerError::NotOwned(id))?;
        Ok(self.abilities.remove(idx))
    }

    /// Fuse 2-3 owned abilities into one. The fused result takes the first
    /// source as its face, the max source level, and a damage bonus of 1.5
    /// (two sources) or 2.0 (three).
    pub fn fuse(
        &mut self,
        sources: &[AbilityId],
        events: &mut EventQueue,
    ) -> Result<(), TowerError> {
        if !(2..=3).contains(&sources.len()) {
            return Err(TowerError::BadFusionCount(sources.len()));
        }
        let mut distinct = sources.to_vec();
        distinct.sort();
        distinct.dedup();
        if distinct.len() != sources.len() {
            return Err(TowerError::BadFusionCount(sources.len()));
        }
        // Validate everything before mutating.
        for id in sources {
            let slot = self.find_ability(*id).ok_or(TowerError::NotOwned(*id))?;
            if slot.is_fused() {
                return Err(TowerError::IsFused(*id));
            }
        }

        let level = sources
            .iter()
            .filter_map(|id| self.find_ability(*id).map(|a| a.level()))
            .max()
            .unwrap_or(1);
        let bonus = if sources.len() == 3 { 2.0 } else { 1.5 };
        let primary = sources[0];

        for id in sources {
            self.remove(*id)?;
        }
        self.abilities.push(OwnedAbility::Fused {
            primary,
            sources: sources.to_vec(),
            level,
            bonus,
        });
        events.push(GameEvent::AbilityFused {
            sources: sources.to_vec(),
            result: primary,
        });
        Ok(())
    }

    /// Evolve an owned, non-fused ability at evolution level into its
    /// successor, replacing it wholesale at level 1.
    pub fn evolve(
        &mut self,
        id: AbilityId,
        evolutions: &[(AbilityId, AbilityId)],
        events: &mut EventQueue,
    ) -> Result<AbilityId, TowerError> {
        let target = evolutions
            .iter()
            .find(|(from, _)| *from == id)
            .map(|(_, to)| *to)
            .ok_or(TowerError::NoEvolution(id))?;
        if self.owns(target) {
            return Err(TowerError::AlreadyOwned(target));
        }
        let slot = self.find_ability(id).ok_or(TowerError::NotOwned(id))?;
        if slot.is_fused() {
            return Err(TowerError::IsFused(id));
        }
        if slot.level() < EVOLUTION_LEVEL {
            return Err(TowerError::EvolutionNotReady(id));
        }
        let idx = self
            .abilities
            .iter()
            .position(|a| a.id() == id)
            .ok_or(TowerError::NotOwned(id))?;
        self.abilities[idx] = OwnedAbility::simple(target, 1);
        events.push(GameEvent::AbilityEvolved { from: id, into: target });
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ability::{EffectFormula, EffectKey, Rarity, TagSet};

    const NO_FX: &[(EffectKey, EffectFormula)] = &[];

    fn catalog() -> Vec<AbilityDef> {
        [AbilityId::BurnShot, AbilityId::FrostShot, AbilityId::PoisonShot]
            .into_iter()
            .map(|id| AbilityDef {
                id,
                name: "t",
                description: "",
                rarity: Rarity::Magic,
                tags: TagSet::DOT,
                base_cost: 60,
                max_level: 5,
                passive: true,
                effects: NO_FX,
            })
            .collect()
    }

    #[test]
    fn test_exp_table_levels() {
        assert_eq!(exp_required_for_level(1), 0);
        assert_eq!(exp_required_for_level(2), 200);
        assert_eq!(exp_required_for_level(10), 20000);
        // Beyond the table: geometric growth
        assert_eq!(exp_required_for_level(11), 23000);
        assert_eq!(exp_required_for_level(12), 26450);
    }

    #[test]
    fn test_add_exp_multi_level() {
        let mut tower = TowerState::default();
        let mut events = EventQueue::new();
        let gained = tower.add_exp(600, &mut events);
        // 600 total exp covers levels 2 (200) and 3 (500)
        assert_eq!(gained, 2);
        assert_eq!(tower.level, 3);
        assert_eq!(
            events
                .iter()
                .filter(|e| matches!(e, GameEvent::TowerLevelUp { .. }))
                .count(),
            2
        );
    }

    #[test]
    fn test_acquire_and_slots() {
        let mut tower = TowerState::default();
        let mut events = EventQueue::new();
        tower.acquire(AbilityId::BurnShot, &mut events).unwrap();
        assert_eq!(
            tower.acquire(AbilityId::BurnShot, &mut events),
            Err(TowerError::AlreadyOwned(AbilityId::BurnShot))
        );
        assert!(tower.owns(AbilityId::BurnShot));
        assert_eq!(tower.free_slots(), MAX_ABILITY_SLOTS - 1);
    }

    #[test]
    fn test_upgrade_caps_at_max() {
        let cat = catalog();
        let mut tower = TowerState::default();
        let mut events = EventQueue::new();
        tower.acquire(AbilityId::BurnShot, &mut events).unwrap();
        for expected in 2..=5 {
            assert_eq!(
                tower.upgrade(AbilityId::BurnShot, &cat, &mut events),
                Ok(expected)
            );
        }
        assert_eq!(
            tower.upgrade(AbilityId::BurnShot, &cat, &mut events),
            Err(TowerError::MaxLevel(AbilityId::BurnShot))
        );
    }

    #[test]
    fn test_fuse_two() {
        let mut tower = TowerState::default();
        let mut events = EventQueue::new();
        tower.acquire(AbilityId::BurnShot, &mut events).unwrap();
        tower.acquire(AbilityId::FrostShot, &mut events).unwrap();
        tower
            .find_ability_mut(AbilityId::FrostShot)
            .unwrap()
            .set_level(3);
        tower
            .fuse(&[AbilityId::BurnShot, AbilityId::FrostShot], &mut events)
            .unwrap();
        assert_eq!(tower.abilities.len(), 1);
        let fused = &tower.abilities[0];
        assert!(fused.is_fused());
        assert_eq!(fused.level(), 3);
        assert_eq!(fused.fusion_bonus(), 1.5);
        assert_eq!(fused.id(), AbilityId::BurnShot);
    }

    #[test]
    fn test_fuse_three_bonus() {
        let mut tower = TowerState::default();
        let mut events = EventQueue::new();
        for id in [AbilityId::BurnShot, AbilityId::FrostShot, AbilityId::PoisonShot] {
            tower.acquire(id, &mut events).unwrap();
        }
        tower
            .fuse(
                &[AbilityId::BurnShot, AbilityId::FrostShot, AbilityId::PoisonShot],
                &mut events,
            )
            .unwrap();
        assert_eq!(tower.abilities[0].fusion_bonus(), 2.0);
    }

    #[test]
    fn test_fuse_rejects_bad_input() {
        let mut tower = TowerState::default();
        let mut events = EventQueue::new();
        tower.acquire(AbilityId::BurnShot, &mut events).unwrap();
        assert_eq!(
            tower.fuse(&[AbilityId::BurnShot], &mut events),
            Err(TowerError::BadFusionCount(1))
        );
        assert_eq!(
            tower.fuse(&[AbilityId::BurnShot, AbilityId::BurnShot], &mut events),
            Err(TowerError::BadFusionCount(2))
        );
        assert_eq!(
            tower.fuse(&[AbilityId::BurnShot, AbilityId::FrostShot], &mut events),
            Err(TowerError::NotOwned(AbilityId::FrostShot))
        );
    }

    #[test]
    fn test_evolve() {
        let evolutions = [(AbilityId::BurnShot, AbilityId::InfernoCore)];
        let mut tower = TowerState::default();
        let mut events = EventQueue::new();
        tower.acquire(AbilityId::BurnShot, &mut events).unwrap();
        assert_eq!(
            tower.evolve(AbilityId::BurnShot, &evolutions, &mut events),
            Err(TowerError::EvolutionNotReady(AbilityId::BurnShot))
        );
        tower
            .find_ability_mut(AbilityId::BurnShot)
            .unwrap()
            .set_level(EVOLUTION_LEVEL);
        assert_eq!(
            tower.evolve(AbilityId::BurnShot, &evolutions, &mut events),
            Ok(AbilityId::InfernoCore)
        );
        assert!(!tower.owns(AbilityId::BurnShot));
        assert!(tower.owns(AbilityId::InfernoCore));
        assert_eq!(
            tower.evolve(AbilityId::FrostShot, &evolutions, &mut events),
            Err(TowerError::NoEvolution(AbilityId::FrostShot))
        );
    }

    #[test]
    fn test_tower_destroyed_once() {
        let mut tower = TowerState::new(50);
        let mut events = EventQueue::new();
        tower.take_damage(60, &mut events);
        tower.take_damage(10, &mut events);
        let destroyed = events
            .iter()
            .filter(|e| matches!(e, GameEvent::TowerDestroyed))
            .count();
        assert_eq!(destroyed, 1);
    }
}

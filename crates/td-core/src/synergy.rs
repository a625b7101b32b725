//! Tag synergies.
//!
//! Owned abilities carry tags; collecting enough of a tag activates a
//! synergy whose stat bonuses fold into the next stats rebuild. A fused
//! ability contributes the tags of every source it was built from.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::ability::{find_def, AbilityDef, EffectKey, OwnedAbility, TagSet};
use crate::events::{EventQueue, GameEvent};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SynergyTier {
    Basic,
    Element,
    Advanced,
}

/// Static synergy definition; the full table lives in the data crate.
#[derive(Debug, Clone, Copy)]
pub struct SynergyDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub tier: SynergyTier,
    /// Each entry is (tag, minimum count); all must be met.
    pub requirements: &'static [(TagSet, u32)],
    /// Stat contributions while active. Empty for informational synergies.
    pub bonuses: &'static [(EffectKey, f32)],
}

/// Count how many owned abilities carry each tag. Fused abilities count
/// once per source.
pub fn count_tag(owned: &[OwnedAbility], catalog: &[AbilityDef], tag: TagSet) -> u32 {
    let mut count = 0;
    for slot in owned {
        for id in slot.tag_source_ids() {
            if let Some(def) = find_def(catalog, *id) {
                if def.tags.contains(tag) {
                    count += 1;
                }
            }
        }
    }
    count
}

fn is_met(def: &SynergyDef, owned: &[OwnedAbility], catalog: &[AbilityDef]) -> bool {
    def.requirements
        .iter()
        .all(|(tag, min)| count_tag(owned, catalog, *tag) >= *min)
}

/// Tracks which synergies are active and diffs on every re-evaluate.
/// Serialize-only: the ids borrow from the static synergy table, and a
/// restored game re-derives the active set from the owned abilities.
#[derive(Debug, Default, Clone, Serialize)]
pub struct SynergyEvaluator {
    active: Vec<&'static str>,
}

impl SynergyEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_ids(&self) -> &[&'static str] {
        &self.active
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.iter().any(|a| *a == id)
    }

    /// Re-evaluate all synergies against the current ability set, emitting
    /// activation/deactivation events for the delta.
    pub fn evaluate(
        &mut self,
        owned: &[OwnedAbility],
        catalog: &[AbilityDef],
        synergies: &'static [SynergyDef],
        events: &mut EventQueue,
    ) {
        let now: Vec<&'static str> = synergies
            .iter()
            .filter(|s| is_met(s, owned, catalog))
            .map(|s| s.id)
            .collect();

        for id in &now {
            if !self.active.contains(id) {
                events.push(GameEvent::SynergyActivated { synergy: id });
            }
        }
        for id in &self.active {
            if !now.contains(id) {
                events.push(GameEvent::SynergyDeactivated { synergy: id });
            }
        }
        self.active = now;
    }

    /// Collect the stat bonuses of every active synergy for the stat fold.
    pub fn bonuses(&self, synergies: &'static [SynergyDef]) -> Vec<(EffectKey, f32)> {
        synergies
            .iter()
            .filter(|s| self.is_active(s.id))
            .flat_map(|s| s.bonuses.iter().copied())
            .collect()
    }
}

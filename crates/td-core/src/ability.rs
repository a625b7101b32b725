//! Ability definitions and ownership.
//!
//! Static ability data lives in the data crate as `&'static [AbilityDef]`;
//! core functions take catalog slices so tests can run against small
//! hand-built tables.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

// ===== Identity =====

/// Every ability in the game. Closed set; content updates extend this enum.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
    Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum AbilityId {
    // Normal
    RapidFire,
    PowerShot,
    LongRange,
    SharpBullet,
    ToughSkin,
    ExpBoost,
    FocusAim,
    QuickReload,
    IronWall,
    Scavenger,
    SteadyHand,
    // Magic
    BurnShot,
    EmberBlast,
    FrostShot,
    ChillAura,
    ShockShot,
    PoisonShot,
    ThornShot,
    ShadowBolt,
    SplashShot,
    CriticalStrike,
    BleedShot,
    WindShot,
    // Rare
    ChainLightning,
    PierceShot,
    MultiShot,
    HomingMissile,
    StaticCharge,
    FrozenField,
    PoisonCloud,
    FireTrail,
    ShadowStrike,
    ThunderStorm,
    VineTrap,
    Ricochet,
    Blizzard,
    // Unique
    Execute,
    SoulHarvest,
    MirrorOrb,
    Overcharge,
    Berserker,
    IceAge,
    PlagueBearer,
    InfernoCore,
    VoidRift,
    // Mythic
    ElementalFusion,
    DeathMark,
    ChainReaction,
    EternalWinter,
    PhantomArmy,
    Wildfire,
    ToxicEvolution,
    // Legend
    Apocalypse,
    TimeWarp,
    BlackHole,
    InfinityChain,
    DragonBreath,
    WorldTree,
    AbsoluteZero,
    StormLord,
}

/// Ability rarity tiers, in ascending order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
    Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Normal,
    Magic,
    Rare,
    Unique,
    Mythic,
    Legend,
}

impl Rarity {
    pub const COUNT: usize = 6;

    pub fn index(self) -> usize {
        self as usize
    }
}

bitflags! {
    /// Synergy tags carried by abilities. An ability may carry several.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct TagSet: u32 {
        const DOT        = 1 << 0;
        const CC         = 1 << 1;
        const AOE        = 1 << 2;
        const SINGLE     = 1 << 3;
        const SPEED      = 1 << 4;
        const CRIT       = 1 << 5;
        const CHAIN      = 1 << 6;
        const PROJECTILE = 1 << 7;
        const ECONOMY    = 1 << 8;
        const SUMMON     = 1 << 9;
        const SCALE      = 1 << 10;
        const DEBUFF     = 1 << 11;
        const DEFENSE    = 1 << 12;
        const FORCE      = 1 << 13;
        // Elements
        const FIRE       = 1 << 14;
        const ICE        = 1 << 15;
        const LIGHTNING  = 1 << 16;
        const NATURE     = 1 << 17;
        const DARK       = 1 << 18;
    }
}

// ===== Effects =====

/// Stat contribution keys. A closed enum, so a lookup either matches a key
/// the aggregator understands or contributes nothing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EffectKey {
    FlatDamage,
    DamagePercent,
    FlatFireRate,
    FireRatePercent,
    FlatRange,
    RangePercent,
    CritChance,
    CritDamage,
    MultiShot,
    SplashRadius,
    ChainCount,
    ChainDamageRatio,
    PierceCount,
    BurnDps,
    PoisonDps,
    BleedDps,
    DotDuration,
    SlowPercent,
    SlowDuration,
    StunDuration,
    FreezeDuration,
    FearDuration,
    Knockback,
    ExecuteThreshold,
    GoldBonusPercent,
    ExpBonusPercent,
    MaxEnemiesBonus,
    OrbDamage,
    OrbRange,
    OrbFireRate,
    MissileCount,
    AreaDuration,
    AreaRadius,
    AreaTicks,
}

/// Linear level scaling: `base + per_level * (level - 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectFormula {
    pub base: f32,
    pub per_level: f32,
}

impl EffectFormula {
    pub const fn new(base: f32, per_level: f32) -> Self {
        Self { base, per_level }
    }

    pub const fn flat(base: f32) -> Self {
        Self { base, per_level: 0.0 }
    }

    pub fn at_level(&self, level: u32) -> f32 {
        self.base + self.per_level * (level.saturating_sub(1)) as f32
    }
}

// ===== Definitions =====

/// Static definition of one ability.
#[derive(Debug, Clone, Copy)]
pub struct AbilityDef {
    pub id: AbilityId,
    pub name: &'static str,
    pub description: &'static str,
    pub rarity: Rarity,
    pub tags: TagSet,
    pub base_cost: u32,
    pub max_level: u32,
    /// Passive abilities fold into the tower's stats; active abilities
    /// become independent orbs with their own attack cycle.
    pub passive: bool,
    pub effects: &'static [(EffectKey, EffectFormula)],
}

impl AbilityDef {
    /// Effect value for `key` at `level`, or 0.0 if this ability has no
    /// such effect.
    pub fn effect(&self, key: EffectKey, level: u32) -> f32 {
        self.effects
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, f)| f.at_level(level))
            .unwrap_or(0.0)
    }
}

/// Look up a definition in a catalog slice. Misses are expected for
/// reduced test catalogs and are handled by the caller.
pub fn find_def(catalog: &[AbilityDef], id: AbilityId) -> Option<&AbilityDef> {
    catalog.iter().find(|d| d.id == id)
}

/// Clamp a level into `[1, max_level]`.
pub fn clamp_level(level: u32, max_level: u32) -> u32 {
    level.clamp(1, max_level.max(1))
}

// ===== Ownership =====

/// An ability slot on the tower.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OwnedAbility {
    Simple {
        id: AbilityId,
        level: u32,
    },
    /// Result of fusing 2-3 abilities. Fused abilities always behave as
    /// active orbs regardless of their sources' passive flags.
    Fused {
        primary: AbilityId,
        sources: Vec<AbilityId>,
        level: u32,
        bonus: f32,
    },
}

impl OwnedAbility {
    pub fn simple(id: AbilityId, level: u32) -> Self {
        OwnedAbility::Simple { id, level }
    }

    /// The id used for display and catalog lookup.
    pub fn id(&self) -> AbilityId {
        match self {
            OwnedAbility::Simple { id, .. } => *id,
            OwnedAbility::Fused { primary, .. } => *primary,
        }
    }

    pub fn level(&self) -> u32 {
        match self {
            OwnedAbility::Simple { level, .. } | OwnedAbility::Fused { level, .. } => *level,
        }
    }

    pub fn set_level(&mut self, new_level: u32) {
        match self {
            OwnedAbility::Simple { level, .. } | OwnedAbility::Fused { level, .. } => {
                *level = new_level
            }
        }
    }

    pub fn is_fused(&self) -> bool {
        matches!(self, OwnedAbility::Fused { .. })
    }

    pub fn fusion_bonus(&self) -> f32 {
        match self {
            OwnedAbility::Simple { .. } => 1.0,
            OwnedAbility::Fused { bonus, .. } => *bonus,
        }
    }

    /// Ids whose tags this slot contributes to synergy counting.
    /// A fused ability contributes every source's tags.
    pub fn tag_source_ids(&self) -> &[AbilityId] {
        match self {
            OwnedAbility::Simple { id, .. } => std::slice::from_ref(id),
            OwnedAbility::Fused { sources, .. } => sources,
        }
    }
}

//! Ability catalog: 60 abilities across six rarities, plus the evolution
//! map.
//!
//! Passive abilities fold their effects into the tower's stat snapshot;
//! active ones fight as independent orbs and read the `Orb*` and `Area*`
//! keys instead.

use td_core::ability::{AbilityDef, AbilityId, EffectFormula, EffectKey, Rarity, TagSet};

use AbilityId::*;
use EffectKey::*;

const fn fx(base: f32, per_level: f32) -> EffectFormula {
    EffectFormula::new(base, per_level)
}

pub static ABILITIES: &[AbilityDef] = &[
    // ===== Normal (11) =====
    AbilityDef {
        id: RapidFire,
        name: "Rapid Fire",
        description: "Attack speed up.",
        rarity: Rarity::Normal,
        tags: TagSet::SPEED,
        base_cost: 20,
        max_level: 5,
        passive: true,
        effects: &[(FireRatePercent, fx(8.0, 4.0))],
    },
    AbilityDef {
        id: PowerShot,
        name: "Power Shot",
        description: "Raw damage up.",
        rarity: Rarity::Normal,
        tags: TagSet::SINGLE,
        base_cost: 20,
        max_level: 5,
        passive: true,
        effects: &[(FlatDamage, fx(5.0, 4.0))],
    },
    AbilityDef {
        id: LongRange,
        name: "Long Range",
        description: "Reach further down the path.",
        rarity: Rarity::Normal,
        tags: TagSet::PROJECTILE,
        base_cost: 20,
        max_level: 5,
        passive: true,
        effects: &[(FlatRange, fx(20.0, 12.0))],
    },
    AbilityDef {
        id: SharpBullet,
        name: "Sharp Bullet",
        description: "A chance to strike true.",
        rarity: Rarity::Normal,
        tags: TagSet::CRIT,
        base_cost: 20,
        max_level: 5,
        passive: true,
        effects: &[(CritChance, fx(0.05, 0.03))],
    },
    AbilityDef {
        id: ToughSkin,
        name: "Tough Skin",
        description: "The tower endures more punishment.",
        rarity: Rarity::Normal,
        tags: TagSet::DEFENSE,
        base_cost: 20,
        max_level: 5,
        passive: true,
        effects: &[(MaxEnemiesBonus, fx(2.0, 2.0))],
    },
    AbilityDef {
        id: ExpBoost,
        name: "Exp Boost",
        description: "Learn faster from every kill.",
        rarity: Rarity::Normal,
        tags: TagSet::ECONOMY,
        base_cost: 20,
        max_level: 5,
        passive: true,
        effects: &[(ExpBonusPercent, fx(10.0, 8.0))],
    },
    AbilityDef {
        id: FocusAim,
        name: "Focus Aim",
        description: "Damage and a touch of precision.",
        rarity: Rarity::Normal,
        tags: TagSet::SINGLE.union(TagSet::CRIT),
        base_cost: 20,
        max_level: 5,
        passive: true,
        effects: &[(DamagePercent, fx(6.0, 4.0)), (CritChance, fx(0.02, 0.01))],
    },
    AbilityDef {
        id: QuickReload,
        name: "Quick Reload",
        description: "Shave the pause between shots.",
        rarity: Rarity::Normal,
        tags: TagSet::SPEED,
        base_cost: 20,
        max_level: 5,
        passive: true,
        effects: &[(FlatFireRate, fx(0.15, 0.1))],
    },
    AbilityDef {
        id: IronWall,
        name: "Iron Wall",
        description: "Hold the line against bigger crowds.",
        rarity: Rarity::Normal,
        tags: TagSet::DEFENSE,
        base_cost: 20,
        max_level: 5,
        passive: true,
        effects: &[(MaxEnemiesBonus, fx(3.0, 2.0)), (Knockback, fx(2.0, 1.0))],
    },
    AbilityDef {
        id: Scavenger,
        name: "Scavenger",
        description: "Squeeze more gold from every corpse.",
        rarity: Rarity::Normal,
        tags: TagSet::ECONOMY,
        base_cost: 20,
        max_level: 5,
        passive: true,
        effects: &[(GoldBonusPercent, fx(10.0, 8.0))],
    },
    AbilityDef {
        id: SteadyHand,
        name: "Steady Hand",
        description: "Calm, measured, deadly.",
        rarity: Rarity::Normal,
        tags: TagSet::SINGLE,
        base_cost: 20,
        max_level: 5,
        passive: true,
        effects: &[(DamagePercent, fx(5.0, 5.0)), (FlatRange, fx(10.0, 5.0))],
    },
    // ===== Magic (12) =====
    AbilityDef {
        id: BurnShot,
        name: "Burn Shot",
        description: "Shots set enemies alight.",
        rarity: Rarity::Magic,
        tags: TagSet::DOT.union(TagSet::FIRE),
        base_cost: 60,
        max_level: 5,
        passive: true,
        effects: &[(BurnDps, fx(4.0, 3.0)), (DotDuration, fx(3.0, 0.0))],
    },
    AbilityDef {
        id: EmberBlast,
        name: "Ember Blast",
        description: "Fire that spatters on impact.",
        rarity: Rarity::Magic,
        tags: TagSet::FIRE.union(TagSet::AOE),
        base_cost: 60,
        max_level: 5,
        passive: true,
        effects: &[(SplashRadius, fx(25.0, 8.0)), (BurnDps, fx(2.0, 2.0))],
    },
    AbilityDef {
        id: FrostShot,
        name: "Frost Shot",
        description: "Cold that clings to whatever it touches.",
        rarity: Rarity::Magic,
        tags: TagSet::CC.union(TagSet::ICE),
        base_cost: 60,
        max_level: 5,
        passive: true,
        effects: &[(SlowPercent, fx(0.15, 0.08)), (SlowDuration, fx(2.0, 0.3))],
    },
    AbilityDef {
        id: ChillAura,
        name: "Chill Aura",
        description: "The air itself drags at their heels.",
        rarity: Rarity::Magic,
        tags: TagSet::CC.union(TagSet::ICE).union(TagSet::AOE),
        base_cost: 60,
        max_level: 5,
        passive: true,
        effects: &[(SlowPercent, fx(0.10, 0.05)), (SplashRadius, fx(15.0, 5.0))],
    },
    AbilityDef {
        id: ShockShot,
        name: "Shock Shot",
        description: "A jolt that staggers.",
        rarity: Rarity::Magic,
        tags: TagSet::CC.union(TagSet::LIGHTNING),
        base_cost: 60,
        max_level: 5,
        passive: true,
        effects: &[(StunDuration, fx(0.2, 0.1))],
    },
    AbilityDef {
        id: PoisonShot,
        name: "Poison Shot",
        description: "Venom does the slow work.",
        rarity: Rarity::Magic,
        tags: TagSet::DOT.union(TagSet::NATURE),
        base_cost: 60,
        max_level: 5,
        passive: true,
        effects: &[(PoisonDps, fx(3.0, 3.0)), (DotDuration, fx(4.0, 0.0))],
    },
    AbilityDef {
        id: ThornShot,
        name: "Thorn Shot",
        description: "Barbs that punch through hide.",
        rarity: Rarity::Magic,
        tags: TagSet::NATURE.union(TagSet::PROJECTILE),
        base_cost: 60,
        max_level: 5,
        passive: true,
        effects: &[(FlatDamage, fx(8.0, 5.0)), (PierceCount, fx(0.0, 0.5))],
    },
    AbilityDef {
        id: ShadowBolt,
        name: "Shadow Bolt",
        description: "Darkness that saps the will to advance.",
        rarity: Rarity::Magic,
        tags: TagSet::DARK.union(TagSet::DEBUFF),
        base_cost: 60,
        max_level: 5,
        passive: true,
        effects: &[(FlatDamage, fx(6.0, 4.0)), (FearDuration, fx(0.2, 0.1))],
    },
    AbilityDef {
        id: SplashShot,
        name: "Splash Shot",
        description: "Hits burst into the surrounding pack.",
        rarity: Rarity::Magic,
        tags: TagSet::AOE,
        base_cost: 60,
        max_level: 5,
        passive: true,
        effects: &[(SplashRadius, fx(35.0, 10.0))],
    },
    AbilityDef {
        id: CriticalStrike,
        name: "Critical Strike",
        description: "Strike where it hurts.",
        rarity: Rarity::Magic,
        tags: TagSet::CRIT,
        base_cost: 60,
        max_level: 5,
        passive: true,
        effects: &[(CritChance, fx(0.10, 0.05)), (CritDamage, fx(0.1, 0.1))],
    },
    AbilityDef {
        id: BleedShot,
        name: "Bleed Shot",
        description: "Wounds that refuse to close.",
        rarity: Rarity::Magic,
        tags: TagSet::DOT,
        base_cost: 60,
        max_level: 5,
        passive: true,
        effects: &[(BleedDps, fx(5.0, 3.0)), (DotDuration, fx(3.0, 0.0))],
    },
    AbilityDef {
        id: WindShot,
        name: "Wind Shot",
        description: "A gale behind every bullet.",
        rarity: Rarity::Magic,
        tags: TagSet::FORCE.union(TagSet::SPEED),
        base_cost: 60,
        max_level: 5,
        passive: true,
        effects: &[(Knockback, fx(8.0, 4.0)), (FireRatePercent, fx(5.0, 3.0))],
    },
    // ===== Rare (13) =====
    AbilityDef {
        id: ChainLightning,
        name: "Chain Lightning",
        description: "Shots arc from enemy to enemy.",
        rarity: Rarity::Rare,
        tags: TagSet::CHAIN.union(TagSet::LIGHTNING),
        base_cost: 150,
        max_level: 5,
        passive: true,
        effects: &[(ChainCount, fx(2.0, 1.0)), (ChainDamageRatio, fx(0.7, 0.02))],
    },
    AbilityDef {
        id: PierceShot,
        name: "Pierce Shot",
        description: "Shots keep going through the first body.",
        rarity: Rarity::Rare,
        tags: TagSet::PROJECTILE.union(TagSet::SINGLE),
        base_cost: 150,
        max_level: 5,
        passive: true,
        effects: &[(PierceCount, fx(1.0, 1.0))],
    },
    AbilityDef {
        id: AbilityId::MultiShot,
        name: "Multi Shot",
        description: "Fire at several enemies at once.",
        rarity: Rarity::Rare,
        tags: TagSet::PROJECTILE.union(TagSet::AOE),
        base_cost: 150,
        max_level: 5,
        passive: true,
        effects: &[(EffectKey::MultiShot, fx(1.0, 0.5))],
    },
    AbilityDef {
        id: HomingMissile,
        name: "Homing Missile",
        description: "An orb that launches seeking volleys.",
        rarity: Rarity::Rare,
        tags: TagSet::PROJECTILE.union(TagSet::SUMMON),
        base_cost: 150,
        max_level: 5,
        passive: false,
        effects: &[
            (OrbDamage, fx(15.0, 8.0)),
            (OrbRange, fx(220.0, 10.0)),
            (OrbFireRate, fx(0.8, 0.1)),
            (MissileCount, fx(1.0, 1.0)),
        ],
    },
    AbilityDef {
        id: StaticCharge,
        name: "Static Charge",
        description: "Charge builds with every shot and leaps free.",
        rarity: Rarity::Rare,
        tags: TagSet::LIGHTNING.union(TagSet::SCALE),
        base_cost: 150,
        max_level: 5,
        passive: true,
        effects: &[(ChainCount, fx(1.0, 0.5)), (DamagePercent, fx(5.0, 3.0))],
    },
    AbilityDef {
        id: FrozenField,
        name: "Frozen Field",
        description: "An orb that sheets the ground in ice.",
        rarity: Rarity::Rare,
        tags: TagSet::ICE.union(TagSet::CC).union(TagSet::AOE),
        base_cost: 150,
        max_level: 5,
        passive: false,
        effects: &[
            (OrbDamage, fx(8.0, 4.0)),
            (OrbRange, fx(180.0, 0.0)),
            (OrbFireRate, fx(0.5, 0.05)),
            (SlowPercent, fx(0.3, 0.05)),
            (SlowDuration, fx(2.0, 0.3)),
            (AreaRadius, fx(60.0, 8.0)),
            (AreaDuration, fx(3.0, 0.5)),
            (AreaTicks, fx(2.0, 0.0)),
        ],
    },
    AbilityDef {
        id: PoisonCloud,
        name: "Poison Cloud",
        description: "An orb that blankets the path in toxins.",
        rarity: Rarity::Rare,
        tags: TagSet::NATURE.union(TagSet::DOT).union(TagSet::AOE),
        base_cost: 150,
        max_level: 5,
        passive: false,
        effects: &[
            (OrbDamage, fx(6.0, 3.0)),
            (OrbRange, fx(180.0, 0.0)),
            (OrbFireRate, fx(0.4, 0.05)),
            (PoisonDps, fx(5.0, 3.0)),
            (DotDuration, fx(3.0, 0.5)),
            (AreaRadius, fx(70.0, 10.0)),
            (AreaDuration, fx(4.0, 0.5)),
            (AreaTicks, fx(1.0, 0.0)),
        ],
    },
    AbilityDef {
        id: FireTrail,
        name: "Fire Trail",
        description: "An orb that leaves burning ground in its wake.",
        rarity: Rarity::Rare,
        tags: TagSet::FIRE.union(TagSet::DOT).union(TagSet::AOE),
        base_cost: 150,
        max_level: 5,
        passive: false,
        effects: &[
            (OrbDamage, fx(10.0, 5.0)),
            (OrbRange, fx(160.0, 0.0)),
            (OrbFireRate, fx(0.6, 0.1)),
            (BurnDps, fx(6.0, 3.0)),
            (AreaRadius, fx(40.0, 5.0)),
            (AreaDuration, fx(2.5, 0.5)),
            (AreaTicks, fx(2.0, 0.0)),
        ],
    },
    AbilityDef {
        id: ShadowStrike,
        name: "Shadow Strike",
        description: "Strike from the dark, where it matters most.",
        rarity: Rarity::Rare,
        tags: TagSet::DARK.union(TagSet::CRIT).union(TagSet::SINGLE),
        base_cost: 150,
        max_level: 5,
        passive: true,
        effects: &[(CritChance, fx(0.08, 0.04)), (CritDamage, fx(0.3, 0.15))],
    },
    AbilityDef {
        id: ThunderStorm,
        name: "Thunder Storm",
        description: "An orb that calls lightning on the horde.",
        rarity: Rarity::Rare,
        tags: TagSet::LIGHTNING.union(TagSet::AOE).union(TagSet::CHAIN),
        base_cost: 150,
        max_level: 5,
        passive: false,
        effects: &[
            (OrbDamage, fx(18.0, 8.0)),
            (OrbRange, fx(250.0, 10.0)),
            (OrbFireRate, fx(0.5, 0.08)),
            (ChainCount, fx(2.0, 1.0)),
        ],
    },
    AbilityDef {
        id: VineTrap,
        name: "Vine Trap",
        description: "An orb that roots enemies where they stand.",
        rarity: Rarity::Rare,
        tags: TagSet::NATURE.union(TagSet::CC),
        base_cost: 150,
        max_level: 5,
        passive: false,
        effects: &[
            (OrbDamage, fx(5.0, 3.0)),
            (OrbRange, fx(170.0, 0.0)),
            (OrbFireRate, fx(0.4, 0.05)),
            (StunDuration, fx(0.6, 0.2)),
        ],
    },
    AbilityDef {
        id: Ricochet,
        name: "Ricochet",
        description: "Shots bounce to whatever is nearby.",
        rarity: Rarity::Rare,
        tags: TagSet::CHAIN.union(TagSet::PROJECTILE),
        base_cost: 150,
        max_level: 5,
        passive: true,
        effects: &[(ChainCount, fx(1.0, 1.0)), (ChainDamageRatio, fx(0.6, 0.05))],
    },
    AbilityDef {
        id: Blizzard,
        name: "Blizzard",
        description: "An orb that buries the field in snow.",
        rarity: Rarity::Rare,
        tags: TagSet::ICE.union(TagSet::AOE).union(TagSet::CC),
        base_cost: 150,
        max_level: 5,
        passive: false,
        effects: &[
            (OrbDamage, fx(12.0, 6.0)),
            (OrbRange, fx(200.0, 0.0)),
            (OrbFireRate, fx(0.3, 0.05)),
            (SlowPercent, fx(0.25, 0.05)),
            (AreaRadius, fx(80.0, 10.0)),
            (AreaDuration, fx(3.0, 0.5)),
            (AreaTicks, fx(1.5, 0.0)),
        ],
    },
    // ===== Unique (9) =====
    AbilityDef {
        id: Execute,
        name: "Execute",
        description: "Finish what the others started.",
        rarity: Rarity::Unique,
        tags: TagSet::SINGLE.union(TagSet::CRIT),
        base_cost: 400,
        max_level: 4,
        passive: true,
        effects: &[(ExecuteThreshold, fx(0.1, 0.05))],
    },
    AbilityDef {
        id: SoulHarvest,
        name: "Soul Harvest",
        description: "Every death feeds the tower.",
        rarity: Rarity::Unique,
        tags: TagSet::DARK.union(TagSet::ECONOMY),
        base_cost: 400,
        max_level: 4,
        passive: true,
        effects: &[
            (ExpBonusPercent, fx(20.0, 10.0)),
            (GoldBonusPercent, fx(15.0, 10.0)),
        ],
    },
    AbilityDef {
        id: MirrorOrb,
        name: "Mirror Orb",
        description: "A copy of the tower's own shot, orbiting free.",
        rarity: Rarity::Unique,
        tags: TagSet::SUMMON,
        base_cost: 400,
        max_level: 4,
        passive: false,
        effects: &[
            (OrbDamage, fx(25.0, 12.0)),
            (OrbRange, fx(200.0, 15.0)),
            (OrbFireRate, fx(1.0, 0.2)),
        ],
    },
    AbilityDef {
        id: Overcharge,
        name: "Overcharge",
        description: "Run everything past its rated limit.",
        rarity: Rarity::Unique,
        tags: TagSet::SPEED.union(TagSet::SCALE),
        base_cost: 400,
        max_level: 4,
        passive: true,
        effects: &[
            (FireRatePercent, fx(20.0, 10.0)),
            (DamagePercent, fx(10.0, 5.0)),
        ],
    },
    AbilityDef {
        id: Berserker,
        name: "Berserker",
        description: "Forget defense. Hit harder.",
        rarity: Rarity::Unique,
        tags: TagSet::SINGLE.union(TagSet::FORCE),
        base_cost: 400,
        max_level: 4,
        passive: true,
        effects: &[(DamagePercent, fx(30.0, 15.0)), (CritChance, fx(0.05, 0.05))],
    },
    AbilityDef {
        id: IceAge,
        name: "Ice Age",
        description: "An orb that brings the cold of a dead epoch.",
        rarity: Rarity::Unique,
        tags: TagSet::ICE.union(TagSet::CC).union(TagSet::AOE),
        base_cost: 400,
        max_level: 4,
        passive: false,
        effects: &[
            (OrbDamage, fx(20.0, 10.0)),
            (OrbRange, fx(250.0, 0.0)),
            (OrbFireRate, fx(0.4, 0.1)),
            (FreezeDuration, fx(0.8, 0.3)),
            (SlowPercent, fx(0.4, 0.05)),
            (AreaRadius, fx(90.0, 15.0)),
            (AreaDuration, fx(4.0, 0.5)),
            (AreaTicks, fx(1.5, 0.0)),
        ],
    },
    AbilityDef {
        id: PlagueBearer,
        name: "Plague Bearer",
        description: "An orb dripping with every known disease.",
        rarity: Rarity::Unique,
        tags: TagSet::NATURE.union(TagSet::DOT).union(TagSet::DEBUFF),
        base_cost: 400,
        max_level: 4,
        passive: false,
        effects: &[
            (OrbDamage, fx(10.0, 5.0)),
            (OrbRange, fx(200.0, 0.0)),
            (OrbFireRate, fx(0.6, 0.1)),
            (PoisonDps, fx(10.0, 6.0)),
            (BleedDps, fx(5.0, 3.0)),
            (DotDuration, fx(5.0, 1.0)),
        ],
    },
    AbilityDef {
        id: InfernoCore,
        name: "Inferno Core",
        description: "An orb with a furnace where its heart should be.",
        rarity: Rarity::Unique,
        tags: TagSet::FIRE.union(TagSet::DOT).union(TagSet::AOE),
        base_cost: 400,
        max_level: 4,
        passive: false,
        effects: &[
            (OrbDamage, fx(30.0, 15.0)),
            (OrbRange, fx(180.0, 10.0)),
            (OrbFireRate, fx(0.8, 0.15)),
            (BurnDps, fx(12.0, 6.0)),
            (SplashRadius, fx(50.0, 10.0)),
        ],
    },
    AbilityDef {
        id: VoidRift,
        name: "Void Rift",
        description: "An orb that tears a hungry hole in the world.",
        rarity: Rarity::Unique,
        tags: TagSet::DARK.union(TagSet::AOE).union(TagSet::FORCE),
        base_cost: 400,
        max_level: 4,
        passive: false,
        effects: &[
            (OrbDamage, fx(25.0, 12.0)),
            (OrbRange, fx(220.0, 0.0)),
            (OrbFireRate, fx(0.5, 0.1)),
            (FearDuration, fx(0.5, 0.2)),
            (Knockback, fx(15.0, 5.0)),
            (SplashRadius, fx(60.0, 10.0)),
        ],
    },
    // ===== Mythic (7) =====
    AbilityDef {
        id: ElementalFusion,
        name: "Elemental Fusion",
        description: "Fire, ice and lightning braided into one stream.",
        rarity: Rarity::Mythic,
        tags: TagSet::FIRE.union(TagSet::ICE).union(TagSet::LIGHTNING).union(TagSet::SCALE),
        base_cost: 750,
        max_level: 3,
        passive: true,
        effects: &[
            (BurnDps, fx(8.0, 5.0)),
            (SlowPercent, fx(0.2, 0.05)),
            (ChainCount, fx(1.0, 1.0)),
        ],
    },
    AbilityDef {
        id: DeathMark,
        name: "Death Mark",
        description: "Marked enemies bleed out where they stand.",
        rarity: Rarity::Mythic,
        tags: TagSet::DOT.union(TagSet::DARK).union(TagSet::CRIT),
        base_cost: 750,
        max_level: 3,
        passive: true,
        effects: &[
            (BleedDps, fx(15.0, 8.0)),
            (DotDuration, fx(5.0, 1.0)),
            (ExecuteThreshold, fx(0.1, 0.05)),
        ],
    },
    AbilityDef {
        id: ChainReaction,
        name: "Chain Reaction",
        description: "Each hop hits harder than it should.",
        rarity: Rarity::Mythic,
        tags: TagSet::CHAIN.union(TagSet::AOE).union(TagSet::SCALE),
        base_cost: 750,
        max_level: 3,
        passive: true,
        effects: &[
            (ChainCount, fx(3.0, 1.0)),
            (ChainDamageRatio, fx(0.8, 0.05)),
            (SplashRadius, fx(30.0, 10.0)),
        ],
    },
    AbilityDef {
        id: EternalWinter,
        name: "Eternal Winter",
        description: "An orb whose storm never ends.",
        rarity: Rarity::Mythic,
        tags: TagSet::ICE.union(TagSet::CC).union(TagSet::AOE),
        base_cost: 750,
        max_level: 3,
        passive: false,
        effects: &[
            (OrbDamage, fx(30.0, 15.0)),
            (OrbRange, fx(280.0, 0.0)),
            (OrbFireRate, fx(0.5, 0.1)),
            (FreezeDuration, fx(1.0, 0.4)),
            (SlowPercent, fx(0.5, 0.05)),
            (AreaRadius, fx(110.0, 20.0)),
            (AreaDuration, fx(5.0, 1.0)),
            (AreaTicks, fx(2.0, 0.0)),
        ],
    },
    AbilityDef {
        id: PhantomArmy,
        name: "Phantom Army",
        description: "An orb that is never alone.",
        rarity: Rarity::Mythic,
        tags: TagSet::SUMMON.union(TagSet::DARK).union(TagSet::AOE),
        base_cost: 750,
        max_level: 3,
        passive: false,
        effects: &[
            (OrbDamage, fx(20.0, 10.0)),
            (OrbRange, fx(240.0, 0.0)),
            (OrbFireRate, fx(1.2, 0.3)),
            (MissileCount, fx(2.0, 1.0)),
        ],
    },
    AbilityDef {
        id: Wildfire,
        name: "Wildfire",
        description: "An orb that starts fires faster than they can die.",
        rarity: Rarity::Mythic,
        tags: TagSet::FIRE.union(TagSet::DOT).union(TagSet::AOE).union(TagSet::SCALE),
        base_cost: 750,
        max_level: 3,
        passive: false,
        effects: &[
            (OrbDamage, fx(25.0, 12.0)),
            (OrbRange, fx(220.0, 0.0)),
            (OrbFireRate, fx(0.9, 0.2)),
            (BurnDps, fx(18.0, 10.0)),
            (AreaRadius, fx(70.0, 15.0)),
            (AreaDuration, fx(4.0, 1.0)),
            (AreaTicks, fx(2.0, 0.0)),
        ],
    },
    AbilityDef {
        id: ToxicEvolution,
        name: "Toxic Evolution",
        description: "The venom learns. It always learns.",
        rarity: Rarity::Mythic,
        tags: TagSet::NATURE.union(TagSet::DOT).union(TagSet::SCALE),
        base_cost: 750,
        max_level: 3,
        passive: true,
        effects: &[
            (PoisonDps, fx(20.0, 10.0)),
            (DotDuration, fx(6.0, 1.0)),
            (DamagePercent, fx(10.0, 5.0)),
        ],
    },
    // ===== Legend (8) =====
    AbilityDef {
        id: Apocalypse,
        name: "Apocalypse",
        description: "An orb that ends neighborhoods.",
        rarity: Rarity::Legend,
        tags: TagSet::FIRE.union(TagSet::AOE).union(TagSet::FORCE),
        base_cost: 1000,
        max_level: 3,
        passive: false,
        effects: &[
            (OrbDamage, fx(60.0, 30.0)),
            (OrbRange, fx(300.0, 0.0)),
            (OrbFireRate, fx(0.4, 0.1)),
            (SplashRadius, fx(100.0, 20.0)),
            (BurnDps, fx(15.0, 10.0)),
        ],
    },
    AbilityDef {
        id: TimeWarp,
        name: "Time Warp",
        description: "Their seconds are longer than yours.",
        rarity: Rarity::Legend,
        tags: TagSet::CC.union(TagSet::SCALE),
        base_cost: 1000,
        max_level: 3,
        passive: true,
        effects: &[
            (SlowPercent, fx(0.3, 0.1)),
            (SlowDuration, fx(4.0, 1.0)),
            (FireRatePercent, fx(25.0, 10.0)),
        ],
    },
    AbilityDef {
        id: BlackHole,
        name: "Black Hole",
        description: "An orb that pulls everything toward oblivion.",
        rarity: Rarity::Legend,
        tags: TagSet::DARK.union(TagSet::AOE).union(TagSet::FORCE),
        base_cost: 1000,
        max_level: 3,
        passive: false,
        effects: &[
            (OrbDamage, fx(40.0, 20.0)),
            (OrbRange, fx(280.0, 0.0)),
            (OrbFireRate, fx(0.3, 0.1)),
            (Knockback, fx(30.0, 10.0)),
            (AreaRadius, fx(90.0, 15.0)),
            (AreaDuration, fx(5.0, 1.0)),
            (AreaTicks, fx(2.0, 0.0)),
        ],
    },
    AbilityDef {
        id: InfinityChain,
        name: "Infinity Chain",
        description: "The arc refuses to die.",
        rarity: Rarity::Legend,
        tags: TagSet::CHAIN.union(TagSet::LIGHTNING).union(TagSet::SCALE),
        base_cost: 1000,
        max_level: 3,
        passive: true,
        effects: &[
            (ChainCount, fx(5.0, 2.0)),
            (ChainDamageRatio, fx(0.9, 0.03)),
        ],
    },
    AbilityDef {
        id: DragonBreath,
        name: "Dragon Breath",
        description: "An orb that exhales ruin.",
        rarity: Rarity::Legend,
        tags: TagSet::FIRE.union(TagSet::DOT).union(TagSet::AOE),
        base_cost: 1000,
        max_level: 3,
        passive: false,
        effects: &[
            (OrbDamage, fx(50.0, 25.0)),
            (OrbRange, fx(260.0, 0.0)),
            (OrbFireRate, fx(0.7, 0.2)),
            (BurnDps, fx(25.0, 12.0)),
            (SplashRadius, fx(70.0, 15.0)),
            (DotDuration, fx(5.0, 1.0)),
        ],
    },
    AbilityDef {
        id: WorldTree,
        name: "World Tree",
        description: "An orb with roots in every living thing.",
        rarity: Rarity::Legend,
        tags: TagSet::NATURE.union(TagSet::SUMMON).union(TagSet::DEFENSE),
        base_cost: 1000,
        max_level: 3,
        passive: false,
        effects: &[
            (OrbDamage, fx(30.0, 15.0)),
            (OrbRange, fx(300.0, 0.0)),
            (OrbFireRate, fx(0.6, 0.15)),
            (PoisonDps, fx(15.0, 8.0)),
            (StunDuration, fx(0.5, 0.2)),
            (AreaRadius, fx(80.0, 15.0)),
            (AreaDuration, fx(6.0, 1.0)),
            (AreaTicks, fx(1.0, 0.0)),
        ],
    },
    AbilityDef {
        id: AbsoluteZero,
        name: "Absolute Zero",
        description: "Where it lands, motion is a memory.",
        rarity: Rarity::Legend,
        tags: TagSet::ICE.union(TagSet::CC),
        base_cost: 1000,
        max_level: 3,
        passive: true,
        effects: &[
            (FreezeDuration, fx(1.0, 0.5)),
            (SlowPercent, fx(0.5, 0.1)),
            (SlowDuration, fx(5.0, 1.0)),
        ],
    },
    AbilityDef {
        id: StormLord,
        name: "Storm Lord",
        description: "An orb wearing the sky like a crown.",
        rarity: Rarity::Legend,
        tags: TagSet::LIGHTNING.union(TagSet::CHAIN).union(TagSet::AOE),
        base_cost: 1000,
        max_level: 3,
        passive: false,
        effects: &[
            (OrbDamage, fx(45.0, 22.0)),
            (OrbRange, fx(320.0, 0.0)),
            (OrbFireRate, fx(0.8, 0.2)),
            (ChainCount, fx(4.0, 2.0)),
            (ChainDamageRatio, fx(0.85, 0.0)),
            (StunDuration, fx(0.3, 0.1)),
        ],
    },
];

/// Evolution pairs: an owned, non-fused source at evolution level may be
/// replaced by its successor.
pub static EVOLUTIONS: &[(AbilityId, AbilityId)] = &[
    (BurnShot, InfernoCore),
    (EmberBlast, Wildfire),
    (FrostShot, IceAge),
    (ChillAura, EternalWinter),
    (ShockShot, StormLord),
    (PoisonShot, ToxicEvolution),
    (BleedShot, DeathMark),
    (ShadowBolt, VoidRift),
    (ChainLightning, InfinityChain),
    (SplashShot, Apocalypse),
];

pub fn get_ability(id: AbilityId) -> Option<&'static AbilityDef> {
    ABILITIES.iter().find(|a| a.id == id)
}

pub fn abilities_by_rarity(rarity: Rarity) -> impl Iterator<Item = &'static AbilityDef> {
    ABILITIES.iter().filter(move |a| a.rarity == rarity)
}

pub fn num_abilities() -> usize {
    ABILITIES.len()
}

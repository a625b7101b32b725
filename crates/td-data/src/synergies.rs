//! Synergy table: 25 basic, 5 element, 15 advanced.
//!
//! Bonuses hold the stat contributions a synergy folds into the tower while
//! active. Synergies whose effect is behavioral rather than statistical
//! carry an empty bonus list and are matched on id by the systems that
//! implement them.

use td_core::ability::{EffectKey, TagSet};
use td_core::synergy::{SynergyDef, SynergyTier};

pub static SYNERGIES: &[SynergyDef] = &[
    // ===== Basic (25) =====
    SynergyDef {
        id: "compound_pollution",
        name: "Compound Pollution",
        description: "Stacked damage-over-time sources hit 30% harder.",
        tier: SynergyTier::Basic,
        requirements: &[(TagSet::DOT, 2)],
        bonuses: &[
            (EffectKey::BurnDps, 2.0),
            (EffectKey::PoisonDps, 2.0),
            (EffectKey::BleedDps, 2.0),
        ],
    },
    SynergyDef {
        id: "pain_extension",
        name: "Pain Extension",
        description: "Damage over time lingers longer on crowd-controlled enemies.",
        tier: SynergyTier::Basic,
        requirements: &[(TagSet::DOT, 1), (TagSet::CC, 1)],
        bonuses: &[(EffectKey::DotDuration, 4.5)],
    },
    SynergyDef {
        id: "spread_infection",
        name: "Spread Infection",
        description: "Infected enemies pass their affliction on when they die.",
        tier: SynergyTier::Basic,
        requirements: &[(TagSet::DOT, 1), (TagSet::AOE, 1)],
        bonuses: &[],
    },
    SynergyDef {
        id: "plague_spread",
        name: "Plague Spread",
        description: "Chain hits carry damage over time to every link.",
        tier: SynergyTier::Basic,
        requirements: &[(TagSet::DOT, 1), (TagSet::CHAIN, 1)],
        bonuses: &[],
    },
    SynergyDef {
        id: "corruption",
        name: "Corruption",
        description: "Afflicted enemies lose part of their armor.",
        tier: SynergyTier::Basic,
        requirements: &[(TagSet::DOT, 1), (TagSet::DEBUFF, 1)],
        bonuses: &[(EffectKey::DamagePercent, 10.0)],
    },
    SynergyDef {
        id: "binding",
        name: "Binding",
        description: "Layered control occasionally locks an enemy in place.",
        tier: SynergyTier::Basic,
        requirements: &[(TagSet::CC, 2)],
        bonuses: &[(EffectKey::StunDuration, 0.2)],
    },
    SynergyDef {
        id: "weakness_strike",
        name: "Weakness Strike",
        description: "Criticals against controlled enemies hit far harder.",
        tier: SynergyTier::Basic,
        requirements: &[(TagSet::CC, 1), (TagSet::CRIT, 1)],
        bonuses: &[(EffectKey::CritDamage, 0.5)],
    },
    SynergyDef {
        id: "predator",
        name: "Predator",
        description: "Controlled enemies take bonus damage.",
        tier: SynergyTier::Basic,
        requirements: &[(TagSet::CC, 1), (TagSet::SINGLE, 1)],
        bonuses: &[(EffectKey::DamagePercent, 25.0)],
    },
    SynergyDef {
        id: "wide_amplify",
        name: "Wide Amplify",
        description: "Area attacks cover more ground.",
        tier: SynergyTier::Basic,
        requirements: &[(TagSet::AOE, 2)],
        bonuses: &[(EffectKey::SplashRadius, 20.0)],
    },
    SynergyDef {
        id: "chain_explosion",
        name: "Chain Explosion",
        description: "Every chain hit bursts in a small area.",
        tier: SynergyTier::Basic,
        requirements: &[(TagSet::AOE, 1), (TagSet::CHAIN, 1)],
        bonuses: &[],
    },
    SynergyDef {
        id: "bomber",
        name: "Bomber",
        description: "Area attacks come around sooner.",
        tier: SynergyTier::Basic,
        requirements: &[(TagSet::AOE, 1), (TagSet::SPEED, 1)],
        bonuses: &[(EffectKey::FireRatePercent, 20.0)],
    },
    SynergyDef {
        id: "assassin",
        name: "Assassin",
        description: "Criticals strike for triple damage.",
        tier: SynergyTier::Basic,
        requirements: &[(TagSet::SINGLE, 1), (TagSet::CRIT, 1)],
        bonuses: &[(EffectKey::CritDamage, 1.5)],
    },
    SynergyDef {
        id: "shatter",
        name: "Shatter",
        description: "Single-target hits land with extra force.",
        tier: SynergyTier::Basic,
        requirements: &[(TagSet::SINGLE, 1), (TagSet::FORCE, 1)],
        bonuses: &[(EffectKey::DamagePercent, 30.0)],
    },
    SynergyDef {
        id: "barrage",
        name: "Barrage",
        description: "Projectiles fly half again as fast.",
        tier: SynergyTier::Basic,
        requirements: &[(TagSet::SPEED, 1), (TagSet::PROJECTILE, 1)],
        bonuses: &[(EffectKey::FireRatePercent, 15.0)],
    },
    SynergyDef {
        id: "rapid_marksman",
        name: "Rapid Marksman",
        description: "Criticals briefly double the firing rate.",
        tier: SynergyTier::Basic,
        requirements: &[(TagSet::SPEED, 1), (TagSet::CRIT, 1)],
        bonuses: &[(EffectKey::FireRatePercent, 25.0)],
    },
    SynergyDef {
        id: "infinite_chain",
        name: "Infinite Chain",
        description: "Chain damage decays much more slowly.",
        tier: SynergyTier::Basic,
        requirements: &[(TagSet::CHAIN, 1), (TagSet::SCALE, 1)],
        bonuses: &[(EffectKey::ChainDamageRatio, 0.85)],
    },
    SynergyDef {
        id: "tycoon",
        name: "Tycoon",
        description: "Better shop deals and richer rewards.",
        tier: SynergyTier::Basic,
        requirements: &[(TagSet::ECONOMY, 2)],
        bonuses: &[(EffectKey::GoldBonusPercent, 15.0)],
    },
    SynergyDef {
        id: "jackpot",
        name: "Jackpot",
        description: "Critical kills pay out triple gold.",
        tier: SynergyTier::Basic,
        requirements: &[(TagSet::ECONOMY, 1), (TagSet::CRIT, 1)],
        bonuses: &[(EffectKey::GoldBonusPercent, 30.0)],
    },
    SynergyDef {
        id: "proliferation",
        name: "Proliferation",
        description: "Mirror orbs grow stronger.",
        tier: SynergyTier::Basic,
        requirements: &[(TagSet::SUMMON, 1), (TagSet::SCALE, 1)],
        bonuses: &[],
    },
    SynergyDef {
        id: "clone_chain",
        name: "Clone Chain",
        description: "Mirror orbs fire chaining shots.",
        tier: SynergyTier::Basic,
        requirements: &[(TagSet::SUMMON, 1), (TagSet::CHAIN, 1)],
        bonuses: &[],
    },
    SynergyDef {
        id: "neutralize",
        name: "Neutralize",
        description: "Debuffed enemies take bonus damage.",
        tier: SynergyTier::Basic,
        requirements: &[(TagSet::DEBUFF, 2)],
        bonuses: &[(EffectKey::DamagePercent, 25.0)],
    },
    SynergyDef {
        id: "enhanced_curse",
        name: "Enhanced Curse",
        description: "Debuffs bite deeper.",
        tier: SynergyTier::Basic,
        requirements: &[(TagSet::DEBUFF, 1), (TagSet::SCALE, 1)],
        bonuses: &[(EffectKey::SlowPercent, 0.1)],
    },
    SynergyDef {
        id: "crush",
        name: "Crush",
        description: "Hits shove enemies back down the path.",
        tier: SynergyTier::Basic,
        requirements: &[(TagSet::FORCE, 2)],
        bonuses: &[(EffectKey::Knockback, 10.0)],
    },
    SynergyDef {
        id: "bullet_hell",
        name: "Bullet Hell",
        description: "Projectiles swell to twice their size.",
        tier: SynergyTier::Basic,
        requirements: &[(TagSet::PROJECTILE, 3)],
        bonuses: &[],
    },
    SynergyDef {
        id: "fortress_economy",
        name: "Fortress Economy",
        description: "Spare enemy capacity converts to gold.",
        tier: SynergyTier::Basic,
        requirements: &[(TagSet::DEFENSE, 1), (TagSet::ECONOMY, 1)],
        bonuses: &[(EffectKey::GoldBonusPercent, 20.0)],
    },
    // ===== Element (5) =====
    SynergyDef {
        id: "combustion_frenzy",
        name: "Combustion Frenzy",
        description: "Burns stack up to three deep.",
        tier: SynergyTier::Element,
        requirements: &[(TagSet::FIRE, 2)],
        bonuses: &[(EffectKey::BurnDps, 4.0)],
    },
    SynergyDef {
        id: "permafrost",
        name: "Permafrost",
        description: "Slows linger a second after expiring.",
        tier: SynergyTier::Element,
        requirements: &[(TagSet::ICE, 2)],
        bonuses: &[(EffectKey::SlowDuration, 3.0)],
    },
    SynergyDef {
        id: "overload",
        name: "Overload",
        description: "Lightning leaps to extra targets.",
        tier: SynergyTier::Element,
        requirements: &[(TagSet::LIGHTNING, 2)],
        bonuses: &[(EffectKey::ChainCount, 1.0)],
    },
    SynergyDef {
        id: "ecosystem",
        name: "Ecosystem",
        description: "Poison kills seed restorative growth.",
        tier: SynergyTier::Element,
        requirements: &[(TagSet::NATURE, 2)],
        bonuses: &[(EffectKey::MaxEnemiesBonus, 1.0)],
    },
    SynergyDef {
        id: "abyss",
        name: "Abyss",
        description: "Kills occasionally mark the next for a gold windfall.",
        tier: SynergyTier::Element,
        requirements: &[(TagSet::DARK, 2)],
        bonuses: &[(EffectKey::GoldBonusPercent, 10.0)],
    },
    // ===== Advanced (15) =====
    SynergyDef {
        id: "hellfire",
        name: "Hellfire",
        description: "The killing field slows, burns and strips armor at once.",
        tier: SynergyTier::Advanced,
        requirements: &[(TagSet::DOT, 1), (TagSet::CC, 1), (TagSet::AOE, 1)],
        bonuses: &[(EffectKey::DamagePercent, 15.0), (EffectKey::SlowPercent, 0.1)],
    },
    SynergyDef {
        id: "gatling_sniper",
        name: "Gatling Sniper",
        description: "Criticals briefly triple the firing rate.",
        tier: SynergyTier::Advanced,
        requirements: &[(TagSet::CRIT, 1), (TagSet::SINGLE, 1), (TagSet::SPEED, 1)],
        bonuses: &[(EffectKey::FireRatePercent, 50.0)],
    },
    SynergyDef {
        id: "pandemic",
        name: "Pandemic",
        description: "Chained enemies keep their afflictions for good.",
        tier: SynergyTier::Advanced,
        requirements: &[(TagSet::CHAIN, 1), (TagSet::AOE, 1), (TagSet::DOT, 1)],
        bonuses: &[(EffectKey::DotDuration, 8.0)],
    },
    SynergyDef {
        id: "bounty_hunter",
        name: "Bounty Hunter",
        description: "Boss kills pay out several times over.",
        tier: SynergyTier::Advanced,
        requirements: &[(TagSet::ECONOMY, 1), (TagSet::CRIT, 1), (TagSet::SINGLE, 1)],
        bonuses: &[(EffectKey::GoldBonusPercent, 50.0)],
    },
    SynergyDef {
        id: "death_sentence",
        name: "Death Sentence",
        description: "Controlled enemies risk instant death.",
        tier: SynergyTier::Advanced,
        requirements: &[(TagSet::CC, 1), (TagSet::CRIT, 1), (TagSet::SINGLE, 1)],
        bonuses: &[(EffectKey::ExecuteThreshold, 0.1)],
    },
    SynergyDef {
        id: "rain_of_sorrow",
        name: "Rain of Sorrow",
        description: "The sky fills with projectiles.",
        tier: SynergyTier::Advanced,
        requirements: &[(TagSet::PROJECTILE, 2), (TagSet::SPEED, 1)],
        bonuses: &[(EffectKey::MultiShot, 1.0)],
    },
    SynergyDef {
        id: "erosion",
        name: "Erosion",
        description: "Damage over time accelerates the longer it runs.",
        tier: SynergyTier::Advanced,
        requirements: &[(TagSet::DOT, 1), (TagSet::DEBUFF, 1), (TagSet::SCALE, 1)],
        bonuses: &[(EffectKey::BurnDps, 3.0), (EffectKey::PoisonDps, 3.0)],
    },
    SynergyDef {
        id: "thermal_storm",
        name: "Thermal Storm",
        description: "Burning and chilled at once, enemies detonate.",
        tier: SynergyTier::Advanced,
        requirements: &[(TagSet::FIRE, 1), (TagSet::ICE, 1)],
        bonuses: &[(EffectKey::SplashRadius, 30.0)],
    },
    SynergyDef {
        id: "wildfire",
        name: "Wildfire",
        description: "Burns spread three times as far.",
        tier: SynergyTier::Advanced,
        requirements: &[(TagSet::FIRE, 1), (TagSet::NATURE, 1)],
        bonuses: &[],
    },
    SynergyDef {
        id: "ice_discharge",
        name: "Ice Discharge",
        description: "Shocking a frozen enemy arcs to its neighbors.",
        tier: SynergyTier::Advanced,
        requirements: &[(TagSet::ICE, 1), (TagSet::LIGHTNING, 1)],
        bonuses: &[(EffectKey::ChainCount, 1.0)],
    },
    SynergyDef {
        id: "dark_thunder",
        name: "Dark Thunder",
        description: "Lightning strikes the furthest enemy instantly.",
        tier: SynergyTier::Advanced,
        requirements: &[(TagSet::LIGHTNING, 1), (TagSet::DARK, 1)],
        bonuses: &[],
    },
    SynergyDef {
        id: "forest_of_decay",
        name: "Forest of Decay",
        description: "Poison kills leave toxic ground behind.",
        tier: SynergyTier::Advanced,
        requirements: &[(TagSet::NATURE, 1), (TagSet::DARK, 1)],
        bonuses: &[],
    },
    SynergyDef {
        id: "legion",
        name: "Legion",
        description: "Every orb in the swarm empowers the whole.",
        tier: SynergyTier::Advanced,
        requirements: &[(TagSet::SUMMON, 1), (TagSet::AOE, 1), (TagSet::SCALE, 1)],
        bonuses: &[(EffectKey::DamagePercent, 20.0)],
    },
    SynergyDef {
        id: "iron_fortress",
        name: "Iron Fortress",
        description: "At the brink, everything stops.",
        tier: SynergyTier::Advanced,
        requirements: &[(TagSet::DEFENSE, 1), (TagSet::CC, 1), (TagSet::AOE, 1)],
        bonuses: &[(EffectKey::FreezeDuration, 0.3)],
    },
    SynergyDef {
        id: "transcendence",
        name: "Transcendence",
        description: "Every bonus multiplier climbs by half.",
        tier: SynergyTier::Advanced,
        requirements: &[(TagSet::SCALE, 2)],
        bonuses: &[(EffectKey::DamagePercent, 50.0)],
    },
];

pub fn get_synergy(id: &str) -> Option<&'static SynergyDef> {
    SYNERGIES.iter().find(|s| s.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_per_tier() {
        let count = |tier| SYNERGIES.iter().filter(|s| s.tier == tier).count();
        assert_eq!(count(SynergyTier::Basic), 25);
        assert_eq!(count(SynergyTier::Element), 5);
        assert_eq!(count(SynergyTier::Advanced), 15);
    }

    #[test]
    fn test_ids_unique() {
        let mut ids: Vec<_> = SYNERGIES.iter().map(|s| s.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), SYNERGIES.len());
    }

    #[test]
    fn test_requirements_nonempty() {
        for s in SYNERGIES {
            assert!(!s.requirements.is_empty(), "{}", s.id);
            for (tag, count) in s.requirements {
                assert!(!tag.is_empty());
                assert!(*count >= 1, "{}", s.id);
            }
        }
    }
}

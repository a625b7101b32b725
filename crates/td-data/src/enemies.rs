//! Enemy archetype definitions.

use td_core::enemy::{EnemyDef, EnemyKind};

pub static ENEMIES: &[EnemyDef] = &[
    EnemyDef {
        kind: EnemyKind::Normal,
        name: "Walker",
        base_hp: 50.0,
        speed: 60.0,
        exp_reward: 4,
        gold_reward: 5,
        armor: 0.0,
        size: 12.0,
    },
    EnemyDef {
        kind: EnemyKind::Fast,
        name: "Runner",
        base_hp: 30.0,
        speed: 120.0,
        exp_reward: 5,
        gold_reward: 4,
        armor: 0.0,
        size: 10.0,
    },
    EnemyDef {
        kind: EnemyKind::Tank,
        name: "Bulwark",
        base_hp: 200.0,
        speed: 35.0,
        exp_reward: 10,
        gold_reward: 10,
        armor: 3.0,
        size: 18.0,
    },
    EnemyDef {
        kind: EnemyKind::Tiny,
        name: "Mite",
        base_hp: 15.0,
        speed: 90.0,
        exp_reward: 2,
        gold_reward: 2,
        armor: 0.0,
        size: 6.0,
    },
    EnemyDef {
        kind: EnemyKind::Boss,
        name: "Overlord",
        base_hp: 1000.0,
        speed: 25.0,
        exp_reward: 40,
        gold_reward: 50,
        armor: 5.0,
        size: 30.0,
    },
];

pub fn get_enemy(kind: EnemyKind) -> Option<&'static EnemyDef> {
    ENEMIES.iter().find(|e| e.kind == kind)
}

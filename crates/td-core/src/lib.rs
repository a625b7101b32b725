//! td-core: Combat resolution and progression core for a circular
//! tower-defense game.
//!
//! This crate contains all game logic with no I/O or rendering
//! dependencies. It is designed to be pure, deterministic under a fixed
//! RNG seed, and testable. Static content tables (abilities, enemies,
//! synergies) live in the companion `td-data` crate and are injected as
//! slices, so every system here can also run against small hand-built
//! tables in tests.

pub mod ability;
pub mod combat;
pub mod consts;
pub mod economy;
pub mod enemy;
pub mod events;
pub mod rng;
pub mod shop;
pub mod sim;
pub mod stats;
pub mod status;
pub mod synergy;
pub mod target;
pub mod tower;
pub mod wave;

pub use ability::{AbilityDef, AbilityId, EffectKey, OwnedAbility, Rarity, TagSet};
pub use enemy::{EnemyDef, EnemyHandle, EnemyKind, EnemyState, LoopPath};
pub use events::{EventQueue, GameEvent};
pub use rng::GameRng;
pub use sim::{ContentPack, Simulation};
pub use stats::{compute_stats, ComputedStats};
pub use synergy::SynergyDef;
pub use tower::{TowerError, TowerState};

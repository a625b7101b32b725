//! td-data: Static game content for the tower-defense core.
//!
//! Contains the ability catalog, evolution map, enemy archetypes and
//! synergy table as const data, plus a [`content_pack`] helper bundling
//! them for the simulation.

pub mod abilities;
pub mod enemies;
pub mod synergies;

pub use abilities::{
    abilities_by_rarity, get_ability, num_abilities, ABILITIES, EVOLUTIONS,
};
pub use enemies::{get_enemy, ENEMIES};
pub use synergies::{get_synergy, SYNERGIES};

use td_core::sim::ContentPack;

/// The full shipped content, ready to hand to `Simulation::new`.
pub fn content_pack() -> ContentPack {
    ContentPack {
        abilities: ABILITIES,
        enemies: ENEMIES,
        synergies: SYNERGIES,
        evolutions: EVOLUTIONS,
    }
}

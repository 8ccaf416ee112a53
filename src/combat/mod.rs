//! Combat domain: stats, contact damage and character death.

mod components;
mod events;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{
    CharacterStats, DeathEffect, DeathEffectLifetime, DeathEffectStyle, Hazard, KillZone,
};
pub use events::DieRequest;

use bevy::prelude::*;

use crate::combat::systems::{detect_hazard_contacts, expire_death_effects, process_deaths};
use crate::movement::LocomotionSystems;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<DieRequest>()
            .add_systems(
                Update,
                (detect_hazard_contacts, process_deaths, expire_death_effects)
                    .chain()
                    .after(LocomotionSystems),
            );
    }
}

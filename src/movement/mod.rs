//! Movement domain: locomotion state machine, its physics adapters and player setup.

mod bootstrap;
mod components;
pub mod controller;
#[cfg(feature = "dev-tools")]
mod dev;
mod events;
mod resources;
mod systems;


pub use components::{
    Facing, GameLayer, Ground, LocomotionState, MovementConfig, Player, SpawnIntro, TimedLock,
};
pub use controller::{AnimationSink, CharacterBody, CollisionProbe, JumpKind, TickOutcome};
pub use events::{KnockBackRequest, RespawnFinished};
pub use resources::MovementInput;
pub use systems::movement::ActivationError;

use bevy::ecs::schedule::ScheduleConfigs;
use bevy::ecs::system::ScheduleSystem;
use bevy::prelude::*;

use crate::movement::bootstrap::{finish_spawn_intro, spawn_player};
use crate::movement::systems::{
    activate_characters, handle_knockback_requests, handle_respawn_requests, read_input,
    tick_locomotion,
};

/// Every `Update` system that reads or writes locomotion state.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocomotionSystems;

/// Per-character locomotion systems in execution order.
///
/// Knockbacks are applied after the tick so the frame that arms the knock
/// lock does not also count down its first step.
pub(crate) fn locomotion_systems() -> ScheduleConfigs<ScheduleSystem> {
    (
        activate_characters,
        finish_spawn_intro,
        handle_respawn_requests,
        tick_locomotion,
        handle_knockback_requests,
    )
        .chain()
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementInput>()
            .add_message::<RespawnFinished>()
            .add_message::<KnockBackRequest>()
            .add_systems(Startup, spawn_player)
            .add_systems(
                Update,
                (read_input, locomotion_systems())
                    .chain()
                    .in_set(LocomotionSystems),
            );

        #[cfg(feature = "dev-tools")]
        app.add_systems(Startup, dev::spawn_test_room)
            .add_systems(Update, dev::draw_probe_gizmos);
    }
}

//! Movement domain: player bootstrap and spawn orchestration.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::{CharacterStats, DeathEffectStyle};
use crate::content::{ContentRegistry, DEFAULT_CHARACTER_ID};
use crate::movement::{
    GameLayer, LocomotionState, MovementConfig, Player, RespawnFinished, SpawnIntro,
};
use crate::sprites::{AnimationController, AnimatorParams};

const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);

/// Spawn the player from ContentRegistry data. The character starts parked;
/// [`finish_spawn_intro`] hands over control once its intro runs out.
pub(crate) fn spawn_player(mut commands: Commands, registry: Res<ContentRegistry>) {
    let def = registry.character_or_fallback(DEFAULT_CHARACTER_ID);
    let config = MovementConfig::from(&def.movement);

    info!(
        "Spawning player: char={}, move_speed={}, jump_force={}, double_jump_force={}, hp={}, atk={}",
        def.id,
        config.move_speed,
        config.jump_force,
        config.double_jump_force,
        def.stats.health_points,
        def.stats.attack_power
    );

    commands.spawn((
        // Identity & Movement
        (
            Player,
            LocomotionState::default(),
            SpawnIntro {
                remaining: def.spawn_intro,
            },
            GravityScale(config.gravity_scale_default),
            config,
        ),
        // Combat data
        (
            CharacterStats::from(&def.stats),
            DeathEffectStyle::from(&def.death_effect),
        ),
        // Rendering
        (
            AnimatorParams::default(),
            AnimationController::default(),
            Sprite {
                color: Color::srgb(0.9, 0.9, 0.9),
                custom_size: Some(PLAYER_SIZE),
                ..default()
            },
            Transform::from_xyz(0.0, 100.0, 0.0),
        ),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            Friction::new(0.0),
            CollisionEventsEnabled,
            CollisionLayers::new(
                GameLayer::Player,
                [GameLayer::Ground, GameLayer::Hazard, GameLayer::KillZone],
            ),
        ),
    ));
}

/// Count down spawn intros and signal `RespawnFinished(true)` when they end.
pub(crate) fn finish_spawn_intro(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut SpawnIntro)>,
    mut respawn_events: MessageWriter<RespawnFinished>,
) {
    let dt = time.delta_secs();

    for (entity, mut intro) in &mut query {
        intro.remaining -= dt;
        if intro.remaining > 0.0 {
            continue;
        }

        respawn_events.write(RespawnFinished {
            entity,
            finished: true,
        });
        commands.entity(entity).remove::<SpawnIntro>();
    }
}

//! Movement domain: debug-only test room and probe gizmos.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::{Hazard, KillZone};
use crate::movement::{GameLayer, Ground, LocomotionState, MovementConfig, Player};

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);
    let hazard_color = Color::srgb(0.8, 0.2, 0.2);

    // Floors and walls share one layer; the locomotion probes cannot tell them apart.
    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let hazard_layers = CollisionLayers::new(GameLayer::Hazard, [GameLayer::Player]);
    let kill_layers = CollisionLayers::new(GameLayer::KillZone, [GameLayer::Player]);

    let mut solid = |size: Vec2, position: Vec2, color: Color| {
        commands.spawn((
            Ground,
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(position.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            ground_layers,
        ));
    };

    // Floor with a gap in the middle
    solid(Vec2::new(340.0, 40.0), Vec2::new(-230.0, -200.0), ground_color);
    solid(Vec2::new(340.0, 40.0), Vec2::new(230.0, -200.0), ground_color);

    // Outer walls
    solid(Vec2::new(40.0, 500.0), Vec2::new(-420.0, 50.0), wall_color);
    solid(Vec2::new(40.0, 500.0), Vec2::new(420.0, 50.0), wall_color);

    // Platforms
    solid(Vec2::new(150.0, 20.0), Vec2::new(-250.0, -50.0), platform_color);
    solid(Vec2::new(150.0, 20.0), Vec2::new(250.0, 50.0), platform_color);

    // Pillar for wall jumping practice
    solid(Vec2::new(30.0, 200.0), Vec2::new(-100.0, -80.0), wall_color);

    // Spikes on the right floor section
    commands.spawn((
        Hazard,
        Sprite {
            color: hazard_color,
            custom_size: Some(Vec2::new(60.0, 12.0)),
            ..default()
        },
        Transform::from_xyz(300.0, -174.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(60.0, 12.0),
        Sensor,
        hazard_layers,
    ));

    // Pit under the floor gap
    commands.spawn((
        KillZone,
        Transform::from_xyz(0.0, -320.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(900.0, 40.0),
        Sensor,
        kill_layers,
    ));
}

/// Draw the ground and wall probes for each player.
pub(crate) fn draw_probe_gizmos(
    mut gizmos: Gizmos,
    query: Query<(&Transform, &MovementConfig, &LocomotionState), With<Player>>,
) {
    for (transform, config, state) in &query {
        let origin = transform.translation.truncate();
        let ground_color = if state.is_grounded {
            Color::srgb(0.2, 0.9, 0.2)
        } else {
            Color::srgb(0.6, 0.6, 0.6)
        };
        let wall_color = if state.is_wall_detected {
            Color::srgb(0.9, 0.7, 0.2)
        } else {
            Color::srgb(0.6, 0.6, 0.6)
        };

        gizmos.line_2d(
            origin,
            origin - Vec2::Y * config.ground_check_distance,
            ground_color,
        );
        gizmos.line_2d(
            origin,
            origin + Vec2::X * state.facing.sign() * config.wall_check_distance,
            wall_color,
        );
    }
}

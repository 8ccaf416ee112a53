//! Combat domain: tests for death processing.

use bevy::prelude::*;
use std::time::Duration;

use super::systems::{expire_death_effects, process_deaths};
use super::{DeathEffect, DeathEffectLifetime, DeathEffectStyle, DieRequest};

fn death_app() -> App {
    let mut app = App::new();
    app.add_message::<DieRequest>()
        .add_systems(Update, process_deaths);
    app
}

#[test]
fn test_die_spawns_effect_and_despawns_character() {
    let mut app = death_app();
    let character = app
        .world_mut()
        .spawn((
            Transform::from_xyz(40.0, -12.0, 0.0),
            DeathEffectStyle {
                size: 16.0,
                color: Color::srgb(1.0, 0.0, 0.0),
                lifetime: 0.5,
            },
        ))
        .id();

    app.world_mut().write_message(DieRequest { entity: character });
    app.update();

    assert!(app.world().get_entity(character).is_err());

    let mut effects = app
        .world_mut()
        .query_filtered::<&Transform, With<DeathEffect>>();
    let positions: Vec<Vec3> = effects
        .iter(app.world())
        .map(|t| t.translation)
        .collect();
    assert_eq!(positions, vec![Vec3::new(40.0, -12.0, 0.0)]);

    let mut lifetimes = app.world_mut().query::<&DeathEffectLifetime>();
    let lifetime = lifetimes
        .single(app.world())
        .expect("one death marker should exist");
    assert_eq!(lifetime.remaining, 0.5);
}

#[test]
fn test_repeated_die_requests_spawn_one_effect() {
    let mut app = death_app();
    let character = app.world_mut().spawn(Transform::default()).id();

    app.world_mut().write_message(DieRequest { entity: character });
    app.world_mut().write_message(DieRequest { entity: character });
    app.update();
    app.update();

    let mut effects = app.world_mut().query_filtered::<(), With<DeathEffect>>();
    assert_eq!(effects.iter(app.world()).count(), 1);
}

#[test]
fn test_die_for_unknown_entity_is_ignored() {
    let mut app = death_app();
    let ghost = app.world_mut().spawn_empty().id();
    app.world_mut().despawn(ghost);

    app.world_mut().write_message(DieRequest { entity: ghost });
    app.update();

    let mut effects = app.world_mut().query_filtered::<(), With<DeathEffect>>();
    assert_eq!(effects.iter(app.world()).count(), 0);
}

#[test]
fn test_death_marker_fades_then_expires() {
    let mut app = App::new();
    app.init_resource::<Time>()
        .add_systems(Update, expire_death_effects);

    let marker = app
        .world_mut()
        .spawn((
            DeathEffect,
            DeathEffectLifetime {
                remaining: 1.0,
                total: 1.0,
            },
            Sprite::default(),
        ))
        .id();

    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_millis(500));
    app.update();

    let sprite = app
        .world()
        .get::<Sprite>(marker)
        .expect("marker should survive half its lifetime");
    assert!((sprite.color.alpha() - 0.5).abs() < 1e-6);

    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_millis(500));
    app.update();
    assert!(app.world().get_entity(marker).is_err());
}

//! Combat domain: contact damage and death processing.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::{
    DeathEffect, DeathEffectLifetime, DeathEffectStyle, DieRequest, Hazard, KillZone,
};
use crate::movement::{KnockBackRequest, Player};

/// Turn collisions between the player and hazards into knockback/death requests.
pub(crate) fn detect_hazard_contacts(
    mut collision_events: MessageReader<CollisionStart>,
    player_query: Query<(), With<Player>>,
    hazard_query: Query<(), With<Hazard>>,
    kill_zone_query: Query<(), With<KillZone>>,
    mut knockback_events: MessageWriter<KnockBackRequest>,
    mut die_events: MessageWriter<DieRequest>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (player, other) in pairs {
            if !player_query.contains(player) {
                continue;
            }

            if kill_zone_query.contains(other) {
                die_events.write(DieRequest { entity: player });
            } else if hazard_query.contains(other) {
                knockback_events.write(KnockBackRequest { entity: player });
            }
        }
    }
}

/// Spawn the death effect where the character stood and despawn it.
pub(crate) fn process_deaths(
    mut commands: Commands,
    mut death_events: MessageReader<DieRequest>,
    query: Query<(&Transform, Option<&DeathEffectStyle>)>,
) {
    // Despawns are deferred, so repeated requests in one frame still find the entity.
    let mut handled: Vec<Entity> = Vec::new();

    for event in death_events.read() {
        if handled.contains(&event.entity) {
            continue;
        }
        let Ok((transform, style)) = query.get(event.entity) else {
            continue;
        };
        handled.push(event.entity);

        let style = style.cloned().unwrap_or_default();

        commands.spawn((
            DeathEffect,
            DeathEffectLifetime {
                remaining: style.lifetime,
                total: style.lifetime,
            },
            Sprite {
                color: style.color,
                custom_size: Some(Vec2::splat(style.size)),
                ..default()
            },
            Transform::from_translation(transform.translation),
        ));
        commands.entity(event.entity).despawn();

        info!(
            "Character {} died at {:?}",
            event.entity,
            transform.translation.truncate()
        );
    }
}

/// Fade death markers out and despawn them when their lifetime runs out.
pub(crate) fn expire_death_effects(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut DeathEffectLifetime, &mut Sprite)>,
) {
    let dt = time.delta_secs();

    for (entity, mut lifetime, mut sprite) in &mut query {
        lifetime.remaining -= dt;
        if lifetime.remaining <= 0.0 {
            commands.entity(entity).despawn();
            continue;
        }
        sprite.color.set_alpha(lifetime.remaining / lifetime.total);
    }
}

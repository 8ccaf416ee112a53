//! Movement domain: systems that drive the locomotion controller.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::systems::collisions::{RigidBodyView, SpatialProbe};
use crate::movement::{
    KnockBackRequest, LocomotionState, MovementConfig, MovementInput, Player, RespawnFinished,
};
use crate::sprites::AnimatorParams;

/// A character was spawned without a collaborator the controller cannot run without.
#[derive(Debug)]
pub struct ActivationError {
    pub entity: Entity,
    pub missing: &'static str,
}

impl std::fmt::Display for ActivationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "character {} cannot be activated: missing {}",
            self.entity, self.missing
        )
    }
}

impl std::error::Error for ActivationError {}

type ActivationItem<'a> = (
    Entity,
    &'a Transform,
    &'a mut LocomotionState,
    Option<&'a mut LinearVelocity>,
    Option<&'a mut GravityScale>,
    Has<Collider>,
    Has<AnimatorParams>,
    Has<ColliderDisabled>,
);

/// Capture the default gravity scale of newly spawned characters and park them
/// until their respawn finishes. A missing collaborator is a fatal error.
pub(crate) fn activate_characters(
    mut commands: Commands,
    mut query: Query<ActivationItem, Added<LocomotionState>>,
) -> Result {
    for (
        entity,
        transform,
        mut state,
        velocity,
        gravity_scale,
        has_collider,
        has_animator,
        collider_disabled,
    ) in &mut query
    {
        let missing_err = |missing| ActivationError { entity, missing };

        let Some(mut velocity) = velocity else {
            return Err(missing_err("LinearVelocity").into());
        };
        let Some(mut gravity_scale) = gravity_scale else {
            return Err(missing_err("GravityScale").into());
        };
        if !has_collider {
            return Err(missing_err("Collider").into());
        }
        if !has_animator {
            return Err(missing_err("AnimatorParams").into());
        }

        let mut body = RigidBodyView::new(
            transform.translation.truncate(),
            &mut velocity,
            &mut gravity_scale,
            collider_disabled,
        );
        state.activate(&mut body);
        body.sync_collider(&mut commands, entity);

        info!(
            "Activated character {}: default_gravity_scale={}",
            entity, state.default_gravity_scale
        );
    }

    Ok(())
}

pub(crate) fn handle_respawn_requests(
    mut commands: Commands,
    mut requests: MessageReader<RespawnFinished>,
    mut query: Query<(
        &Transform,
        &mut LocomotionState,
        &mut LinearVelocity,
        &mut GravityScale,
        Has<ColliderDisabled>,
    )>,
) {
    for request in requests.read() {
        let Ok((transform, mut state, mut velocity, mut gravity_scale, collider_disabled)) =
            query.get_mut(request.entity)
        else {
            continue;
        };

        let mut body = RigidBodyView::new(
            transform.translation.truncate(),
            &mut velocity,
            &mut gravity_scale,
            collider_disabled,
        );
        state.respawn_finished(request.finished, &mut body);
        body.sync_collider(&mut commands, request.entity);

        info!(
            "Respawn finished={} for {}",
            request.finished, request.entity
        );
    }
}

pub(crate) fn handle_knockback_requests(
    mut requests: MessageReader<KnockBackRequest>,
    mut query: Query<(
        &Transform,
        &MovementConfig,
        &mut LocomotionState,
        &mut LinearVelocity,
        &mut GravityScale,
        Has<ColliderDisabled>,
        &mut AnimatorParams,
    )>,
) {
    for request in requests.read() {
        let Ok((
            transform,
            config,
            mut state,
            mut velocity,
            mut gravity_scale,
            collider_disabled,
            mut params,
        )) = query.get_mut(request.entity)
        else {
            continue;
        };

        let mut body = RigidBodyView::new(
            transform.translation.truncate(),
            &mut velocity,
            &mut gravity_scale,
            collider_disabled,
        );
        if state.knock_back(config, &mut body, &mut *params) {
            debug!(
                "Knocked back {}: velocity={:?}",
                request.entity, velocity.0
            );
        }
    }
}

type LocomotionItem<'a> = (
    Entity,
    &'a Transform,
    &'a MovementConfig,
    &'a mut LocomotionState,
    &'a mut LinearVelocity,
    &'a mut GravityScale,
    Has<ColliderDisabled>,
    &'a mut AnimatorParams,
);

pub(crate) fn tick_locomotion(
    mut commands: Commands,
    time: Res<Time>,
    input: Res<MovementInput>,
    spatial_query: SpatialQuery,
    mut query: Query<LocomotionItem, With<Player>>,
) {
    let dt = time.delta_secs();

    for (
        entity,
        transform,
        config,
        mut state,
        mut velocity,
        mut gravity_scale,
        collider_disabled,
        mut params,
    ) in &mut query
    {
        let probe = SpatialProbe::new(&spatial_query, entity);
        let mut body = RigidBodyView::new(
            transform.translation.truncate(),
            &mut velocity,
            &mut gravity_scale,
            collider_disabled,
        );

        let outcome = state.tick(config, &input, &mut body, &probe, &mut *params, dt);
        body.sync_collider(&mut commands, entity);

        if let Some(jump) = outcome.jump {
            debug!(
                "{:?} jump: can_double_jump={}, facing={:?}",
                jump, state.can_double_jump, state.facing
            );
        }
        if outcome.flipped {
            debug!("Flipped to {:?}", state.facing);
        }
    }
}

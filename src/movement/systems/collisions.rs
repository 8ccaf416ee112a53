//! Movement domain: avian2d adapters for the controller seams.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::controller::{CharacterBody, CollisionProbe};
use crate::movement::GameLayer;

/// Raycasts against the Ground layer, ignoring the character's own collider.
pub(crate) struct SpatialProbe<'a, 'w, 's> {
    query: &'a SpatialQuery<'w, 's>,
    filter: SpatialQueryFilter,
}

impl<'a, 'w, 's> SpatialProbe<'a, 'w, 's> {
    pub(crate) fn new(query: &'a SpatialQuery<'w, 's>, owner: Entity) -> Self {
        // Walls and floors share one layer, so a wall under the feet reads as ground.
        let filter =
            SpatialQueryFilter::from_mask(GameLayer::Ground).with_excluded_entities([owner]);
        Self { query, filter }
    }
}

impl CollisionProbe for SpatialProbe<'_, '_, '_> {
    fn probe(&self, origin: Vec2, direction: Dir2, max_distance: f32) -> bool {
        self.query
            .cast_ray(origin, direction, max_distance, true, &self.filter)
            .is_some()
    }
}

/// Borrowed view over a rigid body's locomotion-relevant components.
///
/// Collider enablement is recorded here and applied afterwards with
/// [`RigidBodyView::sync_collider`], since toggling it needs `Commands`.
pub(crate) struct RigidBodyView<'a> {
    position: Vec2,
    velocity: &'a mut LinearVelocity,
    gravity_scale: &'a mut GravityScale,
    collider_was_enabled: bool,
    collider_enabled: bool,
}

impl<'a> RigidBodyView<'a> {
    pub(crate) fn new(
        position: Vec2,
        velocity: &'a mut LinearVelocity,
        gravity_scale: &'a mut GravityScale,
        collider_disabled: bool,
    ) -> Self {
        Self {
            position,
            velocity,
            gravity_scale,
            collider_was_enabled: !collider_disabled,
            collider_enabled: !collider_disabled,
        }
    }

    /// Insert or remove `ColliderDisabled` if enablement changed.
    pub(crate) fn sync_collider(&self, commands: &mut Commands, entity: Entity) {
        if self.collider_enabled == self.collider_was_enabled {
            return;
        }
        if self.collider_enabled {
            commands.entity(entity).remove::<ColliderDisabled>();
        } else {
            commands.entity(entity).insert(ColliderDisabled);
        }
    }
}

impl CharacterBody for RigidBodyView<'_> {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn velocity(&self) -> Vec2 {
        self.velocity.0
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity.0 = velocity;
    }

    fn gravity_scale(&self) -> f32 {
        self.gravity_scale.0
    }

    fn set_gravity_scale(&mut self, scale: f32) {
        self.gravity_scale.0 = scale;
    }

    fn set_collision_enabled(&mut self, enabled: bool) {
        self.collider_enabled = enabled;
    }
}

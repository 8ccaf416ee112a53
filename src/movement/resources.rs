//! Movement domain: input resources.

use bevy::prelude::*;

/// Input snapshot for the current tick.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct MovementInput {
    /// Horizontal and vertical axes, each clamped to [-1, 1].
    pub axis: Vec2,
    /// Rising edge only: true for exactly one tick per press.
    pub jump_just_pressed: bool,
}

impl MovementInput {
    pub fn new(x: f32, y: f32, jump_just_pressed: bool) -> Self {
        Self {
            axis: Vec2::new(x.clamp(-1.0, 1.0), y.clamp(-1.0, 1.0)),
            jump_just_pressed,
        }
    }
}

//! Movement domain: the locomotion state machine.
//!
//! The controller only talks to the outside world through three seams:
//! [`CharacterBody`] for velocity and activation, [`CollisionProbe`] for the
//! ground/wall raycasts and [`AnimationSink`] for presentation. The Bevy
//! adapters live in `systems::collisions`.

use bevy::prelude::*;

use crate::movement::{Facing, LocomotionState, MovementConfig, MovementInput};

/// Animator parameter and cue names pushed by the controller.
pub mod anim_keys {
    pub const X_VELOCITY: &str = "x_velocity";
    pub const Y_VELOCITY: &str = "y_velocity";
    pub const IS_GROUNDED: &str = "is_grounded";
    pub const IS_WALL_DETECTED: &str = "is_wall_detected";
    pub const KNOCKBACK: &str = "knockback";
    pub const DOUBLE_JUMP: &str = "double_jump";
}

/// Fall speed multiplier while sliding down a wall without holding down.
pub const WALL_SLIDE_FACTOR: f32 = 0.05;

/// Physics body capabilities the controller needs.
pub trait CharacterBody {
    fn position(&self) -> Vec2;
    fn velocity(&self) -> Vec2;
    fn set_velocity(&mut self, velocity: Vec2);
    fn gravity_scale(&self) -> f32;
    fn set_gravity_scale(&mut self, scale: f32);
    fn set_collision_enabled(&mut self, enabled: bool);
}

/// Raycast against the ground/wall layer.
pub trait CollisionProbe {
    fn probe(&self, origin: Vec2, direction: Dir2, max_distance: f32) -> bool;
}

/// Animation parameter table.
pub trait AnimationSink {
    fn set_float(&mut self, key: &'static str, value: f32);
    fn set_bool(&mut self, key: &'static str, value: bool);
    /// Fire a one-shot cue.
    fn fire(&mut self, cue: &'static str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    Ground,
    Wall,
    Double,
}

/// What happened during a tick, for logging and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// False when control was disabled or a knockback suppressed the tick.
    pub ran: bool,
    pub jump: Option<JumpKind>,
    pub flipped: bool,
    pub landed: bool,
}

impl LocomotionState {
    /// Capture the body's gravity scale and park the character until respawn finishes.
    pub fn activate(&mut self, body: &mut impl CharacterBody) {
        self.default_gravity_scale = body.gravity_scale();
        self.respawn_finished(false, body);
    }

    /// Enable or disable control, gravity and collision together. Idempotent.
    pub fn respawn_finished(&mut self, finished: bool, body: &mut impl CharacterBody) {
        self.can_be_controlled = finished;
        if finished {
            body.set_gravity_scale(self.default_gravity_scale);
        } else {
            body.set_gravity_scale(0.0);
        }
        body.set_collision_enabled(finished);
    }

    /// Advance both timed locks.
    pub fn advance_locks(&mut self, dt: f32) {
        self.wall_jump_lock.tick(dt);
        self.knock_lock.tick(dt);
    }

    /// Run one simulation tick.
    pub fn tick(
        &mut self,
        config: &MovementConfig,
        input: &MovementInput,
        body: &mut impl CharacterBody,
        probe: &impl CollisionProbe,
        sink: &mut impl AnimationSink,
        dt: f32,
    ) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        self.advance_locks(dt);
        outcome.landed = self.update_airborne_status();

        if !self.can_be_controlled {
            self.respawn_finished(false, body);
            return outcome;
        }

        if self.is_knocked() {
            return outcome;
        }

        outcome.ran = true;
        if input.jump_just_pressed {
            outcome.jump = self.jump_button(config, body, sink);
        }
        self.apply_wall_slide(input, body);
        self.apply_horizontal_movement(config, input, body);
        outcome.flipped = self.apply_flip(input);
        self.refresh_collisions(config, body.position(), probe);
        self.present(body.velocity(), sink);

        self.respawn_finished(self.can_be_controlled, body);
        outcome
    }

    /// Push velocity away from facing and lock input for `knock_back_duration`.
    /// Returns false if already knocked.
    pub fn knock_back(
        &mut self,
        config: &MovementConfig,
        body: &mut impl CharacterBody,
        sink: &mut impl AnimationSink,
    ) -> bool {
        if self.is_knocked() {
            return false;
        }

        self.knock_lock.arm(config.knock_back_duration);
        sink.fire(anim_keys::KNOCKBACK);

        let away = -self.facing.sign();
        body.set_velocity(Vec2::new(
            config.knock_back_force.x * away,
            config.knock_back_force.y * away,
        ));
        true
    }

    /// Returns true on the landing edge.
    fn update_airborne_status(&mut self) -> bool {
        if self.is_grounded && self.is_airborne {
            self.is_airborne = false;
            self.can_double_jump = true;
            debug!("Landed: can_double_jump re-armed");
            return true;
        } else if !self.is_grounded && !self.is_airborne {
            self.is_airborne = true;
            debug!("Became airborne");
        }
        false
    }

    fn jump_button(
        &mut self,
        config: &MovementConfig,
        body: &mut impl CharacterBody,
        sink: &mut impl AnimationSink,
    ) -> Option<JumpKind> {
        // Ground beats wall, wall beats double jump.
        if self.is_grounded {
            let v = body.velocity();
            body.set_velocity(Vec2::new(v.x, config.jump_force));
            debug!("Ground jump");
            Some(JumpKind::Ground)
        } else if self.is_wall_detected {
            self.wall_jump(config, body);
            Some(JumpKind::Wall)
        } else if self.is_airborne && self.can_double_jump {
            self.can_double_jump = false;
            let v = body.velocity();
            body.set_velocity(Vec2::new(v.x, config.double_jump_force));
            sink.fire(anim_keys::DOUBLE_JUMP);
            debug!("Double jump");
            Some(JumpKind::Double)
        } else {
            None
        }
    }

    fn wall_jump(&mut self, config: &MovementConfig, body: &mut impl CharacterBody) {
        self.can_double_jump = true;
        body.set_velocity(Vec2::new(
            config.wall_jump_force.x * -self.facing.sign(),
            config.wall_jump_force.y,
        ));
        self.flip();
        self.wall_jump_lock.arm(config.wall_jump_duration);
        debug!("Wall jump: now facing {:?}", self.facing);
    }

    fn apply_wall_slide(&self, input: &MovementInput, body: &mut impl CharacterBody) {
        let v = body.velocity();
        if !self.is_wall_detected || v.y >= 0.0 {
            return;
        }

        let factor = if input.axis.y < 0.0 {
            1.0
        } else {
            WALL_SLIDE_FACTOR
        };
        body.set_velocity(Vec2::new(v.x, v.y * factor));
    }

    fn apply_horizontal_movement(
        &self,
        config: &MovementConfig,
        input: &MovementInput,
        body: &mut impl CharacterBody,
    ) {
        if self.is_wall_detected || self.is_wall_jumping() {
            return;
        }

        let v = body.velocity();
        body.set_velocity(Vec2::new(input.axis.x * config.move_speed, v.y));
    }

    fn apply_flip(&mut self, input: &MovementInput) -> bool {
        let x = input.axis.x;
        let opposes = match self.facing {
            Facing::Right => x < 0.0,
            Facing::Left => x > 0.0,
        };
        if opposes {
            self.flip();
        }
        opposes
    }

    fn flip(&mut self) {
        self.facing = self.facing.flipped();
    }

    fn refresh_collisions(
        &mut self,
        config: &MovementConfig,
        origin: Vec2,
        probe: &impl CollisionProbe,
    ) {
        self.is_grounded = probe.probe(origin, Dir2::NEG_Y, config.ground_check_distance);
        self.is_wall_detected =
            probe.probe(origin, self.facing.direction(), config.wall_check_distance);
    }

    fn present(&self, velocity: Vec2, sink: &mut impl AnimationSink) {
        sink.set_float(anim_keys::X_VELOCITY, velocity.x);
        sink.set_float(anim_keys::Y_VELOCITY, velocity.y);
        sink.set_bool(anim_keys::IS_GROUNDED, self.is_grounded);
        sink.set_bool(anim_keys::IS_WALL_DETECTED, self.is_wall_detected);
    }
}

//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Floors, platforms and walls. Both locomotion probes test this layer.
    Ground,
    /// Player character
    Player,
    /// Spikes and other contact damage (knockback)
    Hazard,
    /// Out-of-bounds volumes that kill on contact
    KillZone,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for level geometry colliders
#[derive(Component, Debug)]
pub struct Ground;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// +1 when facing right, -1 when facing left.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Facing::Right => Facing::Left,
            Facing::Left => Facing::Right,
        }
    }

    /// Direction of the wall probe.
    pub fn direction(self) -> Dir2 {
        match self {
            Facing::Right => Dir2::X,
            Facing::Left => Dir2::NEG_X,
        }
    }
}

/// Author-time locomotion tuning for one character.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct MovementConfig {
    pub move_speed: f32,
    pub jump_force: f32,
    pub double_jump_force: f32,
    /// Horizontal push away from the wall and vertical launch.
    pub wall_jump_force: Vec2,
    pub wall_jump_duration: f32,
    pub knock_back_force: Vec2,
    pub knock_back_duration: f32,
    pub ground_check_distance: f32,
    pub wall_check_distance: f32,
    pub gravity_scale_default: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            move_speed: 260.0,
            jump_force: 620.0,
            double_jump_force: 560.0,
            wall_jump_force: Vec2::new(300.0, 580.0),
            wall_jump_duration: 0.6,
            knock_back_force: Vec2::new(320.0, 380.0),
            knock_back_duration: 0.6,
            // Probes start at the body centre, so these include the half extents.
            ground_check_distance: 26.0,
            wall_check_distance: 14.0,
            gravity_scale_default: 1.0,
        }
    }
}

/// A timed boolean lock advanced once per tick.
///
/// Re-arming overwrites any pending countdown rather than stacking.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TimedLock {
    active: bool,
    remaining: f32,
}

impl TimedLock {
    pub fn arm(&mut self, duration: f32) {
        self.active = true;
        self.remaining = duration;
    }

    /// Counts down by `dt`, clearing the lock once its time is used up.
    pub fn tick(&mut self, dt: f32) {
        if !self.active {
            return;
        }
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.active = false;
            self.remaining = 0.0;
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }
}

/// Mutable locomotion state owned by a single character.
#[derive(Component, Debug, Clone)]
pub struct LocomotionState {
    pub facing: Facing,
    pub is_grounded: bool,
    pub is_wall_detected: bool,
    /// Edge-tracked: set on the tick after leaving the ground, cleared on landing.
    pub is_airborne: bool,
    pub can_double_jump: bool,
    pub wall_jump_lock: TimedLock,
    pub knock_lock: TimedLock,
    pub can_be_controlled: bool,
    pub default_gravity_scale: f32,
}

impl Default for LocomotionState {
    fn default() -> Self {
        Self {
            facing: Facing::Right,
            is_grounded: false,
            is_wall_detected: false,
            is_airborne: false,
            can_double_jump: false,
            wall_jump_lock: TimedLock::default(),
            knock_lock: TimedLock::default(),
            can_be_controlled: false,
            default_gravity_scale: 1.0,
        }
    }
}

impl LocomotionState {
    pub fn is_wall_jumping(&self) -> bool {
        self.wall_jump_lock.is_active()
    }

    pub fn is_knocked(&self) -> bool {
        self.knock_lock.is_active()
    }
}

/// Countdown before the spawn orchestrator hands control to the player.
#[derive(Component, Debug)]
pub struct SpawnIntro {
    pub remaining: f32,
}

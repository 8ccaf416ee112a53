//! Animator parameter table and animation state machine.
//!
//! The locomotion controller pushes continuous parameters and one-shot cues
//! into [`AnimatorParams`]. The systems here turn those into an animation
//! state and frame progression. Nothing here feeds back into movement.

use bevy::prelude::*;
use std::collections::HashMap;

use super::AnimationClips;
use crate::movement::controller::anim_keys;
use crate::movement::{AnimationSink, Facing, LocomotionState};

/// Horizontal speed below which a grounded character counts as idle.
const RUN_THRESHOLD: f32 = 0.1;

/// Named animation parameters and pending cues for one character.
#[derive(Component, Debug, Default)]
pub struct AnimatorParams {
    floats: HashMap<&'static str, f32>,
    bools: HashMap<&'static str, bool>,
    pending_cues: Vec<&'static str>,
}

impl AnimatorParams {
    /// Float parameter, 0.0 if never set.
    pub fn float(&self, key: &str) -> f32 {
        self.floats.get(key).copied().unwrap_or(0.0)
    }

    /// Bool parameter, false if never set.
    pub fn flag(&self, key: &str) -> bool {
        self.bools.get(key).copied().unwrap_or(false)
    }

    pub fn pending_cues(&self) -> &[&'static str] {
        &self.pending_cues
    }

    /// Drain cues fired since the last call.
    pub fn take_cues(&mut self) -> Vec<&'static str> {
        std::mem::take(&mut self.pending_cues)
    }
}

impl AnimationSink for AnimatorParams {
    fn set_float(&mut self, key: &'static str, value: f32) {
        self.floats.insert(key, value);
    }

    fn set_bool(&mut self, key: &'static str, value: bool) {
        self.bools.insert(key, value);
    }

    fn fire(&mut self, cue: &'static str) {
        self.pending_cues.push(cue);
    }
}

/// Animation states for characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Run,
    Jump,
    Fall,
    WallSlide,
    DoubleJump,
    KnockBack,
}

impl AnimationState {
    /// Clip key and sprite-name suffix for this state.
    pub fn suffix(self) -> &'static str {
        match self {
            AnimationState::Idle => "idle",
            AnimationState::Run => "run",
            AnimationState::Jump => "jump",
            AnimationState::Fall => "fall",
            AnimationState::WallSlide => "wall_slide",
            AnimationState::DoubleJump => "double_jump",
            AnimationState::KnockBack => "knockback",
        }
    }

    /// Placeholder tint until sprite sheets are wired in.
    pub fn tint(self) -> Color {
        match self {
            AnimationState::Idle => Color::srgb(0.9, 0.9, 0.9),
            AnimationState::Run => Color::srgb(0.85, 0.95, 0.85),
            AnimationState::Jump => Color::srgb(0.85, 0.85, 0.95),
            AnimationState::Fall => Color::srgb(0.75, 0.75, 0.9),
            AnimationState::WallSlide => Color::srgb(0.95, 0.9, 0.7),
            AnimationState::DoubleJump => Color::srgb(0.6, 0.8, 1.0),
            AnimationState::KnockBack => Color::srgb(1.0, 0.45, 0.45),
        }
    }
}

/// Pick the continuous state from the parameter table.
pub fn select_state(params: &AnimatorParams) -> AnimationState {
    let vx = params.float(anim_keys::X_VELOCITY);
    let vy = params.float(anim_keys::Y_VELOCITY);

    if !params.flag(anim_keys::IS_GROUNDED) {
        if params.flag(anim_keys::IS_WALL_DETECTED) && vy < 0.0 {
            AnimationState::WallSlide
        } else if vy > 0.0 {
            AnimationState::Jump
        } else {
            AnimationState::Fall
        }
    } else if vx.abs() > RUN_THRESHOLD {
        AnimationState::Run
    } else {
        AnimationState::Idle
    }
}

/// Map a one-shot cue to the state it forces.
pub fn cue_state(cue: &str) -> Option<AnimationState> {
    match cue {
        anim_keys::KNOCKBACK => Some(AnimationState::KnockBack),
        anim_keys::DOUBLE_JUMP => Some(AnimationState::DoubleJump),
        _ => None,
    }
}

/// Component for animation playback.
#[derive(Component, Debug)]
pub struct AnimationController {
    pub state: AnimationState,
    pub current_frame: u32,
    pub total_frames: u32,
    pub frame_timer: f32,
    pub frame_duration: f32,
    pub looping: bool,
    /// Whether a non-looping animation has finished.
    pub finished: bool,
}

impl Default for AnimationController {
    fn default() -> Self {
        Self {
            state: AnimationState::Idle,
            current_frame: 0,
            total_frames: 4,
            frame_timer: 0.0,
            frame_duration: 0.15,
            looping: true,
            finished: false,
        }
    }
}

impl AnimationController {
    /// Set the animation state, resetting playback if the state changed.
    /// Returns true on a change.
    pub fn set_state(&mut self, state: AnimationState, clips: &AnimationClips) -> bool {
        if self.state == state {
            return false;
        }

        let clip = clips.clip(state);
        self.state = state;
        self.current_frame = 0;
        self.frame_timer = 0.0;
        self.finished = false;
        self.total_frames = clip.frames.max(1);
        self.frame_duration = clip.frame_duration;
        self.looping = clip.looping;
        true
    }

    /// Restart the current clip from its first frame.
    pub fn restart(&mut self) {
        self.current_frame = 0;
        self.frame_timer = 0.0;
        self.finished = false;
    }

    /// A non-looping clip that is still playing.
    pub fn is_playing_one_shot(&self) -> bool {
        !self.looping && !self.finished
    }

    /// Advance playback by `dt`. Returns true when a non-looping clip completes.
    pub fn advance(&mut self, dt: f32) -> bool {
        if self.finished || self.frame_duration <= 0.0 {
            return false;
        }

        self.frame_timer += dt;
        let mut completed = false;
        while self.frame_timer >= self.frame_duration && !self.finished {
            self.frame_timer -= self.frame_duration;
            self.current_frame += 1;

            if self.current_frame >= self.total_frames {
                if self.looping {
                    self.current_frame = 0;
                } else {
                    self.current_frame = self.total_frames - 1;
                    self.finished = true;
                    completed = true;
                }
            }
        }
        completed
    }
}

/// Consume cues and pick the animation state from the parameter table.
pub fn animation_state_machine(
    clips: Res<AnimationClips>,
    mut query: Query<(Entity, &mut AnimatorParams, &mut AnimationController)>,
) {
    for (entity, mut params, mut controller) in &mut query {
        let from = controller.state;

        for cue in params.take_cues() {
            let Some(state) = cue_state(cue) else {
                warn!("Unknown animation cue '{}'", cue);
                continue;
            };
            // A repeated cue replays the clip.
            if !controller.set_state(state, &clips) {
                controller.restart();
            }
        }

        if !controller.is_playing_one_shot() {
            controller.set_state(select_state(&params), &clips);
        }

        if controller.state != from {
            debug!(
                "Animation {:?} -> {:?} for {}",
                from, controller.state, entity
            );
        }
    }
}

/// System that updates animation frames based on time.
pub fn update_animation_frames(
    time: Res<Time>,
    mut query: Query<(Entity, &mut AnimationController)>,
) {
    for (entity, mut controller) in &mut query {
        if controller.advance(time.delta_secs()) {
            debug!("Animation {:?} finished for {}", controller.state, entity);
        }
    }
}

/// Tint the sprite for the current state.
pub fn apply_animation_tint(
    mut query: Query<(&AnimationController, &mut Sprite), Changed<AnimationController>>,
) {
    for (controller, mut sprite) in &mut query {
        sprite.color = controller.state.tint();
    }
}

/// Mirror the sprite to match the locomotion facing.
pub fn sync_facing(mut query: Query<(&LocomotionState, &mut Sprite), Changed<LocomotionState>>) {
    for (state, mut sprite) in &mut query {
        let flip_x = state.facing == Facing::Left;
        if sprite.flip_x != flip_x {
            sprite.flip_x = flip_x;
        }
    }
}

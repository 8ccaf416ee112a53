//! Sprites module: tests for parameter-driven animation selection.

use super::{AnimationClips, AnimationController, AnimationState, AnimatorParams, select_state};
use crate::movement::AnimationSink;
use crate::movement::controller::anim_keys;

fn params(vx: f32, vy: f32, grounded: bool, wall: bool) -> AnimatorParams {
    let mut params = AnimatorParams::default();
    params.set_float(anim_keys::X_VELOCITY, vx);
    params.set_float(anim_keys::Y_VELOCITY, vy);
    params.set_bool(anim_keys::IS_GROUNDED, grounded);
    params.set_bool(anim_keys::IS_WALL_DETECTED, wall);
    params
}

#[test]
fn test_unset_params_read_as_defaults() {
    let params = AnimatorParams::default();
    assert_eq!(params.float(anim_keys::X_VELOCITY), 0.0);
    assert!(!params.flag(anim_keys::IS_GROUNDED));
    // Nothing set means not grounded and not rising
    assert_eq!(select_state(&params), AnimationState::Fall);
}

#[test]
fn test_grounded_states() {
    assert_eq!(select_state(&params(0.0, 0.0, true, false)), AnimationState::Idle);
    assert_eq!(select_state(&params(-260.0, 0.0, true, false)), AnimationState::Run);
    // Standing against a wall on the ground is not a wall slide
    assert_eq!(select_state(&params(0.0, -5.0, true, true)), AnimationState::Idle);
}

#[test]
fn test_airborne_states() {
    assert_eq!(select_state(&params(0.0, 300.0, false, false)), AnimationState::Jump);
    assert_eq!(select_state(&params(0.0, -300.0, false, false)), AnimationState::Fall);
    assert_eq!(select_state(&params(0.0, -15.0, false, true)), AnimationState::WallSlide);
    assert_eq!(select_state(&params(0.0, 300.0, false, true)), AnimationState::Jump);
}

#[test]
fn test_cues_queue_until_taken() {
    let mut params = AnimatorParams::default();
    params.fire(anim_keys::DOUBLE_JUMP);
    params.fire(anim_keys::KNOCKBACK);
    assert_eq!(
        params.pending_cues(),
        &[anim_keys::DOUBLE_JUMP, anim_keys::KNOCKBACK]
    );

    let taken = params.take_cues();
    assert_eq!(taken.len(), 2);
    assert!(params.pending_cues().is_empty());
}

#[test]
fn test_one_shot_clip_finishes_once() {
    let clips = AnimationClips::default();
    let mut controller = AnimationController::default();
    assert!(controller.set_state(AnimationState::KnockBack, &clips));
    assert!(controller.is_playing_one_shot());
    assert_eq!(controller.current_frame, 0);
    assert_eq!(controller.total_frames, 3);

    // Built-in knockback clip: 3 frames at 0.1s
    assert!(!controller.advance(0.125));
    assert!(!controller.advance(0.125));
    assert!(controller.advance(0.125));
    assert!(controller.finished);
    assert_eq!(controller.current_frame, 2);
    assert!(!controller.advance(1.0));
}

#[test]
fn test_looping_clip_wraps() {
    let clips = AnimationClips::default();
    let mut controller = AnimationController::default();
    controller.set_state(AnimationState::Run, &clips);
    assert!(!controller.set_state(AnimationState::Run, &clips));

    // Built-in run clip: 6 frames at 0.1s
    controller.advance(0.65);
    assert_eq!(controller.current_frame, 0);
    assert!(!controller.finished);
}

#[test]
fn test_clips_json_overrides_builtin() {
    let json = r#"{
        "version": 2,
        "clips": {
            "double_jump": { "frames": 6, "frame_duration": 0.05, "looping": false }
        }
    }"#;
    let clips = AnimationClips::from_json(json).expect("clip json should parse");
    assert_eq!(clips.version, 2);
    assert_eq!(clips.clip(AnimationState::DoubleJump).frames, 6);
    // States missing from the file keep built-in timing
    assert_eq!(clips.clip(AnimationState::Idle).frames, 4);
}

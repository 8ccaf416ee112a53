//! Movement domain: keyboard sampling into [`MovementInput`].

use bevy::prelude::*;

use crate::movement::MovementInput;

const LEFT: [KeyCode; 2] = [KeyCode::KeyA, KeyCode::ArrowLeft];
const RIGHT: [KeyCode; 2] = [KeyCode::KeyD, KeyCode::ArrowRight];
const DOWN: [KeyCode; 2] = [KeyCode::KeyS, KeyCode::ArrowDown];
const UP: [KeyCode; 2] = [KeyCode::KeyW, KeyCode::ArrowUp];
const JUMP: [KeyCode; 2] = [KeyCode::Space, KeyCode::KeyK];

/// -1, 0 or +1; opposing keys cancel out.
fn key_axis(
    keyboard: &ButtonInput<KeyCode>,
    negative: [KeyCode; 2],
    positive: [KeyCode; 2],
) -> f32 {
    let held = |keys: [KeyCode; 2]| {
        if keyboard.any_pressed(keys) {
            1.0
        } else {
            0.0
        }
    };
    held(positive) - held(negative)
}

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    *input = MovementInput::new(
        key_axis(&keyboard, LEFT, RIGHT),
        // Down drops the character off a wall slide
        key_axis(&keyboard, DOWN, UP),
        keyboard.any_just_pressed(JUMP),
    );
}

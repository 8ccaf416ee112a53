//! Sprites module for character presentation.
//!
//! This module handles:
//! - The animator parameter table the locomotion controller writes into
//! - Animation state selection and playback
//! - Loading animation clip timing from JSON
//! - Mirroring sprites to the character's facing

pub mod animation;
pub mod manifest;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

pub use animation::*;
pub use manifest::*;

const CLIPS_PATH: &str = "assets/sprites/animations.json";

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AnimationClips>()
            .add_systems(Startup, load_animation_clips)
            .add_systems(
                Update,
                (
                    animation_state_machine,
                    update_animation_frames,
                    apply_animation_tint,
                    sync_facing,
                )
                    .chain(),
            );
    }
}

/// System to load the animation clips at startup.
fn load_animation_clips(mut clips: ResMut<AnimationClips>) {
    clips.load_from_file(CLIPS_PATH);
}

//! Animation clip manifest loading.
//!
//! Loads the clip JSON which defines frame counts, frame timing and looping
//! for each animation state. Missing clips fall back to built-in values.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::AnimationState;

/// Timing for one animation clip.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ClipDef {
    pub frames: u32,
    /// Seconds per frame.
    pub frame_duration: f32,
    pub looping: bool,
}

/// Resource containing all loaded clip definitions, keyed by state suffix.
#[derive(Resource, Default)]
pub struct AnimationClips {
    pub version: u32,
    pub clips: HashMap<String, ClipDef>,
}

/// Raw manifest JSON structure.
#[derive(Deserialize)]
struct ClipsJson {
    version: u32,
    clips: HashMap<String, ClipDef>,
}

impl AnimationClips {
    /// Parse clips from JSON text.
    pub fn from_json(contents: &str) -> Result<Self, serde_json::Error> {
        let json: ClipsJson = serde_json::from_str(contents)?;
        Ok(Self {
            version: json.version,
            clips: json.clips,
        })
    }

    /// Load the manifest from a JSON file, keeping built-in clips on failure.
    pub fn load_from_file(&mut self, path: &str) {
        let manifest_path = Path::new(path);

        if !manifest_path.exists() {
            warn!(
                "Animation clips not found at {:?}, using built-in clips",
                path
            );
            return;
        }

        let contents = match fs::read_to_string(manifest_path) {
            Ok(c) => c,
            Err(e) => {
                error!("Failed to read animation clips: {}", e);
                return;
            }
        };

        match Self::from_json(&contents) {
            Ok(loaded) => {
                *self = loaded;
                info!(
                    "Loaded animation clips v{} with {} clips",
                    self.version,
                    self.clips.len()
                );
            }
            Err(e) => error!("Failed to parse animation clips: {}", e),
        }
    }

    /// Clip for a state, or the built-in default.
    pub fn clip(&self, state: AnimationState) -> ClipDef {
        self.clips
            .get(state.suffix())
            .copied()
            .unwrap_or_else(|| builtin_clip(state))
    }
}

fn builtin_clip(state: AnimationState) -> ClipDef {
    match state {
        AnimationState::Idle => ClipDef {
            frames: 4,
            frame_duration: 0.15,
            looping: true,
        },
        AnimationState::Run => ClipDef {
            frames: 6,
            frame_duration: 0.1,
            looping: true,
        },
        AnimationState::Jump | AnimationState::Fall => ClipDef {
            frames: 2,
            frame_duration: 0.15,
            looping: true,
        },
        AnimationState::WallSlide => ClipDef {
            frames: 2,
            frame_duration: 0.2,
            looping: true,
        },
        AnimationState::DoubleJump => ClipDef {
            frames: 4,
            frame_duration: 0.08,
            looping: false,
        },
        AnimationState::KnockBack => ClipDef {
            frames: 3,
            frame_duration: 0.1,
            looping: false,
        },
    }
}

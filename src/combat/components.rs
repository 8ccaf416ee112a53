//! Combat domain: character stats and damage sources.

use bevy::prelude::*;

/// Combat stats exposed as data. Nothing in this crate resolves them.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct CharacterStats {
    pub health_points: f32,
    pub attack_power: f32,
    pub block_duration: f32,
}

/// Touching this knocks the player back
#[derive(Component, Debug)]
pub struct Hazard;

/// Touching this kills the player
#[derive(Component, Debug)]
pub struct KillZone;

/// How the death marker looks for a character.
#[derive(Component, Debug, Clone)]
pub struct DeathEffectStyle {
    pub size: f32,
    pub color: Color,
    /// Seconds the marker stays on screen.
    pub lifetime: f32,
}

impl Default for DeathEffectStyle {
    fn default() -> Self {
        Self {
            size: 24.0,
            color: Color::WHITE,
            lifetime: 1.0,
        }
    }
}

/// Marker left behind where a character died
#[derive(Component, Debug)]
pub struct DeathEffect;

/// Remaining seconds before a death marker is removed
#[derive(Component, Debug)]
pub struct DeathEffectLifetime {
    pub remaining: f32,
    pub total: f32,
}

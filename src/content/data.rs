//! Data definitions for RON content files.
//!
//! These structs mirror the structure in assets/data/*.ron and are used
//! for deserialization. The ContentRegistry provides lookup by id.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::combat::{CharacterStats, DeathEffectStyle};
use crate::movement::MovementConfig;

// ============================================================================
// Common wrapper for RON files with schema_version and items
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

// ============================================================================
// Characters (characters.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CharacterDef {
    pub id: String,
    pub name: String,
    pub movement: MovementDef,
    pub stats: CharacterStatsDef,
    pub death_effect: DeathEffectDef,
    /// Seconds before the spawn orchestrator hands over control.
    #[serde(default = "default_spawn_intro")]
    pub spawn_intro: f32,
}

fn default_spawn_intro() -> f32 {
    0.5
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MovementDef {
    pub move_speed: f32,
    pub jump_force: f32,
    pub double_jump_force: f32,
    pub wall_jump_force: (f32, f32),
    pub wall_jump_duration: f32,
    pub knock_back_force: (f32, f32),
    pub knock_back_duration: f32,
    pub ground_check_distance: f32,
    pub wall_check_distance: f32,
    pub gravity_scale_default: f32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CharacterStatsDef {
    pub health_points: f32,
    pub attack_power: f32,
    pub block_duration: f32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeathEffectDef {
    pub size: f32,
    pub color: (f32, f32, f32),
    #[serde(default = "default_death_effect_lifetime")]
    pub lifetime: f32,
}

fn default_death_effect_lifetime() -> f32 {
    1.0
}

impl From<&MovementDef> for MovementConfig {
    fn from(def: &MovementDef) -> Self {
        Self {
            move_speed: def.move_speed,
            jump_force: def.jump_force,
            double_jump_force: def.double_jump_force,
            wall_jump_force: Vec2::new(def.wall_jump_force.0, def.wall_jump_force.1),
            wall_jump_duration: def.wall_jump_duration,
            knock_back_force: Vec2::new(def.knock_back_force.0, def.knock_back_force.1),
            knock_back_duration: def.knock_back_duration,
            ground_check_distance: def.ground_check_distance,
            wall_check_distance: def.wall_check_distance,
            gravity_scale_default: def.gravity_scale_default,
        }
    }
}

impl From<&CharacterStatsDef> for CharacterStats {
    fn from(def: &CharacterStatsDef) -> Self {
        Self {
            health_points: def.health_points,
            attack_power: def.attack_power,
            block_duration: def.block_duration,
        }
    }
}

impl From<&DeathEffectDef> for DeathEffectStyle {
    fn from(def: &DeathEffectDef) -> Self {
        Self {
            size: def.size,
            color: Color::srgb(def.color.0, def.color.1, def.color.2),
            lifetime: def.lifetime,
        }
    }
}

impl CharacterDef {
    /// Built-in character used when content is missing or invalid.
    pub fn fallback() -> Self {
        let movement = MovementConfig::default();
        Self {
            id: super::DEFAULT_CHARACTER_ID.to_string(),
            name: "Or".to_string(),
            movement: MovementDef {
                move_speed: movement.move_speed,
                jump_force: movement.jump_force,
                double_jump_force: movement.double_jump_force,
                wall_jump_force: (movement.wall_jump_force.x, movement.wall_jump_force.y),
                wall_jump_duration: movement.wall_jump_duration,
                knock_back_force: (movement.knock_back_force.x, movement.knock_back_force.y),
                knock_back_duration: movement.knock_back_duration,
                ground_check_distance: movement.ground_check_distance,
                wall_check_distance: movement.wall_check_distance,
                gravity_scale_default: movement.gravity_scale_default,
            },
            stats: CharacterStatsDef {
                health_points: 100.0,
                attack_power: 10.0,
                block_duration: 0.4,
            },
            death_effect: DeathEffectDef {
                size: 32.0,
                color: (0.95, 0.35, 0.25),
                lifetime: default_death_effect_lifetime(),
            },
            spawn_intro: default_spawn_intro(),
        }
    }
}

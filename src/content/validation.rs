//! Validation for authored character definitions.

use super::data::*;
use super::registry::ContentRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// Value must be finite and >= 0.
    NonNegative,
    /// Value must be finite and > 0.
    Positive,
}

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub character_id: String,
    pub field: &'static str,
    pub constraint: Constraint,
    pub value: f32,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let expected = match self.constraint {
            Constraint::NonNegative => ">= 0",
            Constraint::Positive => "> 0",
        };
        write!(
            f,
            "Character '{}' field '{}' is {} but must be {}",
            self.character_id, self.field, self.value, expected
        )
    }
}

/// Helper macro for checking a numeric field
macro_rules! check_field {
    ($errors:expr, $id:expr, $field:expr, $value:expr, $constraint:expr) => {
        let value: f32 = $value;
        let ok = value.is_finite()
            && match $constraint {
                Constraint::NonNegative => value >= 0.0,
                Constraint::Positive => value > 0.0,
            };
        if !ok {
            $errors.push(ValidationError {
                character_id: $id.to_string(),
                field: $field,
                constraint: $constraint,
                value,
            });
        }
    };
}

/// Validate one character. Returns an empty list if every field is in range.
pub fn validate_character(def: &CharacterDef) -> Vec<ValidationError> {
    use Constraint::*;

    let mut errors = Vec::new();
    let id = &def.id;
    let m = &def.movement;

    check_field!(errors, id, "movement.move_speed", m.move_speed, NonNegative);
    check_field!(errors, id, "movement.jump_force", m.jump_force, NonNegative);
    check_field!(
        errors,
        id,
        "movement.double_jump_force",
        m.double_jump_force,
        NonNegative
    );
    check_field!(
        errors,
        id,
        "movement.wall_jump_force.x",
        m.wall_jump_force.0,
        NonNegative
    );
    check_field!(
        errors,
        id,
        "movement.wall_jump_force.y",
        m.wall_jump_force.1,
        NonNegative
    );
    check_field!(
        errors,
        id,
        "movement.wall_jump_duration",
        m.wall_jump_duration,
        Positive
    );
    check_field!(
        errors,
        id,
        "movement.knock_back_force.x",
        m.knock_back_force.0,
        NonNegative
    );
    check_field!(
        errors,
        id,
        "movement.knock_back_force.y",
        m.knock_back_force.1,
        NonNegative
    );
    check_field!(
        errors,
        id,
        "movement.knock_back_duration",
        m.knock_back_duration,
        Positive
    );
    check_field!(
        errors,
        id,
        "movement.ground_check_distance",
        m.ground_check_distance,
        NonNegative
    );
    check_field!(
        errors,
        id,
        "movement.wall_check_distance",
        m.wall_check_distance,
        NonNegative
    );
    check_field!(
        errors,
        id,
        "movement.gravity_scale_default",
        m.gravity_scale_default,
        NonNegative
    );
    check_field!(errors, id, "spawn_intro", def.spawn_intro, NonNegative);
    check_field!(errors, id, "death_effect.size", def.death_effect.size, NonNegative);
    check_field!(
        errors,
        id,
        "death_effect.lifetime",
        def.death_effect.lifetime,
        Positive
    );

    errors
}

/// Validate every character in the registry.
/// Returns a list of validation errors, empty if all definitions are valid.
pub fn validate_content(registry: &ContentRegistry) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for def in registry.characters.values() {
        errors.extend(validate_character(def));
    }
    errors
}

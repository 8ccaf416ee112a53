//! Content domain: RON character definitions, loading and validation.

mod data;
mod loader;
mod registry;
mod validation;

#[cfg(test)]
mod tests;

pub use data::{CharacterDef, CharacterStatsDef, DataFile, DeathEffectDef, MovementDef};
pub use loader::{ContentLoadError, SCHEMA_VERSION, load_all_content, parse_data_file};
pub use registry::ContentRegistry;
pub use validation::{Constraint, ValidationError, validate_character, validate_content};

use bevy::prelude::*;
use std::path::Path;

/// Character spawned for the player when nothing else is selected.
pub const DEFAULT_CHARACTER_ID: &str = "character_or";

const CONTENT_PATH: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ContentRegistry>()
            .add_systems(PreStartup, load_content);
    }
}

fn load_content(mut commands: Commands) {
    let mut registry = match load_all_content(Path::new(CONTENT_PATH)) {
        Ok(registry) => registry,
        Err(e) => {
            warn!("{}; falling back to built-in content", e);
            ContentRegistry::default()
        }
    };

    let errors = validate_content(&registry);
    for error in &errors {
        error!("{}", error);
    }
    // Invalid definitions are dropped so lookups fall back to defaults.
    for error in &errors {
        registry.characters.remove(&error.character_id);
    }

    info!("{}", registry.summary());
    commands.insert_resource(registry);
}

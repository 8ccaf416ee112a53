//! ContentRegistry resource providing lookups for loaded content.

use bevy::prelude::*;
use std::collections::HashMap;

use super::data::*;

/// Central registry for loaded character definitions.
#[derive(Resource, Default)]
pub struct ContentRegistry {
    pub characters: HashMap<String, CharacterDef>,
}

impl ContentRegistry {
    /// Look up a character, falling back to the built-in definition.
    pub fn character_or_fallback(&self, id: &str) -> CharacterDef {
        match self.characters.get(id) {
            Some(def) => def.clone(),
            None => {
                warn!("Character '{}' not found in registry, using defaults", id);
                CharacterDef::fallback()
            }
        }
    }

    pub fn summary(&self) -> String {
        format!("ContentRegistry loaded: {} character(s)", self.characters.len())
    }
}

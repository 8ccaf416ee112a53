//! Reads character definitions from RON at startup.

use bevy::prelude::*;
use ron::Options;
use ron::extensions::Extensions;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

use super::data::{CharacterDef, DataFile};
use super::registry::ContentRegistry;

/// Newest `schema_version` this build understands.
pub const SCHEMA_VERSION: u32 = 1;

const CHARACTERS_FILE: &str = "characters.ron";

#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl ContentLoadError {
    fn new(file: &str, message: impl Into<String>) -> Self {
        Self {
            file: file.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Parse a `DataFile<T>` document and return its items.
///
/// Files newer than [`SCHEMA_VERSION`] are rejected rather than half-read.
pub fn parse_data_file<T: DeserializeOwned>(
    file_name: &str,
    contents: &str,
) -> Result<Vec<T>, ContentLoadError> {
    let options = Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
    let data: DataFile<T> = options
        .from_str(contents)
        .map_err(|e| ContentLoadError::new(file_name, format!("Parse error: {}", e)))?;

    if data.schema_version > SCHEMA_VERSION {
        return Err(ContentLoadError::new(
            file_name,
            format!(
                "schema_version {} is newer than supported {}",
                data.schema_version, SCHEMA_VERSION
            ),
        ));
    }

    Ok(data.items)
}

/// Load every content file under `base_path` into a registry.
pub fn load_all_content(base_path: &Path) -> Result<ContentRegistry, ContentLoadError> {
    let path = base_path.join(CHARACTERS_FILE);
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(&path)
        .map_err(|e| ContentLoadError::new(&file_name, format!("IO error: {}", e)))?;

    let mut registry = ContentRegistry::default();
    for character in parse_data_file::<CharacterDef>(&file_name, &contents)? {
        if registry.characters.contains_key(&character.id) {
            warn!(
                "Duplicate character id '{}' in {}; keeping the later entry",
                character.id, file_name
            );
        }
        registry.characters.insert(character.id.clone(), character);
    }

    Ok(registry)
}

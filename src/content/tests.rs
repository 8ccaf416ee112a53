//! Content domain: tests for RON parsing and validation.

use std::path::Path;

use super::{
    CONTENT_PATH, CharacterDef, Constraint, ContentRegistry, DEFAULT_CHARACTER_ID,
    SCHEMA_VERSION, load_all_content, parse_data_file, validate_character, validate_content,
};
use crate::movement::MovementConfig;

const CHARACTERS_RON: &str = r#"
(
    schema_version: 1,
    items: [
        (
            id: "character_or",
            name: "Or",
            movement: (
                move_speed: 8.0,
                jump_force: 12.0,
                double_jump_force: 10.0,
                wall_jump_force: (5.0, 11.0),
                wall_jump_duration: 0.6,
                knock_back_force: (4.0, 6.0),
                knock_back_duration: 0.6,
                ground_check_distance: 1.1,
                wall_check_distance: 0.6,
                gravity_scale_default: 3.5,
            ),
            stats: (
                health_points: 100.0,
                attack_power: 12.0,
                block_duration: 0.4,
            ),
            death_effect: (
                size: 32.0,
                color: (1.0, 0.3, 0.2),
            ),
        ),
    ],
)
"#;

#[test]
fn test_parse_characters_file() {
    let items: Vec<CharacterDef> = parse_data_file("characters.ron", CHARACTERS_RON)
        .expect("sample content should parse");

    assert_eq!(items.len(), 1);
    let or = &items[0];
    assert_eq!(or.id, "character_or");
    assert_eq!(or.stats.attack_power, 12.0);
    // spawn_intro is optional and defaults when omitted
    assert_eq!(or.spawn_intro, 0.5);

    let config = MovementConfig::from(&or.movement);
    assert_eq!(config.wall_jump_force.x, 5.0);
    assert_eq!(config.wall_jump_force.y, 11.0);
    assert_eq!(config.knock_back_force.y, 6.0);
    assert_eq!(config.gravity_scale_default, 3.5);
}

#[test]
fn test_parse_error_names_file() {
    let result = parse_data_file::<CharacterDef>("broken.ron", "(schema_version: 1, items: [(id: ");
    let err = result.expect_err("truncated content must not parse");
    assert_eq!(err.file, "broken.ron");
    assert!(err.to_string().starts_with("Failed to load broken.ron"));
}

#[test]
fn test_newer_schema_is_rejected() {
    let contents = format!("(schema_version: {}, items: [])", SCHEMA_VERSION + 1);
    let err = parse_data_file::<CharacterDef>("characters.ron", &contents)
        .expect_err("future schema must be rejected");
    assert!(err.message.contains("schema_version"));

    let current = format!("(schema_version: {}, items: [])", SCHEMA_VERSION);
    let items = parse_data_file::<CharacterDef>("characters.ron", &current)
        .expect("current schema should parse");
    assert!(items.is_empty());
}

#[test]
fn test_shipped_content_loads_and_validates() {
    let registry = load_all_content(Path::new(CONTENT_PATH)).expect("shipped content should load");
    assert!(registry.characters.contains_key(DEFAULT_CHARACTER_ID));
    assert!(validate_content(&registry).is_empty());
}

#[test]
fn test_missing_directory_reports_io_error() {
    let err = load_all_content(Path::new("does/not/exist"))
        .err()
        .expect("missing directory must fail");
    assert!(err.message.starts_with("IO error"));
}

#[test]
fn test_fallback_character_is_valid() {
    let fallback = CharacterDef::fallback();
    assert_eq!(fallback.id, DEFAULT_CHARACTER_ID);
    assert!(validate_character(&fallback).is_empty());
    assert_eq!(
        MovementConfig::from(&fallback.movement),
        MovementConfig::default()
    );
}

#[test]
fn test_validation_rejects_out_of_range_fields() {
    let mut def = CharacterDef::fallback();
    def.movement.wall_jump_duration = 0.0;
    def.movement.knock_back_force.0 = -1.0;
    def.movement.jump_force = f32::NAN;

    let errors = validate_character(&def);
    assert_eq!(errors.len(), 3);

    let duration = errors
        .iter()
        .find(|e| e.field == "movement.wall_jump_duration")
        .expect("zero duration should be reported");
    assert_eq!(duration.constraint, Constraint::Positive);

    let force = errors
        .iter()
        .find(|e| e.field == "movement.knock_back_force.x")
        .expect("negative force should be reported");
    assert_eq!(force.constraint, Constraint::NonNegative);

    assert!(errors.iter().any(|e| e.field == "movement.jump_force"));
}

#[test]
fn test_zero_forces_are_allowed() {
    let mut def = CharacterDef::fallback();
    def.movement.double_jump_force = 0.0;
    def.movement.wall_check_distance = 0.0;
    assert!(validate_character(&def).is_empty());
}

#[test]
fn test_registry_falls_back_for_unknown_character() {
    let mut registry = ContentRegistry::default();
    let mut custom = CharacterDef::fallback();
    custom.id = "character_fast".to_string();
    custom.movement.move_speed = 999.0;
    registry.characters.insert(custom.id.clone(), custom);

    assert_eq!(
        registry.character_or_fallback("character_fast").movement.move_speed,
        999.0
    );
    assert_eq!(
        registry.character_or_fallback("missing").id,
        DEFAULT_CHARACTER_ID
    );
    assert!(validate_content(&registry).is_empty());
}

// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and usage.

use super::test_utils::TestFixture;
use crate::config::{ConfigLoader, LanaiConfig, Validate};
use crate::error::config::ConfigError;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = LanaiConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.dictionary.words.len(), 4);
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = LanaiConfig::default();

    config.log.level = "loud".to_string();
    assert!(config.validate().is_err());

    config.log.level = "debug".to_string();
    config.dictionary.words.push("apple".to_string());
    assert!(config.validate().is_err());
}

/// Test loading configuration from a TOML file.
#[test]
fn test_load_config_from_file() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_file(
            "lanai.toml",
            r#"
            [log]
            level = "warn"
            json = true

            [dictionary]
            words = ["flower", "flow", "flight"]
            "#,
        )
        .unwrap();

    let config = ConfigLoader::new(Some(&path), "TEST_FILE").load().unwrap();
    assert_eq!(config.log.level, "warn");
    assert!(config.log.json);
    assert!(config.log.source_location);
    assert_eq!(config.dictionary.words, vec!["flower", "flow", "flight"]);

    let trie = config.dictionary.build_trie();
    assert_eq!(trie.lookup("flight"), Some(&2));
}

/// Test loading configuration from a JSON file.
#[test]
fn test_load_config_from_json_file() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_file("lanai.json", r#"{ "dictionary": { "words": ["solo"] } }"#)
        .unwrap();

    let config = ConfigLoader::new(Some(&path), "TEST_JSON").load().unwrap();
    assert_eq!(config.dictionary.words, vec!["solo"]);
    assert_eq!(config.log.level, "info");
}

/// Test that environment variables override defaults.
#[test]
fn test_environment_overrides() {
    let mut fixture = TestFixture::new().unwrap();
    fixture.set_env("TEST_ENV__LOG__LEVEL", "trace");
    fixture.set_env("TEST_ENV__DICTIONARY__WORDS", "dog,racecar,car");

    let config = ConfigLoader::new(None::<&str>, "TEST_ENV").load().unwrap();
    assert_eq!(config.log.level, "trace");
    assert_eq!(config.dictionary.words, vec!["dog", "racecar", "car"]);
}

/// Test that an invalid file value fails validation during loading.
#[test]
fn test_load_rejects_invalid_values() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_file("lanai.toml", "[log]\nlevel = \"chatty\"\n")
        .unwrap();

    let result = ConfigLoader::new(Some(&path), "TEST_INVALID").load();
    assert!(matches!(result, Err(ConfigError::ValidationError(_))));
}

/// Test error paths for missing files and unknown formats.
#[test]
fn test_load_config_errors() {
    let fixture = TestFixture::new().unwrap();

    let missing = fixture.temp_dir.path().join("missing.toml");
    let result = ConfigLoader::new(Some(&missing), "TEST_MISSING").load();
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));

    let unknown = fixture.create_file("lanai.ini", "[log]").unwrap();
    let result = ConfigLoader::new(Some(&unknown), "TEST_UNKNOWN").load();
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

/// Test that the generated TOML loads back to the same configuration.
#[test]
fn test_generated_config_loads() {
    let fixture = TestFixture::new().unwrap();
    let toml = LanaiConfig::default().to_toml().unwrap();
    let path = fixture.create_file("generated.toml", toml).unwrap();

    let config = ConfigLoader::new(Some(&path), "TEST_GENERATED").load().unwrap();
    assert_eq!(config, LanaiConfig::default());
}

// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Test utilities and fixtures for Lanai.
//!
//! Reusable proptest strategies and a fixture for tests that touch the
//! filesystem or the environment.

use proptest::prelude::*;
use proptest::strategy::{BoxedStrategy, Strategy};
use tempfile::TempDir;

/// Maximum vector length for generated word batches.
const MAX_BATCH_LENGTH: usize = 20;

/// Generate a strategy for arbitrary strings of any Unicode scalar values.
///
/// # Parameters
///
/// * `max_length` - The maximum number of characters in the generated strings.
pub fn string_strategy(max_length: usize) -> BoxedStrategy<String> {
    proptest::collection::vec(proptest::char::any(), 0..max_length)
        .prop_map(|chars| chars.into_iter().collect::<String>())
        .boxed()
}

/// Generate short words over a tiny alphabet.
///
/// The small alphabet makes shared prefixes and suffixes common, which is
/// where trie edge cases live.
pub fn word_strategy() -> BoxedStrategy<String> {
    "[abc]{0,6}".prop_map(String::from).boxed()
}

/// Generate a batch of words, possibly with duplicates.
pub fn word_batch_strategy() -> BoxedStrategy<Vec<String>> {
    proptest::collection::vec(word_strategy(), 0..MAX_BATCH_LENGTH).boxed()
}

/// Test fixture for tests requiring files or environment variables.
pub struct TestFixture {
    /// Temporary directory for test files
    pub temp_dir: TempDir,
    /// Vector of environment variables to cleanup after tests
    env_vars: Vec<String>,
}

impl TestFixture {
    /// Create a new test fixture.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            temp_dir: tempfile::tempdir()?,
            env_vars: Vec::new(),
        })
    }

    /// Set an environment variable for this test.
    ///
    /// The variable will be cleaned up when the fixture is dropped.
    pub fn set_env<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key_str = key.into();
        std::env::set_var(&key_str, value.into());
        self.env_vars.push(key_str);
    }

    /// Write `contents` to `name` inside the fixture directory.
    pub fn create_file<C: AsRef<[u8]>>(
        &self,
        name: &str,
        contents: C,
    ) -> std::io::Result<std::path::PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}

impl Drop for TestFixture {
    fn drop(&mut self) {
        // Clean up any environment variables we set
        for key in &self.env_vars {
            std::env::remove_var(key);
        }
    }
}

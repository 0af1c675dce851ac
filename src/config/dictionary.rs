// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Dictionary configuration.
//!
//! The dictionary is the word list the command line loads into a trie before
//! answering lookups, prefix checks and suffix counts. Each word's payload is
//! its position in the list.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{ConfigResult, Validate};
use crate::data_structures::Trie;
use crate::error::config::ConfigError;

/// Dictionary configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Words to load, in order
    pub words: Vec<String>,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            words: ["apple", "application", "banana", "cat"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl DictionaryConfig {
    /// Builds a trie mapping every word to its index in the list.
    pub fn build_trie(&self) -> Trie<usize> {
        self.words
            .iter()
            .enumerate()
            .map(|(index, word)| (word, index))
            .collect()
    }
}

impl Validate for DictionaryConfig {
    fn validate(&self) -> ConfigResult<()> {
        // A repeated word would silently lose its earlier index
        let mut seen = HashSet::with_capacity(self.words.len());
        for word in &self.words {
            if !seen.insert(word.as_str()) {
                return Err(ConfigError::ValidationError(format!(
                    "Duplicate dictionary word: {word:?}"
                )));
            }
        }
        Ok(())
    }
}

// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Suffix counting over a borrowed trie.

use serde_json::Value;
use tracing::{debug, instrument};

use crate::data_structures::trie::{input, Trie};

const COMPONENT: &str = "suffix_counter";

/// Counts stored words that end with a literal pattern.
///
/// Every call enumerates the whole trie; no suffix index is kept, so a query
/// costs O(total stored characters).
#[derive(Debug)]
pub struct SuffixCounter<'t, V> {
    trie: &'t Trie<V>,
}

impl<'t, V> SuffixCounter<'t, V> {
    /// Creates a counter over `trie`.
    pub fn new(trie: &'t Trie<V>) -> Self {
        Self { trie }
    }

    /// Number of stored words whose trailing characters equal `pattern`.
    ///
    /// Matching is case-sensitive. The empty pattern matches every word.
    #[instrument(level = "debug", skip(self))]
    pub fn count_words_with_suffix(&self, pattern: &str) -> usize {
        let count = self
            .trie
            .enumerate()
            .filter(|(word, _)| word.ends_with(pattern))
            .count();
        debug!(count, "Counted words with suffix");
        count
    }

    /// Suffix count for a dynamically-typed pattern.
    ///
    /// Non-string input is reported and yields `0` without enumerating.
    pub fn count_words_with_suffix_value(&self, pattern: &Value) -> usize {
        match input::expect_str(pattern, "count_words_with_suffix") {
            Ok(pattern) => self.count_words_with_suffix(pattern),
            Err(err) => {
                input::report_invalid_input(err, COMPONENT, pattern);
                0
            }
        }
    }
}

// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Longest common prefix of a batch of strings.
//!
//! The batch is loaded into a fresh trie, then the single-child chain is
//! followed down from the root until a word ends or the path branches. The
//! whole computation is O(S) where S is the total length of the inputs.

use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use crate::data_structures::trie::{input, Trie};

const COMPONENT: &str = "longest_common_prefix";
const OPERATION: &str = "find_longest_common_prefix";

/// Finds the longest prefix shared by every string in a batch.
///
/// Each call builds its own trie, so one finder can be reused for any number
/// of batches.
#[derive(Debug, Default, Clone, Copy)]
pub struct LongestCommonPrefixFinder;

impl LongestCommonPrefixFinder {
    /// Creates a new finder.
    pub fn new() -> Self {
        Self
    }

    /// Longest common prefix of `strings`.
    ///
    /// An empty batch yields `""` and a single string is returned verbatim.
    #[instrument(level = "debug", skip_all, fields(batch = strings.len()))]
    pub fn find_longest_common_prefix<S: AsRef<str>>(&self, strings: &[S]) -> String {
        match strings {
            [] => {
                debug!("Empty batch");
                String::new()
            }
            [only] => {
                debug!("Single string, returned as is");
                only.as_ref().to_owned()
            }
            _ => {
                let mut trie = Trie::new();
                for s in strings {
                    trie.insert(s.as_ref(), ());
                }
                walk_single_child_chain(&trie)
            }
        }
    }

    /// Longest common prefix of a dynamically-typed batch.
    ///
    /// Anything other than an array of strings is reported and yields `""`.
    /// A single non-string element is rejected. With two or more elements,
    /// the first non-string aborts the whole computation with no partial
    /// result.
    #[instrument(level = "debug", skip_all)]
    pub fn find_longest_common_prefix_value(&self, strings: &Value) -> String {
        let items = match input::expect_array(strings, OPERATION) {
            Ok(items) => items,
            Err(err) => {
                input::report_invalid_input(err, COMPONENT, strings);
                return String::new();
            }
        };

        match items {
            [] => {
                debug!("Empty batch");
                String::new()
            }
            [only] => match input::expect_str(only, OPERATION) {
                Ok(only) => only.to_owned(),
                Err(err) => {
                    input::report_invalid_input(err, COMPONENT, only);
                    String::new()
                }
            },
            _ => {
                info!(batch = items.len(), "Building trie from batch");
                let mut trie = Trie::new();
                for (index, item) in items.iter().enumerate() {
                    match input::expect_str(item, OPERATION) {
                        Ok(s) => {
                            trie.insert(s, ());
                        }
                        Err(err) => {
                            warn!(index, "Aborting on invalid element");
                            input::report_invalid_input(err, COMPONENT, item);
                            return String::new();
                        }
                    }
                }
                walk_single_child_chain(&trie)
            }
        }
    }
}

/// Follows the chain of single-child nodes from the root.
///
/// Stops at the first node that ends a word or has zero or several children.
fn walk_single_child_chain(trie: &Trie<()>) -> String {
    let mut prefix = String::new();
    let mut node = trie.root();

    while !node.is_terminal() {
        match node.single_child() {
            Some((edge, child)) => {
                prefix.push(edge);
                node = child;
            }
            None => break,
        }
    }

    debug!(%prefix, "Longest common prefix");
    prefix
}

// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Prefix tree implementation.
//!
//! A character-keyed trie storing one payload per word, with exact lookup,
//! prefix existence checks and lazy enumeration of every stored word.
//!
//! # Example
//!
//! ```
//! use lanai_lib::data_structures::trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert("apple", 0);
//! trie.insert("application", 1);
//!
//! assert_eq!(trie.lookup("apple"), Some(&0));
//! assert_eq!(trie.lookup("app"), None);
//! assert!(trie.has_prefix("app"));
//! assert!(!trie.has_prefix("bat"));
//! ```
//!
//! # Concurrency
//!
//! The trie does no locking of its own. Share it across threads behind an
//! external lock such as `parking_lot::RwLock<Trie<V>>`.

mod error;
pub mod input;
mod iter;
mod node;

use std::fmt;

use serde_json::Value;
use tracing::debug;

pub use error::TrieError;
pub use iter::Words;
pub use node::TrieNode;

/// Result type for prefix tree operations
pub type TrieResult<T> = Result<T, TrieError>;

const COMPONENT: &str = "trie";

/// A prefix tree mapping words to payloads of type `V`.
///
/// Key features:
/// * Last-write-wins insertion; the empty word is a legal key
/// * Lookups distinguish "absent" from "present with a default payload"
/// * Prefix checks that do not require the prefix itself to be a word
/// * Depth-first enumeration without recursion
pub struct Trie<V = ()> {
    /// The root node, representing the empty prefix
    root: TrieNode<V>,

    /// Number of distinct stored words
    len: usize,
}

impl<V> Trie<V> {
    /// Creates a new empty trie.
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(),
            len: 0,
        }
    }

    /// Inserts a word with its payload.
    ///
    /// Missing edges are created along the way. A payload already stored for
    /// the same word is replaced.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to insert. May be empty.
    /// * `value` - The payload to associate with the word.
    ///
    /// # Returns
    ///
    /// `true` if the word was new, `false` if an existing payload was replaced.
    pub fn insert(&mut self, word: &str, value: V) -> bool {
        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.children.entry(c).or_default();
        }

        let is_new = node.terminator.replace(value).is_none();
        if is_new {
            self.len += 1;
        }
        debug!(word, is_new, "Inserted word");
        is_new
    }

    /// Inserts a word with the default payload.
    pub fn insert_word(&mut self, word: &str) -> bool
    where
        V: Default,
    {
        self.insert(word, V::default())
    }

    /// Returns the payload stored for `word`, or `None` if it was never inserted.
    pub fn lookup(&self, word: &str) -> Option<&V> {
        self.find_node(word)?.terminator()
    }

    /// Checks whether `word` is stored.
    pub fn contains(&self, word: &str) -> bool {
        self.lookup(word).is_some()
    }

    /// Checks whether any stored word starts with `prefix`.
    ///
    /// The prefix need not be a stored word itself. The empty prefix always
    /// exists.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.find_node(prefix).is_some()
    }

    /// Lazily enumerates every stored `(word, payload)` pair.
    ///
    /// Order is unspecified.
    pub fn enumerate(&self) -> Words<'_, V> {
        Words::new(&self.root)
    }

    /// Read-only view of the root node.
    pub fn root(&self) -> &TrieNode<V> {
        &self.root
    }

    /// Number of distinct stored words.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks whether no word has been stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts a dynamically-typed word.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - Same as [`Trie::insert`].
    /// * `Err(TrieError::InvalidInput)` - If `word` is not a string. Nothing is mutated.
    pub fn insert_value(&mut self, word: &Value, value: V) -> TrieResult<bool> {
        match input::expect_str(word, "insert") {
            Ok(word) => Ok(self.insert(word, value)),
            Err(err) => {
                input::report_invalid_input(err.clone(), COMPONENT, word);
                Err(err)
            }
        }
    }

    /// Looks up a dynamically-typed word. Non-string input is reported and
    /// treated as absent.
    pub fn lookup_value(&self, word: &Value) -> Option<&V> {
        match input::expect_str(word, "lookup") {
            Ok(word) => self.lookup(word),
            Err(err) => {
                input::report_invalid_input(err, COMPONENT, word);
                None
            }
        }
    }

    /// Prefix check for a dynamically-typed prefix. Non-string input is
    /// reported and yields `false`.
    pub fn has_prefix_value(&self, prefix: &Value) -> bool {
        match input::expect_str(prefix, "has_prefix") {
            Ok(prefix) => self.has_prefix(prefix),
            Err(err) => {
                input::report_invalid_input(err, COMPONENT, prefix);
                false
            }
        }
    }

    /// Walks the edge chain spelled by `path`.
    fn find_node(&self, path: &str) -> Option<&TrieNode<V>> {
        path.chars().try_fold(&self.root, |node, c| node.child(c))
    }
}

// Rebuilt from the enumeration so deep chains are never copied recursively.
impl<V: Clone> Clone for Trie<V> {
    fn clone(&self) -> Self {
        self.enumerate()
            .map(|(word, value)| (word, value.clone()))
            .collect()
    }
}

impl<V: fmt::Debug> fmt::Debug for Trie<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.enumerate()).finish()
    }
}

impl<V> Default for Trie<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AsRef<str>, V> Extend<(S, V)> for Trie<V> {
    fn extend<I: IntoIterator<Item = (S, V)>>(&mut self, iter: I) {
        for (word, value) in iter {
            self.insert(word.as_ref(), value);
        }
    }
}

impl<S: AsRef<str>, V> FromIterator<(S, V)> for Trie<V> {
    fn from_iter<I: IntoIterator<Item = (S, V)>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}

impl<'a, V> IntoIterator for &'a Trie<V> {
    type Item = (String, &'a V);
    type IntoIter = Words<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.enumerate()
    }
}

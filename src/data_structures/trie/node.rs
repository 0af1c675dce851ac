// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the prefix tree.
//!
//! Each node owns its children outright, keyed by the edge character, and
//! keeps the payload of a word ending here in a separate slot. Edge
//! characters and the end-of-word marker therefore never share a namespace.

use std::fmt;

use fnv::FnvHashMap;

/// A node in the prefix tree.
///
/// # Type Parameters
///
/// * `V` - Payload stored for every word that ends at this node.
pub struct TrieNode<V> {
    /// Map of edge characters to child nodes
    pub(crate) children: FnvHashMap<char, TrieNode<V>>,

    /// Payload of the word ending at this node, if any
    pub(crate) terminator: Option<V>,
}

impl<V> TrieNode<V> {
    /// Creates a new node with no children and no terminator.
    pub fn new() -> Self {
        Self {
            children: FnvHashMap::default(),
            terminator: None,
        }
    }

    /// Returns the child reached through `edge`, if there is one.
    pub fn child(&self, edge: char) -> Option<&TrieNode<V>> {
        self.children.get(&edge)
    }

    /// Iterates over the outgoing edges of this node in no particular order.
    pub fn children(&self) -> impl Iterator<Item = (char, &TrieNode<V>)> {
        self.children.iter().map(|(edge, child)| (*edge, child))
    }

    /// Number of outgoing edges.
    pub fn branch_count(&self) -> usize {
        self.children.len()
    }

    /// Returns the only outgoing edge when the node has exactly one child.
    pub fn single_child(&self) -> Option<(char, &TrieNode<V>)> {
        if self.children.len() != 1 {
            return None;
        }
        self.children().next()
    }

    /// Payload of the word ending here.
    pub fn terminator(&self) -> Option<&V> {
        self.terminator.as_ref()
    }

    /// Whether a stored word ends at this node.
    pub fn is_terminal(&self) -> bool {
        self.terminator.is_some()
    }
}

// Manual impl so `V` does not need to be `Default`.
impl<V> Default for TrieNode<V> {
    fn default() -> Self {
        Self::new()
    }
}

// Shallow: describes this node only, never its subtree.
impl<V: fmt::Debug> fmt::Debug for TrieNode<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrieNode")
            .field("edges", &self.children.keys().collect::<Vec<_>>())
            .field("terminator", &self.terminator)
            .finish()
    }
}

// Deep chains would otherwise be dropped recursively, one frame per character.
impl<V> Drop for TrieNode<V> {
    fn drop(&mut self) {
        let mut pending: Vec<TrieNode<V>> =
            self.children.drain().map(|(_, child)| child).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}

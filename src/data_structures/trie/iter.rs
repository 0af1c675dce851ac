// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Depth-first enumeration of stored words.

use std::iter::FusedIterator;

use super::node::TrieNode;

/// Pending visit: a node, the edge leading to it, and the length of its
/// parent's path in bytes.
#[derive(Debug)]
struct Frame<'a, V> {
    parent_len: usize,
    edge: Option<char>,
    node: &'a TrieNode<V>,
}

/// Lazy iterator over every `(word, payload)` pair stored in a trie.
///
/// Traversal is depth-first over an explicit stack, so arbitrarily long words
/// never grow the call stack. A single path buffer is shared by all frames and
/// only copied when a word is yielded. Yield order is unspecified.
#[derive(Debug)]
pub struct Words<'a, V> {
    stack: Vec<Frame<'a, V>>,
    path: String,
}

impl<'a, V> Words<'a, V> {
    pub(crate) fn new(root: &'a TrieNode<V>) -> Self {
        Self {
            stack: vec![Frame {
                parent_len: 0,
                edge: None,
                node: root,
            }],
            path: String::new(),
        }
    }
}

impl<'a, V> Iterator for Words<'a, V> {
    type Item = (String, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(frame) = self.stack.pop() {
            // The buffer always starts with the parent's path here
            self.path.truncate(frame.parent_len);
            if let Some(edge) = frame.edge {
                self.path.push(edge);
            }

            let len = self.path.len();
            self.stack
                .extend(frame.node.children().map(|(edge, child)| Frame {
                    parent_len: len,
                    edge: Some(edge),
                    node: child,
                }));

            if let Some(value) = frame.node.terminator() {
                return Some((self.path.clone(), value));
            }
        }
        None
    }
}

impl<V> FusedIterator for Words<'_, V> {}

#[cfg(test)]
mod tests {
    use crate::data_structures::trie::Trie;
    use std::collections::HashSet;

    #[test]
    fn test_only_terminal_nodes_are_yielded() {
        let mut trie = Trie::new();
        trie.insert("application", 1);
        trie.insert("apple", 0);

        let words: HashSet<String> = trie.enumerate().map(|(word, _)| word).collect();
        assert_eq!(words.len(), 2);
        assert!(words.contains("apple"));
        assert!(words.contains("application"));
        assert!(!words.contains("app"));
    }

    #[test]
    fn test_empty_word_is_yielded_from_root() {
        let mut trie = Trie::new();
        trie.insert("", 42);

        let all: Vec<_> = trie.enumerate().collect();
        assert_eq!(all, vec![(String::new(), &42)]);
    }

    #[test]
    fn test_very_long_word_does_not_recurse() {
        let word: String = std::iter::repeat('z').take(100_000).collect();
        let mut trie = Trie::new();
        trie.insert(&word, ());

        let mut words = trie.enumerate();
        let (found, _) = words.next().unwrap();
        assert_eq!(found.len(), word.len());
        assert!(words.next().is_none());
        assert!(words.next().is_none());
    }

    #[test]
    fn test_very_long_word_clones_and_formats_without_recursion() {
        let word: String = std::iter::repeat('z').take(100_000).collect();
        let mut trie = Trie::new();
        trie.insert(&word, 1u8);

        let copy = trie.clone();
        drop(trie);
        assert_eq!(copy.lookup(&word), Some(&1));
        assert_eq!(copy.len(), 1);

        let rendered = format!("{copy:?}");
        assert!(rendered.len() > word.len());
    }

    #[test]
    fn test_early_termination() {
        let trie: Trie<usize> = ["a", "b", "c", "d"]
            .iter()
            .enumerate()
            .map(|(i, w)| (*w, i))
            .collect();

        assert_eq!(trie.enumerate().take(2).count(), 2);
    }
}

// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Data structures for Lanai.
//!
//! This module contains the prefix tree that every query in the crate is
//! built on.

pub mod trie;

// Re-export common data structures
pub use trie::{Trie, TrieError, TrieNode, TrieResult, Words};

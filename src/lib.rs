// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lanai Library
//!
//! A character-keyed prefix tree and the queries built on it:
//! exact lookup with an associated payload, prefix existence, suffix
//! counting across all stored words, and the longest common prefix of a
//! batch of strings.
//!
//! # Architecture
//!
//! - [`data_structures::trie`] owns the storage engine and nothing else.
//! - [`queries`] layers read-only queries on top of the public trie API.
//! - [`error`] and [`config`] provide the ambient error reporting and
//!   layered configuration used by the `lanai` binary.
//!
//! Operations that accept dynamically-typed input (`*_value` methods) never
//! fail loudly: invalid input is reported through [`error::get_error_reporting`]
//! and turned into the operation's empty result.

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;
pub mod queries;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use data_structures::{Trie, TrieError, TrieNode, TrieResult, Words};
pub use queries::{LongestCommonPrefixFinder, SuffixCounter};

/// Version information for Lanai.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

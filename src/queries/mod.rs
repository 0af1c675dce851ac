// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Query layers built on the prefix tree.
//!
//! Both layers use only the public [`Trie`](crate::data_structures::Trie)
//! API. [`SuffixCounter`] borrows an existing trie, while
//! [`LongestCommonPrefixFinder`] builds a fresh one for every batch.

pub mod longest_common_prefix;
pub mod suffix_counter;

pub use longest_common_prefix::LongestCommonPrefixFinder;
pub use suffix_counter::SuffixCounter;

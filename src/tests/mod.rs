// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Test modules for Lanai.
//!
//! This module contains the crate-internal test suites:
//! - Configuration loading and validation
//! - Error context and reporting
//! - Property-based tests for the trie and its queries
//! - Shared strategies and fixtures

pub mod config_tests;
pub mod test_utils;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{
    string_strategy, word_batch_strategy, word_strategy, TestFixture,
};

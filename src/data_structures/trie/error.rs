// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the prefix tree.

/// Errors that can occur in prefix tree operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum TrieError {
    /// A value of the wrong shape was handed to an operation.
    #[error("Invalid input to {operation}: expected {expected}, found {found}")]
    InvalidInput {
        /// The operation that rejected the value.
        operation: &'static str,
        /// The shape the operation accepts.
        expected: &'static str,
        /// The shape that was actually received.
        found: &'static str,
    },
}

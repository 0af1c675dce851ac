// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Dynamically-typed input boundary.
//!
//! Words arriving from outside the type system (CLI arguments, JSON payloads)
//! are carried as [`serde_json::Value`]. The helpers here check their shape
//! and turn a mismatch into [`TrieError::InvalidInput`], which callers report
//! and convert into their empty result.

use serde_json::Value;
use tracing_error::SpanTrace;

use super::error::TrieError;
use super::TrieResult;
use crate::error::{get_error_reporting, ErrorContext, LanaiError};

/// Short name of the JSON shape of `value`.
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Borrows `value` as a string or rejects it.
pub fn expect_str<'v>(value: &'v Value, operation: &'static str) -> TrieResult<&'v str> {
    value.as_str().ok_or_else(|| TrieError::InvalidInput {
        operation,
        expected: "string",
        found: kind_of(value),
    })
}

/// Borrows `value` as a sequence or rejects it.
pub fn expect_array<'v>(value: &'v Value, operation: &'static str) -> TrieResult<&'v [Value]> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| TrieError::InvalidInput {
            operation,
            expected: "array",
            found: kind_of(value),
        })
}

/// Hands a rejected input to the process error reporter.
pub(crate) fn report_invalid_input(error: TrieError, component: &str, rejected: &Value) {
    let context = ErrorContext::new(LanaiError::Trie(error), component)
        .with_details(format!("rejected value: {rejected}"))
        .with_trace(SpanTrace::capture().to_string());
    get_error_reporting().report(context);
}

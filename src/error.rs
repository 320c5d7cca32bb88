// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors surfaced by the public API.
//!
//! A duplicate term is not an error: `add` reports it by returning `false`.
//! Everything here is detected before the tree is touched, so a rejected
//! call never leaves a partial mutation behind.

use thiserror::Error;

/// Shorthand for results carrying a [`BkTreeError`].
pub type Result<T, E = BkTreeError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum BkTreeError {
    /// Searching a tree that has never had a term added.
    #[error("cannot search an empty index: add at least one term first")]
    EmptyIndex,

    /// A signed threshold below zero. No term can be within a negative distance.
    #[error("threshold must be non-negative, got {0}")]
    InvalidThreshold(i64),

    /// Threshold text that does not parse as an integer.
    #[error("threshold {0:?} is not an integer")]
    MalformedThreshold(String),

    /// A word-list line that is not valid UTF-8 text.
    #[error("line {line} is not valid UTF-8 text")]
    InvalidTerm { line: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

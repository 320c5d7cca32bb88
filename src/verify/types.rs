// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! What a structural check can find, and what it reports when it finds nothing.

use serde::Serialize;
use thiserror::Error;

/// Error type for invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    /// A child is linked under a key that is not its distance from the parent.
    #[error("'{child}' linked under '{parent}' at key {key}, but their distance is {actual}")]
    WrongEdgeKey {
        parent: String,
        child: String,
        key: usize,
        actual: usize,
    },
    /// A child is linked at key 0, which would make it a duplicate of its parent.
    #[error("'{child}' linked under '{parent}' at key 0")]
    ZeroEdgeKey { parent: String, child: String },
    /// The same term occupies more than one node.
    #[error("term '{term}' is stored more than once")]
    DuplicateTerm { term: String },
    /// The tree's cached term count disagrees with its node count.
    #[error("tree claims {claimed} terms but holds {actual} nodes")]
    IncorrectLen { claimed: usize, actual: usize },
}

/// Shape statistics gathered by a successful [`crate::BkTree::verify`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VerificationReport {
    /// Nodes visited (equal to the number of distinct terms).
    pub nodes: usize,
    /// Parent-child links checked.
    pub edges: usize,
    /// Longest root-to-leaf path, in nodes.
    pub height: usize,
    /// Most children hanging off any one node.
    pub max_fanout: usize,
}

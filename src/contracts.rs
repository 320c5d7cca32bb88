// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the metric-tree invariant.
//!
//! Debug-mode assertions only (`debug_assert!`), so release builds pay
//! nothing. They run on the hot paths of `Node::add` and `Node::search`
//! and catch a broken distance function or a bad edge the moment it is
//! created, rather than as a silently missing search result later.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function       | Property                                          |
//! |-------------------------|---------------------------------------------------|
//! | `check_edge`            | child at key `k` satisfies `d(parent, child) == k` |
//! | `check_pruning_window`  | visited keys lie in `[d - r, d + r]`               |
//! | `check_match_sound`     | every collected match is within the threshold     |
//!
//! For a full walk of an existing tree see [`crate::verify`].

use crate::fuzzy::levenshtein;

// ============================================================================
// EDGE CONTRACTS
// ============================================================================

/// Check that a child linked under `key` really sits at that distance.
///
/// Keys are strictly positive: distance 0 means "same term" and is never
/// stored as an edge.
///
/// # Panics (debug builds only)
/// Panics if `key == 0` or `levenshtein(parent, child) != key`.
#[inline]
pub fn check_edge(parent: &str, child: &str, key: usize) {
    debug_assert!(
        key > 0,
        "Contract violation: EdgeKey.Positive - '{}' -> '{}' linked at key 0",
        parent,
        child
    );
    debug_assert_eq!(
        levenshtein(parent, child),
        key,
        "Contract violation: EdgeKey.Distance - '{}' -> '{}' linked at wrong key",
        parent,
        child
    );
}

// ============================================================================
// SEARCH CONTRACTS
// ============================================================================

/// Check that a child key chosen for descent lies inside the triangle
/// inequality window around the node distance `d`.
///
/// # Panics (debug builds only)
/// Panics if `key` is outside `[d - threshold, d + threshold]`.
#[inline]
pub fn check_pruning_window(d: usize, threshold: usize, key: usize) {
    debug_assert!(
        key.abs_diff(d) <= threshold,
        "Contract violation: Search.PruningWindow - key {} outside [{} - {}, {} + {}]",
        key,
        d,
        threshold,
        d,
        threshold
    );
}

/// Check that a collected match is within the threshold and carries its
/// true distance.
///
/// # Panics (debug builds only)
/// Panics if `distance > threshold` or the recorded distance is wrong.
#[inline]
pub fn check_match_sound(query: &str, term: &str, distance: usize, threshold: usize) {
    debug_assert!(
        distance <= threshold,
        "Contract violation: Search.Sound - '{}' at distance {} exceeds threshold {}",
        term,
        distance,
        threshold
    );
    debug_assert_eq!(
        levenshtein(query, term),
        distance,
        "Contract violation: Search.ExactDistance - '{}' vs '{}'",
        query,
        term
    );
}

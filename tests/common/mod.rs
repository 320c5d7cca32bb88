//! Shared test utilities and fixtures.

#![allow(dead_code)]

use proptest::prelude::*;

// Re-export canonical test utilities from bktree::testing
pub use bktree::testing::{brute_force_search, seeded_rng, sorted_matches, tree_with_seed};

// ============================================================================
// FIXTURES
// ============================================================================

/// A small vocabulary with plenty of near neighbours.
pub const ANIMALS: &[&str] = &[
    "cat", "cats", "bat", "rat", "hat", "dog", "dogs", "fog", "frog", "bird", "birds", "word",
    "horse", "house", "mouse", "moose", "goose", "geese",
];

/// Words that share long prefixes, inserted sorted they build deep chains.
pub fn sorted_prefix_words(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("term{:05}", i)).collect()
}

// ============================================================================
// STRATEGIES
// ============================================================================

/// Short words over a tiny alphabet, so random words collide and sit close together.
pub fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abc]{0,6}").unwrap()
}

/// Words mixing ASCII with multi-byte characters.
pub fn unicode_word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[aeéīṣ日本]{0,5}").unwrap()
}

/// A vocabulary of random words (duplicates likely).
pub fn vocabulary_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 1..40)
}

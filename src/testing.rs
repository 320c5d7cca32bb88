//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::fuzzy::levenshtein;
use crate::tree::{BkTree, Matches};

/// Deterministic RNG for reproducible tree shapes.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Build a tree from `terms` with a fixed shuffle seed.
pub fn tree_with_seed<S: AsRef<str>>(terms: &[S], seed: u64) -> BkTree {
    let mut tree = BkTree::new();
    tree.add_list_with_rng(terms, &mut seeded_rng(seed));
    tree
}

/// Linear-scan oracle: what a correct search must return.
pub fn brute_force_search<S: AsRef<str>>(terms: &[S], query: &str, threshold: usize) -> Matches {
    terms
        .iter()
        .map(AsRef::as_ref)
        .filter_map(|term| {
            let d = levenshtein(query, term);
            (d <= threshold).then(|| (term.to_string(), d))
        })
        .collect()
}

/// Matches as a sorted `(term, distance)` list, for readable assertions.
pub fn sorted_matches(matches: &Matches) -> Vec<(&str, usize)> {
    let mut sorted: Vec<(&str, usize)> = matches.iter().map(|(t, &d)| (t.as_str(), d)).collect();
    sorted.sort_unstable();
    sorted
}

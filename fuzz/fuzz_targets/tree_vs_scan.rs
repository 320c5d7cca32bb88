// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target comparing tree search with a linear scan.
//!
//! Arbitrary vocabularies, insertion orders and queries. The tree must
//! return exactly what brute force returns, and must always verify.

#![no_main]

use arbitrary::Arbitrary;
use bktree::testing::{brute_force_search, tree_with_seed};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct SearchInput {
    words: Vec<String>,
    query: String,
    threshold: u8,
    seed: u64,
}

fuzz_target!(|input: SearchInput| {
    let words: Vec<String> = input
        .words
        .iter()
        .take(64)
        .map(|w| w.chars().take(16).collect())
        .collect();
    let query: String = input.query.chars().take(16).collect();
    let threshold = usize::from(input.threshold % 6);

    let tree = tree_with_seed(&words, input.seed);
    assert!(tree.verify().is_ok());

    match tree.search_within(&query, threshold) {
        Ok(found) => assert_eq!(found, brute_force_search(&words, &query, threshold)),
        Err(_) => assert!(words.is_empty()),
    }
});

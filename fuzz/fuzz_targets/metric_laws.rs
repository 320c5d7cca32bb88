// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the Levenshtein metric laws.
//!
//! The tree's pruning is only correct if the distance is a true metric.
//! Any violation here means searches silently miss results.

#![no_main]

use arbitrary::Arbitrary;
use bktree::{levenshtein, levenshtein_within};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Triple {
    a: String,
    b: String,
    c: String,
    max: u8,
}

fuzz_target!(|input: Triple| {
    // Cap lengths to avoid timeouts on the O(nm) DP
    let cap = |s: &str| s.chars().take(40).collect::<String>();
    let (a, b, c) = (cap(&input.a), cap(&input.b), cap(&input.c));

    let ab = levenshtein(&a, &b);
    let ba = levenshtein(&b, &a);
    let bc = levenshtein(&b, &c);
    let ac = levenshtein(&a, &c);

    // INVARIANT 1: identity
    assert_eq!(levenshtein(&a, &a), 0);
    assert_eq!(ab == 0, a == b, "zero distance iff equal: {:?} {:?}", a, b);

    // INVARIANT 2: symmetry
    assert_eq!(ab, ba, "asymmetric for {:?} / {:?}", a, b);

    // INVARIANT 3: triangle inequality
    assert!(ac <= ab + bc, "triangle violated: {:?} {:?} {:?}", a, b, c);

    // INVARIANT 4: bounded check agrees with the exact distance
    let max = usize::from(input.max % 8);
    assert_eq!(levenshtein_within(&a, &b, max), ab <= max);
});

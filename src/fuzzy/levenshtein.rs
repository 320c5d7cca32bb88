// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Levenshtein distance, exact and bounded.
//!
//! Both functions compare `char`s, never bytes. The tree computes the same
//! pair's distance at insert time and again at query time, so the two paths
//! must agree on what a "character" is.
//!
//! The exact version keeps two rolling rows sized by the shorter input, so
//! memory is O(min(|a|, |b|)). The bounded version trades exactness for two
//! early exits:
//! - `|len(a) - len(b)|` is a lower bound on edit distance
//! - once every cell of a DP row exceeds `max`, no later row can come back under it

use std::mem;

/// Minimum number of single-character insertions, deletions or
/// substitutions turning `a` into `b`.
///
/// This is a metric: `levenshtein(a, a) == 0`, it is symmetric, and it
/// satisfies the triangle inequality. The BK-tree's pruning depends on all three.
///
/// ```
/// use bktree::levenshtein;
///
/// assert_eq!(levenshtein("kitten", "sitting"), 3);
/// assert_eq!(levenshtein("", "abc"), 3);
/// assert_eq!(levenshtein("café", "cafe"), 1);
/// ```
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Rows span the shorter string
    let (short, long) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };

    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut curr: Vec<usize> = vec![0; short.len() + 1];

    for (i, lc) in long.iter().enumerate() {
        curr[0] = i + 1;
        for (j, sc) in short.iter().enumerate() {
            let cost = usize::from(lc != sc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        mem::swap(&mut prev, &mut curr);
    }

    prev[short.len()]
}

/// Are these strings within `max` edits of each other?
///
/// Always agrees with `levenshtein(a, b) <= max`, but rejects most
/// far-apart pairs without finishing the DP.
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    if a == b {
        return true;
    }

    // Use character counts, not byte lengths, for Unicode correctness
    let a_len = a.chars().count();
    let b_len = b.chars().count();

    // Early-exit: length difference is a lower bound on edit distance
    if a_len.abs_diff(b_len) > max {
        return false;
    }

    let mut dp: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        let mut min_row = dp[0];

        for (j, bc) in b.chars().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
            min_row = min_row.min(dp[j + 1]);
        }

        // Early-exit: if minimum in this row exceeds max, no point continuing
        if min_row > max {
            return false;
        }
    }

    dp[b_len] <= max
}

//! Levenshtein must be a metric, or BK-tree pruning loses results.

use super::common::{unicode_word_strategy, word_strategy};
use bktree::{levenshtein, levenshtein_within};
use proptest::prelude::*;

proptest! {
    /// Property: d(a, a) == 0.
    #[test]
    fn prop_identity(a in unicode_word_strategy()) {
        prop_assert_eq!(levenshtein(&a, &a), 0);
    }

    /// Property: d(a, b) == 0 only for equal strings.
    #[test]
    fn prop_zero_only_for_equal(a in word_strategy(), b in word_strategy()) {
        prop_assert_eq!(levenshtein(&a, &b) == 0, a == b);
    }

    /// Property: d(a, b) == d(b, a).
    #[test]
    fn prop_symmetry(a in unicode_word_strategy(), b in unicode_word_strategy()) {
        prop_assert_eq!(levenshtein(&a, &b), levenshtein(&b, &a));
    }

    /// Property: d(a, c) <= d(a, b) + d(b, c).
    #[test]
    fn prop_triangle_inequality(
        a in unicode_word_strategy(),
        b in unicode_word_strategy(),
        c in unicode_word_strategy(),
    ) {
        let ac = levenshtein(&a, &c);
        let ab = levenshtein(&a, &b);
        let bc = levenshtein(&b, &c);
        prop_assert!(ac <= ab + bc, "d({:?},{:?})={} > {} + {}", a, c, ac, ab, bc);
    }

    /// Property: length difference <= d(a, b) <= longer length.
    #[test]
    fn prop_length_bounds(a in unicode_word_strategy(), b in unicode_word_strategy()) {
        let la = a.chars().count();
        let lb = b.chars().count();
        let d = levenshtein(&a, &b);
        prop_assert!(la.abs_diff(lb) <= d);
        prop_assert!(d <= la.max(lb));
    }

    /// Property: the bounded check agrees with the exact distance.
    #[test]
    fn prop_within_agrees(a in unicode_word_strategy(), b in unicode_word_strategy(), max in 0usize..6) {
        prop_assert_eq!(levenshtein_within(&a, &b, max), levenshtein(&a, &b) <= max);
    }
}

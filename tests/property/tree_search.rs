//! Search completeness and soundness against the linear-scan oracle.

use super::common::{brute_force_search, tree_with_seed, vocabulary_strategy, word_strategy};
use bktree::{levenshtein, BkTree};
use proptest::prelude::*;
use std::collections::HashSet;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Property: search returns exactly the oracle's matches, with exact distances.
    #[test]
    fn prop_search_equals_oracle(
        words in vocabulary_strategy(),
        query in word_strategy(),
        threshold in 0usize..5,
        seed in any::<u64>(),
    ) {
        let tree = tree_with_seed(&words, seed);
        let found = tree.search_within(&query, threshold).unwrap();
        prop_assert_eq!(found, brute_force_search(&words, &query, threshold));
    }

    /// Property: every returned match really is within the threshold.
    #[test]
    fn prop_search_sound(
        words in vocabulary_strategy(),
        query in word_strategy(),
        threshold in 0usize..4,
    ) {
        let tree = BkTree::from_terms(&words);
        for (term, d) in tree.search_within(&query, threshold).unwrap() {
            prop_assert!(d <= threshold);
            prop_assert_eq!(levenshtein(&query, &term), d);
        }
    }

    /// Property: every inserted term is found by searching for itself at radius 0.
    #[test]
    fn prop_inserted_terms_found(words in vocabulary_strategy(), seed in any::<u64>()) {
        let tree = tree_with_seed(&words, seed);
        for word in &words {
            let found = tree.search_within(word, 0).unwrap();
            prop_assert_eq!(found.len(), 1);
            prop_assert_eq!(found.get(word.as_str()), Some(&0));
        }
    }

    /// Property: len counts distinct terms and re-adding is a no-op.
    #[test]
    fn prop_insertion_idempotent(words in vocabulary_strategy(), seed in any::<u64>()) {
        let mut tree = tree_with_seed(&words, seed);
        let distinct: HashSet<&String> = words.iter().collect();
        prop_assert_eq!(tree.len(), distinct.len());

        for word in &words {
            prop_assert!(!tree.add(word.as_str()));
        }
        prop_assert_eq!(tree.len(), distinct.len());
    }

    /// Property: any insertion order yields a structurally valid tree.
    #[test]
    fn prop_tree_well_formed(words in vocabulary_strategy(), seed in any::<u64>()) {
        let tree = tree_with_seed(&words, seed);
        let report = tree.verify();
        prop_assert!(report.is_ok(), "{:?}", report.as_ref().err());
        prop_assert_eq!(report.unwrap().nodes, tree.len());
    }
}

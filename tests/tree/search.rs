//! Search results against known answers and the brute-force oracle.

use super::common::{brute_force_search, sorted_matches, tree_with_seed, ANIMALS};
use bktree::{BkTree, DEFAULT_THRESHOLD};

#[test]
fn test_cat_example_for_every_seed() {
    let words = ["cat", "cats", "dog", "bat"];
    for seed in 0..32 {
        let tree = tree_with_seed(&words, seed);
        let hits = tree.search_within("cat", 1).unwrap();
        assert_eq!(
            sorted_matches(&hits),
            vec![("bat", 1), ("cat", 0), ("cats", 1)],
            "seed {}",
            seed
        );
    }
}

#[test]
fn test_unseeded_add_list_cat_example() {
    let mut tree = BkTree::new();
    tree.add_list(&["cat", "cats", "dog", "bat"]);
    let hits = tree.search_within("cat", 1).unwrap();
    assert_eq!(
        sorted_matches(&hits),
        vec![("bat", 1), ("cat", 0), ("cats", 1)]
    );
}

#[test]
fn test_threshold_zero_is_exact_lookup() {
    let tree = tree_with_seed(ANIMALS, 9);
    for term in ANIMALS {
        let hits = tree.search_within(term, 0).unwrap();
        assert_eq!(sorted_matches(&hits), vec![(*term, 0)]);
    }
    assert!(tree.search_within("zebra", 0).unwrap().is_empty());
}

#[test]
fn test_default_search_matches_threshold_two() {
    let tree = tree_with_seed(ANIMALS, 4);
    assert_eq!(DEFAULT_THRESHOLD, 2);
    assert_eq!(
        tree.search("mouse").unwrap(),
        tree.search_within("mouse", 2).unwrap()
    );
}

#[test]
fn test_matches_oracle_for_all_thresholds() {
    let tree = tree_with_seed(ANIMALS, 77);
    for query in ["cat", "hose", "brd", "", "gooses", "xyz"] {
        for threshold in 0..=5 {
            assert_eq!(
                tree.search_within(query, threshold).unwrap(),
                brute_force_search(ANIMALS, query, threshold),
                "query {:?} threshold {}",
                query,
                threshold
            );
        }
    }
}

#[test]
fn test_huge_threshold_returns_everything() {
    let tree = tree_with_seed(ANIMALS, 3);
    let hits = tree.search_within("q", usize::MAX).unwrap();
    assert_eq!(hits.len(), ANIMALS.len());
}

#[test]
fn test_unicode_terms() {
    let words = ["café", "cafe", "caff", "naïve", "naive", "日本", "日本語"];
    let tree = tree_with_seed(&words, 8);
    let hits = tree.search_within("cafe", 1).unwrap();
    assert_eq!(
        sorted_matches(&hits),
        vec![("cafe", 0), ("caff", 1), ("café", 1)]
    );
    let hits = tree.search_within("日本", 1).unwrap();
    assert_eq!(sorted_matches(&hits), vec![("日本", 0), ("日本語", 1)]);
}

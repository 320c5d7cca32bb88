//! Insertion, deduplication and bulk loading.

use super::common::{seeded_rng, sorted_prefix_words, tree_with_seed, ANIMALS};
use bktree::BkTree;
use std::collections::HashSet;

#[test]
fn test_second_insert_returns_false() {
    let mut tree = BkTree::new();
    assert!(tree.add("kitten"));
    assert!(tree.add("sitting"));
    assert!(!tree.add("kitten"));
    assert!(!tree.add("sitting"));
    assert_eq!(tree.len(), 2);
}

#[test]
fn test_add_list_deduplicates() {
    let mut words: Vec<&str> = ANIMALS.to_vec();
    words.extend_from_slice(ANIMALS);
    let tree = tree_with_seed(&words, 11);
    assert_eq!(tree.len(), ANIMALS.len());
    tree.verify().expect("tree should be well formed");
}

#[test]
fn test_add_list_again_leaves_size_unchanged() {
    let mut tree = tree_with_seed(ANIMALS, 5);
    let before = tree.len();
    tree.add_list_with_rng(&["cat", "dog", "horse"], &mut seeded_rng(6));
    assert_eq!(tree.len(), before);
    tree.add_list(&["cat", "zebra"]);
    assert_eq!(tree.len(), before + 1);
}

#[test]
fn test_every_term_reachable() {
    let tree = BkTree::from_terms(ANIMALS);
    let terms: HashSet<&str> = tree.terms().collect();
    let expected: HashSet<&str> = ANIMALS.iter().copied().collect();
    assert_eq!(terms, expected);
    for term in ANIMALS {
        assert!(tree.contains(term), "{} should be indexed", term);
    }
}

#[test]
fn test_add_list_actually_shuffles() {
    // Without a shuffle the first word would always become the root.
    let words = sorted_prefix_words(400);
    let roots: HashSet<String> = (0..20)
        .map(|seed| {
            let tree = tree_with_seed(&words, seed);
            tree.root().unwrap().term().to_string()
        })
        .collect();
    assert!(roots.len() > 1 || !roots.contains(&words[0]));
}

#[test]
fn test_sorted_and_shuffled_loads_agree() {
    let words = sorted_prefix_words(400);

    let mut sorted = BkTree::new();
    for word in &words {
        sorted.add(word.as_str());
    }
    let shuffled = tree_with_seed(&words, 2024);

    assert_eq!(sorted.len(), shuffled.len());
    sorted.verify().unwrap();
    shuffled.verify().unwrap();
    for query in ["term00042", "term0004", "term10000", "xterm00399"] {
        assert_eq!(
            sorted.search_within(query, 1).unwrap(),
            shuffled.search_within(query, 1).unwrap()
        );
    }
}

#[test]
fn test_different_seeds_index_the_same_terms() {
    let a = tree_with_seed(ANIMALS, 1);
    let b = tree_with_seed(ANIMALS, 2);
    let mut ta: Vec<&str> = a.terms().collect();
    let mut tb: Vec<&str> = b.terms().collect();
    ta.sort_unstable();
    tb.sort_unstable();
    assert_eq!(ta, tb);
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The public BK-tree.
//!
//! A [`BkTree`] is either empty or owns exactly one root [`Node`]. The first
//! `add` creates the root without any distance check; every later `add`
//! delegates to it. That transition happens once and never reverses, since
//! there is no deletion.
//!
//! Tree shape depends on insertion order. Sorted input tends to build long
//! chains, so bulk loading goes through [`BkTree::add_list`], which shuffles
//! a private copy of the input first.

mod node;

pub use node::{Matches, Node};

use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, trace};

use crate::error::{BkTreeError, Result};

/// Threshold used by [`BkTree::search`] when the caller does not pick one.
pub const DEFAULT_THRESHOLD: usize = 2;

/// A validated, non-negative search radius.
///
/// The tree itself takes a plain `usize`; this type exists for inputs that
/// arrive as text or signed integers (CLI flags, config) and must reject
/// negatives instead of wrapping them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Threshold(usize);

impl Threshold {
    pub const fn new(max: usize) -> Self {
        Self(max)
    }

    pub const fn get(self) -> usize {
        self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(DEFAULT_THRESHOLD)
    }
}

impl From<usize> for Threshold {
    fn from(max: usize) -> Self {
        Self(max)
    }
}

impl From<Threshold> for usize {
    fn from(threshold: Threshold) -> Self {
        threshold.0
    }
}

impl TryFrom<i64> for Threshold {
    type Error = BkTreeError;

    fn try_from(value: i64) -> Result<Self> {
        usize::try_from(value)
            .map(Self)
            .map_err(|_| BkTreeError::InvalidThreshold(value))
    }
}

impl FromStr for Threshold {
    type Err = BkTreeError;

    fn from_str(s: &str) -> Result<Self> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| BkTreeError::MalformedThreshold(s.to_string()))?;
        Self::try_from(value)
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum Root {
    #[default]
    Empty,
    Populated(Node),
}

/// Burkhard-Keller tree over Levenshtein distance.
///
/// ```
/// use bktree::BkTree;
///
/// let mut tree = BkTree::new();
/// tree.add_list(&["cat", "cats", "dog", "bat"]);
///
/// let hits = tree.search_within("cat", 1).unwrap();
/// assert_eq!(hits.len(), 3);
/// assert_eq!(hits["bat"], 1);
/// assert!(!hits.contains_key("dog"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct BkTree {
    root: Root,
    len: usize,
}

impl BkTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree from `terms` in shuffled order. See [`BkTree::add_list`].
    pub fn from_terms<S: AsRef<str>>(terms: &[S]) -> Self {
        let mut tree = Self::new();
        tree.add_list(terms);
        tree
    }

    /// Number of distinct terms indexed.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.root, Root::Empty)
    }

    pub fn root(&self) -> Option<&Node> {
        match &self.root {
            Root::Empty => None,
            Root::Populated(node) => Some(node),
        }
    }

    /// Insert a term. Returns `false` if it was already present.
    pub fn add(&mut self, term: impl Into<String>) -> bool {
        let inserted = match &mut self.root {
            Root::Populated(root) => root.add(term),
            Root::Empty => {
                let root = Node::new(term);
                debug!(term = root.term(), "created root");
                self.root = Root::Populated(root);
                true
            }
        };
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Insert every term in `terms`, in a uniformly shuffled order.
    ///
    /// The caller's slice is not touched; a copy is shuffled. Duplicates
    /// (within `terms` or against the tree) are skipped silently.
    pub fn add_list<S: AsRef<str>>(&mut self, terms: &[S]) {
        self.add_list_with_rng(terms, &mut rand::thread_rng());
    }

    /// [`BkTree::add_list`] with an explicit random source, for reproducible
    /// tree shapes.
    pub fn add_list_with_rng<S, R>(&mut self, terms: &[S], rng: &mut R)
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let mut shuffled: Vec<&str> = terms.iter().map(AsRef::as_ref).collect();
        shuffled.shuffle(rng);

        let inserted = shuffled.into_iter().filter(|term| self.add(*term)).count();
        debug!(
            total = terms.len(),
            inserted,
            duplicates = terms.len() - inserted,
            "bulk insert"
        );
    }

    /// All indexed terms within [`DEFAULT_THRESHOLD`] of `term`.
    pub fn search(&self, term: &str) -> Result<Matches> {
        self.search_within(term, DEFAULT_THRESHOLD)
    }

    /// All indexed terms within `threshold` edits of `term`, each mapped to
    /// its exact distance from `term`.
    ///
    /// Fails with [`BkTreeError::EmptyIndex`] if nothing has been added yet.
    pub fn search_within(&self, term: &str, threshold: usize) -> Result<Matches> {
        let root = self.root().ok_or(BkTreeError::EmptyIndex)?;

        let mut collected = Matches::new();
        let visited = root.search(term, threshold, &mut collected);
        trace!(
            query = term,
            threshold,
            visited,
            indexed = self.len,
            matches = collected.len(),
            "search"
        );
        Ok(collected)
    }

    /// Is `term` indexed exactly?
    pub fn contains(&self, term: &str) -> bool {
        self.root().is_some_and(|root| root.contains(term))
    }

    /// Longest root-to-leaf path in nodes; 0 for an empty tree.
    pub fn height(&self) -> usize {
        self.root().map_or(0, Node::height)
    }

    /// Wrap an already-built node, to set up shapes `add` would take too long to build.
    #[cfg(test)]
    pub(crate) fn from_root(root: Node, len: usize) -> Self {
        Self {
            root: Root::Populated(root),
            len,
        }
    }

    /// Every indexed term, depth-first, in no guaranteed order.
    pub fn terms(&self) -> Terms<'_> {
        Terms {
            pending: self.root().into_iter().collect(),
        }
    }
}

/// Iterator returned by [`BkTree::terms`].
pub struct Terms<'a> {
    pending: Vec<&'a Node>,
}

impl<'a> Iterator for Terms<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.pending.pop()?;
        self.pending.extend(node.children().map(|(_, child)| child));
        Some(node.term())
    }
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A single BK-tree vertex and the two algorithms that walk it.
//!
//! Each node owns its children outright, keyed by their edit distance from
//! this node's term. No back-references and no sharing: dropping the root
//! drops the tree.
//!
//! Both walks are iterative. A sorted word list inserted in order can
//! degrade the tree into a chain thousands of nodes deep, and the call
//! stack should not be what limits corpus size.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::mem;

use crate::contracts::{check_edge, check_match_sound, check_pruning_window};
use crate::fuzzy::levenshtein;

/// Matched term -> its distance from the query.
pub type Matches = HashMap<String, usize>;

pub struct Node {
    term: String,
    children: BTreeMap<usize, Node>,
}

// Drop, Clone, PartialEq and Debug are written by hand: the derived versions
// recurse once per level and overflow the stack on deep chains.

impl Drop for Node {
    fn drop(&mut self) {
        let mut pending: Vec<Node> = mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(mem::take(&mut node.children).into_values());
        }
    }
}

impl Clone for Node {
    fn clone(&self) -> Self {
        // Pre-order listing with (parent index, edge key); every child sits
        // after its parent, so walking it backwards attaches finished
        // subtrees before their parent is moved.
        let mut order: Vec<(&Node, Option<(usize, usize)>)> = Vec::new();
        let mut pending = vec![(self, None)];
        while let Some((node, parent)) = pending.pop() {
            let index = order.len();
            order.push((node, parent));
            pending.extend(
                node.children
                    .iter()
                    .map(|(&key, child)| (child, Some((index, key)))),
            );
        }

        let mut copies: Vec<Option<Node>> = order
            .iter()
            .map(|(node, _)| Some(Node::new(node.term.clone())))
            .collect();
        let mut root = None;
        for (index, (_, parent)) in order.iter().enumerate().rev() {
            let Some(copy) = copies[index].take() else {
                continue;
            };
            match parent {
                Some((parent, key)) => {
                    if let Some(slot) = copies[*parent].as_mut() {
                        slot.children.insert(*key, copy);
                    }
                }
                None => root = Some(copy),
            }
        }
        root.unwrap_or_else(|| Node::new(self.term.clone()))
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((a, b)) = pending.pop() {
            if a.term != b.term || a.children.len() != b.children.len() {
                return false;
            }
            for ((key_a, child_a), (key_b, child_b)) in a.children.iter().zip(&b.children) {
                if key_a != key_b {
                    return false;
                }
                pending.push((child_a, child_b));
            }
        }
        true
    }
}

impl Eq for Node {}

/// Shows one level only: the term and its outgoing edges.
impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let edges: Vec<(usize, &str)> = self
            .children
            .iter()
            .map(|(&key, child)| (key, child.term.as_str()))
            .collect();
        f.debug_struct("Node")
            .field("term", &self.term)
            .field("edges", &edges)
            .finish()
    }
}

impl Node {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            children: BTreeMap::new(),
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    /// Children in ascending edge-key order.
    pub fn children(&self) -> impl Iterator<Item = (usize, &Node)> {
        self.children.iter().map(|(&key, child)| (key, child))
    }

    /// Insert `term` somewhere below this node.
    ///
    /// Walks edges keyed by `levenshtein(term, node.term)` until it either
    /// finds a free slot (returns `true`) or a node at distance 0 (the term
    /// is already present, returns `false` without mutating anything).
    pub fn add(&mut self, term: impl Into<String>) -> bool {
        let term = term.into();
        let mut node = self;
        loop {
            let d = levenshtein(&term, &node.term);
            if d == 0 {
                return false;
            }

            match node.children.entry(d) {
                Entry::Occupied(slot) => node = slot.into_mut(),
                Entry::Vacant(slot) => {
                    check_edge(&node.term, &term, d);
                    slot.insert(Node::new(term));
                    return true;
                }
            }
        }
    }

    /// Collect every term below (and including) this node within
    /// `threshold` of `term` into `collected`.
    ///
    /// Only children keyed in `[d - threshold, d + threshold]` are visited,
    /// where `d` is the query's distance to the current node. By the triangle
    /// inequality nothing outside that window can match. Returns the number
    /// of nodes whose distance was computed.
    pub fn search(&self, term: &str, threshold: usize, collected: &mut Matches) -> usize {
        let mut pending = vec![self];
        let mut visited = 0;

        while let Some(node) = pending.pop() {
            visited += 1;
            let d = levenshtein(term, &node.term);
            if d <= threshold {
                check_match_sound(term, &node.term, d, threshold);
                collected.insert(node.term.clone(), d);
            }

            let low = d.saturating_sub(threshold);
            let high = d.saturating_add(threshold);
            for (&key, child) in node.children.range(low..=high) {
                check_pruning_window(d, threshold, key);
                pending.push(child);
            }
        }

        visited
    }

    /// Exact-membership lookup: at most one edge to follow per hop.
    pub fn contains(&self, term: &str) -> bool {
        let mut node = self;
        loop {
            let d = levenshtein(term, &node.term);
            if d == 0 {
                return true;
            }
            match node.children.get(&d) {
                Some(child) => node = child,
                None => return false,
            }
        }
    }

    /// Longest root-to-leaf path, counted in nodes.
    pub fn height(&self) -> usize {
        let mut pending = vec![(self, 1)];
        let mut height = 0;
        while let Some((node, depth)) = pending.pop() {
            height = height.max(depth);
            pending.extend(node.children.values().map(|child| (child, depth + 1)));
        }
        height
    }

    /// Attach `child` under `key` with no distance check, to build broken trees in tests.
    #[cfg(test)]
    pub(crate) fn link_unchecked(&mut self, key: usize, child: Node) {
        self.children.insert(key, child);
    }

    /// A chain of `depth` distinct one-char terms below `""`, built bottom-up
    /// in linear time. Every term is 1 from `""` and from every other term.
    #[cfg(test)]
    pub(crate) fn chain(depth: u32) -> Node {
        let mut below: Option<Node> = None;
        for i in (0..depth).rev() {
            let term = char::from_u32(0x4E00 + i).map(String::from).unwrap_or_default();
            let mut node = Node::new(term);
            if let Some(child) = below.take() {
                node.children.insert(1, child);
            }
            below = Some(node);
        }

        let mut root = Node::new("");
        if let Some(child) = below {
            root.children.insert(1, child);
        }
        root
    }
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Whole-tree structural validation.
//!
//! The contracts in [`crate::contracts`] guard individual operations in debug
//! builds. This module is the complement: an explicit, always-available walk
//! over a finished tree that re-derives every edge key and checks that no
//! term appears twice. Useful after bulk loads and in tests; it costs one
//! distance computation per edge.

mod types;

pub use types::*;

use std::collections::HashSet;

use crate::fuzzy::levenshtein;
use crate::tree::{BkTree, Node};

impl BkTree {
    /// Check the metric-tree invariant on every edge.
    ///
    /// For every child linked under key `k` from parent `p`:
    /// `k > 0` and `levenshtein(p.term, child.term) == k`. Also checks that
    /// each term occurs once and that [`BkTree::len`] matches the node count.
    pub fn verify(&self) -> Result<VerificationReport, InvariantError> {
        let mut report = VerificationReport::default();
        let Some(root) = self.root() else {
            return check_len(self.len(), report);
        };

        let mut seen: HashSet<&str> = HashSet::new();
        let mut pending: Vec<(&Node, usize)> = vec![(root, 1)];

        while let Some((node, depth)) = pending.pop() {
            if !seen.insert(node.term()) {
                return Err(InvariantError::DuplicateTerm {
                    term: node.term().to_string(),
                });
            }
            report.nodes += 1;
            report.height = report.height.max(depth);

            let mut fanout = 0;
            for (key, child) in node.children() {
                check_edge(node, child, key)?;
                fanout += 1;
                pending.push((child, depth + 1));
            }
            report.edges += fanout;
            report.max_fanout = report.max_fanout.max(fanout);
        }

        check_len(self.len(), report)
    }
}

fn check_edge(parent: &Node, child: &Node, key: usize) -> Result<(), InvariantError> {
    if key == 0 {
        return Err(InvariantError::ZeroEdgeKey {
            parent: parent.term().to_string(),
            child: child.term().to_string(),
        });
    }
    let actual = levenshtein(parent.term(), child.term());
    if actual != key {
        return Err(InvariantError::WrongEdgeKey {
            parent: parent.term().to_string(),
            child: child.term().to_string(),
            key,
            actual,
        });
    }
    Ok(())
}

fn check_len(
    claimed: usize,
    report: VerificationReport,
) -> Result<VerificationReport, InvariantError> {
    if claimed != report.nodes {
        return Err(InvariantError::IncorrectLen {
            claimed,
            actual: report.nodes,
        });
    }
    Ok(report)
}

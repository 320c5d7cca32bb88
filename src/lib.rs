//! Burkhard-Keller tree for fuzzy string lookup.
//!
//! Index a set of strings once, then ask for every indexed string within `r`
//! edits of a query without comparing the query against all of them. Each
//! node's children are keyed by their exact Levenshtein distance from that
//! node, so the triangle inequality rules out whole subtrees per hop.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   fuzzy.rs   │────▶│ tree/node.rs │────▶│ tree/mod.rs  │
//! │ (levenshtein)│     │ (add, search)│     │  (BkTree)    │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │            contracts.rs / verify/                    │
//! │  (debug-only edge checks, full structural walk)      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use bktree::BkTree;
//!
//! let mut tree = BkTree::new();
//! tree.add_list(&["cat", "cats", "dog", "bat"]);
//!
//! let mut hits: Vec<_> = tree.search_within("cat", 1)?.into_iter().collect();
//! hits.sort();
//! assert_eq!(
//!     hits,
//!     vec![("bat".to_string(), 1), ("cat".to_string(), 0), ("cats".to_string(), 1)]
//! );
//! # Ok::<(), bktree::BkTreeError>(())
//! ```
//!
//! The tree is single-writer: `add` needs `&mut self`, searches take `&self`
//! and can run concurrently once loading is done.

pub mod contracts;
pub mod error;
pub mod fuzzy;
pub mod testing;
pub mod tree;
pub mod verify;
pub mod wordlist;

// Re-exports for public API
pub use error::{BkTreeError, Result};
pub use fuzzy::{levenshtein, levenshtein_within};
pub use tree::{BkTree, Matches, Node, Terms, Threshold, DEFAULT_THRESHOLD};
pub use verify::{InvariantError, VerificationReport};
pub use wordlist::{load_terms, read_terms};

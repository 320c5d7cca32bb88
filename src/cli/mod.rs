// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the bktree command-line interface.
//!
//! Two subcommands, both of which load a word list into a fresh tree first:
//! `search` to run fuzzy queries against it and `stats` to report on the
//! shape the shuffled insertion produced. Every flag that names an input
//! can also come from the environment.

pub mod display;

use std::path::PathBuf;

use bktree::{Matches, Threshold, VerificationReport};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

#[derive(Parser)]
#[command(
    name = "bktree",
    about = "Fuzzy lookup over a word list using a BK-tree",
    version
)]
pub struct Cli {
    /// Log at debug level (BKTREE_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the indexed terms come from and how they are ordered on insert.
#[derive(Args)]
pub struct Source {
    /// Newline-separated word list (blank lines and `#` comments skipped)
    #[arg(short, long, env = "BKTREE_WORDS")]
    pub words: PathBuf,

    /// Seed for the insertion shuffle, for a reproducible tree shape
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print every indexed term within the threshold of each query
    Search {
        #[command(flatten)]
        source: Source,

        /// Maximum edit distance for a match
        #[arg(
            short,
            long,
            env = "BKTREE_THRESHOLD",
            default_value_t = Threshold::default(),
            allow_negative_numbers = true
        )]
        threshold: Threshold,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Terms to look up
        #[arg(required = true)]
        queries: Vec<String>,
    },

    /// Build the tree and report its shape
    Stats {
        #[command(flatten)]
        source: Source,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

/// One term within the threshold of a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hit {
    pub term: String,
    pub distance: usize,
}

/// All hits for one query, closest first.
#[derive(Debug, Clone, Serialize)]
pub struct QueryReport {
    pub query: String,
    pub threshold: usize,
    pub hits: Vec<Hit>,
}

impl QueryReport {
    pub fn new(query: &str, threshold: usize, matches: Matches) -> Self {
        let mut hits: Vec<Hit> = matches
            .into_iter()
            .map(|(term, distance)| Hit { term, distance })
            .collect();
        hits.sort_by(|a, b| a.distance.cmp(&b.distance).then_with(|| a.term.cmp(&b.term)));
        Self {
            query: query.to_string(),
            threshold,
            hits,
        }
    }
}

/// What `stats` prints.
#[derive(Debug, Clone, Serialize)]
pub struct StatsReport {
    pub terms_read: usize,
    pub indexed: usize,
    pub duplicates: usize,
    #[serde(flatten)]
    pub shape: VerificationReport,
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::process::ExitCode;

use anyhow::{Context, Result};
use bktree::{load_terms, BkTree};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::display::{format_query, format_stats, use_colors};
use cli::{Cli, Commands, QueryReport, Source, StatsReport};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so `--json` output on stdout stays parseable.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("BKTREE_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Search {
            source,
            threshold,
            json,
            queries,
        } => {
            let (tree, _) = build_tree(&source)?;
            let reports = queries
                .iter()
                .map(|query| -> Result<QueryReport> {
                    let matches = tree
                        .search_within(query, threshold.get())
                        .with_context(|| format!("search for {:?} failed", query))?;
                    Ok(QueryReport::new(query, threshold.get(), matches))
                })
                .collect::<Result<Vec<_>>>()?;

            if json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else {
                let colors = use_colors();
                for report in &reports {
                    print!("{}", format_query(report, colors));
                }
            }
        }
        Commands::Stats { source, json } => {
            let (tree, terms_read) = build_tree(&source)?;
            let shape = tree.verify().context("tree failed structural verification")?;
            let stats = StatsReport {
                terms_read,
                indexed: tree.len(),
                duplicates: terms_read - tree.len(),
                shape,
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                print!("{}", format_stats(&stats, use_colors()));
            }
        }
    }
    Ok(())
}

/// Load the word list and insert it in shuffled order.
///
/// Returns the tree and the number of terms read (duplicates included).
fn build_tree(source: &Source) -> Result<(BkTree, usize)> {
    let terms = load_terms(&source.words)
        .with_context(|| format!("failed to read word list {}", source.words.display()))?;

    let mut tree = BkTree::new();
    match source.seed {
        Some(seed) => tree.add_list_with_rng(&terms, &mut StdRng::seed_from_u64(seed)),
        None => tree.add_list(&terms),
    }
    info!(terms = terms.len(), indexed = tree.len(), height = tree.height(), "index built");

    Ok((tree, terms.len()))
}

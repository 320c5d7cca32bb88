// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the bktree CLI.
//!
//! Distances are coloured by closeness: exact hits green, one edit yellow,
//! anything further red. Colours follow the terminal theme (OneDark or
//! One Light), are dropped when stdout is not a TTY, and respect `NO_COLOR`.
//!
//! # Theme detection order
//!
//! 1. `BKTREE_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use std::sync::OnceLock;

use super::{QueryReport, StatsReport};

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Cached theme detection result
static THEME: OnceLock<Theme> = OnceLock::new();

/// Detect terminal theme from environment
fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("BKTREE_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

/// (dark, light) palette pairs
const GREEN: [(u8, u8, u8); 2] = [(152, 195, 121), (80, 161, 79)];
const YELLOW: [(u8, u8, u8); 2] = [(229, 192, 123), (193, 132, 1)];
const RED: [(u8, u8, u8); 2] = [(224, 108, 117), (228, 86, 73)];
const GRAY: [(u8, u8, u8); 2] = [(92, 99, 112), (160, 161, 167)];

fn themed(pair: [(u8, u8, u8); 2]) -> String {
    match theme() {
        Theme::Dark => rgb(pair[0]),
        Theme::Light => rgb(pair[1]),
    }
}

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

fn paint(colors: bool, code: &str, text: &str) -> String {
    if colors {
        format!("{}{}{}", code, text, RESET)
    } else {
        text.to_string()
    }
}

fn distance_color(distance: usize) -> String {
    match distance {
        0 => themed(GREEN),
        1 => themed(YELLOW),
        _ => themed(RED),
    }
}

/// Render one query's hits as an indented list.
pub fn format_query(report: &QueryReport, colors: bool) -> String {
    let mut out = format!(
        "{} {}\n",
        paint(colors, BOLD, &report.query),
        paint(
            colors,
            &themed(GRAY),
            &format!("(≤ {}, {} hits)", report.threshold, report.hits.len())
        )
    );
    for hit in &report.hits {
        let distance = paint(colors, &distance_color(hit.distance), &hit.distance.to_string());
        out.push_str(&format!("  {:>3}  {}\n", distance, hit.term));
    }
    out
}

/// Render the stats table.
pub fn format_stats(stats: &StatsReport, colors: bool) -> String {
    let rows = [
        ("terms read", stats.terms_read),
        ("indexed", stats.indexed),
        ("duplicates", stats.duplicates),
        ("edges", stats.shape.edges),
        ("height", stats.shape.height),
        ("max fan-out", stats.shape.max_fanout),
    ];
    rows.iter()
        .map(|(label, value)| {
            format!("{} {}\n", paint(colors, BOLD, &format!("{:<12}", label)), value)
        })
        .collect()
}

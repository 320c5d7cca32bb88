// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Newline-separated term lists.
//!
//! One term per line. Surrounding whitespace is trimmed, blank lines and
//! lines starting with `#` are skipped. Lines are validated as UTF-8
//! individually so an error can point at the offending line.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{BkTreeError, Result};

/// Read terms from any buffered reader.
pub fn read_terms<R: BufRead>(mut reader: R) -> Result<Vec<String>> {
    let mut terms = Vec::new();
    let mut buf = Vec::new();
    let mut line = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line += 1;

        let text = std::str::from_utf8(&buf).map_err(|_| BkTreeError::InvalidTerm { line })?;
        let term = text.trim();
        if term.is_empty() || term.starts_with('#') {
            continue;
        }
        terms.push(term.to_string());
    }

    Ok(terms)
}

/// Read terms from a file on disk.
pub fn load_terms(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let terms = read_terms(BufReader::new(File::open(path)?))?;
    debug!(path = %path.display(), terms = terms.len(), "loaded word list");
    Ok(terms)
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance over Unicode scalar values.
//!
//! The tree only ever needs the exact distance (it is the edge key), but
//! callers doing one-off "close enough?" checks get a bounded variant that
//! can bail out early.

mod levenshtein;

pub use levenshtein::*;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Positional line-array comparison and report-block rendering.
//!
//! The differ is intentionally positional: test output is order-significant,
//! so line `i` of the actual output is compared against line `i` of the
//! expectation. Long identical prefixes and suffixes are elided from the
//! report, keeping a small margin of context around the differences.

use crate::normalize::clip;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// Lines of identical context retained around the first and last difference.
pub const CONTEXT_MARGIN: usize = 4;

/// Matching lines are truncated to this many characters in the report.
pub const MATCH_WIDTH: usize = 75;

/// Left-pad width for lines tagged `(diff)`, so the tags line up.
pub const DIFF_PAD: usize = 45;

/// How many leading and trailing identical lines to skip when rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffWindow {
    /// Identical leading lines beyond the context margin.
    pub skip_start: usize,
    /// Identical trailing lines beyond the context margin.
    pub skip_end: usize,
}

/// Element-wise equality of two line sequences.
///
/// The actual side is expected to be normalized already; see
/// [`crate::normalize::clean_output`].
pub fn lines_match(expected: &[String], actual: &[String]) -> bool {
    expected == actual
}

/// Compute how many leading and trailing lines can be elided.
///
/// Scans from the start while lines are pairwise equal, independently from
/// the end, both bounded by the shorter sequence, then subtracts the context
/// margin from each count (floored at zero). Safe for sequences of unequal
/// length.
pub fn skip_window(a: &[String], b: &[String]) -> DiffWindow {
    let bound = a.len().min(b.len());

    let mut prefix = 0;
    while prefix < bound && a[prefix] == b[prefix] {
        prefix += 1;
    }

    let mut suffix = 0;
    while suffix < bound && a[a.len() - suffix - 1] == b[b.len() - suffix - 1] {
        suffix += 1;
    }

    DiffWindow {
        skip_start: prefix.saturating_sub(CONTEXT_MARGIN),
        skip_end: suffix.saturating_sub(CONTEXT_MARGIN),
    }
}

/// Render one labeled block of the comparison report.
///
/// `primary` is the sequence this block displays; `other` is the opposite
/// side, consulted only to tag positional mismatches. Lines that mismatch
/// (or have no counterpart) are shown in full with a `(diff)` tag; matching
/// lines are truncated to [`MATCH_WIDTH`] characters. Elision markers stand
/// in for the skipped prefix and suffix. With `mark_empty`, an `(empty)`
/// placeholder is shown when `primary` has no lines at all (used for the
/// actual side, where an empty capture is easy to misread as a blank block).
///
/// Returns the index of the first mismatching line rendered, if any.
pub fn write_block<W: Write>(
    w: &mut W,
    label: &str,
    primary: &[String],
    other: &[String],
    window: DiffWindow,
    mark_empty: bool,
) -> io::Result<Option<usize>> {
    writeln!(w, "{}:", label)?;

    if window.skip_start > 0 {
        writeln!(w, "  ...")?;
    }

    let mut first_diff = None;
    let end = primary.len().saturating_sub(window.skip_end);
    for i in window.skip_start..end {
        if i >= other.len() || primary[i] != other[i] {
            if first_diff.is_none() {
                first_diff = Some(i);
            }
            writeln!(w, "  {:<pad$} (diff)", primary[i], pad = DIFF_PAD)?;
        } else {
            let line = &primary[i];
            let shown = clip(line, MATCH_WIDTH);
            if shown.len() < line.len() {
                writeln!(w, "  {}...", shown)?;
            } else {
                writeln!(w, "  {}", shown)?;
            }
        }
    }

    if mark_empty && primary.is_empty() {
        writeln!(w, "  (empty)")?;
    }
    if window.skip_end > 0 {
        writeln!(w, "  ...")?;
    }

    Ok(first_diff)
}

#[cfg(test)]
#[path = "diff_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Character-level alignment of the first differing line pair.
//!
//! Renders both lines with a caret underneath pointing at the first column
//! where they diverge:
//!
//! ```text
//!   E: foobar
//!   A: fobar
//!        ^
//! ```
//!
//! Long shared prefixes are trimmed away first so the window stays centered
//! near the actual divergence. All indexing is character-based.

use crate::normalize::clip;
use std::io::{self, Write};

/// Below this expected-line length, alignment is noise and is suppressed.
pub const MIN_EXPECTED_LEN: usize = 4;

/// Maximum characters of each line shown in the alignment block.
pub const MAX_ALIGN_WIDTH: usize = 72;

/// Prefix window that must match in full before trimming kicks in.
pub const SHARED_PREFIX_WINDOW: usize = 30;

/// Characters removed per trimming step.
pub const TRUNC_STEP: usize = 10;

/// Drop the first `n` characters of `s`.
fn skip_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[idx..],
        None => "",
    }
}

/// Render the alignment block for an expected/actual line pair.
///
/// Produces no output when the expected line is shorter than
/// [`MIN_EXPECTED_LEN`] characters. When both lines share an identical
/// [`SHARED_PREFIX_WINDOW`]-character prefix, [`TRUNC_STEP`] characters are
/// stripped from the front of both until they no longer do, and an ellipsis
/// marks the truncation. The caret line holds a space per matching column
/// and a `^` at the first mismatch; if neither rendered line diverges within
/// the window, it holds only spaces.
pub fn write_alignment<W: Write>(w: &mut W, expected: &str, actual: &str) -> io::Result<()> {
    if expected.chars().count() < MIN_EXPECTED_LEN {
        return Ok(());
    }

    writeln!(w, "Alignment of first line difference:")?;

    let mut s1 = expected;
    let mut s2 = actual;
    let mut trunc = false;
    loop {
        let p1 = clip(s1, SHARED_PREFIX_WINDOW);
        if p1.chars().count() < SHARED_PREFIX_WINDOW || p1 != clip(s2, SHARED_PREFIX_WINDOW) {
            break;
        }
        s1 = skip_chars(s1, TRUNC_STEP);
        s2 = skip_chars(s2, TRUNC_STEP);
        trunc = true;
    }

    let (s1, s2) = if trunc {
        (format!("...{}", s1), format!("...{}", s2))
    } else {
        (s1.to_string(), s2.to_string())
    };

    let len1 = s1.chars().count();
    let len2 = s2.chars().count();
    let extra = if len1.max(len2) > MAX_ALIGN_WIDTH {
        "..."
    } else {
        ""
    };

    writeln!(w, "  E: {}{}", clip(&s1, MAX_ALIGN_WIDTH), extra)?;
    writeln!(w, "  A: {}{}", clip(&s2, MAX_ALIGN_WIDTH), extra)?;

    write!(w, "     ")?;
    let mut c1 = s1.chars();
    let mut c2 = s2.chars();
    for _ in 0..MAX_ALIGN_WIDTH.min(len1.max(len2)) {
        if c1.next() != c2.next() {
            write!(w, "^")?;
            break;
        }
        write!(w, " ")?;
    }
    writeln!(w)?;
    Ok(())
}

#[cfg(test)]
#[path = "align_tests.rs"]
mod tests;

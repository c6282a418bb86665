// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Assertion reporting: normalize, compare, render, fail.
//!
//! The reporter writes to an injected writer so tests can capture the
//! rendered report; the convenience wrapper targets stderr, where all diff
//! output conventionally goes.

use crate::align::write_alignment;
use crate::diff::{lines_match, skip_window, write_block};
use crate::normalize::clean_output;
use std::io::{self, Write};
use thiserror::Error;

/// Alignment is rendered only when the first differing line pair has at
/// least one line this long.
pub const MIN_LINE_LENGTH_FOR_ALIGNMENT: usize = 5;

/// Outcome of a failed comparison or a broken report writer.
#[derive(Debug, Error)]
pub enum MatchError {
    /// The sequences differ; the report was fully rendered before this was
    /// returned.
    #[error("{0}")]
    Mismatch(String),

    #[error("failed to write comparison report: {0}")]
    Io(#[from] io::Error),
}

/// Compares line sequences and renders a report on mismatch.
pub struct AssertionReporter<W: Write> {
    writer: W,
}

impl<W: Write> AssertionReporter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Compare `expected` against normalized `actual`.
    ///
    /// Equal sequences produce no output. Unequal sequences produce the
    /// two-block report (with elision and the optional alignment block) and
    /// `MatchError::Mismatch` carrying `msg`.
    pub fn check(
        &mut self,
        expected: &[String],
        actual: &[String],
        msg: &str,
    ) -> Result<(), MatchError> {
        let actual = clean_output(actual);
        if lines_match(expected, &actual) {
            return Ok(());
        }

        let window = skip_window(expected, &actual);
        let first_diff =
            write_block(&mut self.writer, "Expected", expected, &actual, window, false)?;
        write_block(&mut self.writer, "Actual", &actual, expected, window, true)?;
        writeln!(self.writer)?;

        if let Some(i) = first_diff {
            if i < actual.len()
                && (expected[i].chars().count() >= MIN_LINE_LENGTH_FOR_ALIGNMENT
                    || actual[i].chars().count() >= MIN_LINE_LENGTH_FOR_ALIGNMENT)
            {
                write_alignment(&mut self.writer, &expected[i], &actual[i])?;
            }
        }

        Err(MatchError::Mismatch(msg.to_string()))
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Compare against stderr, the conventional stream for diff output.
pub fn assert_output_matches(
    expected: &[String],
    actual: &[String],
    msg: &str,
) -> Result<(), MatchError> {
    let stderr = io::stderr();
    AssertionReporter::new(stderr.lock()).check(expected, actual, msg)
}

/// Compare module-name sets, ignoring order, duplicates, and the root
/// module. A `None` expectation means the test declares nothing and always
/// passes.
pub fn check_module_equivalence<W: Write>(
    reporter: &mut AssertionReporter<W>,
    name: &str,
    expected: Option<&[String]>,
    actual: &[String],
    root: &str,
) -> Result<(), MatchError> {
    let Some(expected) = expected else {
        return Ok(());
    };
    let mut expected_normalized = expected.to_vec();
    expected_normalized.sort();
    let mut actual_normalized: Vec<String> = actual
        .iter()
        .filter(|module| module.as_str() != root)
        .cloned()
        .collect();
    actual_normalized.sort();
    actual_normalized.dedup();

    let msg = format!(
        "Actual modules ({}) do not match expected modules ({}) for \"[{} ...]\"",
        actual_normalized.join(", "),
        expected_normalized.join(", "),
        name,
    );
    reporter.check(&expected_normalized, &actual_normalized, &msg)
}

/// Compare rebuild targets, order-sensitive. A `None` expectation always
/// passes.
pub fn check_target_equivalence<W: Write>(
    reporter: &mut AssertionReporter<W>,
    name: &str,
    expected: Option<&[String]>,
    actual: &[String],
) -> Result<(), MatchError> {
    let Some(expected) = expected else {
        return Ok(());
    };
    let msg = format!(
        "Actual targets ({}) do not match expected targets ({}) for \"[{} ...]\"",
        actual.join(", "),
        expected.join(", "),
        name,
    );
    reporter.check(expected, actual, &msg)
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;

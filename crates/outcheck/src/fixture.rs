// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! In-place rewriting of recorded expected output in fixture files.
//!
//! When the checked tool's behavior legitimately changes, re-recording
//! expectations by hand is tedious. The updater rewrites the recorded block
//! by textual substitution, gated on occurrence counts: a fragment is only
//! replaced when it appears in the test body exactly as many times as there
//! are replacements queued for it. Anything ambiguous is left untouched for
//! a human to resolve.

use encoding_rs::{Encoding, UTF_8};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// Default diagnostic marker separating a location prefix from the message
/// payload.
pub const DEFAULT_MARKER: &str = "error:";

/// Errors from a fixture update operation.
#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("failed to read or write fixture file: {0}")]
    Io(#[from] std::io::Error),

    #[error("fixture file {path:?} is not valid {encoding}")]
    Decode {
        path: PathBuf,
        encoding: &'static str,
    },

    #[error("line range {start}..{end} is inconsistent with {path:?} ({len} lines)")]
    InvalidRange {
        path: PathBuf,
        start: usize,
        end: usize,
        len: usize,
    },
}

/// A single test case's span within a fixture file.
///
/// `start_line` is inclusive, `end_line` exclusive, both zero-based;
/// `expected_output` is the output previously recorded for the case.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureRecord {
    pub path: PathBuf,
    pub start_line: usize,
    pub end_line: usize,
    pub expected_output: Vec<String>,
}

/// Rewrites a fixture's recorded expected output to match newly observed
/// output.
#[derive(Clone, Debug)]
pub struct FixtureUpdater {
    marker: String,
    encoding: &'static Encoding,
}

impl Default for FixtureUpdater {
    fn default() -> Self {
        Self::new()
    }
}

impl FixtureUpdater {
    /// Updater with the `error:` marker and UTF-8 encoding.
    pub fn new() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            encoding: UTF_8,
        }
    }

    /// Use a different diagnostic marker for payload-only substitution.
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Use a different text encoding for reading and writing the fixture.
    pub fn with_encoding(mut self, encoding: &'static Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Rewrite the record's test body so it expects `new_output`.
    ///
    /// Old and new lines are paired in order; each resulting fragment is
    /// substituted only when its occurrence count in the body matches the
    /// number of replacements queued for it. The whole file is rewritten,
    /// so callers must serialize updates against the same fixture path.
    pub fn update(
        &self,
        record: &FixtureRecord,
        new_output: &[String],
    ) -> Result<(), UpdateError> {
        let bytes = fs::read(&record.path)?;
        let (text, had_errors) = self.encoding.decode_without_bom_handling(&bytes);
        if had_errors {
            return Err(UpdateError::Decode {
                path: record.path.clone(),
                encoding: self.encoding.name(),
            });
        }

        let mut data_lines: Vec<String> = text.lines().map(str::to_string).collect();
        if record.start_line > record.end_line || record.end_line > data_lines.len() {
            return Err(UpdateError::InvalidRange {
                path: record.path.clone(),
                start: record.start_line,
                end: record.end_line,
                len: data_lines.len(),
            });
        }

        let mut body = data_lines[record.start_line..record.end_line].join("\n");

        // Queue replacements per distinct old fragment, in pairing order.
        let mut mapping: Vec<(String, Vec<String>)> = Vec::new();
        for (old, new) in record.expected_output.iter().zip(new_output) {
            let (old_frag, new_frag) = self.substitution_unit(old, new);
            match mapping.iter_mut().find(|(key, _)| *key == old_frag) {
                Some((_, queued)) => queued.push(new_frag),
                None => mapping.push((old_frag, vec![new_frag])),
            }
        }

        for (old, queued) in &mapping {
            // An empty fragment has a degenerate occurrence count; never a
            // substitution key.
            if old.is_empty() {
                continue;
            }
            if body.matches(old.as_str()).count() != queued.len() {
                continue;
            }
            let betweens: Vec<&str> = body.split(old.as_str()).collect();
            let mut rebuilt = String::with_capacity(body.len());
            rebuilt.push_str(betweens[0]);
            for (replacement, between) in queued.iter().zip(&betweens[1..]) {
                rebuilt.push_str(replacement);
                rebuilt.push_str(between);
            }
            body = rebuilt;
        }

        data_lines.splice(record.start_line..record.end_line, std::iter::once(body));
        let mut data = data_lines.join("\n");
        data.push('\n');
        let (encoded, _, _) = self.encoding.encode(&data);
        fs::write(&record.path, &encoded)?;
        Ok(())
    }

    /// Reduce an old/new line pair to its substitution fragments.
    ///
    /// When both lines carry the marker at the same offset with an identical
    /// prefix up to and including it, only the payload after the marker is
    /// substituted; the shared location prefix stays verbatim.
    fn substitution_unit(&self, old: &str, new: &str) -> (String, String) {
        if !self.marker.is_empty() {
            if let Some(idx) = old.find(&self.marker) {
                let cut = idx + self.marker.len();
                if new.get(..cut).is_some_and(|prefix| prefix == &old[..cut]) {
                    return (old[cut..].to_string(), new[cut..].to_string());
                }
            }
        }
        (old.to_string(), new.to_string())
    }
}

#[cfg(test)]
#[path = "fixture_tests.rs"]
mod tests;

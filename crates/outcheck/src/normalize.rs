// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output normalization applied before comparison.
//!
//! Captured output carries environment-specific noise: platform path
//! separators, trailing spaces left by column-aligned printers, and
//! carriage returns on Windows. Everything here is pure string hygiene.

use regex::Regex;
use std::path::MAIN_SEPARATOR_STR;
use std::sync::OnceLock;

// Literal patterns cannot fail to compile.
#[allow(clippy::unwrap_used)]
fn trailing_spaces_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r" +$").unwrap())
}

#[allow(clippy::unwrap_used)]
fn trailing_cr_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\r$").unwrap())
}

/// Normalize captured output lines for comparison.
///
/// Removes occurrences of the platform path separator (and its forward-slash
/// spelling), strips trailing spaces, and strips a trailing carriage return.
/// A bare `/`, `//`, `\` or `\\` separator is left alone: those are
/// meaningful content, not path noise.
pub fn clean_output(lines: &[String]) -> Vec<String> {
    let sep = MAIN_SEPARATOR_STR;
    let forward = sep.replace('\\', "/");

    lines
        .iter()
        .map(|line| {
            let mut s = line.clone();
            for p in [sep, forward.as_str()] {
                if p != "/" && p != "//" && p != "\\" && p != "\\\\" {
                    s = s.replace(p, "");
                }
            }
            let s = trailing_spaces_re().replace(&s, "");
            trailing_cr_re().replace(&s, "").into_owned()
        })
        .collect()
}

/// Rewrite the platform path separator to `/` in every line.
///
/// Diagnostics embed paths in the platform spelling; fixtures record them
/// with forward slashes so they compare equal everywhere.
pub fn normalize_path_separators(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .map(|line| line.replace(MAIN_SEPARATOR_STR, "/"))
        .collect()
}

/// Decode byte streams and flatten them into a single list of lines.
///
/// Invalid UTF-8 is replaced rather than rejected; captured output from a
/// crashing process is still worth comparing.
pub fn split_lines(streams: &[&[u8]]) -> Vec<String> {
    streams
        .iter()
        .flat_map(|stream| {
            String::from_utf8_lossy(stream)
                .lines()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}

/// First `max_chars` characters of `s`, without splitting a code point.
pub(crate) fn clip(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;

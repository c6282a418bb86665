// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use yare::parameterized;

fn lines(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

#[parameterized(
    trailing_spaces = { "abc   ", "abc" },
    trailing_cr = { "abc\r", "abc" },
    spaces_then_cr = { "abc \r", "abc " },
    cr_then_spaces = { "abc\r ", "abc" },
    interior_spaces_kept = { "a  b", "a  b" },
    already_clean = { "abc", "abc" },
    empty = { "", "" },
)]
fn clean_output_line(input: &str, expected: &str) {
    assert_eq!(clean_output(&lines(&[input])), lines(&[expected]));
}

#[test]
fn clean_output_strips_one_cr() {
    // Only the final carriage return goes; any before it are content.
    assert_eq!(clean_output(&lines(&["abc\r\r"])), lines(&["abc\r"]));
}

#[cfg(unix)]
#[test]
fn clean_output_leaves_bare_slashes_alone() {
    // The platform separator is a bare slash here, which is meaningful
    // content rather than path noise.
    let input = lines(&["a/b/c", "//server/share"]);
    assert_eq!(clean_output(&input), input);
}

#[test]
fn clean_output_handles_mixed_batch() {
    let input = lines(&["ok", "trailing  ", "windows\r", ""]);
    assert_eq!(clean_output(&input), lines(&["ok", "trailing", "windows", ""]));
}

#[cfg(unix)]
#[test]
fn path_separator_normalization_is_identity_on_forward_slashes() {
    let input = lines(&["pkg/mod.x:1: error: boom"]);
    assert_eq!(normalize_path_separators(&input), input);
}

#[test]
fn split_lines_flattens_streams_in_order() {
    let out: &[u8] = b"one\ntwo\n";
    let err: &[u8] = b"three\n";
    assert_eq!(split_lines(&[out, err]), lines(&["one", "two", "three"]));
}

#[test]
fn split_lines_is_lossy_on_invalid_utf8() {
    let bad: &[u8] = b"ok\n\xffbroken\n";
    let result = split_lines(&[bad]);
    assert_eq!(result.len(), 2);
    assert_eq!(result[0], "ok");
    assert!(result[1].contains("broken"));
}

#[test]
fn split_lines_empty_stream() {
    assert!(split_lines(&[b""]).is_empty());
}

#[parameterized(
    ascii = { "hello", 3, "hel" },
    exact = { "hello", 5, "hello" },
    longer_budget = { "hi", 10, "hi" },
    multibyte = { "h\u{e9}llo", 2, "h\u{e9}" },
    zero = { "hello", 0, "" },
)]
fn clip_respects_char_boundaries(input: &str, max: usize, expected: &str) {
    assert_eq!(clip(input, max), expected);
}

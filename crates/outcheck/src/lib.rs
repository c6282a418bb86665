// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Expected/actual output comparison and fixture updating.
//!
//! This crate provides the diff and fixture-update support for data-driven
//! test suites of batch checkers: a caller runs the tool under test,
//! captures its output as lines, and hands them here. The crate compares
//! them against the recorded expectation, renders a human-readable report
//! when they differ, and can rewrite the recorded expectation in place when
//! the tool's behavior legitimately changed.
//!
//! Running the checked tool, parsing test annotations, and scheduling test
//! cases are caller concerns; this crate only compares, displays, and
//! optionally rewrites text.

pub mod align;
pub mod diff;
pub mod fixture;
pub mod normalize;
pub mod report;

pub use diff::DiffWindow;
pub use fixture::{FixtureRecord, FixtureUpdater, UpdateError};
pub use normalize::{clean_output, normalize_path_separators, split_lines};
pub use report::{
    assert_output_matches, check_module_equivalence, check_target_equivalence, AssertionReporter,
    MatchError,
};

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Subtest naming.
//!
//! `t.Run` joins a subtest onto its parent with `/`, so `TestA/case_1/x` is a
//! grandchild of `TestA`.

/// Separator between a parent test name and its subtest name.
pub const SEPARATOR: char = '/';

/// Name of the direct parent, or `None` for a root test.
pub fn parent_of(name: &str) -> Option<&str> {
    name.rfind(SEPARATOR).map(|idx| &name[..idx])
}

/// Whether `name` denotes a subtest.
pub fn is_subtest(name: &str) -> bool {
    name.contains(SEPARATOR)
}

/// Last path segment of a test name.
pub fn leaf_name(name: &str) -> &str {
    match name.rfind(SEPARATOR) {
        Some(idx) => &name[idx + SEPARATOR.len_utf8()..],
        None => name,
    }
}

#[cfg(test)]
#[path = "hierarchy_tests.rs"]
mod tests;

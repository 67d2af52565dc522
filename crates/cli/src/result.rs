// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Aggregated test result types.
//!
//! A [`ResultSet`] is the complete, finalized picture handed to reporters.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::hierarchy;

/// Final status of a test.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TestStatus {
    /// No terminal event was observed.
    #[default]
    Unknown,
    Pass,
    Fail,
    Skip,
}

impl TestStatus {
    /// Whether a pass/fail/skip event has been observed.
    pub fn is_terminal(self) -> bool {
        !matches!(self, TestStatus::Unknown)
    }
}

/// Aggregated result for a single test or subtest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestResultNode {
    /// Fully qualified test name (unique within a result set).
    pub name: String,
    pub package: String,
    pub status: TestStatus,
    /// Duration in seconds.
    pub duration: f64,
    /// Captured output lines in stream order.
    pub output_lines: Vec<String>,
    /// Set iff `name` denotes a subtest.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_name: Option<String>,
    /// Direct children in discovery order.
    pub child_names: Vec<String>,
    /// Output lines discarded by the per-test output cap.
    #[serde(skip_serializing_if = "is_zero")]
    pub dropped_output_lines: usize,
}

fn is_zero(n: &usize) -> bool {
    *n == 0
}

impl TestResultNode {
    /// Create a node with no observed status.
    pub fn new(name: impl Into<String>, package: impl Into<String>) -> Self {
        let name = name.into();
        let parent_name = hierarchy::parent_of(&name).map(String::from);
        Self {
            name,
            package: package.into(),
            status: TestStatus::Unknown,
            duration: 0.0,
            output_lines: Vec::new(),
            parent_name,
            child_names: Vec::new(),
            dropped_output_lines: 0,
        }
    }

    pub fn is_subtest(&self) -> bool {
        self.parent_name.is_some()
    }
}

/// Finalized aggregation output.
///
/// Counters and `total_duration` cover root tests only; subtests are reachable
/// through their parent's `child_names`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultSet {
    pub total_tests: usize,
    pub passed_tests: usize,
    pub failed_tests: usize,
    pub skipped_tests: usize,
    /// Sum of root test durations, in seconds.
    pub total_duration: f64,
    /// All nodes keyed by name.
    pub nodes: BTreeMap<String, TestResultNode>,
    /// Root test names, sorted lexicographically.
    pub sorted_root_names: Vec<String>,
}

impl ResultSet {
    /// Build a result set from finished nodes, computing the roll-ups.
    pub fn from_nodes(nodes: BTreeMap<String, TestResultNode>) -> Self {
        let mut set = ResultSet {
            nodes,
            ..Default::default()
        };

        // BTreeMap iteration is already sorted by name
        for node in set.nodes.values().filter(|n| !n.is_subtest()) {
            set.sorted_root_names.push(node.name.clone());
            set.total_tests += 1;
            set.total_duration += node.duration;

            match node.status {
                TestStatus::Pass => set.passed_tests += 1,
                TestStatus::Fail => set.failed_tests += 1,
                TestStatus::Skip => set.skipped_tests += 1,
                TestStatus::Unknown => {}
            }
        }

        set
    }

    pub fn get(&self, name: &str) -> Option<&TestResultNode> {
        self.nodes.get(name)
    }

    /// Root tests in sorted order.
    pub fn roots(&self) -> impl Iterator<Item = &TestResultNode> {
        self.sorted_root_names
            .iter()
            .filter_map(|name| self.nodes.get(name))
    }

    /// Direct children of `name` in discovery order.
    pub fn children<'a>(
        &'a self,
        name: &str,
    ) -> impl Iterator<Item = &'a TestResultNode> + use<'a> {
        self.nodes
            .get(name)
            .into_iter()
            .flat_map(|node| node.child_names.iter())
            .filter_map(|child| self.nodes.get(child))
    }

    /// Root tests with no terminal event.
    pub fn unknown_tests(&self) -> usize {
        self.total_tests - self.passed_tests - self.failed_tests - self.skipped_tests
    }

    /// Percentage of root tests that passed, or `None` when there are none.
    pub fn pass_percentage(&self) -> Option<f64> {
        if self.total_tests == 0 {
            return None;
        }
        Some(self.passed_tests as f64 / self.total_tests as f64 * 100.0)
    }

    pub fn has_failures(&self) -> bool {
        self.failed_tests > 0
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;

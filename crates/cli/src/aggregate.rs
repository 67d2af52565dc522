// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Event aggregation.
//!
//! Folds a chronological stream of [`Event`]s into a [`ResultSet`]. All state
//! lives in the [`Aggregator`] and is dropped once the result set is built.

use std::collections::{BTreeMap, HashMap};
use std::io::BufRead;

use chrono::{DateTime, FixedOffset};

use crate::error::{Error, Result};
use crate::event::{Action, Event, parse_line};
use crate::hierarchy;
use crate::result::{ResultSet, TestResultNode, TestStatus};
use crate::timing::derive_duration;

/// Tunables for a single aggregation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateOptions {
    /// Keep at most this many output lines per test (`None` = unlimited).
    pub max_output_lines: Option<usize>,
}

#[derive(Debug, Default)]
struct OutputBuffer {
    lines: Vec<String>,
    dropped: usize,
}

/// Incremental aggregation state.
#[derive(Debug, Default)]
pub struct Aggregator {
    options: AggregateOptions,
    nodes: BTreeMap<String, TestResultNode>,
    /// Timestamp of the most recent `run` per test.
    start_times: HashMap<String, DateTime<FixedOffset>>,
    /// Output is buffered apart from nodes since it may precede the first
    /// lifecycle event for a name.
    outputs: HashMap<String, OutputBuffer>,
}

impl Aggregator {
    pub fn new(options: AggregateOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    /// Apply one event.
    pub fn push(&mut self, event: Event) {
        if event.is_package_level() {
            tracing::trace!("skipping package-level {:?} for {}", event.action, event.package);
            return;
        }

        tracing::trace!("{:?} {}", event.action, event.test);

        if event.action.is_lifecycle() {
            self.discover(&event.test, &event.package);
        }

        match event.action {
            Action::Run => match event.time {
                Some(time) => {
                    self.start_times.insert(event.test, time);
                }
                // A zero timestamp cannot anchor a duration
                None => {
                    self.start_times.remove(&event.test);
                }
            },
            Action::Pass | Action::Fail => {
                let start = self.start_times.get(&event.test).copied();
                let duration = derive_duration(event.elapsed, start, event.time);
                let status = if event.action == Action::Pass {
                    TestStatus::Pass
                } else {
                    TestStatus::Fail
                };
                self.finish_test(&event.test, status, Some(duration));
            }
            Action::Skip => self.finish_test(&event.test, TestStatus::Skip, None),
            Action::Output => self.record_output(event.test, &event.output),
            Action::Pause | Action::Cont | Action::Bench | Action::Other => {}
        }
    }

    /// Build the final result set.
    pub fn finish(mut self) -> ResultSet {
        for (name, buffer) in self.outputs {
            match self.nodes.get_mut(&name) {
                Some(node) => {
                    node.output_lines = buffer.lines;
                    node.dropped_output_lines = buffer.dropped;
                }
                None => {
                    tracing::debug!("discarding output for {} (no lifecycle events)", name);
                }
            }
        }

        let set = ResultSet::from_nodes(self.nodes);
        tracing::info!(
            "aggregated {} tests ({} passed, {} failed, {} skipped) in {:.2}s",
            set.total_tests,
            set.passed_tests,
            set.failed_tests,
            set.skipped_tests,
            set.total_duration
        );
        set
    }

    /// Create the node for `name` on first sight and register it with its
    /// direct parent, synthesizing the parent if it has not been seen yet.
    ///
    /// Only the direct parent is synthesized; a synthesized node is never
    /// linked to its own parent.
    fn discover(&mut self, name: &str, package: &str) {
        if self.nodes.contains_key(name) {
            return;
        }
        self.nodes
            .insert(name.to_string(), TestResultNode::new(name, package));

        let Some(parent) = hierarchy::parent_of(name) else {
            return;
        };
        let parent_node = self.nodes.entry(parent.to_string()).or_insert_with(|| {
            tracing::debug!("synthesizing parent {} for {}", parent, name);
            TestResultNode::new(parent, package)
        });
        parent_node.child_names.push(name.to_string());
    }

    fn finish_test(&mut self, name: &str, status: TestStatus, duration: Option<f64>) {
        let Some(node) = self.nodes.get_mut(name) else {
            return;
        };

        if node.status.is_terminal() {
            tracing::debug!(
                "{} reported {:?} after {:?}, keeping the latest",
                name,
                status,
                node.status
            );
        }

        node.status = status;
        if let Some(duration) = duration {
            node.duration = duration;
        }
    }

    fn record_output(&mut self, name: String, raw: &str) {
        let Some(line) = clean_output_line(raw) else {
            return;
        };

        let buffer = self.outputs.entry(name).or_default();
        match self.options.max_output_lines {
            Some(max) if buffer.lines.len() >= max => buffer.dropped += 1,
            _ => buffer.lines.push(line.to_string()),
        }
    }
}

/// Strip a single trailing newline; `None` if nothing is left.
pub fn clean_output_line(raw: &str) -> Option<&str> {
    let line = raw.strip_suffix('\n').unwrap_or(raw);
    if line.is_empty() { None } else { Some(line) }
}

/// Aggregate a newline-delimited JSON event stream.
///
/// Fails on the first unreadable chunk or malformed line; no partial result
/// is returned.
pub fn aggregate<R: BufRead>(reader: R, options: &AggregateOptions) -> Result<ResultSet> {
    let mut aggregator = Aggregator::new(options.clone());

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| Error::StreamRead { source })?;
        if let Some(event) = parse_line(&line, idx + 1)? {
            aggregator.push(event);
        }
    }

    Ok(aggregator.finish())
}

/// Aggregate already-decoded events.
pub fn aggregate_events<I>(events: I, options: &AggregateOptions) -> ResultSet
where
    I: IntoIterator<Item = Event>,
{
    let mut aggregator = Aggregator::new(options.clone());
    for event in events {
        aggregator.push(event);
    }
    aggregator.finish()
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;

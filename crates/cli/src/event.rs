// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test events as emitted by `go test -json`.
//!
//! One JSON object per line. Absent and `null` fields decode to their zero
//! value, and unknown fields are ignored.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer};

use crate::error::{Error, Result};

/// What happened to a test.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Run,
    Pause,
    Cont,
    Pass,
    Fail,
    Skip,
    Output,
    Bench,
    /// Actions added by newer toolchains (`start`, `build-output`, ...),
    /// and records without an action.
    #[default]
    #[serde(other)]
    Other,
}

impl Action {
    /// Whether this action creates a result node on first sight of a test name.
    pub fn is_lifecycle(self) -> bool {
        matches!(self, Action::Run | Action::Pass | Action::Fail | Action::Skip)
    }
}

/// A single event from the test runner.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Event {
    /// When the event occurred. `None` stands in for the zero timestamp.
    #[serde(rename = "Time", default, deserialize_with = "timestamp")]
    pub time: Option<DateTime<FixedOffset>>,
    #[serde(rename = "Action", default, deserialize_with = "null_as_default")]
    pub action: Action,
    /// Fully qualified test name; empty for package-level events.
    #[serde(rename = "Test", default, deserialize_with = "null_as_default")]
    pub test: String,
    #[serde(rename = "Package", default, deserialize_with = "null_as_default")]
    pub package: String,
    /// Captured text, only meaningful for `output` events.
    #[serde(rename = "Output", default, deserialize_with = "null_as_default")]
    pub output: String,
    /// Seconds reported by `pass`/`fail` events; zero when absent.
    #[serde(rename = "Elapsed", default, deserialize_with = "null_as_default")]
    pub elapsed: f64,
}

/// Unix seconds of `0001-01-01T00:00:00Z`, Go's zero `time.Time`.
const GO_ZERO_TIME_UNIX: i64 = -62_135_596_800;

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// `null` and Go's zero instant both mean "no timestamp".
fn timestamp<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<DateTime<FixedOffset>>, D::Error>
where
    D: Deserializer<'de>,
{
    let time = Option::<DateTime<FixedOffset>>::deserialize(deserializer)?;
    Ok(time.filter(|t| !is_zero_time(t)))
}

/// Whether `time` is the zero instant a Go producer writes for an unset time.
pub fn is_zero_time(time: &DateTime<FixedOffset>) -> bool {
    time.timestamp() == GO_ZERO_TIME_UNIX && time.timestamp_subsec_nanos() == 0
}

impl Event {
    /// Package-level events carry no test name.
    pub fn is_package_level(&self) -> bool {
        self.test.is_empty()
    }
}

/// Decode one input line.
///
/// Blank and whitespace-only lines yield `Ok(None)`. `line_number` is
/// 1-based and only used for error reporting.
pub fn parse_line(line: &str, line_number: usize) -> Result<Option<Event>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    serde_json::from_str(line)
        .map(Some)
        .map_err(|source| Error::MalformedEvent {
            line: line_number,
            source,
        })
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;

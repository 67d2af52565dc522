// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Aggregation of `go test -json` event streams.
//!
//! [`aggregate`] folds newline-delimited test events into a [`ResultSet`]: one
//! node per test with status, duration, captured output and subtest links,
//! plus root-level roll-up counters. Rendering is left to callers.

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod event;
pub mod hierarchy;
pub mod result;
pub mod timing;

pub use aggregate::{AggregateOptions, Aggregator, aggregate, aggregate_events};
pub use cli::{AggregateArgs, Cli, Command};
pub use config::Config;
pub use error::{Error, ExitCode, Result};
pub use event::{Action, Event};
pub use result::{ResultSet, TestResultNode, TestStatus};

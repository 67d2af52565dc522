// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Aggregates `go test -json` event streams into a hierarchical test summary
#[derive(Parser)]
#[command(name = "gotest-summary")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "GOTEST_SUMMARY_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Aggregate a test event stream and print the result set as JSON
    Aggregate(AggregateArgs),
}

#[derive(clap::Args, Default)]
pub struct AggregateArgs {
    /// `go test -json` output file (default: stdin)
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Keep at most N output lines per test (overrides config)
    #[arg(long, value_name = "N")]
    pub max_output_lines: Option<usize>,

    /// Print JSON on a single line
    #[arg(long)]
    pub compact: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;

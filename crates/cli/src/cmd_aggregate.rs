// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Aggregate command implementation.

use std::fs::File;
use std::io::{self, BufReader, Write};

use anyhow::Context;

use gotest_summary::cli::{AggregateArgs, Cli};
use gotest_summary::{Error, aggregate, discovery};

/// Run the aggregate command.
pub fn run(cli: &Cli, args: &AggregateArgs) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;

    let source = discovery::resolve_config(cli.config.as_deref(), &cwd)?;
    let config = source.load()?;

    let mut options = config.aggregate_options();
    if let Some(max) = args.max_output_lines {
        options.max_output_lines = Some(max);
    }

    let result_set = match &args.input {
        Some(path) => {
            let file = File::open(path).map_err(|source| Error::Io {
                path: path.clone(),
                source,
            })?;
            aggregate(BufReader::new(file), &options)
                .with_context(|| format!("failed to aggregate {}", path.display()))?
        }
        None => aggregate(io::stdin().lock(), &options)
            .context("failed to aggregate standard input")?,
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if args.compact {
        serde_json::to_writer(&mut handle, &result_set)?;
    } else {
        serde_json::to_writer_pretty(&mut handle, &result_set)?;
    }
    writeln!(handle)?;
    handle.flush()?;
    Ok(())
}

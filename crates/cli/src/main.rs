// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! gotest-summary CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use gotest_summary::cli::{Cli, Command};
use gotest_summary::error::ExitCode;

mod cmd_aggregate;

fn init_logging() {
    let filter = EnvFilter::try_from_env("GOTEST_SUMMARY_LOG")
        .unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("gotest-summary: {:#}", e);
            match e.downcast_ref::<gotest_summary::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            // Show help for bare invocation
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Aggregate(args)) => {
            cmd_aggregate::run(&cli, args)?;
            Ok(ExitCode::Success)
        }
    }
}

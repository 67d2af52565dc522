// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

/// gotest-summary error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A non-blank input line did not decode as a test event
    #[error("malformed event on line {line}: {source}")]
    MalformedEvent {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// The event stream could not be fully read
    #[error("failed to read event stream: {source}")]
    StreamRead {
        #[source]
        source: std::io::Error,
    },

    /// Configuration file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// File I/O error
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type using gotest-summary Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Aggregation succeeded
    Success = 0,
    /// The event stream was malformed or unreadable
    InputError = 1,
    /// Configuration or argument error
    ConfigError = 2,
    /// Internal error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::MalformedEvent { .. } | Error::StreamRead { .. } => ExitCode::InputError,
            Error::Config { .. } => ExitCode::ConfigError,
            Error::Io { .. } => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

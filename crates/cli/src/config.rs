// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles gotest-summary.toml parsing with version validation and unknown key
//! warnings.

use std::collections::BTreeSet;
use std::path::Path;

use serde::Deserialize;

use crate::aggregate::AggregateOptions;
use crate::error::{Error, Result};

/// Config file name looked up during discovery.
pub const CONFIG_FILE_NAME: &str = "gotest-summary.toml";

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: i64,

    #[serde(default)]
    output: Option<toml::Value>,

    #[serde(flatten)]
    unknown: std::collections::BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Default)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Captured output handling.
    pub output: OutputConfig,
}

/// Captured output configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Maximum output lines kept per test (default: unlimited).
    pub max_lines_per_test: Option<usize>,
}

impl Config {
    /// Aggregation options derived from this config.
    pub fn aggregate_options(&self) -> AggregateOptions {
        AggregateOptions {
            max_output_lines: self.output.max_lines_per_test,
        }
    }
}

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "output"];

/// Known output keys in the config.
const KNOWN_OUTPUT_KEYS: &[&str] = &["max_lines_per_test"];

/// Load config with warnings for unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_with_warnings(&content, path)
}

fn config_error(path: &Path, message: impl Into<String>) -> Error {
    Error::Config {
        message: message.into(),
        path: Some(path.to_path_buf()),
    }
}

fn check_version(version: i64, path: &Path) -> Result<()> {
    if version != SUPPORTED_VERSION {
        return Err(config_error(
            path,
            format!(
                "unsupported config version {} (supported: {})\n  Upgrade gotest-summary to use this config.",
                version, SUPPORTED_VERSION
            ),
        ));
    }
    Ok(())
}

/// Parse config, warning on unknown keys.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config> {
    let flexible: FlexibleConfig =
        toml::from_str(content).map_err(|e| config_error(path, e.to_string()))?;
    check_version(flexible.version, path)?;

    let mut unknown_keys = BTreeSet::new();
    for key in flexible.unknown.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            unknown_keys.insert(key.clone());
        }
    }

    let output = match flexible.output {
        Some(toml::Value::Table(t)) => {
            for key in t.keys() {
                if !KNOWN_OUTPUT_KEYS.contains(&key.as_str()) {
                    unknown_keys.insert(format!("output.{}", key));
                }
            }

            let max_lines_per_test = match t.get("max_lines_per_test") {
                None => None,
                Some(toml::Value::Integer(n)) => Some(usize::try_from(*n).map_err(|_| {
                    config_error(
                        path,
                        format!("output.max_lines_per_test must be non-negative, got {}", n),
                    )
                })?),
                Some(other) => {
                    return Err(config_error(
                        path,
                        format!(
                            "output.max_lines_per_test must be an integer, got {}",
                            other.type_str()
                        ),
                    ));
                }
            };

            OutputConfig { max_lines_per_test }
        }
        Some(other) => {
            return Err(config_error(
                path,
                format!("output must be a table, got {}", other.type_str()),
            ));
        }
        None => OutputConfig::default(),
    };

    for key in &unknown_keys {
        warn_unknown_key(path, key);
    }

    Ok(Config {
        version: flexible.version,
        output,
    })
}

fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "gotest-summary: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

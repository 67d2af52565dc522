// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config source resolution.
//!
//! An explicit path wins; otherwise gotest-summary.toml is looked up from the
//! working directory up to the git root; otherwise defaults apply.

use std::path::{Path, PathBuf};

use crate::config::{self, CONFIG_FILE_NAME, Config};
use crate::error::{Error, Result};

/// Where the active configuration comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given with `-C`/`--config` or `GOTEST_SUMMARY_CONFIG`.
    Explicit(PathBuf),
    /// Found by walking up from the working directory.
    Discovered(PathBuf),
    /// No config file.
    Defaults,
}

impl ConfigSource {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::Explicit(path) | ConfigSource::Discovered(path) => Some(path),
            ConfigSource::Defaults => None,
        }
    }

    /// Load the configuration this source refers to.
    pub fn load(&self) -> Result<Config> {
        match self.path() {
            Some(path) => {
                tracing::debug!("loading config from {}", path.display());
                config::load_with_warnings(path)
            }
            None => {
                tracing::debug!("no config found, using defaults");
                Ok(Config::default())
            }
        }
    }
}

/// Find the config file starting from `start_dir` and walking up to git root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    start_dir
        .ancestors()
        .find_map(|dir| {
            let candidate = dir.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                Some(Some(candidate))
            } else if dir.join(".git").exists() {
                // Stop at git root
                Some(None)
            } else {
                None
            }
        })
        .flatten()
}

/// Resolve the config source from an explicit path or by discovery.
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<ConfigSource> {
    match explicit {
        Some(path) if path.exists() => Ok(ConfigSource::Explicit(path.to_path_buf())),
        Some(path) => Err(Error::Config {
            message: format!("config file not found: {}", path.display()),
            path: Some(path.to_path_buf()),
        }),
        None => Ok(find_config(cwd).map_or(ConfigSource::Defaults, ConfigSource::Discovered)),
    }
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;

//! `pkgstub.json` run configuration.

use crate::scheduler::RunConfig;
use pkgstub_emitter::ExportOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "pkgstub.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid record base `{0}`: expected a constant path like `A::B::C`")]
    InvalidRecordBase(String),

    #[error("worker count must be at least 1")]
    ZeroWorkers,
}

/// Every key is optional; command-line arguments override what is set here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    #[serde(default)]
    pub workers: Option<usize>,
    #[serde(default)]
    pub record_base: Option<String>,
    #[serde(default)]
    pub header: Option<String>,
}

impl FileConfig {
    pub fn parse(path: &Path, text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &text)
    }

    /// Load `path` if given, else `pkgstub.json` in `dir` when it exists.
    pub fn discover(path: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }
        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Overlay `overrides` on this file's settings and validate the result.
    pub fn resolve(self, overrides: FileConfig) -> Result<RunConfig, ConfigError> {
        let workers = overrides.workers.or(self.workers);
        if workers == Some(0) {
            return Err(ConfigError::ZeroWorkers);
        }

        let mut export = ExportOptions::default();
        if let Some(path) = overrides.record_base.or(self.record_base) {
            if !is_constant_path(&path) {
                return Err(ConfigError::InvalidRecordBase(path));
            }
            export = export.with_record_base(&path);
        }
        if let Some(header) = overrides.header.or(self.header) {
            export = export.with_header(header);
        }

        Ok(RunConfig {
            output_dir: overrides
                .output_dir
                .or(self.output_dir)
                .unwrap_or_else(|| PathBuf::from(".")),
            workers,
            export,
        })
    }
}

fn is_constant_path(path: &str) -> bool {
    !path.is_empty()
        && path.split("::").all(|segment| {
            segment
                .chars()
                .next()
                .is_some_and(|first| first.is_ascii_uppercase())
                && segment
                    .chars()
                    .all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
        })
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod config_tests;

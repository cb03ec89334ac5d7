//! JSON snapshots of a finalized symbol table and package registry.
//!
//! A snapshot lets the stub generator run without the front end in-process:
//! the front end serializes its frozen state once and the generator reloads
//! it. Loading validates the table so later phases can index records
//! directly.

use crate::packages::PackageRegistry;
use crate::table::SymbolTable;
use crate::validate::TableError;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse snapshot")]
    Parse(#[from] serde_json::Error),

    #[error("invalid symbol table")]
    Table(#[from] TableError),

    #[error("package `{package}` has output name `{mangled_name}`, which is not a plain file name")]
    InvalidOutputName {
        package: String,
        mangled_name: String,
    },

    #[error("packages `{first}` and `{second}` share the output name `{mangled_name}`")]
    DuplicateOutputName {
        mangled_name: String,
        first: String,
        second: String,
    },
}

/// Frozen input of one generator run.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub table: SymbolTable,
    #[serde(default)]
    pub packages: PackageRegistry,
}

impl Snapshot {
    pub fn new(table: SymbolTable, packages: PackageRegistry) -> Self {
        Self { table, packages }
    }

    /// Parse and validate a snapshot from JSON text.
    pub fn parse(text: &str) -> Result<Self, SnapshotError> {
        let snapshot: Snapshot = serde_json::from_str(text)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Parse and validate a snapshot from a reader.
    pub fn from_reader(reader: impl Read) -> Result<Self, SnapshotError> {
        let snapshot: Snapshot = serde_json::from_reader(reader)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Load and validate a snapshot file.
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let text = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let snapshot = Self::parse(&text)?;
        debug!(
            path = %path.display(),
            classes = snapshot.table.class_count(),
            methods = snapshot.table.method_count(),
            packages = snapshot.packages.len(),
            "loaded snapshot"
        );
        Ok(snapshot)
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Table structure plus uniqueness of every package's output name.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        self.table.validate()?;

        let mut seen: FxHashSet<&str> = FxHashSet::default();
        for (_, package) in self.packages.iter() {
            if !is_plain_file_name(&package.mangled_name) {
                return Err(SnapshotError::InvalidOutputName {
                    package: package.full_name(),
                    mangled_name: package.mangled_name.clone(),
                });
            }
            if !seen.insert(package.mangled_name.as_str()) {
                let first = self
                    .packages
                    .iter()
                    .find(|(_, other)| other.mangled_name == package.mangled_name)
                    .map(|(_, other)| other.full_name())
                    .unwrap_or_default();
                return Err(SnapshotError::DuplicateOutputName {
                    mangled_name: package.mangled_name.clone(),
                    first,
                    second: package.full_name(),
                });
            }
        }
        Ok(())
    }
}

/// Output names become file names under the output directory.
fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(['/', '\\', '\0']) && !name.contains("..")
}

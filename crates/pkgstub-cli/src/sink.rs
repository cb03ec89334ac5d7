//! Destinations for rendered artifacts.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to write {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize the dependency manifest of `{package}`")]
    Manifest {
        package: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("artifact {name} was written twice")]
    Duplicate { name: String },
}

/// Receives `(file name, contents)` pairs from concurrent workers.
pub trait ArtifactSink: Sync {
    fn write(&self, name: &str, contents: &str) -> Result<(), SinkError>;
}

/// Writes artifacts as files under one directory.
#[derive(Debug)]
pub struct FsSink {
    root: PathBuf,
}

impl FsSink {
    /// Create `root` (and parents) if missing.
    pub fn create(root: impl Into<PathBuf>) -> Result<Self, SinkError> {
        let root = root.into();
        std::fs::create_dir_all(&root).map_err(|source| SinkError::Io {
            path: root.clone(),
            source,
        })?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ArtifactSink for FsSink {
    fn write(&self, name: &str, contents: &str) -> Result<(), SinkError> {
        let path = self.root.join(name);
        std::fs::write(&path, contents).map_err(|source| SinkError::Io { path, source })
    }
}

/// Keeps artifacts in memory. Rejects a second write to the same name.
#[derive(Debug, Default)]
pub struct MemorySink {
    files: DashMap<String, String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<String> {
        self.files.get(name).map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// All artifact names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.files.iter().map(|entry| entry.key().clone()).collect();
        names.sort_unstable();
        names
    }
}

impl ArtifactSink for MemorySink {
    fn write(&self, name: &str, contents: &str) -> Result<(), SinkError> {
        match self.files.entry(name.to_string()) {
            Entry::Occupied(_) => Err(SinkError::Duplicate {
                name: name.to_string(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(contents.to_string());
                Ok(())
            }
        }
    }
}

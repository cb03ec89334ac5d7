//! Interface stub emission for one package at a time.
//!
//! Given a frozen [`pkgstub_symbols::SymbolTable`] and one package of the
//! registry, the [`StubExporter`] walks the reference closure of the
//! package's exports, renders every in-package symbol it reaches and records
//! the foreign packages and declaration files it stopped at.
//!
//! - `classifier`: package ownership of a symbol
//! - `exporter`: the worklist-driven closure engine
//! - `render`: pure line formatting (`sig`, `def`, props, delegators)
//! - `output`: indentation-aware text buffer
//! - `bundle`: per-package artifacts and dependency manifests

pub mod bundle;
pub mod classifier;
pub mod exporter;
pub mod options;
pub mod output;
pub mod render;

pub use bundle::{ArtifactKind, DependencyManifest, OutputBundle, StubArtifact};
pub use classifier::{Classifier, NamespaceError, Ownership, PackageNamespaces};
pub use exporter::{StubExporter, export_package};
pub use options::ExportOptions;
pub use output::StubWriter;

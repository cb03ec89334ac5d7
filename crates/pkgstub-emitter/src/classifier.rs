//! Package ownership of symbols.
//!
//! Every package owns a namespace (`Project::Foo`) and a companion test
//! namespace (`Test::Project::Foo`). A symbol belongs to whichever of those
//! namespaces its owner chain reaches first; symbols that reach the root
//! without crossing any package namespace are owned by nobody (core library,
//! gems, hand-written declaration files).

use pkgstub_symbols::{ClassId, FileId, PackageInfo, PackageRegistry, SymbolRef, SymbolTable};
use rustc_hash::FxHashSet;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NamespaceError {
    #[error("no packages found")]
    NoPackages,
}

/// Namespaces of every package, regular and test. Built once per run and
/// shared read-only between workers.
#[derive(Clone, Debug, Default)]
pub struct PackageNamespaces {
    roots: FxHashSet<ClassId>,
}

impl PackageNamespaces {
    pub fn build(
        table: &SymbolTable,
        packages: &PackageRegistry,
    ) -> Result<Self, NamespaceError> {
        if packages.is_empty() {
            return Err(NamespaceError::NoPackages);
        }

        let mut roots = FxHashSet::default();
        for (_, package) in packages.iter() {
            // A package without files has no namespace in the table.
            if let Some(root) = table.lookup_class_path(&package.name) {
                roots.insert(root);
            }
            if let Some(test_root) = table.lookup_class_path(&package.test_name_path()) {
                roots.insert(test_root);
            }
        }
        debug!(
            packages = packages.len(),
            namespaces = roots.len(),
            "built package namespaces"
        );
        Ok(Self { roots })
    }

    pub fn contains(&self, class: ClassId) -> bool {
        self.roots.contains(&class)
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

/// Where a symbol lives, relative to the package being exported.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Ownership {
    /// Under the package's namespace or its test namespace.
    Local,
    /// Under another package's namespace.
    ForeignPackage { namespace: ClassId },
    /// Under no package. `declaration_file` is set when the symbol was
    /// declared in a hand-written declaration file.
    Unowned { declaration_file: Option<FileId> },
}

/// Classifies symbols for one package.
pub struct Classifier<'a> {
    table: &'a SymbolTable,
    namespaces: &'a PackageNamespaces,
    package_root: Option<ClassId>,
    test_root: Option<ClassId>,
}

impl<'a> Classifier<'a> {
    pub fn new(
        table: &'a SymbolTable,
        namespaces: &'a PackageNamespaces,
        package: &PackageInfo,
    ) -> Self {
        Classifier {
            table,
            namespaces,
            package_root: table.lookup_class_path(&package.name),
            test_root: table.lookup_class_path(&package.test_name_path()),
        }
    }

    pub fn package_root(&self) -> Option<ClassId> {
        self.package_root
    }

    pub fn namespaces(&self) -> &'a PackageNamespaces {
        self.namespaces
    }

    fn is_global_root(sym: SymbolRef) -> bool {
        sym == SymbolRef::ClassOrModule(ClassId::ROOT)
            || sym == SymbolRef::ClassOrModule(ClassId::PACKAGE_REGISTRY)
    }

    fn is_own_root(&self, class: ClassId) -> bool {
        Some(class) == self.package_root || Some(class) == self.test_root
    }

    /// Walk the owner chain of `sym` until it reaches a namespace.
    pub fn classify(&self, sym: SymbolRef) -> Ownership {
        let mut current = sym;
        loop {
            if Self::is_global_root(current) {
                return Ownership::Unowned {
                    declaration_file: self.declaration_file(sym),
                };
            }
            if let SymbolRef::ClassOrModule(class) = current {
                if self.is_own_root(class) {
                    return Ownership::Local;
                }
                if self.namespaces.contains(class) {
                    return Ownership::ForeignPackage { namespace: class };
                }
            }
            current = self.table.owner(current);
        }
    }

    /// True if `sym` lives under the package's test namespace.
    pub fn is_test_symbol(&self, sym: SymbolRef) -> bool {
        let mut current = sym;
        loop {
            if Self::is_global_root(current) {
                return false;
            }
            if let SymbolRef::ClassOrModule(class) = current {
                if Some(class) == self.package_root {
                    return false;
                }
                if Some(class) == self.test_root {
                    return true;
                }
                if self.namespaces.contains(class) {
                    return false;
                }
            }
            current = self.table.owner(current);
        }
    }

    /// File declaring `sym` if it is a hand-written declaration file.
    fn declaration_file(&self, sym: SymbolRef) -> Option<FileId> {
        let loc = self.table.loc(sym)?;
        let file = self.table.file(loc.file);
        (file.is_declaration() && !file.is_payload()).then_some(loc.file)
    }
}

#[cfg(test)]
#[path = "tests/classifier_tests.rs"]
mod classifier_tests;

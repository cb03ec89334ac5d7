//! Package registry.
//!
//! Packages are produced by the external package-boundary pass. Each one
//! names its namespace, the constants it exports, the constants it exports
//! only to its test variant, and a mangled name used as the output base path.

use pkgstub_common::names;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageId(pub u32);

/// One package as declared by its package spec.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageInfo {
    /// Namespace path, e.g. `["Project", "Foo"]`.
    pub name: Vec<String>,
    #[serde(default)]
    pub exports: Vec<Vec<String>>,
    #[serde(default)]
    pub test_exports: Vec<Vec<String>>,
    /// Unique, filesystem-safe identifier.
    pub mangled_name: String,
}

impl PackageInfo {
    /// A package with no exports; the mangled name is derived from the path.
    pub fn new<S: AsRef<str>>(name: &[S]) -> Self {
        let name: Vec<String> = name.iter().map(|part| part.as_ref().to_string()).collect();
        let mangled_name = format!("{}_Package", name.join("_"));
        Self {
            name,
            exports: Vec::new(),
            test_exports: Vec::new(),
            mangled_name,
        }
    }

    pub fn with_export<S: AsRef<str>>(mut self, path: &[S]) -> Self {
        self.exports.push(to_path(path));
        self
    }

    pub fn with_test_export<S: AsRef<str>>(mut self, path: &[S]) -> Self {
        self.test_exports.push(to_path(path));
        self
    }

    /// `Project::Foo`
    pub fn full_name(&self) -> String {
        self.name.join("::")
    }

    /// Namespace path of the package's test code: `Test::<name>`.
    pub fn test_name_path(&self) -> Vec<String> {
        let mut path = Vec::with_capacity(self.name.len() + 1);
        path.push(names::TEST_NAMESPACE.to_string());
        path.extend(self.name.iter().cloned());
        path
    }
}

fn to_path<S: AsRef<str>>(path: &[S]) -> Vec<String> {
    path.iter().map(|part| part.as_ref().to_string()).collect()
}

/// All packages of the program, addressed by `PackageId`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageRegistry {
    packages: Vec<PackageInfo>,
}

impl PackageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, package: PackageInfo) -> PackageId {
        let id = PackageId(self.packages.len() as u32);
        self.packages.push(package);
        id
    }

    pub fn get(&self, id: PackageId) -> Option<&PackageInfo> {
        self.packages.get(id.0 as usize)
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = PackageId> + '_ {
        (0..self.packages.len() as u32).map(PackageId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (PackageId, &PackageInfo)> {
        self.packages
            .iter()
            .enumerate()
            .map(|(idx, package)| (PackageId(idx as u32), package))
    }

    /// Find a package by its `::`-joined name.
    pub fn find_by_name(&self, full_name: &str) -> Option<PackageId> {
        self.iter()
            .find(|(_, package)| package.full_name() == full_name)
            .map(|(id, _)| id)
    }
}

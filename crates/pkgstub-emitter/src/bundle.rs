//! Per-package emission results.

use serde::{Deserialize, Serialize};

/// Foreign packages and declaration files a stub depends on.
///
/// Both lists are deduplicated and sorted so identical input produces
/// byte-identical manifests.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyManifest {
    pub package_refs: Vec<String>,
    pub rbi_refs: Vec<String>,
}

impl DependencyManifest {
    pub fn new(mut package_refs: Vec<String>, mut rbi_refs: Vec<String>) -> Self {
        package_refs.sort_unstable();
        package_refs.dedup();
        rbi_refs.sort_unstable();
        rbi_refs.dedup();
        Self {
            package_refs,
            rbi_refs,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// One stub file plus its manifest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StubArtifact {
    /// Full file contents, header included.
    pub text: String,
    pub manifest: DependencyManifest,
}

/// The files a package can produce.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Export,
    Deps,
    TestExport,
    TestDeps,
}

impl ArtifactKind {
    pub const fn extension(self) -> &'static str {
        match self {
            ArtifactKind::Export => "export",
            ArtifactKind::Deps => "deps.json",
            ArtifactKind::TestExport => "test-export",
            ArtifactKind::TestDeps => "test-deps.json",
        }
    }

    /// `<base>.<extension>`
    pub fn file_name(self, base: &str) -> String {
        format!("{base}.{}", self.extension())
    }
}

/// Everything emitted for one package.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OutputBundle {
    /// Output base name, the package's mangled name.
    pub base_file_path: String,
    pub export: Option<StubArtifact>,
    pub test_export: Option<StubArtifact>,
}

impl OutputBundle {
    pub fn new(base_file_path: impl Into<String>) -> Self {
        Self {
            base_file_path: base_file_path.into(),
            export: None,
            test_export: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.export.is_none() && self.test_export.is_none()
    }

    /// `(file name, contents)` for every artifact the package produced.
    pub fn files(&self) -> serde_json::Result<Vec<(String, String)>> {
        let mut files = Vec::with_capacity(4);
        let pairs = [
            (&self.export, ArtifactKind::Export, ArtifactKind::Deps),
            (
                &self.test_export,
                ArtifactKind::TestExport,
                ArtifactKind::TestDeps,
            ),
        ];
        for (artifact, text_kind, manifest_kind) in pairs {
            if let Some(artifact) = artifact {
                files.push((
                    text_kind.file_name(&self.base_file_path),
                    artifact.text.clone(),
                ));
                files.push((
                    manifest_kind.file_name(&self.base_file_path),
                    artifact.manifest.to_json()?,
                ));
            }
        }
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_json_is_sorted_and_deduplicated() {
        let manifest = DependencyManifest::new(
            vec!["Zed".to_string(), "Alpha".to_string(), "Zed".to_string()],
            vec!["rbi/b.rbi".to_string(), "rbi/a.rbi".to_string()],
        );
        assert_eq!(
            manifest.to_json().unwrap(),
            r#"{"packageRefs":["Alpha","Zed"],"rbiRefs":["rbi/a.rbi","rbi/b.rbi"]}"#
        );
    }

    #[test]
    fn test_empty_manifest_json() {
        assert_eq!(
            DependencyManifest::default().to_json().unwrap(),
            r#"{"packageRefs":[],"rbiRefs":[]}"#
        );
    }

    #[test]
    fn test_bundle_files_only_for_produced_artifacts() {
        let mut bundle = OutputBundle::new("Foo_Package");
        assert!(bundle.is_empty());
        assert!(bundle.files().unwrap().is_empty());

        bundle.test_export = Some(StubArtifact {
            text: "# typed: true\n\n".to_string(),
            manifest: DependencyManifest::default(),
        });
        let names: Vec<String> = bundle
            .files()
            .unwrap()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(
            names,
            vec!["Foo_Package.test-export", "Foo_Package.test-deps.json"]
        );
    }
}

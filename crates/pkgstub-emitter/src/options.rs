//! Options that shape the rendered stubs.

use pkgstub_common::{limits, names};

/// Per-run knobs consumed by the [`crate::StubExporter`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    /// First line of every stub file.
    pub header: String,
    /// Constant path of the flat-file record base class.
    pub record_base: Vec<String>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        ExportOptions {
            header: limits::DEFAULT_HEADER.to_string(),
            record_base: names::RECORD_BASE_PATH
                .iter()
                .map(|part| part.to_string())
                .collect(),
        }
    }
}

impl ExportOptions {
    /// Parse a `A::B::C` record base path.
    pub fn with_record_base(mut self, path: &str) -> Self {
        self.record_base = path
            .split("::")
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect();
        self
    }

    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    /// `header`, a blank line, then `body`.
    pub fn frame(&self, body: &str) -> String {
        format!("{}\n\n{}", self.header, body)
    }
}

//! Shared fixtures for emitter integration tests.
#![allow(dead_code)]

use pkgstub_emitter::{ExportOptions, OutputBundle, PackageNamespaces, export_package};
use pkgstub_symbols::{ClassId, FileData, FileId, Loc, PackageRegistry, SymbolTable};

/// Enter the modules along `path`, returning the innermost one.
pub fn module_path(table: &mut SymbolTable, path: &[&str]) -> ClassId {
    let mut scope = ClassId::ROOT;
    for name in path {
        scope = table.enter_module(scope, name);
    }
    scope
}

/// Register a source file.
pub fn source_file(table: &mut SymbolTable, path: &str, text: &str) -> FileId {
    table.enter_file(FileData::new(path, text))
}

/// Location of the first occurrence of `needle` in `file`.
pub fn loc_of(table: &SymbolTable, file: FileId, needle: &str) -> Loc {
    let text = table.file(file).source.as_deref().unwrap_or_default();
    let begin = text
        .find(needle)
        .unwrap_or_else(|| panic!("{needle:?} not found in {}", table.file(file).path));
    Loc::new(file, begin as u32, (begin + needle.len()) as u32)
}

/// Export the package named `name` with default options.
pub fn export(table: &SymbolTable, packages: &PackageRegistry, name: &str) -> OutputBundle {
    export_with(table, packages, name, &ExportOptions::default())
}

pub fn export_with(
    table: &SymbolTable,
    packages: &PackageRegistry,
    name: &str,
    options: &ExportOptions,
) -> OutputBundle {
    let namespaces = PackageNamespaces::build(table, packages).expect("namespaces");
    let id = packages.find_by_name(name).expect("package registered");
    let package = packages.get(id).expect("package");
    export_package(table, package, &namespaces, options)
}

/// Export text without the header.
pub fn body(bundle: &OutputBundle) -> &str {
    let text = &bundle.export.as_ref().expect("export artifact").text;
    text.strip_prefix("# typed: true\n\n")
        .expect("header present")
}

pub fn test_body(bundle: &OutputBundle) -> &str {
    let text = &bundle.test_export.as_ref().expect("test export artifact").text;
    text.strip_prefix("# typed: true\n\n")
        .expect("header present")
}

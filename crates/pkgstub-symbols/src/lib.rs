//! Symbol table and package registry for the pkgstub stub generator.
//!
//! This crate holds the read-only inputs of a generator run:
//! - Typed symbol handles (`ClassId`, `MethodId`, `SymbolRef`, ...)
//! - The append-only `SymbolTable` arena and its queries
//! - Resolved type expressions (`Type`) and their printer
//! - The `PackageRegistry`
//! - JSON snapshots of both, with structural validation

pub mod flags;
pub mod ids;
pub mod packages;
pub mod snapshot;
pub mod table;
pub mod type_printer;
pub mod types;
pub mod validate;

pub use flags::{ArgFlags, ClassFlags, FieldFlags, MethodFlags, Variance};
pub use ids::{ClassId, FieldId, FileId, MethodId, SymbolKind, SymbolRef, TypeArgumentId, TypeMemberId};
pub use packages::{PackageId, PackageInfo, PackageRegistry};
pub use snapshot::{Snapshot, SnapshotError};
pub use table::{
    ArgInfo, ClassData, FieldData, FileData, FileKind, Loc, MethodData, SymbolTable,
    TypeArgumentData, TypeMemberData,
};
pub use type_printer::TypePrinter;
pub use types::{LiteralValue, Type};
pub use validate::TableError;

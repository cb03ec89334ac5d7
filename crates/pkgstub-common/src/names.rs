//! Names synthesized by the front end.
//!
//! Members carrying these names are scaffolding created by rewriter passes and
//! are either skipped or rendered specially by the stub emitter.

/// Name of the constructor method.
pub const INITIALIZE: &str = "initialize";

/// Static initializer synthesized for every class body.
pub const STATIC_INIT: &str = "<static-init>";

/// Synthetic method recording `mixes_in_class_methods` calls.
pub const MIXED_IN_CLASS_METHODS: &str = "<mixed-in-class-methods>";

/// Synthetic method generated for sealed classes.
pub const SEALED_SUBCLASSES: &str = "sealed_subclasses";

/// Member linking a class to its singleton class.
pub const SINGLETON: &str = "<singleton>";

/// Member linking a singleton class back to its attached class.
pub const ATTACHED: &str = "<attached>";

/// Implicit type member every singleton class carries.
pub const ATTACHED_CLASS: &str = "<AttachedClass>";

/// Name of the synthetic block argument every method carries.
pub const BLOCK_ARG: &str = "<blk>";

/// Argument name that forwards all remaining arguments.
pub const FORWARD_ALL: &str = "...";

/// Namespace prefix under which a package's test code lives.
pub const TEST_NAMESPACE: &str = "Test";

/// Default base class of flat-file records.
pub const RECORD_BASE_PATH: &[&str] = &["Opus", "Flatfiles", "Record"];

/// Prefix marking scaffolding symbols (`<static-init>`, test suites, ...).
pub const SYNTHETIC_PREFIX: char = '<';

/// Separator used in unique (mangled) names produced by the front end.
pub const UNIQUE_NAME_SEPARATOR: char = '$';

/// Returns true if `name` is a unique name minted by the front end.
pub fn is_unique_name(name: &str) -> bool {
    name.contains(UNIQUE_NAME_SEPARATOR)
}

/// Returns true if `name` denotes front-end scaffolding.
pub fn is_synthetic_name(name: &str) -> bool {
    name.starts_with(SYNTHETIC_PREFIX)
}

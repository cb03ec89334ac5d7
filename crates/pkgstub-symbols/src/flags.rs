//! Symbol flags.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Flags on a class or module.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct ClassFlags: u8 {
        /// Set for classes, clear for modules.
        const CLASS = 1 << 0;
        const ABSTRACT = 1 << 1;
        const FINAL = 1 << 2;
        const INTERFACE = 1 << 3;
        const SEALED = 1 << 4;
    }
}

bitflags! {
    /// Flags on a method.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct MethodFlags: u8 {
        const PRIVATE = 1 << 0;
        const PROTECTED = 1 << 1;
        const ABSTRACT = 1 << 2;
        const OVERRIDABLE = 1 << 3;
        const OVERRIDE = 1 << 4;
        const FINAL = 1 << 5;
    }
}

bitflags! {
    /// Flags on a method argument.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct ArgFlags: u8 {
        const KEYWORD = 1 << 0;
        /// `*rest` or `**kwrest`
        const REPEATED = 1 << 1;
        /// Has a default value.
        const DEFAULT = 1 << 2;
        const BLOCK = 1 << 3;
    }
}

bitflags! {
    /// Flags on a field.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct FieldFlags: u8 {
        /// Instance variable (`@x`).
        const FIELD = 1 << 0;
        /// Constant or class variable.
        const STATIC_FIELD = 1 << 1;
        /// Constant defined with `T.type_alias`.
        const TYPE_ALIAS = 1 << 2;
    }
}

/// Variance of a generic class parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Variance {
    CoVariant,
    #[default]
    Invariant,
    ContraVariant,
}

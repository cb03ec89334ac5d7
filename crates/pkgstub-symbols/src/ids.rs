//! Typed symbol handles.
//!
//! The symbol table is an append-only arena with one index space per symbol
//! kind. Handles are plain `u32` newtypes: cheap to copy, compare and hash,
//! and the only way components refer to each other's symbols.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl $name {
            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }
        }
    };
}

define_handle!(
    /// Handle to a class or module (including singleton classes).
    ClassId
);
define_handle!(
    /// Handle to a method.
    MethodId
);
define_handle!(
    /// Handle to an instance field, class variable or constant.
    FieldId
);
define_handle!(
    /// Handle to a class-level generic parameter (`type_member`/`type_template`).
    TypeMemberId
);
define_handle!(
    /// Handle to a method-level generic parameter.
    TypeArgumentId
);
define_handle!(
    /// Handle to a source file.
    FileId
);

// =============================================================================
// Well-known classes
// =============================================================================
// `SymbolTable::new` allocates these in exactly this order.

impl ClassId {
    /// The universal root every owner chain ends at.
    pub const ROOT: Self = Self(0);
    /// Root under which package specifications are entered.
    pub const PACKAGE_REGISTRY: Self = Self(1);
    pub const T: Self = Self(2);
    pub const T_ENUM: Self = Self(3);
    pub const T_STRUCT: Self = Self(4);
    pub const NIL_CLASS: Self = Self(5);
    pub const SORBET: Self = Self(6);
    pub const SORBET_PRIVATE: Self = Self(7);
    pub const SORBET_PRIVATE_STATIC: Self = Self(8);
    /// Result class of methods declared `.void`.
    pub const VOID: Self = Self(9);
    /// Superclass recorded for modules; never rendered.
    pub const IMPLICIT_MODULE_SUPERCLASS: Self = Self(10);

    /// Number of well-known classes.
    pub const WELL_KNOWN_COUNT: u32 = 11;
}

// =============================================================================
// SymbolRef
// =============================================================================

/// Kind of a symbol handle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    ClassOrModule,
    Method,
    FieldOrStaticField,
    TypeMember,
    TypeArgument,
}

/// Kind-tagged handle to any symbol in the table.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "camelCase")]
pub enum SymbolRef {
    ClassOrModule(ClassId),
    Method(MethodId),
    FieldOrStaticField(FieldId),
    TypeMember(TypeMemberId),
    TypeArgument(TypeArgumentId),
}

impl SymbolRef {
    pub const fn kind(self) -> SymbolKind {
        match self {
            Self::ClassOrModule(_) => SymbolKind::ClassOrModule,
            Self::Method(_) => SymbolKind::Method,
            Self::FieldOrStaticField(_) => SymbolKind::FieldOrStaticField,
            Self::TypeMember(_) => SymbolKind::TypeMember,
            Self::TypeArgument(_) => SymbolKind::TypeArgument,
        }
    }

    pub const fn as_class(self) -> Option<ClassId> {
        match self {
            Self::ClassOrModule(id) => Some(id),
            _ => None,
        }
    }

    pub const fn as_method(self) -> Option<MethodId> {
        match self {
            Self::Method(id) => Some(id),
            _ => None,
        }
    }

    pub const fn as_field(self) -> Option<FieldId> {
        match self {
            Self::FieldOrStaticField(id) => Some(id),
            _ => None,
        }
    }

    pub const fn as_type_member(self) -> Option<TypeMemberId> {
        match self {
            Self::TypeMember(id) => Some(id),
            _ => None,
        }
    }
}

impl From<ClassId> for SymbolRef {
    fn from(id: ClassId) -> Self {
        Self::ClassOrModule(id)
    }
}

impl From<MethodId> for SymbolRef {
    fn from(id: MethodId) -> Self {
        Self::Method(id)
    }
}

impl From<FieldId> for SymbolRef {
    fn from(id: FieldId) -> Self {
        Self::FieldOrStaticField(id)
    }
}

impl From<TypeMemberId> for SymbolRef {
    fn from(id: TypeMemberId) -> Self {
        Self::TypeMember(id)
    }
}

impl From<TypeArgumentId> for SymbolRef {
    fn from(id: TypeArgumentId) -> Self {
        Self::TypeArgument(id)
    }
}

impl fmt::Display for SymbolRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClassOrModule(id) => write!(f, "class#{}", id.0),
            Self::Method(id) => write!(f, "method#{}", id.0),
            Self::FieldOrStaticField(id) => write!(f, "field#{}", id.0),
            Self::TypeMember(id) => write!(f, "type_member#{}", id.0),
            Self::TypeArgument(id) => write!(f, "type_argument#{}", id.0),
        }
    }
}

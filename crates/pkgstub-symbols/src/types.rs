//! Type expressions as resolved by the front end.
//!
//! A `Type` is an immutable recursive value. It references symbols only
//! through handles, so cloning a type never copies table contents.

use crate::ids::{ClassId, SymbolRef, TypeMemberId};
use serde::{Deserialize, Serialize};

/// A resolved type expression.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Type {
    /// Reference to a constant or type member by symbol.
    Alias(SymbolRef),
    /// `T.all(l, r)`
    And(Box<Type>, Box<Type>),
    /// A generic class applied to type arguments.
    Applied(ClassId, Vec<Type>),
    /// `T.untyped`
    Untyped,
    Class(ClassId),
    Literal(LiteralValue),
    /// The runtime object representing a type.
    Meta(Box<Type>),
    /// `T.any(l, r)`
    Or(Box<Type>, Box<Type>),
    /// `T.self_type`
    SelfType,
    /// A class type parameter referenced from inside its class.
    SelfTypeParam(SymbolRef),
    /// Fixed-key hash type. `keys` and `values` are parallel.
    Shape { keys: Vec<Type>, values: Vec<Type> },
    Tuple(Vec<Type>),
    /// A method-level type variable (`T.type_parameter(:U)`).
    TypeVar(String),
    /// A generic application whose target did not resolve cleanly.
    UnresolvedApplied {
        class: ClassId,
        symbol: SymbolRef,
        targs: Vec<Type>,
    },
    /// A constant path that did not resolve.
    UnresolvedClass { scope: ClassId, names: Vec<String> },
    /// Bounds of a class type parameter.
    LambdaParam {
        definition: TypeMemberId,
        lower: Box<Type>,
        upper: Box<Type>,
    },
}

/// Value of a literal type.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LiteralValue {
    Integer(i64),
    /// Kept as source text so the type stays `Eq`.
    Float(String),
    String(String),
    Symbol(String),
    True,
    False,
}

impl Type {
    pub fn class(id: ClassId) -> Self {
        Self::Class(id)
    }

    /// The result type of methods declared `.void`.
    pub fn void() -> Self {
        Self::Class(ClassId::VOID)
    }

    pub fn is_void(&self) -> bool {
        matches!(self, Self::Class(id) if *id == ClassId::VOID)
    }

    pub fn nil() -> Self {
        Self::Class(ClassId::NIL_CLASS)
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Self::Class(id) if *id == ClassId::NIL_CLASS)
    }

    /// `T.nilable(inner)`
    pub fn nilable(inner: Type) -> Self {
        Self::Or(Box::new(inner), Box::new(Self::nil()))
    }

    pub fn any(left: Type, right: Type) -> Self {
        Self::Or(Box::new(left), Box::new(right))
    }

    pub fn all(left: Type, right: Type) -> Self {
        Self::And(Box::new(left), Box::new(right))
    }

    pub fn applied(class: ClassId, targs: Vec<Type>) -> Self {
        Self::Applied(class, targs)
    }

    pub fn alias(symbol: impl Into<SymbolRef>) -> Self {
        Self::Alias(symbol.into())
    }

    pub fn meta(wrapped: Type) -> Self {
        Self::Meta(Box::new(wrapped))
    }

    pub fn lambda_param(definition: TypeMemberId, lower: Type, upper: Type) -> Self {
        Self::LambdaParam {
            definition,
            lower: Box::new(lower),
            upper: Box::new(upper),
        }
    }

    /// Shape from `(key, value)` pairs.
    pub fn shape(entries: impl IntoIterator<Item = (Type, Type)>) -> Self {
        let (keys, values) = entries.into_iter().unzip();
        Self::Shape { keys, values }
    }

    pub fn symbol_literal(name: &str) -> Self {
        Self::Literal(LiteralValue::Symbol(name.to_string()))
    }
}

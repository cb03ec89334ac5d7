//! Structural validation of a symbol table.
//!
//! Tables built in-process through the `enter_*` API are consistent by
//! construction. Tables deserialized from a snapshot are not: every handle is
//! checked before the table is handed to the emitter, which indexes records
//! directly.

use crate::ids::{ClassId, FileId, SymbolRef};
use crate::table::{Loc, SymbolTable, WELL_KNOWN};
use crate::types::Type;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("symbol table is missing well-known class `{expected}` at index {index}")]
    MissingWellKnown { index: u32, expected: &'static str },

    #[error("well-known class at index {index} should be `{expected}`, found `{found}`")]
    WellKnownMismatch {
        index: u32,
        expected: &'static str,
        found: String,
    },

    #[error("{context} references missing {handle}")]
    DanglingHandle { context: String, handle: String },

    #[error("owner chain of class `{name}` does not reach the root")]
    OwnerCycle { name: String },

    #[error("singleton link of class `{name}` is not mirrored by its counterpart")]
    SingletonMismatch { name: String },
}

struct Checker<'a> {
    table: &'a SymbolTable,
}

impl Checker<'_> {
    fn dangling(context: &str, handle: String) -> TableError {
        TableError::DanglingHandle {
            context: context.to_string(),
            handle,
        }
    }

    fn class(&self, id: ClassId, context: &str) -> Result<(), TableError> {
        if id.index() < self.table.classes.len() {
            Ok(())
        } else {
            Err(Self::dangling(context, SymbolRef::from(id).to_string()))
        }
    }

    fn symbol(&self, sym: SymbolRef, context: &str) -> Result<(), TableError> {
        let in_range = match sym {
            SymbolRef::ClassOrModule(id) => id.index() < self.table.classes.len(),
            SymbolRef::Method(id) => id.index() < self.table.methods.len(),
            SymbolRef::FieldOrStaticField(id) => id.index() < self.table.fields.len(),
            SymbolRef::TypeMember(id) => id.index() < self.table.type_members.len(),
            SymbolRef::TypeArgument(id) => id.index() < self.table.type_arguments.len(),
        };
        if in_range {
            Ok(())
        } else {
            Err(Self::dangling(context, sym.to_string()))
        }
    }

    fn file(&self, id: FileId, context: &str) -> Result<(), TableError> {
        if id.index() < self.table.files.len() {
            Ok(())
        } else {
            Err(Self::dangling(context, format!("file#{}", id.0)))
        }
    }

    fn loc(&self, loc: Option<Loc>, context: &str) -> Result<(), TableError> {
        match loc {
            Some(loc) => self.file(loc.file, context),
            None => Ok(()),
        }
    }

    fn ty(&self, ty: &Type, context: &str) -> Result<(), TableError> {
        match ty {
            Type::Alias(sym) | Type::SelfTypeParam(sym) => self.symbol(*sym, context),
            Type::And(left, right) | Type::Or(left, right) => {
                self.ty(left, context)?;
                self.ty(right, context)
            }
            Type::Applied(class, targs) => {
                self.class(*class, context)?;
                self.types(targs, context)
            }
            Type::Class(class) => self.class(*class, context),
            Type::UnresolvedClass { scope, .. } => self.class(*scope, context),
            Type::Meta(wrapped) => self.ty(wrapped, context),
            Type::Shape { keys, values } => {
                self.types(keys, context)?;
                self.types(values, context)
            }
            Type::Tuple(elems) => self.types(elems, context),
            Type::UnresolvedApplied {
                class,
                symbol,
                targs,
            } => {
                self.class(*class, context)?;
                self.symbol(*symbol, context)?;
                self.types(targs, context)
            }
            Type::LambdaParam {
                definition,
                lower,
                upper,
            } => {
                self.symbol((*definition).into(), context)?;
                self.ty(lower, context)?;
                self.ty(upper, context)
            }
            Type::Untyped
            | Type::Literal(_)
            | Type::SelfType
            | Type::TypeVar(_) => Ok(()),
        }
    }

    fn types(&self, types: &[Type], context: &str) -> Result<(), TableError> {
        types.iter().try_for_each(|ty| self.ty(ty, context))
    }

    fn opt_ty(&self, ty: &Option<Type>, context: &str) -> Result<(), TableError> {
        match ty {
            Some(ty) => self.ty(ty, context),
            None => Ok(()),
        }
    }
}

impl SymbolTable {
    /// Check the well-known prefix and that every handle is in range.
    pub fn validate(&self) -> Result<(), TableError> {
        for (idx, &(_, expected, _)) in WELL_KNOWN.iter().enumerate() {
            let index = idx as u32;
            let Some(data) = self.classes.get(idx) else {
                return Err(TableError::MissingWellKnown {
                    index,
                    expected,
                });
            };
            if data.name != expected {
                return Err(TableError::WellKnownMismatch {
                    index,
                    expected,
                    found: data.name.clone(),
                });
            }
        }

        let check = Checker { table: self };

        for data in &self.classes {
            let context = format!("class `{}`", data.name);
            check.class(data.owner, &context)?;
            check.loc(data.loc, &context)?;
            for class in data
                .super_class
                .iter()
                .chain(&data.mixins)
                .chain(&data.singleton_class)
                .chain(&data.attached_class)
            {
                check.class(*class, &context)?;
            }
            for member in &data.type_members {
                check.symbol((*member).into(), &context)?;
            }
            for member in data.members.values() {
                check.symbol(*member, &context)?;
            }
        }

        // A singleton is attached to a non-singleton class that points back,
        // so following `attached_class` takes at most one step.
        for (idx, data) in self.classes.iter().enumerate() {
            let id = ClassId(idx as u32);
            let mirrored = match (data.attached_class, data.singleton_class) {
                (Some(_), Some(_)) => false,
                (Some(attached), None) => {
                    let target = &self.classes[attached.index()];
                    target.attached_class.is_none() && target.singleton_class == Some(id)
                }
                (None, Some(singleton)) => {
                    self.classes[singleton.index()].attached_class == Some(id)
                }
                (None, None) => true,
            };
            if !mirrored {
                return Err(TableError::SingletonMismatch {
                    name: data.name.clone(),
                });
            }
        }

        // Owners are in range now, so every walk either reaches the root or
        // revisits a class within `classes.len()` steps.
        for data in &self.classes {
            let mut current = data.owner;
            let mut steps = 0;
            while current != ClassId::ROOT {
                steps += 1;
                if steps > self.classes.len() {
                    return Err(TableError::OwnerCycle {
                        name: data.name.clone(),
                    });
                }
                current = self.classes[current.index()].owner;
            }
        }

        for data in &self.methods {
            let context = format!("method `{}`", data.name);
            check.class(data.owner, &context)?;
            check.loc(data.loc, &context)?;
            check.opt_ty(&data.result_type, &context)?;
            for arg in &data.arguments {
                check.loc(arg.loc, &context)?;
                check.opt_ty(&arg.ty, &context)?;
            }
            for targ in &data.type_arguments {
                check.symbol((*targ).into(), &context)?;
            }
            if let Some(target) = data.alias_of {
                check.symbol(target.into(), &context)?;
            }
        }

        for data in &self.fields {
            let context = format!("field `{}`", data.name);
            check.class(data.owner, &context)?;
            check.loc(data.loc, &context)?;
            check.opt_ty(&data.result_type, &context)?;
        }

        for data in &self.type_members {
            let context = format!("type member `{}`", data.name);
            check.class(data.owner, &context)?;
            check.opt_ty(&data.result_type, &context)?;
        }

        for data in &self.type_arguments {
            let context = format!("type argument `{}`", data.name);
            check.symbol(data.owner.into(), &context)?;
        }

        Ok(())
    }
}

//! Type Printer - Convert `Type` to stub syntax
//!
//! Turns resolved type expressions back into the annotation syntax used in
//! interface stubs (`T.nilable(String)`, `T::Array[Integer]`, ...).

use crate::ids::ClassId;
use crate::table::SymbolTable;
use crate::types::{LiteralValue, Type};

/// Core generic classes whose applied form is spelled through `T::`.
const CORE_GENERICS: &[&str] = &[
    "Array",
    "Hash",
    "Set",
    "Range",
    "Enumerable",
    "Enumerator",
    "Class",
];

/// Prints types as stub annotation syntax.
///
/// # Examples
///
/// ```
/// use pkgstub_symbols::{SymbolTable, Type, TypePrinter};
///
/// let table = SymbolTable::new();
/// let printer = TypePrinter::new(&table);
/// assert_eq!(printer.print_type(&Type::Untyped), "T.untyped");
/// ```
pub struct TypePrinter<'a> {
    table: &'a SymbolTable,
}

impl<'a> TypePrinter<'a> {
    pub fn new(table: &'a SymbolTable) -> Self {
        Self { table }
    }

    pub fn print_type(&self, ty: &Type) -> String {
        match ty {
            Type::Alias(symbol) => self.table.show(*symbol),
            Type::And(..) => {
                let mut parts = Vec::new();
                self.collect_and(ty, &mut parts);
                format!("T.all({})", parts.join(", "))
            }
            Type::Applied(class, targs) => self.print_applied(*class, targs),
            Type::Untyped => "T.untyped".to_string(),
            Type::Class(class) => self.print_class(*class),
            Type::Literal(value) => self.print_literal(value),
            Type::Meta(wrapped) => format!("<Type: {}>", self.print_type(wrapped)),
            Type::Or(..) => self.print_union(ty),
            Type::SelfType => "T.self_type".to_string(),
            Type::SelfTypeParam(definition) => self.table.name(*definition).to_string(),
            Type::Shape { keys, values } => self.print_shape(keys, values),
            Type::Tuple(elems) => format!("[{}]", self.print_list(elems)),
            Type::TypeVar(name) => format!("T.type_parameter(:{name})"),
            Type::UnresolvedApplied { symbol, targs, .. } => {
                let name = self.table.show(*symbol);
                if targs.is_empty() {
                    name
                } else {
                    format!("{}[{}]", name, self.print_list(targs))
                }
            }
            Type::UnresolvedClass { scope, names } => {
                let mut path = Vec::with_capacity(names.len() + 1);
                if *scope != ClassId::ROOT {
                    path.push(self.print_class(*scope));
                }
                path.extend(names.iter().cloned());
                path.join("::")
            }
            Type::LambdaParam { definition, .. } => {
                self.table.type_member(*definition).name.clone()
            }
        }
    }

    fn print_list(&self, types: &[Type]) -> String {
        types
            .iter()
            .map(|ty| self.print_type(ty))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn print_class(&self, class: ClassId) -> String {
        match self.table.attached_class(class) {
            Some(attached) => format!("T.class_of({})", self.table.show(attached.into())),
            None => self.table.show(class.into()),
        }
    }

    fn print_applied(&self, class: ClassId, targs: &[Type]) -> String {
        let data = self.table.class(class);
        let name = if data.owner == ClassId::ROOT && CORE_GENERICS.contains(&data.name.as_str()) {
            format!("T::{}", data.name)
        } else {
            self.print_class(class)
        };
        if targs.is_empty() {
            name
        } else {
            format!("{}[{}]", name, self.print_list(targs))
        }
    }

    fn print_literal(&self, value: &LiteralValue) -> String {
        match value {
            LiteralValue::Integer(value) => format!("Integer({value})"),
            LiteralValue::Float(text) => format!("Float({text})"),
            LiteralValue::String(text) => format!("String({})", quote(text)),
            LiteralValue::Symbol(name) => format!("Symbol(:{name})"),
            LiteralValue::True => "TrueClass".to_string(),
            LiteralValue::False => "FalseClass".to_string(),
        }
    }

    /// `T.nilable(...)` when `NilClass` is one of the members, `T.any(...)` otherwise.
    fn print_union(&self, ty: &Type) -> String {
        let mut members = Vec::new();
        collect_or(ty, &mut members);

        let has_nil = members.iter().any(|member| member.is_nil());
        let rest: Vec<String> = members
            .iter()
            .filter(|member| !member.is_nil())
            .map(|member| self.print_type(member))
            .collect();

        let inner = match rest.len() {
            0 => return "NilClass".to_string(),
            1 => rest.into_iter().next().unwrap_or_default(),
            _ => format!("T.any({})", rest.join(", ")),
        };
        if has_nil {
            format!("T.nilable({inner})")
        } else {
            inner
        }
    }

    fn collect_and(&self, ty: &Type, out: &mut Vec<String>) {
        match ty {
            Type::And(left, right) => {
                self.collect_and(left, out);
                self.collect_and(right, out);
            }
            other => out.push(self.print_type(other)),
        }
    }

    fn print_shape(&self, keys: &[Type], values: &[Type]) -> String {
        if keys.is_empty() {
            return "{}".to_string();
        }
        let entries: Vec<String> = keys
            .iter()
            .zip(values)
            .map(|(key, value)| {
                let value = self.print_type(value);
                match key {
                    Type::Literal(LiteralValue::Symbol(name)) => format!("{name}: {value}"),
                    Type::Literal(LiteralValue::String(text)) => {
                        format!("{} => {value}", quote(text))
                    }
                    other => format!("{} => {value}", self.print_type(other)),
                }
            })
            .collect();
        format!("{{{}}}", entries.join(", "))
    }
}

fn collect_or<'t>(ty: &'t Type, out: &mut Vec<&'t Type>) {
    match ty {
        Type::Or(left, right) => {
            collect_or(left, out);
            collect_or(right, out);
        }
        other => out.push(other),
    }
}

fn quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for ch in text.chars() {
        match ch {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            _ => quoted.push(ch),
        }
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
#[path = "tests/type_printer_tests.rs"]
mod type_printer_tests;

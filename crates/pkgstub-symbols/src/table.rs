//! The global symbol table.
//!
//! `SymbolTable` is an append-only arena filled by the front end (or by a
//! snapshot loader) and then frozen: every consumer takes `&SymbolTable`, so
//! concurrent readers need no locking. Records reference each other only
//! through the typed handles in [`crate::ids`].

use crate::flags::{ArgFlags, ClassFlags, FieldFlags, MethodFlags, Variance};
use crate::ids::{ClassId, FieldId, FileId, MethodId, SymbolRef, TypeArgumentId, TypeMemberId};
use crate::types::Type;
use indexmap::IndexMap;
use pkgstub_common::names;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

// =============================================================================
// Files and locations
// =============================================================================

/// Byte range inside a file.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Loc {
    pub file: FileId,
    pub begin: u32,
    pub end: u32,
}

impl Loc {
    pub const fn new(file: FileId, begin: u32, end: u32) -> Self {
        Self { file, begin, end }
    }
}

/// How a file entered the program.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FileKind {
    /// Ordinary source with executable semantics.
    Source,
    /// Hand-written declaration file (`.rbi`).
    Declaration,
    /// Declaration file shipped with the front end itself.
    Payload,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FileData {
    pub path: String,
    pub kind: FileKind,
    #[serde(default)]
    pub source: Option<String>,
}

impl FileData {
    /// A file whose kind is inferred from its extension.
    pub fn new(path: impl Into<String>, source: impl Into<String>) -> Self {
        let path = path.into();
        let kind = if path.ends_with(".rbi") {
            FileKind::Declaration
        } else {
            FileKind::Source
        };
        Self {
            path,
            kind,
            source: Some(source.into()),
        }
    }

    pub fn payload(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: FileKind::Payload,
            source: None,
        }
    }

    pub fn is_declaration(&self) -> bool {
        matches!(self.kind, FileKind::Declaration | FileKind::Payload)
    }

    pub fn is_payload(&self) -> bool {
        self.kind == FileKind::Payload
    }
}

// =============================================================================
// Symbol records
// =============================================================================

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassData {
    pub name: String,
    pub owner: ClassId,
    #[serde(default)]
    pub flags: ClassFlags,
    #[serde(default)]
    pub loc: Option<Loc>,
    #[serde(default)]
    pub super_class: Option<ClassId>,
    #[serde(default)]
    pub mixins: Vec<ClassId>,
    #[serde(default)]
    pub type_members: Vec<TypeMemberId>,
    /// Members in declaration order.
    #[serde(default)]
    pub members: IndexMap<String, SymbolRef>,
    #[serde(default)]
    pub singleton_class: Option<ClassId>,
    /// Set only on singleton classes.
    #[serde(default)]
    pub attached_class: Option<ClassId>,
}

impl ClassData {
    fn new(owner: ClassId, name: &str, flags: ClassFlags) -> Self {
        Self {
            name: name.to_string(),
            owner,
            flags,
            loc: None,
            super_class: None,
            mixins: Vec::new(),
            type_members: Vec::new(),
            members: IndexMap::new(),
            singleton_class: None,
            attached_class: None,
        }
    }

    pub fn is_class(&self) -> bool {
        self.flags.contains(ClassFlags::CLASS)
    }

    pub fn is_abstract(&self) -> bool {
        self.flags.contains(ClassFlags::ABSTRACT)
    }

    pub fn is_final(&self) -> bool {
        self.flags.contains(ClassFlags::FINAL)
    }

    pub fn is_interface(&self) -> bool {
        self.flags.contains(ClassFlags::INTERFACE)
    }

    pub fn is_sealed(&self) -> bool {
        self.flags.contains(ClassFlags::SEALED)
    }

    pub fn is_singleton(&self) -> bool {
        self.attached_class.is_some()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodData {
    pub name: String,
    pub owner: ClassId,
    #[serde(default)]
    pub flags: MethodFlags,
    #[serde(default)]
    pub loc: Option<Loc>,
    #[serde(default)]
    pub arguments: Vec<ArgInfo>,
    /// Present iff the method has a signature.
    #[serde(default)]
    pub result_type: Option<Type>,
    #[serde(default)]
    pub type_arguments: Vec<TypeArgumentId>,
    /// Target of `alias_method`.
    #[serde(default)]
    pub alias_of: Option<MethodId>,
}

impl MethodData {
    pub fn has_sig(&self) -> bool {
        self.result_type.is_some()
    }

    pub fn is_private(&self) -> bool {
        self.flags.contains(MethodFlags::PRIVATE)
    }

    pub fn is_protected(&self) -> bool {
        self.flags.contains(MethodFlags::PROTECTED)
    }

    pub fn is_abstract(&self) -> bool {
        self.flags.contains(MethodFlags::ABSTRACT)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArgInfo {
    pub name: String,
    #[serde(default)]
    pub flags: ArgFlags,
    #[serde(default, rename = "type")]
    pub ty: Option<Type>,
    #[serde(default)]
    pub loc: Option<Loc>,
}

impl ArgInfo {
    pub fn positional(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            flags: ArgFlags::empty(),
            ty: Some(ty),
            loc: None,
        }
    }

    pub fn keyword(name: impl Into<String>, ty: Type) -> Self {
        Self::positional(name, ty).with_flags(ArgFlags::KEYWORD)
    }

    /// The block argument the front end adds to every method.
    pub fn synthetic_block() -> Self {
        Self {
            name: names::BLOCK_ARG.to_string(),
            flags: ArgFlags::BLOCK,
            ty: None,
            loc: None,
        }
    }

    pub fn with_flags(mut self, flags: ArgFlags) -> Self {
        self.flags |= flags;
        self
    }

    pub fn with_loc(mut self, loc: Loc) -> Self {
        self.loc = Some(loc);
        self
    }

    /// A block argument the user never wrote.
    pub fn is_synthetic_block(&self) -> bool {
        self.flags.contains(ArgFlags::BLOCK) && self.loc.is_none()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldData {
    pub name: String,
    pub owner: ClassId,
    #[serde(default)]
    pub flags: FieldFlags,
    #[serde(default)]
    pub result_type: Option<Type>,
    #[serde(default)]
    pub loc: Option<Loc>,
}

impl FieldData {
    pub fn is_field(&self) -> bool {
        self.flags.contains(FieldFlags::FIELD)
    }

    pub fn is_static_field(&self) -> bool {
        self.flags.contains(FieldFlags::STATIC_FIELD)
    }

    pub fn is_type_alias(&self) -> bool {
        self.flags.contains(FieldFlags::TYPE_ALIAS)
    }

    pub fn is_class_variable(&self) -> bool {
        self.name.starts_with("@@")
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeMemberData {
    pub name: String,
    pub owner: ClassId,
    #[serde(default)]
    pub variance: Variance,
    /// `fixed:` parameters carry equal bounds in their `LambdaParam`.
    #[serde(default)]
    pub fixed: bool,
    #[serde(default)]
    pub result_type: Option<Type>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeArgumentData {
    pub name: String,
    pub owner: MethodId,
}

// =============================================================================
// SymbolTable
// =============================================================================

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolTable {
    #[serde(default)]
    pub(crate) files: Vec<FileData>,
    pub(crate) classes: Vec<ClassData>,
    #[serde(default)]
    pub(crate) methods: Vec<MethodData>,
    #[serde(default)]
    pub(crate) fields: Vec<FieldData>,
    #[serde(default)]
    pub(crate) type_members: Vec<TypeMemberData>,
    #[serde(default)]
    pub(crate) type_arguments: Vec<TypeArgumentData>,
}

/// Well-known classes in allocation order: (owner, name, flags).
pub(crate) const WELL_KNOWN: [(ClassId, &str, ClassFlags); ClassId::WELL_KNOWN_COUNT as usize] = [
    (ClassId::ROOT, "<root>", ClassFlags::empty()),
    (ClassId::ROOT, "<PackageSpecRegistry>", ClassFlags::empty()),
    (ClassId::ROOT, "T", ClassFlags::empty()),
    (ClassId::T, "Enum", ClassFlags::CLASS.union(ClassFlags::ABSTRACT)),
    (ClassId::T, "Struct", ClassFlags::CLASS),
    (ClassId::ROOT, "NilClass", ClassFlags::CLASS),
    (ClassId::ROOT, "Sorbet", ClassFlags::empty()),
    (ClassId::SORBET, "Private", ClassFlags::empty()),
    (ClassId::SORBET_PRIVATE, "Static", ClassFlags::empty()),
    (ClassId::SORBET_PRIVATE_STATIC, "Void", ClassFlags::CLASS),
    (
        ClassId::SORBET_PRIVATE_STATIC,
        "ImplicitModuleSuperClass",
        ClassFlags::CLASS,
    ),
];

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    /// Create a table holding only the well-known classes.
    pub fn new() -> Self {
        let mut table = SymbolTable {
            files: Vec::new(),
            classes: Vec::with_capacity(64),
            methods: Vec::new(),
            fields: Vec::new(),
            type_members: Vec::new(),
            type_arguments: Vec::new(),
        };
        for (idx, (owner, name, flags)) in WELL_KNOWN.iter().enumerate() {
            let id = table.push_class(ClassData::new(*owner, name, *flags));
            debug_assert_eq!(id.0 as usize, idx);
            if id != ClassId::ROOT {
                table.classes[owner.index()]
                    .members
                    .insert((*name).to_string(), id.into());
            }
        }
        table
    }

    // =========================================================================
    // Record access
    // =========================================================================

    pub fn class(&self, id: ClassId) -> &ClassData {
        &self.classes[id.index()]
    }

    pub fn class_mut(&mut self, id: ClassId) -> &mut ClassData {
        &mut self.classes[id.index()]
    }

    pub fn method(&self, id: MethodId) -> &MethodData {
        &self.methods[id.index()]
    }

    pub fn method_mut(&mut self, id: MethodId) -> &mut MethodData {
        &mut self.methods[id.index()]
    }

    pub fn field(&self, id: FieldId) -> &FieldData {
        &self.fields[id.index()]
    }

    pub fn field_mut(&mut self, id: FieldId) -> &mut FieldData {
        &mut self.fields[id.index()]
    }

    pub fn type_member(&self, id: TypeMemberId) -> &TypeMemberData {
        &self.type_members[id.index()]
    }

    pub fn type_member_mut(&mut self, id: TypeMemberId) -> &mut TypeMemberData {
        &mut self.type_members[id.index()]
    }

    pub fn type_argument(&self, id: TypeArgumentId) -> &TypeArgumentData {
        &self.type_arguments[id.index()]
    }

    pub fn file(&self, id: FileId) -> &FileData {
        &self.files[id.index()]
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    pub fn method_count(&self) -> usize {
        self.methods.len()
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    // =========================================================================
    // Mutation (front-end phase only)
    // =========================================================================

    fn push_class(&mut self, data: ClassData) -> ClassId {
        let id = ClassId(self.classes.len() as u32);
        self.classes.push(data);
        id
    }

    pub fn enter_file(&mut self, file: FileData) -> FileId {
        let id = FileId(self.files.len() as u32);
        self.files.push(file);
        id
    }

    /// Enter (or find) a class named `name` inside `owner`.
    pub fn enter_class(&mut self, owner: ClassId, name: &str) -> ClassId {
        self.enter_class_or_module(owner, name, ClassFlags::CLASS)
    }

    /// Enter (or find) a module named `name` inside `owner`.
    pub fn enter_module(&mut self, owner: ClassId, name: &str) -> ClassId {
        self.enter_class_or_module(owner, name, ClassFlags::empty())
    }

    fn enter_class_or_module(&mut self, owner: ClassId, name: &str, flags: ClassFlags) -> ClassId {
        if let Some(SymbolRef::ClassOrModule(existing)) = self.find_member(owner, name) {
            return existing;
        }
        let id = self.push_class(ClassData::new(owner, name, flags));
        self.classes[owner.index()]
            .members
            .insert(name.to_string(), id.into());
        id
    }

    /// Singleton class of `klass`, created on first request.
    pub fn singleton_class(&mut self, klass: ClassId) -> ClassId {
        if let Some(existing) = self.class(klass).singleton_class {
            return existing;
        }
        let data = self.class(klass);
        let mut singleton = ClassData::new(
            data.owner,
            &format!("<Class:{}>", data.name),
            ClassFlags::CLASS,
        );
        singleton.attached_class = Some(klass);
        singleton.loc = data.loc;
        let id = self.push_class(singleton);
        self.class_mut(klass).singleton_class = Some(id);
        id
    }

    pub fn set_super_class(&mut self, klass: ClassId, super_class: ClassId) {
        self.class_mut(klass).super_class = Some(super_class);
    }

    pub fn add_mixin(&mut self, klass: ClassId, mixin: ClassId) {
        self.class_mut(klass).mixins.push(mixin);
    }

    /// Enter (or find) a method. New methods carry a synthetic block argument.
    pub fn enter_method(&mut self, owner: ClassId, name: &str) -> MethodId {
        if let Some(SymbolRef::Method(existing)) = self.find_member(owner, name) {
            return existing;
        }
        let id = MethodId(self.methods.len() as u32);
        self.methods.push(MethodData {
            name: name.to_string(),
            owner,
            flags: MethodFlags::empty(),
            loc: None,
            arguments: vec![ArgInfo::synthetic_block()],
            result_type: None,
            type_arguments: Vec::new(),
            alias_of: None,
        });
        self.class_mut(owner)
            .members
            .insert(name.to_string(), id.into());
        id
    }

    /// Append an argument, keeping a trailing synthetic block argument last.
    pub fn add_argument(&mut self, method: MethodId, arg: ArgInfo) {
        let arguments = &mut self.method_mut(method).arguments;
        if arguments.last().is_some_and(ArgInfo::is_synthetic_block) {
            let at = arguments.len() - 1;
            arguments.insert(at, arg);
        } else {
            arguments.push(arg);
        }
    }

    pub fn enter_type_argument(&mut self, method: MethodId, name: &str) -> TypeArgumentId {
        let id = TypeArgumentId(self.type_arguments.len() as u32);
        self.type_arguments.push(TypeArgumentData {
            name: name.to_string(),
            owner: method,
        });
        self.method_mut(method).type_arguments.push(id);
        id
    }

    /// Enter (or find) a field. `flags` selects instance field vs constant.
    pub fn enter_field(&mut self, owner: ClassId, name: &str, flags: FieldFlags) -> FieldId {
        if let Some(SymbolRef::FieldOrStaticField(existing)) = self.find_member(owner, name) {
            return existing;
        }
        let id = FieldId(self.fields.len() as u32);
        self.fields.push(FieldData {
            name: name.to_string(),
            owner,
            flags,
            result_type: None,
            loc: None,
        });
        self.class_mut(owner)
            .members
            .insert(name.to_string(), id.into());
        id
    }

    pub fn enter_type_member(
        &mut self,
        owner: ClassId,
        name: &str,
        variance: Variance,
    ) -> TypeMemberId {
        if let Some(SymbolRef::TypeMember(existing)) = self.find_member(owner, name) {
            return existing;
        }
        let id = TypeMemberId(self.type_members.len() as u32);
        self.type_members.push(TypeMemberData {
            name: name.to_string(),
            owner,
            variance,
            fixed: false,
            result_type: None,
        });
        let data = self.class_mut(owner);
        data.type_members.push(id);
        data.members.insert(name.to_string(), id.into());
        id
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn find_member(&self, owner: ClassId, name: &str) -> Option<SymbolRef> {
        self.class(owner).members.get(name).copied()
    }

    /// Resolve a fully-qualified constant path from the root.
    pub fn lookup_path<S: AsRef<str>>(&self, path: &[S]) -> Option<SymbolRef> {
        let mut scope = SymbolRef::ClassOrModule(ClassId::ROOT);
        for name in path {
            let owner = scope.as_class()?;
            scope = self.find_member(owner, name.as_ref())?;
        }
        Some(scope)
    }

    /// Like [`Self::lookup_path`], but only succeeds for classes and modules.
    pub fn lookup_class_path<S: AsRef<str>>(&self, path: &[S]) -> Option<ClassId> {
        self.lookup_path(path).and_then(SymbolRef::as_class)
    }

    /// Immediate owner of `sym`. The root owns itself.
    pub fn owner(&self, sym: SymbolRef) -> SymbolRef {
        match sym {
            SymbolRef::ClassOrModule(id) => self.class(id).owner.into(),
            SymbolRef::Method(id) => self.method(id).owner.into(),
            SymbolRef::FieldOrStaticField(id) => self.field(id).owner.into(),
            SymbolRef::TypeMember(id) => self.type_member(id).owner.into(),
            SymbolRef::TypeArgument(id) => self.type_argument(id).owner.into(),
        }
    }

    pub fn name(&self, sym: SymbolRef) -> &str {
        match sym {
            SymbolRef::ClassOrModule(id) => &self.class(id).name,
            SymbolRef::Method(id) => &self.method(id).name,
            SymbolRef::FieldOrStaticField(id) => &self.field(id).name,
            SymbolRef::TypeMember(id) => &self.type_member(id).name,
            SymbolRef::TypeArgument(id) => &self.type_argument(id).name,
        }
    }

    pub fn loc(&self, sym: SymbolRef) -> Option<Loc> {
        match sym {
            SymbolRef::ClassOrModule(id) => self.class(id).loc,
            SymbolRef::Method(id) => self.method(id).loc,
            SymbolRef::FieldOrStaticField(id) => self.field(id).loc,
            SymbolRef::TypeMember(_) | SymbolRef::TypeArgument(_) => None,
        }
    }

    /// Source text covered by `loc`, if the file carries its source.
    pub fn source(&self, loc: Loc) -> Option<&str> {
        let text = self.files.get(loc.file.index())?.source.as_deref()?;
        text.get(loc.begin as usize..loc.end as usize)
    }

    pub fn is_singleton(&self, klass: ClassId) -> bool {
        self.class(klass).is_singleton()
    }

    pub fn attached_class(&self, klass: ClassId) -> Option<ClassId> {
        self.class(klass).attached_class
    }

    pub fn lookup_singleton_class(&self, klass: ClassId) -> Option<ClassId> {
        self.class(klass).singleton_class
    }

    /// Superclass of the superclass, if both exist.
    pub fn grand_super_class(&self, klass: ClassId) -> Option<ClassId> {
        self.class(klass)
            .super_class
            .and_then(|sup| self.class(sup).super_class)
    }

    /// Follow `alias_method` links to the method that holds the definition.
    pub fn dealias_method(&self, method: MethodId) -> MethodId {
        let mut current = method;
        for _ in 0..self.methods.len() {
            match self.method(current).alias_of {
                Some(target) if target != current => current = target,
                _ => break,
            }
        }
        current
    }

    /// Fully-qualified display name of a symbol.
    pub fn show(&self, sym: SymbolRef) -> String {
        match sym {
            SymbolRef::ClassOrModule(id) => self.show_class(id),
            SymbolRef::Method(id) => {
                let data = self.method(id);
                format!("{}#{}", self.show_class(data.owner), data.name)
            }
            SymbolRef::FieldOrStaticField(id) => {
                let data = self.field(id);
                if data.is_static_field() {
                    self.qualify(data.owner, &data.name)
                } else {
                    format!("{}#{}", self.show_class(data.owner), data.name)
                }
            }
            SymbolRef::TypeMember(id) => {
                let data = self.type_member(id);
                self.qualify(data.owner, &data.name)
            }
            SymbolRef::TypeArgument(id) => self.type_argument(id).name.clone(),
        }
    }

    fn qualify(&self, owner: ClassId, name: &str) -> String {
        if owner == ClassId::ROOT {
            name.to_string()
        } else {
            format!("{}::{}", self.show_class(owner), name)
        }
    }

    fn show_class(&self, id: ClassId) -> String {
        if id == ClassId::ROOT {
            return self.class(id).name.clone();
        }
        if let Some(attached) = self.attached_class(id) {
            return format!("<Class:{}>", self.show_class(attached));
        }

        let mut parts: SmallVec<[&str; 8]> = SmallVec::new();
        let mut prefix = None;
        let mut current = id;
        while current != ClassId::ROOT {
            if current != id && self.is_singleton(current) {
                prefix = Some(self.show_class(current));
                break;
            }
            let data = self.class(current);
            parts.push(&data.name);
            current = data.owner;
        }
        parts.reverse();

        let path = parts.join("::");
        match prefix {
            Some(prefix) => format!("{prefix}::{path}"),
            None => path,
        }
    }
}

#[cfg(test)]
#[path = "tests/table_tests.rs"]
mod table_tests;

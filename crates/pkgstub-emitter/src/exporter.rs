//! Reference closure engine.
//!
//! A [`StubExporter`] renders the stub of one package. Exported symbols seed
//! a LIFO worklist; rendering a symbol discovers further references (super
//! classes, mixins, types in signatures and field declarations) which are
//! classified and, when they belong to the package, scheduled in turn. The
//! loop ends when the worklist drains.
//!
//! ```text
//! exports ──enqueue──▶ worklist ──pop──▶ emit_class / emit_method / emit_field
//!                         ▲                        │
//!                         └──────enqueue───────────┘  (references found while rendering)
//! ```
//!
//! References that leave the package stop the walk and are recorded in the
//! dependency manifest instead.

use crate::bundle::{DependencyManifest, OutputBundle, StubArtifact};
use crate::classifier::{Classifier, Ownership, PackageNamespaces};
use crate::options::ExportOptions;
use crate::output::StubWriter;
use crate::render::{self, DefParts, Delegation, SigParts, SigReturn};
use pkgstub_common::names;
use pkgstub_symbols::{
    ArgFlags, ClassId, FieldId, FileId, MethodFlags, MethodId, PackageInfo, SymbolRef,
    SymbolTable, Type, TypeMemberId, TypePrinter,
};
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;
use tracing::{Level, debug, span, warn};

const UNTYPED: &str = "T.untyped";
const PROP_PREFIXES: &[&str] = &["prop ", "const "];
const FLATFILE_PREFIXES: &[&str] = &["field ", "from ", "pattern ", "pattern("];

/// Traversal state of one package. Shared by the regular and the test pass.
#[derive(Default)]
struct EmissionState {
    /// Symbols accepted into the worklist. Append-only.
    emitted: FxHashSet<SymbolRef>,
    /// Methods, fields and type members already written out.
    rendered: FxHashSet<SymbolRef>,
    worklist: Vec<SymbolRef>,
    /// Foreign package namespace -> last symbol that referenced it.
    referenced_packages: FxHashMap<ClassId, SymbolRef>,
    referenced_files: FxHashSet<FileId>,
}

/// Renders the interface stub of a single package.
pub struct StubExporter<'a> {
    table: &'a SymbolTable,
    package: &'a PackageInfo,
    classifier: Classifier<'a>,
    options: &'a ExportOptions,
    record_base: Option<ClassId>,
    state: EmissionState,
    out: StubWriter,
}

/// Render the stubs of `package`.
pub fn export_package(
    table: &SymbolTable,
    package: &PackageInfo,
    namespaces: &PackageNamespaces,
    options: &ExportOptions,
) -> OutputBundle {
    StubExporter::new(table, package, namespaces, options).export()
}

impl<'a> StubExporter<'a> {
    pub fn new(
        table: &'a SymbolTable,
        package: &'a PackageInfo,
        namespaces: &'a PackageNamespaces,
        options: &'a ExportOptions,
    ) -> Self {
        StubExporter {
            table,
            package,
            classifier: Classifier::new(table, namespaces, package),
            options,
            record_base: table.lookup_class_path(&options.record_base),
            state: EmissionState::default(),
            out: StubWriter::new(),
        }
    }

    /// Run the regular pass, then the test pass, and collect the artifacts.
    pub fn export(mut self) -> OutputBundle {
        let _span = span!(
            Level::INFO,
            "export_package",
            package = %self.package.full_name()
        )
        .entered();

        let (exports, test_exports) = self.resolve_exports();
        let mut bundle = OutputBundle::new(self.package.mangled_name.as_str());

        if !exports.is_empty() {
            for sym in exports {
                self.enqueue(sym);
            }
            self.run_closure();
            let body = self.out.take();
            bundle.export = Some(StubArtifact {
                text: self.options.frame(&body),
                manifest: self.manifest(),
            });
        }

        // Test code may reference the regular exports, so the state carries
        // over and only newly reached symbols render here.
        if !test_exports.is_empty() {
            for sym in test_exports {
                self.enqueue(sym);
            }
            self.run_closure();
            let body = self.out.take();
            if !body.is_empty() {
                bundle.test_export = Some(StubArtifact {
                    text: self.options.frame(&body),
                    manifest: self.manifest(),
                });
            }
        }

        for (namespace, blame) in &self.state.referenced_packages {
            debug!(
                package = %self.table.show((*namespace).into()),
                blame = %self.table.show(*blame),
                "foreign package dependency"
            );
        }
        debug!(
            symbols = self.state.emitted.len(),
            export = bundle.export.is_some(),
            test_export = bundle.test_export.is_some(),
            "package exported"
        );
        bundle
    }

    /// Resolve export paths. Exports living under the test namespace are
    /// routed to the test pass.
    fn resolve_exports(&self) -> (Vec<SymbolRef>, Vec<SymbolRef>) {
        let mut exports = Vec::with_capacity(self.package.exports.len());
        let mut test_exports = Vec::with_capacity(self.package.test_exports.len());

        for path in &self.package.exports {
            match self.table.lookup_path(path) {
                Some(sym) if self.classifier.is_test_symbol(sym) => test_exports.push(sym),
                Some(sym) => exports.push(sym),
                None => debug!(export = %path.join("::"), "export does not resolve"),
            }
        }
        for path in &self.package.test_exports {
            match self.table.lookup_path(path) {
                Some(sym) => test_exports.push(sym),
                None => debug!(export = %path.join("::"), "test export does not resolve"),
            }
        }
        (exports, test_exports)
    }

    fn manifest(&self) -> DependencyManifest {
        let package_refs = self
            .state
            .referenced_packages
            .keys()
            .map(|namespace| self.table.show((*namespace).into()))
            .collect();
        let rbi_refs = self
            .state
            .referenced_files
            .iter()
            .map(|file| self.table.file(*file).path.clone())
            .collect();
        DependencyManifest::new(package_refs, rbi_refs)
    }

    // =========================================================================
    // Worklist
    // =========================================================================

    /// Schedule `sym` if it belongs to the package, otherwise record the
    /// dependency it represents.
    fn enqueue(&mut self, sym: SymbolRef) {
        // Attached classes are never singletons themselves.
        let sym = match sym.as_class().and_then(|c| self.table.attached_class(c)) {
            Some(attached) => SymbolRef::from(attached),
            None => sym,
        };
        if self.state.emitted.contains(&sym) {
            return;
        }

        match self.classifier.classify(sym) {
            Ownership::Local => {
                debug!(symbol = %self.table.show(sym), "enqueue");
                self.state.emitted.insert(sym);
                self.state.worklist.push(sym);
            }
            Ownership::ForeignPackage { namespace } => {
                self.state.referenced_packages.insert(namespace, sym);
            }
            Ownership::Unowned {
                declaration_file: Some(file),
            } => {
                self.state.referenced_files.insert(file);
            }
            Ownership::Unowned {
                declaration_file: None,
            } => {}
        }
    }

    fn run_closure(&mut self) {
        let mut no_fields = Vec::new();
        while let Some(sym) = self.state.worklist.pop() {
            match sym {
                SymbolRef::ClassOrModule(class) => self.emit_class(class),
                SymbolRef::Method(method) => self.emit_method(method, &mut no_fields),
                SymbolRef::FieldOrStaticField(field) => self.emit_field(field),
                // Rendered together with their owner.
                SymbolRef::TypeMember(_) | SymbolRef::TypeArgument(_) => {}
            }
        }
    }

    /// Schedule every symbol a type expression mentions.
    fn enqueue_type(&mut self, ty: &Type) {
        match ty {
            Type::Alias(sym) | Type::SelfTypeParam(sym) => self.enqueue(*sym),
            Type::And(left, right) | Type::Or(left, right) => {
                self.enqueue_type(left);
                self.enqueue_type(right);
            }
            Type::Applied(class, targs) => {
                self.enqueue((*class).into());
                for targ in targs {
                    self.enqueue_type(targ);
                }
            }
            Type::Class(class) => self.enqueue((*class).into()),
            Type::Meta(wrapped) => self.enqueue_type(wrapped),
            Type::Shape { keys, values } => {
                for key in keys {
                    self.enqueue_type(key);
                }
                for value in values {
                    self.enqueue_type(value);
                }
            }
            Type::Tuple(elems) => {
                for elem in elems {
                    self.enqueue_type(elem);
                }
            }
            Type::UnresolvedApplied {
                class,
                symbol,
                targs,
            } => {
                self.enqueue((*class).into());
                self.enqueue(*symbol);
                for targ in targs {
                    self.enqueue_type(targ);
                }
            }
            // Bounds are not printed, so they are not followed either.
            Type::LambdaParam { .. }
            | Type::Untyped
            | Type::Literal(_)
            | Type::SelfType
            | Type::TypeVar(_)
            | Type::UnresolvedClass { .. } => {}
        }
    }

    /// Print `ty`, scheduling everything it mentions.
    fn show_type(&mut self, ty: &Type) -> String {
        self.enqueue_type(ty);
        TypePrinter::new(self.table).print_type(ty)
    }

    fn show_opt_type(&mut self, ty: Option<&Type>) -> String {
        match ty {
            Some(ty) => self.show_type(ty),
            None => UNTYPED.to_string(),
        }
    }

    /// Right-hand side of a field or constant declaration.
    fn type_declaration(&mut self, ty: Option<&Type>) -> String {
        match ty {
            None => render::UNTYPED_DECLARATION.to_string(),
            Some(Type::Alias(sym)) => {
                self.enqueue(*sym);
                self.table.show(*sym)
            }
            Some(ty) => {
                let printed = self.show_type(ty);
                render::nil_declaration(&printed)
            }
        }
    }

    // =========================================================================
    // Classes
    // =========================================================================

    fn emit_class(&mut self, class: ClassId) {
        let table = self.table;
        let sym = SymbolRef::from(class);
        if self.classifier.classify(sym) != Ownership::Local || !self.state.emitted.contains(&sym) {
            panic!(
                "cannot render class `{}`: it was not scheduled for package `{}`",
                table.show(sym),
                self.package.full_name()
            );
        }

        let data = table.class(class);
        if table.grand_super_class(class) == Some(ClassId::T_ENUM) {
            // Enum values render inside their enum's `enums do` block.
            return;
        }
        if names::is_synthetic_name(&data.name) {
            debug!(class = %table.show(sym), "skipping synthetic class");
            return;
        }

        let is_enum = data.super_class == Some(ClassId::T_ENUM);
        let is_struct = data.super_class == Some(ClassId::T_STRUCT);
        let is_flatfile = self.descends_from_record_base(class);

        let keyword = if data.is_class() { "class" } else { "module" };
        let mut header = format!("{keyword} {}", table.show(sym));
        match data.super_class {
            Some(super_class) if super_class != ClassId::IMPLICIT_MODULE_SUPERCLASS => {
                self.enqueue(super_class.into());
                header.push_str(" < ");
                header.push_str(&table.show(super_class.into()));
            }
            _ => {}
        }
        self.out.println(&header);
        self.out.increase_indent();

        if data.is_abstract() {
            self.out.println("abstract!");
        }
        if data.is_final() {
            self.out.println("final!");
        }
        if data.is_interface() {
            self.out.println("interface!");
        }
        if data.is_sealed() {
            self.out.println("sealed!");
        }

        for &mixin in &data.mixins {
            let keyword = if table.is_singleton(mixin) {
                "extend"
            } else {
                "include"
            };
            self.out
                .println(&format!("{keyword} {}", table.show(mixin.into())));
            self.enqueue(mixin.into());
        }
        for &type_member in &data.type_members {
            self.emit_type_member(type_member);
        }

        let mut initialize = None;
        let mut pending_methods: Vec<MethodId> = Vec::new();
        let mut pending_fields: Vec<FieldId> = Vec::new();
        let mut enum_values: SmallVec<[ClassId; 8]> = SmallVec::new();

        for (name, &member) in &data.members {
            if should_skip_member(name) {
                continue;
            }
            match member {
                SymbolRef::ClassOrModule(nested) => {
                    // Nested package namespaces are separate packages.
                    if self.classifier.namespaces().contains(nested) {
                        continue;
                    }
                    if is_enum && table.class(nested).super_class == Some(class) {
                        enum_values.push(nested);
                    } else {
                        self.enqueue(member);
                    }
                }
                SymbolRef::TypeMember(_) => {}
                SymbolRef::TypeArgument(_) => {
                    warn!(class = %table.show(sym), member = %name, "class member is a method type argument");
                }
                SymbolRef::Method(method) => {
                    if name == names::INITIALIZE {
                        initialize = Some(method);
                    } else {
                        pending_methods.push(method);
                    }
                }
                SymbolRef::FieldOrStaticField(field) => {
                    let field_data = table.field(field);
                    if field_data.is_field() {
                        pending_fields.push(field);
                    } else if field_data.is_class_variable() {
                        self.emit_field(field);
                    } else {
                        self.enqueue(member);
                    }
                }
            }
        }

        if is_struct {
            self.emit_struct_props(initialize, &mut pending_methods, &mut pending_fields);
        } else if let Some(initialize) = initialize {
            self.emit_method(initialize, &mut pending_fields);
        }

        self.emit_props(&mut pending_methods, &mut pending_fields);
        if is_flatfile {
            self.emit_flatfile_fields(&mut pending_methods);
        }

        for method in pending_methods.drain(..) {
            self.emit_method(method, &mut pending_fields);
        }

        if let Some(singleton) = data.singleton_class {
            self.emit_singleton_members(class, singleton, &mut pending_fields);
        }

        if is_enum && !enum_values.is_empty() {
            self.out.println("enums do");
            self.out.increase_indent();
            for value in enum_values {
                self.out
                    .println(&format!("{} = new", table.class(value).name));
            }
            self.out.decrease_indent();
            self.out.println("end");
        }

        self.out.decrease_indent();
        self.out.println("end");
    }

    /// Class-level half of a class: `extend`s, type templates and singleton
    /// members.
    fn emit_singleton_members(
        &mut self,
        class: ClassId,
        singleton: ClassId,
        pending_fields: &mut Vec<FieldId>,
    ) {
        let table = self.table;
        let data = table.class(singleton);
        let is_sealed = table.class(class).is_sealed();

        for &mixin in &data.mixins {
            self.out
                .println(&format!("extend {}", table.show(mixin.into())));
            self.enqueue(mixin.into());
        }
        for &type_member in &data.type_members {
            self.emit_type_member(type_member);
        }

        for (name, &member) in &data.members {
            if should_skip_member(name) {
                continue;
            }
            match member {
                SymbolRef::ClassOrModule(nested) => {
                    if !self.classifier.namespaces().contains(nested) {
                        self.enqueue(member);
                    }
                }
                SymbolRef::TypeMember(_) => {}
                SymbolRef::TypeArgument(_) => {
                    warn!(class = %table.show(singleton.into()), member = %name, "class member is a method type argument");
                }
                SymbolRef::Method(method) => {
                    // Generated for sealed classes; the front end recreates it.
                    if is_sealed && name == names::SEALED_SUBCLASSES {
                        continue;
                    }
                    self.emit_method(method, pending_fields);
                }
                SymbolRef::FieldOrStaticField(field) => {
                    let field_data = table.field(field);
                    if field_data.is_field() || field_data.is_class_variable() {
                        self.emit_field(field);
                    } else {
                        self.enqueue(member);
                    }
                }
            }
        }
    }

    fn descends_from_record_base(&self, class: ClassId) -> bool {
        let Some(base) = self.record_base else {
            return false;
        };
        let mut current = Some(class);
        for _ in 0..self.table.class_count() {
            match current {
                Some(ClassId::ROOT) | None => return false,
                Some(klass) if klass == base => return true,
                Some(klass) => current = self.table.class(klass).super_class,
            }
        }
        false
    }

    // =========================================================================
    // Properties
    // =========================================================================

    /// Turn the keyword parameters of a struct constructor into `prop` /
    /// `const` lines, then render the remaining methods.
    fn emit_struct_props(
        &mut self,
        initialize: Option<MethodId>,
        methods: &mut Vec<MethodId>,
        fields: &mut Vec<FieldId>,
    ) {
        let table = self.table;
        if let Some(initialize) = initialize {
            let data = table.method(initialize);
            for arg in &data.arguments {
                if arg.is_synthetic_block() || !arg.flags.contains(ArgFlags::KEYWORD) {
                    continue;
                }
                let is_const = remove_prop_methods(table, methods, &arg.name);
                remove_prop_field(table, fields, &arg.name);
                self.emit_prop(
                    &arg.name,
                    arg.ty.as_ref(),
                    is_const,
                    arg.flags.contains(ArgFlags::DEFAULT),
                );
            }

            // Generated constructors share the class's location; one the
            // user wrote has its own.
            if data.loc != table.class(data.owner).loc {
                self.emit_method(initialize, fields);
            }
        }

        for method in methods.drain(..) {
            self.emit_method(method, fields);
        }
    }

    /// Fold `prop`/`const` accessors declared outside a struct constructor.
    fn emit_props(&mut self, methods: &mut Vec<MethodId>, fields: &mut Vec<FieldId>) {
        let table = self.table;
        let props: Vec<MethodId> = methods
            .iter()
            .copied()
            .filter(|&method| self.is_declared_by(method, PROP_PREFIXES))
            .collect();

        for prop in props {
            let data = table.method(prop);
            remove_prop_field(table, fields, &data.name);
            let is_const = remove_prop_methods(table, methods, &data.name);
            // Defaults only change the generated constructor of structs.
            self.emit_prop(&data.name, data.result_type.as_ref(), is_const, false);
        }
    }

    /// Render flat-file record fields as a trailing `flatfile do` block.
    fn emit_flatfile_fields(&mut self, methods: &mut Vec<MethodId>) {
        let table = self.table;
        let field_methods: Vec<MethodId> = methods
            .iter()
            .copied()
            .filter(|&method| self.is_declared_by(method, FLATFILE_PREFIXES))
            .collect();
        if field_methods.is_empty() {
            return;
        }

        self.out.println("flatfile do");
        self.out.increase_indent();
        for method in field_methods {
            let name = &table.method(method).name;
            remove_prop_methods(table, methods, name);
            self.out.println(&format!("field :{name}"));
        }
        self.out.decrease_indent();
        self.out.println("end");
    }

    fn emit_prop(&mut self, name: &str, ty: Option<&Type>, is_const: bool, has_default: bool) {
        let printed = self.show_opt_type(ty);
        self.out
            .println(&render::prop_line(is_const, name, &printed, has_default));
    }

    /// True for a non-setter method whose declaration source starts with one
    /// of `prefixes`.
    fn is_declared_by(&self, method: MethodId, prefixes: &[&str]) -> bool {
        let data = self.table.method(method);
        if data.name.ends_with('=') {
            return false;
        }
        let Some(source) = data.loc.and_then(|loc| self.table.source(loc)) else {
            return false;
        };
        prefixes.iter().any(|prefix| source.starts_with(prefix))
    }

    // =========================================================================
    // Methods
    // =========================================================================

    /// Render a method. The first non-abstract method rendered with pending
    /// fields declares them in its body and clears the list.
    fn emit_method(&mut self, method: MethodId, pending_fields: &mut Vec<FieldId>) {
        let table = self.table;
        let data = table.method(method);
        if data.name == names::STATIC_INIT {
            return;
        }
        if !self.state.rendered.insert(method.into()) {
            return;
        }

        if names::is_synthetic_name(&data.name) {
            if data.name == names::MIXED_IN_CLASS_METHODS {
                self.emit_mixes_in_class_methods(method);
            }
            return;
        }

        if self.try_emit_delegator(method) {
            return;
        }

        if data.has_sig() {
            let sig = self.sig_for_method(table.dealias_method(method));
            self.out.println(&sig);
        }

        let def = self.def_for_method(method);
        if pending_fields.is_empty() || data.is_abstract() {
            self.out.println(&format!("{def}; end"));
        } else {
            self.out.println(&def);
            self.out.increase_indent();
            for field in pending_fields.drain(..) {
                self.emit_field(field);
            }
            self.out.decrease_indent();
            self.out.println("end");
        }
    }

    fn emit_mixes_in_class_methods(&mut self, method: MethodId) {
        let table = self.table;
        match &table.method(method).result_type {
            Some(Type::Tuple(mixed_in)) => {
                for mixin in mixed_in {
                    let printed = self.show_type(mixin);
                    self.out
                        .println(&format!("mixes_in_class_methods({printed})"));
                }
            }
            _ => {
                warn!(method = %table.show(method.into()), "mixed-in class methods without a tuple result");
            }
        }
    }

    /// Re-render methods declared through `def_delegator(s)`.
    fn try_emit_delegator(&mut self, method: MethodId) -> bool {
        let table = self.table;
        let data = table.method(method);
        let Some(first) = data.arguments.first() else {
            return false;
        };
        let Some(source) = first.loc.and_then(|loc| table.source(loc)) else {
            return false;
        };

        match render::delegation(source, &data.name) {
            Delegation::None => false,
            Delegation::Line(line) => {
                self.out.println(&line);
                true
            }
            Delegation::Malformed => panic!(
                "invalid def_delegators declaration for `{}`: {source:?}",
                table.show(method.into())
            ),
        }
    }

    fn sig_for_method(&mut self, method: MethodId) -> String {
        let table = self.table;
        let data = table.method(method);

        let returns = match &data.result_type {
            Some(ty) if ty.is_void() => SigReturn::Void,
            Some(ty) => SigReturn::Returns(self.show_type(ty)),
            None => {
                warn!(method = %table.show(method.into()), "signature without a result type");
                SigReturn::Returns(UNTYPED.to_string())
            }
        };

        let modifiers = [
            (MethodFlags::ABSTRACT, "abstract"),
            (MethodFlags::OVERRIDABLE, "overridable"),
            (MethodFlags::OVERRIDE, "override"),
        ]
        .into_iter()
        .filter(|(flag, _)| data.flags.contains(*flag))
        .map(|(_, modifier)| modifier)
        .collect();

        let type_parameters = data
            .type_arguments
            .iter()
            .map(|targ| table.type_argument(*targ).name.clone())
            .collect();

        let mut params = Vec::with_capacity(data.arguments.len());
        for arg in &data.arguments {
            if arg.is_synthetic_block() {
                continue;
            }
            let printed = self.show_opt_type(arg.ty.as_ref());
            params.push(format!("{}: {printed}", arg.name));
        }

        render::render_sig(&SigParts {
            is_final: data.flags.contains(MethodFlags::FINAL),
            modifiers,
            type_parameters,
            params,
            returns,
        })
    }

    fn def_for_method(&self, method: MethodId) -> String {
        let table = self.table;
        let data = table.method(method);
        let is_singleton = table.is_singleton(data.owner);

        let visibility = if data.is_private() {
            if is_singleton {
                "private_class_method "
            } else {
                "private "
            }
        } else if data.is_protected() {
            "protected "
        } else {
            ""
        };

        let name = if data.name.is_empty() {
            warn!(owner = %table.show(data.owner.into()), "method without a name");
            "???"
        } else {
            data.name.as_str()
        };

        let arguments = &table.method(table.dealias_method(method)).arguments;
        if arguments.is_empty() {
            warn!(method = %table.show(method.into()), "method without a block argument");
        }

        render::render_def(&DefParts {
            visibility,
            is_singleton,
            name,
            params: render::format_params(arguments),
        })
    }

    // =========================================================================
    // Fields and type members
    // =========================================================================

    fn emit_field(&mut self, field: FieldId) {
        if !self.state.rendered.insert(field.into()) {
            return;
        }
        let table = self.table;
        let data = table.field(field);
        let result_type = data.result_type.as_ref();

        let line = if data.is_static_field() {
            if self.is_generated_constant(result_type) {
                return;
            }
            if data.is_type_alias() {
                if result_type.is_none() {
                    warn!(field = %table.show(field.into()), "type alias without a type");
                }
                let printed = self.show_opt_type(result_type);
                format!("{} = T.type_alias {{{printed}}}", table.show(field.into()))
            } else if data.is_class_variable() {
                format!("{} = {}", data.name, self.type_declaration(result_type))
            } else {
                format!(
                    "{} = {}",
                    table.show(field.into()),
                    self.type_declaration(result_type)
                )
            }
        } else {
            format!("{} = {}", data.name, self.type_declaration(result_type))
        };
        self.out.println(&line);
    }

    /// Constants the front end derives from other declarations: the shadow
    /// of a `type_template`, and the constant behind each enum value.
    fn is_generated_constant(&self, ty: Option<&Type>) -> bool {
        match ty {
            Some(Type::Alias(SymbolRef::TypeMember(type_member))) => {
                let owner = self.table.type_member(*type_member).owner;
                self.table.is_singleton(owner)
            }
            Some(Type::Class(class)) => {
                self.table.grand_super_class(*class) == Some(ClassId::T_ENUM)
            }
            _ => false,
        }
    }

    fn emit_type_member(&mut self, type_member: TypeMemberId) {
        if !self.state.rendered.insert(type_member.into()) {
            return;
        }
        let table = self.table;
        let data = table.type_member(type_member);
        if data.name == names::ATTACHED_CLASS {
            return;
        }

        let keyword = if table.is_singleton(data.owner) {
            "type_template"
        } else {
            "type_member"
        };
        let args = if data.fixed {
            match &data.result_type {
                Some(Type::LambdaParam { upper, .. }) => {
                    format!("fixed: {}", self.show_type(upper))
                }
                _ => {
                    warn!(type_member = %table.show(type_member.into()), "fixed type member without bounds");
                    render::variance_text(data.variance).to_string()
                }
            }
        } else {
            render::variance_text(data.variance).to_string()
        };
        self.out
            .println(&format!("{} = {keyword}({args})", data.name));
    }
}

fn should_skip_member(name: &str) -> bool {
    names::is_unique_name(name)
        || name == names::SINGLETON
        || name == names::ATTACHED_CLASS
        || name == names::ATTACHED
}

/// Remove the `@name` backing field of a property.
fn remove_prop_field(table: &SymbolTable, fields: &mut Vec<FieldId>, name: &str) {
    let field_name = format!("@{name}");
    fields.retain(|field| table.field(*field).name != field_name);
}

/// Remove the `name` and `name=` accessors of a property. Returns false when
/// a setter existed, i.e. the property is mutable.
fn remove_prop_methods(table: &SymbolTable, methods: &mut Vec<MethodId>, name: &str) -> bool {
    let setter = format!("{name}=");
    let mut is_const = true;
    methods.retain(|method| {
        let method_name = &table.method(*method).name;
        if *method_name == setter {
            is_const = false;
            return false;
        }
        method_name != name
    });
    is_const
}

#[cfg(test)]
#[path = "tests/exporter_tests.rs"]
mod exporter_tests;

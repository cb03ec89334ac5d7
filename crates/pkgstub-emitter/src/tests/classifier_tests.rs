use super::*;
use pkgstub_symbols::{FieldFlags, FileData, Loc, PackageId};

struct Fixture {
    table: SymbolTable,
    packages: PackageRegistry,
    foo: ClassId,
    test_foo: ClassId,
    bar: ClassId,
}

fn fixture() -> Fixture {
    let mut table = SymbolTable::new();
    let project = table.enter_module(ClassId::ROOT, "Project");
    let foo = table.enter_module(project, "Foo");
    let bar = table.enter_module(project, "Bar");
    let test = table.enter_module(ClassId::ROOT, "Test");
    let test_project = table.enter_module(test, "Project");
    let test_foo = table.enter_module(test_project, "Foo");

    let mut packages = PackageRegistry::new();
    packages.add(PackageInfo::new(&["Project", "Foo"]));
    packages.add(PackageInfo::new(&["Project", "Bar"]));
    // Registered but without any code.
    packages.add(PackageInfo::new(&["Project", "Empty"]));

    Fixture {
        table,
        packages,
        foo,
        test_foo,
        bar,
    }
}

#[test]
fn test_namespaces_include_existing_test_roots_only() {
    let fx = fixture();
    let namespaces = PackageNamespaces::build(&fx.table, &fx.packages).unwrap();
    assert!(namespaces.contains(fx.foo));
    assert!(namespaces.contains(fx.bar));
    assert!(namespaces.contains(fx.test_foo));
    assert_eq!(namespaces.len(), 3);
}

#[test]
fn test_namespaces_require_packages() {
    let table = SymbolTable::new();
    let err = PackageNamespaces::build(&table, &PackageRegistry::new()).unwrap_err();
    assert_eq!(err, NamespaceError::NoPackages);
}

#[test]
fn test_classify_local_and_foreign() {
    let mut fx = fixture();
    let widget = fx.table.enter_class(fx.foo, "Widget");
    let method = fx.table.enter_method(widget, "render");
    let helper = fx.table.enter_class(fx.test_foo, "Helper");
    let gadget = fx.table.enter_class(fx.bar, "Gadget");

    let namespaces = PackageNamespaces::build(&fx.table, &fx.packages).unwrap();
    let package = fx.packages.get(PackageId(0)).unwrap();
    let classifier = Classifier::new(&fx.table, &namespaces, package);

    assert_eq!(classifier.classify(widget.into()), Ownership::Local);
    assert_eq!(classifier.classify(method.into()), Ownership::Local);
    assert_eq!(classifier.classify(helper.into()), Ownership::Local);
    assert_eq!(classifier.classify(fx.foo.into()), Ownership::Local);
    assert_eq!(
        classifier.classify(gadget.into()),
        Ownership::ForeignPackage { namespace: fx.bar }
    );
}

#[test]
fn test_classify_unowned_records_declaration_files() {
    let mut fx = fixture();
    let gem_file = fx.table.enter_file(FileData::new("sorbet/rbi/gems/json.rbi", ""));
    let payload_file = fx.table.enter_file(FileData::payload("<payload>/core/string.rbi"));
    let source_file = fx.table.enter_file(FileData::new("lib/util.rb", ""));

    let json = fx.table.enter_module(ClassId::ROOT, "JSON");
    fx.table.class_mut(json).loc = Some(Loc::new(gem_file, 0, 0));
    let string = fx.table.enter_class(ClassId::ROOT, "String");
    fx.table.class_mut(string).loc = Some(Loc::new(payload_file, 0, 0));
    let util = fx.table.enter_module(ClassId::ROOT, "Util");
    fx.table.class_mut(util).loc = Some(Loc::new(source_file, 0, 0));
    let version = fx.table.enter_field(json, "VERSION", FieldFlags::STATIC_FIELD);

    let namespaces = PackageNamespaces::build(&fx.table, &fx.packages).unwrap();
    let package = fx.packages.get(PackageId(0)).unwrap();
    let classifier = Classifier::new(&fx.table, &namespaces, package);

    assert_eq!(
        classifier.classify(json.into()),
        Ownership::Unowned {
            declaration_file: Some(gem_file)
        }
    );
    assert_eq!(
        classifier.classify(string.into()),
        Ownership::Unowned {
            declaration_file: None
        }
    );
    assert_eq!(
        classifier.classify(util.into()),
        Ownership::Unowned {
            declaration_file: None
        }
    );
    // The declaration site of the referenced symbol itself counts.
    assert_eq!(
        classifier.classify(version.into()),
        Ownership::Unowned {
            declaration_file: None
        }
    );
    assert_eq!(
        classifier.classify(ClassId::PACKAGE_REGISTRY.into()),
        Ownership::Unowned {
            declaration_file: None
        }
    );
}

#[test]
fn test_nested_package_is_foreign() {
    let mut fx = fixture();
    let nested = fx.table.enter_module(fx.foo, "Nested");
    let inner = fx.table.enter_class(nested, "Inner");
    fx.packages.add(PackageInfo::new(&["Project", "Foo", "Nested"]));

    let namespaces = PackageNamespaces::build(&fx.table, &fx.packages).unwrap();
    let package = fx.packages.get(PackageId(0)).unwrap();
    let classifier = Classifier::new(&fx.table, &namespaces, package);

    assert_eq!(
        classifier.classify(inner.into()),
        Ownership::ForeignPackage { namespace: nested }
    );
}

#[test]
fn test_is_test_symbol() {
    let mut fx = fixture();
    let widget = fx.table.enter_class(fx.foo, "Widget");
    let helper = fx.table.enter_class(fx.test_foo, "Helper");
    let gadget = fx.table.enter_class(fx.bar, "Gadget");
    let global = fx.table.enter_class(ClassId::ROOT, "Global");

    let namespaces = PackageNamespaces::build(&fx.table, &fx.packages).unwrap();
    let package = fx.packages.get(PackageId(0)).unwrap();
    let classifier = Classifier::new(&fx.table, &namespaces, package);

    assert!(classifier.is_test_symbol(helper.into()));
    assert!(classifier.is_test_symbol(fx.test_foo.into()));
    assert!(!classifier.is_test_symbol(widget.into()));
    assert!(!classifier.is_test_symbol(gadget.into()));
    assert!(!classifier.is_test_symbol(global.into()));
}

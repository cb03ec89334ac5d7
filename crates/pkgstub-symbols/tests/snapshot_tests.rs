//! Snapshot loading and validation.

use pkgstub_symbols::{
    ArgInfo, ClassId, FieldFlags, FileData, Loc, PackageInfo, PackageRegistry, Snapshot,
    SnapshotError, SymbolTable, TableError, Type,
};
use std::io::Write;

fn sample_snapshot() -> Snapshot {
    let mut table = SymbolTable::new();
    let file = table.enter_file(FileData::new("foo/lib.rb", "class Widget; end"));
    let project = table.enter_module(ClassId::ROOT, "Project");
    let foo = table.enter_module(project, "Foo");
    let widget = table.enter_class(foo, "Widget");
    table.class_mut(widget).loc = Some(Loc::new(file, 0, 17));

    let string = table.enter_class(ClassId::ROOT, "String");
    let method = table.enter_method(widget, "label");
    table.add_argument(method, ArgInfo::keyword("prefix", Type::class(string)));
    table.method_mut(method).result_type = Some(Type::nilable(Type::class(string)));
    let limit = table.enter_field(widget, "LIMIT", FieldFlags::STATIC_FIELD);
    table.field_mut(limit).result_type = Some(Type::Untyped);

    let mut packages = PackageRegistry::new();
    packages.add(PackageInfo::new(&["Project", "Foo"]).with_export(&["Project", "Foo", "Widget"]));
    Snapshot::new(table, packages)
}

#[test]
fn test_snapshot_json_reload_preserves_symbols() {
    let snapshot = sample_snapshot();
    let json = snapshot.to_json().expect("serialize");
    let reloaded = Snapshot::parse(&json).expect("reload");

    let widget = reloaded
        .table
        .lookup_class_path(&["Project", "Foo", "Widget"])
        .expect("widget survives reload");
    assert_eq!(reloaded.table.show(widget.into()), "Project::Foo::Widget");
    assert_eq!(reloaded.table.method_count(), snapshot.table.method_count());
    assert_eq!(reloaded.packages, snapshot.packages);

    let loc = reloaded.table.class(widget).loc.expect("loc");
    assert_eq!(reloaded.table.source(loc), Some("class Widget; end"));
}

#[test]
fn test_snapshot_load_from_file() {
    let snapshot = sample_snapshot();
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(snapshot.to_json().expect("serialize").as_bytes())
        .expect("write snapshot");

    let loaded = Snapshot::load(file.path()).expect("load");
    assert_eq!(loaded.packages.len(), 1);
    assert!(loaded.packages.find_by_name("Project::Foo").is_some());
}

#[test]
fn test_snapshot_load_missing_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = Snapshot::load(&dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, SnapshotError::Io { .. }));
}

#[test]
fn test_snapshot_rejects_malformed_json() {
    let err = Snapshot::parse("{\"table\": ").unwrap_err();
    assert!(matches!(err, SnapshotError::Parse(_)));
}

#[test]
fn test_snapshot_rejects_dangling_owner() {
    let snapshot = sample_snapshot();
    let mut value: serde_json::Value =
        serde_json::from_str(&snapshot.to_json().expect("serialize")).expect("json");
    value["table"]["classes"][11]["owner"] = serde_json::json!(9999);

    let err = Snapshot::parse(&value.to_string()).unwrap_err();
    match err {
        SnapshotError::Table(TableError::DanglingHandle { context, .. }) => {
            assert_eq!(context, "class `Project`");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_snapshot_rejects_owner_cycle() {
    let mut table = SymbolTable::new();
    let a = table.enter_module(ClassId::ROOT, "A");
    let b = table.enter_module(a, "B");
    table.class_mut(a).owner = b;

    let err = Snapshot::new(table, PackageRegistry::new())
        .validate()
        .unwrap_err();
    assert!(matches!(
        err,
        SnapshotError::Table(TableError::OwnerCycle { .. })
    ));
}

#[test]
fn test_snapshot_rejects_reordered_well_known_classes() {
    let snapshot = sample_snapshot();
    let mut value: serde_json::Value =
        serde_json::from_str(&snapshot.to_json().expect("serialize")).expect("json");
    value["table"]["classes"][3]["name"] = serde_json::json!("Struct");

    let err = Snapshot::parse(&value.to_string()).unwrap_err();
    assert!(matches!(
        err,
        SnapshotError::Table(TableError::WellKnownMismatch { index: 3, .. })
    ));
}

#[test]
fn test_snapshot_rejects_duplicate_output_names() {
    let mut packages = PackageRegistry::new();
    packages.add(PackageInfo::new(&["A", "B"]));
    let mut clash = PackageInfo::new(&["A_B"]);
    clash.mangled_name = "A_B_Package".to_string();
    packages.add(clash);

    let err = Snapshot::new(SymbolTable::new(), packages)
        .validate()
        .unwrap_err();
    match err {
        SnapshotError::DuplicateOutputName {
            mangled_name,
            first,
            second,
        } => {
            assert_eq!(mangled_name, "A_B_Package");
            assert_eq!(first, "A::B");
            assert_eq!(second, "A_B");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_snapshot_rejects_attached_class_cycle() {
    let mut table = SymbolTable::new();
    let project = table.enter_module(ClassId::ROOT, "Project");
    let foo = table.enter_module(project, "Foo");
    let a = table.enter_class(foo, "A");
    let b = table.enter_class(foo, "B");
    table.class_mut(a).attached_class = Some(b);
    table.class_mut(b).attached_class = Some(a);

    let json = Snapshot::new(table, PackageRegistry::new())
        .to_json()
        .expect("serialize");
    let err = Snapshot::parse(&json).unwrap_err();
    match err {
        SnapshotError::Table(TableError::SingletonMismatch { name }) => assert_eq!(name, "A"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_snapshot_rejects_one_sided_singleton_link() {
    let mut table = SymbolTable::new();
    let widget = table.enter_class(ClassId::ROOT, "Widget");
    let other = table.enter_class(ClassId::ROOT, "Other");
    let singleton = table.singleton_class(widget);
    table.class_mut(other).singleton_class = Some(singleton);

    let err = Snapshot::new(table, PackageRegistry::new())
        .validate()
        .unwrap_err();
    assert!(matches!(
        err,
        SnapshotError::Table(TableError::SingletonMismatch { ref name }) if name == "Other"
    ));
}

#[test]
fn test_snapshot_accepts_singleton_classes() {
    let mut snapshot = sample_snapshot();
    let widget = snapshot
        .table
        .lookup_class_path(&["Project", "Foo", "Widget"])
        .expect("widget");
    let singleton = snapshot.table.singleton_class(widget);

    let reloaded = Snapshot::parse(&snapshot.to_json().expect("serialize")).expect("reload");
    assert_eq!(reloaded.table.attached_class(singleton), Some(widget));
}

#[test]
fn test_snapshot_rejects_output_names_escaping_the_output_directory() {
    for bad in ["../escape", "/abs/path", "nested/name", "back\\slash", ".."] {
        let mut package = PackageInfo::new(&["Project", "Foo"]);
        package.mangled_name = bad.to_string();
        let mut packages = PackageRegistry::new();
        packages.add(package);

        let err = Snapshot::new(SymbolTable::new(), packages)
            .validate()
            .unwrap_err();
        match err {
            SnapshotError::InvalidOutputName {
                package,
                mangled_name,
            } => {
                assert_eq!(package, "Project::Foo");
                assert_eq!(mangled_name, bad);
            }
            other => panic!("{bad:?}: unexpected error: {other:?}"),
        }
    }
}

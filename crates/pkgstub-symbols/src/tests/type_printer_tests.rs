use super::*;
use crate::flags::Variance;

fn printed(table: &SymbolTable, ty: &Type) -> String {
    TypePrinter::new(table).print_type(ty)
}

#[test]
fn test_print_nilable_and_unions() {
    let mut table = SymbolTable::new();
    let string = table.enter_class(ClassId::ROOT, "String");
    let integer = table.enter_class(ClassId::ROOT, "Integer");

    assert_eq!(
        printed(&table, &Type::nilable(Type::class(string))),
        "T.nilable(String)"
    );
    assert_eq!(
        printed(&table, &Type::any(Type::class(string), Type::class(integer))),
        "T.any(String, Integer)"
    );
    let three = Type::any(
        Type::class(string),
        Type::any(Type::nil(), Type::class(integer)),
    );
    assert_eq!(printed(&table, &three), "T.nilable(T.any(String, Integer))");
}

#[test]
fn test_print_intersection_flattens() {
    let mut table = SymbolTable::new();
    let a = table.enter_module(ClassId::ROOT, "A");
    let b = table.enter_module(ClassId::ROOT, "B");
    let c = table.enter_module(ClassId::ROOT, "C");
    let ty = Type::all(Type::class(a), Type::all(Type::class(b), Type::class(c)));
    assert_eq!(printed(&table, &ty), "T.all(A, B, C)");
}

#[test]
fn test_print_core_generics_use_t_prefix() {
    let mut table = SymbolTable::new();
    let array = table.enter_class(ClassId::ROOT, "Array");
    let hash = table.enter_class(ClassId::ROOT, "Hash");
    let string = table.enter_class(ClassId::ROOT, "String");
    let ns = table.enter_module(ClassId::ROOT, "Lib");
    let boxed = table.enter_class(ns, "Box");

    assert_eq!(
        printed(&table, &Type::applied(array, vec![Type::class(string)])),
        "T::Array[String]"
    );
    assert_eq!(
        printed(
            &table,
            &Type::applied(hash, vec![Type::symbol_literal("k"), Type::Untyped])
        ),
        "T::Hash[Symbol(:k), T.untyped]"
    );
    assert_eq!(
        printed(&table, &Type::applied(boxed, vec![Type::class(string)])),
        "Lib::Box[String]"
    );
}

#[test]
fn test_print_shape_and_tuple() {
    let mut table = SymbolTable::new();
    let string = table.enter_class(ClassId::ROOT, "String");
    let shape = Type::shape([
        (Type::symbol_literal("name"), Type::class(string)),
        (
            Type::Literal(LiteralValue::String("raw key".to_string())),
            Type::Untyped,
        ),
    ]);
    assert_eq!(
        printed(&table, &shape),
        "{name: String, \"raw key\" => T.untyped}"
    );
    assert_eq!(
        printed(&table, &Type::Tuple(vec![Type::class(string), Type::nil()])),
        "[String, NilClass]"
    );
}

#[test]
fn test_print_class_of_singleton() {
    let mut table = SymbolTable::new();
    let foo = table.enter_class(ClassId::ROOT, "Foo");
    let singleton = table.singleton_class(foo);
    assert_eq!(printed(&table, &Type::class(singleton)), "T.class_of(Foo)");
}

#[test]
fn test_print_misc_variants() {
    let mut table = SymbolTable::new();
    let foo = table.enter_class(ClassId::ROOT, "Foo");
    let elem = table.enter_type_member(foo, "Elem", Variance::Invariant);

    assert_eq!(printed(&table, &Type::SelfType), "T.self_type");
    assert_eq!(
        printed(&table, &Type::TypeVar("U".to_string())),
        "T.type_parameter(:U)"
    );
    assert_eq!(printed(&table, &Type::SelfTypeParam(elem.into())), "Elem");
    assert_eq!(printed(&table, &Type::alias(elem)), "Foo::Elem");
    assert_eq!(
        printed(&table, &Type::meta(Type::class(foo))),
        "<Type: Foo>"
    );
    assert_eq!(
        printed(&table, &Type::Literal(LiteralValue::Integer(3))),
        "Integer(3)"
    );
    assert_eq!(
        printed(&table, &Type::Literal(LiteralValue::String("a\"b".to_string()))),
        "String(\"a\\\"b\")"
    );
    assert_eq!(
        printed(
            &table,
            &Type::UnresolvedClass {
                scope: foo,
                names: vec!["Missing".to_string()],
            }
        ),
        "Foo::Missing"
    );
}

use super::*;
use pkgstub_symbols::Type;

fn params(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| format!("{name}: Integer")).collect()
}

#[test]
fn test_sig_single_line() {
    let parts = SigParts {
        params: params(&["a", "b"]),
        returns: SigReturn::Returns("String".to_string()),
        ..Default::default()
    };
    assert_eq!(
        render_sig(&parts),
        "sig {params(a: Integer, b: Integer).returns(String)}"
    );
}

#[test]
fn test_sig_component_order() {
    let parts = SigParts {
        is_final: true,
        modifiers: vec!["abstract", "override"],
        type_parameters: vec!["U".to_string()],
        params: vec!["x: T.type_parameter(:U)".to_string()],
        returns: SigReturn::Void,
    };
    assert_eq!(
        render_sig(&parts),
        "sig(:final) do\n  abstract\n  .override\n  .type_parameters(:U)\n  .params(\n    x: T.type_parameter(:U)\n  )\n  .void\nend"
    );
}

#[test]
fn test_sig_without_params() {
    let parts = SigParts {
        modifiers: vec!["overridable"],
        returns: SigReturn::Void,
        ..Default::default()
    };
    assert_eq!(render_sig(&parts), "sig {overridable.void}");
}

#[test]
fn test_sig_four_params_stays_on_one_line() {
    let parts = SigParts {
        params: params(&["a", "b", "c", "d"]),
        returns: SigReturn::Void,
        ..Default::default()
    };
    let rendered = render_sig(&parts);
    assert!(!rendered.contains('\n'), "{rendered}");
}

#[test]
fn test_sig_five_params_expands() {
    let parts = SigParts {
        params: params(&["a", "b", "c", "d", "e"]),
        returns: SigReturn::Void,
        ..Default::default()
    };
    assert_eq!(
        render_sig(&parts),
        "sig do\n  params(\n    a: Integer,\n    b: Integer,\n    c: Integer,\n    d: Integer,\n    e: Integer\n  )\n  .void\nend"
    );
}

#[test]
fn test_sig_wider_than_limit_expands() {
    let parts = SigParts {
        params: vec![format!("name: {}", "A".repeat(70))],
        returns: SigReturn::Void,
        ..Default::default()
    };
    assert!(render_sig(&parts).starts_with("sig do\n"));
}

#[test]
fn test_def_without_params_has_no_parens() {
    let parts = DefParts {
        name: "call",
        ..Default::default()
    };
    assert_eq!(render_def(&parts), "def call");
}

#[test]
fn test_def_visibility_and_singleton_prefix() {
    let parts = DefParts {
        visibility: "private_class_method ",
        is_singleton: true,
        name: "build",
        params: vec!["a".to_string(), "b:".to_string()],
    };
    assert_eq!(render_def(&parts), "private_class_method def self.build(a, b:)");
}

#[test]
fn test_def_expands_at_width_limit() {
    // "def " + 70 + "(" + 3 + ")" is exactly 79 columns.
    let name = "m".repeat(70);
    let narrow = DefParts {
        name: &name,
        params: vec!["abc".to_string()],
        ..Default::default()
    };
    assert_eq!(render_def(&narrow), format!("def {name}(abc)"));

    let wide = DefParts {
        name: &name,
        params: vec!["abcd".to_string()],
        ..Default::default()
    };
    assert_eq!(render_def(&wide), format!("def {name}(\n  abcd\n)"));
}

#[test]
fn test_param_forms() {
    let untyped = Type::Untyped;
    let rest = ArgInfo::positional("rest", untyped.clone()).with_flags(ArgFlags::REPEATED);
    let kwrest = ArgInfo::keyword("opts", untyped.clone()).with_flags(ArgFlags::REPEATED);
    let required_kw = ArgInfo::keyword("key", untyped.clone());
    let optional_kw = ArgInfo::keyword("opt", untyped.clone()).with_flags(ArgFlags::DEFAULT);
    let block = ArgInfo::positional("blk", untyped.clone()).with_flags(ArgFlags::BLOCK);
    let optional = ArgInfo::positional("x", untyped.clone()).with_flags(ArgFlags::DEFAULT);
    let plain = ArgInfo::positional("y", untyped);

    assert_eq!(format_param(&rest), "*rest");
    assert_eq!(format_param(&kwrest), "**opts");
    assert_eq!(format_param(&required_kw), "key:");
    assert_eq!(
        format_param(&optional_kw),
        "opt: T.let(T.unsafe(nil), T.untyped)"
    );
    assert_eq!(format_param(&block), "&blk");
    assert_eq!(format_param(&optional), "x= T.let(T.unsafe(nil), T.untyped)");
    assert_eq!(format_param(&plain), "y");
}

#[test]
fn test_params_hide_synthetic_block_and_stop_at_forwarding() {
    let args = vec![
        ArgInfo::positional("a", Type::Untyped),
        ArgInfo::positional("...", Type::Untyped),
        ArgInfo::positional("<fwd-args>", Type::Untyped),
        ArgInfo::synthetic_block(),
    ];
    assert_eq!(format_params(&args), vec!["a", "..."]);
    assert!(format_params(&[ArgInfo::synthetic_block()]).is_empty());
}

#[test]
fn test_prop_lines() {
    assert_eq!(prop_line(true, "id", "Integer", false), "const :id, Integer");
    assert_eq!(
        prop_line(false, "name", "T.nilable(String)", true),
        "prop :name, T.nilable(String), default: T.let(T.unsafe(nil), T.nilable(String))"
    );
}

#[test]
fn test_variance_text() {
    assert_eq!(variance_text(Variance::CoVariant), ":out");
    assert_eq!(variance_text(Variance::Invariant), "");
    assert_eq!(variance_text(Variance::ContraVariant), ":in");
}

#[test]
fn test_delegation_forms() {
    assert_eq!(delegation("attr_reader :foo", "foo"), Delegation::None);
    assert_eq!(
        delegation("def_delegator :@items, :size, :count", "count"),
        Delegation::Line("def_delegator :@items, :size, :count".to_string())
    );
    assert_eq!(
        delegation("def_delegators :@items, :first, :last", "last"),
        Delegation::Line("def_delegator :@items, :last".to_string())
    );
    assert_eq!(
        delegation("def_delegators(\n  :@items,\n  :first\n)", "first"),
        Delegation::Line("def_delegator :@items, :first".to_string())
    );
    assert_eq!(delegation("def_delegators", "first"), Delegation::Malformed);
}

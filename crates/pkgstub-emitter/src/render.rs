//! Pure line formatting for stub declarations.
//!
//! Nothing here touches the symbol table: the exporter gathers printed types
//! and names, and these functions decide layout.

use pkgstub_common::limits::{MAX_PRETTY_SIG_ARGS, MAX_PRETTY_WIDTH};
use pkgstub_common::names;
use pkgstub_symbols::{ArgFlags, ArgInfo, Variance};

/// Placeholder declaration used when a type is unknown.
pub const UNTYPED_DECLARATION: &str = "T.let(T.unsafe(nil), T.untyped)";

/// `T.let(T.unsafe(nil), <ty>)`
pub fn nil_declaration(ty: &str) -> String {
    format!("T.let(T.unsafe(nil), {ty})")
}

// =============================================================================
// Signatures
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SigReturn {
    #[default]
    Void,
    Returns(String),
}

/// Components of a `sig`, already printed.
#[derive(Clone, Debug, Default)]
pub struct SigParts {
    pub is_final: bool,
    /// `abstract`, `overridable`, `override` in that order.
    pub modifiers: Vec<&'static str>,
    /// Type parameter names without the leading colon.
    pub type_parameters: Vec<String>,
    /// `name: Type` pairs.
    pub params: Vec<String>,
    pub returns: SigReturn,
}

/// Render a `sig`.
///
/// The one-line form is used when there are at most
/// [`MAX_PRETTY_SIG_ARGS`] parameters and it fits in [`MAX_PRETTY_WIDTH`]
/// columns; otherwise every component gets its own line inside `sig do`.
pub fn render_sig(parts: &SigParts) -> String {
    let sig_call = if parts.is_final { "sig(:final)" } else { "sig" };
    let returns = match &parts.returns {
        SigReturn::Returns(ty) => format!("returns({ty})"),
        SigReturn::Void => "void".to_string(),
    };
    let type_params: Vec<String> = parts
        .type_parameters
        .iter()
        .map(|name| format!(":{name}"))
        .collect();

    let mut oneline = format!("{sig_call} {{");
    for modifier in &parts.modifiers {
        oneline.push_str(modifier);
        oneline.push('.');
    }
    if !type_params.is_empty() {
        oneline.push_str(&format!("type_parameters({}).", type_params.join(", ")));
    }
    if !parts.params.is_empty() {
        oneline.push_str(&format!("params({}).", parts.params.join(", ")));
    }
    oneline.push_str(&returns);
    oneline.push('}');

    if oneline.len() <= MAX_PRETTY_WIDTH && parts.params.len() <= MAX_PRETTY_SIG_ARGS {
        return oneline;
    }

    let mut components: Vec<String> = parts.modifiers.iter().map(|m| m.to_string()).collect();
    if !type_params.is_empty() {
        components.push(format!("type_parameters({})", type_params.join(", ")));
    }
    if !parts.params.is_empty() {
        components.push(format!(
            "params(\n    {}\n  )",
            parts.params.join(",\n    ")
        ));
    }
    components.push(returns);
    format!("{sig_call} do\n  {}\nend", components.join("\n  ."))
}

// =============================================================================
// Definitions
// =============================================================================

/// Components of a `def` line.
#[derive(Clone, Debug, Default)]
pub struct DefParts<'a> {
    /// `private `, `protected `, `private_class_method ` or empty.
    pub visibility: &'static str,
    /// Singleton methods render as `def self.name`.
    pub is_singleton: bool,
    pub name: &'a str,
    pub params: Vec<String>,
}

/// Render a `def` line without its body.
///
/// Parameters move to one per line when the compact form is at least
/// [`MAX_PRETTY_WIDTH`] columns wide.
pub fn render_def(parts: &DefParts<'_>) -> String {
    let prefix = if parts.is_singleton { "self." } else { "" };
    let head = format!("{}def {}{}", parts.visibility, prefix, parts.name);
    if parts.params.is_empty() {
        return head;
    }
    let compact = format!("{head}({})", parts.params.join(", "));
    if compact.len() < MAX_PRETTY_WIDTH {
        return compact;
    }
    format!("{head}(\n  {}\n)", parts.params.join(",\n  "))
}

/// Format one parameter of a `def` line.
pub fn format_param(arg: &ArgInfo) -> String {
    let name = arg.name.as_str();
    let flags = arg.flags;
    if flags.contains(ArgFlags::REPEATED) {
        if flags.contains(ArgFlags::KEYWORD) {
            format!("**{name}")
        } else {
            format!("*{name}")
        }
    } else if flags.contains(ArgFlags::KEYWORD) {
        if flags.contains(ArgFlags::DEFAULT) {
            format!("{name}: {UNTYPED_DECLARATION}")
        } else {
            format!("{name}:")
        }
    } else if flags.contains(ArgFlags::BLOCK) {
        format!("&{name}")
    } else if flags.contains(ArgFlags::DEFAULT) {
        format!("{name}= {UNTYPED_DECLARATION}")
    } else {
        name.to_string()
    }
}

/// Format the displayed parameters of a method.
///
/// Synthetic block arguments are hidden and `...` ends the list, since the
/// arguments after it are synthesized for forwarding.
pub fn format_params(arguments: &[ArgInfo]) -> Vec<String> {
    let mut params = Vec::with_capacity(arguments.len());
    for arg in arguments {
        if arg.is_synthetic_block() {
            continue;
        }
        if arg.name == names::FORWARD_ALL {
            params.push(arg.name.clone());
            break;
        }
        params.push(format_param(arg));
    }
    params
}

// =============================================================================
// Special member forms
// =============================================================================

/// `prop :name, Type` or `const :name, Type`, optionally with a default.
pub fn prop_line(is_const: bool, name: &str, ty: &str, has_default: bool) -> String {
    let keyword = if is_const { "const" } else { "prop" };
    if has_default {
        format!("{keyword} :{name}, {ty}, default: {}", nil_declaration(ty))
    } else {
        format!("{keyword} :{name}, {ty}")
    }
}

/// Argument list of `type_member(...)` / `type_template(...)` for a
/// non-fixed parameter.
pub fn variance_text(variance: Variance) -> &'static str {
    match variance {
        Variance::CoVariant => ":out",
        Variance::Invariant => "",
        Variance::ContraVariant => ":in",
    }
}

/// How a method declared through `def_delegator(s)` re-renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Delegation {
    /// Not a delegator declaration.
    None,
    Line(String),
    /// `def_delegators` with no target.
    Malformed,
}

const DEF_DELEGATOR: &str = "def_delegator";
const DEF_DELEGATORS: &str = "def_delegators";

/// Classify the declaration `source` of a method's first argument.
///
/// `def_delegators :target, :a, :b` declares several methods at once, so
/// each of them collapses to `def_delegator :target, :<method>`. The
/// single-method forms are kept verbatim.
pub fn delegation(source: &str, method_name: &str) -> Delegation {
    if !source.starts_with(DEF_DELEGATOR) {
        return Delegation::None;
    }
    if !source.starts_with(DEF_DELEGATORS) {
        return Delegation::Line(source.to_string());
    }
    let target = source
        .split([' ', '\n', '(', ')', ','])
        .skip(1)
        .map(str::trim)
        .find(|component| !component.is_empty());
    match target {
        Some(target) => Delegation::Line(format!("{DEF_DELEGATOR} {target}, :{method_name}")),
        None => Delegation::Malformed,
    }
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod render_tests;

//! Centralized layout limits for rendered interface stubs.
//!
//! The renderer switches between compact and expanded layouts based on these
//! thresholds. Keeping them in one place means the signature renderer, the
//! definition renderer and the tests agree on the exact cut-over points.

// =============================================================================
// Signature / Definition Layout
// =============================================================================

/// Maximum number of explicit parameters a `sig` may have and still be
/// printed on a single line.
///
/// ```ruby
/// sig {params(a: Integer, b: Integer, c: Integer, d: Integer).void}
///
/// sig do
///   params(
///     a: Integer,
///     b: Integer,
///     c: Integer,
///     d: Integer,
///     e: Integer
///   )
///   .void
/// end
/// ```
pub const MAX_PRETTY_SIG_ARGS: usize = 4;

/// Column width used for both layout decisions.
///
/// A one-line `sig` may be at most this wide. A `def` line that is this wide
/// or wider is expanded to one parameter per line.
pub const MAX_PRETTY_WIDTH: usize = 80;

// =============================================================================
// Indentation
// =============================================================================

/// Number of spaces per indentation level in emitted stubs.
pub const INDENT_WIDTH: usize = 2;

// =============================================================================
// Output
// =============================================================================

/// Strictness header written at the top of every stub file.
pub const DEFAULT_HEADER: &str = "# typed: true";

/// Initial capacity of the per-package output buffer.
pub const OUTPUT_BUFFER_CAPACITY: usize = 4096;

//! Dart tokens used when rendering generated source.
//!
//! ## Notes
//! - Only the handful of tokens the generator emits live here; this is not a Dart grammar.

/// Fallback type accepting any value; used when no more specific rendering applies.
pub const DYNAMIC: &str = "dynamic";

/// The void type.
pub const VOID: &str = "void";

/// Annotation marking the generated `setDispatcher` as an override.
pub const OVERRIDE_ANNOTATION: &str = "@override";

/// Lint suppressions emitted once at the top of a unit's generated output.
pub const LINT_HEADER: &[&str] = &[
    "// ignore_for_file: avoid_classes_with_only_static_members",
    "// ignore_for_file: annotate_overrides",
    "// ignore_for_file: overridden_fields",
    "// ignore_for_file: type_annotate_public_apis",
];

/// Render `value` as a single-quoted Dart string literal.
///
/// Backslashes, single quotes and `$` are escaped so the literal never interpolates.
///
/// ## Examples
/// ```rust
/// use actiongen_core::dart::string_literal;
///
/// assert_eq!(string_literal("Foo-bar"), "'Foo-bar'");
/// assert_eq!(string_literal("a$b"), "'a\\$b'");
/// ```
pub fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '$' => out.push_str("\\$"),
            _ => out.push(ch),
        }
    }
    out.push('\'');
    out
}

//! Escaping for Python single-quoted string literals.

/// Escape text for embedding between single quotes in generated Python.
///
/// Backslashes are doubled before quotes are escaped, so a lone trailing
/// backslash survives as an escaped backslash instead of eating the
/// closing quote. Text without quotes or backslashes passes through
/// unchanged; the transformation is applied exactly once per argument.
pub fn escape_single_quoted(text: &str) -> String {
    text.replace('\\', "\\\\").replace('\'', "\\'")
}

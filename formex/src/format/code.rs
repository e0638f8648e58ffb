//! Source-code-shaped formats: identifiers, `for` headers, double literals.

use std::sync::LazyLock;

use regex::Regex;

use super::compile;

static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| compile(r"^[a-zA-Z_][a-zA-Z0-9_]*$"));

// Deliberately permissive: only the parentheses and the two semicolons are
// structural. The three clauses may hold anything, including nothing.
static FOR_LOOP: LazyLock<Regex> = LazyLock::new(|| compile(r"^for\s*\(.*;.*;.*\)\s*\{?.*$"));

static DOUBLE: LazyLock<Regex> = LazyLock::new(|| {
    compile(concat!(
        r"^[+-]?",             // optional sign
        r"(\d+(\.\d*)?",       // integer part, optional fraction
        r"|\.\d+)",            // or bare fraction
        r"([eE][+-]?\d+)?$",   // optional exponent
    ))
});

/// Variable-name shape: a leading letter or underscore, then letters, digits
/// or underscores.
#[must_use]
pub fn is_identifier(input: &str) -> bool {
    IDENTIFIER.is_match(input)
}

/// Coarse `for`-loop header shape: `for (init; cond; update) {`. Clause
/// contents are not parsed.
#[must_use]
pub fn is_for_loop(input: &str) -> bool {
    FOR_LOOP.is_match(input)
}

/// Double-precision literal: optional sign, integer and/or fractional digits,
/// optional `e`/`E` exponent.
#[must_use]
pub fn is_double(input: &str) -> bool {
    DOUBLE.is_match(input)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_leading_char() {
        assert!(is_identifier("contador"));
        assert!(is_identifier("_temp"));
        assert!(is_identifier("valor2"));
        assert!(!is_identifier("2valor"));
        assert!(!is_identifier("mi-variable"));
        assert!(!is_identifier(""));
    }

    #[test]
    fn test_for_loop_structural_parts_only() {
        assert!(is_for_loop("for (int i = 0; i < 10; i++) {"));
        assert!(is_for_loop("for(;;)"));
        assert!(is_for_loop("for (int i = 0; i < 10; i++)"));
        // Clause contents are unchecked on purpose.
        assert!(is_for_loop("for (x; y; z) { whatever"));
    }

    #[test]
    fn test_for_loop_missing_structure() {
        assert!(!is_for_loop("for (int i = 0; i < 10) {"));
        assert!(!is_for_loop("while (true) {"));
        assert!(!is_for_loop("for int i = 0; i < 10; i++ {"));
    }

    #[test]
    fn test_double_shapes() {
        assert!(is_double("3.14"));
        assert!(is_double("-0.5"));
        assert!(is_double("+42"));
        assert!(is_double(".5"));
        assert!(is_double("1."));
        assert!(is_double("6.022e23"));
        assert!(is_double("1E-9"));
    }

    #[test]
    fn test_double_rejects_non_numeric() {
        assert!(!is_double(""));
        assert!(!is_double("."));
        assert!(!is_double("1.2.3"));
        assert!(!is_double("e10"));
        assert!(!is_double("1e"));
        assert!(!is_double("12,5"));
    }
}

//! Free-text formats: personal names, passwords, prices.

use std::sync::LazyLock;

use regex::Regex;

use super::compile;

static PERSONAL_NAME: LazyLock<Regex> = LazyLock::new(|| {
    compile(concat!(
        r"^[A-Za-zÁÉÍÓÚáéíóúÑñ]+",      // first name/surname run
        r"( [A-Za-zÁÉÍÓÚáéíóúÑñ]+)*$", // further runs, single space separated
    ))
});

// The usual one-regex form of this grammar needs lookahead, which the regex
// crate does not support. The charset/length shape and the four required
// character classes are probed as separate patterns over the same input.
static PASSWORD_SHAPE: LazyLock<Regex> = LazyLock::new(|| compile(r"^[A-Za-z\d@$!%*?&]{8,}$"));
static PASSWORD_LOWER: LazyLock<Regex> = LazyLock::new(|| compile(r"[a-z]"));
static PASSWORD_UPPER: LazyLock<Regex> = LazyLock::new(|| compile(r"[A-Z]"));
static PASSWORD_DIGIT: LazyLock<Regex> = LazyLock::new(|| compile(r"\d"));
static PASSWORD_SYMBOL: LazyLock<Regex> = LazyLock::new(|| compile(r"[@$!%*?&]"));

static PRICE: LazyLock<Regex> = LazyLock::new(|| {
    compile(concat!(
        r"^\$?",                  // optional currency sign
        r"(\d{1,3}(\.\d{3})+",    // thousands-grouped integer part
        r"|\d+)",                 // or plain digits
        r"(,\d{1,2})?$",          // optional decimals, 1-2 digits
    ))
});

/// Personal name: one or more letter runs (accented vowels and ñ/Ñ included)
/// separated by single spaces.
#[must_use]
pub fn is_personal_name(input: &str) -> bool {
    PERSONAL_NAME.is_match(input)
}

/// Strong password: at least 8 characters, at least one lowercase letter, one
/// uppercase letter, one digit and one of `@$!%*?&`, with no characters
/// outside those classes.
#[must_use]
pub fn is_strong_password(input: &str) -> bool {
    PASSWORD_SHAPE.is_match(input)
        && PASSWORD_LOWER.is_match(input)
        && PASSWORD_UPPER.is_match(input)
        && PASSWORD_DIGIT.is_match(input)
        && PASSWORD_SYMBOL.is_match(input)
}

/// Product price: optional `$`, integer part optionally grouped in thousands
/// with `.`, optional `,`-separated decimal part of 1–2 digits.
#[must_use]
pub fn is_price(input: &str) -> bool {
    PRICE.is_match(input)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_personal_name_accented_runs() {
        assert!(is_personal_name("María"));
        assert!(is_personal_name("José Ángel Muñoz"));
        assert!(is_personal_name("Pérez"));
    }

    #[test]
    fn test_personal_name_spacing() {
        assert!(!is_personal_name("Ana  López"));
        assert!(!is_personal_name(" Ana"));
        assert!(!is_personal_name("Ana "));
        assert!(!is_personal_name(""));
        assert!(!is_personal_name("Ana3"));
        assert!(!is_personal_name("Ana-López"));
    }

    #[test]
    fn test_password_all_classes_required() {
        assert!(is_strong_password("Abc123!@"));
        assert!(!is_strong_password("abc12345")); // no uppercase, no symbol
        assert!(!is_strong_password("ABC12345!")); // no lowercase
        assert!(!is_strong_password("Abcdefg!")); // no digit
        assert!(!is_strong_password("Abc12345")); // no symbol
    }

    #[test]
    fn test_password_length_and_charset() {
        assert!(!is_strong_password("Ab1!")); // too short
        assert!(!is_strong_password("Abc123!@ ")); // space outside charset
        assert!(!is_strong_password("Abc123!#")); // '#' outside symbol set
        assert!(is_strong_password("xY9&xY9&xY9&"));
    }

    #[test]
    fn test_price_grouping_and_decimals() {
        assert!(is_price("$1.000"));
        assert!(is_price("1.500.000"));
        assert!(is_price("$25.000,50"));
        assert!(is_price("999"));
        assert!(is_price("999,9"));
    }

    #[test]
    fn test_price_rejects_bad_grouping() {
        assert!(!is_price("$1.00"));
        assert!(!is_price("1.0000"));
        assert!(!is_price("1,000.50"));
        assert!(!is_price("25.000,505"));
        assert!(!is_price("$"));
    }
}

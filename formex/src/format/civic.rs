//! Colombian civic and commercial identifier formats.
//!
//! These are the narrowest grammars in the catalog: fixed length, fixed
//! literal prefixes. The prefixes encode regional conventions (postal zone
//! `05`, landline area code `604`, EAN-13 country code `770`).

use std::sync::LazyLock;

use regex::Regex;

use super::compile;

static PLATE: LazyLock<Regex> = LazyLock::new(|| compile(r"^[A-Z]{3}\d{3}$"));

static POSTAL_CODE: LazyLock<Regex> = LazyLock::new(|| compile(r"^05\d{4}$"));

static LANDLINE: LazyLock<Regex> = LazyLock::new(|| compile(r"^604\d{7}$"));

static MOBILE: LazyLock<Regex> = LazyLock::new(|| compile(r"^3\d{9}$"));

static BARCODE: LazyLock<Regex> = LazyLock::new(|| compile(r"^770\d{10}$"));

/// Vehicle plate: three uppercase letters followed by three digits
/// (e.g. `ABC123`). Lowercase letters are rejected.
#[must_use]
pub fn is_plate(input: &str) -> bool {
    PLATE.is_match(input)
}

/// Postal code: exactly six digits starting with the `05` zone prefix
/// (e.g. `050001`).
#[must_use]
pub fn is_postal_code(input: &str) -> bool {
    POSTAL_CODE.is_match(input)
}

/// Landline phone: ten digits starting with the `604` area code.
#[must_use]
pub fn is_landline(input: &str) -> bool {
    LANDLINE.is_match(input)
}

/// Mobile phone: ten digits with a leading `3`.
#[must_use]
pub fn is_mobile(input: &str) -> bool {
    MOBILE.is_match(input)
}

/// EAN-13 barcode with the `770` country prefix: exactly thirteen digits.
/// The check digit is not verified — shape only.
#[must_use]
pub fn is_barcode(input: &str) -> bool {
    BARCODE.is_match(input)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_plate_accepts_canonical() {
        assert!(is_plate("ABC123"));
        assert!(is_plate("XYZ999"));
    }

    #[test]
    fn test_plate_rejects_lowercase_and_wrong_length() {
        assert!(!is_plate("abc123"));
        assert!(!is_plate("AB123"));
        assert!(!is_plate("ABCD123"));
        assert!(!is_plate("ABC12"));
    }

    #[test]
    fn test_plate_match_is_anchored() {
        assert!(!is_plate("ABC1234"));
        assert!(!is_plate(" ABC123"));
        assert!(!is_plate("ABC123 "));
        assert!(!is_plate("xABC123"));
    }

    #[test]
    fn test_postal_code_requires_zone_prefix() {
        assert!(is_postal_code("050001"));
        assert!(!is_postal_code("150001"));
        assert!(!is_postal_code("05000"));
        assert!(!is_postal_code("0500012"));
    }

    #[test]
    fn test_landline_requires_area_code() {
        assert!(is_landline("6041234567"));
        assert!(!is_landline("6051234567"));
        assert!(!is_landline("604123456"));
        assert!(!is_landline("60412345678"));
    }

    #[test]
    fn test_mobile_requires_leading_three() {
        assert!(is_mobile("3001234567"));
        assert!(!is_mobile("2001234567"));
        assert!(!is_mobile("300123456"));
        assert!(!is_mobile("30012345678"));
    }

    #[test]
    fn test_barcode_thirteen_digits_with_country_prefix() {
        assert!(is_barcode("7701234567890"));
        assert!(!is_barcode("7711234567890"));
        assert!(!is_barcode("770123456789"));
        assert!(!is_barcode("77012345678901"));
    }
}

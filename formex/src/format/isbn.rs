//! ISBN layout classifier.
//!
//! Unlike the boolean validators this entry answers a three-way question:
//! does the input follow the ISBN-13 layout, the ISBN-10 layout, or neither?
//! Hyphens and spaces are separators, so they are stripped before probing.
//! The 13-digit probe runs first — a stripped 13-digit string always
//! classifies as ISBN-13, even where a looser 10-character reading exists.
//! Check digits are not verified at either tier.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::compile;

static ISBN_13: LazyLock<Regex> = LazyLock::new(|| {
    compile(concat!(
        r"^(ISBN)?",      // optional literal prefix
        r"(97[89]\d{10}", // 978/979-headed 13-digit layout
        r"|\d{13})$",     // any other 13-digit layout
    ))
});

static ISBN_10: LazyLock<Regex> = LazyLock::new(|| {
    compile(concat!(
        r"^(ISBN)?",    // optional literal prefix
        r"\d{9}",       // nine digits
        r"[\dXx]$",     // final digit or check letter X
    ))
});

/// Classification outcome for [`classify_isbn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IsbnKind {
    /// The stripped input follows the 13-digit layout.
    Isbn13,
    /// The stripped input follows the 10-character layout.
    Isbn10,
    /// Neither layout matched.
    Invalid,
}

impl fmt::Display for IsbnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Isbn13 => "ISBN-13",
            Self::Isbn10 => "ISBN-10",
            Self::Invalid => "No válido",
        };
        f.write_str(label)
    }
}

/// Classify an ISBN candidate by layout.
///
/// Hyphen/space group separators are stripped first; the 13-digit probe has
/// priority over the 10-character probe.
#[must_use]
pub fn classify_isbn(input: &str) -> IsbnKind {
    let stripped: String = input.chars().filter(|c| !matches!(c, '-' | ' ')).collect();

    if ISBN_13.is_match(&stripped) {
        IsbnKind::Isbn13
    } else if ISBN_10.is_match(&stripped) {
        IsbnKind::Isbn10
    } else {
        IsbnKind::Invalid
    }
}

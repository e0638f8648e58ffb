//! Email and URL formats.

use std::sync::LazyLock;

use regex::Regex;

use super::compile;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    compile(concat!(
        r"^[a-zA-Z0-9._%+-]+", // local part
        r"@",
        r"[a-zA-Z0-9.-]+",  // domain labels
        r"\.[a-zA-Z]{2,}$", // TLD, at least two letters
    ))
});

static URL: LazyLock<Regex> = LazyLock::new(|| {
    compile(concat!(
        r"^(https?://)?",                          // optional scheme
        r"(www\.)?",                               // optional www prefix
        r"[a-zA-Z0-9-]+(\.[a-zA-Z0-9-]+)*",        // host labels
        r"\.[a-zA-Z]{2,6}",                        // TLD, 2-6 letters
        r"(/[\w\-.~:/?#%\[\]@!$&'()*+,;=]*)?/?$", // optional path/query/fragment tail
    ))
});

/// General email shape: local part, `@`, dotted domain, alphabetic TLD of at
/// least two letters. Not an RFC 5322 parser.
#[must_use]
pub fn is_email(input: &str) -> bool {
    EMAIL.is_match(input)
}

/// Web URL with optional `http(s)://` or `www.` head and an optional
/// path/query/fragment tail.
#[must_use]
pub fn is_url(input: &str) -> bool {
    URL.is_match(input)
}

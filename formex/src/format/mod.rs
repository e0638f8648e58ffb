//! Per-domain validator modules.
//!
//! Every boolean validator here follows the same contract: one fixed grammar,
//! compiled once into a process-wide [`std::sync::LazyLock`] static, matched
//! against the *entire* input string (`^...$`). A conforming fragment inside a
//! longer string is rejected. Validators are pure and total — malformed input
//! yields `false`, never an error.
//!
//! The two classifier modules ([`isbn`], [`vowels`]) probe an ordered list of
//! patterns instead of a single one and return a closed set of labels.

use regex::Regex;

pub mod biblio;
pub mod civic;
pub mod code;
pub mod isbn;
pub mod net;
pub mod temporal;
pub mod text;
pub mod vowels;

/// Compile a built-in pattern.
///
/// Patterns are string literals fixed at compile time; a failure here is a
/// programming error in the catalog itself, guarded by the test suite.
pub(crate) fn compile(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(err) => panic!("invalid built-in pattern: {err}"),
    }
}

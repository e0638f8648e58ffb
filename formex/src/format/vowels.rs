//! Vowel-sequence classifier for Spanish words.
//!
//! Probes the word for adjacent vowel pairs, case-insensitively, in priority
//! order: two open vowels first (hiatus), then any open/closed or
//! closed/closed pair (possible diphthong). Open vowels are `a e o` with or
//! without acute accent; closed vowels are `i u`.
//!
//! This is an adjacency heuristic, not a full prosodic analysis: whether an
//! unaccented closed vowel is stressed cannot be read from spelling, so the
//! diphthong tier is reported as "possible" only. Accented closed vowels
//! (`í ú`) belong to neither class.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::compile;

// Unanchored on purpose: the pair may appear anywhere in the word.
static OPEN_PAIR: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)[aeoáéó][aeoáéó]"));

static MIXED_PAIR: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)[aeoáéó][iu]|[iu][aeoáéó]|[iu][iu]"));

/// Classification outcome for [`classify_vowel_sequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VowelSequence {
    /// Two adjacent open vowels: always a hiatus.
    SimpleHiatus,
    /// An adjacent pair involving a closed vowel: diphthong unless the closed
    /// vowel carries the stress.
    PossibleDiphthong,
    /// No adjacent vowel pair of interest.
    NoSequence,
}

impl fmt::Display for VowelSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::SimpleHiatus => "Hiato Simple",
            Self::PossibleDiphthong => "Posible Diptongo",
            Self::NoSequence => "No contiene secuencia vocálica relevante",
        };
        f.write_str(label)
    }
}

/// Classify a word by its adjacent vowel pairs, highest tier first.
#[must_use]
pub fn classify_vowel_sequence(word: &str) -> VowelSequence {
    if OPEN_PAIR.is_match(word) {
        VowelSequence::SimpleHiatus
    } else if MIXED_PAIR.is_match(word) {
        VowelSequence::PossibleDiphthong
    } else {
        VowelSequence::NoSequence
    }
}

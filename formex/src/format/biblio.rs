//! Legal citations and bibliographic references.
//!
//! The reference grammars check the coarse field layout (index, authors,
//! quoted title, year, closing period) rather than the full citation
//! standards.

use std::sync::LazyLock;

use regex::Regex;

use super::compile;

static LEGAL_CITATION: LazyLock<Regex> = LazyLock::new(|| {
    compile(concat!(
        r"^(Ley|Decreto|Artículo)", // citation head
        r"\s+\d+",                  // number
        r"(\s+de\s+\d{4})?",        // optional year clause
        r"(,?\s+artículo\s+\d+)?$", // optional article suffix
    ))
});

static IEEE_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    compile(concat!(
        r"^\[\d+\]\s+",                                      // bracketed index
        r"([A-Z]\.\s?)+[A-Za-zÁÉÍÓÚáéíóúÑñ-]+",              // first author: initials + surname
        r"(,\s+([A-Z]\.\s?)+[A-Za-zÁÉÍÓÚáéíóúÑñ-]+)*,\s+",   // further authors
        r#""[^"]+,"\s+"#,                                    // quoted title, comma inside
        r"[^:]+:\s*[^,]+,\s+",                               // location: publisher
        r"\d{4}\.$",                                         // year, closing period
    ))
});

static APA_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    compile(concat!(
        r"^[A-Za-zÁÉÍÓÚáéíóúÑñ-]+,\s+", // surname
        r"([A-Z]\.\s*)+",               // author initials
        r"\(\d{4}\)\.\s+",              // parenthesized year
        r".+\.\s+",                     // title
        r".+\.$",                       // publisher
    ))
});

/// Legal citation: `Ley`/`Decreto`/`Artículo`, a number, an optional
/// `de <year>` clause and an optional `artículo N` suffix.
#[must_use]
pub fn is_legal_citation(input: &str) -> bool {
    LEGAL_CITATION.is_match(input)
}

/// IEEE-style book reference:
/// `[N] A. Author, "Title," City, State: Publisher, year.`
#[must_use]
pub fn is_ieee_reference(input: &str) -> bool {
    IEEE_REFERENCE.is_match(input)
}

/// APA-style book reference:
/// `Surname, A. A. (Year). Title. Publisher.`
#[must_use]
pub fn is_apa_reference(input: &str) -> bool {
    APA_REFERENCE.is_match(input)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_legal_citation_variants() {
        assert!(is_legal_citation("Ley 1581 de 2012"));
        assert!(is_legal_citation("Decreto 1377"));
        assert!(is_legal_citation("Artículo 15"));
        assert!(is_legal_citation("Ley 1581 de 2012, artículo 5"));
        assert!(is_legal_citation("Ley 100 artículo 2"));
    }

    #[test]
    fn test_legal_citation_rejects() {
        assert!(!is_legal_citation("ley 100"));
        assert!(!is_legal_citation("Ley"));
        assert!(!is_legal_citation("Resolución 123"));
        assert!(!is_legal_citation("Ley 100 de 12"));
    }

    #[test]
    fn test_ieee_reference_single_author() {
        assert!(is_ieee_reference(
            "[1] J. K. Author, \"Deep Learning Methods,\" Cambridge, MA: MIT Press, 2016."
        ));
    }

    #[test]
    fn test_ieee_reference_author_list() {
        assert!(is_ieee_reference(
            "[12] A. B. Pérez, C. Gómez, \"Redes Neuronales,\" Bogotá, DC: Ediciones U, 2020."
        ));
    }

    #[test]
    fn test_ieee_reference_missing_fields() {
        // No bracketed index.
        assert!(!is_ieee_reference(
            "J. K. Author, \"Deep Learning,\" Cambridge, MA: MIT Press, 2016."
        ));
        // Title not quoted.
        assert!(!is_ieee_reference(
            "[1] J. K. Author, Deep Learning, Cambridge, MA: MIT Press, 2016."
        ));
        // Title comma outside the quotes.
        assert!(!is_ieee_reference(
            "[1] J. K. Author, \"Deep Learning\", Cambridge, MA: MIT Press, 2016."
        ));
        // No closing period.
        assert!(!is_ieee_reference(
            "[1] J. K. Author, \"Deep Learning,\" Cambridge, MA: MIT Press, 2016"
        ));
    }

    #[test]
    fn test_apa_reference_accepts_canonical() {
        assert!(is_apa_reference(
            "García, A. B. (2020). Métodos de investigación. Editorial Uniandes."
        ));
        assert!(is_apa_reference("Knuth, D. E. (1997). TAOCP. Addison-Wesley."));
    }

    #[test]
    fn test_apa_reference_missing_fields() {
        // No period after the year parenthesis.
        assert!(!is_apa_reference(
            "García, A. B. (2020) Métodos. Editorial Uniandes."
        ));
        // No initials.
        assert!(!is_apa_reference("García, (2020). Métodos. Editorial."));
        // Publisher missing.
        assert!(!is_apa_reference("García, A. B. (2020). Métodos."));
        // Year not four digits.
        assert!(!is_apa_reference("García, A. B. (20). Métodos. Editorial."));
    }
}

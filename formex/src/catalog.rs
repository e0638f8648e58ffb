//! The validator catalog: one [`Format`] per supported entry, with stable
//! names, menu labels, documentation examples and dispatch.
//!
//! The catalog is a fixed table. Entries carry no state; [`Format::evaluate`]
//! is a pure total function and never fails — malformed input yields a
//! negative [`Outcome`], not an error. The only fallible operation in this
//! crate is parsing a format *name*, which callers (not validators) can get
//! wrong.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::format::isbn::{self, IsbnKind};
use crate::format::vowels::{self, VowelSequence};
use crate::format::{biblio, civic, code, net, temporal, text};

/// A named entry of the validator catalog.
///
/// Variants are listed in menu order; [`Format::ALL`] preserves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Format {
    /// Vehicle plate, three uppercase letters + three digits.
    Plate,
    /// Six-digit postal code with the `05` zone prefix.
    PostalCode,
    /// Ten-digit landline number with the `604` area code.
    Landline,
    /// Ten-digit mobile number with a leading `3`.
    Mobile,
    /// General email shape.
    Email,
    /// `dd/mm/yyyy` date, lexical ranges only.
    Date,
    /// `HH:MM:SS` 24-hour clock time.
    Time24,
    /// `hh:MM:SS AM|PM` 12-hour clock time.
    Time12,
    /// Variable-name shape identifier.
    Identifier,
    /// Web URL.
    Url,
    /// ISBN layout classifier (13/10/neither).
    Isbn,
    /// EAN-13 barcode with the `770` country prefix.
    Barcode,
    /// Personal name, accented letter runs.
    PersonalName,
    /// Strong password policy.
    Password,
    /// Coarse `for`-loop header shape.
    ForLoop,
    /// Double-precision number literal.
    Double,
    /// Legal citation (`Ley`/`Decreto`/`Artículo`).
    LegalCitation,
    /// IEEE-style book reference.
    IeeeReference,
    /// APA-style book reference.
    ApaReference,
    /// Product price with thousands grouping.
    Price,
    /// Vowel-sequence classifier (hiatus/diphthong/none).
    Vowels,
}

/// Whether an entry answers yes/no or picks one of several labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatKind {
    /// The entry returns [`Outcome::Valid`] or [`Outcome::Invalid`].
    Boolean,
    /// The entry returns a multi-way classification.
    Classification,
}

/// Result of evaluating one input against one catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "label", rename_all = "snake_case")]
pub enum Outcome {
    /// The input conforms to the boolean entry's grammar.
    Valid,
    /// The input does not conform.
    Invalid,
    /// Classification by the ISBN entry.
    Isbn(IsbnKind),
    /// Classification by the vowel-sequence entry.
    Vowels(VowelSequence),
}

impl Outcome {
    /// `true` for conforming inputs and for classifications other than the
    /// most generic label. Drives the CLI exit code.
    #[must_use]
    pub fn is_positive(self) -> bool {
        match self {
            Self::Valid => true,
            Self::Invalid => false,
            Self::Isbn(kind) => kind != IsbnKind::Invalid,
            Self::Vowels(seq) => seq != VowelSequence::NoSequence,
        }
    }
}

impl From<bool> for Outcome {
    fn from(valid: bool) -> Self {
        if valid { Self::Valid } else { Self::Invalid }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid => f.write_str("válida"),
            Self::Invalid => f.write_str("no válida"),
            Self::Isbn(kind) => fmt::Display::fmt(kind, f),
            Self::Vowels(seq) => fmt::Display::fmt(seq, f),
        }
    }
}

/// A format name that is not in the catalog.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown format name '{0}'")]
pub struct UnknownFormat(pub String);

impl Format {
    /// Every catalog entry, in menu order.
    pub const ALL: [Self; 21] = [
        Self::Plate,
        Self::PostalCode,
        Self::Landline,
        Self::Mobile,
        Self::Email,
        Self::Date,
        Self::Time24,
        Self::Time12,
        Self::Identifier,
        Self::Url,
        Self::Isbn,
        Self::Barcode,
        Self::PersonalName,
        Self::Password,
        Self::ForLoop,
        Self::Double,
        Self::LegalCitation,
        Self::IeeeReference,
        Self::ApaReference,
        Self::Price,
        Self::Vowels,
    ];

    /// Stable kebab-case identifier, accepted by [`Format::from_str`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Plate => "plate",
            Self::PostalCode => "postal-code",
            Self::Landline => "landline",
            Self::Mobile => "mobile",
            Self::Email => "email",
            Self::Date => "date",
            Self::Time24 => "time-24h",
            Self::Time12 => "time-12h",
            Self::Identifier => "identifier",
            Self::Url => "url",
            Self::Isbn => "isbn",
            Self::Barcode => "barcode",
            Self::PersonalName => "personal-name",
            Self::Password => "password",
            Self::ForLoop => "for-loop",
            Self::Double => "double",
            Self::LegalCitation => "legal-citation",
            Self::IeeeReference => "ieee-reference",
            Self::ApaReference => "apa-reference",
            Self::Price => "price",
            Self::Vowels => "vowel-sequence",
        }
    }

    /// Human menu label. Domain wording is Spanish, as are the formats.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Plate => "Placa de carro (Colombia)",
            Self::PostalCode => "Código postal (Medellín)",
            Self::Landline => "Teléfono fijo (Medellín)",
            Self::Mobile => "Teléfono celular (Colombia)",
            Self::Email => "Correo electrónico",
            Self::Date => "Fecha (dd/mm/aaaa)",
            Self::Time24 => "Hora (24h hh:mm:ss)",
            Self::Time12 => "Hora (12h hh:mm:ss AM/PM)",
            Self::Identifier => "Nombre de variable",
            Self::Url => "URL",
            Self::Isbn => "Código ISBN (10 o 13)",
            Self::Barcode => "Código de barras (Colombia EAN-13)",
            Self::PersonalName => "Nombre y/o Apellido",
            Self::Password => "Contraseña segura",
            Self::ForLoop => "Estructura de ciclo 'for'",
            Self::Double => "Número double",
            Self::LegalCitation => "Ley, Decreto o Artículo",
            Self::IeeeReference => "Referencia de libro (IEEE)",
            Self::ApaReference => "Referencia de libro (APA)",
            Self::Price => "Precio de producto",
            Self::Vowels => "Clasificar Diptongo/Hiato",
        }
    }

    /// Documentation-only sample input that the entry accepts (or, for the
    /// classifiers, classifies as a non-generic label).
    #[must_use]
    pub fn example(self) -> &'static str {
        match self {
            Self::Plate => "ABC123",
            Self::PostalCode => "050001",
            Self::Landline => "6041234567",
            Self::Mobile => "3001234567",
            Self::Email => "usuario@dominio.com",
            Self::Date => "24/07/2023",
            Self::Time24 => "13:45:59",
            Self::Time12 => "01:30:00 PM",
            Self::Identifier => "_contador1",
            Self::Url => "https://www.example.com/ruta",
            Self::Isbn => "978-3-16-148410-0",
            Self::Barcode => "7701234567890",
            Self::PersonalName => "María José Muñoz",
            Self::Password => "Abc123!@",
            Self::ForLoop => "for (int i = 0; i < 10; i++) {",
            Self::Double => "-3.14e10",
            Self::LegalCitation => "Ley 1581 de 2012",
            Self::IeeeReference => {
                "[1] J. K. Author, \"Deep Learning Methods,\" Cambridge, MA: MIT Press, 2016."
            }
            Self::ApaReference => "García, A. B. (2020). Métodos de investigación. Editorial Uniandes.",
            Self::Price => "$25.000,50",
            Self::Vowels => "ciudad",
        }
    }

    /// Boolean or classification.
    #[must_use]
    pub fn kind(self) -> FormatKind {
        if matches!(self, Self::Isbn | Self::Vowels) {
            FormatKind::Classification
        } else {
            FormatKind::Boolean
        }
    }

    /// Evaluate `input` against this entry.
    ///
    /// Total: every input, however malformed, maps to a defined [`Outcome`].
    #[must_use]
    pub fn evaluate(self, input: &str) -> Outcome {
        let outcome = match self {
            Self::Plate => civic::is_plate(input).into(),
            Self::PostalCode => civic::is_postal_code(input).into(),
            Self::Landline => civic::is_landline(input).into(),
            Self::Mobile => civic::is_mobile(input).into(),
            Self::Email => net::is_email(input).into(),
            Self::Date => temporal::is_date(input).into(),
            Self::Time24 => temporal::is_time_24h(input).into(),
            Self::Time12 => temporal::is_time_12h(input).into(),
            Self::Identifier => code::is_identifier(input).into(),
            Self::Url => net::is_url(input).into(),
            Self::Isbn => Outcome::Isbn(isbn::classify_isbn(input)),
            Self::Barcode => civic::is_barcode(input).into(),
            Self::PersonalName => text::is_personal_name(input).into(),
            Self::Password => text::is_strong_password(input).into(),
            Self::ForLoop => code::is_for_loop(input).into(),
            Self::Double => code::is_double(input).into(),
            Self::LegalCitation => biblio::is_legal_citation(input).into(),
            Self::IeeeReference => biblio::is_ieee_reference(input).into(),
            Self::ApaReference => biblio::is_apa_reference(input).into(),
            Self::Price => text::is_price(input).into(),
            Self::Vowels => Outcome::Vowels(vowels::classify_vowel_sequence(input)),
        };
        tracing::debug!(format = self.name(), outcome = %outcome, "input evaluated");
        outcome
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|format| format.name() == s)
            .ok_or_else(|| UnknownFormat(s.to_owned()))
    }
}

//! # formex
//!
//! Catalog of anchored string-format validators: vehicle plates, postal
//! codes, phone numbers, emails, dates, clock times, identifiers, URLs,
//! barcodes, names, passwords, `for` headers, doubles, legal citations,
//! IEEE/APA references and prices, plus two multi-pattern classifiers
//! (ISBN layout, Spanish vowel sequences).
//!
//! Every validator is a pure total function over a fixed grammar compiled
//! once at first use. Boolean entries match the *entire* input (anchored);
//! the classifiers probe an ordered pattern list and return a closed label
//! set. Nothing here performs I/O, holds mutable state, or fails: malformed
//! input is a negative result, not an error.
//!
//! ## Quick Start
//!
//! ```rust
//! use formex::{Format, Outcome};
//! use formex::format::isbn::{classify_isbn, IsbnKind};
//!
//! // Dispatch through the catalog...
//! assert_eq!(Format::Plate.evaluate("ABC123"), Outcome::Valid);
//! assert_eq!(Format::Plate.evaluate("ABC1234"), Outcome::Invalid);
//!
//! // ...or call a validator directly.
//! assert_eq!(classify_isbn("978-3-16-148410-0"), IsbnKind::Isbn13);
//!
//! // Entries are addressable by stable name.
//! let format: Format = "postal-code".parse().unwrap();
//! assert!(format.evaluate("050001").is_positive());
//! ```

mod catalog;
pub mod format;

pub use catalog::{Format, FormatKind, Outcome, UnknownFormat};
pub use format::isbn::IsbnKind;
pub use format::vowels::VowelSequence;

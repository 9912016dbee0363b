//! Business card text classification.

mod address;
mod classifier;
mod parser;
pub mod rules;

pub use address::assemble_address;
pub use classifier::{ClassifiedLines, LineClassifier, TaggedLine};
pub use parser::{split_name, BusinessCardParser, ScanResult};
pub use rules::keywords::{KeywordSet, LineCategory};

use crate::models::contact::ParsedContact;

/// Trait for business card parsers.
///
/// Parsing never fails: sparse or unreadable text yields a partially or
/// fully empty contact.
pub trait CardParser {
    /// Parse contact fields from OCR text.
    fn parse(&self, text: &str) -> ParsedContact;

    /// Parse contact fields and report how the text was interpreted.
    fn parse_with_report(&self, text: &str) -> ScanResult;
}

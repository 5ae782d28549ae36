//! Postal address extraction.

use super::normalize::join_lines;
use super::patterns::ADDRESS;
use super::{find_all, ExtractionMatch, FieldExtractor};

/// Address extractor.
///
/// Tries a PO box form, then a street form (`<number> <words>, ST 12345`),
/// then a looser `<text>, ST 12345` form. Raw matches may span lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct AddressExtractor;

impl AddressExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl FieldExtractor for AddressExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        ADDRESS
            .find(text)
            .map(|m| ExtractionMatch::new(m.as_str().to_string(), m.start(), m.end()))
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        find_all(&ADDRESS, text)
    }
}

/// Extract all addresses, each collapsed onto a single line.
pub fn extract_addresses(text: &str) -> Vec<String> {
    AddressExtractor::new()
        .extract_all(text)
        .into_iter()
        .map(|m| join_lines(&m.value))
        .collect()
}

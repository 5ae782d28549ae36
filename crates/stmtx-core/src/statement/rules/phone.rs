//! Phone number extraction.

use super::patterns::PHONE;
use super::{find_all, ExtractionMatch, FieldExtractor};

/// Phone number extractor.
///
/// Matches by shape only; numbers keep the separators they were printed with.
#[derive(Debug, Default, Clone, Copy)]
pub struct PhoneExtractor;

impl PhoneExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl FieldExtractor for PhoneExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        PHONE
            .find(text)
            .map(|m| ExtractionMatch::new(m.as_str().to_string(), m.start(), m.end()))
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        find_all(&PHONE, text)
    }
}

/// Extract all phone numbers from text.
pub fn extract_phone_numbers(text: &str) -> Vec<String> {
    PhoneExtractor::new()
        .extract_all(text)
        .into_iter()
        .map(|m| m.value)
        .collect()
}

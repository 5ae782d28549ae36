//! Bank name extraction against a fixed list of known banks.

use super::normalize::normalize_bank_name;
use super::patterns::BANK_NAME;
use super::{find_all, ExtractionMatch, FieldExtractor};

/// Bank name extractor.
#[derive(Debug, Default, Clone, Copy)]
pub struct BankNameExtractor;

impl BankNameExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl FieldExtractor for BankNameExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        BANK_NAME
            .find(text)
            .map(|m| ExtractionMatch::new(m.as_str().to_string(), m.start(), m.end()))
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        find_all(&BANK_NAME, text)
    }
}

/// Extract the first bank name, normalized with the default corrections.
pub fn extract_bank_name(text: &str) -> Option<String> {
    BankNameExtractor::new()
        .extract(text)
        .map(|m| normalize_bank_name(&m.value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_first_in_text_order() {
        let text = "Zelle transfer to Capital One\nBank of America, N.A.";
        let all: Vec<String> = BankNameExtractor::new()
            .extract_all(text)
            .into_iter()
            .map(|m| m.value)
            .collect();
        assert_eq!(all, vec!["Capital One", "Bank of America"]);
        assert_eq!(extract_bank_name(text), Some("Capital One".to_string()));
    }

    #[test]
    fn test_extract_normalizes() {
        assert_eq!(
            extract_bank_name("~~ Bank   of\nAmerica ~~"),
            Some("Bank Of America".to_string())
        );
        assert_eq!(extract_bank_name("U.S. Bank N.A."), Some("Us Bank".to_string()));
        assert_eq!(extract_bank_name("HSBC"), Some("Hsbc".to_string()));
        assert_eq!(extract_bank_name("PNC Bank"), Some("PNC Bank".to_string()));
    }

    #[test]
    fn test_no_known_bank() {
        assert_eq!(extract_bank_name("First Community Credit Union"), None);
    }
}

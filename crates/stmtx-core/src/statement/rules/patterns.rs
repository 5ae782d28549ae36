//! Common regex patterns for bank statement extraction.

use lazy_static::lazy_static;
use regex::Regex;

/// Known bank names and aliases, as regex fragments.
///
/// Order matters: longer names must precede names they contain
/// (`JPMorgan Chase` before `Chase`).
pub const KNOWN_BANKS: &[&str] = &[
    r"JPMorgan\s+Chase",
    r"Chase",
    r"Bank\s+of\s+America",
    r"BofA",
    r"Citibank",
    r"Citigroup",
    r"Wells\s+Fargo",
    r"Goldman\s+Sachs",
    r"Morgan\s+Stanley",
    r"U\.?S\.?\s+Bank",
    r"PNC\s+Financial\s+Services",
    r"Truist",
    r"Capital\s+One",
    r"HSBC",
    r"Barclays",
    r"American\s+Express",
];

lazy_static! {
    // US phone numbers with leading country code
    pub static ref PHONE: Regex = Regex::new(
        r"\b1[-.\s]?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}\b"
    ).unwrap();

    // Labelled account numbers, or any bare 12-16 digit run.
    // The bare alternative also catches routing/check digit runs.
    pub static ref ACCOUNT_NUMBER: Regex = Regex::new(
        r"\b(?:Account\s*(?:number|Number|No\.|[-\s]*)\s*:?\s*|Acct\s*[-\s]*)\d{1,4}(?:[-\s]?\d{1,4}){0,3}|\b\d{12,16}\b"
    ).unwrap();

    // PO box, street address, then a looser "<text>, ST 12345" fallback
    pub static ref ADDRESS: Regex = Regex::new(
        r"(?:P\.?O\.? ?Box \d{1,5}[\w\s]*|\d{1,5}[\w\s]+,\s*[A-Z]{2} \d{5}(?:-\d{4})?)|(?:[\d\w\s]+,[\s]*[A-Z]{2}[\s]*\d{5}(?:-\d{4})?)"
    ).unwrap();

    pub static ref BANK_NAME: Regex = Regex::new(&format!(
        r"\b(?:{})|PNC\s+Bank\b",
        KNOWN_BANKS.join("|")
    )).unwrap();

    // Bank name cleanup
    pub static ref NON_WORD: Regex = Regex::new(r"[^\w\s]").unwrap();

    // Account number cleanup; Unicode-aware like the matcher's \d
    pub static ref NON_DIGIT: Regex = Regex::new(r"\D").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_pattern_prefers_longest_alias() {
        let m = BANK_NAME.find("Statement from JPMorgan Chase N.A.").unwrap();
        assert_eq!(m.as_str(), "JPMorgan Chase");
    }

    #[test]
    fn test_bank_pattern_tolerates_internal_whitespace() {
        let m = BANK_NAME.find("Wells   Fargo\nBank").unwrap();
        assert_eq!(m.as_str(), "Wells   Fargo");
    }

    #[test]
    fn test_bank_pattern_is_case_sensitive() {
        assert!(BANK_NAME.find("wells fargo bank").is_none());
    }

    #[test]
    fn test_pnc_bank_alternative() {
        let m = BANK_NAME.find("Welcome to PNC Bank").unwrap();
        assert_eq!(m.as_str(), "PNC Bank");
    }
}

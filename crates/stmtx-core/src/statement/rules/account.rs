//! Account number extraction.
//!
//! Two shapes are recognised: a labelled number ("Account Number: 1234-5678",
//! "Acct 9876") and a bare run of 12 to 16 digits anywhere in the text. The
//! bare form trades precision for recall: any other long digit run, such as a
//! routing number printed next to a check number, is also reported.

use super::normalize::normalize_account_number;
use super::patterns::ACCOUNT_NUMBER;
use super::{find_all, ExtractionMatch, FieldExtractor};

/// Account number extractor. Outputs the raw matched text, label included.
#[derive(Debug, Default, Clone, Copy)]
pub struct AccountNumberExtractor;

impl AccountNumberExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl FieldExtractor for AccountNumberExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        ACCOUNT_NUMBER
            .find(text)
            .map(|m| ExtractionMatch::new(m.as_str().to_string(), m.start(), m.end()))
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        find_all(&ACCOUNT_NUMBER, text)
    }
}

/// Extract the first account number as digits.
pub fn extract_account_number(text: &str) -> Option<String> {
    AccountNumberExtractor::new()
        .extract(text)
        .map(|m| normalize_account_number(&m.value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_labelled() {
        assert_eq!(
            extract_account_number("Account Number: 1234-5678"),
            Some("12345678".to_string())
        );
        assert_eq!(
            extract_account_number("Account No. 0012 3456 7890"),
            Some("001234567890".to_string())
        );
        assert_eq!(
            extract_account_number("Primary Acct - 4455"),
            Some("4455".to_string())
        );
    }

    #[test]
    fn test_extract_keeps_raw_match() {
        let m = AccountNumberExtractor::new()
            .extract("Statement\nAccount Number: 1234-5678\n")
            .unwrap();
        assert_eq!(m.value, "Account Number: 1234-5678");
        assert_eq!(m.position, (10, 35));
    }

    #[test]
    fn test_label_is_case_sensitive() {
        assert_eq!(extract_account_number("your account number: 9876 5432"), None);
    }

    #[test]
    fn test_extract_bare_digit_run() {
        assert_eq!(
            extract_account_number("Ref 000123456789 issued"),
            Some("000123456789".to_string())
        );
    }

    #[test]
    fn test_bare_run_also_matches_routing_numbers() {
        // Known precision trade-off: routing + check number concatenation
        let all = AccountNumberExtractor::new().extract_all("Routing 0210000210012345");
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].value, "0210000210012345");
    }

    #[test]
    fn test_short_bare_runs_are_ignored() {
        assert_eq!(extract_account_number("Invoice 12345678901"), None);
    }

    #[test]
    fn test_extract_all_in_order() {
        let text = "Account Number: 1111\nAcct 2222 ending\nref 333344445555";
        let values: Vec<String> = AccountNumberExtractor::new()
            .extract_all(text)
            .into_iter()
            .map(|m| normalize_account_number(&m.value))
            .collect();
        assert_eq!(values, vec!["1111", "2222", "333344445555"]);
    }
}

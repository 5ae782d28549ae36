//! Normalization of raw matched text into canonical field values.

use serde::{Deserialize, Serialize};

use super::patterns::{NON_DIGIT, NON_WORD};

/// A substring rewrite applied to title-cased bank names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankNameCorrection {
    /// Text to look for.
    pub pattern: String,
    /// Text to put in its place.
    pub replacement: String,
}

impl BankNameCorrection {
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }
}

/// Known-bad OCR outputs and their canonical forms, applied in order.
pub fn default_corrections() -> Vec<BankNameCorrection> {
    vec![
        BankNameCorrection::new("Chases", "Chase"),
        BankNameCorrection::new("Uppank", "Upbank"),
        BankNameCorrection::new("Pnc Access Checking Statement Pnc Bank", "PNC Bank"),
        BankNameCorrection::new("Wells Fargo Simple Business Checking", "Wells Fargo"),
        // Title-casing lowers "PNC"; restore it so the output is a fixed point.
        BankNameCorrection::new("Pnc Bank", "PNC Bank"),
    ]
}

/// Strip every non-digit character.
///
/// Digits are Unicode decimal digits, the same class the account matcher
/// accepts, so a matched account number never normalizes to empty.
pub fn normalize_account_number(raw: &str) -> String {
    NON_DIGIT.replace_all(raw, "").into_owned()
}

/// Clean a raw bank name using the default correction table.
pub fn normalize_bank_name(raw: &str) -> String {
    normalize_bank_name_with(raw, &default_corrections())
}

/// Clean a raw bank name: drop punctuation, collapse whitespace, title-case,
/// then apply `corrections` in order.
pub fn normalize_bank_name_with(raw: &str, corrections: &[BankNameCorrection]) -> String {
    let stripped = NON_WORD.replace_all(raw, "");

    let mut name = stripped
        .split_whitespace()
        .map(title_case_word)
        .collect::<Vec<_>>()
        .join(" ");

    for correction in corrections {
        if !correction.pattern.is_empty() && name.contains(&correction.pattern) {
            name = name.replace(&correction.pattern, &correction.replacement);
        }
    }

    name
}

fn title_case_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Collapse a multi-line match onto one line.
pub fn join_lines(raw: &str) -> String {
    raw.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize_account_number() {
        assert_eq!(normalize_account_number("Account Number: 1234-5678"), "12345678");
        assert_eq!(normalize_account_number("Acct 12 34"), "1234");
        assert_eq!(normalize_account_number("no digits"), "");
    }

    #[test]
    fn test_normalize_account_number_keeps_unicode_digits() {
        assert_eq!(
            normalize_account_number("Acct \u{0661}\u{0662}-\u{0663}"),
            "\u{0661}\u{0662}\u{0663}"
        );
    }

    #[test]
    fn test_normalize_bank_name_title_case() {
        assert_eq!(normalize_bank_name("wells fargo bank"), "Wells Fargo Bank");
        assert_eq!(normalize_bank_name("  BANK   of\namerica "), "Bank Of America");
    }

    #[test]
    fn test_normalize_bank_name_strips_punctuation() {
        assert_eq!(normalize_bank_name("U.S. Bank"), "Us Bank");
        assert_eq!(normalize_bank_name("Chase, N.A."), "Chase Na");
    }

    #[test]
    fn test_normalize_bank_name_corrections() {
        assert_eq!(normalize_bank_name("CHASES"), "Chase");
        assert_eq!(normalize_bank_name("uppank"), "Upbank");
        assert_eq!(
            normalize_bank_name("PNC access checking statement PNC Bank"),
            "PNC Bank"
        );
        assert_eq!(
            normalize_bank_name("Wells Fargo Simple Business Checking"),
            "Wells Fargo"
        );
        assert_eq!(normalize_bank_name("PNC Bank"), "PNC Bank");
    }

    #[test]
    fn test_corrections_apply_in_declared_order() {
        let table = vec![
            BankNameCorrection::new("Foo", "Bar"),
            BankNameCorrection::new("Bar", "Baz"),
        ];
        assert_eq!(normalize_bank_name_with("foo", &table), "Baz");

        let reversed = vec![
            BankNameCorrection::new("Bar", "Baz"),
            BankNameCorrection::new("Foo", "Bar"),
        ];
        assert_eq!(normalize_bank_name_with("foo", &reversed), "Bar");
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let inputs = [
            "wells fargo bank",
            "PNC Bank",
            "Pnc Access Checking Statement Pnc Bank",
            "CHASES",
            "U.S.  Bank",
            "JPMorgan\n Chase",
            "",
        ];
        for input in inputs {
            let once = normalize_bank_name(input);
            assert_eq!(normalize_bank_name(&once), once, "input: {input:?}");
        }

        for input in ["Account No. 12-34", "", "123456789012"] {
            let once = normalize_account_number(input);
            assert_eq!(normalize_account_number(&once), once);
        }
    }

    #[test]
    fn test_join_lines() {
        assert_eq!(
            join_lines("PO Box 123\n  Springfield IL 62701\n\n"),
            "PO Box 123 Springfield IL 62701"
        );
        assert_eq!(join_lines("single line"), "single line");
    }
}

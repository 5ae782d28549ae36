//! Rule-based field extractors for bank statements.

pub mod account;
pub mod address;
pub mod bank;
pub mod normalize;
pub mod patterns;
pub mod phone;

pub use account::{extract_account_number, AccountNumberExtractor};
pub use address::{extract_addresses, AddressExtractor};
pub use bank::{extract_bank_name, BankNameExtractor};
pub use normalize::{
    default_corrections, join_lines, normalize_account_number, normalize_bank_name,
    normalize_bank_name_with, BankNameCorrection,
};
pub use phone::{extract_phone_numbers, PhoneExtractor};

use regex::Regex;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the first occurrence of the field.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all non-overlapping occurrences, in text order.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// A single pattern match in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionMatch<T> {
    /// Matched value.
    pub value: T,
    /// Byte span in source text.
    pub position: (usize, usize),
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, start: usize, end: usize) -> Self {
        Self {
            value,
            position: (start, end),
        }
    }
}

/// Collect every non-overlapping match of `pattern` as raw text.
pub(crate) fn find_all(pattern: &Regex, text: &str) -> Vec<ExtractionMatch<String>> {
    pattern
        .find_iter(text)
        .map(|m| ExtractionMatch::new(m.as_str().to_string(), m.start(), m.end()))
        .collect()
}

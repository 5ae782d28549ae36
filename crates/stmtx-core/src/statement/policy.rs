//! Per-field selection among multiple candidate matches.

use super::rules::{
    AccountNumberExtractor, AddressExtractor, BankNameExtractor, ExtractionMatch, FieldExtractor,
    PhoneExtractor,
};

/// How many matches of a field are retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// Keep only the first match in document order.
    First,
    /// Keep every match in document order.
    All,
}

impl SelectionPolicy {
    /// Apply the policy to matches already in document order.
    pub fn select<T>(self, matches: Vec<T>) -> Vec<T> {
        match self {
            Self::First => matches.into_iter().take(1).collect(),
            Self::All => matches,
        }
    }
}

/// The fields extracted from a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    BankName,
    AccountNumber,
    Phone,
    Address,
}

impl FieldKind {
    /// Selection policy for this field.
    pub fn policy(self) -> SelectionPolicy {
        match self {
            Self::BankName | Self::AccountNumber => SelectionPolicy::First,
            Self::Phone | Self::Address => SelectionPolicy::All,
        }
    }

    /// Run this field's matcher over the whole text.
    pub fn matches(self, text: &str) -> Vec<ExtractionMatch<String>> {
        match self {
            Self::BankName => BankNameExtractor::new().extract_all(text),
            Self::AccountNumber => AccountNumberExtractor::new().extract_all(text),
            Self::Phone => PhoneExtractor::new().extract_all(text),
            Self::Address => AddressExtractor::new().extract_all(text),
        }
    }

    /// Run the matcher and apply the selection policy.
    pub fn select(self, text: &str) -> Vec<ExtractionMatch<String>> {
        self.policy().select(self.matches(text))
    }
}

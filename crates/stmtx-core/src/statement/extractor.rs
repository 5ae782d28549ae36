//! Assembles an extraction record from one document's text.

use tracing::debug;

use crate::models::record::ExtractionRecord;

use super::policy::FieldKind;
use super::rules::{
    default_corrections, join_lines, normalize_account_number, normalize_bank_name_with,
    BankNameCorrection,
};

/// Extracts bank statement fields from plain text.
///
/// Extraction never fails: fields without a match come back as `None`
/// (singular) or empty (plural).
#[derive(Debug, Clone)]
pub struct RecordExtractor {
    corrections: Vec<BankNameCorrection>,
}

impl RecordExtractor {
    /// Create an extractor with the default bank name corrections.
    pub fn new() -> Self {
        Self {
            corrections: default_corrections(),
        }
    }

    /// Replace the bank name correction table.
    pub fn with_corrections(mut self, corrections: Vec<BankNameCorrection>) -> Self {
        self.corrections = corrections;
        self
    }

    /// Extract a record from `text`.
    pub fn extract(&self, file_name: impl Into<String>, text: &str) -> ExtractionRecord {
        let file_name = file_name.into();

        let bank_name = FieldKind::BankName
            .select(text)
            .into_iter()
            .next()
            .map(|m| normalize_bank_name_with(&m.value, &self.corrections));

        let account_number = FieldKind::AccountNumber
            .select(text)
            .into_iter()
            .next()
            .map(|m| normalize_account_number(&m.value));

        let bank_contacts: Vec<String> = FieldKind::Phone
            .select(text)
            .into_iter()
            .map(|m| m.value)
            .collect();

        let bank_addresses: Vec<String> = FieldKind::Address
            .select(text)
            .into_iter()
            .map(|m| join_lines(&m.value))
            .collect();

        debug!(
            "Extracted {}: bank={:?}, account={:?}, {} addresses, {} contacts",
            file_name,
            bank_name,
            account_number,
            bank_addresses.len(),
            bank_contacts.len()
        );

        ExtractionRecord::new(
            file_name,
            bank_name,
            bank_addresses,
            bank_contacts,
            account_number,
        )
    }
}

impl Default for RecordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

//! Extraction records and batch result entries.
//!
//! Serialized field names follow the JSON layout consumers of the
//! statement extractor already read ("File Name", "Bank Name", ...).

use serde::{Deserialize, Serialize};

/// Placeholder for a singular field with no match.
pub const NOT_AVAILABLE: &str = "N/A";

/// Fields extracted from one statement document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionRecord {
    #[serde(rename = "File Name")]
    file_name: String,

    #[serde(rename = "Bank Name", with = "sentinel")]
    bank_name: Option<String>,

    #[serde(rename = "Bank Address")]
    bank_addresses: Vec<String>,

    #[serde(rename = "Bank Contacts")]
    bank_contacts: Vec<String>,

    #[serde(rename = "Account Number", with = "sentinel")]
    account_number: Option<String>,
}

impl ExtractionRecord {
    pub(crate) fn new(
        file_name: String,
        bank_name: Option<String>,
        bank_addresses: Vec<String>,
        bank_contacts: Vec<String>,
        account_number: Option<String>,
    ) -> Self {
        Self {
            file_name,
            bank_name,
            bank_addresses,
            bank_contacts,
            account_number,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Normalized bank name, `None` when no known bank was found.
    pub fn bank_name(&self) -> Option<&str> {
        self.bank_name.as_deref()
    }

    pub fn bank_name_or_sentinel(&self) -> &str {
        self.bank_name().unwrap_or(NOT_AVAILABLE)
    }

    /// Addresses in document order, one line each.
    pub fn bank_addresses(&self) -> &[String] {
        &self.bank_addresses
    }

    /// Phone numbers in document order, as printed.
    pub fn bank_contacts(&self) -> &[String] {
        &self.bank_contacts
    }

    /// Account number digits, `None` when no account number was found.
    pub fn account_number(&self) -> Option<&str> {
        self.account_number.as_deref()
    }

    pub fn account_number_or_sentinel(&self) -> &str {
        self.account_number().unwrap_or(NOT_AVAILABLE)
    }
}

/// A document whose text could not be acquired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedDocument {
    #[serde(rename = "File Name")]
    pub file_name: String,

    #[serde(rename = "Error")]
    pub error: String,
}

/// One entry of a batch run, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BatchEntry {
    Record(ExtractionRecord),
    Failed(FailedDocument),
}

impl BatchEntry {
    pub fn file_name(&self) -> &str {
        match self {
            Self::Record(record) => record.file_name(),
            Self::Failed(failed) => &failed.file_name,
        }
    }

    pub fn record(&self) -> Option<&ExtractionRecord> {
        match self {
            Self::Record(record) => Some(record),
            Self::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Record(_) => None,
            Self::Failed(failed) => Some(&failed.error),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

mod sentinel {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::NOT_AVAILABLE;

    pub fn serialize<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(value.as_deref().unwrap_or(NOT_AVAILABLE))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok((value != NOT_AVAILABLE).then_some(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample() -> ExtractionRecord {
        ExtractionRecord::new(
            "statement.png".to_string(),
            Some("Wells Fargo".to_string()),
            vec!["PO Box 6995 Portland, OR 97228-6995".to_string()],
            vec!["1-800-225-5935".to_string()],
            None,
        )
    }

    #[test]
    fn test_record_json_layout() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!({
                "File Name": "statement.png",
                "Bank Name": "Wells Fargo",
                "Bank Address": ["PO Box 6995 Portland, OR 97228-6995"],
                "Bank Contacts": ["1-800-225-5935"],
                "Account Number": "N/A",
            })
        );
    }

    #[test]
    fn test_failed_json_layout() {
        let entry = BatchEntry::Failed(FailedDocument {
            file_name: "broken.pdf".to_string(),
            error: "PDF error: PDF has no pages".to_string(),
        });
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            json!({ "File Name": "broken.pdf", "Error": "PDF error: PDF has no pages" })
        );
    }

    #[test]
    fn test_entries_read_back() {
        let json = r#"[
            {"File Name": "a.png", "Bank Name": "N/A", "Bank Address": [],
             "Bank Contacts": [], "Account Number": "1234"},
            {"File Name": "b.png", "Error": "image error: bad header"}
        ]"#;
        let entries: Vec<BatchEntry> = serde_json::from_str(json).unwrap();

        let record = entries[0].record().unwrap();
        assert_eq!(record.bank_name(), None);
        assert_eq!(record.account_number(), Some("1234"));
        assert_eq!(entries[1].error(), Some("image error: bad header"));
        assert_eq!(entries[1].file_name(), "b.png");
    }
}

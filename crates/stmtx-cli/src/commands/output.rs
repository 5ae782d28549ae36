//! Result sinks: a JSON array or CSV rows.

use std::fs;
use std::path::Path;

use clap::ValueEnum;
use tracing::debug;

use stmtx_core::BatchEntry;

/// Separator for list fields in CSV cells.
const LIST_SEPARATOR: &str = "; ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON array
    Json,
    /// One CSV row per document
    Csv,
}

/// Render all entries in the given format.
pub fn render(entries: &[BatchEntry], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(entries)?),
        OutputFormat::Csv => render_csv(entries),
    }
}

/// Render and write entries to `path`.
pub fn write_entries(
    path: &Path,
    entries: &[BatchEntry],
    format: OutputFormat,
) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, render(entries, format)?)?;
    debug!("Wrote {} entries to {}", entries.len(), path.display());
    Ok(())
}

fn render_csv(entries: &[BatchEntry]) -> anyhow::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "file_name",
        "status",
        "bank_name",
        "bank_addresses",
        "bank_contacts",
        "account_number",
        "error",
    ])?;

    for entry in entries {
        match entry {
            BatchEntry::Record(record) => {
                let addresses = record.bank_addresses().join(LIST_SEPARATOR);
                let contacts = record.bank_contacts().join(LIST_SEPARATOR);
                writer.write_record([
                    record.file_name(),
                    "ok",
                    record.bank_name_or_sentinel(),
                    addresses.as_str(),
                    contacts.as_str(),
                    record.account_number_or_sentinel(),
                    "",
                ])?
            }
            BatchEntry::Failed(failed) => writer.write_record([
                failed.file_name.as_str(),
                "error",
                "",
                "",
                "",
                "",
                failed.error.as_str(),
            ])?,
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("failed to flush CSV: {}", e))?;
    Ok(String::from_utf8(bytes)?)
}

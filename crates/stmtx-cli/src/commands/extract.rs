//! Extract command - run the batch over a folder or glob pattern.

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use stmtx_core::{discover_documents, discover_glob, BatchRunner, Document, DocumentTextSource};

use super::load_config;
use super::output::{write_entries, OutputFormat};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Folder of statements, or a glob pattern such as "statements/*.pdf"
    #[arg(required = true)]
    input: String,

    /// Output file
    #[arg(short, long, default_value = "extracted_data.json")]
    output: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

pub async fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let documents = find_documents(&args.input)?;
    if documents.is_empty() {
        println!(
            "{} No supported documents found in {}",
            style("ℹ").blue(),
            args.input
        );
    } else {
        println!(
            "{} Found {} documents to process",
            style("ℹ").blue(),
            documents.len()
        );
    }

    let source = DocumentTextSource::new(&config);
    if !source.has_ocr() {
        println!(
            "{} OCR models not loaded, image documents will be reported as errors",
            style("⚠").yellow()
        );
    }

    let pb = ProgressBar::new(documents.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("=>-"),
    );

    let runner = BatchRunner::new(config.extraction.extractor());
    let entries = runner.run_source_observed(&source, &documents, |entry| {
        pb.set_message(entry.file_name().to_string());
        pb.inc(1);
    });
    pb.finish_and_clear();

    write_entries(&args.output, &entries, args.format)?;

    let failed: Vec<_> = entries.iter().filter(|e| e.is_failure()).collect();
    info!(
        "Extracted {} documents in {:?}",
        entries.len(),
        start.elapsed()
    );

    println!(
        "{} Processed {} documents in {:.1}s",
        style("✓").green(),
        entries.len(),
        start.elapsed().as_secs_f64()
    );
    println!(
        "  {} succeeded, {} failed",
        style(entries.len() - failed.len()).green(),
        style(failed.len()).red()
    );
    for entry in &failed {
        println!(
            "  {} {}: {}",
            style("✗").red(),
            entry.file_name(),
            entry.error().unwrap_or_default()
        );
    }
    println!(
        "{} Results written to {}",
        style("✓").green(),
        args.output.display()
    );

    Ok(())
}

/// A directory is scanned; anything else is treated as a glob pattern.
fn find_documents(input: &str) -> anyhow::Result<Vec<Document>> {
    let path = Path::new(input);
    if path.is_dir() || !is_pattern(input) {
        return Ok(discover_documents(path)?);
    }
    Ok(discover_glob(input)?)
}

fn is_pattern(input: &str) -> bool {
    input.contains(['*', '?', '['])
}

//! Fetch command - download one statement and extract its fields.

use std::path::PathBuf;
use std::time::Duration;

use clap::Args;
use console::style;
use futures_util::StreamExt;
use tracing::{debug, info};

use stmtx_core::models::config::FetchConfig;
use stmtx_core::{AcquisitionError, BatchEntry, BatchRunner, DocumentKind, DocumentTextSource};

use super::load_config;
use super::output::{write_entries, OutputFormat};

/// Arguments for the fetch command.
#[derive(Args)]
pub struct FetchArgs {
    /// URL of the statement image
    url: String,

    /// Write results to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

pub async fn run(args: FetchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let client = build_client(&config.fetch)?;

    let source = DocumentTextSource::new(&config);
    let runner = BatchRunner::new(config.extraction.extractor());

    let fetched = fetch_document(&client, &args.url, config.fetch.max_bytes).await;
    let entries = extract_fetched(&runner, &source, &args.url, fetched);

    match args.output {
        Some(path) => {
            write_entries(&path, &entries, args.format)?;
            println!(
                "{} Results written to {}",
                style("✓").green(),
                path.display()
            );
        }
        None => println!("{}", super::output::render(&entries, args.format)?),
    }

    Ok(())
}

/// HTTP client with the configured timeout and user agent.
pub fn build_client(config: &FetchConfig) -> anyhow::Result<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(config.user_agent.as_str())
        .build()?)
}

/// Download a document body, refusing bodies larger than `max_bytes`.
pub async fn fetch_document(
    client: &reqwest::Client,
    url: &str,
    max_bytes: u64,
) -> Result<Vec<u8>, AcquisitionError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| AcquisitionError::Fetch(e.to_string()))?;

    if !response.status().is_success() {
        return Err(AcquisitionError::Fetch(format!("HTTP {}", response.status())));
    }

    if let Some(length) = response.content_length() {
        if length > max_bytes {
            return Err(AcquisitionError::Fetch(format!(
                "body of {} bytes exceeds limit of {}",
                length, max_bytes
            )));
        }
    }

    let mut body = Vec::new();
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| AcquisitionError::Fetch(e.to_string()))?;
        if (body.len() + chunk.len()) as u64 > max_bytes {
            return Err(AcquisitionError::Fetch(format!(
                "body exceeds limit of {} bytes",
                max_bytes
            )));
        }
        body.extend_from_slice(&chunk);
    }

    debug!("Fetched {} bytes from {}", body.len(), url);
    Ok(body)
}

/// Identifier and kind for a remote document.
///
/// The identifier is the last path segment of the URL. Anything not named
/// `.pdf` is treated as an image.
pub fn remote_document(url: &str) -> (String, DocumentKind) {
    let path = url
        .split(['?', '#'])
        .next()
        .unwrap_or(url)
        .trim_end_matches('/');
    let name = path
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty() && !segment.contains(':'))
        .unwrap_or(url)
        .to_string();

    let kind = std::path::Path::new(&name)
        .extension()
        .and_then(|e| e.to_str())
        .and_then(DocumentKind::from_extension)
        .unwrap_or(DocumentKind::Image);

    (name, kind)
}

/// Run one fetched document through the batch runner.
///
/// Blocking: may run OCR recognition.
pub fn extract_fetched(
    runner: &BatchRunner,
    source: &DocumentTextSource,
    url: &str,
    fetched: Result<Vec<u8>, AcquisitionError>,
) -> Vec<BatchEntry> {
    let (name, kind) = remote_document(url);
    info!("Extracting {} as {:?}", name, kind);

    runner.run([(name, move || {
        fetched.and_then(|bytes| source.text_of_bytes(&bytes, kind))
    })])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use stmtx_core::models::config::PdfConfig;

    #[test]
    fn test_remote_document_names() {
        assert_eq!(
            remote_document("https://bank.example/scans/june.png?token=abc"),
            ("june.png".to_string(), DocumentKind::Image)
        );
        assert_eq!(
            remote_document("https://bank.example/statements/2024-06.PDF"),
            ("2024-06.PDF".to_string(), DocumentKind::Pdf)
        );
        assert_eq!(
            remote_document("https://bank.example/"),
            ("bank.example".to_string(), DocumentKind::Image)
        );
    }

    #[test]
    fn test_fetch_failure_becomes_error_entry() {
        let source = DocumentTextSource::without_ocr(PdfConfig::default());
        let entries = extract_fetched(
            &BatchRunner::default(),
            &source,
            "https://bank.example/scan.png",
            Err(AcquisitionError::Fetch("HTTP 404 Not Found".to_string())),
        );

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].file_name(), "scan.png");
        assert_eq!(entries[0].error(), Some("fetch failed: HTTP 404 Not Found"));
    }

    #[tokio::test]
    async fn test_unreachable_host() {
        let client = build_client(&FetchConfig {
            timeout_secs: 2,
            ..FetchConfig::default()
        })
        .unwrap();

        let err = fetch_document(&client, "http://127.0.0.1:9/statement.png", 1024)
            .await
            .unwrap_err();
        assert!(matches!(err, AcquisitionError::Fetch(_)));
    }
}

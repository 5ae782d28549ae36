//! Batch processing with per-document error isolation.

use tracing::{info, warn};

use crate::error::AcquisitionError;
use crate::models::record::{BatchEntry, FailedDocument};
use crate::source::{Document, TextSource};
use crate::statement::RecordExtractor;

/// Something that can produce a document's text once.
pub trait TextProvider {
    fn provide(self) -> Result<String, AcquisitionError>;
}

impl<F> TextProvider for F
where
    F: FnOnce() -> Result<String, AcquisitionError>,
{
    fn provide(self) -> Result<String, AcquisitionError> {
        self()
    }
}

/// Runs extraction over an ordered collection of documents.
///
/// A document whose text cannot be acquired becomes a failure entry; the
/// remaining documents are still processed. Output order equals input order.
#[derive(Debug, Clone, Default)]
pub struct BatchRunner {
    extractor: RecordExtractor,
}

impl BatchRunner {
    pub fn new(extractor: RecordExtractor) -> Self {
        Self { extractor }
    }

    /// Process `(identifier, provider)` pairs in order.
    pub fn run<I, P>(&self, documents: I) -> Vec<BatchEntry>
    where
        I: IntoIterator<Item = (String, P)>,
        P: TextProvider,
    {
        self.run_observed(documents, |_| {})
    }

    /// Like [`run`](Self::run), calling `observer` after each document.
    pub fn run_observed<I, P, O>(&self, documents: I, mut observer: O) -> Vec<BatchEntry>
    where
        I: IntoIterator<Item = (String, P)>,
        P: TextProvider,
        O: FnMut(&BatchEntry),
    {
        let documents = documents.into_iter();
        let mut entries = Vec::with_capacity(documents.size_hint().0);

        for (name, provider) in documents {
            let entry = match provider.provide() {
                Ok(text) => BatchEntry::Record(self.extractor.extract(name, &text)),
                Err(e) => {
                    warn!("Failed to process {}: {}", name, e);
                    BatchEntry::Failed(FailedDocument {
                        file_name: name,
                        error: e.to_string(),
                    })
                }
            };

            observer(&entry);
            entries.push(entry);
        }

        let failed = entries.iter().filter(|e| e.is_failure()).count();
        info!(
            "Batch complete: {} documents, {} failed",
            entries.len(),
            failed
        );

        entries
    }

    /// Process documents through a [`TextSource`].
    pub fn run_source<S>(&self, source: &S, documents: &[Document]) -> Vec<BatchEntry>
    where
        S: TextSource + ?Sized,
    {
        self.run_source_observed(source, documents, |_| {})
    }

    /// Like [`run_source`](Self::run_source), calling `observer` after each document.
    pub fn run_source_observed<S, O>(
        &self,
        source: &S,
        documents: &[Document],
        observer: O,
    ) -> Vec<BatchEntry>
    where
        S: TextSource + ?Sized,
        O: FnMut(&BatchEntry),
    {
        self.run_observed(
            documents
                .iter()
                .map(|doc| (doc.name.clone(), move || source.text_of(doc))),
            observer,
        )
    }
}

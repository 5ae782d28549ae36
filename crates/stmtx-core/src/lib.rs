//! Core library for bank statement field extraction.
//!
//! This crate provides:
//! - Rule-based field extraction (bank name, addresses, phone numbers, account number)
//! - Batch processing with per-document error isolation
//! - Document text sources (PDF embedded text, OCR on images)
//! - Record and configuration models

pub mod batch;
pub mod error;
pub mod models;
#[cfg(feature = "native")]
pub mod ocr;
pub mod pdf;
pub mod source;
pub mod statement;

pub use batch::{BatchRunner, TextProvider};
pub use error::{AcquisitionError, OcrError, PdfError, Result, StmtxError};
pub use models::config::StmtxConfig;
pub use models::record::{BatchEntry, ExtractionRecord, FailedDocument, NOT_AVAILABLE};
pub use pdf::PdfExtractor;
pub use source::{
    discover_documents, discover_glob, Document, DocumentKind, DocumentTextSource, TextSource,
};
pub use statement::{FieldKind, RecordExtractor, SelectionPolicy};

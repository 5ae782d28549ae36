//! Error types for the stmtx-core library.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the stmtx library.
#[derive(Error, Debug)]
pub enum StmtxError {
    /// The requested input kind is not handled (document type or file extension).
    #[error("unsupported input: {0}")]
    UnsupportedInput(String),

    /// The folder to scan does not exist or is not a directory.
    #[error("folder not found: {}", .0.display())]
    FolderNotFound(PathBuf),

    /// Invalid glob pattern for document discovery.
    #[error("invalid pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// Text could not be acquired for a single document.
    #[error("acquisition error: {0}")]
    Acquisition(#[from] AcquisitionError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Failure of the text-producing collaborator for one document.
///
/// These are recovered at the batch boundary and recorded per document.
#[derive(Error, Debug)]
pub enum AcquisitionError {
    /// The document could not be read from disk.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// OCR processing error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// The image could not be decoded.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// A remote document could not be fetched.
    #[error("fetch failed: {0}")]
    Fetch(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Errors related to OCR processing.
#[derive(Error, Debug)]
pub enum OcrError {
    /// Failed to load OCR models.
    #[error("failed to load model: {0}")]
    ModelLoad(String),

    /// Text recognition failed.
    #[error("text recognition failed: {0}")]
    Recognition(String),

    /// No OCR engine is available for image documents.
    #[error("OCR unavailable: {0}")]
    Unavailable(String),
}

/// Result type for the stmtx library.
pub type Result<T> = std::result::Result<T, StmtxError>;

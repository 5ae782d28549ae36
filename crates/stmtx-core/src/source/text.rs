//! Text acquisition from PDF and image documents.

use tracing::{debug, info, warn};

use super::{Document, DocumentKind, TextSource};
use crate::error::{AcquisitionError, OcrError};
use crate::models::config::{PdfConfig, StmtxConfig};
use crate::pdf::PdfExtractor;

#[cfg(feature = "native")]
use crate::ocr::PureOcrEngine;

/// Reads documents from disk and turns them into text.
///
/// PDFs use their embedded text. Images, and PDFs with too little embedded
/// text, go through OCR when the models are available.
pub struct DocumentTextSource {
    pdf: PdfConfig,
    #[cfg(feature = "native")]
    engine: Option<PureOcrEngine>,
    /// Why OCR is unavailable, when it is.
    ocr_unavailable: Option<String>,
}

impl DocumentTextSource {
    /// Build a source from configuration, loading the OCR models.
    ///
    /// Model loading failures are not fatal: PDFs with embedded text still
    /// process and image documents fail individually.
    #[cfg(feature = "native")]
    pub fn new(config: &StmtxConfig) -> Self {
        match PureOcrEngine::from_config(&config.ocr) {
            Ok(engine) => Self {
                pdf: config.pdf.clone(),
                engine: Some(engine),
                ocr_unavailable: None,
            },
            Err(e) => {
                warn!("OCR disabled: {}", e);
                Self::unavailable(config.pdf.clone(), e.to_string())
            }
        }
    }

    #[cfg(not(feature = "native"))]
    pub fn new(config: &StmtxConfig) -> Self {
        Self::without_ocr(config.pdf.clone())
    }

    /// A source that only reads embedded PDF text.
    pub fn without_ocr(pdf: PdfConfig) -> Self {
        Self::unavailable(pdf, "OCR is disabled".to_string())
    }

    fn unavailable(pdf: PdfConfig, reason: String) -> Self {
        Self {
            pdf,
            #[cfg(feature = "native")]
            engine: None,
            ocr_unavailable: Some(reason),
        }
    }

    pub fn has_ocr(&self) -> bool {
        self.ocr_unavailable.is_none()
    }

    /// Text of an in-memory document, such as one fetched over HTTP.
    pub fn text_of_bytes(
        &self,
        bytes: &[u8],
        kind: DocumentKind,
    ) -> Result<String, AcquisitionError> {
        match kind {
            DocumentKind::Pdf => self.pdf_text(bytes),
            DocumentKind::Image => {
                let image = image::load_from_memory(bytes)?;
                self.recognize(&[image])
            }
        }
    }

    fn pdf_text(&self, bytes: &[u8]) -> Result<String, AcquisitionError> {
        let pdf = PdfExtractor::load(bytes)?;
        let text = pdf.extract_text()?;

        let text_len = text.trim().len();
        if text_len >= self.pdf.min_text_length || !self.pdf.ocr_fallback {
            return Ok(text);
        }
        if !self.has_ocr() {
            debug!("PDF has {} chars of text and OCR is unavailable", text_len);
            return Ok(text);
        }

        let images = pdf.page_images();
        if images.is_empty() {
            return Ok(text);
        }

        info!(
            "PDF has {} chars of text, running OCR on {} page images",
            text_len,
            images.len()
        );
        self.recognize(&images)
    }

    #[cfg(feature = "native")]
    fn recognize(&self, images: &[image::DynamicImage]) -> Result<String, AcquisitionError> {
        let engine = self.engine.as_ref().ok_or_else(|| self.unavailable_error())?;

        let mut pages = Vec::with_capacity(images.len());
        for image in images {
            pages.push(engine.extract_text(image)?);
        }
        Ok(pages.join("\n"))
    }

    #[cfg(not(feature = "native"))]
    fn recognize(&self, _images: &[image::DynamicImage]) -> Result<String, AcquisitionError> {
        Err(self.unavailable_error())
    }

    fn unavailable_error(&self) -> AcquisitionError {
        let reason = self
            .ocr_unavailable
            .clone()
            .unwrap_or_else(|| "no OCR engine".to_string());
        OcrError::Unavailable(reason).into()
    }
}

impl TextSource for DocumentTextSource {
    fn text_of(&self, document: &Document) -> Result<String, AcquisitionError> {
        debug!("Reading {}", document.path.display());
        let bytes = std::fs::read(&document.path).map_err(|source| AcquisitionError::Read {
            path: document.path.clone(),
            source,
        })?;
        self.text_of_bytes(&bytes, document.kind)
    }
}

//! PDF text and embedded image extraction.

mod extractor;

pub use extractor::PdfExtractor;

#[cfg(test)]
pub(crate) use extractor::fixtures;

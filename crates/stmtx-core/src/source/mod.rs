//! Where document text comes from.

mod discover;
mod text;

pub use discover::{discover_documents, discover_glob, Document, DocumentKind};
pub use text::DocumentTextSource;

use crate::error::AcquisitionError;

/// Produces the plain text of one document.
pub trait TextSource {
    fn text_of(&self, document: &Document) -> Result<String, AcquisitionError>;
}

impl<T: TextSource + ?Sized> TextSource for &T {
    fn text_of(&self, document: &Document) -> Result<String, AcquisitionError> {
        (**self).text_of(document)
    }
}

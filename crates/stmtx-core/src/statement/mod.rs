//! Bank statement field extraction.

mod extractor;
mod policy;
pub mod rules;

pub use extractor::RecordExtractor;
pub use policy::{FieldKind, SelectionPolicy};

//! PDF loading with lopdf and text extraction with pdf-extract.

use std::panic::{catch_unwind, AssertUnwindSafe};

use image::{DynamicImage, GrayImage, ImageFormat, RgbImage};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use tracing::{debug, trace, warn};

use crate::error::PdfError;

/// A loaded PDF document.
pub struct PdfExtractor {
    document: Document,
    /// Bytes handed to pdf-extract; the decrypted copy for encrypted inputs.
    raw_data: Vec<u8>,
}

impl PdfExtractor {
    /// Parse a PDF from memory.
    ///
    /// Documents encrypted with an empty user password are decrypted.
    pub fn load(data: &[u8]) -> Result<Self, PdfError> {
        let mut document = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        let raw_data = if document.is_encrypted() {
            document.decrypt("").map_err(|_| PdfError::Encrypted)?;
            debug!("Decrypted PDF with empty password");

            let mut decrypted = Vec::new();
            document
                .save_to(&mut decrypted)
                .map_err(|e| PdfError::Parse(format!("failed to save decrypted PDF: {}", e)))?;
            decrypted
        } else {
            data.to_vec()
        };

        if document.get_pages().is_empty() {
            return Err(PdfError::NoPages);
        }

        debug!("Loaded PDF with {} pages", document.get_pages().len());
        Ok(Self { document, raw_data })
    }

    /// Embedded text of all pages.
    ///
    /// pdf-extract panics on some malformed inputs that lopdf accepts (such as
    /// a `Tf` naming a font missing from the page resources); those panics
    /// are reported as extraction errors.
    pub fn extract_text(&self) -> Result<String, PdfError> {
        let extracted =
            catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(&self.raw_data)));

        match extracted {
            Ok(result) => result.map_err(|e| PdfError::TextExtraction(e.to_string())),
            Err(panic_info) => {
                let message = if let Some(s) = panic_info.downcast_ref::<&str>() {
                    (*s).to_string()
                } else if let Some(s) = panic_info.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "unknown panic".to_string()
                };
                warn!("pdf-extract panicked: {}", message);
                Err(PdfError::TextExtraction(format!(
                    "text extractor panicked: {}",
                    message
                )))
            }
        }
    }

    /// Decodable image XObjects, page by page in page order.
    pub fn page_images(&self) -> Vec<DynamicImage> {
        let mut images = Vec::new();

        for (number, page_id) in self.document.get_pages() {
            let Some(resources) = self.resources_of(page_id) else {
                trace!("Page {} has no resources", number);
                continue;
            };
            let Ok(xobjects) = resources.get(b"XObject") else {
                continue;
            };
            let Ok((_, Object::Dictionary(xobjects))) = self.document.dereference(xobjects) else {
                continue;
            };

            for (_, reference) in xobjects.iter() {
                if let Ok((_, Object::Stream(stream))) = self.document.dereference(reference) {
                    if let Some(image) = self.decode_image(stream) {
                        images.push(image);
                    }
                }
            }
        }

        debug!("Found {} page images", images.len());
        images
    }

    /// Resources of a page, walking up the page tree for inherited entries.
    fn resources_of(&self, node_id: ObjectId) -> Option<Dictionary> {
        let Ok(Object::Dictionary(node)) = self.document.get_object(node_id) else {
            return None;
        };

        if let Ok(resources) = node.get(b"Resources") {
            if let Ok((_, Object::Dictionary(resources))) = self.document.dereference(resources) {
                return Some(resources.clone());
            }
        }

        match node.get(b"Parent") {
            Ok(Object::Reference(parent_id)) => self.resources_of(*parent_id),
            _ => None,
        }
    }

    fn decode_image(&self, stream: &Stream) -> Option<DynamicImage> {
        let dict = &stream.dict;
        if dict.get(b"Subtype").ok()?.as_name().ok()? != b"Image" {
            return None;
        }

        let width = u32::try_from(dict.get(b"Width").ok()?.as_i64().ok()?).ok()?;
        let height = u32::try_from(dict.get(b"Height").ok()?.as_i64().ok()?).ok()?;
        trace!("Image XObject {}x{}", width, height);

        let filter = dict.get(b"Filter").ok().and_then(|filter| match filter {
            Object::Name(name) => Some(name.as_slice()),
            Object::Array(filters) => filters.last().and_then(|f| f.as_name().ok()),
            _ => None,
        });

        match filter {
            Some(b"DCTDecode") => {
                return image::load_from_memory_with_format(&stream.content, ImageFormat::Jpeg)
                    .ok();
            }
            Some(b"JPXDecode") | Some(b"CCITTFaxDecode") | Some(b"JBIG2Decode") => {
                trace!("Skipping image with unsupported filter");
                return None;
            }
            _ => {}
        }

        let bits = dict
            .get(b"BitsPerComponent")
            .ok()
            .and_then(|o| o.as_i64().ok())
            .unwrap_or(8);
        if bits != 8 {
            trace!("Skipping image with {} bits per component", bits);
            return None;
        }

        let data = stream
            .decompressed_content()
            .unwrap_or_else(|_| stream.content.clone());
        let pixels = (width as usize) * (height as usize);

        match self.color_space(dict)? {
            b"DeviceRGB" | b"RGB" if data.len() >= pixels * 3 => {
                RgbImage::from_raw(width, height, data[..pixels * 3].to_vec())
                    .map(DynamicImage::ImageRgb8)
            }
            b"DeviceGray" | b"G" if data.len() >= pixels => {
                GrayImage::from_raw(width, height, data[..pixels].to_vec())
                    .map(DynamicImage::ImageLuma8)
            }
            other => {
                trace!(
                    "Cannot decode {} bytes as {}",
                    data.len(),
                    String::from_utf8_lossy(other)
                );
                None
            }
        }
    }

    fn color_space<'a>(&'a self, dict: &'a Dictionary) -> Option<&'a [u8]> {
        let Ok(space) = dict.get(b"ColorSpace") else {
            return Some(b"DeviceRGB");
        };
        match space {
            Object::Name(name) => Some(name.as_slice()),
            Object::Array(parts) => parts.first().and_then(|o| o.as_name().ok()),
            Object::Reference(id) => self.document.get_object(*id).ok()?.as_name().ok(),
            _ => None,
        }
    }
}

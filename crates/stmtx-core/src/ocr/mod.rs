//! OCR for scanned statements, backed by `pure-onnx-ocr`.

mod engine;

pub use engine::PureOcrEngine;

use serde::{Deserialize, Serialize};

/// Height of a reading-order row, in pixels.
const ROW_HEIGHT: f32 = 20.0;

/// A recognized text region.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextBox {
    /// Quadrilateral corners (x1, y1, x2, y2, x3, y3, x4, y4).
    pub bbox: [f32; 8],

    pub text: String,

    /// Recognition confidence (0.0 - 1.0).
    pub confidence: f32,
}

impl TextBox {
    /// Axis-aligned bounding rectangle as (min_x, min_y, max_x, max_y).
    pub fn rect(&self) -> (f32, f32, f32, f32) {
        let xs = [self.bbox[0], self.bbox[2], self.bbox[4], self.bbox[6]];
        let ys = [self.bbox[1], self.bbox[3], self.bbox[5], self.bbox[7]];

        (
            xs.into_iter().fold(f32::INFINITY, f32::min),
            ys.into_iter().fold(f32::INFINITY, f32::min),
            xs.into_iter().fold(f32::NEG_INFINITY, f32::max),
            ys.into_iter().fold(f32::NEG_INFINITY, f32::max),
        )
    }

    fn row(&self) -> i32 {
        (self.rect().1 / ROW_HEIGHT) as i32
    }
}

/// OCR output for one image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrResult {
    /// Text boxes in reading order.
    pub boxes: Vec<TextBox>,

    /// Box texts joined with newlines.
    pub text: String,

    /// Image dimensions (width, height).
    pub image_size: (u32, u32),

    pub processing_time_ms: u64,
}

impl OcrResult {
    /// Build a result, ordering boxes top-to-bottom then left-to-right.
    pub fn from_boxes(
        mut boxes: Vec<TextBox>,
        image_size: (u32, u32),
        processing_time_ms: u64,
    ) -> Self {
        boxes.sort_by(|a, b| {
            a.row().cmp(&b.row()).then_with(|| {
                a.rect()
                    .0
                    .partial_cmp(&b.rect().0)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
        });

        let text = boxes
            .iter()
            .map(|b| b.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        Self {
            boxes,
            text,
            image_size,
            processing_time_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text_box(text: &str, x: f32, y: f32) -> TextBox {
        TextBox {
            bbox: [x, y, x + 50.0, y, x + 50.0, y + 10.0, x, y + 10.0],
            text: text.to_string(),
            confidence: 0.9,
        }
    }

    #[test]
    fn test_rect() {
        let b = text_box("a", 10.0, 5.0);
        assert_eq!(b.rect(), (10.0, 5.0, 60.0, 15.0));
    }

    #[test]
    fn test_reading_order() {
        let result = OcrResult::from_boxes(
            vec![
                text_box("1-800-935-9935", 300.0, 45.0),
                text_box("Account Number:", 10.0, 42.0),
                text_box("JPMorgan Chase Bank", 10.0, 3.0),
            ],
            (600, 800),
            12,
        );

        assert_eq!(
            result.text,
            "JPMorgan Chase Bank\nAccount Number:\n1-800-935-9935"
        );
    }

    #[test]
    fn test_empty_result() {
        let result = OcrResult::from_boxes(Vec::new(), (10, 10), 0);
        assert!(result.text.is_empty());
    }
}

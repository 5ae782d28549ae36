//! `pure-onnx-ocr` engine wrapper.

use std::time::Instant;

use image::{DynamicImage, GenericImageView};
use tracing::{debug, info};

use super::{OcrResult, TextBox};
use crate::error::OcrError;
use crate::models::config::OcrConfig;

const UNKNOWN_TOKEN: &str = "[UNK]";

/// OCR engine backed by `pure-onnx-ocr` (pure Rust, no external ONNX Runtime).
pub struct PureOcrEngine {
    engine: pure_onnx_ocr::engine::OcrEngine,
    keep_unk: bool,
}

impl PureOcrEngine {
    /// Load the detection model, recognition model and dictionary named in `config`.
    pub fn from_config(config: &OcrConfig) -> Result<Self, OcrError> {
        for path in [
            config.detection_path(),
            config.recognition_path(),
            config.dictionary_path(),
        ] {
            if !path.is_file() {
                return Err(OcrError::ModelLoad(format!(
                    "missing model file {}",
                    path.display()
                )));
            }
        }

        let engine = pure_onnx_ocr::engine::OcrEngineBuilder::new()
            .det_model_path(&config.detection_path())
            .rec_model_path(&config.recognition_path())
            .dictionary_path(&config.dictionary_path())
            .build()
            .map_err(|e| OcrError::ModelLoad(format!("pure-onnx-ocr: {}", e)))?;

        info!("Loaded OCR models from {}", config.model_dir.display());

        Ok(Self {
            engine,
            keep_unk: config.keep_unk,
        })
    }

    /// Load models from `model_dir`, using the file names in `config`.
    pub fn from_dir(
        model_dir: impl Into<std::path::PathBuf>,
        config: OcrConfig,
    ) -> Result<Self, OcrError> {
        Self::from_config(&OcrConfig {
            model_dir: model_dir.into(),
            ..config
        })
    }

    /// Recognize text regions in an image.
    pub fn process(&self, image: &DynamicImage) -> Result<OcrResult, OcrError> {
        let start = Instant::now();
        let (width, height) = image.dimensions();
        debug!("Running OCR on {}x{} image", width, height);

        let results = self
            .engine
            .run_from_image(image)
            .map_err(|e| OcrError::Recognition(format!("pure-onnx-ocr: {}", e)))?;

        let boxes = results
            .iter()
            .map(|r| TextBox {
                bbox: polygon_to_bbox(&r.bounding_box),
                text: if self.keep_unk {
                    r.text.clone()
                } else {
                    r.text.replace(UNKNOWN_TOKEN, " ")
                },
                confidence: r.confidence,
            })
            .collect();

        let elapsed = start.elapsed().as_millis() as u64;
        let result = OcrResult::from_boxes(boxes, (width, height), elapsed);

        info!(
            "OCR complete: {} text boxes in {}ms",
            result.boxes.len(),
            elapsed
        );
        Ok(result)
    }

    /// Recognize an image and return its text only.
    pub fn extract_text(&self, image: &DynamicImage) -> Result<String, OcrError> {
        Ok(self.process(image)?.text)
    }
}

/// First four exterior points of the detection polygon.
fn polygon_to_bbox(polygon: &pure_onnx_ocr::Polygon<f64>) -> [f32; 8] {
    let mut bbox = [0.0f32; 8];
    for (i, coord) in polygon.exterior().coords().take(4).enumerate() {
        bbox[i * 2] = coord.x as f32;
        bbox[i * 2 + 1] = coord.y as f32;
    }
    bbox
}

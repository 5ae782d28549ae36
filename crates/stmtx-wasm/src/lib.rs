//! WASM bindings for bank statement field extraction.
//!
//! Text comes from the host (browser-side OCR or PDF text); extraction and
//! normalization run here.

use wasm_bindgen::prelude::*;

use stmtx_core::statement::rules::{self, BankNameCorrection};
use stmtx_core::RecordExtractor;

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Extract a record (`File Name`, `Bank Name`, ...) from statement text.
#[wasm_bindgen]
pub fn extract_record_from_text(file_name: &str, text: &str) -> Result<JsValue, JsValue> {
    to_js(&RecordExtractor::new().extract(file_name, text))
}

/// Title-case a raw bank name and apply the default corrections.
#[wasm_bindgen]
pub fn normalize_bank_name(raw: &str) -> String {
    rules::normalize_bank_name(raw)
}

/// Keep only the digits of an account number.
#[wasm_bindgen]
pub fn normalize_account_number(raw: &str) -> String {
    rules::normalize_account_number(raw)
}

/// Statement extractor with a configurable bank name correction table.
#[wasm_bindgen]
pub struct StatementExtractor {
    extractor: RecordExtractor,
}

#[wasm_bindgen]
impl StatementExtractor {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            extractor: RecordExtractor::new(),
        }
    }

    /// Replace the corrections with `[{ pattern, replacement }, ...]`.
    #[wasm_bindgen]
    pub fn set_corrections(&mut self, corrections: JsValue) -> Result<(), JsValue> {
        let corrections: Vec<BankNameCorrection> = serde_wasm_bindgen::from_value(corrections)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.extractor = RecordExtractor::new().with_corrections(corrections);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn extract(&self, file_name: &str, text: &str) -> Result<JsValue, JsValue> {
        to_js(&self.extractor.extract(file_name, text))
    }
}

impl Default for StatementExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize_bank_name() {
        assert_eq!(normalize_bank_name("WELLS FARGO"), "Wells Fargo");
        assert_eq!(normalize_bank_name("Chases"), "Chase");
    }

    #[test]
    fn test_normalize_account_number() {
        assert_eq!(normalize_account_number("0001-2345 6789"), "000123456789");
    }

    #[test]
    fn test_version() {
        assert_eq!(version(), env!("CARGO_PKG_VERSION"));
    }
}

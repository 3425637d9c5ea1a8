use std::io::Write;
use tempfile::Builder;
use tesseract::Tesseract;
use crate::utils::KycError;

/// Runs Tesseract over uploaded image bytes.
pub struct OcrProcessor {
    language: String,
    datapath: Option<String>,
}

impl OcrProcessor {
    pub fn new(language: impl Into<String>, datapath: Option<String>) -> Self {
        OcrProcessor {
            language: language.into(),
            datapath,
        }
    }

    // Tesseract reads from a path, so the bytes go through a temp file that
    // is removed when `temp_file` drops.
    pub fn extract_text(&self, image_data: &[u8], suffix: &str) -> Result<String, KycError> {
        let mut temp_file = Builder::new()
            .prefix("kyc-upload-")
            .suffix(suffix)
            .tempfile()
            .map_err(|e| KycError::OcrError(format!("Failed to create temp file: {}", e)))?;

        temp_file.write_all(image_data)
            .map_err(|e| KycError::OcrError(format!("Failed to write to temp file: {}", e)))?;

        let image_path_str = temp_file.path().to_str()
            .ok_or_else(|| KycError::OcrError("Failed to convert path to string".to_string()))?;

        log::debug!("Running OCR ({}) on {}", self.language, image_path_str);

        let text = Tesseract::new(self.datapath.as_deref(), Some(self.language.as_str()))
            .map_err(|e| KycError::OcrError(format!("Tesseract init error: {}", e)))?
            .set_image(image_path_str)
            .map_err(|e| KycError::OcrError(format!("Tesseract set image error: {}", e)))?
            .get_text()
            .map_err(|e| KycError::OcrError(format!("Tesseract error: {}", e)))?;

        log::debug!("OCR produced {} characters", text.len());
        Ok(text)
    }
}

impl Default for OcrProcessor {
    fn default() -> Self {
        OcrProcessor::new("eng", None)
    }
}

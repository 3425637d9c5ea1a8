use lopdf::Document;
use crate::utils::KycError;

pub struct PdfProcessor;

impl PdfProcessor {
    /// Text layer of every page, in page order. Scanned PDFs without a text
    /// layer come back empty.
    pub fn extract_text(pdf_data: &[u8]) -> Result<String, KycError> {
        let document = Document::load_mem(pdf_data)
            .map_err(|e| KycError::PdfError(format!("Failed to parse PDF: {}", e)))?;

        let pages: Vec<u32> = document.get_pages().keys().copied().collect();
        if pages.is_empty() {
            return Ok(String::new());
        }

        document
            .extract_text(&pages)
            .map_err(|e| KycError::PdfError(format!("Failed to extract text: {}", e)))
    }
}

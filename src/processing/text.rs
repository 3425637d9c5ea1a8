use crate::models::UploadedDocument;
use crate::processing::{OcrProcessor, PdfProcessor};
use crate::utils::KycError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Image,
    Pdf,
}

impl DocumentKind {
    /// Only JPEG, PNG and PDF uploads are read. Parameters such as
    /// `; charset=...` are ignored.
    pub fn from_content_type(content_type: &str) -> Option<DocumentKind> {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            "image/jpeg" | "image/jpg" | "image/png" => Some(DocumentKind::Image),
            "application/pdf" => Some(DocumentKind::Pdf),
            _ => None,
        }
    }
}

/// Turns an uploaded document into plain text.
pub trait TextExtractor: Send + Sync {
    fn extract_text(&self, document: &UploadedDocument) -> Result<String, KycError>;
}

/// OCR for images, text layer for PDFs.
pub struct DocumentTextExtractor {
    ocr: OcrProcessor,
}

impl DocumentTextExtractor {
    pub fn new(ocr: OcrProcessor) -> Self {
        DocumentTextExtractor { ocr }
    }

    fn image_suffix(content_type: &str) -> &'static str {
        if content_type.to_ascii_lowercase().contains("png") {
            ".png"
        } else {
            ".jpg"
        }
    }
}

impl TextExtractor for DocumentTextExtractor {
    fn extract_text(&self, document: &UploadedDocument) -> Result<String, KycError> {
        match DocumentKind::from_content_type(&document.content_type) {
            Some(DocumentKind::Image) => self.ocr.extract_text(
                &document.bytes,
                Self::image_suffix(&document.content_type),
            ),
            Some(DocumentKind::Pdf) => PdfProcessor::extract_text(&document.bytes),
            None => Err(KycError::UnsupportedContentType(document.content_type.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_dispatch() {
        assert_eq!(DocumentKind::from_content_type("image/jpeg"), Some(DocumentKind::Image));
        assert_eq!(DocumentKind::from_content_type("image/jpg"), Some(DocumentKind::Image));
        assert_eq!(DocumentKind::from_content_type("IMAGE/PNG"), Some(DocumentKind::Image));
        assert_eq!(
            DocumentKind::from_content_type("application/pdf; name=pan.pdf"),
            Some(DocumentKind::Pdf)
        );
        assert_eq!(DocumentKind::from_content_type("image/gif"), None);
        assert_eq!(DocumentKind::from_content_type(""), None);
    }

    #[test]
    fn test_unsupported_type_is_an_error() {
        let extractor = DocumentTextExtractor::new(OcrProcessor::default());
        let document = UploadedDocument::new("notes.txt", "text/plain", b"hello".to_vec());
        let result = extractor.extract_text(&document);
        assert!(matches!(result, Err(KycError::UnsupportedContentType(t)) if t == "text/plain"));
    }
}

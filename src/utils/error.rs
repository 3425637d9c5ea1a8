use thiserror::Error;

#[derive(Debug, Error)]
pub enum KycError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("OCR error: {0}")]
    OcrError(String),
    #[error("PDF error: {0}")]
    PdfError(String),
    #[error("Unsupported file type: {0}")]
    UnsupportedContentType(String),
    #[error("Could not read text from one or both files. Please upload clearer images or valid, text-based PDFs.")]
    UnreadableDocument,
    #[error("Missing required file field '{0}'")]
    MissingField(String),
    #[error("{0}")]
    Internal(String),
}

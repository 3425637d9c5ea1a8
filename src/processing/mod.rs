pub mod extractors;
pub mod ocr;
pub mod pdf;
pub mod text;

pub use extractors::DetailExtractor;
pub use ocr::OcrProcessor;
pub use pdf::PdfProcessor;
pub use text::{DocumentKind, DocumentTextExtractor, TextExtractor};

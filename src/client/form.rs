use std::path::Path;

use crate::models::UploadedDocument;
use crate::utils::KycError;

/// Files picked in the two document inputs. An input may hold several
/// files; only the first of each is uploaded.
#[derive(Debug, Clone, Default)]
pub struct UploadForm {
    pub doc1: Vec<UploadedDocument>,
    pub doc2: Vec<UploadedDocument>,
}

impl UploadForm {
    pub fn new(doc1: Vec<UploadedDocument>, doc2: Vec<UploadedDocument>) -> Self {
        UploadForm { doc1, doc2 }
    }

    /// Both documents, or `None` when either input is empty.
    pub fn selected(&self) -> Option<(&UploadedDocument, &UploadedDocument)> {
        Some((self.doc1.first()?, self.doc2.first()?))
    }
}

pub fn content_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
}

pub fn load_document(path: &Path) -> Result<UploadedDocument, KycError> {
    let bytes = std::fs::read(path)?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());

    Ok(UploadedDocument::new(file_name, content_type_for(path), bytes))
}

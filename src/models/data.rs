use serde::{Deserialize, Serialize};

/// A file as received from (or sent to) the verification endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedDocument {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadedDocument {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        UploadedDocument {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }
}

/// Identity fields pulled out of one document's text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentDetails {
    pub pan_number: Option<String>,
    pub aadhar_number: Option<String>,
    pub name: Option<String>,
    pub dob: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportStatus {
    Passed,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckStatus {
    NotChecked,
    Match,
    Mismatch,
    MissingData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameCheck {
    pub status: CheckStatus,
    pub doc1: Option<String>,
    pub doc2: Option<String>,
    pub similarity: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DobCheck {
    pub status: CheckStatus,
    pub doc1: Option<String>,
    pub doc2: Option<String>,
}

/// A value recorded once per uploaded document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerDocument<T> {
    pub doc1: T,
    pub doc2: T,
}

/// The verdict document returned by `/check-kyc/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KycReport {
    pub status: ReportStatus,
    pub message: String,
    pub issues: Vec<String>,
    pub name_check: NameCheck,
    pub dob_check: DobCheck,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted_data: Option<PerDocument<DocumentDetails>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_raw_text: Option<PerDocument<String>>,
}

impl KycReport {
    pub fn is_passed(&self) -> bool {
        self.status == ReportStatus::Passed
    }
}

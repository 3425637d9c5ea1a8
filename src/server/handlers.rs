use axum::{
    extract::{Multipart, State},
    Json,
};
use serde_json::{json, Value};

use crate::models::{KycReport, UploadedDocument};
use crate::server::{ApiError, AppState};
use crate::utils::KycError;

pub const DOC1_FIELD: &str = "doc1";
pub const DOC2_FIELD: &str = "doc2";

const WELCOME_MESSAGE: &str =
    "Welcome to the Smart KYC Checker API. Please use the /check-kyc endpoint to upload documents.";

pub async fn root() -> Json<Value> {
    Json(json!({ "message": WELCOME_MESSAGE }))
}

/// Receives two documents, extracts their details and cross-checks them.
pub async fn check_kyc(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<KycReport>, ApiError> {
    let (doc1, doc2) = read_documents(multipart).await?;
    log::info!(
        "KYC check for {} ({}) and {} ({})",
        doc1.file_name,
        doc1.content_type,
        doc2.file_name,
        doc2.content_type
    );

    let checker = state.checker.clone();
    let report = tokio::task::spawn_blocking(move || checker.check(&doc1, &doc2))
        .await
        .map_err(|e| KycError::Internal(e.to_string()))??;

    Ok(Json(report))
}

async fn read_documents(
    mut multipart: Multipart,
) -> Result<(UploadedDocument, UploadedDocument), ApiError> {
    let mut doc1 = None;
    let mut doc2 = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        if name != DOC1_FIELD && name != DOC2_FIELD {
            log::debug!("Ignoring multipart field {:?}", name);
            continue;
        }

        let file_name = field.file_name().unwrap_or(&name).to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field.bytes().await?;
        let document = UploadedDocument::new(file_name, content_type, bytes.to_vec());

        if name == DOC1_FIELD {
            doc1 = Some(document);
        } else {
            doc2 = Some(document);
        }
    }

    let doc1 = doc1.ok_or_else(|| KycError::MissingField(DOC1_FIELD.to_string()))?;
    let doc2 = doc2.ok_or_else(|| KycError::MissingField(DOC2_FIELD.to_string()))?;
    Ok((doc1, doc2))
}

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::utils::KycError;

/// Failure reply of the endpoint: a status code and a `{"detail": ...}` body.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl From<KycError> for ApiError {
    fn from(err: KycError) -> Self {
        let (status, detail) = match &err {
            KycError::MissingField(_) => (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()),
            KycError::UnreadableDocument => (StatusCode::BAD_REQUEST, err.to_string()),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("An internal server error occurred: {}", err),
            ),
        };
        ApiError { status, detail }
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        ApiError {
            status: err.status(),
            detail: err.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            log::error!("{}: {}", self.status, self.detail);
        } else {
            log::warn!("{}: {}", self.status, self.detail);
        }
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::from(KycError::MissingField("doc2".into())).status,
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(ApiError::from(KycError::UnreadableDocument).status, StatusCode::BAD_REQUEST);

        let internal = ApiError::from(KycError::OcrError("engine crashed".into()));
        assert_eq!(internal.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            internal.detail,
            "An internal server error occurred: OCR error: engine crashed"
        );
    }
}

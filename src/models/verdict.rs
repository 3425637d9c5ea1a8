use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub const CONNECTION_ERROR_MESSAGE: &str = "Failed to connect to the API or an error occurred.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerdictStatus {
    Passed,
    Failed,
    Error,
    Other,
}

/// Verdict document as seen by the upload client.
///
/// The endpoint decides which fields it sends; only `status` and the error
/// cause fields are ever read here, the rest is carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VerificationResult(Value);

impl VerificationResult {
    pub fn from_value(value: Value) -> Self {
        VerificationResult(value)
    }

    /// Locally built result for transport failures and non-2xx replies.
    pub fn synthesized_error(cause: impl Into<String>) -> Self {
        VerificationResult(json!({
            "status": "ERROR",
            "message": CONNECTION_ERROR_MESSAGE,
            "error": cause.into(),
        }))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn status(&self) -> VerdictStatus {
        match self.0.get("status").and_then(Value::as_str) {
            Some("PASSED") => VerdictStatus::Passed,
            Some("FAILED") => VerdictStatus::Failed,
            Some("ERROR") => VerdictStatus::Error,
            _ => VerdictStatus::Other,
        }
    }

    /// Human readable cause carried by an error body: `detail`, then
    /// `message`, then `error`.
    pub fn error_cause(&self) -> Option<String> {
        ["detail", "message", "error"]
            .iter()
            .filter_map(|key| self.0.get(*key))
            .find(|value| !value.is_null())
            .map(|value| match value {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            })
    }

    /// Two-space indented JSON, keys in the order they arrived.
    pub fn to_pretty_string(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_is_read_from_document() {
        let passed = VerificationResult::from_value(json!({"status": "PASSED"}));
        let failed = VerificationResult::from_value(json!({"status": "FAILED"}));
        let unknown = VerificationResult::from_value(json!({"status": 3}));
        let missing = VerificationResult::from_value(json!({"score": 10}));

        assert_eq!(passed.status(), VerdictStatus::Passed);
        assert_eq!(failed.status(), VerdictStatus::Failed);
        assert_eq!(unknown.status(), VerdictStatus::Other);
        assert_eq!(missing.status(), VerdictStatus::Other);
    }

    #[test]
    fn test_synthesized_error_shape() {
        let result = VerificationResult::synthesized_error("OCR failed");
        assert_eq!(
            serde_json::to_string(result.as_value()).unwrap(),
            r#"{"status":"ERROR","message":"Failed to connect to the API or an error occurred.","error":"OCR failed"}"#
        );
        assert_eq!(result.status(), VerdictStatus::Error);
    }

    #[test]
    fn test_error_cause_prefers_detail() {
        let body = VerificationResult::from_value(json!({
            "error": "third",
            "message": "second",
            "detail": "first",
        }));
        assert_eq!(body.error_cause().as_deref(), Some("first"));

        let body = VerificationResult::from_value(json!({"message": "only message"}));
        assert_eq!(body.error_cause().as_deref(), Some("only message"));

        let body = VerificationResult::from_value(json!({"detail": [{"loc": "doc2"}]}));
        assert_eq!(body.error_cause().as_deref(), Some(r#"[{"loc":"doc2"}]"#));

        let body = VerificationResult::from_value(json!({"status": "FAILED"}));
        assert_eq!(body.error_cause(), None);
    }

    #[test]
    fn test_pretty_string_keeps_key_order() {
        let result = VerificationResult::from_value(
            serde_json::from_str(r#"{"status":"PASSED","name_match_score":92}"#).unwrap(),
        );
        assert_eq!(
            result.to_pretty_string(),
            "{\n  \"status\": \"PASSED\",\n  \"name_match_score\": 92\n}"
        );
    }
}

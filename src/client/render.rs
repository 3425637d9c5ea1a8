use crate::models::{VerdictStatus, VerificationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextColor {
    Neutral,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedResult {
    pub text: String,
    pub color: TextColor,
}

pub fn color_for(status: VerdictStatus) -> TextColor {
    match status {
        VerdictStatus::Failed | VerdictStatus::Error => TextColor::Warning,
        VerdictStatus::Passed => TextColor::Success,
        VerdictStatus::Other => TextColor::Neutral,
    }
}

pub fn render(result: &VerificationResult) -> RenderedResult {
    RenderedResult {
        text: result.to_pretty_string(),
        color: color_for(result.status()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_color_follows_status() {
        let passed = render(&VerificationResult::from_value(json!({"status": "PASSED"})));
        let failed = render(&VerificationResult::from_value(json!({"status": "FAILED"})));
        let error = render(&VerificationResult::synthesized_error("boom"));
        let other = render(&VerificationResult::from_value(json!({"status": "PENDING"})));

        assert_eq!(passed.color, TextColor::Success);
        assert_eq!(failed.color, TextColor::Warning);
        assert_eq!(error.color, TextColor::Warning);
        assert_eq!(other.color, TextColor::Neutral);
    }

    #[test]
    fn test_text_is_pretty_printed_document() {
        let rendered = render(&VerificationResult::from_value(json!({
            "status": "FAILED",
            "issues": ["DOB mismatch"],
        })));
        assert_eq!(
            rendered.text,
            "{\n  \"status\": \"FAILED\",\n  \"issues\": [\n    \"DOB mismatch\"\n  ]\n}"
        );
    }
}

use serde_json::Value;

use crate::client::form::UploadForm;
use crate::client::render::{render, RenderedResult};
use crate::client::transport::{HttpReply, VerificationTransport};
use crate::models::VerificationResult;

pub const SUBMIT_LABEL: &str = "Verify Documents";
pub const BUSY_LABEL: &str = "Verifying...";
pub const MISSING_FILES_ALERT: &str = "Please select both documents to upload.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
}

/// Everything the upload form shows. Transitions consume the old state and
/// return the new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub phase: Phase,
    pub submit_enabled: bool,
    pub submit_label: String,
    pub loader_visible: bool,
    pub output: Option<RenderedResult>,
    pub alert: Option<String>,
}

impl Default for FormState {
    fn default() -> Self {
        FormState {
            phase: Phase::Idle,
            submit_enabled: true,
            submit_label: SUBMIT_LABEL.to_string(),
            loader_visible: false,
            output: None,
            alert: None,
        }
    }
}

impl FormState {
    pub fn begin_submission(self) -> Self {
        FormState {
            phase: Phase::Submitting,
            submit_enabled: false,
            submit_label: BUSY_LABEL.to_string(),
            loader_visible: true,
            output: None,
            alert: None,
        }
    }

    pub fn show_alert(self, message: impl Into<String>) -> Self {
        FormState {
            alert: Some(message.into()),
            ..self
        }
    }

    pub fn show_result(self, rendered: RenderedResult) -> Self {
        FormState {
            output: Some(rendered),
            ..self
        }
    }

    /// Back to idle; the rendered output stays on screen.
    pub fn settle(self) -> Self {
        FormState {
            phase: Phase::Idle,
            submit_enabled: true,
            submit_label: SUBMIT_LABEL.to_string(),
            loader_visible: false,
            ..self
        }
    }
}

// Holds the form in `Submitting` and settles it when dropped, whichever way
// the submission ends (including unwinding).
struct SubmissionGuard<'a> {
    state: &'a mut FormState,
}

impl<'a> SubmissionGuard<'a> {
    fn engage(state: &'a mut FormState) -> Self {
        *state = std::mem::take(state).begin_submission();
        SubmissionGuard { state }
    }

    fn show_result(&mut self, rendered: RenderedResult) {
        *self.state = std::mem::take(self.state).show_result(rendered);
    }
}

impl Drop for SubmissionGuard<'_> {
    fn drop(&mut self) {
        *self.state = std::mem::take(self.state).settle();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing was sent; the user was alerted.
    Rejected(String),
    Rendered(RenderedResult),
}

/// Turns the endpoint's reply into the document to show. Non-2xx replies and
/// unparseable bodies become a synthesized `ERROR` result.
pub fn interpret_reply(reply: &HttpReply) -> VerificationResult {
    let body: Value = match serde_json::from_slice(&reply.body) {
        Ok(body) => body,
        Err(err) => {
            log::warn!("Unparseable reply (status {}): {}", reply.status, err);
            return VerificationResult::synthesized_error(err.to_string());
        }
    };

    let result = VerificationResult::from_value(body);
    if reply.is_success() {
        return result;
    }

    let cause = result
        .error_cause()
        .unwrap_or_else(|| format!("Request failed with status {}", reply.status));
    log::warn!("Endpoint replied {}: {}", reply.status, cause);
    VerificationResult::synthesized_error(cause)
}

/// Drives one submission at a time from the upload form to the endpoint.
pub struct UploadController<T> {
    transport: T,
    state: FormState,
}

impl<T: VerificationTransport> UploadController<T> {
    pub fn new(transport: T) -> Self {
        UploadController {
            transport,
            state: FormState::default(),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn submit(&mut self, form: &UploadForm) -> SubmitOutcome {
        let Some((doc1, doc2)) = form.selected() else {
            log::warn!("Submission blocked: a document input is empty");
            self.state = std::mem::take(&mut self.state).show_alert(MISSING_FILES_ALERT);
            return SubmitOutcome::Rejected(MISSING_FILES_ALERT.to_string());
        };

        let mut guard = SubmissionGuard::engage(&mut self.state);

        let result = match self.transport.submit(doc1, doc2).await {
            Ok(reply) => interpret_reply(&reply),
            Err(err) => {
                log::error!("Verification request failed: {}", err);
                VerificationResult::synthesized_error(err.to_string())
            }
        };

        let rendered = render(&result);
        guard.show_result(rendered.clone());
        SubmitOutcome::Rendered(rendered)
    }
}

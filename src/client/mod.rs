//! Upload client for the verification endpoint.
//!
//! The controller owns the form state and the transport; rendering and reply
//! interpretation are plain functions so they can be checked without a UI.

pub mod controller;
pub mod form;
pub mod render;
pub mod transport;

pub use controller::{interpret_reply, FormState, Phase, SubmitOutcome, UploadController};
pub use form::{load_document, UploadForm};
pub use render::{render, RenderedResult, TextColor};
pub use transport::{HttpReply, HttpTransport, TransportError, VerificationTransport};

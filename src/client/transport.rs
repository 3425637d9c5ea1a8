use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use thiserror::Error;

use crate::config::ClientConfig;
use crate::models::UploadedDocument;

pub const DOC1_PART: &str = "doc1";
pub const DOC2_PART: &str = "doc2";

/// Raw reply of the verification endpoint; the body is parsed by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("{0}")]
    Request(#[from] reqwest::Error),
}

/// Sends the two documents to the verification endpoint.
#[async_trait]
pub trait VerificationTransport: Send + Sync {
    async fn submit(
        &self,
        doc1: &UploadedDocument,
        doc2: &UploadedDocument,
    ) -> Result<HttpReply, TransportError>;
}

pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Self {
        HttpTransport {
            client: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
        }
    }

    fn part(document: &UploadedDocument) -> Result<Part, TransportError> {
        Ok(Part::bytes(document.bytes.clone())
            .file_name(document.file_name.clone())
            .mime_str(&document.content_type)?)
    }
}

#[async_trait]
impl VerificationTransport for HttpTransport {
    async fn submit(
        &self,
        doc1: &UploadedDocument,
        doc2: &UploadedDocument,
    ) -> Result<HttpReply, TransportError> {
        // reqwest sets the multipart content type and boundary itself.
        let form = Form::new()
            .part(DOC1_PART, Self::part(doc1)?)
            .part(DOC2_PART, Self::part(doc2)?);

        log::info!("POST {} ({}, {})", self.endpoint, doc1.file_name, doc2.file_name);
        let response = self.client.post(&self.endpoint).multipart(form).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        log::debug!("{} replied {} with {} bytes", self.endpoint, status, body.len());

        Ok(HttpReply { status, body })
    }
}

use clap::Args;
use std::net::SocketAddr;

use crate::validation::DEFAULT_NAME_THRESHOLD;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/check-kyc/";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Settings for the verification endpoint.
#[derive(Debug, Clone, Args)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "KYC_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "KYC_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Tesseract language
    #[arg(long, default_value = "eng")]
    pub lang: String,

    /// Directory holding Tesseract traineddata files
    #[arg(long, env = "TESSDATA_PREFIX")]
    pub tessdata: Option<String>,

    /// Minimum name similarity (0-100) for two documents to match
    #[arg(long, default_value_t = DEFAULT_NAME_THRESHOLD, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub name_threshold: u8,

    /// Largest accepted request body, in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_UPLOAD_BYTES)]
    pub max_upload_bytes: usize,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8000,
            lang: "eng".to_string(),
            tessdata: None,
            name_threshold: DEFAULT_NAME_THRESHOLD,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

/// Settings for the upload client.
#[derive(Debug, Clone, Args)]
pub struct ClientConfig {
    /// Verification endpoint that receives the two documents
    #[arg(long, env = "KYC_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

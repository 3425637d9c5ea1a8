pub mod error;
pub mod handlers;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::config::ServerConfig;
use crate::utils::KycError;
use crate::KycChecker;

pub use error::ApiError;

pub const CHECK_KYC_PATH: &str = "/check-kyc/";

#[derive(Clone)]
pub struct AppState {
    pub checker: Arc<KycChecker>,
}

/// Routes:
///   - `GET /` welcome message
///   - `POST /check-kyc/` multipart upload of `doc1` and `doc2`, answered with the report
///
/// CORS is open to any origin, method and header.
pub fn router(checker: Arc<KycChecker>, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route(CHECK_KYC_PATH, post(handlers::check_kyc))
        .route("/check-kyc", post(handlers::check_kyc))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(CorsLayer::permissive())
        .with_state(AppState { checker })
}

pub async fn serve(config: &ServerConfig, checker: KycChecker) -> Result<(), KycError> {
    let addr = config
        .socket_addr()
        .map_err(|e| KycError::Internal(format!("Invalid listen address: {}", e)))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("Smart KYC Checker API listening on http://{}", addr);

    axum::serve(listener, router(Arc::new(checker), config.max_upload_bytes)).await?;
    Ok(())
}

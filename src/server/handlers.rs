//! HTTP route handlers shared by the whole application

use crate::server::state::AppState;
use crate::storage::StorageHealthStatus;
use actix_web::{HttpResponse, web};
use serde::Serialize;
use tracing::debug;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    /// `healthy`, or `degraded` when the history store does not answer
    pub status: &'static str,
    pub version: &'static str,
    pub storage: StorageHealthStatus,
    pub timestamp: String,
}

/// Health check endpoint handler.
///
/// Always answers 200: arithmetic keeps working without the history store.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    debug!("Health check requested");

    let storage = state.calculator.storage().health_check().await;
    let status = if storage.healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthStatus {
        status,
        version: env!("CARGO_PKG_VERSION"),
        storage,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

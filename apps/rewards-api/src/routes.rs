//! # HTTP Routes
//!
//! ```text
//! POST /receipts/process        Receipt JSON ──► {"id": "..."}
//! GET  /receipts/{id}/points    ──► {"points": 109}
//! GET  /health                  ──► OK
//! ```

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit, Path, State},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use rewards_core::Receipt;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiResult;
use crate::service::ReceiptService;

// =============================================================================
// Responses
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: u64,
}

// =============================================================================
// Router
// =============================================================================

/// Builds the application router over a shared service.
pub fn router(service: Arc<ReceiptService>, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/{id}/points", get(get_points))
        .route("/health", get(health_handler))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(service)
}

// =============================================================================
// Handlers
// =============================================================================

async fn process_receipt(
    State(service): State<Arc<ReceiptService>>,
    payload: Result<Json<Receipt>, JsonRejection>,
) -> ApiResult<Json<ProcessResponse>> {
    let Json(receipt) = payload.inspect_err(|rejection| {
        debug!(error = %rejection.body_text(), "Rejected request body");
    })?;

    let id = service.submit(receipt)?;
    Ok(Json(ProcessResponse { id }))
}

async fn get_points(
    State(service): State<Arc<ReceiptService>>,
    Path(id): Path<String>,
) -> ApiResult<Json<PointsResponse>> {
    let points = service.lookup(&id)?;
    Ok(Json(PointsResponse { points }))
}

async fn health_handler() -> impl IntoResponse {
    "OK"
}

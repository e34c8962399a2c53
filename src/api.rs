// Receipt Processor - REST API with Axum
// Routes, response shapes, and error → status mapping

use crate::error::ReceiptError;
use crate::receipt::ReceiptSubmission;
use crate::service::ReceiptService;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

/// Shared application state
#[derive(Clone, Default)]
pub struct AppState {
    pub service: ReceiptService,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl IntoResponse for ReceiptError {
    fn into_response(self) -> Response {
        // Validation details stay in the logs; the caller only learns the receipt is invalid
        let (status, message) = match self {
            ReceiptError::MalformedInput(_) | ReceiptError::ValidationFailed { .. } => {
                (StatusCode::BAD_REQUEST, "The receipt is invalid.")
            }
            ReceiptError::NotFound(_) => (StatusCode::NOT_FOUND, "No receipt found for that ID."),
        };

        (
            status,
            Json(ErrorResponse {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

// ============================================================================
// API Handlers
// ============================================================================

/// POST /receipts/process - Score and store a receipt
async fn process_receipt(
    State(state): State<AppState>,
    payload: Result<Json<ReceiptSubmission>, JsonRejection>,
) -> Result<Json<ProcessResponse>, ReceiptError> {
    let Json(submission) = payload.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "Undecodable receipt body");
        ReceiptError::MalformedInput(rejection.body_text())
    })?;

    let id = state.service.process(&submission)?;
    Ok(Json(ProcessResponse { id }))
}

/// GET /receipts/:id/points - Points for a processed receipt
async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, ReceiptError> {
    let points = state.service.points(&id)?;
    Ok(Json(PointsResponse { points }))
}

/// GET /health - Health check
async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/:id/points", get(get_points))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ============================================================================
// TESTS
// ============================================================================

//! Health check endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;
use store::EntityStore;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub products: Option<usize>,
}

/// GET /health — reports whether the product store answers.
pub async fn check(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthResponse>) {
    match state.products.count().await {
        Ok(count) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok",
                products: Some(count),
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "product store unavailable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "degraded",
                    products: None,
                }),
            )
        }
    }
}

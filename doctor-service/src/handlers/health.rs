use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use service_core::observability::get_metrics;

use crate::startup::AppState;

/// Pings the clinic store. 200 when it answers, 500 otherwise.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.prescriptions.store().ping().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "Healthy",
                "service": "doctor-service",
                "version": env!("CARGO_PKG_VERSION")
            })),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "status": "Unhealthy",
                "service": "doctor-service",
                "error": e.to_string()
            })),
        ),
    }
}

pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.prescriptions.store().ping().await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub async fn metrics_endpoint() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        get_metrics(),
    )
}

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::infrastructure::repositories::TtsRepository;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Readiness reports which speech provider the server was wired with
pub async fn health_ready(State(tts_repo): State<Arc<dyn TtsRepository>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ready",
            "tts": tts_repo.provider_id()
        })),
    )
}

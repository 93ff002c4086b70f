//! Health check
//!
//! Reports liveness plus whether the OpenAI credentials are present, so a
//! deployment with a missing key is visible before the first request fails.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::api::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub api_key_configured: bool,
    pub assistant_configured: bool,
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        api_key_configured: state.has_api(),
        assistant_configured: state.has_assistant(),
    })
}

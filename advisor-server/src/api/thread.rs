//! Thread API Handlers

use axum::{Json, extract::State};
use serde::Serialize;

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateThreadResponse {
    pub thread_id: String,
}

/// POST /api/create_thread
/// Open a thread the caller can keep appending to
pub async fn create_thread(State(state): State<AppState>) -> ApiResult<Json<CreateThreadResponse>> {
    let api = state.api()?;

    let thread = api.create_thread().await?;
    if thread.id.is_empty() {
        return Err(ApiError::InternalError(
            "Received unexpected response structure from OpenAI.".to_string(),
        ));
    }

    tracing::info!("Thread created: {}", thread.id);

    Ok(Json(CreateThreadResponse {
        thread_id: thread.id,
    }))
}

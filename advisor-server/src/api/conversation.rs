//! Conversation API Handlers
//!
//! Free-form questions to the assistant, either on a caller thread
//! (multi-turn) or on a fresh one.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::api::body::JsonBody;
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::service::{AskRequest, ThreadTarget};

const APPEND_POLL_ATTEMPTS: u32 = 30;
const CHAT_POLL_ATTEMPTS: u32 = 60;
const NO_RESPONSE: &str = "No response from assistant.";

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub message: String,
    pub thread_id: String,
}

/// POST /api/append-and-retrieve
/// Append a message to an existing thread and return the assistant reply
pub async fn append_and_retrieve(
    State(state): State<AppState>,
    body: JsonBody,
) -> ApiResult<Json<MessageResponse>> {
    let assistant = state.assistant()?;
    let thread_id = body.required_str("threadId")?;
    let message = body.required_str("message")?;

    tracing::info!("Appending message to thread {}", thread_id);

    let answer = assistant
        .ask(AskRequest {
            thread: ThreadTarget::Existing(thread_id.to_string()),
            content: message.to_string(),
            instructions: None,
            poll: state.poll(APPEND_POLL_ATTEMPTS),
            fallback: NO_RESPONSE,
        })
        .await?;

    Ok(Json(MessageResponse {
        message: answer.text,
    }))
}

/// POST /api/chat
/// Single-turn question on a fresh thread
pub async fn chat(State(state): State<AppState>, body: JsonBody) -> ApiResult<Json<ChatResponse>> {
    let assistant = state.assistant()?;
    let message = body.required_str("message")?;

    let answer = assistant
        .ask(AskRequest {
            thread: ThreadTarget::New,
            content: message.to_string(),
            instructions: None,
            poll: state.poll(CHAT_POLL_ATTEMPTS),
            fallback: NO_RESPONSE,
        })
        .await?;

    Ok(Json(ChatResponse {
        message: answer.text,
        thread_id: answer.thread_id,
    }))
}

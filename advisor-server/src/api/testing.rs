//! Router helpers for handler tests

use std::sync::Arc;
use std::time::Duration;

use advisor_client::AssistantsClient;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use crate::api::create_router;
use crate::api::state::AppState;
use crate::service::fake::ScriptedApi;

pub const ASSISTANT_ID: &str = "asst_test";

pub fn router(api: Arc<ScriptedApi>) -> Router {
    create_router(AppState::new(
        Some(api),
        Some(ASSISTANT_ID.to_string()),
        Duration::from_millis(1000),
        None,
    ))
}

pub fn router_without_assistant(api: Arc<ScriptedApi>) -> Router {
    create_router(AppState::new(
        Some(api),
        None,
        Duration::from_millis(1000),
        None,
    ))
}

/// Router backed by a real HTTP client talking to `base_url`
pub fn client_router(base_url: &str) -> Router {
    let client = AssistantsClient::with_client(base_url, "sk-test", reqwest::Client::new());
    create_router(AppState::new(
        Some(Arc::new(client)),
        Some(ASSISTANT_ID.to_string()),
        Duration::from_millis(1000),
        None,
    ))
}

pub fn unconfigured_router() -> Router {
    create_router(AppState::new(None, None, Duration::from_millis(1000), None))
}

pub async fn post_json(app: Router, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let body = match body {
        Some(value) => Body::from(value.to_string()),
        None => Body::empty(),
    };
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body)
        .unwrap();

    send(app, request).await
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}

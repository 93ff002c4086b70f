//! API Module
//!
//! HTTP API layer of the advisor.
//! Each submodule handles endpoints for a specific use case.

pub mod body;
pub mod compliance;
pub mod conversation;
pub mod error;
pub mod health;
pub mod state;
pub mod thread;

#[cfg(test)]
pub mod testing;

use anyhow::Context;
use axum::{
    Router,
    extract::Request,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::api::error::ApiError;
pub use crate::api::state::AppState;

/// Create the main API router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Thread endpoints
        .route(
            "/api/create_thread",
            post(thread::create_thread).fallback(method_not_allowed),
        )
        // Conversation endpoints
        .route(
            "/api/append-and-retrieve",
            post(conversation::append_and_retrieve).fallback(method_not_allowed),
        )
        .route(
            "/api/chat",
            post(conversation::chat).fallback(method_not_allowed),
        )
        // Compliance endpoints
        .route(
            "/api/risk_classification",
            post(compliance::risk_classification).fallback(method_not_allowed),
        )
        .route(
            "/api/generate_measures_policy",
            post(compliance::generate_measures_policy).fallback(method_not_allowed),
        )
        .fallback(not_found)
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request| {
            tracing::info_span!(
                "request",
                id = %Uuid::new_v4(),
                method = %request.method(),
                path = %request.uri().path(),
            )
        }))
}

/// CORS layer for browser front ends on other origins
///
/// Returns `None` when no origin is configured, leaving the API same-origin only.
pub fn cors_layer(origins: &[String]) -> anyhow::Result<Option<CorsLayer>> {
    if origins.is_empty() {
        return Ok(None);
    }

    let origins = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin.trim())
                .with_context(|| format!("Invalid CORS origin: {}", origin))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE]),
    ))
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

async fn not_found(request: Request) -> ApiError {
    ApiError::NotFound(format!("No route for {}", request.uri().path()))
}

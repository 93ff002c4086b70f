//! Advisor Server
//!
//! HTTP backend for the EU AI Act compliance advisor.
//!
//! Architecture:
//! - Configuration: flags or environment variables, validated at start-up
//! - API: axum handlers, one per use case, POST only
//! - Services: the shared ask flow, run polling, prompts and report extraction
//!
//! Every use case posts a message to an OpenAI Assistants thread, runs the
//! assistant, polls the run until it settles and returns the newest reply.

mod api;
mod config;
mod service;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api::AppState;
use crate::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "advisor_server=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Advisor Server");

    let config = Config::parse();
    config.validate()?;

    let state = AppState::from_config(&config)?;
    if !state.has_api() {
        warn!("OPENAI_API_KEY is not set; requests will fail with a configuration error");
    }
    if !state.has_assistant() {
        warn!("OPENAI_ASSISTANT_ID is not set; assistant endpoints will fail with a configuration error");
    }
    info!(
        "Loaded configuration: base_url={}, poll_interval={:?}, max_poll_attempts={:?}",
        config.openai_base_url,
        config.poll_interval(),
        config.max_poll_attempts
    );

    // Build router with all API endpoints
    let mut app = api::create_router(state);
    if let Some(cors) = api::cors_layer(&config.cors_origins)? {
        info!("CORS enabled for {} origin(s)", config.cors_origins.len());
        app = app.layer(cors);
    }

    info!("Listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Advisor Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

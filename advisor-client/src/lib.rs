//! Advisor HTTP Client
//!
//! A small, type-safe client for the OpenAI Assistants API covering the
//! calls the advisor makes: thread creation, message posting, run creation,
//! run retrieval and message listing.
//!
//! # Example
//!
//! ```no_run
//! use advisor_client::AssistantsClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), advisor_client::ClientError> {
//!     let client = AssistantsClient::new("sk-...");
//!
//!     let thread = client.create_thread().await?;
//!     client.create_message(&thread.id, "Is a CV screening tool high-risk?").await?;
//!
//!     println!("Created thread: {}", thread.id);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod error;
mod messages;
mod runs;
mod threads;

// Re-export commonly used types
pub use api::AssistantsApi;
pub use error::{ClientError, Result};

use reqwest::{Client, Method, RequestBuilder};
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Default base URL of the OpenAI REST API
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Protocol version header required by the Assistants endpoints
const BETA_HEADER: (&str, &str) = ("OpenAI-Beta", "assistants=v2");

/// HTTP client for the OpenAI Assistants API
///
/// Endpoints are grouped by resource:
/// - Threads (create)
/// - Messages (create, list)
/// - Runs (create, retrieve)
#[derive(Clone)]
pub struct AssistantsClient {
    /// Base URL of the API (e.g., "https://api.openai.com/v1")
    base_url: String,
    /// Bearer token
    api_key: String,
    /// HTTP client instance
    client: Client,
}

impl std::fmt::Debug for AssistantsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssistantsClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl AssistantsClient {
    /// Create a client against the public OpenAI endpoint
    ///
    /// # Example
    /// ```
    /// use advisor_client::AssistantsClient;
    ///
    /// let client = AssistantsClient::new("sk-test");
    /// assert_eq!(client.base_url(), "https://api.openai.com/v1");
    /// ```
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_client(DEFAULT_BASE_URL, api_key, Client::new())
    }

    /// Create a client with a custom base URL and HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, or to
    /// point the client at a compatible gateway.
    ///
    /// # Example
    /// ```
    /// use advisor_client::AssistantsClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = AssistantsClient::with_client("http://localhost:9000/v1", "sk-test", http_client);
    /// ```
    pub fn with_client(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        client: Client,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            client,
        }
    }

    /// Get the base URL of the API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Start an authenticated request to `path` (relative to the base URL)
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .request(method, url)
            .bearer_auth(&self.api_key)
            .header(BETA_HEADER.0, BETA_HEADER.1)
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// Non-success statuses become [`ClientError::ApiError`] carrying the
    /// message from the OpenAI error envelope when present, else the raw body.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(
                status.as_u16(),
                error_message(&error_text),
            ));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}

/// Check that `id` is usable as a single URL path segment
///
/// Assistants API identifiers (`thread_abc123`, `run_...`, `asst_...`) only
/// contain ASCII letters, digits, `_` and `-`. Anything else is rejected
/// before a request is built.
pub fn validate_id<'a>(kind: &str, id: &'a str) -> Result<&'a str> {
    let id = id.trim();
    if id.is_empty() {
        return Err(ClientError::InvalidRequest(format!(
            "{} id must not be empty",
            kind
        )));
    }

    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(ClientError::InvalidRequest(format!(
            "{} id contains invalid characters: {:?}",
            kind, id
        )));
    }

    Ok(id)
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_defaults_to_openai() {
        let client = AssistantsClient::new("sk-test");
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = AssistantsClient::with_client("http://localhost:9000/v1/", "sk", Client::new());
        assert_eq!(client.base_url(), "http://localhost:9000/v1");
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let client = AssistantsClient::new("sk-secret");
        let rendered = format!("{:?}", client);
        assert!(!rendered.contains("sk-secret"));
    }

    #[test]
    fn test_error_message_reads_envelope() {
        let body = r#"{"error":{"message":"No thread found","type":"invalid_request_error"}}"#;
        assert_eq!(error_message(body), "No thread found");
        assert_eq!(error_message("Bad Gateway"), "Bad Gateway");
    }

    #[test]
    fn test_validate_id() {
        assert_eq!(validate_id("thread", " thread_1 ").unwrap(), "thread_1");
        assert_eq!(validate_id("run", "run-A9_z").unwrap(), "run-A9_z");
        assert!(matches!(
            validate_id("run", ""),
            Err(ClientError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_validate_id_rejects_path_characters() {
        for id in ["../assistants", "thread_1/runs", "thread 1", "thread_1?x=1", "th%2e%2e", "thréad"] {
            assert!(
                matches!(validate_id("thread", id), Err(ClientError::InvalidRequest(_))),
                "{} was accepted",
                id
            );
        }
    }
}

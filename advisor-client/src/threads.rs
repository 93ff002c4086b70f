//! Thread endpoints

use crate::AssistantsClient;
use crate::error::Result;
use advisor_core::domain::thread::Thread;
use reqwest::Method;

impl AssistantsClient {
    /// Create a new, empty thread
    ///
    /// # Returns
    /// The created thread; only its `id` is used by the advisor
    pub async fn create_thread(&self) -> Result<Thread> {
        let response = self
            .request(Method::POST, "/threads")
            .json(&serde_json::json!({}))
            .send()
            .await?;

        let thread: Thread = self.handle_response(response).await?;
        tracing::debug!(thread_id = %thread.id, "Thread created");

        Ok(thread)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientError;
    use reqwest::Client;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_create_thread_sends_auth_and_beta_headers() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/threads"))
            .and(header("authorization", "Bearer sk-test"))
            .and(header("openai-beta", "assistants=v2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "thread_abc",
                "object": "thread"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = AssistantsClient::with_client(server.uri(), "sk-test", Client::new());
        let thread = client.create_thread().await.unwrap();

        assert_eq!(thread.id, "thread_abc");
    }

    #[tokio::test]
    async fn test_create_thread_maps_error_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/threads"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": { "message": "Incorrect API key provided", "type": "invalid_request_error" }
            })))
            .mount(&server)
            .await;

        let client = AssistantsClient::with_client(server.uri(), "sk-bad", Client::new());
        let err = client.create_thread().await.unwrap_err();

        match err {
            ClientError::ApiError { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Incorrect API key provided");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_thread_rejects_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/threads"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = AssistantsClient::with_client(server.uri(), "sk-test", Client::new());
        let err = client.create_thread().await.unwrap_err();

        assert!(matches!(err, ClientError::ParseError(_)));
    }
}

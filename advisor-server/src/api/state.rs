//! Shared handler state
//!
//! Built once at start-up from [`Config`] and handed to every handler
//! through axum's `State`. Missing credentials are kept as `None` and
//! reported per request.

use std::sync::Arc;
use std::time::Duration;

use advisor_client::{AssistantsApi, AssistantsClient};
use anyhow::Context;

use crate::api::error::{ApiError, ApiResult};
use crate::config::Config;
use crate::service::{AssistantService, PollSettings};

#[derive(Clone)]
pub struct AppState {
    api: Option<Arc<dyn AssistantsApi>>,
    assistant_id: Option<String>,
    poll_interval: Duration,
    max_poll_attempts: Option<u32>,
}

impl AppState {
    pub fn new(
        api: Option<Arc<dyn AssistantsApi>>,
        assistant_id: Option<String>,
        poll_interval: Duration,
        max_poll_attempts: Option<u32>,
    ) -> Self {
        Self {
            api,
            assistant_id,
            poll_interval,
            max_poll_attempts,
        }
    }

    /// Builds the Assistants client from the configuration
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let api = match config.api_key() {
            Some(key) => {
                let http = reqwest::Client::builder()
                    .timeout(config.request_timeout())
                    .build()
                    .context("Failed to build HTTP client")?;
                let client = AssistantsClient::with_client(&config.openai_base_url, key, http);
                Some(Arc::new(client) as Arc<dyn AssistantsApi>)
            }
            None => None,
        };

        Ok(Self::new(
            api,
            config.assistant_id().map(str::to_string),
            config.poll_interval(),
            config.max_poll_attempts,
        ))
    }

    pub fn has_api(&self) -> bool {
        self.api.is_some()
    }

    pub fn has_assistant(&self) -> bool {
        self.assistant_id.is_some()
    }

    /// The Assistants API, or a configuration error when no key was given
    pub fn api(&self) -> ApiResult<Arc<dyn AssistantsApi>> {
        self.api.clone().ok_or_else(|| {
            ApiError::Configuration(
                "OpenAI API Key is missing or client not initialized.".to_string(),
            )
        })
    }

    /// The configured assistant, or a configuration error
    pub fn assistant(&self) -> ApiResult<AssistantService> {
        let api = self.api()?;
        let assistant_id = self.assistant_id.as_deref().ok_or_else(|| {
            ApiError::Configuration("OpenAI Assistant ID is missing.".to_string())
        })?;

        Ok(AssistantService::new(api, assistant_id))
    }

    /// Poll settings for an endpoint whose own budget is `default_attempts`
    pub fn poll(&self, default_attempts: u32) -> PollSettings {
        PollSettings::new(
            self.poll_interval,
            self.max_poll_attempts.unwrap_or(default_attempts),
        )
    }
}

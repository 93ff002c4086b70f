//! Server configuration
//!
//! Every setting can be given as a command-line flag or an environment
//! variable. The OpenAI credentials are optional at start-up: a missing key
//! or assistant id is reported per request as a configuration error.

use std::time::Duration;

use advisor_client::DEFAULT_BASE_URL;
use clap::Parser;

/// Server configuration
#[derive(Debug, Clone, Parser)]
#[command(name = "advisor-server")]
#[command(about = "EU AI Act advisor backend over the OpenAI Assistants API", long_about = None)]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "ADVISOR_BIND_ADDR", default_value = "0.0.0.0:8080")]
    pub bind_addr: String,

    /// OpenAI API key
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: Option<String>,

    /// Assistant used for every run
    #[arg(long, env = "OPENAI_ASSISTANT_ID")]
    pub openai_assistant_id: Option<String>,

    /// Base URL of the OpenAI REST API
    #[arg(long, env = "OPENAI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub openai_base_url: String,

    /// Timeout of a single outbound HTTP call, in seconds
    #[arg(long, env = "OPENAI_TIMEOUT_SECS", default_value_t = 30)]
    pub request_timeout_secs: u64,

    /// Delay before each run status check, in milliseconds
    #[arg(long, env = "POLL_INTERVAL_MS", default_value_t = 1000)]
    pub poll_interval_ms: u64,

    /// Overrides the per-endpoint maximum number of status checks
    #[arg(long, env = "MAX_POLL_ATTEMPTS")]
    pub max_poll_attempts: Option<u32>,

    /// Origins allowed to call the API from a browser (comma separated)
    #[arg(long, env = "ADVISOR_CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Vec<String>,
}

impl Config {
    /// API key, treating a blank value as absent
    pub fn api_key(&self) -> Option<&str> {
        non_blank(self.openai_api_key.as_deref())
    }

    /// Assistant id, treating a blank value as absent
    pub fn assistant_id(&self) -> Option<&str> {
        non_blank(self.openai_assistant_id.as_deref())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.bind_addr.is_empty() {
            anyhow::bail!("bind_addr cannot be empty");
        }

        if !self.openai_base_url.starts_with("http://")
            && !self.openai_base_url.starts_with("https://")
        {
            anyhow::bail!("openai_base_url must start with http:// or https://");
        }

        if self.poll_interval_ms == 0 {
            anyhow::bail!("poll_interval_ms must be greater than 0");
        }

        if self.max_poll_attempts == Some(0) {
            anyhow::bail!("max_poll_attempts must be greater than 0");
        }

        if self.request_timeout_secs == 0 {
            anyhow::bail!("request_timeout_secs must be greater than 0");
        }

        Ok(())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

//! Assistant service
//!
//! The one request flow every endpoint shares: post a user message to a
//! thread, run the assistant, wait for the run, read back the newest
//! assistant reply.

use std::sync::Arc;

use advisor_client::{AssistantsApi, ClientError, validate_id};
use advisor_core::dto::SortOrder;
use thiserror::Error;
use tracing::{debug, info};

use crate::service::poller::{PollError, PollSettings, RunPoller};

/// Where the user message goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThreadTarget {
    /// Create a fresh thread for a single-turn exchange
    New,
    /// Continue a caller-supplied thread
    Existing(String),
}

/// One question put to the assistant
#[derive(Debug, Clone)]
pub struct AskRequest {
    pub thread: ThreadTarget,
    pub content: String,
    pub instructions: Option<String>,
    pub poll: PollSettings,
    /// Returned when the thread holds no assistant text
    pub fallback: &'static str,
}

/// The assistant's reply and where it lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub thread_id: String,
    pub run_id: String,
    pub text: String,
}

#[derive(Debug, Error)]
pub enum AssistantError {
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error(transparent)]
    Poll(#[from] PollError),
}

/// Runs one configured assistant against threads
#[derive(Clone)]
pub struct AssistantService {
    api: Arc<dyn AssistantsApi>,
    assistant_id: String,
}

impl AssistantService {
    pub fn new(api: Arc<dyn AssistantsApi>, assistant_id: impl Into<String>) -> Self {
        Self {
            api,
            assistant_id: assistant_id.into(),
        }
    }

    /// Posts `req.content`, runs the assistant and returns its reply
    pub async fn ask(&self, req: AskRequest) -> Result<Answer, AssistantError> {
        let thread_id = match req.thread {
            ThreadTarget::Existing(id) => validate_id("thread", &id)?.to_string(),
            ThreadTarget::New => {
                let thread = self.api.create_thread().await?;
                info!("Thread created: {}", thread.id);
                thread.id
            }
        };

        self.api.create_message(&thread_id, &req.content).await?;
        debug!("Message added to thread {}", thread_id);

        let run = self
            .api
            .create_run(&thread_id, &self.assistant_id, req.instructions.as_deref())
            .await?;
        info!("Run {} created on thread {}", run.id, thread_id);

        RunPoller::new(Arc::clone(&self.api), req.poll)
            .wait(&thread_id, &run.id)
            .await?;
        info!("Run {} completed", run.id);

        let messages = self.api.list_messages(&thread_id, SortOrder::Desc).await?;
        let text = match messages.latest_assistant_text() {
            Some(text) => text.to_string(),
            None => {
                debug!("No assistant text on thread {}, using fallback", thread_id);
                req.fallback.to_string()
            }
        };

        Ok(Answer {
            thread_id,
            run_id: run.id,
            text,
        })
    }
}

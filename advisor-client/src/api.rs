//! Trait seam over the Assistants API
//!
//! The server depends on this trait rather than on [`AssistantsClient`]
//! directly, so handlers and the run poller can be exercised against
//! scripted fakes.

use advisor_core::domain::message::{Message, MessageList};
use advisor_core::domain::run::Run;
use advisor_core::domain::thread::Thread;
use advisor_core::dto::SortOrder;
use async_trait::async_trait;

use crate::AssistantsClient;
use crate::error::Result;

/// The five Assistants API calls the advisor needs
#[async_trait]
pub trait AssistantsApi: Send + Sync {
    /// Creates an empty thread
    async fn create_thread(&self) -> Result<Thread>;

    /// Appends a user message to a thread
    async fn create_message(&self, thread_id: &str, content: &str) -> Result<Message>;

    /// Starts a run of `assistant_id` against a thread
    async fn create_run(
        &self,
        thread_id: &str,
        assistant_id: &str,
        instructions: Option<&str>,
    ) -> Result<Run>;

    /// Fetches the current state of a run
    async fn retrieve_run(&self, thread_id: &str, run_id: &str) -> Result<Run>;

    /// Lists the messages of a thread
    async fn list_messages(&self, thread_id: &str, order: SortOrder) -> Result<MessageList>;
}

#[async_trait]
impl AssistantsApi for AssistantsClient {
    async fn create_thread(&self) -> Result<Thread> {
        AssistantsClient::create_thread(self).await
    }

    async fn create_message(&self, thread_id: &str, content: &str) -> Result<Message> {
        AssistantsClient::create_message(self, thread_id, content).await
    }

    async fn create_run(
        &self,
        thread_id: &str,
        assistant_id: &str,
        instructions: Option<&str>,
    ) -> Result<Run> {
        AssistantsClient::create_run(self, thread_id, assistant_id, instructions).await
    }

    async fn retrieve_run(&self, thread_id: &str, run_id: &str) -> Result<Run> {
        AssistantsClient::retrieve_run(self, thread_id, run_id).await
    }

    async fn list_messages(&self, thread_id: &str, order: SortOrder) -> Result<MessageList> {
        AssistantsClient::list_messages(self, thread_id, order).await
    }
}

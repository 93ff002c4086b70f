//! Message endpoints

use crate::error::Result;
use crate::{AssistantsClient, validate_id};
use advisor_core::domain::message::{Message, MessageList};
use advisor_core::dto::{CreateMessage, ListMessagesQuery, SortOrder};
use reqwest::Method;

impl AssistantsClient {
    /// Append a user message to a thread
    ///
    /// # Arguments
    /// * `thread_id` - The thread to append to
    /// * `content` - Plain-text message body
    pub async fn create_message(&self, thread_id: &str, content: &str) -> Result<Message> {
        let thread_id = validate_id("thread", thread_id)?;
        let path = format!("/threads/{}/messages", thread_id);
        let response = self
            .request(Method::POST, &path)
            .json(&CreateMessage::user(content))
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// List the messages of a thread
    ///
    /// # Arguments
    /// * `thread_id` - The thread to read
    /// * `order` - `Desc` returns the newest message first
    pub async fn list_messages(&self, thread_id: &str, order: SortOrder) -> Result<MessageList> {
        let thread_id = validate_id("thread", thread_id)?;
        let path = format!("/threads/{}/messages", thread_id);
        let query = ListMessagesQuery { order };
        let response = self
            .request(Method::GET, &path)
            .query(&query)
            .send()
            .await?;

        self.handle_response(response).await
    }
}

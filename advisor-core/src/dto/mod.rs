//! Request bodies and query parameters for the Assistants API
//!
//! These are the outbound wire shapes. Response shapes live in
//! [`crate::domain`].

use serde::{Deserialize, Serialize};

use crate::domain::message::MessageRole;

/// Body of the create message call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMessage {
    pub role: MessageRole,
    pub content: String,
}

impl CreateMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// Body of the create run call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRun {
    pub assistant_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

/// Sort order by creation time
///
/// Replies are always read newest first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Desc,
}

/// Query parameters of the list messages call
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListMessagesQuery {
    pub order: SortOrder,
}

//! Message domain types

use serde::{Deserialize, Serialize};

/// Author of a thread message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

/// A message belonging to a thread
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub id: Option<String>,
    pub role: MessageRole,
    #[serde(default)]
    pub content: Vec<ContentBlock>,
}

impl Message {
    /// Text of the first content block, if that block is text
    pub fn first_text(&self) -> Option<&str> {
        match self.content.first() {
            Some(ContentBlock::Text { text }) => Some(text.value.as_str()),
            _ => None,
        }
    }
}

/// One block of message content
///
/// Only text is consumed; images and other block types are kept opaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text { text: TextContent },
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextContent {
    pub value: String,
}

/// A page of messages as returned by the list endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageList {
    #[serde(default)]
    pub data: Vec<Message>,
}

impl MessageList {
    /// See [`latest_assistant_text`]
    pub fn latest_assistant_text(&self) -> Option<&str> {
        latest_assistant_text(&self.data)
    }
}

/// First text block of the newest assistant message
///
/// `messages` must be ordered newest first. Only the newest assistant
/// message is considered; if its first block is not text the result is
/// `None` even when older assistant messages carry text.
pub fn latest_assistant_text(messages: &[Message]) -> Option<&str> {
    messages
        .iter()
        .find(|m| m.role == MessageRole::Assistant)
        .and_then(Message::first_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn page(value: serde_json::Value) -> MessageList {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_latest_assistant_text_skips_user_messages() {
        let list = page(json!({
            "data": [
                { "role": "user", "content": [{ "type": "text", "text": { "value": "Hi" } }] },
                { "role": "assistant", "content": [{ "type": "text", "text": { "value": "Hello from AI!" } }] }
            ]
        }));

        assert_eq!(list.latest_assistant_text(), Some("Hello from AI!"));
    }

    #[test]
    fn test_latest_assistant_text_uses_newest() {
        let list = page(json!({
            "data": [
                { "role": "assistant", "content": [{ "type": "text", "text": { "value": "newest" } }] },
                { "role": "assistant", "content": [{ "type": "text", "text": { "value": "older" } }] }
            ]
        }));

        assert_eq!(list.latest_assistant_text(), Some("newest"));
    }

    #[test]
    fn test_non_text_first_block_yields_none() {
        let list = page(json!({
            "data": [
                {
                    "role": "assistant",
                    "content": [
                        { "type": "image_file", "image_file": { "file_id": "file_1" } },
                        { "type": "text", "text": { "value": "caption" } }
                    ]
                }
            ]
        }));

        assert_eq!(list.data[0].content[0], ContentBlock::Other);
        assert_eq!(list.latest_assistant_text(), None);
    }

    #[test]
    fn test_empty_list_yields_none() {
        assert_eq!(page(json!({ "data": [] })).latest_assistant_text(), None);
        assert_eq!(page(json!({})).latest_assistant_text(), None);
    }
}

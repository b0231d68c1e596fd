//! Request/response DTOs for chat endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::chat::ChatMessage;

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostChatRequest {
    pub user: Option<String>,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessageResponse {
    pub user: String,
    pub message: String,
    pub timestamp: String,
}

impl From<&ChatMessage> for ChatMessageResponse {
    fn from(msg: &ChatMessage) -> Self {
        Self {
            user: msg.user.clone(),
            message: msg.message.clone(),
            timestamp: msg.timestamp.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessagesResponse {
    pub success: bool,
    pub messages: Vec<ChatMessageResponse>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostChatResponse {
    pub success: bool,
    pub message: ChatMessageResponse,
    /// Present when the message carried a song request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub song_request: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_message_defaults_to_empty() {
        let req: PostChatRequest = serde_json::from_value(json!({ "user": "ana" })).unwrap();
        assert_eq!(req.message, "");
    }

    #[test]
    fn message_response_copies_fields() {
        let msg = ChatMessage::new(Some("ana"), "hi").unwrap();
        let response = ChatMessageResponse::from(&msg);
        assert_eq!(response.user, "ana");
        assert_eq!(response.timestamp, msg.timestamp.to_rfc3339());
    }
}

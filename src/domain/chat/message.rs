//! Chat message value object.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

use super::ChatError;

pub const ANONYMOUS_USER: &str = "Anonymous";
pub const BOT_USER: &str = "DJ Bot";
pub const SYSTEM_USER: &str = "System";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub user: String,
    pub message: String,
    pub timestamp: Timestamp,
}

impl ChatMessage {
    /// A listener's message. Blank user names post as `Anonymous`.
    pub fn new(user: Option<&str>, message: &str) -> Result<Self, ChatError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        let user = user
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .unwrap_or(ANONYMOUS_USER);

        Ok(Self {
            user: user.to_string(),
            message: message.to_string(),
            timestamp: Timestamp::now(),
        })
    }

    pub fn bot(message: impl Into<String>) -> Self {
        Self::from_service(BOT_USER, message)
    }

    pub fn system(message: impl Into<String>) -> Self {
        Self::from_service(SYSTEM_USER, message)
    }

    fn from_service(user: &str, message: impl Into<String>) -> Self {
        Self {
            user: user.to_string(),
            message: message.into(),
            timestamp: Timestamp::now(),
        }
    }
}

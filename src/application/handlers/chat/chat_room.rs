//! ChatRoom - Shared, bounded chat history.

use tokio::sync::RwLock;

use crate::domain::chat::{ChatLog, ChatMessage};

pub struct ChatRoom {
    log: RwLock<ChatLog>,
    page_size: usize,
}

impl ChatRoom {
    pub fn new(log: ChatLog, page_size: usize) -> Self {
        Self {
            log: RwLock::new(log),
            page_size: page_size.max(1),
        }
    }

    pub async fn post(&self, message: ChatMessage) {
        tracing::debug!(user = %message.user, "Chat message stored");
        self.log.write().await.push(message);
    }

    /// One page of the most recent messages, oldest first.
    pub async fn recent(&self) -> Vec<ChatMessage> {
        self.log.read().await.recent(self.page_size)
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn recent_is_limited_to_page_size() {
        let room = ChatRoom::new(ChatLog::new(10), 2);
        for text in ["one", "two", "three"] {
            room.post(ChatMessage::new(Some("ana"), text).unwrap()).await;
        }

        let texts: Vec<String> = room.recent().await.into_iter().map(|m| m.message).collect();
        assert_eq!(texts, vec!["two", "three"]);
    }
}

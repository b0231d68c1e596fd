//! ListChatMessagesHandler - Query handler for recent chat.

use std::sync::Arc;

use crate::domain::chat::ChatMessage;

use super::ChatRoom;

pub struct ListChatMessagesHandler {
    room: Arc<ChatRoom>,
}

impl ListChatMessagesHandler {
    pub fn new(room: Arc<ChatRoom>) -> Self {
        Self { room }
    }

    pub async fn handle(&self) -> Vec<ChatMessage> {
        self.room.recent().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chat::{ChatLog, SYSTEM_USER};

    #[tokio::test]
    async fn starts_with_welcome() {
        let room = Arc::new(ChatRoom::new(ChatLog::default(), 20));
        let messages = ListChatMessagesHandler::new(room).handle().await;

        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].user, SYSTEM_USER);
    }
}

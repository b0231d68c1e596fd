//! Bounded chat history.

use std::collections::VecDeque;

use super::ChatMessage;

/// Messages kept before the oldest are dropped.
pub const DEFAULT_RETENTION: usize = 100;
/// Messages returned to clients per read.
pub const DEFAULT_PAGE_SIZE: usize = 20;

const WELCOME: &str = "Welcome to PlayOff! Vote for your favourite songs!";

#[derive(Debug, Clone)]
pub struct ChatLog {
    messages: VecDeque<ChatMessage>,
    retention: usize,
}

impl ChatLog {
    pub fn new(retention: usize) -> Self {
        let retention = retention.max(1);
        Self {
            messages: VecDeque::with_capacity(retention),
            retention,
        }
    }

    /// A log opened with the system welcome message.
    pub fn with_welcome(retention: usize) -> Self {
        let mut log = Self::new(retention);
        log.push(ChatMessage::system(WELCOME));
        log
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push_back(message);
        while self.messages.len() > self.retention {
            self.messages.pop_front();
        }
    }

    /// The last `count` messages, oldest first.
    pub fn recent(&self, count: usize) -> Vec<ChatMessage> {
        let skip = self.messages.len().saturating_sub(count);
        self.messages.iter().skip(skip).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn retention(&self) -> usize {
        self.retention
    }
}

impl Default for ChatLog {
    fn default() -> Self {
        Self::with_welcome(DEFAULT_RETENTION)
    }
}

//! Chat error types.

use thiserror::Error;

use crate::domain::foundation::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    #[error("Message cannot be empty")]
    EmptyMessage,
}

impl From<ChatError> for DomainError {
    fn from(err: ChatError) -> Self {
        DomainError::validation("message", err.to_string())
    }
}

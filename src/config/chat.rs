//! Chat configuration

use serde::Deserialize;

use crate::domain::chat::{DEFAULT_PAGE_SIZE, DEFAULT_RETENTION};

use super::error::ValidationError;

#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    /// Messages kept in memory
    #[serde(default = "default_retention")]
    pub retention: usize,

    /// Messages returned per read
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl ChatConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.retention == 0 || self.page_size == 0 || self.page_size > self.retention {
            return Err(ValidationError::InvalidChatWindow);
        }
        Ok(())
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            retention: default_retention(),
            page_size: default_page_size(),
        }
    }
}

fn default_retention() -> usize {
    DEFAULT_RETENTION
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

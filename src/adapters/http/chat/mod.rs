//! HTTP adapter for chat endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{ChatMessageResponse, ChatMessagesResponse, PostChatRequest, PostChatResponse};
pub use handlers::ChatHandlers;
pub use routes::chat_routes;

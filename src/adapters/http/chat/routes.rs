//! HTTP routes for chat endpoints.

use axum::{routing::get, Router};

use super::handlers::{list_messages, post_message, ChatHandlers};

/// Routes relative to `/api`.
pub fn chat_routes(handlers: ChatHandlers) -> Router {
    Router::new()
        .route("/chat", get(list_messages).post(post_message))
        .with_state(handlers)
}

//! HTTP handlers for chat endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{chat_error, json_rejection};
use crate::application::handlers::chat::{
    CommandOutcome, ListChatMessagesHandler, PostChatMessageCommand, PostChatMessageHandler,
};

use super::dto::{ChatMessageResponse, ChatMessagesResponse, PostChatRequest, PostChatResponse};

#[derive(Clone)]
pub struct ChatHandlers {
    post_handler: Arc<PostChatMessageHandler>,
    list_handler: Arc<ListChatMessagesHandler>,
}

impl ChatHandlers {
    pub fn new(
        post_handler: Arc<PostChatMessageHandler>,
        list_handler: Arc<ListChatMessagesHandler>,
    ) -> Self {
        Self {
            post_handler,
            list_handler,
        }
    }
}

/// GET /api/chat - Most recent messages
pub async fn list_messages(State(handlers): State<ChatHandlers>) -> Response {
    let messages = handlers.list_handler.handle().await;
    let response = ChatMessagesResponse {
        success: true,
        messages: messages.iter().map(ChatMessageResponse::from).collect(),
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// POST /api/chat - Post a message, possibly a song request
pub async fn post_message(
    State(handlers): State<ChatHandlers>,
    body: Result<Json<PostChatRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return json_rejection(rejection),
    };

    let cmd = PostChatMessageCommand {
        user: req.user,
        message: req.message,
    };

    match handlers.post_handler.handle(cmd).await {
        Ok(result) => {
            let song_request = result.command.map(|outcome| match outcome {
                CommandOutcome::Added(_) => "added".to_string(),
                CommandOutcome::AlreadyListed => "duplicate".to_string(),
                CommandOutcome::Failed(_) => "failed".to_string(),
            });
            let response = PostChatResponse {
                success: true,
                message: ChatMessageResponse::from(&result.message),
                song_request,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => chat_error(e),
    }
}

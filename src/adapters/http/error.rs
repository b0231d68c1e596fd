//! Uniform error envelope for every endpoint.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::chat::ChatError;
use crate::domain::voting::VotingError;

/// `{ "success": false, "code": "...", "error": "..." }`
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub code: String,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            code: code.into(),
            error: error.into(),
        }
    }

    pub fn bad_request(error: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", error)
    }

    pub fn internal(error: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", error)
    }

    pub fn into_response_with(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

pub fn bad_request(error: impl Into<String>) -> Response {
    ErrorResponse::bad_request(error).into_response_with(StatusCode::BAD_REQUEST)
}

/// Malformed or missing JSON bodies are client errors.
pub fn json_rejection(rejection: JsonRejection) -> Response {
    bad_request(rejection.body_text())
}

pub fn voting_error(error: VotingError) -> Response {
    let status = match &error {
        VotingError::NotFound(_) => StatusCode::NOT_FOUND,
        VotingError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
        VotingError::Duplicate { .. } | VotingError::Capacity { .. } => StatusCode::CONFLICT,
        VotingError::Infrastructure(msg) => {
            tracing::error!(error = %msg, "Voting request failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    ErrorResponse::new(error.code().to_string(), error.message()).into_response_with(status)
}

pub fn chat_error(error: ChatError) -> Response {
    match error {
        ChatError::EmptyMessage => bad_request(error.to_string()),
    }
}

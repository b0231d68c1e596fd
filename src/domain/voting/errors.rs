//! Voting-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, SongId, ValidationError};

/// Voting and roster errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VotingError {
    /// No song with this id is on the roster.
    NotFound(SongId),
    /// A song with the same normalized title and artist is already listed.
    Duplicate { title: String, artist: String },
    /// Roster is full. Reserved for a rejecting roster policy; the default
    /// policy evicts instead.
    Capacity { max: usize },
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl VotingError {
    pub fn not_found(id: SongId) -> Self {
        VotingError::NotFound(id)
    }
    pub fn duplicate(title: impl Into<String>, artist: impl Into<String>) -> Self {
        VotingError::Duplicate {
            title: title.into(),
            artist: artist.into(),
        }
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        VotingError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        VotingError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            VotingError::NotFound(_) => ErrorCode::SongNotFound,
            VotingError::Duplicate { .. } => ErrorCode::DuplicateSong,
            VotingError::Capacity { .. } => ErrorCode::RosterFull,
            VotingError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            VotingError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            VotingError::NotFound(id) => format!("Song not found: {}", id),
            VotingError::Duplicate { title, artist } => {
                format!("\"{}\" by {} is already on the voting list", title, artist)
            }
            VotingError::Capacity { max } => format!("Roster is full ({} songs)", max),
            VotingError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            VotingError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for VotingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for VotingError {}

impl From<ValidationError> for VotingError {
    fn from(err: ValidationError) -> Self {
        VotingError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for VotingError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed | ErrorCode::EmptyField | ErrorCode::InvalidFormat => {
                VotingError::ValidationFailed {
                    field: err
                        .details
                        .get("field")
                        .cloned()
                        .unwrap_or_else(|| "unknown".to_string()),
                    message: err.message,
                }
            }
            _ => VotingError::Infrastructure(err.to_string()),
        }
    }
}

impl From<VotingError> for DomainError {
    fn from(err: VotingError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}

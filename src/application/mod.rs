//! Application layer - Commands, Queries, Handlers and event consumers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod consumers;
pub mod handlers;

pub use consumers::{PlaybackSelector, PlaybackState, UiState, UiStateProjector};
pub use handlers::{
    AddSongCommand, AddSongHandler, CastVoteCommand, CastVoteHandler, ChatRoom,
    EnrichCoversHandler, GetPlayerHandler, GetSongsHandler, ListChatMessagesHandler,
    PostChatMessageCommand, PostChatMessageHandler, RemoveSongCommand, RemoveSongHandler,
    SuperVoteCommand, SuperVoteHandler, VotingService,
};

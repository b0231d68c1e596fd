//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod chat;
pub mod voting;

pub use chat::{
    ChatRoom, CommandOutcome, ListChatMessagesHandler, PostChatMessageCommand,
    PostChatMessageHandler, PostChatMessageResult,
};
pub use voting::{
    AddSongCommand, AddSongHandler, AddSongResult, CastVoteCommand, CastVoteHandler,
    CastVoteResult, EnrichCoversHandler, EnrichCoversResult, GetPlayerHandler, GetSongsHandler,
    PlayerView, RemoveSongCommand, RemoveSongHandler, SongsView, SuperVoteCommand,
    SuperVoteHandler, SuperVoteResult, VotingService,
};

//! Voting command and query handlers.

mod add_song;
mod cast_vote;
mod enrich_covers;
mod get_player;
mod get_songs;
mod remove_song;
mod super_vote;
mod voting_service;

pub use add_song::{AddSongCommand, AddSongHandler, AddSongResult};
pub use cast_vote::{CastVoteCommand, CastVoteHandler, CastVoteResult};
pub use enrich_covers::{EnrichCoversHandler, EnrichCoversResult};
pub use get_player::{GetPlayerHandler, PlayerView};
pub use get_songs::{GetSongsHandler, SongsView};
pub use remove_song::{RemoveSongCommand, RemoveSongHandler};
pub use super_vote::{SuperVoteCommand, SuperVoteHandler, SuperVoteResult};
pub use voting_service::VotingService;

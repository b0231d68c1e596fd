//! HTTP adapter for song, vote and player endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AddSongRequest, AddSongResponse, PlayerResponse, RemoveSongResponse, SongResponse,
    SongsResponse, UiStateResponse, UpdateCoversResponse, VoteRequest, VoteResponse,
};
pub use handlers::SongHandlers;
pub use routes::song_routes;

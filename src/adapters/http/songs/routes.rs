//! HTTP routes for song, vote and player endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};

use super::handlers::{
    add_song, list_songs, player, remove_song, super_vote, update_covers, vote, SongHandlers,
};

/// Routes relative to `/api`.
pub fn song_routes(handlers: SongHandlers) -> Router {
    Router::new()
        .route("/songs", get(list_songs).post(add_song))
        .route("/songs/:id", delete(remove_song))
        .route("/vote", post(vote))
        .route("/super-vote", post(super_vote))
        .route("/player", get(player))
        .route("/update-covers", post(update_covers))
        .with_state(handlers)
}

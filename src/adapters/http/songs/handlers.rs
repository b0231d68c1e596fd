//! HTTP handlers for song, vote and player endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{bad_request, json_rejection, voting_error};
use crate::application::handlers::voting::{
    AddSongHandler, CastVoteCommand, CastVoteHandler, EnrichCoversHandler, GetPlayerHandler,
    GetSongsHandler, RemoveSongCommand, RemoveSongHandler, SuperVoteCommand, SuperVoteHandler,
};
use crate::domain::foundation::SongId;

use super::dto::{
    maybe_song, AddSongRequest, AddSongResponse, PlayerResponse, RemoveSongResponse,
    SongResponse, SongsResponse, UpdateCoversResponse, VoteRequest, VoteResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct SongHandlers {
    list_handler: Arc<GetSongsHandler>,
    player_handler: Arc<GetPlayerHandler>,
    vote_handler: Arc<CastVoteHandler>,
    super_vote_handler: Arc<SuperVoteHandler>,
    add_handler: Arc<AddSongHandler>,
    remove_handler: Arc<RemoveSongHandler>,
    enrich_handler: Arc<EnrichCoversHandler>,
}

impl SongHandlers {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        list_handler: Arc<GetSongsHandler>,
        player_handler: Arc<GetPlayerHandler>,
        vote_handler: Arc<CastVoteHandler>,
        super_vote_handler: Arc<SuperVoteHandler>,
        add_handler: Arc<AddSongHandler>,
        remove_handler: Arc<RemoveSongHandler>,
        enrich_handler: Arc<EnrichCoversHandler>,
    ) -> Self {
        Self {
            list_handler,
            player_handler,
            vote_handler,
            super_vote_handler,
            add_handler,
            remove_handler,
            enrich_handler,
        }
    }
}

/// Reads the required `songId` from a vote body.
fn required_song_id(body: Result<Json<VoteRequest>, JsonRejection>) -> Result<SongId, Response> {
    let Json(req) = body.map_err(json_rejection)?;
    let raw = req
        .song_id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| bad_request("Song id is required"))?;
    SongId::new(raw).map_err(|e| bad_request(e.to_string()))
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/songs - Roster sorted by votes
pub async fn list_songs(State(handlers): State<SongHandlers>) -> Response {
    let view = handlers.list_handler.handle().await;
    (StatusCode::OK, Json(SongsResponse::from(view))).into_response()
}

/// POST /api/songs - Add a song
pub async fn add_song(
    State(handlers): State<SongHandlers>,
    body: Result<Json<AddSongRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return json_rejection(rejection),
    };

    match handlers.add_handler.handle(req.into()).await {
        Ok(result) => {
            let response = AddSongResponse {
                success: true,
                message: format!(
                    "\"{}\" by {} was added to the vote!",
                    result.song.title(),
                    result.song.artist()
                ),
                song: SongResponse::from(&result.song),
                evicted: result.evicted.iter().map(SongResponse::from).collect(),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => voting_error(e),
    }
}

/// DELETE /api/songs/:id - Remove a song
pub async fn remove_song(State(handlers): State<SongHandlers>, Path(id): Path<String>) -> Response {
    let song_id = match SongId::new(id) {
        Ok(id) => id,
        Err(e) => return bad_request(e.to_string()),
    };

    match handlers
        .remove_handler
        .handle(RemoveSongCommand {
            song_id: song_id.clone(),
        })
        .await
    {
        Ok(event) => {
            let response = RemoveSongResponse {
                success: true,
                song_id: song_id.to_string(),
                highest_voted: maybe_song(event.leader.as_ref()),
                message: "Song removed from the vote".to_string(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => voting_error(e),
    }
}

/// POST /api/vote - One vote for a song
pub async fn vote(
    State(handlers): State<SongHandlers>,
    body: Result<Json<VoteRequest>, JsonRejection>,
) -> Response {
    let song_id = match required_song_id(body) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.vote_handler.handle(CastVoteCommand { song_id }).await {
        Ok(result) => {
            let response = VoteResponse {
                success: true,
                message: format!("Vote registered for \"{}\"!", result.song.title()),
                song: SongResponse::from(&result.song),
                highest_voted: maybe_song(result.highest_voted.as_ref()),
                current_playing: maybe_song(result.now_playing.as_ref()),
                votes_added: None,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => voting_error(e),
    }
}

/// POST /api/super-vote - Enough votes to take the lead
pub async fn super_vote(
    State(handlers): State<SongHandlers>,
    body: Result<Json<VoteRequest>, JsonRejection>,
) -> Response {
    let song_id = match required_song_id(body) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .super_vote_handler
        .handle(SuperVoteCommand { song_id })
        .await
    {
        Ok(result) => {
            let response = VoteResponse {
                success: true,
                message: format!(
                    "⚡ Super vote! \"{}\" now has {} votes!",
                    result.song.title(),
                    result.song.votes()
                ),
                song: SongResponse::from(&result.song),
                highest_voted: maybe_song(result.highest_voted.as_ref()),
                current_playing: maybe_song(result.now_playing.as_ref()),
                votes_added: Some(result.votes_added),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => voting_error(e),
    }
}

/// GET /api/player - What is playing and what leads
pub async fn player(State(handlers): State<SongHandlers>) -> Response {
    let view = handlers.player_handler.handle().await;
    let response = PlayerResponse {
        success: true,
        current_playing: maybe_song(view.current_playing.as_ref()),
        highest_voted: maybe_song(view.highest_voted.as_ref()),
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// POST /api/update-covers - Look up missing and placeholder covers
pub async fn update_covers(State(handlers): State<SongHandlers>) -> Response {
    let result = handlers.enrich_handler.handle().await;
    let response = UpdateCoversResponse {
        success: true,
        message: format!("{} album covers were updated", result.updated_count),
        checked: result.checked,
        updated_count: result.updated_count,
    };
    (StatusCode::OK, Json(response)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_song_id_is_bad_request() {
        let response = required_song_id(Ok(Json(VoteRequest::default()))).unwrap_err();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn blank_song_id_is_bad_request() {
        let body = Ok(Json(VoteRequest {
            song_id: Some("   ".to_string()),
        }));
        assert_eq!(required_song_id(body).unwrap_err().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn present_song_id_is_parsed() {
        let body = Ok(Json(VoteRequest {
            song_id: Some("deftones-change".to_string()),
        }));
        assert_eq!(required_song_id(body).unwrap().as_str(), "deftones-change");
    }
}

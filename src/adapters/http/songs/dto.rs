//! Request/response DTOs for song and vote endpoints.

use serde::{Deserialize, Serialize};

use crate::application::consumers::UiState;
use crate::application::handlers::voting::{AddSongCommand, SongsView};
use crate::domain::voting::Song;

// ════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/vote` and `POST /api/super-vote`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteRequest {
    pub song_id: Option<String>,
}

/// Body of `POST /api/songs`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddSongRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub artist: String,
    pub album: Option<String>,
    pub audio_url: Option<String>,
    pub album_cover: Option<String>,
    pub year: Option<u16>,
    pub added_by: Option<String>,
}

impl From<AddSongRequest> for AddSongCommand {
    fn from(req: AddSongRequest) -> Self {
        AddSongCommand {
            id: None,
            title: req.title,
            artist: req.artist,
            album: req.album,
            audio_ref: req.audio_url,
            cover_ref: req.album_cover,
            year: req.year,
            added_by: req.added_by,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SongResponse {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub audio_url: String,
    pub album_cover: Option<String>,
    pub votes: u32,
    pub added_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added_by: Option<String>,
}

impl From<&Song> for SongResponse {
    fn from(song: &Song) -> Self {
        Self {
            id: song.id().to_string(),
            title: song.title().to_string(),
            artist: song.artist().to_string(),
            album: song.album().to_string(),
            audio_url: song.audio_ref().to_string(),
            album_cover: song.cover_ref().map(str::to_string),
            votes: song.votes(),
            added_at: song.added_at().to_rfc3339(),
            year: song.year(),
            added_by: song.added_by().map(str::to_string),
        }
    }
}

pub(super) fn song_list(songs: &[Song]) -> Vec<SongResponse> {
    songs.iter().map(SongResponse::from).collect()
}

pub(super) fn maybe_song(song: Option<&Song>) -> Option<SongResponse> {
    song.map(SongResponse::from)
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiStateResponse {
    pub roster: Vec<SongResponse>,
    pub leader: Option<SongResponse>,
    pub last_update: Option<String>,
}

impl From<&UiState> for UiStateResponse {
    fn from(state: &UiState) -> Self {
        Self {
            roster: song_list(&state.roster),
            leader: maybe_song(state.leader.as_ref()),
            last_update: state.last_update.map(|t| t.to_rfc3339()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SongsResponse {
    pub success: bool,
    pub songs: Vec<SongResponse>,
    pub highest_voted: Option<SongResponse>,
    pub total_songs: usize,
    pub max_songs: usize,
    pub current_playing: Option<SongResponse>,
    pub ui_state: UiStateResponse,
}

impl From<SongsView> for SongsResponse {
    fn from(view: SongsView) -> Self {
        Self {
            success: true,
            songs: song_list(&view.songs),
            highest_voted: maybe_song(view.highest_voted.as_ref()),
            total_songs: view.total_songs,
            max_songs: view.max_songs,
            current_playing: maybe_song(view.current_playing.as_ref()),
            ui_state: UiStateResponse::from(&view.ui_state),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteResponse {
    pub success: bool,
    pub song: SongResponse,
    pub highest_voted: Option<SongResponse>,
    pub current_playing: Option<SongResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub votes_added: Option<u32>,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResponse {
    pub success: bool,
    pub current_playing: Option<SongResponse>,
    pub highest_voted: Option<SongResponse>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddSongResponse {
    pub success: bool,
    pub song: SongResponse,
    pub evicted: Vec<SongResponse>,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveSongResponse {
    pub success: bool,
    pub song_id: String,
    pub highest_voted: Option<SongResponse>,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCoversResponse {
    pub success: bool,
    pub message: String,
    pub checked: usize,
    pub updated_count: usize,
}

//! GetSongsHandler - Query handler for the roster listing.

use std::sync::Arc;

use crate::application::consumers::{PlaybackSelector, UiState, UiStateProjector};
use crate::domain::voting::Song;

use super::VotingService;

/// The roster as clients see it.
#[derive(Debug, Clone)]
pub struct SongsView {
    /// Sorted by votes, highest first.
    pub songs: Vec<Song>,
    pub highest_voted: Option<Song>,
    pub total_songs: usize,
    pub max_songs: usize,
    pub current_playing: Option<Song>,
    pub ui_state: UiState,
}

pub struct GetSongsHandler {
    service: Arc<VotingService>,
    playback: Arc<PlaybackSelector>,
    projector: Arc<UiStateProjector>,
}

impl GetSongsHandler {
    pub fn new(
        service: Arc<VotingService>,
        playback: Arc<PlaybackSelector>,
        projector: Arc<UiStateProjector>,
    ) -> Self {
        Self {
            service,
            playback,
            projector,
        }
    }

    pub async fn handle(&self) -> SongsView {
        let (songs, highest_voted, total_songs, max_songs) = self
            .service
            .read(|ledger| {
                (
                    ledger.sorted_roster(),
                    ledger.leader().cloned(),
                    ledger.len(),
                    ledger.max_songs(),
                )
            })
            .await;

        SongsView {
            songs,
            highest_voted,
            total_songs,
            max_songs,
            current_playing: self.playback.currently_playing(),
            ui_state: self.projector.get_state(),
        }
    }
}

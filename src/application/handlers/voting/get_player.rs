//! GetPlayerHandler - Query handler for playback state.

use std::sync::Arc;

use crate::application::consumers::PlaybackSelector;
use crate::domain::voting::Song;

use super::VotingService;

#[derive(Debug, Clone)]
pub struct PlayerView {
    pub current_playing: Option<Song>,
    pub highest_voted: Option<Song>,
}

pub struct GetPlayerHandler {
    service: Arc<VotingService>,
    playback: Arc<PlaybackSelector>,
}

impl GetPlayerHandler {
    pub fn new(service: Arc<VotingService>, playback: Arc<PlaybackSelector>) -> Self {
        Self { service, playback }
    }

    pub async fn handle(&self) -> PlayerView {
        let highest_voted = self.service.read(|ledger| ledger.leader().cloned()).await;
        PlayerView {
            current_playing: self.playback.currently_playing(),
            highest_voted,
        }
    }
}

//! RemoveSongHandler - Command handler for taking a song off the roster.

use std::sync::Arc;

use crate::domain::foundation::SongId;
use crate::domain::voting::{VoteEvent, VotingError};

use super::VotingService;

#[derive(Debug, Clone)]
pub struct RemoveSongCommand {
    pub song_id: SongId,
}

pub struct RemoveSongHandler {
    service: Arc<VotingService>,
}

impl RemoveSongHandler {
    pub fn new(service: Arc<VotingService>) -> Self {
        Self { service }
    }

    pub async fn handle(&self, cmd: RemoveSongCommand) -> Result<VoteEvent, VotingError> {
        self.service.remove_song(&cmd.song_id).await
    }
}

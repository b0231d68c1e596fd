//! CastVoteHandler - Command handler for a single vote.

use std::sync::Arc;

use crate::application::consumers::PlaybackSelector;
use crate::domain::foundation::SongId;
use crate::domain::voting::{Song, VoteEvent, VotingError};

use super::VotingService;

/// Command to add one vote to a song.
#[derive(Debug, Clone)]
pub struct CastVoteCommand {
    pub song_id: SongId,
}

/// Result of a registered vote.
#[derive(Debug, Clone)]
pub struct CastVoteResult {
    pub song: Song,
    pub highest_voted: Option<Song>,
    pub now_playing: Option<Song>,
    pub event: VoteEvent,
}

/// Handler for single votes.
pub struct CastVoteHandler {
    service: Arc<VotingService>,
    playback: Arc<PlaybackSelector>,
}

impl CastVoteHandler {
    pub fn new(service: Arc<VotingService>, playback: Arc<PlaybackSelector>) -> Self {
        Self { service, playback }
    }

    pub async fn handle(&self, cmd: CastVoteCommand) -> Result<CastVoteResult, VotingError> {
        let event = self
            .service
            .register_vote_with(&cmd.song_id, |song, _| Ok(song.votes().saturating_add(1)))
            .await?;

        let song = find_in_snapshot(&event, &cmd.song_id)?;
        Ok(CastVoteResult {
            song,
            highest_voted: event.leader.clone(),
            now_playing: self.playback.currently_playing(),
            event,
        })
    }
}

/// The voted song as it appears in the event's roster snapshot.
pub(super) fn find_in_snapshot(event: &VoteEvent, song_id: &SongId) -> Result<Song, VotingError> {
    event
        .roster
        .iter()
        .find(|s| s.id() == song_id)
        .cloned()
        .ok_or_else(|| VotingError::not_found(song_id.clone()))
}

//! SuperVoteHandler - Adds just enough votes to take the lead.

use std::sync::Arc;

use crate::application::consumers::PlaybackSelector;
use crate::domain::foundation::SongId;
use crate::domain::voting::{Song, SuperVoteCalculator, VoteEvent, VotingError};

use super::cast_vote::find_in_snapshot;
use super::VotingService;

#[derive(Debug, Clone)]
pub struct SuperVoteCommand {
    pub song_id: SongId,
}

#[derive(Debug, Clone)]
pub struct SuperVoteResult {
    pub song: Song,
    pub votes_added: u32,
    pub highest_voted: Option<Song>,
    pub now_playing: Option<Song>,
    pub event: VoteEvent,
}

pub struct SuperVoteHandler {
    service: Arc<VotingService>,
    playback: Arc<PlaybackSelector>,
}

impl SuperVoteHandler {
    pub fn new(service: Arc<VotingService>, playback: Arc<PlaybackSelector>) -> Self {
        Self { service, playback }
    }

    /// The playing song is read, the boost computed and the vote applied
    /// under one ledger lock. Playback only changes while that lock is held,
    /// so no other vote can land in between.
    pub async fn handle(&self, cmd: SuperVoteCommand) -> Result<SuperVoteResult, VotingError> {
        let playback = &self.playback;
        let mut votes_added = 0;

        let event = self
            .service
            .register_vote_with(&cmd.song_id, |song, roster| {
                let playing = playback.currently_playing_id();
                votes_added = SuperVoteCalculator::compute_boost(song.id(), roster, playing.as_ref())?;
                Ok(song.votes().saturating_add(votes_added))
            })
            .await?;

        tracing::info!(
            song_id = %cmd.song_id,
            votes_added,
            total = event.new_vote_count,
            "Super vote applied"
        );

        let song = find_in_snapshot(&event, &cmd.song_id)?;
        Ok(SuperVoteResult {
            song,
            votes_added,
            highest_voted: event.leader.clone(),
            now_playing: self.playback.currently_playing(),
            event,
        })
    }
}

//! PlaybackSelector - Decides which song is playing.
//!
//! Follows the leader: every `VOTE_CHANGE` naming a different leader
//! switches "now playing" to it. Media control belongs to the audio
//! player, which polls `state()`.

use std::sync::{PoisonError, RwLock};

use serde::Serialize;

use crate::domain::foundation::SongId;
use crate::domain::voting::{Song, VoteEvent, VoteEventKind};
use crate::ports::{ConsumerError, EventConsumer};

const NAME: &str = "PlaybackSelector";

/// Playback state machine: `Idle` until a leader is first announced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "song", rename_all = "camelCase")]
pub enum PlaybackState {
    Idle,
    Playing(Song),
}

impl PlaybackState {
    pub fn song(&self) -> Option<&Song> {
        match self {
            PlaybackState::Idle => None,
            PlaybackState::Playing(song) => Some(song),
        }
    }
}

pub struct PlaybackSelector {
    state: RwLock<PlaybackState>,
}

impl PlaybackSelector {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(PlaybackState::Idle),
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn currently_playing(&self) -> Option<Song> {
        self.state().song().cloned()
    }

    pub fn currently_playing_id(&self) -> Option<SongId> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .song()
            .map(|s| s.id().clone())
    }

    fn follow_leader(&self, event: &VoteEvent) -> Result<(), ConsumerError> {
        let Some(leader) = &event.leader else {
            return Ok(());
        };
        let mut state = self.state.write().map_err(|_| ConsumerError::poisoned(NAME))?;
        if state.song().map(Song::id) == Some(leader.id()) {
            return Ok(());
        }

        tracing::info!(
            previous = ?state.song().map(|s| s.id().as_str()),
            song_id = %leader.id(),
            title = leader.title(),
            artist = leader.artist(),
            "Now playing"
        );
        *state = PlaybackState::Playing(leader.clone());
        Ok(())
    }

    /// The playing song left the roster: move to the new leader, or stop.
    fn drop_removed(&self, event: &VoteEvent) -> Result<(), ConsumerError> {
        let mut state = self.state.write().map_err(|_| ConsumerError::poisoned(NAME))?;
        if state.song().map(Song::id) != Some(&event.song_id) {
            return Ok(());
        }

        *state = match &event.leader {
            Some(leader) => {
                tracing::info!(song_id = %leader.id(), "Playing song removed, switching to leader");
                PlaybackState::Playing(leader.clone())
            }
            None => {
                tracing::info!("Playing song removed, roster empty");
                PlaybackState::Idle
            }
        };
        Ok(())
    }
}

impl Default for PlaybackSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl EventConsumer for PlaybackSelector {
    fn on_event(&self, event: &VoteEvent) -> Result<(), ConsumerError> {
        match event.kind {
            VoteEventKind::VoteChange => self.follow_leader(event),
            VoteEventKind::SongRemoved => self.drop_removed(event),
            VoteEventKind::VoteUpdate | VoteEventKind::SongAdded => {
                tracing::debug!(kind = %event.kind, song_id = %event.song_id, "No playback change");
                Ok(())
            }
        }
    }

    fn name(&self) -> &str {
        NAME
    }
}

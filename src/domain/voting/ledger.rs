//! VoteLedger - vote counts, leader selection and event construction.
//!
//! The ledger is the only owner of `LeaderState`. After `register_vote`
//! returns, the recognised leader is `argmax(votes)` over the roster, ties
//! going to the earliest `added_at` and then to roster order.
//!
//! Adding a song does not re-run the election: a pre-seeded song with more
//! votes than the leader only takes over on the next registered vote. The
//! leader is recomputed outside a vote only when the seat is vacant, i.e.
//! the roster was empty or the leader itself left the roster.

use crate::domain::foundation::SongId;

use super::song::{NewSong, Song};
use super::song_store::SongStore;
use super::{VoteEvent, VoteEventKind, VotingError};

/// Result of adding a song through the ledger.
#[derive(Debug, Clone)]
pub struct SongAdmitted {
    pub song: Song,
    pub evicted: Vec<Song>,
    /// `SONG_ADDED` for the new song.
    pub event: VoteEvent,
    /// One `SONG_REMOVED` per evicted song, to be published after `event`.
    pub removals: Vec<VoteEvent>,
}

/// Current leader of a roster: highest votes, earliest `added_at` on ties.
pub fn leader_of(songs: &[Song]) -> Option<&Song> {
    songs.iter().fold(None, |best: Option<&Song>, song| match best {
        Some(current)
            if current.votes() > song.votes()
                || (current.votes() == song.votes()
                    && !song.added_at().is_before(&current.added_at())) =>
        {
            Some(current)
        }
        _ => Some(song),
    })
}

/// Songs ordered by votes descending; equal votes keep roster order.
pub fn sort_by_votes(songs: &[Song]) -> Vec<Song> {
    let mut sorted = songs.to_vec();
    sorted.sort_by(|a, b| b.votes().cmp(&a.votes()));
    sorted
}

#[derive(Debug, Clone)]
pub struct VoteLedger {
    store: SongStore,
    leader: Option<SongId>,
}

impl VoteLedger {
    /// Wraps a roster, recognising its current leader.
    pub fn new(store: SongStore) -> Self {
        let leader = leader_of(store.all()).map(|s| s.id().clone());
        if let Some(id) = &leader {
            tracing::info!(song_id = %id, "Initial leader recognised");
        }
        Self { store, leader }
    }

    /// Sets `song_id`'s vote count to `new_vote_count` and re-elects.
    ///
    /// This is an absolute set; callers compute increments themselves.
    pub fn register_vote(
        &mut self,
        song_id: &SongId,
        new_vote_count: u32,
    ) -> Result<VoteEvent, VotingError> {
        let song = self
            .store
            .get_mut(song_id)
            .ok_or_else(|| VotingError::not_found(song_id.clone()))?;
        let previous = song.votes();
        song.set_votes(new_vote_count);

        tracing::info!(
            song_id = %song_id,
            previous,
            votes = new_vote_count,
            "Vote registered"
        );

        let elected = leader_of(self.store.all()).map(|s| s.id().clone());
        let kind = if elected != self.leader {
            tracing::info!(
                previous = ?self.leader.as_ref().map(SongId::as_str),
                leader = ?elected.as_ref().map(SongId::as_str),
                "Leader changed"
            );
            self.leader = elected;
            VoteEventKind::VoteChange
        } else {
            VoteEventKind::VoteUpdate
        };

        Ok(self.snapshot(kind, song_id.clone(), new_vote_count))
    }

    /// Adds a song to the roster and emits `SONG_ADDED`, followed by a
    /// `SONG_REMOVED` for every song the admission evicted.
    pub fn add_song(&mut self, new: NewSong) -> Result<SongAdmitted, VotingError> {
        let admission = self.store.add(new)?;
        self.fill_vacant_leader();

        let event = self.snapshot(
            VoteEventKind::SongAdded,
            admission.song.id().clone(),
            admission.song.votes(),
        );
        let removals = admission
            .evicted
            .iter()
            .map(|gone| self.snapshot(VoteEventKind::SongRemoved, gone.id().clone(), gone.votes()))
            .collect();

        Ok(SongAdmitted {
            song: admission.song,
            evicted: admission.evicted,
            event,
            removals,
        })
    }

    /// Removes a song from the roster and emits `SONG_REMOVED`.
    pub fn remove_song(&mut self, song_id: &SongId) -> Result<VoteEvent, VotingError> {
        let removed = self.store.remove(song_id)?;
        tracing::info!(song_id = %song_id, votes = removed.votes(), "Song removed from roster");
        self.fill_vacant_leader();

        Ok(self.snapshot(VoteEventKind::SongRemoved, song_id.clone(), removed.votes()))
    }

    /// Writes an enrichment result back. Returns `false` if the song has
    /// left the roster in the meantime.
    pub fn apply_cover(&mut self, song_id: &SongId, cover_ref: String, album: Option<String>) -> bool {
        match self.store.get_mut(song_id) {
            Some(song) => {
                song.set_cover(cover_ref, album);
                true
            }
            None => false,
        }
    }

    /// `VOTE_CHANGE` snapshot describing the current leader, used to bring
    /// freshly subscribed consumers in sync. `None` on an empty roster.
    pub fn current_event(&self) -> Option<VoteEvent> {
        let leader = self.leader()?;
        Some(self.snapshot(
            VoteEventKind::VoteChange,
            leader.id().clone(),
            leader.votes(),
        ))
    }

    pub fn leader(&self) -> Option<&Song> {
        self.leader.as_ref().and_then(|id| self.store.get(id))
    }

    pub fn sorted_roster(&self) -> Vec<Song> {
        sort_by_votes(self.store.all())
    }

    pub fn get(&self, song_id: &SongId) -> Option<&Song> {
        self.store.get(song_id)
    }

    pub fn store(&self) -> &SongStore {
        &self.store
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn max_songs(&self) -> usize {
        self.store.max_songs()
    }

    fn fill_vacant_leader(&mut self) {
        let vacant = match &self.leader {
            Some(id) => !self.store.contains(id),
            None => true,
        };
        if vacant {
            let elected = leader_of(self.store.all()).map(|s| s.id().clone());
            if elected != self.leader {
                tracing::info!(
                    leader = ?elected.as_ref().map(SongId::as_str),
                    "Leader seat was vacant, re-elected"
                );
            }
            self.leader = elected;
        }
    }

    fn snapshot(&self, kind: VoteEventKind, song_id: SongId, new_vote_count: u32) -> VoteEvent {
        VoteEvent::new(
            kind,
            song_id,
            new_vote_count,
            self.leader().cloned(),
            self.sorted_roster(),
        )
    }
}

impl Default for VoteLedger {
    fn default() -> Self {
        Self::new(SongStore::default())
    }
}

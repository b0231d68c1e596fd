//! SongStore - the bounded, insertion-ordered voting roster.
//!
//! The roster never holds more than `max_songs` entries once an operation
//! returns. When an insertion overflows it, the surplus is evicted by
//! `(votes ascending, added_at ascending)`, with roster order breaking any
//! remaining tie. The song being inserted is never a candidate for its own
//! eviction.

use crate::domain::foundation::{SongId, Timestamp};

use super::song::{NewSong, Song};
use super::VotingError;

/// Roster size used by the reference deployment.
pub const DEFAULT_MAX_SONGS: usize = 12;

/// Outcome of a successful insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Admission {
    pub song: Song,
    /// Songs removed to restore the roster bound, in eviction order.
    pub evicted: Vec<Song>,
}

#[derive(Debug, Clone)]
pub struct SongStore {
    songs: Vec<Song>,
    max_songs: usize,
}

impl SongStore {
    /// Creates an empty roster. A bound of zero is raised to one.
    pub fn new(max_songs: usize) -> Self {
        Self {
            songs: Vec::new(),
            max_songs: max_songs.max(1),
        }
    }

    /// Rebuilds a roster from existing songs, keeping their `added_at`.
    ///
    /// Duplicates of an earlier entry are dropped and any surplus is evicted
    /// with the regular policy.
    pub fn restore(max_songs: usize, songs: Vec<Song>) -> Self {
        let mut store = Self::new(max_songs);
        for song in songs {
            if store.contains(song.id()) || store.find_duplicate(&song.identity_key()).is_some() {
                tracing::warn!(song_id = %song.id(), "Skipping duplicate song while restoring roster");
                continue;
            }
            store.songs.push(song);
        }
        store.enforce_capacity(None);
        store
    }

    /// Appends a song, stamping `added_at = now`, then evicts any surplus.
    pub fn add(&mut self, new: NewSong) -> Result<Admission, VotingError> {
        if let Some(existing) = self.find_duplicate(&new.identity_key()) {
            return Err(VotingError::duplicate(existing.title(), existing.artist()));
        }
        if let Some(id) = &new.id {
            if let Some(existing) = self.get(id) {
                return Err(VotingError::duplicate(existing.title(), existing.artist()));
            }
        }

        let song = Song::admit(new, Timestamp::now())?;
        self.songs.push(song.clone());
        let evicted = self.enforce_capacity(Some(song.id()));

        tracing::info!(
            song_id = %song.id(),
            title = %song.title(),
            artist = %song.artist(),
            evicted = evicted.len(),
            "Song added to roster"
        );

        Ok(Admission { song, evicted })
    }

    pub fn remove(&mut self, id: &SongId) -> Result<Song, VotingError> {
        let index = self
            .position(id)
            .ok_or_else(|| VotingError::not_found(id.clone()))?;
        Ok(self.songs.remove(index))
    }

    pub fn get(&self, id: &SongId) -> Option<&Song> {
        self.songs.iter().find(|s| s.id() == id)
    }

    pub fn contains(&self, id: &SongId) -> bool {
        self.position(id).is_some()
    }

    /// All songs in insertion order.
    pub fn all(&self) -> &[Song] {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn max_songs(&self) -> usize {
        self.max_songs
    }

    pub(super) fn get_mut(&mut self, id: &SongId) -> Option<&mut Song> {
        self.songs.iter_mut().find(|s| s.id() == id)
    }

    fn position(&self, id: &SongId) -> Option<usize> {
        self.songs.iter().position(|s| s.id() == id)
    }

    fn find_duplicate(&self, key: &(String, String)) -> Option<&Song> {
        self.songs.iter().find(|s| &s.identity_key() == key)
    }

    fn enforce_capacity(&mut self, keep: Option<&SongId>) -> Vec<Song> {
        if self.songs.len() <= self.max_songs {
            return Vec::new();
        }
        let surplus = self.songs.len() - self.max_songs;

        let mut candidates: Vec<&Song> = self
            .songs
            .iter()
            .filter(|s| Some(s.id()) != keep)
            .collect();
        // stable: equal (votes, added_at) keep roster order
        candidates.sort_by_key(|s| (s.votes(), s.added_at()));
        let doomed: Vec<SongId> = candidates
            .into_iter()
            .take(surplus)
            .map(|s| s.id().clone())
            .collect();

        let mut evicted = Vec::with_capacity(doomed.len());
        for id in &doomed {
            if let Some(index) = self.position(id) {
                let song = self.songs.remove(index);
                tracing::info!(
                    song_id = %song.id(),
                    votes = song.votes(),
                    max_songs = self.max_songs,
                    "Evicted song to keep roster bound"
                );
                evicted.push(song);
            }
        }
        evicted
    }
}

impl Default for SongStore {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SONGS)
    }
}

//! Song entity and its insertion payload.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{SongId, Timestamp};

use super::VotingError;

/// A votable song on the roster.
///
/// Votes change only through the ledger; cover and album change only through
/// cover enrichment. Everything else is fixed at insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    id: SongId,
    title: String,
    artist: String,
    album: String,
    audio_ref: String,
    cover_ref: Option<String>,
    votes: u32,
    added_at: Timestamp,
    year: Option<u16>,
    added_by: Option<String>,
}

impl Song {
    /// Builds a song from its insertion payload, stamping `added_at`.
    pub fn admit(new: NewSong, added_at: Timestamp) -> Result<Self, VotingError> {
        let title = new.title.trim().to_string();
        let artist = new.artist.trim().to_string();
        if title.is_empty() {
            return Err(VotingError::validation("title", "Title cannot be empty"));
        }
        if artist.is_empty() {
            return Err(VotingError::validation("artist", "Artist cannot be empty"));
        }

        Ok(Self {
            id: new.id.unwrap_or_else(SongId::generate),
            title,
            artist,
            album: new.album,
            audio_ref: new.audio_ref,
            cover_ref: new.cover_ref,
            votes: new.votes,
            added_at,
            year: new.year,
            added_by: new.added_by,
        })
    }

    pub fn id(&self) -> &SongId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn album(&self) -> &str {
        &self.album
    }

    pub fn audio_ref(&self) -> &str {
        &self.audio_ref
    }

    pub fn cover_ref(&self) -> Option<&str> {
        self.cover_ref.as_deref()
    }

    pub fn votes(&self) -> u32 {
        self.votes
    }

    pub fn added_at(&self) -> Timestamp {
        self.added_at
    }

    pub fn year(&self) -> Option<u16> {
        self.year
    }

    pub fn added_by(&self) -> Option<&str> {
        self.added_by.as_deref()
    }

    /// Case-insensitive `(title, artist)` key used for duplicate detection.
    pub fn identity_key(&self) -> (String, String) {
        normalized_key(&self.title, &self.artist)
    }

    pub(super) fn set_votes(&mut self, votes: u32) {
        self.votes = votes;
    }

    pub(super) fn set_cover(&mut self, cover_ref: String, album: Option<String>) {
        self.cover_ref = Some(cover_ref);
        if let Some(album) = album {
            self.album = album;
        }
    }
}

pub(super) fn normalized_key(title: &str, artist: &str) -> (String, String) {
    (title.trim().to_lowercase(), artist.trim().to_lowercase())
}

/// Payload for adding a song to the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSong {
    pub id: Option<SongId>,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub audio_ref: String,
    pub cover_ref: Option<String>,
    pub votes: u32,
    pub year: Option<u16>,
    pub added_by: Option<String>,
}

impl NewSong {
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        audio_ref: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            artist: artist.into(),
            album: String::new(),
            audio_ref: audio_ref.into(),
            cover_ref: None,
            votes: 0,
            year: None,
            added_by: None,
        }
    }

    pub fn with_id(mut self, id: SongId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_album(mut self, album: impl Into<String>) -> Self {
        self.album = album.into();
        self
    }

    pub fn with_cover(mut self, cover_ref: impl Into<String>) -> Self {
        self.cover_ref = Some(cover_ref.into());
        self
    }

    /// Pre-seeded vote count.
    pub fn with_votes(mut self, votes: u32) -> Self {
        self.votes = votes;
        self
    }

    pub fn with_year(mut self, year: u16) -> Self {
        self.year = Some(year);
        self
    }

    pub fn added_by(mut self, who: impl Into<String>) -> Self {
        self.added_by = Some(who.into());
        self
    }

    pub(super) fn identity_key(&self) -> (String, String) {
        normalized_key(&self.title, &self.artist)
    }
}

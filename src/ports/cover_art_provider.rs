//! CoverArtProvider port - Interface for cover art lookups.
//!
//! Lookups are network-bound and run off the vote path. Results are
//! written back through `VoteLedger::apply_cover`.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;

/// What to look up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverQuery {
    pub artist: String,
    pub title: String,
    /// Known album, if any. Narrows catalog matches.
    pub album: Option<String>,
}

impl CoverQuery {
    pub fn new(artist: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            artist: artist.into(),
            title: title.into(),
            album: None,
        }
    }

    pub fn with_album(mut self, album: impl Into<String>) -> Self {
        let album = album.into();
        self.album = if album.trim().is_empty() {
            None
        } else {
            Some(album)
        };
        self
    }
}

/// Port for resolving cover art.
///
/// `Ok(None)` means the provider has nothing for this query. `Err` means
/// the provider could not answer (network, bad payload).
#[async_trait]
pub trait CoverArtProvider: Send + Sync {
    async fn find_cover(&self, query: &CoverQuery) -> Result<Option<String>, DomainError>;

    /// Provider name for logging.
    fn name(&self) -> &'static str;
}

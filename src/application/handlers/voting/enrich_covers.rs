//! EnrichCoversHandler - Finds real artwork for songs that lack it.
//!
//! Lookups run without the ledger lock. Results go back through
//! `VotingService::apply_cover`, which skips songs that left the roster
//! while the lookup was in flight.

use std::sync::Arc;

use futures::future::join_all;

use crate::domain::foundation::SongId;
use crate::domain::voting::{is_placeholder_cover, Song};
use crate::ports::{CoverArtProvider, CoverQuery};

use super::VotingService;

/// Result of an enrichment pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnrichCoversResult {
    pub checked: usize,
    pub updated_count: usize,
}

struct Candidate {
    song_id: SongId,
    query: CoverQuery,
    current: Option<String>,
}

impl Candidate {
    fn of(song: &Song) -> Self {
        Self {
            song_id: song.id().clone(),
            query: CoverQuery::new(song.artist(), song.title()).with_album(song.album()),
            current: song.cover_ref().map(str::to_string),
        }
    }
}

fn needs_cover(song: &Song) -> bool {
    song.cover_ref().map_or(true, is_placeholder_cover)
}

pub struct EnrichCoversHandler {
    service: Arc<VotingService>,
    provider: Arc<dyn CoverArtProvider>,
}

impl EnrichCoversHandler {
    pub fn new(service: Arc<VotingService>, provider: Arc<dyn CoverArtProvider>) -> Self {
        Self { service, provider }
    }

    /// Looks up every song with a missing or placeholder cover.
    pub async fn handle(&self) -> EnrichCoversResult {
        let candidates: Vec<Candidate> = self
            .service
            .read(|ledger| {
                ledger
                    .store()
                    .all()
                    .iter()
                    .filter(|s| needs_cover(s))
                    .map(Candidate::of)
                    .collect()
            })
            .await;

        let checked = candidates.len();
        let found = join_all(candidates.iter().map(|c| self.lookup(&c.query))).await;

        let mut updated_count = 0;
        for (candidate, cover) in candidates.into_iter().zip(found) {
            if self.write_back(candidate, cover).await {
                updated_count += 1;
            }
        }

        tracing::info!(checked, updated_count, "Cover enrichment finished");
        EnrichCoversResult {
            checked,
            updated_count,
        }
    }

    /// Enriches one song, if it still needs a cover. Returns whether the
    /// cover changed.
    pub async fn enrich_song(&self, song_id: &SongId) -> bool {
        let candidate = self
            .service
            .read(|ledger| ledger.get(song_id).filter(|s| needs_cover(s)).map(Candidate::of))
            .await;
        let Some(candidate) = candidate else {
            return false;
        };

        let cover = self.lookup(&candidate.query).await;
        self.write_back(candidate, cover).await
    }

    async fn lookup(&self, query: &CoverQuery) -> Option<String> {
        match self.provider.find_cover(query).await {
            Ok(cover) => cover,
            Err(err) => {
                tracing::warn!(
                    provider = self.provider.name(),
                    artist = %query.artist,
                    title = %query.title,
                    error = %err,
                    "Cover lookup failed"
                );
                None
            }
        }
    }

    async fn write_back(&self, candidate: Candidate, cover: Option<String>) -> bool {
        let Some(cover) = cover else {
            return false;
        };
        if candidate.current.as_deref() == Some(cover.as_str()) {
            return false;
        }

        let applied = self
            .service
            .apply_cover(&candidate.song_id, cover.clone(), None)
            .await;
        if applied {
            tracing::info!(song_id = %candidate.song_id, cover = %cover, "Cover updated");
        } else {
            tracing::debug!(song_id = %candidate.song_id, "Song left roster before cover arrived");
        }
        applied
    }
}

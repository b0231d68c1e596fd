//! AddSongHandler - Command handler for adding a song to the roster.
//!
//! Songs without a cover get a generated placeholder. When an enricher is
//! attached, the real cover is looked up in a background task so the
//! request never waits on the network.

use std::sync::Arc;

use crate::domain::foundation::SongId;
use crate::domain::voting::{
    is_placeholder_cover, placeholder_cover, NewSong, Song, VoteEvent, VotingError,
    SAMPLE_AUDIO_REF,
};

use super::{EnrichCoversHandler, VotingService};

/// Command to add a song.
#[derive(Debug, Clone, Default)]
pub struct AddSongCommand {
    pub id: Option<SongId>,
    pub title: String,
    pub artist: String,
    pub album: Option<String>,
    pub audio_ref: Option<String>,
    pub cover_ref: Option<String>,
    pub year: Option<u16>,
    pub added_by: Option<String>,
}

impl AddSongCommand {
    fn into_new_song(self) -> NewSong {
        let cover = self
            .cover_ref
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| placeholder_cover(&self.artist, &self.title));
        let audio = self
            .audio_ref
            .filter(|a| !a.trim().is_empty())
            .unwrap_or_else(|| SAMPLE_AUDIO_REF.to_string());

        let mut new = NewSong::new(self.title, self.artist, audio).with_cover(cover);
        if let Some(id) = self.id {
            new = new.with_id(id);
        }
        if let Some(album) = self.album {
            new = new.with_album(album);
        }
        if let Some(year) = self.year {
            new = new.with_year(year);
        }
        if let Some(who) = self.added_by {
            new = new.added_by(who);
        }
        new
    }
}

/// Result of an accepted song.
#[derive(Debug, Clone)]
pub struct AddSongResult {
    pub song: Song,
    pub evicted: Vec<Song>,
    pub event: VoteEvent,
}

pub struct AddSongHandler {
    service: Arc<VotingService>,
    enricher: Option<Arc<EnrichCoversHandler>>,
}

impl AddSongHandler {
    pub fn new(service: Arc<VotingService>) -> Self {
        Self {
            service,
            enricher: None,
        }
    }

    pub fn with_enrichment(mut self, enricher: Arc<EnrichCoversHandler>) -> Self {
        self.enricher = Some(enricher);
        self
    }

    pub async fn handle(&self, cmd: AddSongCommand) -> Result<AddSongResult, VotingError> {
        let admitted = self.service.add_song(cmd.into_new_song()).await?;

        tracing::info!(
            song_id = %admitted.song.id(),
            title = admitted.song.title(),
            artist = admitted.song.artist(),
            added_by = ?admitted.song.added_by(),
            evicted = admitted.evicted.len(),
            "Song added"
        );

        if admitted.song.cover_ref().map_or(true, is_placeholder_cover) {
            self.spawn_enrichment(admitted.song.id().clone());
        }

        Ok(AddSongResult {
            song: admitted.song,
            evicted: admitted.evicted,
            event: admitted.event,
        })
    }

    fn spawn_enrichment(&self, song_id: SongId) {
        if let Some(enricher) = &self.enricher {
            let enricher = Arc::clone(enricher);
            tokio::spawn(async move {
                enricher.enrich_song(&song_id).await;
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::voting::{SongStore, VoteEventKind, VoteLedger};
    use crate::ports::{PublishReport, VoteEventPublisher};

    struct NullPublisher;

    impl VoteEventPublisher for NullPublisher {
        fn publish(&self, _: &VoteEvent) -> PublishReport {
            PublishReport::default()
        }
    }

    fn handler(max_songs: usize) -> AddSongHandler {
        let ledger = VoteLedger::new(SongStore::new(max_songs));
        AddSongHandler::new(Arc::new(VotingService::new(ledger, Arc::new(NullPublisher))))
    }

    fn command(title: &str, artist: &str) -> AddSongCommand {
        AddSongCommand {
            title: title.to_string(),
            artist: artist.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn fills_in_placeholder_and_sample_audio() {
        let result = handler(5).handle(command("Creep", "Radiohead")).await.unwrap();

        assert_eq!(result.event.kind, VoteEventKind::SongAdded);
        assert_eq!(result.song.audio_ref(), SAMPLE_AUDIO_REF);
        assert!(is_placeholder_cover(result.song.cover_ref().unwrap()));
        assert_eq!(result.song.votes(), 0);
    }

    #[tokio::test]
    async fn duplicate_is_rejected() {
        let handler = handler(5);
        handler.handle(command("Creep", "Radiohead")).await.unwrap();

        let result = handler.handle(command(" creep ", "RADIOHEAD")).await;

        assert!(matches!(result, Err(VotingError::Duplicate { .. })));
    }

    #[tokio::test]
    async fn reports_evictions() {
        let handler = handler(1);
        handler.handle(command("One", "Band")).await.unwrap();

        let result = handler.handle(command("Two", "Band")).await.unwrap();

        assert_eq!(result.evicted.len(), 1);
        assert_eq!(result.evicted[0].title(), "One");
    }

    #[tokio::test]
    async fn blank_title_is_validation_error() {
        let result = handler(5).handle(command("  ", "Band")).await;
        assert!(matches!(result, Err(VotingError::ValidationFailed { .. })));
    }
}

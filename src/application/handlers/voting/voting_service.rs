//! VotingService - The single mutation path for the roster.
//!
//! Every mutation runs lock → mutate → publish → unlock, so vote reads,
//! writes and their notifications never interleave. Nothing awaits while
//! the lock is held except acquiring it.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::foundation::SongId;
use crate::domain::voting::{NewSong, Song, SongAdmitted, VoteEvent, VoteLedger, VotingError};
use crate::ports::{PublishReport, VoteEventPublisher};

pub struct VotingService {
    ledger: Mutex<VoteLedger>,
    publisher: Arc<dyn VoteEventPublisher>,
}

impl VotingService {
    pub fn new(ledger: VoteLedger, publisher: Arc<dyn VoteEventPublisher>) -> Self {
        Self {
            ledger: Mutex::new(ledger),
            publisher,
        }
    }

    /// Computes a new vote count from the song and the roster, registers it
    /// and publishes the event, all under one lock.
    pub async fn register_vote_with<F>(
        &self,
        song_id: &SongId,
        compute: F,
    ) -> Result<VoteEvent, VotingError>
    where
        F: FnOnce(&Song, &[Song]) -> Result<u32, VotingError>,
    {
        let mut ledger = self.ledger.lock().await;
        let song = ledger
            .get(song_id)
            .ok_or_else(|| VotingError::not_found(song_id.clone()))?;
        let new_vote_count = compute(song, ledger.store().all())?;

        let event = ledger.register_vote(song_id, new_vote_count)?;
        self.publisher.publish(&event);
        Ok(event)
    }

    pub async fn add_song(&self, new: NewSong) -> Result<SongAdmitted, VotingError> {
        let mut ledger = self.ledger.lock().await;
        let admitted = ledger.add_song(new)?;
        self.publisher.publish(&admitted.event);
        for removal in &admitted.removals {
            self.publisher.publish(removal);
        }
        Ok(admitted)
    }

    pub async fn remove_song(&self, song_id: &SongId) -> Result<VoteEvent, VotingError> {
        let mut ledger = self.ledger.lock().await;
        let event = ledger.remove_song(song_id)?;
        self.publisher.publish(&event);
        Ok(event)
    }

    /// Publishes the current leader so freshly subscribed consumers catch
    /// up. `None` when the roster is empty.
    pub async fn announce_leader(&self) -> Option<PublishReport> {
        let ledger = self.ledger.lock().await;
        let event = ledger.current_event()?;
        tracing::info!(
            song_id = %event.song_id,
            votes = event.new_vote_count,
            "Announcing initial leader"
        );
        Some(self.publisher.publish(&event))
    }

    /// Writes a cover back without publishing.
    pub async fn apply_cover(&self, song_id: &SongId, cover_ref: String, album: Option<String>) -> bool {
        self.ledger.lock().await.apply_cover(song_id, cover_ref, album)
    }

    /// Runs a read-only view over the ledger.
    pub async fn read<R>(&self, view: impl FnOnce(&VoteLedger) -> R) -> R {
        let ledger = self.ledger.lock().await;
        view(&ledger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::voting::{SongStore, VoteEventKind};
    use crate::ports::ConsumerError;
    use std::sync::Mutex as StdMutex;

    /// Records every published event.
    #[derive(Default)]
    struct RecordingPublisher {
        events: StdMutex<Vec<VoteEvent>>,
    }

    impl RecordingPublisher {
        fn kinds(&self) -> Vec<VoteEventKind> {
            self.events.lock().unwrap().iter().map(|e| e.kind).collect()
        }
    }

    impl VoteEventPublisher for RecordingPublisher {
        fn publish(&self, event: &VoteEvent) -> PublishReport {
            self.events.lock().unwrap().push(event.clone());
            PublishReport {
                delivered: 1,
                failed: Vec::<ConsumerError>::new(),
            }
        }
    }

    fn id(s: &str) -> SongId {
        SongId::new(s).unwrap()
    }

    fn service(songs: &[(&str, u32)]) -> (VotingService, Arc<RecordingPublisher>) {
        let mut store = SongStore::new(10);
        for (song_id, votes) in songs {
            store
                .add(
                    NewSong::new(*song_id, "Artist", "/audio.mp3")
                        .with_id(id(song_id))
                        .with_votes(*votes),
                )
                .unwrap();
        }
        let publisher = Arc::new(RecordingPublisher::default());
        (VotingService::new(VoteLedger::new(store), publisher.clone()), publisher)
    }

    #[tokio::test]
    async fn register_vote_publishes_event() {
        let (service, publisher) = service(&[("a", 5), ("b", 8)]);

        let event = service
            .register_vote_with(&id("a"), |song, _| Ok(song.votes() + 4))
            .await
            .unwrap();

        assert_eq!(event.kind, VoteEventKind::VoteChange);
        assert_eq!(event.new_vote_count, 9);
        assert_eq!(publisher.kinds(), vec![VoteEventKind::VoteChange]);
    }

    #[tokio::test]
    async fn unknown_song_publishes_nothing() {
        let (service, publisher) = service(&[("a", 5)]);

        let result = service.register_vote_with(&id("zzz"), |_, _| Ok(1)).await;

        assert!(matches!(result, Err(VotingError::NotFound(_))));
        assert!(publisher.kinds().is_empty());
    }

    #[tokio::test]
    async fn compute_error_aborts_without_mutation() {
        let (service, publisher) = service(&[("a", 5)]);

        let result = service
            .register_vote_with(&id("a"), |_, _| Err(VotingError::infrastructure("nope")))
            .await;

        assert!(result.is_err());
        assert_eq!(service.read(|l| l.get(&id("a")).unwrap().votes()).await, 5);
        assert!(publisher.kinds().is_empty());
    }

    #[tokio::test]
    async fn add_and_remove_publish_roster_events() {
        let (service, publisher) = service(&[("a", 5)]);

        let admitted = service
            .add_song(NewSong::new("New", "Band", "/new.mp3"))
            .await
            .unwrap();
        service.remove_song(admitted.song.id()).await.unwrap();

        assert_eq!(
            publisher.kinds(),
            vec![VoteEventKind::SongAdded, VoteEventKind::SongRemoved]
        );
    }

    #[tokio::test]
    async fn eviction_publishes_song_removed_after_song_added() {
        let mut store = SongStore::new(1);
        store
            .add(NewSong::new("A", "Artist", "/a.mp3").with_id(id("a")).with_votes(1))
            .unwrap();
        let publisher = Arc::new(RecordingPublisher::default());
        let service = VotingService::new(VoteLedger::new(store), publisher.clone());

        service
            .add_song(NewSong::new("New", "Band", "/new.mp3").with_id(id("new")))
            .await
            .unwrap();

        let events = publisher.events.lock().unwrap();
        let kinds: Vec<VoteEventKind> = events.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![VoteEventKind::SongAdded, VoteEventKind::SongRemoved]);
        assert_eq!(events[1].song_id, id("a"));
    }

    #[tokio::test]
    async fn evicting_playing_song_moves_playback_to_new_leader() {
        use crate::adapters::events::NotificationBus;
        use crate::application::consumers::PlaybackSelector;
        use crate::domain::foundation::Timestamp;
        use crate::ports::VoteEventSubscriber;

        let songs = vec![
            Song::admit(
                NewSong::new("Lead", "Artist", "/lead.mp3").with_id(id("lead")).with_votes(1),
                Timestamp::from_unix_secs(0),
            )
            .unwrap(),
            Song::admit(
                NewSong::new("Other", "Artist", "/other.mp3").with_id(id("other")).with_votes(1),
                Timestamp::from_unix_secs(1),
            )
            .unwrap(),
        ];
        let bus = Arc::new(NotificationBus::new());
        let playback = Arc::new(PlaybackSelector::new());
        bus.subscribe(playback.clone());
        let service = VotingService::new(VoteLedger::new(SongStore::restore(2, songs)), bus);
        service.announce_leader().await.unwrap();
        assert_eq!(playback.currently_playing_id(), Some(id("lead")));

        let admitted = service
            .add_song(NewSong::new("New", "Band", "/new.mp3").with_id(id("new")))
            .await
            .unwrap();
        assert_eq!(admitted.evicted[0].id(), &id("lead"));

        let leader = service.read(|l| l.leader().map(|s| s.id().clone())).await;
        assert_eq!(leader, Some(id("other")));
        assert_eq!(playback.currently_playing_id(), leader);
    }

    #[tokio::test]
    async fn announce_leader_on_empty_roster_is_none() {
        let (service, publisher) = service(&[]);
        assert!(service.announce_leader().await.is_none());
        assert!(publisher.kinds().is_empty());
    }

    #[tokio::test]
    async fn announce_leader_publishes_vote_change() {
        let (service, publisher) = service(&[("a", 5), ("b", 8)]);

        service.announce_leader().await.unwrap();

        let events = publisher.events.lock().unwrap();
        assert_eq!(events[0].kind, VoteEventKind::VoteChange);
        assert_eq!(events[0].song_id, id("b"));
    }

    #[tokio::test]
    async fn concurrent_votes_are_not_lost() {
        let (service, _) = service(&[("a", 0)]);
        let service = Arc::new(service);

        let tasks: Vec<_> = (0..50)
            .map(|_| {
                let service = service.clone();
                tokio::spawn(async move {
                    service
                        .register_vote_with(&id("a"), |song, _| Ok(song.votes() + 1))
                        .await
                        .unwrap();
                })
            })
            .collect();
        for task in tasks {
            task.await.unwrap();
        }

        assert_eq!(service.read(|l| l.get(&id("a")).unwrap().votes()).await, 50);
    }
}

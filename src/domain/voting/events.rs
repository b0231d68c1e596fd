//! Vote events - transient snapshots handed to consumers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{EventId, SongId, Timestamp};

use super::Song;

/// What happened to the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VoteEventKind {
    /// Vote count changed, leader unchanged.
    VoteUpdate,
    /// Leader changed (or was recognised for the first time).
    VoteChange,
    /// A song joined the roster.
    SongAdded,
    /// A song left the roster.
    SongRemoved,
}

impl VoteEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoteEventKind::VoteUpdate => "VOTE_UPDATE",
            VoteEventKind::VoteChange => "VOTE_CHANGE",
            VoteEventKind::SongAdded => "SONG_ADDED",
            VoteEventKind::SongRemoved => "SONG_REMOVED",
        }
    }
}

impl fmt::Display for VoteEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot emitted by every ledger mutation.
///
/// `roster` is already sorted by votes (descending, stable on ties) so
/// consumers never need to query the ledger back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteEvent {
    pub event_id: EventId,
    pub kind: VoteEventKind,
    pub song_id: SongId,
    pub new_vote_count: u32,
    pub leader: Option<Song>,
    pub roster: Vec<Song>,
    pub occurred_at: Timestamp,
}

impl VoteEvent {
    pub fn new(
        kind: VoteEventKind,
        song_id: SongId,
        new_vote_count: u32,
        leader: Option<Song>,
        roster: Vec<Song>,
    ) -> Self {
        Self {
            event_id: EventId::new(),
            kind,
            song_id,
            new_vote_count,
            leader,
            roster,
            occurred_at: Timestamp::now(),
        }
    }

    pub fn leader_id(&self) -> Option<&SongId> {
        self.leader.as_ref().map(Song::id)
    }

    pub fn is_leader_change(&self) -> bool {
        self.kind == VoteEventKind::VoteChange
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serializes_screaming_snake_case() {
        let json = serde_json::to_string(&VoteEventKind::VoteChange).unwrap();
        assert_eq!(json, "\"VOTE_CHANGE\"");
        assert_eq!(VoteEventKind::SongAdded.to_string(), "SONG_ADDED");
    }

    #[test]
    fn empty_event_has_no_leader() {
        let event = VoteEvent::new(
            VoteEventKind::SongRemoved,
            SongId::new("gone").unwrap(),
            0,
            None,
            Vec::new(),
        );
        assert!(event.leader_id().is_none());
        assert!(!event.is_leader_change());
    }
}

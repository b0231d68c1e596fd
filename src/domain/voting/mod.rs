//! Voting module - roster, ledger and leader selection.
//!
//! The `SongStore` owns the bounded roster, the `VoteLedger` owns vote
//! counts and the recognised leader, and every ledger mutation produces a
//! `VoteEvent` snapshot for downstream consumers.

mod cover;
mod demo_roster;
mod errors;
mod events;
mod ledger;
mod song;
mod song_store;
mod super_vote;

pub use cover::{is_placeholder_cover, placeholder_cover};
pub use demo_roster::{demo_roster, SAMPLE_AUDIO_REF};
pub use errors::VotingError;
pub use events::{VoteEvent, VoteEventKind};
pub use ledger::{leader_of, sort_by_votes, SongAdmitted, VoteLedger};
pub use song::{NewSong, Song};
pub use song_store::{Admission, SongStore, DEFAULT_MAX_SONGS};
pub use super_vote::SuperVoteCalculator;

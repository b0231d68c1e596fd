//! Super vote sizing.
//!
//! A super vote adds exactly enough votes to put the target strictly ahead
//! of a reference count: the now-playing song's votes when one is given and
//! it is not the target, otherwise the best count among the other songs.

use crate::domain::foundation::SongId;

use super::{Song, VotingError};

/// Pure calculator for super vote increments.
pub struct SuperVoteCalculator;

impl SuperVoteCalculator {
    /// Votes to add to `target` so it leads. Always at least one.
    ///
    /// A now-playing id that is no longer on the roster is ignored and the
    /// best of the other songs is used instead.
    pub fn compute_boost(
        target: &SongId,
        roster: &[Song],
        current_playing: Option<&SongId>,
    ) -> Result<u32, VotingError> {
        let target_song = roster
            .iter()
            .find(|s| s.id() == target)
            .ok_or_else(|| VotingError::not_found(target.clone()))?;

        let playing_votes = current_playing
            .filter(|playing| *playing != target)
            .and_then(|playing| roster.iter().find(|s| s.id() == playing))
            .map(Song::votes);

        let reference = match playing_votes {
            Some(votes) => votes,
            None => roster
                .iter()
                .filter(|s| s.id() != target)
                .map(Song::votes)
                .max()
                .unwrap_or(0),
        };

        Ok(reference
            .saturating_add(1)
            .saturating_sub(target_song.votes())
            .max(1))
    }
}

//! Voting configuration

use serde::Deserialize;

use crate::domain::voting::DEFAULT_MAX_SONGS;

use super::error::ValidationError;

/// Largest roster accepted from configuration.
const ROSTER_CEILING: usize = 100;

/// Voting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct VotingConfig {
    /// Songs kept on the roster before the least voted is evicted
    #[serde(default = "default_max_songs")]
    pub max_songs: usize,

    /// Start with the built-in demo roster instead of an empty one
    #[serde(default = "default_seed_demo_roster")]
    pub seed_demo_roster: bool,
}

impl VotingConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_songs == 0 || self.max_songs > ROSTER_CEILING {
            return Err(ValidationError::InvalidRosterSize {
                max: ROSTER_CEILING,
            });
        }
        Ok(())
    }
}

impl Default for VotingConfig {
    fn default() -> Self {
        Self {
            max_songs: default_max_songs(),
            seed_demo_roster: default_seed_demo_roster(),
        }
    }
}

fn default_max_songs() -> usize {
    DEFAULT_MAX_SONGS
}

fn default_seed_demo_roster() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_seed_a_twelve_song_roster() {
        let config = VotingConfig::default();
        assert_eq!(config.max_songs, 12);
        assert!(config.seed_demo_roster);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_empty_or_oversized_roster() {
        for max_songs in [0, 101] {
            let config = VotingConfig {
                max_songs,
                ..Default::default()
            };
            assert_eq!(
                config.validate(),
                Err(ValidationError::InvalidRosterSize { max: 100 })
            );
        }
    }
}

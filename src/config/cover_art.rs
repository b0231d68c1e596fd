//! Cover art lookup configuration

use serde::Deserialize;
use std::time::Duration;

use crate::adapters::cover_art::ItunesConfig;

use super::error::ValidationError;

/// Cover art configuration
///
/// The built-in catalog is always consulted. The iTunes search is an
/// optional network fallback.
#[derive(Debug, Clone, Deserialize)]
pub struct CoverArtConfig {
    /// Query the iTunes Search API when the catalog has no match
    #[serde(default = "default_itunes_enabled")]
    pub itunes_enabled: bool,

    /// iTunes Search API base URL
    #[serde(default = "default_itunes_base_url")]
    pub itunes_base_url: String,

    /// Per-lookup timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Look up a real cover in the background when a song is added with a placeholder
    #[serde(default = "default_enrich_on_add")]
    pub enrich_on_add: bool,
}

impl CoverArtConfig {
    pub fn itunes(&self) -> ItunesConfig {
        ItunesConfig {
            base_url: self.itunes_base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.itunes_base_url.starts_with("http://")
            && !self.itunes_base_url.starts_with("https://")
        {
            return Err(ValidationError::InvalidCoverArtUrl(
                self.itunes_base_url.clone(),
            ));
        }
        if self.timeout_secs == 0 || self.timeout_secs > 60 {
            return Err(ValidationError::InvalidCoverArtTimeout);
        }
        Ok(())
    }
}

impl Default for CoverArtConfig {
    fn default() -> Self {
        Self {
            itunes_enabled: default_itunes_enabled(),
            itunes_base_url: default_itunes_base_url(),
            timeout_secs: default_timeout_secs(),
            enrich_on_add: default_enrich_on_add(),
        }
    }
}

fn default_itunes_enabled() -> bool {
    true
}

fn default_itunes_base_url() -> String {
    "https://itunes.apple.com".to_string()
}

fn default_timeout_secs() -> u64 {
    5
}

fn default_enrich_on_add() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = CoverArtConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.itunes().timeout, Duration::from_secs(5));
    }

    #[test]
    fn rejects_non_http_base_url() {
        let config = CoverArtConfig {
            itunes_base_url: "ftp://itunes.apple.com".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidCoverArtUrl(_))
        ));
    }

    #[test]
    fn rejects_out_of_range_timeout() {
        let config = CoverArtConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidCoverArtTimeout));
    }
}

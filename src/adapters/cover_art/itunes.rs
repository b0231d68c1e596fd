//! iTunes Search API cover lookups.
//!
//! Searches albums by artist and album (or title), prefers a result whose
//! artist and album or track match the query, and upgrades the artwork URL
//! to 600x600.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{CoverArtProvider, CoverQuery};

const SEARCH_LIMIT: &str = "3";

/// Configuration for the iTunes provider.
#[derive(Debug, Clone)]
pub struct ItunesConfig {
    /// Base URL (default: https://itunes.apple.com).
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ItunesConfig {
    fn default() -> Self {
        Self {
            base_url: "https://itunes.apple.com".to_string(),
            timeout: Duration::from_secs(5),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchResult {
    #[serde(default)]
    artist_name: String,
    #[serde(default)]
    collection_name: String,
    track_name: Option<String>,
    artwork_url100: Option<String>,
}

pub struct ItunesCoverArtProvider {
    config: ItunesConfig,
    client: Client,
}

impl ItunesCoverArtProvider {
    pub fn new(config: ItunesConfig) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::InternalError,
                    format!("Failed to create HTTP client: {}", e),
                )
            })?;
        Ok(Self { config, client })
    }

    fn search_url(&self) -> String {
        format!("{}/search", self.config.base_url.trim_end_matches('/'))
    }

    fn unavailable(message: impl Into<String>) -> DomainError {
        DomainError::new(ErrorCode::CoverArtUnavailable, message)
    }
}

/// Picks the best result: a match on artist and album or track, otherwise
/// the first result with artwork.
fn pick_artwork(results: &[SearchResult], query: &CoverQuery) -> Option<String> {
    let artist = query.artist.to_lowercase();
    let album = query.album.as_deref().unwrap_or(&query.title).to_lowercase();
    let title = query.title.to_lowercase();

    let matches = |r: &SearchResult| {
        r.artist_name.to_lowercase().contains(&artist)
            && (r.collection_name.to_lowercase().contains(&album)
                || r
                    .track_name
                    .as_deref()
                    .is_some_and(|t| t.to_lowercase().contains(&title)))
    };

    results
        .iter()
        .find(|r| matches(r))
        .or_else(|| results.first())
        .and_then(|r| r.artwork_url100.as_deref())
        .map(|url| url.replace("100x100bb", "600x600bb"))
}

#[async_trait]
impl CoverArtProvider for ItunesCoverArtProvider {
    async fn find_cover(&self, query: &CoverQuery) -> Result<Option<String>, DomainError> {
        let term = format!(
            "{} {}",
            query.artist,
            query.album.as_deref().unwrap_or(&query.title)
        );

        let response = self
            .client
            .get(self.search_url())
            .query(&[
                ("term", term.as_str()),
                ("media", "music"),
                ("entity", "album"),
                ("limit", SEARCH_LIMIT),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Self::unavailable(format!(
                        "iTunes search timed out after {}s",
                        self.config.timeout.as_secs()
                    ))
                } else {
                    Self::unavailable(format!("iTunes search failed: {}", e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::unavailable(format!("iTunes search returned {}", status)));
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| Self::unavailable(format!("Invalid iTunes response: {}", e)))?;

        let cover = pick_artwork(&body.results, query);
        if let Some(cover) = &cover {
            tracing::debug!(artist = %query.artist, cover = %cover, "Cover found on iTunes");
        }
        Ok(cover)
    }

    fn name(&self) -> &'static str {
        "itunes"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn results(value: serde_json::Value) -> Vec<SearchResult> {
        serde_json::from_value::<SearchResponse>(value).unwrap().results
    }

    #[test]
    fn prefers_matching_result_and_upgrades_size() {
        let results = results(json!({
            "resultCount": 2,
            "results": [
                {
                    "artistName": "Various Artists",
                    "collectionName": "90s Hits",
                    "artworkUrl100": "https://img.test/various/100x100bb.jpg"
                },
                {
                    "artistName": "Radiohead",
                    "collectionName": "Pablo Honey",
                    "trackName": "Creep",
                    "artworkUrl100": "https://img.test/pablo/100x100bb.jpg"
                }
            ]
        }));
        let query = CoverQuery::new("Radiohead", "Creep");

        assert_eq!(
            pick_artwork(&results, &query).as_deref(),
            Some("https://img.test/pablo/600x600bb.jpg")
        );
    }

    #[test]
    fn falls_back_to_first_result() {
        let results = results(json!({
            "results": [
                { "artistName": "Someone", "collectionName": "Else", "artworkUrl100": "https://img.test/a/100x100bb.jpg" }
            ]
        }));
        let query = CoverQuery::new("Radiohead", "Creep");

        assert_eq!(
            pick_artwork(&results, &query).as_deref(),
            Some("https://img.test/a/600x600bb.jpg")
        );
    }

    #[test]
    fn empty_results_are_none() {
        let results = results(json!({ "resultCount": 0 }));
        assert_eq!(pick_artwork(&results, &CoverQuery::new("a", "b")), None);
    }

    #[test]
    fn search_url_ignores_trailing_slash() {
        let provider = ItunesCoverArtProvider::new(ItunesConfig {
            base_url: "https://itunes.test/".to_string(),
            timeout: Duration::from_secs(1),
        })
        .unwrap();
        assert_eq!(provider.search_url(), "https://itunes.test/search");
    }
}

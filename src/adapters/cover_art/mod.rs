//! Cover art adapters.
//!
//! - `CatalogCoverArtProvider` - Built-in table of known covers
//! - `ItunesCoverArtProvider` - iTunes Search API
//! - `ChainedCoverArtProvider` - Ordered fallback across providers

mod catalog;
mod chained;
mod itunes;

pub use catalog::CatalogCoverArtProvider;
pub use chained::ChainedCoverArtProvider;
pub use itunes::{ItunesConfig, ItunesCoverArtProvider};

//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application to the outside world:
//! - `events` - in-process notification bus
//! - `cover_art` - cover image lookups (built-in catalog, iTunes search)
//! - `http` - REST API over axum

pub mod cover_art;
pub mod events;
pub mod http;

pub use cover_art::{
    CatalogCoverArtProvider, ChainedCoverArtProvider, ItunesConfig, ItunesCoverArtProvider,
};
pub use events::NotificationBus;

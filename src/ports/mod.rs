//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Event Ports
//!
//! - `VoteEventPublisher` - Fans a vote event out to every consumer
//! - `VoteEventSubscriber` - Registers and removes consumers
//! - `EventConsumer` - Anything that reacts to vote events
//!
//! ## Enrichment Ports
//!
//! - `CoverArtProvider` - Resolves cover art for an artist and title

mod cover_art_provider;
mod event_consumer;
mod event_publisher;

pub use cover_art_provider::{CoverArtProvider, CoverQuery};
pub use event_consumer::{ConsumerError, EventConsumer, VoteEventBus, VoteEventSubscriber};
pub use event_publisher::{PublishReport, VoteEventPublisher};

//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.
//! [`api_router`] assembles them under `/api`.

pub mod chat;
pub mod error;
pub mod router;
pub mod songs;

pub use chat::{chat_routes, ChatHandlers};
pub use error::ErrorResponse;
pub use router::api_router;
pub use songs::{song_routes, SongHandlers};

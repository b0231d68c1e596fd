//! Vote event consumers.
//!
//! Both run synchronously inside `NotificationBus::publish` and keep their
//! own read models, so the HTTP layer can read them without touching the
//! ledger lock.

mod playback_selector;
mod ui_state_projector;

pub use playback_selector::{PlaybackSelector, PlaybackState};
pub use ui_state_projector::{UiState, UiStateProjector};

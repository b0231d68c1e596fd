//! PlayOff - Real-time music voting service.
//!
//! Listeners browse a small roster of songs and vote; the most voted song
//! is selected for playback and a chat channel runs alongside. The core is
//! the vote ledger, which tracks vote counts, decides the current leader and
//! fans change events out to the playback selector and the UI projection.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

//! Chat module - a bounded message log that runs beside the vote.
//!
//! Chat never touches vote state directly. A recognised music command is
//! handed to the application layer, which adds the song through the ledger.

mod chat_log;
mod command;
mod errors;
mod message;

pub use chat_log::{ChatLog, DEFAULT_PAGE_SIZE, DEFAULT_RETENTION};
pub use command::{mentions_music, MusicCommand};
pub use errors::ChatError;
pub use message::{ChatMessage, ANONYMOUS_USER, BOT_USER, SYSTEM_USER};

//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `voting` - Song roster, vote ledger, leader selection and super votes
//! - `chat` - Bounded chat log and music command parsing

pub mod chat;
pub mod foundation;
pub mod voting;

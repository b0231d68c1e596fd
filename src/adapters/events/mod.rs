//! Event bus adapters.
//!
//! - `NotificationBus` - Synchronous, in-process fan-out to vote consumers

mod notification_bus;

pub use notification_bus::NotificationBus;

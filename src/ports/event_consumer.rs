//! EventConsumer port - Interface for reacting to vote events.
//!
//! Any value with an `on_event` capability can subscribe. Closures work
//! too, through the blanket implementation below.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::voting::VoteEvent;

/// A consumer failed while handling an event.
///
/// The bus catches these, logs them, and keeps delivering to the
/// remaining consumers. They never reach the publisher's caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsumerError {
    #[error("{consumer} failed: {message}")]
    Failed { consumer: String, message: String },

    #[error("{consumer}: state lock poisoned")]
    Poisoned { consumer: String },

    #[error("{consumer} panicked: {message}")]
    Panicked { consumer: String, message: String },
}

impl ConsumerError {
    pub fn failed(consumer: impl Into<String>, message: impl Into<String>) -> Self {
        ConsumerError::Failed {
            consumer: consumer.into(),
            message: message.into(),
        }
    }

    pub fn poisoned(consumer: impl Into<String>) -> Self {
        ConsumerError::Poisoned {
            consumer: consumer.into(),
        }
    }

    pub fn consumer(&self) -> &str {
        match self {
            ConsumerError::Failed { consumer, .. }
            | ConsumerError::Poisoned { consumer }
            | ConsumerError::Panicked { consumer, .. } => consumer,
        }
    }
}

/// Receiver of vote events.
///
/// Delivery is synchronous and happens while the ledger lock is held, so
/// implementations must be quick and must not publish themselves.
pub trait EventConsumer: Send + Sync {
    /// Reacts to one event.
    fn on_event(&self, event: &VoteEvent) -> Result<(), ConsumerError>;

    /// Consumer name for logging.
    fn name(&self) -> &str {
        "anonymous-consumer"
    }
}

impl<F> EventConsumer for F
where
    F: Fn(&VoteEvent) -> Result<(), ConsumerError> + Send + Sync,
{
    fn on_event(&self, event: &VoteEvent) -> Result<(), ConsumerError> {
        self(event)
    }
}

/// Port for registering consumers.
pub trait VoteEventSubscriber: Send + Sync {
    /// Adds a consumer. Returns false if this exact consumer is already
    /// subscribed.
    fn subscribe(&self, consumer: Arc<dyn EventConsumer>) -> bool;

    /// Removes a consumer by identity. Returns false if it was not
    /// subscribed.
    fn unsubscribe(&self, consumer: &Arc<dyn EventConsumer>) -> bool;
}

/// Combined trait for bus implementations.
pub trait VoteEventBus: super::VoteEventPublisher + VoteEventSubscriber {}

impl<T: super::VoteEventPublisher + VoteEventSubscriber> VoteEventBus for T {}

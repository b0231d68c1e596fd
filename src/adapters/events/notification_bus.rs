//! In-process notification bus.
//!
//! Delivers each vote event synchronously to every subscribed consumer,
//! in subscription order. A failing or panicking consumer is logged and
//! skipped; the rest still receive the event.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, PoisonError, RwLock};

use crate::domain::voting::VoteEvent;
use crate::ports::{ConsumerError, EventConsumer, PublishReport, VoteEventPublisher, VoteEventSubscriber};

/// Synchronous fan-out bus for vote events.
///
/// # Example
///
/// ```ignore
/// let bus = Arc::new(NotificationBus::new());
/// bus.subscribe(playback.clone());
/// bus.subscribe(projector.clone());
///
/// let report = bus.publish(&event);
/// assert_eq!(report.delivered, 2);
/// ```
pub struct NotificationBus {
    consumers: RwLock<Vec<Arc<dyn EventConsumer>>>,
}

impl NotificationBus {
    pub fn new() -> Self {
        Self {
            consumers: RwLock::new(Vec::new()),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.consumers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn deliver(consumer: &Arc<dyn EventConsumer>, event: &VoteEvent) -> Result<(), ConsumerError> {
        match catch_unwind(AssertUnwindSafe(|| consumer.on_event(event))) {
            Ok(result) => result,
            Err(payload) => {
                let message = payload
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic".to_string());
                Err(ConsumerError::Panicked {
                    consumer: consumer.name().to_string(),
                    message,
                })
            }
        }
    }
}

impl Default for NotificationBus {
    fn default() -> Self {
        Self::new()
    }
}

fn same_consumer(a: &Arc<dyn EventConsumer>, b: &Arc<dyn EventConsumer>) -> bool {
    std::ptr::eq(Arc::as_ptr(a) as *const (), Arc::as_ptr(b) as *const ())
}

impl VoteEventPublisher for NotificationBus {
    fn publish(&self, event: &VoteEvent) -> PublishReport {
        // Clone the list so consumers run without the lock held
        let consumers: Vec<Arc<dyn EventConsumer>> = self
            .consumers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        let mut report = PublishReport::default();
        for consumer in &consumers {
            match Self::deliver(consumer, event) {
                Ok(()) => report.delivered += 1,
                Err(err) => {
                    tracing::error!(
                        consumer = consumer.name(),
                        event_id = %event.event_id,
                        kind = %event.kind,
                        error = %err,
                        "Consumer failed to handle vote event"
                    );
                    report.failed.push(err);
                }
            }
        }

        tracing::debug!(
            event_id = %event.event_id,
            kind = %event.kind,
            delivered = report.delivered,
            failed = report.failed.len(),
            "Vote event published"
        );
        report
    }
}

impl VoteEventSubscriber for NotificationBus {
    fn subscribe(&self, consumer: Arc<dyn EventConsumer>) -> bool {
        let mut consumers = self
            .consumers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if consumers.iter().any(|c| same_consumer(c, &consumer)) {
            return false;
        }
        tracing::info!(consumer = consumer.name(), "Consumer subscribed");
        consumers.push(consumer);
        true
    }

    fn unsubscribe(&self, consumer: &Arc<dyn EventConsumer>) -> bool {
        let mut consumers = self
            .consumers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let before = consumers.len();
        consumers.retain(|c| !same_consumer(c, consumer));
        let removed = consumers.len() != before;
        if removed {
            tracing::info!(consumer = consumer.name(), "Consumer unsubscribed");
        }
        removed
    }
}

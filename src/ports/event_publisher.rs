//! VoteEventPublisher port - Interface for fanning out vote events.

use super::ConsumerError;
use crate::domain::voting::VoteEvent;

/// Outcome of one publication.
///
/// Failures are informational. Publishing itself never fails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishReport {
    /// Consumers that handled the event successfully.
    pub delivered: usize,
    /// Consumers that returned an error or panicked.
    pub failed: Vec<ConsumerError>,
}

impl PublishReport {
    pub fn attempted(&self) -> usize {
        self.delivered + self.failed.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Port for publishing vote events.
///
/// Implementations must:
/// - Invoke every subscribed consumer, in subscription order
/// - Isolate consumer failures from each other and from the caller
pub trait VoteEventPublisher: Send + Sync {
    fn publish(&self, event: &VoteEvent) -> PublishReport;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn VoteEventPublisher) {}

    #[test]
    fn report_counts_attempts() {
        let report = PublishReport {
            delivered: 2,
            failed: vec![ConsumerError::poisoned("x")],
        };
        assert_eq!(report.attempted(), 3);
        assert!(!report.is_clean());
        assert!(PublishReport::default().is_clean());
    }
}

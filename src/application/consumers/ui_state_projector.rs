//! UiStateProjector - Read model for clients.

use std::sync::{PoisonError, RwLock};

use serde::Serialize;

use crate::domain::foundation::Timestamp;
use crate::domain::voting::{Song, VoteEvent};
use crate::ports::{ConsumerError, EventConsumer};

const NAME: &str = "UIStateProjector";

/// What clients render: the sorted roster and the leader.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiState {
    pub roster: Vec<Song>,
    pub leader: Option<Song>,
    /// `None` until the first event arrives.
    pub last_update: Option<Timestamp>,
}

/// Replaces its state with every event's snapshot.
pub struct UiStateProjector {
    state: RwLock<UiState>,
}

impl UiStateProjector {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(UiState::default()),
        }
    }

    pub fn get_state(&self) -> UiState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for UiStateProjector {
    fn default() -> Self {
        Self::new()
    }
}

impl EventConsumer for UiStateProjector {
    fn on_event(&self, event: &VoteEvent) -> Result<(), ConsumerError> {
        let mut state = self.state.write().map_err(|_| ConsumerError::poisoned(NAME))?;

        state.roster = event.roster.clone();
        if event.leader.is_some() {
            state.leader = event.leader.clone();
        } else if event.roster.is_empty() {
            state.leader = None;
        }
        state.last_update = Some(Timestamp::now());

        tracing::debug!(
            kind = %event.kind,
            songs = state.roster.len(),
            "UI state projected"
        );
        Ok(())
    }

    fn name(&self) -> &str {
        NAME
    }
}

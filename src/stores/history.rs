// ABOUTME: Append-only bake history log persisted as a full snapshot per append
// ABOUTME: Events keep insertion order and have no identity beyond their position
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::persist;
use crate::errors::AppResult;
use crate::models::HistoryEvent;
use crate::storage::SharedRepository;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Record of completed and manually logged bakes
pub struct HistoryLog {
    events: RwLock<Vec<HistoryEvent>>,
    repository: SharedRepository<Vec<HistoryEvent>>,
}

impl HistoryLog {
    /// Load the log from `repository`; nothing stored means empty
    ///
    /// # Errors
    ///
    /// Returns an error if the stored snapshot cannot be read.
    pub async fn init(repository: SharedRepository<Vec<HistoryEvent>>) -> AppResult<Self> {
        let events = repository.load().await?.unwrap_or_default();
        info!(
            collection = repository.collection(),
            count = events.len(),
            "Bake history loaded"
        );

        Ok(Self {
            events: RwLock::new(events),
            repository,
        })
    }

    /// Every event, oldest first
    pub async fn list(&self) -> Vec<HistoryEvent> {
        self.events.read().await.clone()
    }

    /// Number of recorded events
    pub async fn count(&self) -> usize {
        self.events.read().await.len()
    }

    /// Append an event and persist the log
    ///
    /// # Errors
    ///
    /// Returns a storage error if the save fails; the event is then dropped.
    pub async fn append(&self, event: HistoryEvent) -> AppResult<HistoryEvent> {
        let mut events = self.events.write().await;
        let mut draft = events.clone();
        draft.push(event.clone());

        persist(self.repository.as_ref(), &draft).await?;
        *events = draft;

        debug!(history.item = %event.item, history.count = events.len(), "History appended");
        Ok(event)
    }
}

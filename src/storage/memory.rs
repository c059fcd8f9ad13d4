// ABOUTME: In-memory snapshot repository for tests and throwaway runs
// ABOUTME: Counts writes and can be told to fail them to exercise error paths
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::SnapshotRepository;
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::RwLock;

/// Snapshot kept in process memory
pub struct MemoryRepository<T> {
    collection: &'static str,
    snapshot: RwLock<Option<T>>,
    writes: AtomicUsize,
    fail_writes: AtomicBool,
}

impl<T> MemoryRepository<T> {
    /// Empty repository for `collection`
    #[must_use]
    pub fn new(collection: &'static str) -> Self {
        Self {
            collection,
            snapshot: RwLock::new(None),
            writes: AtomicUsize::new(0),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Repository that starts out holding `snapshot`
    #[must_use]
    pub fn with_snapshot(collection: &'static str, snapshot: T) -> Self {
        Self {
            collection,
            snapshot: RwLock::new(Some(snapshot)),
            writes: AtomicUsize::new(0),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Number of successful saves
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Make subsequent saves fail (or succeed again)
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl<T> SnapshotRepository<T> for MemoryRepository<T>
where
    T: Clone + Send + Sync + 'static,
{
    async fn load(&self) -> AppResult<Option<T>> {
        Ok(self.snapshot.read().await.clone())
    }

    async fn save(&self, snapshot: &T) -> AppResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::storage(format!(
                "Write to {} rejected by memory repository",
                self.collection
            )));
        }

        *self.snapshot.write().await = Some(snapshot.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }

    fn collection(&self) -> &str {
        self.collection
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_failed_write_keeps_previous_snapshot() {
        let repository = MemoryRepository::with_snapshot("history", vec![1_u32, 2]);

        repository.set_fail_writes(true);
        assert!(repository.save(&vec![3]).await.is_err());
        assert_eq!(repository.load().await.unwrap(), Some(vec![1, 2]));
        assert_eq!(repository.write_count(), 0);

        repository.set_fail_writes(false);
        repository.save(&vec![3]).await.unwrap();
        assert_eq!(repository.load().await.unwrap(), Some(vec![3]));
        assert_eq!(repository.write_count(), 1);
    }
}

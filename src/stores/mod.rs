// ABOUTME: In-memory stores for ingredients, recipes, and history backed by snapshot storage
// ABOUTME: Each store guards its collection with a tokio RwLock and flushes on every mutation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Collection stores
//!
//! A store loads its collection once at startup and keeps it in memory.
//! Mutations are applied to a copy, the copy is saved, and only then does it
//! replace the in-memory state. A failed save therefore leaves both memory
//! and storage at the previous snapshot.
//!
//! Lock order across stores is recipes, then ingredients, then history.

/// Append-only bake history
pub mod history;
/// Ingredient inventory
pub mod ingredients;
/// Recipe catalog
pub mod recipes;

pub use history::HistoryLog;
pub use ingredients::IngredientStore;
pub use recipes::RecipeCatalog;

use crate::errors::AppResult;
use crate::logging::AppLogger;
use crate::storage::SnapshotRepository;
use std::time::Instant;

/// Save `snapshot` and record the outcome
async fn persist<T>(repository: &dyn SnapshotRepository<T>, snapshot: &T) -> AppResult<()>
where
    T: Send + Sync + 'static,
{
    let started = Instant::now();
    let result = repository.save(snapshot).await;
    let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    AppLogger::log_storage_write(
        repository.collection(),
        repository.backend(),
        result.is_ok(),
        duration_ms,
    );
    result
}

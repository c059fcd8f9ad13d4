// ABOUTME: Snapshot persistence abstraction with pluggable backends
// ABOUTME: JSON files, SQLite, and in-memory repositories behind one async trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Snapshot storage
//!
//! Every collection is persisted as a complete snapshot: `save` replaces what
//! was stored before, `load` returns the last saved snapshot or `None` when
//! nothing was ever written.

/// One pretty-printed JSON file per collection
pub mod json_file;
/// Process-local snapshots for tests and throwaway runs
pub mod memory;
/// One row per collection in a `SQLite` table
pub mod sqlite;

pub use json_file::JsonFileRepository;
pub use memory::MemoryRepository;
pub use sqlite::SqliteRepository;

use crate::config::StorageUrl;
use crate::constants::{collections, files};
use crate::errors::{AppError, AppResult};
use crate::models::{HistoryEvent, Ingredient, RecipeBook};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::sqlite::SqlitePool;
use std::sync::Arc;
use tracing::info;

/// Repository for one persisted collection
///
/// # Examples
///
/// ```rust,no_run
/// use bakehouse_server::models::Ingredient;
/// use bakehouse_server::storage::{MemoryRepository, SnapshotRepository};
/// # async fn example() -> bakehouse_server::errors::AppResult<()> {
///
/// let repository = MemoryRepository::<Vec<Ingredient>>::new("ingredients");
/// repository.save(&vec![Ingredient::new("flour", "kg", 5.0, 1.0)]).await?;
///
/// let stored = repository.load().await?.unwrap_or_default();
/// assert_eq!(stored.len(), 1);
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait SnapshotRepository<T>: Send + Sync
where
    T: Send + Sync + 'static,
{
    /// Load the last saved snapshot
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read or the stored data is
    /// not a valid snapshot.
    async fn load(&self) -> AppResult<Option<T>>;

    /// Replace the stored snapshot
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the backend write fails. A failed
    /// save leaves the previous snapshot in place.
    async fn save(&self, snapshot: &T) -> AppResult<()>;

    /// Backend name for logs, e.g. `json-files`
    fn backend(&self) -> &'static str;

    /// Collection name for logs, e.g. `ingredients`
    fn collection(&self) -> &str;
}

/// Shared handle to a repository of `T`
pub type SharedRepository<T> = Arc<dyn SnapshotRepository<T>>;

/// Serialize a snapshot to the JSON text every backend stores
pub(crate) fn encode<T: Serialize>(snapshot: &T) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}

/// Parse stored JSON text back into a snapshot
pub(crate) fn decode<T: DeserializeOwned>(collection: &str, payload: &str) -> AppResult<T> {
    serde_json::from_str(payload).map_err(|e| {
        AppError::storage(format!("Stored {collection} snapshot is corrupt: {e}")).with_source(e)
    })
}

/// The three repositories the server needs, built for one backend
#[derive(Clone)]
pub struct Storage {
    /// Ingredient inventory
    pub ingredients: SharedRepository<Vec<Ingredient>>,
    /// Recipe catalog
    pub recipes: SharedRepository<RecipeBook>,
    /// Bake history
    pub history: SharedRepository<Vec<HistoryEvent>>,
    url: StorageUrl,
}

impl Storage {
    /// Build repositories for the backend selected by `url`
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or database cannot be opened.
    pub async fn connect(url: &StorageUrl) -> AppResult<Self> {
        info!(storage.url = %url, storage.backend = url.backend_name(), "Opening storage");

        match url {
            StorageUrl::JsonDirectory { path } => {
                tokio::fs::create_dir_all(path).await.map_err(|e| {
                    AppError::storage(format!(
                        "Cannot create storage directory {}: {e}",
                        path.display()
                    ))
                    .with_source(e)
                })?;

                Ok(Self {
                    ingredients: Arc::new(JsonFileRepository::new(
                        collections::INGREDIENTS,
                        path.join(files::INGREDIENTS),
                    )),
                    recipes: Arc::new(JsonFileRepository::new(
                        collections::RECIPES,
                        path.join(files::RECIPES),
                    )),
                    history: Arc::new(JsonFileRepository::new(
                        collections::HISTORY,
                        path.join(files::HISTORY),
                    )),
                    url: url.clone(),
                })
            }
            StorageUrl::Sqlite { .. } | StorageUrl::SqliteMemory => {
                let connection_string = url
                    .sqlite_connection_string()
                    .ok_or_else(|| AppError::config("Storage URL is not a SQLite URL"))?;
                let pool = sqlite::connect_pool(&connection_string, url.is_ephemeral()).await?;
                Self::from_sqlite_pool(pool, url.clone()).await
            }
            StorageUrl::Memory => Ok(Self::in_memory()),
        }
    }

    /// Build repositories sharing an existing `SQLite` pool
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot table cannot be created.
    pub async fn from_sqlite_pool(pool: SqlitePool, url: StorageUrl) -> AppResult<Self> {
        sqlite::migrate(&pool).await?;

        Ok(Self {
            ingredients: Arc::new(SqliteRepository::new(
                pool.clone(),
                collections::INGREDIENTS,
            )),
            recipes: Arc::new(SqliteRepository::new(pool.clone(), collections::RECIPES)),
            history: Arc::new(SqliteRepository::new(pool, collections::HISTORY)),
            url,
        })
    }

    /// Purely in-memory repositories
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            ingredients: Arc::new(MemoryRepository::new(collections::INGREDIENTS)),
            recipes: Arc::new(MemoryRepository::new(collections::RECIPES)),
            history: Arc::new(MemoryRepository::new(collections::HISTORY)),
            url: StorageUrl::Memory,
        }
    }

    /// Location these repositories were built for
    #[must_use]
    pub const fn url(&self) -> &StorageUrl {
        &self.url
    }
}

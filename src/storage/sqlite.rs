// ABOUTME: SQLite snapshot repository storing each collection as one JSON row
// ABOUTME: Saves are upserts so every write fully overwrites the previous snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{decode, encode, SnapshotRepository};
use crate::errors::AppResult;
use async_trait::async_trait;
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use sqlx::Row;
use std::marker::PhantomData;

/// Open a pool for `connection_string`
///
/// An in-memory database lives only as long as its connection, so ephemeral
/// pools are pinned to a single connection that is never recycled.
///
/// # Errors
///
/// Returns a database error if the connection cannot be established.
pub async fn connect_pool(connection_string: &str, ephemeral: bool) -> AppResult<SqlitePool> {
    let options = if ephemeral {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new()
    };

    Ok(options.connect(connection_string).await?)
}

/// Create the snapshot table if it does not exist
///
/// # Errors
///
/// Returns a database error if the statement fails.
pub async fn migrate(pool: &SqlitePool) -> AppResult<()> {
    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS snapshots (
            collection TEXT PRIMARY KEY,
            payload TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        ",
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Snapshot stored as the `payload` column of one `snapshots` row
pub struct SqliteRepository<T> {
    pool: SqlitePool,
    collection: &'static str,
    marker: PhantomData<fn() -> T>,
}

impl<T> SqliteRepository<T> {
    /// Repository for `collection`; the table must already exist
    #[must_use]
    pub const fn new(pool: SqlitePool, collection: &'static str) -> Self {
        Self {
            pool,
            collection,
            marker: PhantomData,
        }
    }
}

#[async_trait]
impl<T> SnapshotRepository<T> for SqliteRepository<T>
where
    T: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    async fn load(&self) -> AppResult<Option<T>> {
        let row = sqlx::query("SELECT payload FROM snapshots WHERE collection = ?")
            .bind(self.collection)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => {
                let payload: String = row.try_get("payload")?;
                decode(self.collection, &payload).map(Some)
            }
            None => Ok(None),
        }
    }

    async fn save(&self, snapshot: &T) -> AppResult<()> {
        let payload = encode(snapshot)?;

        sqlx::query(
            r"
            INSERT INTO snapshots (collection, payload, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT(collection) DO UPDATE SET
                payload = excluded.payload,
                updated_at = excluded.updated_at
            ",
        )
        .bind(self.collection)
        .bind(payload)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    fn backend(&self) -> &'static str {
        "sqlite"
    }

    fn collection(&self) -> &str {
        self.collection
    }
}

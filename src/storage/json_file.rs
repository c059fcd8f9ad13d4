// ABOUTME: JSON file snapshot repository, one pretty-printed file per collection
// ABOUTME: Writes go to a temp file first and are renamed into place atomically
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{decode, encode, SnapshotRepository};
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

/// Snapshot stored as a single JSON document on disk
pub struct JsonFileRepository<T> {
    collection: &'static str,
    path: PathBuf,
    marker: PhantomData<fn() -> T>,
}

impl<T> JsonFileRepository<T> {
    /// Repository backed by the file at `path`
    pub fn new(collection: &'static str, path: impl Into<PathBuf>) -> Self {
        Self {
            collection,
            path: path.into(),
            marker: PhantomData,
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, action: &str, error: std::io::Error) -> AppError {
        AppError::storage(format!(
            "Failed to {action} {}: {error}",
            self.path.display()
        ))
        .with_source(error)
    }
}

#[async_trait]
impl<T> SnapshotRepository<T> for JsonFileRepository<T>
where
    T: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    async fn load(&self) -> AppResult<Option<T>> {
        let payload = match fs::read_to_string(&self.path).await {
            Ok(payload) => payload,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No snapshot file yet");
                return Ok(None);
            }
            Err(e) => return Err(self.io_error("read", e)),
        };

        decode(self.collection, &payload).map(Some)
    }

    async fn save(&self, snapshot: &T) -> AppResult<()> {
        let payload = encode(snapshot)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| self.io_error("create directory for", e))?;
        }

        let temp_path = self.temp_path();
        fs::write(&temp_path, payload.as_bytes())
            .await
            .map_err(|e| self.io_error("write temp file for", e))?;

        if let Err(e) = fs::rename(&temp_path, &self.path).await {
            // Leave the previous snapshot untouched and drop the partial write
            let _ = fs::remove_file(&temp_path).await;
            return Err(self.io_error("replace", e));
        }

        Ok(())
    }

    fn backend(&self) -> &'static str {
        "json-files"
    }

    fn collection(&self) -> &str {
        self.collection
    }
}

// ABOUTME: Shared server state handed to every route: stores, bake service, and config
// ABOUTME: Built once at startup from a Storage backend and cloned cheaply per request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Centralized resource container for dependency injection

use crate::config::ServerConfig;
use crate::errors::AppResult;
use crate::services::BakeService;
use crate::storage::Storage;
use crate::stores::{HistoryLog, IngredientStore, RecipeCatalog};
use std::sync::Arc;
use tracing::info;

/// Everything a request handler needs
#[derive(Clone)]
pub struct ServerResources {
    /// Ingredient inventory
    pub ingredients: Arc<IngredientStore>,
    /// Recipe catalog
    pub recipes: Arc<RecipeCatalog>,
    /// Bake history
    pub history: Arc<HistoryLog>,
    /// Bake workflow over the three stores
    pub bake_service: BakeService,
    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Load every store from `storage`
    ///
    /// # Errors
    ///
    /// Returns an error if any stored snapshot cannot be read.
    pub async fn new(storage: Storage, config: Arc<ServerConfig>) -> AppResult<Self> {
        let recipes = Arc::new(RecipeCatalog::init(storage.recipes.clone()).await?);
        let ingredients = Arc::new(IngredientStore::init(storage.ingredients.clone()).await?);
        let history = Arc::new(HistoryLog::init(storage.history.clone()).await?);

        info!(
            storage.url = %storage.url(),
            "Server resources initialized"
        );

        Ok(Self {
            bake_service: BakeService::new(recipes.clone(), ingredients.clone(), history.clone()),
            ingredients,
            recipes,
            history,
            config,
        })
    }

    /// Resources over fresh in-memory storage with default configuration
    ///
    /// # Errors
    ///
    /// Never fails in practice; empty memory repositories always load.
    pub async fn in_memory() -> AppResult<Self> {
        Self::new(Storage::in_memory(), Arc::new(ServerConfig::default())).await
    }
}

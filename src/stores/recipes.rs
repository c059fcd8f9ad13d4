// ABOUTME: Recipe catalog keyed by exact recipe name, append-only after creation
// ABOUTME: Preserves recipe and requirement order through storage and responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::persist;
use crate::constants::messages;
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::models::{Recipe, RecipeBook};
use crate::storage::SharedRepository;
use tokio::sync::RwLock;
use tracing::info;

/// Known recipes; names are case-sensitive
pub struct RecipeCatalog {
    recipes: RwLock<RecipeBook>,
    repository: SharedRepository<RecipeBook>,
}

impl RecipeCatalog {
    /// Load the catalog from `repository`; nothing stored means empty
    ///
    /// # Errors
    ///
    /// Returns an error if the stored snapshot cannot be read.
    pub async fn init(repository: SharedRepository<RecipeBook>) -> AppResult<Self> {
        let recipes = repository.load().await?.unwrap_or_default();
        info!(
            collection = repository.collection(),
            count = recipes.len(),
            "Recipe catalog loaded"
        );

        Ok(Self {
            recipes: RwLock::new(recipes),
            repository,
        })
    }

    /// Every recipe, keyed by name
    pub async fn list(&self) -> RecipeBook {
        self.recipes.read().await.clone()
    }

    /// Resolve a recipe by exact name
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` ("Recipe '<name>' not found") if absent.
    pub async fn get(&self, name: &str) -> AppResult<Recipe> {
        self.recipes
            .read()
            .await
            .get(name)
            .map(|requirements| Recipe::new(name, requirements.clone()))
            .ok_or_else(|| AppError::not_found(format!("Recipe '{name}'")))
    }

    /// Register a new recipe
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExists` ("Recipe already exists") if the exact
    /// name is taken, or a storage error if the save fails.
    pub async fn add(&self, recipe: Recipe) -> AppResult<()> {
        let mut recipes = self.recipes.write().await;
        if recipes.contains_key(&recipe.name) {
            return Err(AppError::already_exists(messages::RECIPE_EXISTS));
        }

        let mut draft = recipes.clone();
        let requirement_count = recipe.requirements.len();
        draft.insert(recipe.name.clone(), recipe.requirements);

        persist(self.repository.as_ref(), &draft).await?;
        *recipes = draft;

        AppLogger::log_recipe_change("add", &recipe.name, requirement_count);
        Ok(())
    }
}

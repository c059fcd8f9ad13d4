// ABOUTME: Bake workflow coordinating the recipe catalog, inventory, and history log
// ABOUTME: Evaluation and decrement run under one inventory write lock so bakes never race
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::evaluator::evaluate;
use crate::errors::AppResult;
use crate::logging::AppLogger;
use crate::models::{HistoryEvent, Ingredient};
use crate::stores::{HistoryLog, IngredientStore, RecipeCatalog};
use std::sync::Arc;
use std::time::Instant;
use tracing::error;

/// Result of a successful bake
#[derive(Debug, Clone)]
pub struct BakeOutcome {
    /// Recipe that was baked
    pub recipe: String,
    /// Full inventory after the decrement
    pub updated_ingredients: Vec<Ingredient>,
    /// History entry recorded for the bake
    pub event: HistoryEvent,
}

/// Bakes recipes against the shared inventory
#[derive(Clone)]
pub struct BakeService {
    recipes: Arc<RecipeCatalog>,
    ingredients: Arc<IngredientStore>,
    history: Arc<HistoryLog>,
}

impl BakeService {
    /// Create a service over the three stores
    #[must_use]
    pub const fn new(
        recipes: Arc<RecipeCatalog>,
        ingredients: Arc<IngredientStore>,
        history: Arc<HistoryLog>,
    ) -> Self {
        Self {
            recipes,
            ingredients,
            history,
        }
    }

    /// Bake `item` once
    ///
    /// Steps: resolve the recipe, then under the inventory write lock evaluate
    /// it, decrement stock and save, then append a history event.
    ///
    /// # Errors
    ///
    /// - `ResourceNotFound` if no recipe is named `item`
    /// - `UnitMismatch`, `MissingIngredients` or `InsufficientIngredients`
    ///   if the inventory cannot cover the recipe; nothing is changed
    /// - a storage error if the inventory or history save fails
    pub async fn bake(&self, item: &str) -> AppResult<BakeOutcome> {
        let started = Instant::now();
        let result = self.run(item).await;
        let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        match &result {
            Ok(_) => AppLogger::log_bake(item, true, duration_ms, None),
            Err(e) => AppLogger::log_bake(item, false, duration_ms, Some(&e.message)),
        }
        result
    }

    async fn run(&self, item: &str) -> AppResult<BakeOutcome> {
        let recipe = self.recipes.get(item).await?;

        let updated_ingredients = self
            .ingredients
            .transact(|items| {
                let plan = evaluate(&recipe, items)?;
                plan.apply(items);
                Ok(items.clone())
            })
            .await?;

        let event = self
            .history
            .append(HistoryEvent::baked(&recipe.name))
            .await
            .inspect_err(|e| {
                error!(
                    bake.recipe = %recipe.name,
                    error = %e,
                    "Inventory was decremented but the bake could not be recorded"
                );
            })?;

        Ok(BakeOutcome {
            recipe: recipe.name,
            updated_ingredients,
            event,
        })
    }
}

// ABOUTME: Ingredient inventory store with case-insensitive lookup and checked stock changes
// ABOUTME: Every mutation is saved as a full snapshot before it becomes visible
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::persist;
use crate::constants::messages;
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::models::{Ingredient, IngredientUpdate};
use crate::storage::SharedRepository;
use tokio::sync::RwLock;
use tracing::info;

/// Current inventory, in insertion order
pub struct IngredientStore {
    items: RwLock<Vec<Ingredient>>,
    repository: SharedRepository<Vec<Ingredient>>,
}

fn position(items: &[Ingredient], name: &str) -> AppResult<usize> {
    items
        .iter()
        .position(|item| item.matches_name(name))
        .ok_or_else(|| AppError::not_found(name))
}

impl IngredientStore {
    /// Load the inventory from `repository`; nothing stored means empty
    ///
    /// # Errors
    ///
    /// Returns an error if the stored snapshot cannot be read.
    pub async fn init(repository: SharedRepository<Vec<Ingredient>>) -> AppResult<Self> {
        let items = repository.load().await?.unwrap_or_default();
        info!(
            collection = repository.collection(),
            count = items.len(),
            "Ingredient inventory loaded"
        );

        Ok(Self {
            items: RwLock::new(items),
            repository,
        })
    }

    /// All ingredients
    pub async fn list(&self) -> Vec<Ingredient> {
        self.items.read().await.clone()
    }

    /// Ingredients strictly below their low-stock threshold
    pub async fn low_stock(&self) -> Vec<Ingredient> {
        self.items
            .read()
            .await
            .iter()
            .filter(|item| item.is_low_stock())
            .cloned()
            .collect()
    }

    /// Look up by case-insensitive name
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` ("<name> not found") if absent.
    pub async fn get(&self, name: &str) -> AppResult<Ingredient> {
        let items = self.items.read().await;
        let index = position(&items, name)?;
        Ok(items[index].clone())
    }

    /// Apply `mutate` to a copy of the inventory and commit it once saved
    ///
    /// The write lock is held from the first read to the commit, so
    /// concurrent transactions run one after another, each against the
    /// previous one's result. If `mutate` or the save fails nothing changes.
    ///
    /// # Errors
    ///
    /// Returns whatever `mutate` returns, or the storage error from saving.
    pub async fn transact<R, F>(&self, mutate: F) -> AppResult<R>
    where
        F: FnOnce(&mut Vec<Ingredient>) -> AppResult<R> + Send,
        R: Send,
    {
        let mut items = self.items.write().await;
        let mut draft = items.clone();
        let outcome = mutate(&mut draft)?;

        persist(self.repository.as_ref(), &draft).await?;
        *items = draft;
        Ok(outcome)
    }

    /// Add a new ingredient
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExists` ("<name> already exists!") if an
    /// ingredient with the same name in any letter case is stocked.
    pub async fn add(&self, ingredient: Ingredient) -> AppResult<Ingredient> {
        let added = self
            .transact(|items| {
                if items.iter().any(|item| item.matches_name(&ingredient.name)) {
                    return Err(AppError::already_exists(format!(
                        "{} already exists!",
                        ingredient.name
                    )));
                }
                items.push(ingredient.clone());
                Ok(ingredient)
            })
            .await?;

        AppLogger::log_inventory_change("add", &added.name, Some(added.quantity));
        Ok(added)
    }

    /// Overwrite the fields present in `update`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if absent.
    pub async fn update(&self, name: &str, update: &IngredientUpdate) -> AppResult<Ingredient> {
        let updated = self
            .transact(|items| {
                let index = position(items, name)?;
                update.apply_to(&mut items[index]);
                Ok(items[index].clone())
            })
            .await?;

        AppLogger::log_inventory_change("update", &updated.name, Some(updated.quantity));
        Ok(updated)
    }

    /// Remove an ingredient, returning what was removed
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if absent.
    pub async fn delete(&self, name: &str) -> AppResult<Ingredient> {
        let removed = self
            .transact(|items| {
                let index = position(items, name)?;
                Ok(items.remove(index))
            })
            .await?;

        AppLogger::log_inventory_change("delete", &removed.name, None);
        Ok(removed)
    }

    /// Take `amount` out of stock
    ///
    /// The ingredient is resolved first, so an unknown name is reported as
    /// not found whatever the amount.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if absent, `InvalidInput` for a negative
    /// amount, and `InsufficientStock` if `amount` exceeds the stock.
    pub async fn subtract(&self, name: &str, amount: f64) -> AppResult<Ingredient> {
        let updated = self
            .transact(|items| {
                let index = position(items, name)?;
                let item = &mut items[index];

                if amount < 0.0 {
                    return Err(AppError::invalid_input(messages::AMOUNT_MUST_BE_POSITIVE));
                }
                if amount > item.quantity {
                    return Err(AppError::insufficient_stock(messages::NOT_ENOUGH_QUANTITY));
                }

                item.quantity -= amount;
                Ok(item.clone())
            })
            .await?;

        AppLogger::log_inventory_change("subtract", &updated.name, Some(updated.quantity));
        Ok(updated)
    }
}

// ABOUTME: Core data models for the Bakehouse inventory platform
// ABOUTME: Re-exports ingredient, recipe, history, and quantity types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Core data models
//!
//! Everything persisted by the server or exchanged over HTTP lives here.

/// Bake history events
pub mod history;
/// Inventory ingredients and their request payloads
pub mod ingredient;
/// Insertion-ordered string-keyed map
pub mod ordered;
/// Numeric coercion and quantity display
pub mod quantity;
/// Recipes and recipe requirements
pub mod recipe;

pub use history::{HistoryEvent, NewHistoryEvent};
pub use ingredient::{names_match, Ingredient, IngredientUpdate, NewIngredient, StockAdjustment};
pub use ordered::OrderedMap;
pub use quantity::{format_quantity, Measure};
pub use recipe::{BakeRequest, NewRecipe, Recipe, RecipeBook, RecipeRequirement, Requirements};

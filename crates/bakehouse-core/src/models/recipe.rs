// ABOUTME: Recipe model: an ordered set of ingredient requirements under a unique name
// ABOUTME: Includes the add-recipe and bake request payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ordered::OrderedMap;
use super::quantity::{deserialize_quantity, Measure};
use crate::constants::messages;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// How much of one ingredient a recipe consumes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeRequirement {
    /// Amount consumed per bake
    #[serde(deserialize_with = "deserialize_quantity")]
    pub amount: f64,
    /// Unit the amount is expressed in
    pub unit: String,
}

impl RecipeRequirement {
    /// Create a requirement
    pub fn new(amount: f64, unit: impl Into<String>) -> Self {
        Self {
            amount,
            unit: unit.into(),
        }
    }

    /// Amount and unit as a displayable measure
    #[must_use]
    pub fn measure(&self) -> Measure {
        Measure::new(self.amount, self.unit.clone())
    }
}

/// Ingredient name to requirement, in the order the recipe was written
pub type Requirements = OrderedMap<RecipeRequirement>;

/// Every known recipe keyed by exact name; this is the persisted shape
pub type RecipeBook = OrderedMap<Requirements>;

/// A named recipe resolved from the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    /// Exact recipe name
    pub name: String,
    /// Ingredient requirements in recipe order
    pub requirements: Requirements,
}

impl Recipe {
    /// Create a recipe
    pub fn new(name: impl Into<String>, requirements: Requirements) -> Self {
        Self {
            name: name.into(),
            requirements,
        }
    }
}

/// Request payload for `POST /add-recipe`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewRecipe {
    /// Name of the recipe
    #[serde(default)]
    pub recipe_name: Option<String>,
    /// Requirements keyed by ingredient name
    #[serde(default)]
    pub ingredients: Option<Requirements>,
}

impl NewRecipe {
    /// Reject empty or absent names and requirement sets
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` with "Missing recipe name or ingredients".
    pub fn into_recipe(self) -> AppResult<Recipe> {
        match (self.recipe_name, self.ingredients) {
            (Some(name), Some(requirements)) if !name.is_empty() && !requirements.is_empty() => {
                Ok(Recipe::new(name, requirements))
            }
            _ => Err(AppError::invalid_input(messages::MISSING_RECIPE_FIELDS)),
        }
    }
}

/// Request payload for `POST /bake`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BakeRequest {
    /// Recipe to bake
    #[serde(default)]
    pub item: Option<String>,
}

impl BakeRequest {
    /// Requested recipe name; absent reads as empty and never resolves
    #[must_use]
    pub fn item(&self) -> &str {
        self.item.as_deref().unwrap_or_default()
    }
}

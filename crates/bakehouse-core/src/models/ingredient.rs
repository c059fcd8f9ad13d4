// ABOUTME: Inventory ingredient model plus the create and partial-update payloads
// ABOUTME: Ingredient names are compared case-insensitively everywhere
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::quantity::{deserialize_optional_quantity, deserialize_quantity};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Case-insensitive name comparison used for ingredient keys and units
#[must_use]
pub fn names_match(left: &str, right: &str) -> bool {
    left.to_lowercase() == right.to_lowercase()
}

/// A stocked ingredient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Display name, unique under case-insensitive comparison
    pub name: String,
    /// Unit label, e.g. `kg`, `pieces`
    pub unit: String,
    /// Stock on hand
    #[serde(deserialize_with = "deserialize_quantity")]
    pub quantity: f64,
    /// Stock level below which the ingredient counts as running low
    #[serde(deserialize_with = "deserialize_quantity")]
    pub low_stock_threshold: f64,
}

impl Ingredient {
    /// Create a new ingredient
    pub fn new(
        name: impl Into<String>,
        unit: impl Into<String>,
        quantity: f64,
        low_stock_threshold: f64,
    ) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            quantity,
            low_stock_threshold,
        }
    }

    /// Whether this ingredient is the one called `name`
    #[must_use]
    pub fn matches_name(&self, name: &str) -> bool {
        names_match(&self.name, name)
    }

    /// Whether `unit` is the unit this ingredient is stocked in
    #[must_use]
    pub fn unit_matches(&self, unit: &str) -> bool {
        names_match(&self.unit, unit)
    }

    /// Strictly below threshold; an ingredient sitting exactly on it is fine
    #[must_use]
    pub fn is_low_stock(&self) -> bool {
        self.quantity < self.low_stock_threshold
    }
}

/// Request payload for adding an ingredient
///
/// All fields are optional on the wire so that absent fields can be reported
/// by name instead of surfacing as a generic parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewIngredient {
    /// Ingredient name
    #[serde(default)]
    pub name: Option<String>,
    /// Unit label
    #[serde(default)]
    pub unit: Option<String>,
    /// Initial stock
    #[serde(default, deserialize_with = "deserialize_optional_quantity")]
    pub quantity: Option<f64>,
    /// Low-stock threshold
    #[serde(default, deserialize_with = "deserialize_optional_quantity")]
    pub low_stock_threshold: Option<f64>,
}

impl NewIngredient {
    /// Check presence of every field and build the ingredient
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` naming each absent field.
    pub fn into_ingredient(self) -> AppResult<Ingredient> {
        match self {
            Self {
                name: Some(name),
                unit: Some(unit),
                quantity: Some(quantity),
                low_stock_threshold: Some(threshold),
            } => Ok(Ingredient::new(name, unit, quantity, threshold)),
            incomplete => {
                let missing: Vec<&str> = [
                    ("name", incomplete.name.is_none()),
                    ("unit", incomplete.unit.is_none()),
                    ("quantity", incomplete.quantity.is_none()),
                    ("low_stock_threshold", incomplete.low_stock_threshold.is_none()),
                ]
                .into_iter()
                .filter_map(|(field, absent)| absent.then_some(field))
                .collect();

                Err(AppError::missing_field(format!(
                    "Missing required fields: {}",
                    missing.join(", ")
                )))
            }
        }
    }
}

/// Partial update; only fields that are present are applied
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IngredientUpdate {
    /// New unit label
    #[serde(default)]
    pub unit: Option<String>,
    /// New stock level
    #[serde(default, deserialize_with = "deserialize_optional_quantity")]
    pub quantity: Option<f64>,
    /// New low-stock threshold
    #[serde(default, deserialize_with = "deserialize_optional_quantity")]
    pub low_stock_threshold: Option<f64>,
}

impl IngredientUpdate {
    /// Apply the provided fields to `ingredient`
    pub fn apply_to(&self, ingredient: &mut Ingredient) {
        if let Some(unit) = &self.unit {
            ingredient.unit.clone_from(unit);
        }
        if let Some(quantity) = self.quantity {
            ingredient.quantity = quantity;
        }
        if let Some(threshold) = self.low_stock_threshold {
            ingredient.low_stock_threshold = threshold;
        }
    }
}

/// Request payload for a manual stock subtraction
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StockAdjustment {
    /// Amount to remove; absent means zero
    #[serde(default, deserialize_with = "deserialize_optional_quantity")]
    pub amount: Option<f64>,
}

impl StockAdjustment {
    /// Requested amount, defaulting to zero
    #[must_use]
    pub fn amount(&self) -> f64 {
        self.amount.unwrap_or(0.0)
    }
}

// ABOUTME: Shared constants for timestamps, collection names, and response messages
// ABOUTME: Pure data constants used by both the server crate and the core models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Local-time format used for every history event timestamp
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Names of the persisted collections
pub mod collections {
    /// Ingredient inventory snapshot
    pub const INGREDIENTS: &str = "ingredients";
    /// Recipe catalog snapshot
    pub const RECIPES: &str = "recipes";
    /// Bake history log
    pub const HISTORY: &str = "history";
}

/// Fixed user-facing messages
pub mod messages {
    /// Ingredient created
    pub const INGREDIENT_ADDED: &str = "Ingredient added!";
    /// Manual history entry recorded
    pub const HISTORY_RECORDED: &str = "Baking history recorded";
    /// Subtract with a negative amount
    pub const AMOUNT_MUST_BE_POSITIVE: &str = "Amount must be positive";
    /// Subtract larger than the current stock
    pub const NOT_ENOUGH_QUANTITY: &str = "Not enough quantity to subtract";
    /// Manual history entry without its required fields
    pub const MISSING_REQUIRED_FIELDS: &str = "Missing required fields";
    /// Recipe submitted without a name or requirements
    pub const MISSING_RECIPE_FIELDS: &str = "Missing recipe name or ingredients";
    /// Duplicate recipe name
    pub const RECIPE_EXISTS: &str = "Recipe already exists";
}

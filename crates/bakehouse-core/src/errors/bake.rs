// ABOUTME: Bake-specific error types produced by the recipe fulfilment check
// ABOUTME: Provides structured findings that convert into the main AppError system
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Bake Error Types
//!
//! - `BakeError` - why a recipe cannot be baked against the current inventory
//! - Conversion to `AppError` for HTTP response formatting
//!
//! The `Display` output of each variant is the exact message shown to clients.

use super::{AppError, ErrorCode};
use crate::models::Measure;
use std::fmt;
use thiserror::Error;

/// An ingredient that is present but short of what a recipe needs
#[derive(Debug, Clone, PartialEq)]
pub struct Shortfall {
    /// Ingredient name as written in the recipe
    pub name: String,
    /// Stock on hand
    pub available: Measure,
    /// Amount the recipe needs
    pub needed: Measure,
}

impl fmt::Display for Shortfall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (available: {}, needed: {})",
            self.name, self.available, self.needed
        )
    }
}

/// Reasons a bake is rejected.
///
/// A unit mismatch aborts the evaluation on the first offending ingredient.
/// Missing and insufficient ingredients are collected across the whole recipe,
/// and missing ones take priority over shortfalls.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BakeError {
    /// Recipe and inventory disagree on the unit of an ingredient
    #[error("Unit mismatch for {ingredient}: recipe needs {required}, but inventory has {available}")]
    UnitMismatch {
        /// Ingredient name as written in the recipe
        ingredient: String,
        /// Amount and unit required by the recipe
        required: Measure,
        /// Amount and unit held in the inventory
        available: Measure,
    },
    /// Ingredients absent from the inventory, in recipe order
    #[error("Missing ingredients: {}", .0.join(", "))]
    MissingIngredients(Vec<String>),
    /// Ingredients present but short, in recipe order
    #[error("Insufficient ingredients: {}", join_shortfalls(.0))]
    InsufficientIngredients(Vec<Shortfall>),
}

fn join_shortfalls(shortfalls: &[Shortfall]) -> String {
    shortfalls
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl BakeError {
    /// Error code reported to clients for this failure
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::UnitMismatch { .. } => ErrorCode::UnitMismatch,
            Self::MissingIngredients(_) => ErrorCode::MissingIngredients,
            Self::InsufficientIngredients(_) => ErrorCode::InsufficientIngredients,
        }
    }
}

impl From<BakeError> for AppError {
    fn from(error: BakeError) -> Self {
        Self::new(error.code(), error.to_string())
    }
}

// ABOUTME: Bake feasibility check of a recipe against an inventory snapshot
// ABOUTME: Produces either a deduction plan or the first unit mismatch, missing, or short ingredients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Bake Evaluator
//!
//! Walks the recipe requirements in order, matching each one to an inventory
//! entry by case-insensitive name:
//!
//! - no entry: recorded as missing, evaluation continues;
//! - units differ: evaluation stops with [`BakeError::UnitMismatch`];
//! - stock below demand: recorded as a shortfall, evaluation continues.
//!
//! Missing ingredients are reported before shortfalls. Requirements that
//! resolve to the same inventory entry (`Flour` and `flour`) draw on its
//! stock together.

use crate::errors::{BakeError, Shortfall};
use crate::models::{Ingredient, Measure, Recipe};

/// Deductions that make a bake happen, indexed into the evaluated snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct BakePlan {
    deductions: Vec<(usize, f64)>,
}

impl BakePlan {
    /// Subtract every required amount from `inventory`
    ///
    /// `inventory` must be the snapshot the plan was evaluated against.
    pub fn apply(&self, inventory: &mut [Ingredient]) {
        for &(index, amount) in &self.deductions {
            if let Some(item) = inventory.get_mut(index) {
                item.quantity -= amount;
            }
        }
    }

    /// Number of inventory entries touched
    #[must_use]
    pub fn len(&self) -> usize {
        self.deductions.len()
    }

    /// True when the recipe consumes nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deductions.is_empty()
    }
}

/// Decide whether `recipe` can be baked from `inventory`
///
/// # Errors
///
/// Returns the [`BakeError`] describing why not. No state is touched either
/// way; apply the returned plan to commit.
pub fn evaluate(recipe: &Recipe, inventory: &[Ingredient]) -> Result<BakePlan, BakeError> {
    let mut missing = Vec::new();
    let mut shortfalls = Vec::new();
    let mut deductions: Vec<(usize, f64)> = Vec::with_capacity(recipe.requirements.len());

    for (name, requirement) in recipe.requirements.iter() {
        let Some(index) = inventory.iter().position(|item| item.matches_name(name)) else {
            missing.push(name.clone());
            continue;
        };
        let stocked = &inventory[index];

        if !stocked.unit_matches(&requirement.unit) {
            return Err(BakeError::UnitMismatch {
                ingredient: name.clone(),
                required: requirement.measure(),
                available: Measure::new(stocked.quantity, stocked.unit.clone()),
            });
        }

        let demand = match deductions.iter_mut().find(|(seen, _)| *seen == index) {
            Some((_, total)) => {
                *total += requirement.amount;
                *total
            }
            None => {
                deductions.push((index, requirement.amount));
                requirement.amount
            }
        };

        if stocked.quantity < demand {
            shortfalls.push(Shortfall {
                name: name.clone(),
                available: Measure::new(stocked.quantity, stocked.unit.clone()),
                needed: Measure::new(demand, requirement.unit.clone()),
            });
        }
    }

    if !missing.is_empty() {
        return Err(BakeError::MissingIngredients(missing));
    }
    if !shortfalls.is_empty() {
        return Err(BakeError::InsufficientIngredients(shortfalls));
    }

    Ok(BakePlan { deductions })
}

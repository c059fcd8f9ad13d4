// ABOUTME: Domain service layer for inventory logic extracted from route handlers
// ABOUTME: Hosts the bake evaluator and the bake workflow that commits its result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Business rules that span more than one store live here so route handlers
//! stay thin.

/// Bake workflow: resolve, evaluate, decrement, record
pub mod bake;
/// Pure recipe-against-inventory feasibility check
pub mod evaluator;

pub use bake::{BakeOutcome, BakeService};
pub use evaluator::{evaluate, BakePlan};

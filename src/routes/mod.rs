// ABOUTME: Route module organization for the Bakehouse HTTP endpoints
// ABOUTME: One module per domain, each exposing a routes() constructor over shared resources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the Bakehouse server
//!
//! Each domain module contains only route definitions and thin handlers that
//! delegate to the stores and services in [`crate::resources::ServerResources`].

/// Bake endpoint
pub mod bake;
/// Liveness, readiness, and banner routes
pub mod health;
/// Bake history routes
pub mod history;
/// Ingredient inventory routes
pub mod ingredients;
/// Recipe catalog routes
pub mod recipes;

pub use bake::BakeRoutes;
pub use health::HealthRoutes;
pub use history::HistoryRoutes;
pub use ingredients::IngredientRoutes;
pub use recipes::RecipeRoutes;

// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Builds routers over fresh in-memory resources with optional seeded data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `bakehouse_server`

use axum::Router;
use bakehouse_server::{
    models::{Ingredient, Recipe, RecipeRequirement, Requirements},
    resources::ServerResources,
    server::BakehouseServer,
};
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fresh in-memory resources
pub async fn create_test_resources() -> Arc<ServerResources> {
    init_test_logging();
    Arc::new(
        ServerResources::in_memory()
            .await
            .expect("in-memory resources"),
    )
}

/// Build a recipe from `(ingredient, amount, unit)` triples
pub fn recipe(name: &str, requirements: &[(&str, f64, &str)]) -> Recipe {
    let requirements: Requirements = requirements
        .iter()
        .map(|&(ingredient, amount, unit)| {
            (ingredient.to_owned(), RecipeRequirement::new(amount, unit))
        })
        .collect();
    Recipe::new(name, requirements)
}

/// Resources holding `flour` (5 kg, threshold 1) plus the `bread` and `cake` recipes
pub async fn create_bakery_resources() -> Arc<ServerResources> {
    let resources = create_test_resources().await;
    resources
        .ingredients
        .add(Ingredient::new("flour", "kg", 5.0, 1.0))
        .await
        .unwrap();
    resources
        .recipes
        .add(recipe("bread", &[("flour", 2.0, "kg")]))
        .await
        .unwrap();
    resources
        .recipes
        .add(recipe("cake", &[("flour", 2.0, "kg"), ("sugar", 1.0, "kg")]))
        .await
        .unwrap();
    resources
}

/// Full application router over `resources`
pub fn router(resources: &Arc<ServerResources>) -> Router {
    BakehouseServer::new(resources.clone()).router()
}

// ABOUTME: HTTP integration tests for the bake route
// ABOUTME: Verifies all-or-nothing decrements, error priority, and history recording
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use bakehouse_server::models::Ingredient;
use helpers::axum_test::AxumTestRequest;
use serde_json::{json, Value};

async fn flour_quantity(resources: &bakehouse_server::resources::ServerResources) -> f64 {
    resources.ingredients.get("flour").await.unwrap().quantity
}

#[tokio::test]
async fn test_bake_bread_success() {
    let resources = common::create_bakery_resources().await;

    let response = AxumTestRequest::post("/bake")
        .json(&json!({"item": "bread"}))
        .send(common::router(&resources))
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["message"], "bread baked successfully!");
    assert_eq!(
        body["updated_ingredients"],
        json!([{"name": "flour", "unit": "kg", "quantity": 3.0, "low_stock_threshold": 1.0}])
    );

    let history = resources.history.list().await;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].item, "bread");
    assert!(history[0].quantity.is_none());
}

#[tokio::test]
async fn test_bake_with_missing_ingredient_changes_nothing() {
    let resources = common::create_bakery_resources().await;

    let response = AxumTestRequest::post("/bake")
        .json(&json!({"item": "cake"}))
        .send(common::router(&resources))
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"], "Missing ingredients: sugar");
    assert_eq!(body["code"], "MISSING_INGREDIENTS");
    assert!((flour_quantity(&resources).await - 5.0).abs() < f64::EPSILON);
    assert_eq!(resources.history.count().await, 0);
}

#[tokio::test]
async fn test_bake_unknown_recipe_is_404() {
    let resources = common::create_bakery_resources().await;

    let response = AxumTestRequest::post("/bake")
        .json(&json!({"item": "pie"}))
        .send(common::router(&resources))
        .await;

    assert_eq!(response.status(), 404);
    let body: Value = response.json();
    assert_eq!(body["error"], "Recipe 'pie' not found");
}

#[tokio::test]
async fn test_bake_without_item_is_404() {
    let resources = common::create_bakery_resources().await;

    let response = AxumTestRequest::post("/bake")
        .json(&json!({}))
        .send(common::router(&resources))
        .await;

    assert_eq!(response.status(), 404);
    let body: Value = response.json();
    assert_eq!(body["error"], "Recipe '' not found");
}

#[tokio::test]
async fn test_bake_unit_mismatch_aborts() {
    let resources = common::create_bakery_resources().await;
    resources
        .ingredients
        .add(Ingredient::new("sugar", "g", 500.0, 100.0))
        .await
        .unwrap();

    let response = AxumTestRequest::post("/bake")
        .json(&json!({"item": "cake"}))
        .send(common::router(&resources))
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(
        body["error"],
        "Unit mismatch for sugar: recipe needs 1.0 kg, but inventory has 500.0 g"
    );
    assert_eq!(body["code"], "UNIT_MISMATCH");
    assert!((flour_quantity(&resources).await - 5.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_bake_until_insufficient() {
    let resources = common::create_bakery_resources().await;
    let app = common::router(&resources);

    for _ in 0..2 {
        let response = AxumTestRequest::post("/bake")
            .json(&json!({"item": "bread"}))
            .send(app.clone())
            .await;
        assert_eq!(response.status(), 200);
    }

    let response = AxumTestRequest::post("/bake")
        .json(&json!({"item": "bread"}))
        .send(app)
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(
        body["error"],
        "Insufficient ingredients: flour (available: 1.0 kg, needed: 2.0 kg)"
    );
    assert_eq!(body["code"], "INSUFFICIENT_INGREDIENTS");
    assert!((flour_quantity(&resources).await - 1.0).abs() < f64::EPSILON);
    assert_eq!(resources.history.count().await, 2);
}

#[tokio::test]
async fn test_recipe_names_are_case_sensitive() {
    let resources = common::create_bakery_resources().await;

    let response = AxumTestRequest::post("/bake")
        .json(&json!({"item": "Bread"}))
        .send(common::router(&resources))
        .await;

    assert_eq!(response.status(), 404);
}

// ABOUTME: HTTP integration tests for the ingredient inventory routes
// ABOUTME: Covers CRUD, case-insensitive names, low-stock filtering, and manual subtraction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use helpers::axum_test::AxumTestRequest;
use serde_json::{json, Value};

// ============================================================================
// POST /ingredients
// ============================================================================

#[tokio::test]
async fn test_add_ingredient_success() {
    let resources = common::create_test_resources().await;

    let response = AxumTestRequest::post("/ingredients")
        .json(&json!({"name": "sugar", "unit": "kg", "quantity": 3, "low_stock_threshold": 1}))
        .send(common::router(&resources))
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["message"], "Ingredient added!");
    assert_eq!(body["ingredient"]["name"], "sugar");
    assert_eq!(body["ingredient"]["quantity"], 3.0);
    assert_eq!(resources.ingredients.list().await.len(), 1);
}

#[tokio::test]
async fn test_add_ingredient_coerces_numeric_strings() {
    let resources = common::create_test_resources().await;

    let response = AxumTestRequest::post("/ingredients")
        .json(&json!({"name": "milk", "unit": "l", "quantity": "2.5", "low_stock_threshold": "1"}))
        .send(common::router(&resources))
        .await;

    assert_eq!(response.status(), 200);
    let stored = resources.ingredients.get("milk").await.unwrap();
    assert!((stored.quantity - 2.5).abs() < f64::EPSILON);
    assert!((stored.low_stock_threshold - 1.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_add_duplicate_is_case_insensitive() {
    let resources = common::create_bakery_resources().await;

    let response = AxumTestRequest::post("/ingredients")
        .json(&json!({"name": "Flour", "unit": "kg", "quantity": 1, "low_stock_threshold": 1}))
        .send(common::router(&resources))
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"], "Flour already exists!");
    assert_eq!(body["code"], "RESOURCE_ALREADY_EXISTS");
    assert_eq!(resources.ingredients.list().await.len(), 1);
}

#[tokio::test]
async fn test_add_with_missing_fields_names_them() {
    let resources = common::create_test_resources().await;

    let response = AxumTestRequest::post("/ingredients")
        .json(&json!({"name": "salt", "unit": "kg"}))
        .send(common::router(&resources))
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(
        body["error"],
        "Missing required fields: quantity, low_stock_threshold"
    );
    assert_eq!(body["code"], "MISSING_REQUIRED_FIELD");
}

#[tokio::test]
async fn test_add_with_malformed_json_is_rejected() {
    let resources = common::create_test_resources().await;

    let response = AxumTestRequest::post("/ingredients")
        .raw_json("{\"name\": ")
        .send(common::router(&resources))
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["code"], "INVALID_FORMAT");
}

// ============================================================================
// GET /ingredients, GET /ingredients/:name
// ============================================================================

#[tokio::test]
async fn test_list_ingredients() {
    let resources = common::create_bakery_resources().await;

    let response = AxumTestRequest::get("/ingredients")
        .send(common::router(&resources))
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(
        body,
        json!([{"name": "flour", "unit": "kg", "quantity": 5.0, "low_stock_threshold": 1.0}])
    );
}

#[tokio::test]
async fn test_get_ingredient_ignores_case() {
    let resources = common::create_bakery_resources().await;

    let response = AxumTestRequest::get("/ingredients/FLOUR")
        .send(common::router(&resources))
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["name"], "flour");
}

#[tokio::test]
async fn test_get_unknown_ingredient_is_404() {
    let resources = common::create_test_resources().await;

    let response = AxumTestRequest::get("/ingredients/saffron")
        .send(common::router(&resources))
        .await;

    assert_eq!(response.status(), 404);
    let body: Value = response.json();
    assert_eq!(body["error"], "saffron not found");
    assert_eq!(body["code"], "RESOURCE_NOT_FOUND");
}

// ============================================================================
// PUT /ingredients/:name
// ============================================================================

#[tokio::test]
async fn test_update_applies_only_given_fields() {
    let resources = common::create_bakery_resources().await;

    let response = AxumTestRequest::put("/ingredients/Flour")
        .json(&json!({"quantity": 12}))
        .send(common::router(&resources))
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["message"], "Flour updated!");
    assert_eq!(body["ingredient"]["quantity"], 12.0);
    assert_eq!(body["ingredient"]["unit"], "kg");
    assert_eq!(body["ingredient"]["low_stock_threshold"], 1.0);
}

#[tokio::test]
async fn test_update_unknown_is_404() {
    let resources = common::create_test_resources().await;

    let response = AxumTestRequest::put("/ingredients/saffron")
        .json(&json!({"quantity": 1}))
        .send(common::router(&resources))
        .await;

    assert_eq!(response.status(), 404);
}

// ============================================================================
// DELETE /ingredients/:name
// ============================================================================

#[tokio::test]
async fn test_delete_ingredient() {
    let resources = common::create_bakery_resources().await;

    let response = AxumTestRequest::delete("/ingredients/flour")
        .send(common::router(&resources))
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["message"], "flour deleted");
    assert!(resources.ingredients.list().await.is_empty());

    let again = AxumTestRequest::delete("/ingredients/flour")
        .send(common::router(&resources))
        .await;
    assert_eq!(again.status(), 404);
}

// ============================================================================
// GET /ingredients/low-stock
// ============================================================================

#[tokio::test]
async fn test_low_stock_is_strictly_below_threshold() {
    let resources = common::create_test_resources().await;
    let app = common::router(&resources);

    for (name, quantity, threshold) in [("yeast", 0.1, 0.2), ("salt", 0.5, 0.5), ("eggs", 30.0, 12.0)] {
        let response = AxumTestRequest::post("/ingredients")
            .json(&json!({
                "name": name,
                "unit": "kg",
                "quantity": quantity,
                "low_stock_threshold": threshold
            }))
            .send(app.clone())
            .await;
        assert_eq!(response.status(), 200);
    }

    let response = AxumTestRequest::get("/ingredients/low-stock").send(app).await;

    assert_eq!(response.status(), 200);
    let body: Vec<Value> = response.json();
    assert_eq!(body.len(), 1);
    assert_eq!(body[0]["name"], "yeast");
}

// ============================================================================
// POST /ingredients/:name/subtract
// ============================================================================

#[tokio::test]
async fn test_subtract_decrements_stock() {
    let resources = common::create_bakery_resources().await;

    let response = AxumTestRequest::post("/ingredients/flour/subtract")
        .json(&json!({"amount": 2}))
        .send(common::router(&resources))
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["message"], "Subtracted 2 from flour");
    assert_eq!(body["ingredient"]["quantity"], 3.0);
}

#[tokio::test]
async fn test_subtract_whole_stock_reaches_zero() {
    let resources = common::create_bakery_resources().await;

    let response = AxumTestRequest::post("/ingredients/flour/subtract")
        .json(&json!({"amount": 5}))
        .send(common::router(&resources))
        .await;

    assert_eq!(response.status(), 200);
    let stored = resources.ingredients.get("flour").await.unwrap();
    assert!(stored.quantity.abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_subtract_negative_amount_is_rejected() {
    let resources = common::create_bakery_resources().await;

    let response = AxumTestRequest::post("/ingredients/flour/subtract")
        .json(&json!({"amount": -1}))
        .send(common::router(&resources))
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"], "Amount must be positive");
}

#[tokio::test]
async fn test_subtract_more_than_stock_is_rejected() {
    let resources = common::create_bakery_resources().await;

    let response = AxumTestRequest::post("/ingredients/flour/subtract")
        .json(&json!({"amount": 6}))
        .send(common::router(&resources))
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"], "Not enough quantity to subtract");
    assert_eq!(body["code"], "INSUFFICIENT_STOCK");
    let stored = resources.ingredients.get("flour").await.unwrap();
    assert!((stored.quantity - 5.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_subtract_unknown_is_404() {
    let resources = common::create_test_resources().await;

    let response = AxumTestRequest::post("/ingredients/saffron/subtract")
        .json(&json!({"amount": 1}))
        .send(common::router(&resources))
        .await;

    assert_eq!(response.status(), 404);
}

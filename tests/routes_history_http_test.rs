// ABOUTME: HTTP integration tests for the bake history routes
// ABOUTME: Covers manual entries, required fields, and entries recorded by bakes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use bakehouse_server::constants::TIMESTAMP_FORMAT;
use chrono::NaiveDateTime;
use helpers::axum_test::AxumTestRequest;
use serde_json::{json, Value};

#[tokio::test]
async fn test_history_starts_empty() {
    let resources = common::create_test_resources().await;

    let response = AxumTestRequest::get("/history")
        .send(common::router(&resources))
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_record_manual_entry() {
    let resources = common::create_test_resources().await;

    let response = AxumTestRequest::post("/history")
        .json(&json!({
            "item": "croissant",
            "quantity": 12,
            "ingredients_used": {"flour": 1.5, "butter": 0.75}
        }))
        .send(common::router(&resources))
        .await;

    assert_eq!(response.status(), 201);
    let body: Value = response.json();
    assert_eq!(body["message"], "Baking history recorded");
    assert_eq!(body["event"]["item"], "croissant");
    assert_eq!(body["event"]["quantity"], 12);
    assert_eq!(body["event"]["ingredients_used"]["butter"], 0.75);

    let timestamp = body["event"]["timestamp"].as_str().unwrap();
    assert!(NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).is_ok());

    assert_eq!(resources.history.count().await, 1);
}

#[tokio::test]
async fn test_record_requires_every_field() {
    let resources = common::create_test_resources().await;
    let app = common::router(&resources);

    for payload in [
        json!({"quantity": 1, "ingredients_used": []}),
        json!({"item": "tart", "ingredients_used": []}),
        json!({"item": "tart", "quantity": 1}),
    ] {
        let response = AxumTestRequest::post("/history")
            .json(&payload)
            .send(app.clone())
            .await;

        assert_eq!(response.status(), 400, "payload {payload}");
        let body: Value = response.json();
        assert_eq!(body["error"], "Missing required fields");
    }

    assert_eq!(resources.history.count().await, 0);
}

#[tokio::test]
async fn test_history_lists_in_insertion_order() {
    let resources = common::create_bakery_resources().await;
    let app = common::router(&resources);

    let response = AxumTestRequest::post("/history")
        .json(&json!({"item": "muffin", "quantity": 6, "ingredients_used": ["flour"]}))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 201);

    let response = AxumTestRequest::post("/bake")
        .json(&json!({"item": "bread"}))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 200);

    let response = AxumTestRequest::get("/history").send(app).await;
    let body: Vec<Value> = response.json();
    assert_eq!(body.len(), 2);
    assert_eq!(body[0]["item"], "muffin");
    assert_eq!(body[1]["item"], "bread");
    assert!(body[1].get("quantity").is_none());
    assert!(body[1].get("ingredients_used").is_none());
}

#[tokio::test]
async fn test_record_stores_values_as_given() {
    let resources = common::create_test_resources().await;
    let app = common::router(&resources);

    let response = AxumTestRequest::post("/history")
        .json(&json!({"item": "cookies", "quantity": "two dozen", "ingredients_used": ["flour"]}))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 201);
    let body: Value = response.json();
    assert_eq!(body["event"]["quantity"], "two dozen");

    let response = AxumTestRequest::post("/history")
        .json(&json!({"item": "cookies", "quantity": 3, "ingredients_used": null}))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 201);
    let body: Value = response.json();
    assert!(body["event"]["ingredients_used"].is_null());
    assert!(body["event"]
        .as_object()
        .unwrap()
        .contains_key("ingredients_used"));

    let response = AxumTestRequest::get("/history").send(app).await;
    let body: Vec<Value> = response.json();
    assert_eq!(body.len(), 2);
    assert_eq!(body[0]["quantity"], "two dozen");
}

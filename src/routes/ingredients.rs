// ABOUTME: Ingredient inventory routes for CRUD, low-stock reporting, and manual stock use
// ABOUTME: Names in paths are matched case-insensitively against the inventory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Ingredient routes
//!
//! `/ingredients/low-stock` is a static segment and always wins over the
//! `/ingredients/:name` capture, so an ingredient literally named
//! `low-stock` cannot be fetched by name.

use crate::constants::messages;
use crate::errors::AppError;
use crate::models::{Ingredient, IngredientUpdate, NewIngredient, StockAdjustment};
use crate::resources::ServerResources;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

/// Message plus the affected ingredient
#[derive(Debug, Serialize)]
pub struct IngredientResponse {
    /// Human-readable outcome
    pub message: String,
    /// Ingredient after the change
    pub ingredient: Ingredient,
}

/// Message-only confirmation
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable outcome
    pub message: String,
}

/// Ingredient routes implementation
pub struct IngredientRoutes;

impl IngredientRoutes {
    /// Create every `/ingredients` route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/ingredients",
                get(Self::handle_list).post(Self::handle_add),
            )
            .route("/ingredients/low-stock", get(Self::handle_low_stock))
            .route(
                "/ingredients/:name",
                get(Self::handle_get)
                    .put(Self::handle_update)
                    .delete(Self::handle_delete),
            )
            .route("/ingredients/:name/subtract", post(Self::handle_subtract))
            .with_state(resources)
    }

    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let items = resources.ingredients.list().await;
        Ok((StatusCode::OK, Json(items)).into_response())
    }

    async fn handle_add(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<NewIngredient>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(request) = body?;
        let ingredient = resources
            .ingredients
            .add(request.into_ingredient()?)
            .await?;

        let response = IngredientResponse {
            message: messages::INGREDIENT_ADDED.to_owned(),
            ingredient,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(name): Path<String>,
    ) -> Result<Response, AppError> {
        let ingredient = resources.ingredients.get(&name).await?;
        Ok((StatusCode::OK, Json(ingredient)).into_response())
    }

    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        Path(name): Path<String>,
        body: Result<Json<IngredientUpdate>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(update) = body?;
        let ingredient = resources.ingredients.update(&name, &update).await?;

        let response = IngredientResponse {
            message: format!("{name} updated!"),
            ingredient,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(name): Path<String>,
    ) -> Result<Response, AppError> {
        resources.ingredients.delete(&name).await?;

        let response = MessageResponse {
            message: format!("{name} deleted"),
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    async fn handle_low_stock(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let items = resources.ingredients.low_stock().await;
        Ok((StatusCode::OK, Json(items)).into_response())
    }

    async fn handle_subtract(
        State(resources): State<Arc<ServerResources>>,
        Path(name): Path<String>,
        body: Result<Json<StockAdjustment>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(adjustment) = body?;
        let amount = adjustment.amount();
        let ingredient = resources.ingredients.subtract(&name, amount).await?;

        let response = IngredientResponse {
            message: format!("Subtracted {amount} from {name}"),
            ingredient,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}

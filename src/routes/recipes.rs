// ABOUTME: Recipe catalog routes for listing recipes and registering new ones
// ABOUTME: Recipes are immutable once added; there is no update or delete endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use crate::models::NewRecipe;
use crate::resources::ServerResources;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

/// Confirmation for a registered recipe
#[derive(Debug, Serialize)]
pub struct RecipeAddedResponse {
    /// `Recipe '<name>' added successfully`
    pub message: String,
}

/// Recipe routes implementation
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create `GET /recipes` and `POST /add-recipe`
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/recipes", get(Self::handle_list))
            .route("/add-recipe", post(Self::handle_add))
            .with_state(resources)
    }

    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let book = resources.recipes.list().await;
        Ok((StatusCode::OK, Json(book)).into_response())
    }

    async fn handle_add(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<NewRecipe>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(request) = body?;
        let recipe = request.into_recipe()?;
        let message = format!("Recipe '{}' added successfully", recipe.name);

        resources.recipes.add(recipe).await?;

        Ok((StatusCode::OK, Json(RecipeAddedResponse { message })).into_response())
    }
}

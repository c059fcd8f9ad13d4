// ABOUTME: Bake route that fulfils a recipe against the current inventory
// ABOUTME: Returns the full updated inventory on success, or why the bake cannot proceed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use crate::middleware::RequestId;
use crate::models::{BakeRequest, Ingredient};
use crate::resources::ServerResources;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Extension, Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// Successful bake
#[derive(Debug, Serialize)]
pub struct BakeResponse {
    /// `<recipe> baked successfully!`
    pub message: String,
    /// Whole inventory after the decrement
    pub updated_ingredients: Vec<Ingredient>,
}

/// Bake routes implementation
pub struct BakeRoutes;

impl BakeRoutes {
    /// Create `POST /bake`
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/bake", post(Self::handle_bake))
            .with_state(resources)
    }

    async fn handle_bake(
        State(resources): State<Arc<ServerResources>>,
        Extension(request_id): Extension<RequestId>,
        body: Result<Json<BakeRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(request) = body?;
        let outcome = resources.bake_service.bake(request.item()).await?;

        info!(
            request_id = %request_id,
            bake.recipe = %outcome.recipe,
            bake.recorded_at = %outcome.event.timestamp,
            "Bake completed"
        );

        let response = BakeResponse {
            message: format!("{} baked successfully!", outcome.recipe),
            updated_ingredients: outcome.updated_ingredients,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}

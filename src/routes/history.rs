// ABOUTME: Bake history routes for reading the log and recording manual entries
// ABOUTME: Manual entries need item, quantity and ingredients_used; the timestamp is assigned here
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::messages;
use crate::errors::AppError;
use crate::models::{HistoryEvent, NewHistoryEvent};
use crate::resources::ServerResources;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

/// Confirmation for a recorded entry
#[derive(Debug, Serialize)]
pub struct HistoryRecordedResponse {
    /// Always `Baking history recorded`
    pub message: &'static str,
    /// Entry as stored
    pub event: HistoryEvent,
}

/// History routes implementation
pub struct HistoryRoutes;

impl HistoryRoutes {
    /// Create `GET /history` and `POST /history`
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/history", get(Self::handle_list).post(Self::handle_record))
            .with_state(resources)
    }

    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let events = resources.history.list().await;
        Ok((StatusCode::OK, Json(events)).into_response())
    }

    async fn handle_record(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<NewHistoryEvent>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(request) = body?;
        let event = resources.history.append(request.into_event()?).await?;

        let response = HistoryRecordedResponse {
            message: messages::HISTORY_RECORDED,
            event,
        };
        Ok((StatusCode::CREATED, Json(response)).into_response())
    }
}

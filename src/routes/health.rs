// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Serves the plain-text banner at / plus JSON liveness and readiness probes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health check routes for service monitoring

use axum::{routing::get, Json, Router};

/// Banner returned by `GET /`
pub const BANNER: &str = "Backend is running!";

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the banner, health, and readiness routes
    pub fn routes() -> Router {
        Router::new()
            .route("/", get(Self::handle_banner))
            .route("/health", get(Self::handle_health))
            .route("/ready", get(Self::handle_ready))
    }

    async fn handle_banner() -> &'static str {
        BANNER
    }

    async fn handle_health() -> Json<serde_json::Value> {
        Self::status("healthy")
    }

    async fn handle_ready() -> Json<serde_json::Value> {
        Self::status("ready")
    }

    fn status(status: &str) -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "status": status,
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }
}

// ABOUTME: HTTP server assembly: merges domain routes and applies the middleware stack
// ABOUTME: Binds the configured address and serves until Ctrl+C or SIGTERM
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Bakehouse Server
//!
//! Layers, outermost first: CORS, request ID, HTTP tracing, request timeout,
//! body size limit. CORS sits outside everything so preflight requests and
//! error responses both carry the CORS headers.

use crate::constants::defaults;
use crate::middleware::{request_id_middleware, setup_cors};
use crate::resources::ServerResources;
use crate::routes::{BakeRoutes, HealthRoutes, HistoryRoutes, IngredientRoutes, RecipeRoutes};
use anyhow::{Context, Result};
use axum::{extract::DefaultBodyLimit, http::StatusCode, middleware, Router};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};

/// The Bakehouse HTTP server
pub struct BakehouseServer {
    resources: Arc<ServerResources>,
}

impl BakehouseServer {
    /// Create a server over shared resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Complete application router with every route and layer applied
    #[must_use]
    pub fn router(&self) -> Router {
        let config = &self.resources.config;

        Router::new()
            .merge(HealthRoutes::routes())
            .merge(RecipeRoutes::routes(self.resources.clone()))
            .merge(BakeRoutes::routes(self.resources.clone()))
            .merge(IngredientRoutes::routes(self.resources.clone()))
            .merge(HistoryRoutes::routes(self.resources.clone()))
            .layer(DefaultBodyLimit::max(defaults::MAX_REQUEST_BODY_BYTES))
            .layer(timeout_layer(Duration::from_secs(config.request_timeout_secs)))
            .layer(TraceLayer::new_for_http())
            .layer(middleware::from_fn(request_id_middleware))
            .layer(setup_cors(config))
    }

    /// Bind and serve until a shutdown signal arrives
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be bound or the server fails.
    pub async fn run(self) -> Result<()> {
        let address = self.resources.config.bind_address();
        let listener = TcpListener::bind(&address)
            .await
            .with_context(|| format!("Failed to bind {address}"))?;

        info!(
            address = %address,
            storage = %self.resources.config.storage,
            "Bakehouse server listening"
        );

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server terminated unexpectedly")?;

        info!("Bakehouse server stopped");
        Ok(())
    }
}

/// Abort handlers that run longer than `timeout` with 408 Request Timeout
fn timeout_layer(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                warn!(error = %e, "Failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}

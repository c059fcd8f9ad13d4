// ABOUTME: Main library entry point for the Bakehouse inventory server
// ABOUTME: Ingredient stock, recipe catalog, bake workflow, and history over a REST API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Bakehouse Server
//!
//! A small bookkeeping backend for a bakery: it tracks ingredient stock,
//! checks recipes against that stock, and records every bake.
//!
//! ## Architecture
//!
//! - **Stores**: the ingredient inventory, recipe catalog, and history log,
//!   each owning its collection and saving a full snapshot on every change
//! - **Services**: the bake evaluator and the bake workflow that commits it
//! - **Storage**: JSON files, `SQLite`, or memory behind one repository trait
//! - **Routes**: thin axum handlers over the stores and services
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use bakehouse_server::config::ServerConfig;
//! use bakehouse_server::resources::ServerResources;
//! use bakehouse_server::server::BakehouseServer;
//! use bakehouse_server::storage::Storage;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Arc::new(ServerConfig::from_env()?);
//!     let storage = Storage::connect(&config.storage).await?;
//!     let resources = Arc::new(ServerResources::new(storage, config).await?);
//!     BakehouseServer::new(resources).run().await
//! }
//! ```

/// Environment-driven server configuration
pub mod config;

/// Constants and environment lookups
pub mod constants;

/// Error types re-exported from `bakehouse-core`
pub mod errors;

/// Structured logging setup and domain log helpers
pub mod logging;

/// HTTP middleware: CORS and request IDs
pub mod middleware;

/// Domain models re-exported from `bakehouse-core`
pub mod models;

/// Shared state handed to every route
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// Router assembly and serving
pub mod server;

/// Bake evaluation and workflow
pub mod services;

/// Snapshot repositories and backend selection
pub mod storage;

/// In-memory stores backed by snapshot repositories
pub mod stores;

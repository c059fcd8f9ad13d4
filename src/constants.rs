// ABOUTME: System-wide constants and environment-driven defaults for the Bakehouse server
// ABOUTME: Contains ports, storage file names, HTTP limits, and service identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Hardcoded defaults plus the environment lookups that override them.

pub use bakehouse_core::constants::{collections, messages, TIMESTAMP_FORMAT};

/// Service identifiers used in structured logs
pub mod service_names {
    /// Server binary
    pub const BAKEHOUSE_SERVER: &str = "bakehouse-server";
    /// Demo data loader
    pub const SEED_DEMO_DATA: &str = "seed-demo-data";
}

/// Default configuration values
pub mod defaults {
    /// HTTP listen port
    pub const HTTP_PORT: u16 = 5000;
    /// Bind address
    pub const HOST: &str = "127.0.0.1";
    /// Storage location: a directory of JSON snapshots
    pub const STORAGE_URL: &str = "./data";
    /// CORS origins
    pub const CORS_ALLOWED_ORIGINS: &str = "*";
    /// Per-request timeout
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
    /// Largest accepted request body
    pub const MAX_REQUEST_BODY_BYTES: usize = 1024 * 1024;
}

/// File names of the JSON snapshot backend, one per collection
pub mod files {
    /// Ingredient inventory
    pub const INGREDIENTS: &str = "data.json";
    /// Recipe catalog
    pub const RECIPES: &str = "recipes.json";
    /// Bake history
    pub const HISTORY: &str = "history.json";
}

/// HTTP header names
pub mod headers {
    /// Request correlation header
    pub const REQUEST_ID: &str = "x-request-id";
}

/// Environment lookups with fallbacks to [`defaults`]
pub mod env_config {
    use super::defaults;
    use std::env;

    /// Listen port from `HTTP_PORT`
    #[must_use]
    pub fn http_port() -> Option<String> {
        env::var("HTTP_PORT").ok()
    }

    /// Bind address from `HOST`
    #[must_use]
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| defaults::HOST.to_owned())
    }

    /// Storage location from `STORAGE_URL`
    #[must_use]
    pub fn storage_url() -> String {
        env::var("STORAGE_URL").unwrap_or_else(|_| defaults::STORAGE_URL.to_owned())
    }

    /// Allowed origins from `CORS_ALLOWED_ORIGINS`
    #[must_use]
    pub fn cors_allowed_origins() -> String {
        env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| defaults::CORS_ALLOWED_ORIGINS.to_owned())
    }

    /// Deployment environment from `ENVIRONMENT`
    #[must_use]
    pub fn environment() -> String {
        env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_owned())
    }

    /// Log level from `RUST_LOG`
    #[must_use]
    pub fn log_level() -> String {
        env::var("RUST_LOG").unwrap_or_else(|_| "info".to_owned())
    }

    /// Request timeout from `REQUEST_TIMEOUT_SECS`
    #[must_use]
    pub fn request_timeout_secs() -> Option<String> {
        env::var("REQUEST_TIMEOUT_SECS").ok()
    }
}

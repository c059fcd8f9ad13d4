// ABOUTME: Server-side access point for the unified error types
// ABOUTME: Re-exports AppError, ErrorCode, and BakeError from bakehouse-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Error types shared by every layer of the server.
//!
//! The definitions live in `bakehouse-core` so the models can return them;
//! this module keeps `crate::errors::AppError` paths stable for handlers.

pub use bakehouse_core::errors::bake::Shortfall;
pub use bakehouse_core::errors::{AppError, AppResult, BakeError, ErrorCode, ErrorResponse};

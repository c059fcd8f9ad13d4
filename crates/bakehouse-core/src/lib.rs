// ABOUTME: Core types and constants for the Bakehouse inventory platform
// ABOUTME: Foundation crate with error handling, inventory models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Bakehouse Core
//!
//! Foundation crate providing shared types and constants for the Bakehouse
//! inventory server. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Timestamp formats and collection names
//! - **models**: Ingredients, recipes, history events, and quantity coercion

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants shared by the server and its tools
pub mod constants;

/// Core data models (Ingredient, Recipe, `HistoryEvent`, quantities)
pub mod models;

// ABOUTME: Server-side access point for the inventory data models
// ABOUTME: Re-exports ingredient, recipe, and history types from bakehouse-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Inventory, recipe and history models.

pub use bakehouse_core::models::*;

// ABOUTME: Bake history events, appended after each bake or logged manually
// ABOUTME: Manual entries store client values unchanged; timestamps are local YYYY-MM-DDTHH:MM:SS
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::{messages, TIMESTAMP_FORMAT};
use crate::errors::{AppError, AppResult};
use chrono::Local;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Current local time in the history timestamp format
#[must_use]
pub fn current_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// One entry in the append-only history log
///
/// Bake entries carry a string `item` only. Manual entries keep whatever JSON
/// the client sent for `item`, `quantity` and `ingredients_used`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEvent {
    /// What was baked
    pub item: Value,
    /// Number of items, present on manual entries only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Value>,
    /// Free-form record of what was consumed, present on manual entries only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients_used: Option<Value>,
    /// When the event was recorded
    pub timestamp: String,
}

impl HistoryEvent {
    /// Event recorded automatically after a successful bake
    pub fn baked(item: impl Into<String>) -> Self {
        Self {
            item: Value::String(item.into()),
            quantity: None,
            ingredients_used: None,
            timestamp: current_timestamp(),
        }
    }

    /// Item name when it is a string
    #[must_use]
    pub fn item_name(&self) -> Option<&str> {
        self.item.as_str()
    }
}

/// Keep an explicit `null` as `Some(Value::Null)`; only an absent key is `None`
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Request payload for `POST /history`
///
/// Fields are checked for presence only; their values are stored unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewHistoryEvent {
    /// What was baked
    #[serde(default, deserialize_with = "deserialize_present")]
    pub item: Option<Value>,
    /// How many were baked
    #[serde(default, deserialize_with = "deserialize_present")]
    pub quantity: Option<Value>,
    /// What was consumed
    #[serde(default, deserialize_with = "deserialize_present")]
    pub ingredients_used: Option<Value>,
}

impl NewHistoryEvent {
    /// Require all three keys and stamp the event with the current time
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` with "Missing required fields".
    pub fn into_event(self) -> AppResult<HistoryEvent> {
        match (self.item, self.quantity, self.ingredients_used) {
            (Some(item), Some(quantity), Some(ingredients_used)) => Ok(HistoryEvent {
                item,
                quantity: Some(quantity),
                ingredients_used: Some(ingredients_used),
                timestamp: current_timestamp(),
            }),
            _ => Err(AppError::missing_field(messages::MISSING_REQUIRED_FIELDS)),
        }
    }
}

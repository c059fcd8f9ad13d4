// ABOUTME: Quantity coercion from JSON numbers or numeric strings into f64
// ABOUTME: Also provides float-style display used in inventory error messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Decimal exponents printed in plain notation; others use `1e+16` form
const PLAIN_EXPONENTS: std::ops::Range<i32> = -4..16;

/// Raw wire representation: clients send either `5`, `5.5` or `"5.5"`
#[derive(Deserialize)]
#[serde(untagged)]
enum RawQuantity {
    Number(f64),
    Text(String),
}

impl RawQuantity {
    fn into_f64<E: de::Error>(self) -> Result<f64, E> {
        let value = match self {
            Self::Number(value) => value,
            Self::Text(text) => text
                .trim()
                .parse::<f64>()
                .map_err(|_| E::custom(format!("invalid quantity '{text}'")))?,
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(E::custom("quantity must be a finite number"))
        }
    }
}

/// Deserialize a required quantity, accepting numbers and numeric strings
///
/// # Errors
///
/// Returns a deserialization error if the value is neither a number nor a
/// string holding a finite number.
pub fn deserialize_quantity<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    RawQuantity::deserialize(deserializer)?.into_f64()
}

/// Deserialize an optional quantity; `null` and absent fields become `None`
///
/// Use together with `#[serde(default)]`.
///
/// # Errors
///
/// Returns a deserialization error if a present value is not numeric.
pub fn deserialize_optional_quantity<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<RawQuantity>::deserialize(deserializer)?
        .map(RawQuantity::into_f64::<D::Error>)
        .transpose()
}

/// Render a quantity the way inventory messages show it
///
/// Whole numbers keep one decimal (`2.0`, `1500.0`). Magnitudes from `1e16`
/// up or below `1e-4` use a signed two-digit exponent (`1e+16`, `1.5e-05`).
#[must_use]
pub fn format_quantity(value: f64) -> String {
    if !value.is_finite() {
        return format!("{value}");
    }

    let scientific = format!("{value:e}");
    if let Some((mantissa, exponent)) = scientific.split_once('e') {
        let exponent: i32 = exponent.parse().unwrap_or_default();
        if value != 0.0 && !PLAIN_EXPONENTS.contains(&exponent) {
            let sign = if exponent < 0 { '-' } else { '+' };
            return format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs());
        }
    }

    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// An amount paired with its unit, displayed as `"2.0 kg"`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measure {
    /// Numeric amount
    pub amount: f64,
    /// Unit label exactly as stored
    pub unit: String,
}

impl Measure {
    /// Create a new measure
    pub fn new(amount: f64, unit: impl Into<String>) -> Self {
        Self {
            amount,
            unit: unit.into(),
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", format_quantity(self.amount), self.unit)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "deserialize_quantity")]
        value: f64,
        #[serde(default, deserialize_with = "deserialize_optional_quantity")]
        extra: Option<f64>,
    }

    #[test]
    fn test_accepts_integers_floats_and_strings() {
        let probe: Probe = serde_json::from_str(r#"{"value": 5}"#).unwrap();
        assert!((probe.value - 5.0).abs() < f64::EPSILON);

        let probe: Probe = serde_json::from_str(r#"{"value": 2.5}"#).unwrap();
        assert!((probe.value - 2.5).abs() < f64::EPSILON);

        let probe: Probe = serde_json::from_str(r#"{"value": " 7.25 "}"#).unwrap();
        assert!((probe.value - 7.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rejects_non_numeric_text() {
        let result: Result<Probe, _> = serde_json::from_str(r#"{"value": "plenty"}"#);
        assert!(result.is_err());

        let result: Result<Probe, _> = serde_json::from_str(r#"{"value": "NaN"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_optional_quantity() {
        let probe: Probe = serde_json::from_str(r#"{"value": 1}"#).unwrap();
        assert_eq!(probe.extra, None);

        let probe: Probe = serde_json::from_str(r#"{"value": 1, "extra": null}"#).unwrap();
        assert_eq!(probe.extra, None);

        let probe: Probe = serde_json::from_str(r#"{"value": 1, "extra": "3"}"#).unwrap();
        assert_eq!(probe.extra, Some(3.0));
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(2.0), "2.0");
        assert_eq!(format_quantity(0.5), "0.5");
        assert_eq!(format_quantity(-3.0), "-3.0");
        assert_eq!(format_quantity(1500.0), "1500.0");
        assert_eq!(Measure::new(3.0, "kg").to_string(), "3.0 kg");
    }

    #[test]
    fn test_format_quantity_extremes() {
        assert_eq!(format_quantity(1e15), "1000000000000000.0");
        assert_eq!(format_quantity(1e16), "1e+16");
        assert_eq!(format_quantity(2.5e20), "2.5e+20");
        assert_eq!(format_quantity(0.0001), "0.0001");
        assert_eq!(format_quantity(0.000_015), "1.5e-05");
        assert_eq!(format_quantity(-1e-7), "-1e-07");
        assert_eq!(format_quantity(0.0), "0.0");
    }
}

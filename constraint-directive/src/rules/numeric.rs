//! Numeric bound descriptors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Inclusive and exclusive bounds on a numeric value.
///
/// As with [`LengthRule`](super::LengthRule), each declared bound produces its
/// own rule, so normally exactly one field is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NumericRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_minimum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_maximum: Option<f64>,
}

impl NumericRule {
    /// Value must be `>= bound`.
    pub fn minimum(bound: f64) -> Self {
        Self {
            minimum: Some(bound),
            ..Self::default()
        }
    }

    /// Value must be `<= bound`.
    pub fn maximum(bound: f64) -> Self {
        Self {
            maximum: Some(bound),
            ..Self::default()
        }
    }

    /// Value must be `> bound`.
    pub fn exclusive_minimum(bound: f64) -> Self {
        Self {
            exclusive_minimum: Some(bound),
            ..Self::default()
        }
    }

    /// Value must be `< bound`.
    pub fn exclusive_maximum(bound: f64) -> Self {
        Self {
            exclusive_maximum: Some(bound),
            ..Self::default()
        }
    }
}

impl fmt::Display for NumericRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(bound) = self.minimum {
            parts.push(format!(">= {bound}"));
        }
        if let Some(bound) = self.exclusive_minimum {
            parts.push(format!("> {bound}"));
        }
        if let Some(bound) = self.maximum {
            parts.push(format!("<= {bound}"));
        }
        if let Some(bound) = self.exclusive_maximum {
            parts.push(format!("< {bound}"));
        }
        if parts.is_empty() {
            f.write_str("any number")
        } else {
            f.write_str(&parts.join(" and "))
        }
    }
}

//! Pattern rule descriptor.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Requires a value to match a regular expression.
///
/// The expression is carried as source text. Matching happens in the
/// execution engine; build-time vetting lives in [`crate::security`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PatternRule {
    pub expression: String,
}

impl PatternRule {
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
        }
    }
}

impl fmt::Display for PatternRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "matching /{}/", self.expression)
    }
}

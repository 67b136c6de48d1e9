//! Length rule descriptor.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Bounds on the length of a string or list value.
///
/// Each `minLength`/`maxLength` option yields its own rule with a single bound
/// set; the execution engine checks every attached rule independently.
///
/// # Examples
///
/// ```rust
/// use constraint_directive::rules::LengthRule;
///
/// let rule = LengthRule::minimum(3);
/// assert_eq!(rule.minimum, Some(3));
/// assert_eq!(rule.maximum, None);
/// assert_eq!(rule.to_string(), "at least 3 characters");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LengthRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<usize>,
}

impl LengthRule {
    /// Creates a rule requiring at least `minimum` characters.
    pub fn minimum(minimum: usize) -> Self {
        Self {
            minimum: Some(minimum),
            maximum: None,
        }
    }

    /// Creates a rule allowing at most `maximum` characters.
    pub fn maximum(maximum: usize) -> Self {
        Self {
            minimum: None,
            maximum: Some(maximum),
        }
    }

    /// Returns a short machine-friendly name for this rule.
    pub fn name(&self) -> &'static str {
        match (self.minimum, self.maximum) {
            (Some(_), None) => "min_length",
            (None, Some(_)) => "max_length",
            _ => "length",
        }
    }
}

impl fmt::Display for LengthRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.minimum, self.maximum) {
            (Some(min), None) => write!(f, "at least {min} characters"),
            (None, Some(max)) => write!(f, "at most {max} characters"),
            (Some(min), Some(max)) => write!(f, "between {min} and {max} characters"),
            (None, None) => write!(f, "any length"),
        }
    }
}

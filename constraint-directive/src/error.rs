//! Error types for constraint directive compilation.
//!
//! Every error raised here is fatal to schema construction for the annotated
//! element. A misconfigured constraint is a programming error in the schema
//! definition, so nothing in this crate retries or recovers locally.

use crate::core::DirectiveLocation;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ConstraintError>;

/// Errors raised while turning declared constraint options into rules.
#[derive(Debug, Error)]
pub enum ConstraintError {
    /// The option key has no rule-building behavior under the active policy.
    #[error("Constraint option '{key}' is not supported")]
    UnsupportedOption { key: String },

    /// The option value does not have the shape the key requires.
    #[error("Invalid value for constraint option '{key}': expected {expected}, found {found}")]
    InvalidOptionValue {
        key: String,
        expected: &'static str,
        found: String,
    },

    /// A `pattern` source was rejected by build-time vetting.
    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// The directive was applied to a schema element it cannot annotate.
    #[error("@constraint cannot be applied at {location}")]
    InvalidLocation { location: DirectiveLocation },

    /// Compiler configuration is inconsistent or could not be loaded.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Directive arguments or configuration were not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConstraintError {
    /// Creates an unsupported option error.
    pub fn unsupported(key: impl Into<String>) -> Self {
        Self::UnsupportedOption { key: key.into() }
    }

    /// Creates an invalid option value error.
    pub fn invalid_value(
        key: impl Into<String>,
        expected: &'static str,
        found: impl Into<String>,
    ) -> Self {
        Self::InvalidOptionValue {
            key: key.into(),
            expected,
            found: found.into(),
        }
    }

    /// Creates an invalid pattern error.
    pub fn invalid_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }

    /// Returns the option key this error refers to, if any.
    pub fn option_key(&self) -> Option<&str> {
        match self {
            Self::UnsupportedOption { key } | Self::InvalidOptionValue { key, .. } => Some(key),
            Self::InvalidPattern { .. } => Some("pattern"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ConstraintError::unsupported("maxItems");
        assert_eq!(err.to_string(), "Constraint option 'maxItems' is not supported");

        let err = ConstraintError::invalid_value("minLength", "a non-negative integer", "-1");
        assert_eq!(
            err.to_string(),
            "Invalid value for constraint option 'minLength': expected a non-negative integer, found -1"
        );

        let err = ConstraintError::InvalidLocation {
            location: DirectiveLocation::Object,
        };
        assert_eq!(err.to_string(), "@constraint cannot be applied at OBJECT");
    }

    #[test]
    fn test_option_key() {
        assert_eq!(ConstraintError::unsupported("foo").option_key(), Some("foo"));
        assert_eq!(
            ConstraintError::invalid_pattern("(", "unclosed group").option_key(),
            Some("pattern")
        );
        assert_eq!(
            ConstraintError::Configuration("bad".to_string()).option_key(),
            None
        );
    }
}

//! Validation rule descriptors produced by the compiler.
//!
//! Rules are pure data. They describe *what* the execution engine must check
//! for a supplied value; they carry no checking logic of their own.
//!
//! ## Rule Categories
//!
//! - [`LengthRule`] - `minLength` / `maxLength`
//! - [`PatternRule`] - `pattern`
//! - [`SubstringRule`] - `startsWith`, `endsWith`, `contains`, `notContains`
//! - [`FormatRule`] - `format`
//! - [`NumericRule`] - `min`, `max`, `exclusiveMin`, `exclusiveMax`
//!
//! Only length and pattern rules are produced by the reference rule set. The
//! others are reserved descriptors that the compiler emits only when
//! configured with [`RuleSet::Extended`](crate::config::RuleSet::Extended).

mod format;
mod length;
mod numeric;
mod pattern;
mod substring;

pub use format::{FormatRule, FormatTag};
pub use length::LengthRule;
pub use numeric::NumericRule;
pub use pattern::PatternRule;
pub use substring::{SubstringKind, SubstringRule};

use serde::{Deserialize, Serialize};
use std::fmt;

/// A rule attached to a schema element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum ValidationRule {
    Length(LengthRule),
    Pattern(PatternRule),
    Substring(SubstringRule),
    Format(FormatRule),
    Numeric(NumericRule),
}

impl ValidationRule {
    /// Returns a short machine-friendly name for this rule.
    pub fn name(&self) -> &'static str {
        match self {
            ValidationRule::Length(rule) => rule.name(),
            ValidationRule::Pattern(_) => "pattern",
            ValidationRule::Substring(rule) => match rule.kind {
                SubstringKind::StartsWith => "starts_with",
                SubstringKind::EndsWith => "ends_with",
                SubstringKind::Contains => "contains",
                SubstringKind::NotContains => "not_contains",
            },
            ValidationRule::Format(_) => "format",
            ValidationRule::Numeric(_) => "numeric",
        }
    }
}

impl fmt::Display for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationRule::Length(rule) => write!(f, "length {rule}"),
            ValidationRule::Pattern(rule) => write!(f, "value {rule}"),
            ValidationRule::Substring(rule) => write!(f, "value {rule}"),
            ValidationRule::Format(rule) => write!(f, "value {rule}"),
            ValidationRule::Numeric(rule) => write!(f, "value {rule}"),
        }
    }
}

impl From<LengthRule> for ValidationRule {
    fn from(rule: LengthRule) -> Self {
        ValidationRule::Length(rule)
    }
}

impl From<PatternRule> for ValidationRule {
    fn from(rule: PatternRule) -> Self {
        ValidationRule::Pattern(rule)
    }
}

impl From<SubstringRule> for ValidationRule {
    fn from(rule: SubstringRule) -> Self {
        ValidationRule::Substring(rule)
    }
}

impl From<FormatRule> for ValidationRule {
    fn from(rule: FormatRule) -> Self {
        ValidationRule::Format(rule)
    }
}

impl From<NumericRule> for ValidationRule {
    fn from(rule: NumericRule) -> Self {
        ValidationRule::Numeric(rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_names() {
        assert_eq!(ValidationRule::from(LengthRule::minimum(1)).name(), "min_length");
        assert_eq!(ValidationRule::from(PatternRule::new("a")).name(), "pattern");
        assert_eq!(
            ValidationRule::from(SubstringRule::new(SubstringKind::EndsWith, "z")).name(),
            "ends_with"
        );
    }

    #[test]
    fn test_rule_display() {
        assert_eq!(
            ValidationRule::from(LengthRule::minimum(3)).to_string(),
            "length at least 3 characters"
        );
        assert_eq!(
            ValidationRule::from(PatternRule::new("^x$")).to_string(),
            "value matching /^x$/"
        );
    }

    #[test]
    fn test_rule_serialization_is_tagged() {
        let json = serde_json::to_value(ValidationRule::from(LengthRule::minimum(3))).unwrap();
        assert_eq!(json, serde_json::json!({"rule": "length", "minimum": 3}));

        let back: ValidationRule = serde_json::from_value(json).unwrap();
        assert_eq!(back, ValidationRule::Length(LengthRule::minimum(3)));
    }
}

//! Option-key to rule-builder dispatch.

use crate::config::{CompilerConfig, RuleSet};
use crate::core::{OptionKey, OptionValue};
use crate::error::{ConstraintError, Result};
use crate::rules::{
    FormatRule, FormatTag, LengthRule, NumericRule, PatternRule, SubstringKind, SubstringRule,
    ValidationRule,
};
use crate::security::{InputValidator, PatternSecurity};
use std::collections::HashMap;

/// Builds one rule from a declared option. `key` is the name as written.
pub(crate) type RuleBuilder = fn(&CompilerConfig, &str, &OptionValue) -> Result<ValidationRule>;

const REFERENCE_BUILDERS: [(OptionKey, RuleBuilder); 3] = [
    (OptionKey::MinLength, build_min_length),
    (OptionKey::MaxLength, build_max_length),
    (OptionKey::Pattern, build_pattern),
];

const EXTENDED_BUILDERS: [(OptionKey, RuleBuilder); 9] = [
    (OptionKey::StartsWith, build_starts_with),
    (OptionKey::EndsWith, build_ends_with),
    (OptionKey::Contains, build_contains),
    (OptionKey::NotContains, build_not_contains),
    (OptionKey::Format, build_format),
    (OptionKey::Min, build_min),
    (OptionKey::Max, build_max),
    (OptionKey::ExclusiveMin, build_exclusive_min),
    (OptionKey::ExclusiveMax, build_exclusive_max),
];

/// The wired builders for a rule set.
pub(crate) fn builders_for(rule_set: RuleSet) -> HashMap<OptionKey, RuleBuilder> {
    let mut table: HashMap<OptionKey, RuleBuilder> = REFERENCE_BUILDERS.into_iter().collect();
    if rule_set == RuleSet::Extended {
        table.extend(EXTENDED_BUILDERS);
    }
    table
}

fn length_bound(key: &str, value: &OptionValue) -> Result<usize> {
    value
        .as_i64()
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| {
            ConstraintError::invalid_value(key, "a non-negative integer", value.to_string())
        })
}

fn string_value<'a>(key: &str, value: &'a OptionValue) -> Result<&'a str> {
    value
        .as_str()
        .ok_or_else(|| ConstraintError::invalid_value(key, "a string", value.to_string()))
}

fn numeric_bound(key: &str, value: &OptionValue) -> Result<f64> {
    let bound = value
        .as_f64()
        .ok_or_else(|| ConstraintError::invalid_value(key, "a number", value.to_string()))?;
    InputValidator::validate_bound(bound, key)?;
    Ok(bound)
}

fn build_min_length(_: &CompilerConfig, key: &str, value: &OptionValue) -> Result<ValidationRule> {
    Ok(LengthRule::minimum(length_bound(key, value)?).into())
}

fn build_max_length(_: &CompilerConfig, key: &str, value: &OptionValue) -> Result<ValidationRule> {
    Ok(LengthRule::maximum(length_bound(key, value)?).into())
}

fn build_pattern(
    config: &CompilerConfig,
    key: &str,
    value: &OptionValue,
) -> Result<ValidationRule> {
    let expression = string_value(key, value)?;
    if config.check_patterns {
        PatternSecurity::validate_pattern(expression, config.max_pattern_length)?;
    }
    Ok(PatternRule::new(expression).into())
}

fn substring(kind: SubstringKind, key: &str, value: &OptionValue) -> Result<ValidationRule> {
    let needle = string_value(key, value)?;
    InputValidator::validate_no_null_bytes(needle, key)?;
    Ok(SubstringRule::new(kind, needle).into())
}

fn build_starts_with(_: &CompilerConfig, key: &str, value: &OptionValue) -> Result<ValidationRule> {
    substring(SubstringKind::StartsWith, key, value)
}

fn build_ends_with(_: &CompilerConfig, key: &str, value: &OptionValue) -> Result<ValidationRule> {
    substring(SubstringKind::EndsWith, key, value)
}

fn build_contains(_: &CompilerConfig, key: &str, value: &OptionValue) -> Result<ValidationRule> {
    substring(SubstringKind::Contains, key, value)
}

fn build_not_contains(
    _: &CompilerConfig,
    key: &str,
    value: &OptionValue,
) -> Result<ValidationRule> {
    substring(SubstringKind::NotContains, key, value)
}

fn build_format(_: &CompilerConfig, key: &str, value: &OptionValue) -> Result<ValidationRule> {
    let tag = string_value(key, value)?;
    let format = FormatTag::parse(tag).ok_or_else(|| {
        ConstraintError::invalid_value(key, "a known format tag", value.to_string())
    })?;
    Ok(FormatRule::new(format).into())
}

fn build_min(_: &CompilerConfig, key: &str, value: &OptionValue) -> Result<ValidationRule> {
    Ok(NumericRule::minimum(numeric_bound(key, value)?).into())
}

fn build_max(_: &CompilerConfig, key: &str, value: &OptionValue) -> Result<ValidationRule> {
    Ok(NumericRule::maximum(numeric_bound(key, value)?).into())
}

fn build_exclusive_min(
    _: &CompilerConfig,
    key: &str,
    value: &OptionValue,
) -> Result<ValidationRule> {
    Ok(NumericRule::exclusive_minimum(numeric_bound(key, value)?).into())
}

fn build_exclusive_max(
    _: &CompilerConfig,
    key: &str,
    value: &OptionValue,
) -> Result<ValidationRule> {
    Ok(NumericRule::exclusive_maximum(numeric_bound(key, value)?).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_table_has_three_builders() {
        let table = builders_for(RuleSet::Reference);
        let mut keys: Vec<_> = table.keys().map(OptionKey::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["maxLength", "minLength", "pattern"]);
    }

    #[test]
    fn test_extended_table_covers_every_rule_key() {
        let table = builders_for(RuleSet::Extended);
        for key in OptionKey::ALL {
            assert_eq!(
                table.contains_key(&key),
                key != OptionKey::WithoutValidator,
                "unexpected wiring for {key}"
            );
        }
    }

    #[test]
    fn test_length_bound_rejects_negative_and_non_integers() {
        assert_eq!(length_bound("minLength", &OptionValue::Int(0)).unwrap(), 0);
        assert!(length_bound("minLength", &OptionValue::Int(-1)).is_err());
        assert!(length_bound("minLength", &OptionValue::Float(2.0)).is_err());
        assert!(length_bound("minLength", &OptionValue::from("3")).is_err());
    }

    #[test]
    fn test_pattern_builder_honors_check_flag() {
        let checked = CompilerConfig::default().with_pattern_checks(true);
        let unchecked = CompilerConfig::default();
        let value = OptionValue::from("[unclosed");

        assert!(build_pattern(&checked, "pattern", &value).is_err());
        assert_eq!(
            build_pattern(&unchecked, "pattern", &value).unwrap(),
            ValidationRule::Pattern(PatternRule::new("[unclosed"))
        );
    }

    #[test]
    fn test_numeric_bound_accepts_integers() {
        assert_eq!(
            build_min(&CompilerConfig::default(), "min", &OptionValue::Int(3)).unwrap(),
            ValidationRule::Numeric(NumericRule::minimum(3.0))
        );
        assert!(numeric_bound("max", &OptionValue::Float(f64::NAN)).is_err());
        assert!(numeric_bound("max", &OptionValue::Bool(true)).is_err());
    }

    #[test]
    fn test_format_builder() {
        let config = CompilerConfig::default();
        assert_eq!(
            build_format(&config, "format", &OptionValue::from("email")).unwrap(),
            ValidationRule::Format(FormatRule::new(FormatTag::Email))
        );
        let err = build_format(&config, "format", &OptionValue::from("zipcode")).unwrap_err();
        assert_eq!(err.option_key(), Some("format"));
    }
}

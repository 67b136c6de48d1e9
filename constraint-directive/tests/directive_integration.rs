//! End-to-end tests for the `@constraint` directive against a minimal schema
//! host.
//!
//! `SchemaArgument` stands in for the host library: it records applied
//! directives, stores attached rules, and evaluates them against request
//! values the way an execution engine would.

use constraint_directive::prelude::*;
use constraint_directive::rules::{
    FormatTag, LengthRule, NumericRule, PatternRule, SubstringKind, ValidationRule,
};
use regex::Regex;
use serde_json::{json, Value};

/// A schema element owned by the test host.
#[derive(Debug)]
struct SchemaArgument {
    name: String,
    location: DirectiveLocation,
    validators: Vec<ValidationRule>,
    directives: Vec<AppliedDirective>,
}

impl SchemaArgument {
    fn new(name: &str, location: DirectiveLocation) -> Self {
        Self {
            name: name.to_string(),
            location,
            validators: Vec::new(),
            directives: Vec::new(),
        }
    }

    fn annotate(&mut self, directive: &ConstraintDirective, arguments: Value) -> Result<()> {
        let applied = directive.apply_json(self, &arguments)?;
        self.directives.push(applied);
        Ok(())
    }

    /// Checks a request value against every attached rule.
    fn evaluate(&self, value: &Value) -> std::result::Result<(), Vec<String>> {
        let failures: Vec<String> = self
            .validators
            .iter()
            .filter(|rule| !check(rule, value))
            .map(|rule| format!("{} must be {rule}", self.name))
            .collect();

        if failures.is_empty() {
            Ok(())
        } else {
            Err(failures)
        }
    }
}

impl RuleOwner for SchemaArgument {
    fn attach_validation_rule(&mut self, rule: ValidationRule) {
        self.validators.push(rule);
    }

    fn has_validation(&self) -> bool {
        !self.validators.is_empty()
    }

    fn location(&self) -> DirectiveLocation {
        self.location
    }

    fn owner_name(&self) -> &str {
        &self.name
    }
}

fn check(rule: &ValidationRule, value: &Value) -> bool {
    match (rule, value) {
        (ValidationRule::Length(LengthRule { minimum, maximum }), Value::String(s)) => {
            let len = s.chars().count();
            minimum.map_or(true, |min| len >= min) && maximum.map_or(true, |max| len <= max)
        }
        (ValidationRule::Pattern(PatternRule { expression }), Value::String(s)) => {
            Regex::new(expression).unwrap().is_match(s)
        }
        (ValidationRule::Substring(rule), Value::String(s)) => match rule.kind {
            SubstringKind::StartsWith => s.starts_with(&rule.needle),
            SubstringKind::EndsWith => s.ends_with(&rule.needle),
            SubstringKind::Contains => s.contains(&rule.needle),
            SubstringKind::NotContains => !s.contains(&rule.needle),
        },
        (ValidationRule::Numeric(rule), Value::Number(n)) => {
            let n = n.as_f64().unwrap();
            rule.minimum.map_or(true, |b| n >= b)
                && rule.maximum.map_or(true, |b| n <= b)
                && rule.exclusive_minimum.map_or(true, |b| n > b)
                && rule.exclusive_maximum.map_or(true, |b| n < b)
        }
        (ValidationRule::Format(rule), Value::String(s)) => match rule.format {
            FormatTag::Email => Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap().is_match(s),
            _ => true,
        },
        // null and mismatched types are left to the type system
        _ => true,
    }
}

fn length_input() -> SchemaArgument {
    let mut arg = SchemaArgument::new("arg", DirectiveLocation::InputFieldDefinition);
    arg.annotate(
        &ConstraintDirective::default(),
        json!({"minLength": 3, "maxLength": 5}),
    )
    .unwrap();
    arg
}

fn pattern_argument() -> SchemaArgument {
    let mut input = SchemaArgument::new("input", DirectiveLocation::ArgumentDefinition);
    input
        .annotate(&ConstraintDirective::default(), json!({"pattern": "^[a-z]+$"}))
        .unwrap();
    input
}

fn without_validator_argument() -> SchemaArgument {
    let mut input = SchemaArgument::new("input", DirectiveLocation::ArgumentDefinition);
    input
        .annotate(
            &ConstraintDirective::default(),
            json!({"pattern": "^[a-z]+$", "without_validator": true}),
        )
        .unwrap();
    input
}

#[test]
fn test_input_argument_has_one_constraint_directive() {
    let arg = length_input();
    assert_eq!(arg.directives.len(), 1);
    assert_eq!(arg.directives[0].name, "constraint");
    assert_eq!(arg.validators.len(), 2);
}

#[test]
fn test_minimum_length_violation() {
    let arg = length_input();
    let errors = arg.evaluate(&json!("12")).unwrap_err();
    assert_eq!(errors, vec!["arg must be length at least 3 characters"]);
    assert!(arg.evaluate(&json!("1")).is_err());
}

#[test]
fn test_maximum_length_violation() {
    let arg = length_input();
    let errors = arg.evaluate(&json!("123456")).unwrap_err();
    assert_eq!(errors, vec!["arg must be length at most 5 characters"]);
}

#[test]
fn test_valid_length() {
    let arg = length_input();
    assert!(arg.evaluate(&json!("12345")).is_ok());
    assert!(arg.evaluate(&json!("123")).is_ok());
}

#[test]
fn test_invalid_pattern_value() {
    assert!(pattern_argument().evaluate(&json!("12345")).is_err());
}

#[test]
fn test_valid_pattern_value() {
    assert!(pattern_argument().evaluate(&json!("abcde")).is_ok());
}

#[test]
fn test_without_validator_keeps_directive_but_attaches_nothing() {
    let input = without_validator_argument();

    assert_eq!(input.directives.len(), 1);
    assert!(input.directives[0].report.suppressed);
    assert!(input.validators.is_empty());
    assert!(input.evaluate(&json!("12345")).is_ok());
}

#[test]
fn test_either_opt_out_spelling_suppresses_rules() {
    let mut input = SchemaArgument::new("input", DirectiveLocation::ArgumentDefinition);
    input
        .annotate(
            &ConstraintDirective::default(),
            json!({"withoutValidator": false, "minLength": 3, "without_validator": true}),
        )
        .unwrap();

    assert!(input.directives[0].report.suppressed);
    assert!(input.validators.is_empty());
    assert_eq!(
        input.directives[0].arguments.keys().collect::<Vec<_>>(),
        vec!["minLength"]
    );
}

#[test]
fn test_host_dialect_patterns_are_attached_verbatim() {
    let mut password = SchemaArgument::new("password", DirectiveLocation::ArgumentDefinition);
    password
        .annotate(&ConstraintDirective::default(), json!({"pattern": r"^(?=.*\d).{8,}$"}))
        .unwrap();

    assert_eq!(
        password.validators,
        vec![ValidationRule::Pattern(PatternRule::new(r"^(?=.*\d).{8,}$"))]
    );
}

#[test]
fn test_numeric_bounds_are_skipped_by_reference_rule_set() {
    let mut minmax = SchemaArgument::new("minmax", DirectiveLocation::InputFieldDefinition);
    minmax
        .annotate(&ConstraintDirective::default(), json!({"min": 3, "max": 5}))
        .unwrap();

    assert!(minmax.validators.is_empty());
    assert_eq!(
        minmax.directives[0].report.skipped,
        vec![OptionKey::Min, OptionKey::Max]
    );
    assert!(minmax.evaluate(&json!(42)).is_ok());
}

#[test]
fn test_numeric_bounds_with_extended_rule_set() {
    let directive = ConstraintDirective::with_config(CompilerConfig::extended()).unwrap();

    let mut minmax = SchemaArgument::new("minmax", DirectiveLocation::InputFieldDefinition);
    minmax.annotate(&directive, json!({"min": 3, "max": 5})).unwrap();
    assert_eq!(
        minmax.validators,
        vec![
            ValidationRule::Numeric(NumericRule::minimum(3.0)),
            ValidationRule::Numeric(NumericRule::maximum(5.0)),
        ]
    );
    assert!(minmax.evaluate(&json!(2)).is_err());
    assert!(minmax.evaluate(&json!(3)).is_ok());
    assert!(minmax.evaluate(&json!(5)).is_ok());
    assert!(minmax.evaluate(&json!(42)).is_err());

    let mut exclusive = SchemaArgument::new("exclusive", DirectiveLocation::InputFieldDefinition);
    exclusive
        .annotate(&directive, json!({"exclusiveMin": 3, "exclusiveMax": 5}))
        .unwrap();
    assert!(exclusive.evaluate(&json!(3)).is_err());
    assert!(exclusive.evaluate(&json!(4)).is_ok());
    assert!(exclusive.evaluate(&json!(5)).is_err());
}

#[test]
fn test_string_options_with_extended_rule_set() {
    let directive = ConstraintDirective::with_config(CompilerConfig::extended()).unwrap();
    let mut email = SchemaArgument::new("email", DirectiveLocation::ArgumentDefinition);
    email
        .annotate(
            &directive,
            json!({"format": "email", "endsWith": ".org", "notContains": "+"}),
        )
        .unwrap();

    assert_eq!(email.validators.len(), 3);
    assert!(email.evaluate(&json!("dev@example.org")).is_ok());
    assert_eq!(email.evaluate(&json!("dev+x@example.com")).unwrap_err().len(), 2);
    assert!(email.evaluate(&json!("not-an-email.org")).is_err());
}

#[test]
fn test_strict_policy_aborts_on_declared_but_unwired_option() {
    let directive = ConstraintDirective::with_config(CompilerConfig::strict()).unwrap();
    let mut arg = SchemaArgument::new("arg", DirectiveLocation::InputFieldDefinition);

    let err = arg
        .annotate(&directive, json!({"maxLength": 5, "contains": "x"}))
        .unwrap_err();

    assert!(matches!(err, ConstraintError::UnsupportedOption { ref key } if key == "contains"));
    assert!(arg.directives.is_empty());
}

#[test]
fn test_unknown_option_aborts_annotation() {
    let mut arg = SchemaArgument::new("arg", DirectiveLocation::InputFieldDefinition);
    let err = arg
        .annotate(
            &ConstraintDirective::default(),
            json!({"minItems": 1, "maxItems": 2}),
        )
        .unwrap_err();

    assert_eq!(err.option_key(), Some("minItems"));
}

#[test]
fn test_field_definition_is_a_valid_location() {
    let mut field = SchemaArgument::new("length", DirectiveLocation::FieldDefinition);
    field
        .annotate(&ConstraintDirective::default(), json!({"maxLength": 10}))
        .unwrap();
    assert_eq!(
        field.validators,
        vec![ValidationRule::Length(LengthRule::maximum(10))]
    );
}

#[test]
fn test_identical_options_on_distinct_owners() {
    let first = length_input();
    let mut second = length_input();

    assert_eq!(first.validators, second.validators);
    second.validators.clear();
    assert_eq!(first.validators.len(), 2);
}

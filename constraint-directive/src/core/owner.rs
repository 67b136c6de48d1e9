//! The schema-element side of rule attachment.

use crate::rules::ValidationRule;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Schema locations a directive can be written at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DirectiveLocation {
    FieldDefinition,
    ArgumentDefinition,
    InputFieldDefinition,
    Object,
    InputObject,
    Scalar,
    Enum,
    EnumValue,
    Interface,
    Union,
    Schema,
}

impl DirectiveLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            DirectiveLocation::FieldDefinition => "FIELD_DEFINITION",
            DirectiveLocation::ArgumentDefinition => "ARGUMENT_DEFINITION",
            DirectiveLocation::InputFieldDefinition => "INPUT_FIELD_DEFINITION",
            DirectiveLocation::Object => "OBJECT",
            DirectiveLocation::InputObject => "INPUT_OBJECT",
            DirectiveLocation::Scalar => "SCALAR",
            DirectiveLocation::Enum => "ENUM",
            DirectiveLocation::EnumValue => "ENUM_VALUE",
            DirectiveLocation::Interface => "INTERFACE",
            DirectiveLocation::Union => "UNION",
            DirectiveLocation::Schema => "SCHEMA",
        }
    }
}

impl fmt::Display for DirectiveLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A schema element that can receive validation rules.
///
/// Implemented by the host schema library for its field, argument and
/// input-field types. Attachment is additive: attaching the same rule twice
/// stores it twice.
///
/// # Examples
///
/// ```rust
/// use constraint_directive::core::{DirectiveLocation, RuleOwner};
/// use constraint_directive::rules::ValidationRule;
///
/// struct Argument {
///     name: String,
///     validators: Vec<ValidationRule>,
/// }
///
/// impl RuleOwner for Argument {
///     fn attach_validation_rule(&mut self, rule: ValidationRule) {
///         self.validators.push(rule);
///     }
///
///     fn has_validation(&self) -> bool {
///         !self.validators.is_empty()
///     }
///
///     fn location(&self) -> DirectiveLocation {
///         DirectiveLocation::ArgumentDefinition
///     }
/// }
/// ```
pub trait RuleOwner {
    /// Adds one rule to the element's validators.
    fn attach_validation_rule(&mut self, rule: ValidationRule);

    /// Returns whether the element already carries any validation.
    fn has_validation(&self) -> bool;

    /// Returns where in the schema this element lives.
    fn location(&self) -> DirectiveLocation;

    /// Returns a display name for logging.
    fn owner_name(&self) -> &str {
        "<anonymous>"
    }
}

impl<T: RuleOwner + ?Sized> RuleOwner for &mut T {
    fn attach_validation_rule(&mut self, rule: ValidationRule) {
        (**self).attach_validation_rule(rule);
    }

    fn has_validation(&self) -> bool {
        (**self).has_validation()
    }

    fn location(&self) -> DirectiveLocation {
        (**self).location()
    }

    fn owner_name(&self) -> &str {
        (**self).owner_name()
    }
}

/// A standalone owner that simply records attached rules.
///
/// Useful for hosts that collect rules first and install them on their own
/// schema types afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct AttachedRules {
    name: String,
    location: DirectiveLocation,
    rules: Vec<ValidationRule>,
}

impl AttachedRules {
    pub fn new(name: impl Into<String>, location: DirectiveLocation) -> Self {
        Self {
            name: name.into(),
            location,
            rules: Vec::new(),
        }
    }

    /// Creates an owner for an argument definition.
    pub fn argument(name: impl Into<String>) -> Self {
        Self::new(name, DirectiveLocation::ArgumentDefinition)
    }

    /// Creates an owner for an input-object field.
    pub fn input_field(name: impl Into<String>) -> Self {
        Self::new(name, DirectiveLocation::InputFieldDefinition)
    }

    /// Creates an owner for an output field definition.
    pub fn field(name: impl Into<String>) -> Self {
        Self::new(name, DirectiveLocation::FieldDefinition)
    }

    pub fn rules(&self) -> &[ValidationRule] {
        &self.rules
    }
}

impl RuleOwner for AttachedRules {
    fn attach_validation_rule(&mut self, rule: ValidationRule) {
        self.rules.push(rule);
    }

    fn has_validation(&self) -> bool {
        !self.rules.is_empty()
    }

    fn location(&self) -> DirectiveLocation {
        self.location
    }

    fn owner_name(&self) -> &str {
        &self.name
    }
}

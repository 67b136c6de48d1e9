//! The `@constraint` directive definition.
//!
//! Hosts register [`ConstraintDirective::definition`] with their schema so the
//! directive is known, then call [`ConstraintDirective::apply`] once for every
//! element annotated with it.
//!
//! ```graphql
//! directive @constraint(
//!   minLength: Int
//!   maxLength: Int
//!   startsWith: String
//!   ...
//!   withoutValidator: Boolean
//! ) on INPUT_FIELD_DEFINITION | FIELD_DEFINITION | ARGUMENT_DEFINITION
//! ```

use crate::compiler::{CompileReport, RuleCompiler};
use crate::config::CompilerConfig;
use crate::core::{ConstraintOptions, DirectiveLocation, OptionKey, RuleOwner};
use crate::error::{ConstraintError, Result};
use serde::Serialize;
use tracing::instrument;

pub const DIRECTIVE_NAME: &str = "constraint";

pub const DIRECTIVE_DESCRIPTION: &str =
    "Allows using @constraint as a directive to validate input data";

/// Locations the directive may be written at.
pub const DIRECTIVE_LOCATIONS: [DirectiveLocation; 3] = [
    DirectiveLocation::InputFieldDefinition,
    DirectiveLocation::FieldDefinition,
    DirectiveLocation::ArgumentDefinition,
];

/// One argument of the directive definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArgumentDefinition {
    pub name: &'static str,
    pub type_name: &'static str,
    pub description: &'static str,
}

impl ArgumentDefinition {
    fn for_key(key: OptionKey) -> Self {
        let (type_name, description) = match key {
            OptionKey::MinLength => ("Int", "Restrict to a minimum length"),
            OptionKey::MaxLength => ("Int", "Restrict to a maximum length"),
            OptionKey::StartsWith => ("String", "Ensure value starts with"),
            OptionKey::EndsWith => ("String", "Ensure value ends with"),
            OptionKey::Contains => ("String", "Ensure value contains"),
            OptionKey::NotContains => ("String", "Ensure value does not contain"),
            OptionKey::Pattern => ("String", "Ensure value matches regex, e.g. alphanumeric"),
            OptionKey::Format => ("String", "Ensure value is in a particular format"),
            OptionKey::Min => ("Float", "Ensure value is greater than or equal to"),
            OptionKey::Max => ("Float", "Ensure value is less than or equal to"),
            OptionKey::ExclusiveMin => ("Float", "Ensure value is greater than"),
            OptionKey::ExclusiveMax => ("Float", "Ensure value is less than"),
            OptionKey::WithoutValidator => {
                ("Boolean", "Use constraint directive without validator")
            }
        };
        Self {
            name: key.as_str(),
            type_name,
            description,
        }
    }
}

/// The static shape of the directive, for registration with a schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectiveDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub arguments: Vec<ArgumentDefinition>,
    pub locations: Vec<DirectiveLocation>,
}

impl DirectiveDefinition {
    /// Looks up an argument definition by name.
    pub fn argument(&self, name: &str) -> Option<&ArgumentDefinition> {
        self.arguments.iter().find(|arg| arg.name == name)
    }

    pub fn allows(&self, location: DirectiveLocation) -> bool {
        self.locations.contains(&location)
    }
}

/// A directive instance recorded on a schema element.
///
/// It exists even when `withoutValidator` suppressed every rule, so the
/// element still reports exactly one `@constraint` directive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppliedDirective {
    pub name: &'static str,
    pub location: DirectiveLocation,
    /// Declared arguments, minus the opt-out flag
    pub arguments: ConstraintOptions,
    pub report: CompileReport,
}

/// The `@constraint` directive.
///
/// # Examples
///
/// ```rust
/// use constraint_directive::core::{AttachedRules, ConstraintOptions};
/// use constraint_directive::directive::ConstraintDirective;
///
/// # fn example() -> constraint_directive::prelude::Result<()> {
/// let directive = ConstraintDirective::default();
/// let mut owner = AttachedRules::argument("input");
///
/// let options = ConstraintOptions::new()
///     .with("pattern", "^[a-z]+$")
///     .with("withoutValidator", true);
/// let applied = directive.apply(&mut owner, &options)?;
///
/// assert!(applied.report.suppressed);
/// assert!(owner.rules().is_empty());
/// assert!(applied.arguments.get("withoutValidator").is_none());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConstraintDirective {
    compiler: RuleCompiler,
}

impl ConstraintDirective {
    pub fn new(compiler: RuleCompiler) -> Self {
        Self { compiler }
    }

    pub fn with_config(config: CompilerConfig) -> Result<Self> {
        Ok(Self::new(RuleCompiler::new(config)?))
    }

    pub fn compiler(&self) -> &RuleCompiler {
        &self.compiler
    }

    /// Returns the directive definition.
    pub fn definition() -> DirectiveDefinition {
        DirectiveDefinition {
            name: DIRECTIVE_NAME,
            description: DIRECTIVE_DESCRIPTION,
            arguments: OptionKey::ALL
                .into_iter()
                .map(ArgumentDefinition::for_key)
                .collect(),
            locations: DIRECTIVE_LOCATIONS.to_vec(),
        }
    }

    /// Applies the directive to `owner`, attaching the compiled rules.
    ///
    /// # Errors
    ///
    /// [`ConstraintError::InvalidLocation`] when the owner lives somewhere the
    /// directive cannot be written, otherwise any compilation error.
    #[instrument(skip_all, fields(directive = DIRECTIVE_NAME))]
    pub fn apply<O>(&self, owner: &mut O, options: &ConstraintOptions) -> Result<AppliedDirective>
    where
        O: RuleOwner + ?Sized,
    {
        let location = owner.location();
        if !DIRECTIVE_LOCATIONS.contains(&location) {
            return Err(ConstraintError::InvalidLocation { location });
        }

        let report = self.compiler.compile(owner, options)?;

        Ok(AppliedDirective {
            name: DIRECTIVE_NAME,
            location,
            arguments: options.without_opt_out(),
            report,
        })
    }

    /// Parses JSON directive arguments and applies them to `owner`.
    pub fn apply_json<O>(
        &self,
        owner: &mut O,
        arguments: &serde_json::Value,
    ) -> Result<AppliedDirective>
    where
        O: RuleOwner + ?Sized,
    {
        let options = ConstraintOptions::from_json(arguments)?;
        self.apply(owner, &options)
    }
}

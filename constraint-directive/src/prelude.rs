//! Prelude for commonly used types and traits in constraint-directive.

pub use crate::compiler::{CompileReport, RuleCompiler};
pub use crate::config::{CompilerConfig, RuleSet, UnwiredOptionPolicy};
pub use crate::core::{
    AttachedRules, ConstraintOptions, DirectiveLocation, OptionKey, OptionValue, RuleOwner,
};
pub use crate::directive::{AppliedDirective, ConstraintDirective};
pub use crate::error::{ConstraintError, Result};
pub use crate::logging::LogConfig;
pub use crate::rules::ValidationRule;

//! Core types shared between the compiler and the host schema library.
//!
//! - **[`ConstraintOptions`]**: the ordered option set declared on one element
//! - **[`OptionKey`]** / **[`OptionValue`]**: a single declared option
//! - **[`RuleOwner`]**: the host-side element that receives rules
//! - **[`DirectiveLocation`]**: where in a schema an element lives
//!
//! ```text
//! @constraint(minLength: 3, maxLength: 5)
//!         │
//!         ▼
//! ConstraintOptions ──► RuleCompiler ──► RuleOwner::attach_validation_rule
//!                                          (LengthRule{minimum: 3})
//!                                          (LengthRule{maximum: 5})
//! ```

mod options;
mod owner;

pub use options::{ConstraintOptions, OptionKey, OptionValue};
pub use owner::{AttachedRules, DirectiveLocation, RuleOwner};

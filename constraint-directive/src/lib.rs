//! # constraint-directive - `@constraint` for GraphQL-style schemas
//!
//! This crate implements the schema-build half of a `@constraint` directive:
//! it turns the options declared on a field, argument or input-object field
//! into validation rule descriptors and attaches them to that element. The
//! host schema library evaluates the attached rules when requests arrive.
//!
//! ## Quick Start
//!
//! ```rust
//! use constraint_directive::prelude::*;
//! use constraint_directive::rules::{LengthRule, PatternRule};
//!
//! # fn example() -> Result<()> {
//! let directive = ConstraintDirective::default();
//!
//! // input LengthInput { arg: String @constraint(minLength: 3, maxLength: 5) }
//! let mut arg = AttachedRules::input_field("arg");
//! directive.apply(
//!     &mut arg,
//!     &ConstraintOptions::new().with("minLength", 3).with("maxLength", 5),
//! )?;
//!
//! // pattern(input: String @constraint(pattern: "^[a-z]+$"))
//! let mut input = AttachedRules::argument("input");
//! directive.apply(&mut input, &ConstraintOptions::new().with("pattern", "^[a-z]+$"))?;
//!
//! assert_eq!(
//!     arg.rules(),
//!     &[
//!         ValidationRule::Length(LengthRule::minimum(3)),
//!         ValidationRule::Length(LengthRule::maximum(5)),
//!     ]
//! );
//! assert_eq!(input.rules(), &[ValidationRule::Pattern(PatternRule::new("^[a-z]+$"))]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Supported Options
//!
//! | option | rule |
//! |---|---|
//! | `minLength: n` | [`LengthRule`](rules::LengthRule) with `minimum: n` |
//! | `maxLength: n` | [`LengthRule`](rules::LengthRule) with `maximum: n` |
//! | `pattern: p` | [`PatternRule`](rules::PatternRule) with `expression: p` |
//! | `withoutValidator: true` | attach nothing at all |
//!
//! `startsWith`, `endsWith`, `contains`, `notContains`, `format`, `min`, `max`,
//! `exclusiveMin` and `exclusiveMax` are declared by the directive but produce
//! no rule by default. [`config::UnwiredOptionPolicy::Reject`] turns them into
//! errors, and [`config::RuleSet::Extended`] wires them to rule descriptors.
//! Keys the directive does not declare are always an error.
//!
//! ## Architecture
//!
//! - **`core`**: option sets, the [`RuleOwner`](core::RuleOwner) trait, locations
//! - **`rules`**: validation rule descriptors
//! - **`compiler`**: the option-to-rule translation and attachment
//! - **`directive`**: the directive definition and its `apply` entry point
//! - **`config`**: compiler configuration
//! - **`security`**: build-time vetting of pattern sources and bounds
//! - **`logging`**: `tracing` configuration helpers

pub mod compiler;
pub mod config;
pub mod core;
pub mod directive;
pub mod error;
pub mod logging;
pub mod prelude;
pub mod rules;
pub mod security;

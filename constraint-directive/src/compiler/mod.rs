//! The constraint rule compiler.
//!
//! Compilation is a single linear pass over a declared option set, run once per
//! annotated schema element while the schema is built:
//!
//! 1. If `withoutValidator: true` is present, nothing is attached.
//! 2. Otherwise each option is looked up in the rule table, in declaration
//!    order, and the rule it builds is attached to the owner immediately.
//! 3. Options with no builder are skipped or rejected according to
//!    [`UnwiredOptionPolicy`]; keys the directive does not declare at all
//!    are always rejected.
//!
//! The first offending option aborts the pass. Rules attached before it stay
//! attached; the caller is expected to abandon the schema build.
//!
//! ## Example
//!
//! ```rust
//! use constraint_directive::compiler::RuleCompiler;
//! use constraint_directive::core::{AttachedRules, ConstraintOptions};
//! use constraint_directive::rules::{LengthRule, ValidationRule};
//!
//! # fn example() -> constraint_directive::prelude::Result<()> {
//! let compiler = RuleCompiler::default();
//! let mut owner = AttachedRules::input_field("arg");
//!
//! let options = ConstraintOptions::new()
//!     .with("minLength", 3)
//!     .with("maxLength", 5);
//! let report = compiler.compile(&mut owner, &options)?;
//!
//! assert_eq!(report.attached_count(), 2);
//! assert_eq!(
//!     owner.rules(),
//!     &[
//!         ValidationRule::Length(LengthRule::minimum(3)),
//!         ValidationRule::Length(LengthRule::maximum(5)),
//!     ]
//! );
//! # Ok(())
//! # }
//! ```

mod report;
mod table;

pub use report::CompileReport;

use crate::config::{CompilerConfig, UnwiredOptionPolicy};
use crate::core::{ConstraintOptions, OptionKey, OptionValue, RuleOwner};
use crate::error::{ConstraintError, Result};
use crate::logging::truncate_field;
use crate::rules::ValidationRule;
use crate::{log_rule, log_skipped};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use table::RuleBuilder;
use tracing::{debug, instrument, warn};

static DEFAULT_COMPILER: Lazy<RuleCompiler> = Lazy::new(RuleCompiler::default);

/// What a single declared option compiles to.
#[derive(Debug, Clone, PartialEq)]
enum Compiled {
    Rule(ValidationRule),
    Skipped(OptionKey),
    OptOut,
}

/// Translates declared constraint options into validation rules.
///
/// A compiler is immutable once built and can be shared between threads;
/// each call only touches the owner and options passed to it.
#[derive(Clone)]
pub struct RuleCompiler {
    config: CompilerConfig,
    builders: HashMap<OptionKey, RuleBuilder>,
}

impl fmt::Debug for RuleCompiler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut wired: Vec<_> = self.builders.keys().map(OptionKey::as_str).collect();
        wired.sort_unstable();
        f.debug_struct("RuleCompiler")
            .field("config", &self.config)
            .field("wired", &wired)
            .finish()
    }
}

impl Default for RuleCompiler {
    fn default() -> Self {
        let config = CompilerConfig::default();
        Self {
            builders: table::builders_for(config.rule_set),
            config,
        }
    }
}

impl RuleCompiler {
    /// Creates a compiler from a validated configuration.
    pub fn new(config: CompilerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            builders: table::builders_for(config.rule_set),
            config,
        })
    }

    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    /// Returns whether `key` produces a rule under this compiler's rule set.
    pub fn is_wired(&self, key: OptionKey) -> bool {
        self.builders.contains_key(&key)
    }

    /// Derives the rules for `options` without touching any owner.
    ///
    /// Returns an empty list when `withoutValidator: true` is set.
    ///
    /// # Errors
    ///
    /// Fails on the first option, in declaration order, that is unknown,
    /// rejected by the unwired-option policy, or carries an invalid value.
    pub fn options_to_rules(&self, options: &ConstraintOptions) -> Result<Vec<ValidationRule>> {
        if options.is_suppressed()? {
            return Ok(Vec::new());
        }

        let mut rules = Vec::new();
        for (key, value) in options.iter() {
            if let Compiled::Rule(rule) = self.compile_option(key, value)? {
                rules.push(rule);
            }
        }
        Ok(rules)
    }

    /// Compiles `options` and attaches each resulting rule to `owner` as soon
    /// as it is built.
    ///
    /// # Errors
    ///
    /// Same conditions as [`options_to_rules`](Self::options_to_rules). Rules
    /// attached before the failing option remain on the owner.
    #[instrument(skip(self, owner, options), fields(
        owner = %owner.owner_name(),
        location = %owner.location(),
        options = options.len()
    ))]
    pub fn compile<O>(&self, owner: &mut O, options: &ConstraintOptions) -> Result<CompileReport>
    where
        O: RuleOwner + ?Sized,
    {
        let mut report = CompileReport::new(owner.owner_name(), owner.has_validation());
        if report.had_validation {
            debug!("Owner already carries validation; new rules are added alongside");
        }

        if options.is_suppressed()? {
            debug!("withoutValidator set, skipping rule attachment");
            report.suppressed = true;
            return Ok(report);
        }

        for (key, value) in options.iter() {
            match self.compile_option(key, value) {
                Ok(Compiled::Rule(rule)) => {
                    let max_len = self.config.log.max_field_length;
                    log_rule!(
                        self.config.log,
                        option = key,
                        rule = rule.name(),
                        detail = %truncate_field(&rule.to_string(), max_len),
                        "Attaching validation rule"
                    );
                    owner.attach_validation_rule(rule.clone());
                    report.attached.push(rule);
                }
                Ok(Compiled::Skipped(option)) => {
                    log_skipped!(
                        self.config.log,
                        option = %option,
                        "Option declared but produces no rule"
                    );
                    report.skipped.push(option);
                }
                Ok(Compiled::OptOut) => {}
                Err(e) => {
                    warn!(option = key, error = %e, "Constraint compilation failed");
                    return Err(e);
                }
            }
        }

        debug!(
            attached = report.attached.len(),
            skipped = report.skipped.len(),
            "Constraint compilation finished"
        );
        Ok(report)
    }

    fn compile_option(&self, key: &str, value: &OptionValue) -> Result<Compiled> {
        let option = OptionKey::parse(key).ok_or_else(|| ConstraintError::unsupported(key))?;

        if option == OptionKey::WithoutValidator {
            return Ok(Compiled::OptOut);
        }

        match self.builders.get(&option) {
            Some(build) => build(&self.config, key, value).map(Compiled::Rule),
            None => match self.config.unwired {
                UnwiredOptionPolicy::Ignore => Ok(Compiled::Skipped(option)),
                UnwiredOptionPolicy::Reject => Err(ConstraintError::unsupported(key)),
            },
        }
    }
}

/// Compiles `options` onto `owner` with the default configuration.
pub fn compile<O>(owner: &mut O, options: &ConstraintOptions) -> Result<CompileReport>
where
    O: RuleOwner + ?Sized,
{
    DEFAULT_COMPILER.compile(owner, options)
}

/// Derives the rules for `options` with the default configuration.
pub fn options_to_rules(options: &ConstraintOptions) -> Result<Vec<ValidationRule>> {
    DEFAULT_COMPILER.options_to_rules(options)
}

//! Compiler configuration.
//!
//! The defaults reproduce the reference behavior of the `@constraint`
//! directive: only `minLength`, `maxLength` and `pattern` produce rules, the
//! other declared options are accepted silently, and unknown options abort.

use crate::error::{ConstraintError, Result};
use crate::logging::LogConfig;
use serde::Deserialize;

/// Which option keys are wired to rule builders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleSet {
    /// `minLength`, `maxLength` and `pattern` only.
    #[default]
    Reference,
    /// Every declared option key produces a rule.
    Extended,
}

/// What to do with an option that is declared by the directive but has no
/// rule builder in the active [`RuleSet`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnwiredOptionPolicy {
    /// Accept the option and attach nothing for it.
    #[default]
    Ignore,
    /// Fail with [`ConstraintError::UnsupportedOption`].
    Reject,
}

/// Configuration for [`RuleCompiler`](crate::compiler::RuleCompiler).
///
/// # Examples
///
/// ```rust
/// use constraint_directive::config::{CompilerConfig, RuleSet, UnwiredOptionPolicy};
///
/// let config = CompilerConfig::from_json_str(r#"{"rule_set": "extended"}"#).unwrap();
/// assert_eq!(config.rule_set, RuleSet::Extended);
/// assert_eq!(config.unwired, UnwiredOptionPolicy::Ignore);
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CompilerConfig {
    pub rule_set: RuleSet,
    pub unwired: UnwiredOptionPolicy,
    /// Vet `pattern` sources with [`PatternSecurity`](crate::security::PatternSecurity)
    /// before attaching them. Off by default: the host's regex engine decides
    /// what a valid pattern is, and its dialect may accept look-around or
    /// backreferences that the vetting rejects.
    pub check_patterns: bool,
    /// Upper bound on the length of a `pattern` source, in bytes.
    pub max_pattern_length: usize,
    #[serde(skip)]
    pub log: LogConfig,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            rule_set: RuleSet::Reference,
            unwired: UnwiredOptionPolicy::Ignore,
            check_patterns: false,
            max_pattern_length: 1024,
            log: LogConfig::default(),
        }
    }
}

impl CompilerConfig {
    /// Reference rule set, but declared-but-unwired options are errors.
    pub fn strict() -> Self {
        Self {
            unwired: UnwiredOptionPolicy::Reject,
            ..Self::default()
        }
    }

    /// Every declared option produces a rule.
    pub fn extended() -> Self {
        Self {
            rule_set: RuleSet::Extended,
            ..Self::default()
        }
    }

    pub fn with_rule_set(mut self, rule_set: RuleSet) -> Self {
        self.rule_set = rule_set;
        self
    }

    pub fn with_unwired_policy(mut self, policy: UnwiredOptionPolicy) -> Self {
        self.unwired = policy;
        self
    }

    pub fn with_pattern_checks(mut self, enabled: bool) -> Self {
        self.check_patterns = enabled;
        self
    }

    pub fn with_max_pattern_length(mut self, max: usize) -> Self {
        self.max_pattern_length = max;
        self
    }

    pub fn with_log_config(mut self, log: LogConfig) -> Self {
        self.log = log;
        self
    }

    /// Checks that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if self.check_patterns && self.max_pattern_length == 0 {
            return Err(ConstraintError::Configuration(
                "max_pattern_length must be greater than zero when pattern checks are enabled"
                    .to_string(),
            ));
        }
        Ok(())
    }

    /// Loads a configuration from a JSON document. Missing fields take their
    /// default values.
    pub fn from_json_str(input: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }
}

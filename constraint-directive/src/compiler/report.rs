//! Summary of one compilation.

use crate::core::OptionKey;
use crate::rules::ValidationRule;
use serde::Serialize;

/// What a [`compile`](super::RuleCompiler::compile) call did to its owner.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CompileReport {
    /// Display name of the owner
    pub owner: String,
    /// `withoutValidator: true` was set, so nothing was attached
    pub suppressed: bool,
    /// The owner already carried validation before this call
    pub had_validation: bool,
    /// Rules attached, in attachment order
    pub attached: Vec<ValidationRule>,
    /// Declared options accepted without producing a rule
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<OptionKey>,
}

impl CompileReport {
    pub(crate) fn new(owner: impl Into<String>, had_validation: bool) -> Self {
        Self {
            owner: owner.into(),
            had_validation,
            ..Self::default()
        }
    }

    /// Number of attachment calls made.
    pub fn attached_count(&self) -> usize {
        self.attached.len()
    }

    /// Returns true when no rule was attached.
    pub fn is_empty(&self) -> bool {
        self.attached.is_empty()
    }
}

//! Prefix, suffix and containment descriptors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a required (or forbidden) substring must appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubstringKind {
    StartsWith,
    EndsWith,
    Contains,
    NotContains,
}

impl SubstringKind {
    fn description(&self) -> &'static str {
        match self {
            SubstringKind::StartsWith => "starting with",
            SubstringKind::EndsWith => "ending with",
            SubstringKind::Contains => "containing",
            SubstringKind::NotContains => "not containing",
        }
    }
}

/// Requires a value to start with, end with, contain, or not contain `needle`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubstringRule {
    pub kind: SubstringKind,
    pub needle: String,
}

impl SubstringRule {
    pub fn new(kind: SubstringKind, needle: impl Into<String>) -> Self {
        Self {
            kind,
            needle: needle.into(),
        }
    }
}

impl fmt::Display for SubstringRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.kind.description(), self.needle)
    }
}

//! Named format descriptors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named value format understood by the execution engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormatTag {
    Email,
    Uri,
    Uuid,
    Date,
    DateTime,
    Time,
    Ipv4,
    Ipv6,
    Hostname,
}

impl FormatTag {
    /// Parses a format tag. Matching is case-insensitive and `url` is an
    /// alias of `uri`.
    pub fn parse(tag: &str) -> Option<Self> {
        let tag = match tag.to_ascii_lowercase().as_str() {
            "email" => FormatTag::Email,
            "uri" | "url" => FormatTag::Uri,
            "uuid" => FormatTag::Uuid,
            "date" => FormatTag::Date,
            "date-time" | "datetime" => FormatTag::DateTime,
            "time" => FormatTag::Time,
            "ipv4" => FormatTag::Ipv4,
            "ipv6" => FormatTag::Ipv6,
            "hostname" => FormatTag::Hostname,
            _ => return None,
        };
        Some(tag)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FormatTag::Email => "email",
            FormatTag::Uri => "uri",
            FormatTag::Uuid => "uuid",
            FormatTag::Date => "date",
            FormatTag::DateTime => "date-time",
            FormatTag::Time => "time",
            FormatTag::Ipv4 => "ipv4",
            FormatTag::Ipv6 => "ipv6",
            FormatTag::Hostname => "hostname",
        }
    }
}

impl fmt::Display for FormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Requires a value to conform to a named format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormatRule {
    pub format: FormatTag,
}

impl FormatRule {
    pub fn new(format: FormatTag) -> Self {
        Self { format }
    }
}

impl fmt::Display for FormatRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "in {} format", self.format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_tag_parse() {
        assert_eq!(FormatTag::parse("email"), Some(FormatTag::Email));
        assert_eq!(FormatTag::parse("EMAIL"), Some(FormatTag::Email));
        assert_eq!(FormatTag::parse("url"), Some(FormatTag::Uri));
        assert_eq!(FormatTag::parse("date-time"), Some(FormatTag::DateTime));
        assert_eq!(FormatTag::parse("credit-card"), None);
    }

    #[test]
    fn test_format_rule_display() {
        assert_eq!(
            FormatRule::new(FormatTag::Ipv4).to_string(),
            "in ipv4 format"
        );
    }
}

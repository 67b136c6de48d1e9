//! Declared constraint options and their keys.

use crate::error::{ConstraintError, Result};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// Every option key the `@constraint` directive declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum OptionKey {
    MinLength,
    MaxLength,
    StartsWith,
    EndsWith,
    Contains,
    NotContains,
    Pattern,
    Format,
    Min,
    Max,
    ExclusiveMin,
    ExclusiveMax,
    /// Opt-out flag; consumed before any rule is built.
    WithoutValidator,
}

impl OptionKey {
    /// All declared keys, in directive argument order.
    pub const ALL: [OptionKey; 13] = [
        OptionKey::MinLength,
        OptionKey::MaxLength,
        OptionKey::StartsWith,
        OptionKey::EndsWith,
        OptionKey::Contains,
        OptionKey::NotContains,
        OptionKey::Pattern,
        OptionKey::Format,
        OptionKey::Min,
        OptionKey::Max,
        OptionKey::ExclusiveMin,
        OptionKey::ExclusiveMax,
        OptionKey::WithoutValidator,
    ];

    /// Parses an option name as written in a directive declaration.
    ///
    /// `without_validator` is accepted as an alias of `withoutValidator`.
    pub fn parse(name: &str) -> Option<Self> {
        let key = match name {
            "minLength" => OptionKey::MinLength,
            "maxLength" => OptionKey::MaxLength,
            "startsWith" => OptionKey::StartsWith,
            "endsWith" => OptionKey::EndsWith,
            "contains" => OptionKey::Contains,
            "notContains" => OptionKey::NotContains,
            "pattern" => OptionKey::Pattern,
            "format" => OptionKey::Format,
            "min" => OptionKey::Min,
            "max" => OptionKey::Max,
            "exclusiveMin" => OptionKey::ExclusiveMin,
            "exclusiveMax" => OptionKey::ExclusiveMax,
            "withoutValidator" | "without_validator" => OptionKey::WithoutValidator,
            _ => return None,
        };
        Some(key)
    }

    /// Returns the canonical option name.
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionKey::MinLength => "minLength",
            OptionKey::MaxLength => "maxLength",
            OptionKey::StartsWith => "startsWith",
            OptionKey::EndsWith => "endsWith",
            OptionKey::Contains => "contains",
            OptionKey::NotContains => "notContains",
            OptionKey::Pattern => "pattern",
            OptionKey::Format => "format",
            OptionKey::Min => "min",
            OptionKey::Max => "max",
            OptionKey::ExclusiveMin => "exclusiveMin",
            OptionKey::ExclusiveMax => "exclusiveMax",
            OptionKey::WithoutValidator => "withoutValidator",
        }
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scalar value supplied for a constraint option.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    Int(i64),
    Float(f64),
    String(String),
    Bool(bool),
}

impl OptionValue {
    /// Returns the value as an integer, if it is one.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            OptionValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the value as a number. Integers are widened to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            OptionValue::Int(value) => Some(*value as f64),
            OptionValue::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the value as a string slice, if it is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::String(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the value as a boolean, if it is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Converts a JSON scalar. `null` maps to `None` (argument not supplied).
    fn from_json(key: &str, value: &serde_json::Value) -> Result<Option<Self>> {
        use serde_json::Value;

        let converted = match value {
            Value::Null => return Ok(None),
            Value::Bool(b) => OptionValue::Bool(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => OptionValue::Int(i),
                None => OptionValue::Float(n.as_f64().ok_or_else(|| {
                    ConstraintError::invalid_value(key, "a number", n.to_string())
                })?),
            },
            Value::String(s) => OptionValue::String(s.clone()),
            Value::Array(_) | Value::Object(_) => {
                return Err(ConstraintError::invalid_value(
                    key,
                    "a scalar value",
                    value.to_string(),
                ))
            }
        };
        Ok(Some(converted))
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Int(value) => write!(f, "{value}"),
            OptionValue::Float(value) => write!(f, "{value}"),
            OptionValue::String(value) => write!(f, "{value:?}"),
            OptionValue::Bool(value) => write!(f, "{value}"),
        }
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Int(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        OptionValue::Int(i64::from(value))
    }
}

impl From<u32> for OptionValue {
    fn from(value: u32) -> Self {
        OptionValue::Int(i64::from(value))
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        OptionValue::Float(value)
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::String(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::String(value)
    }
}

/// An ordered set of constraint options declared on one schema element.
///
/// Declaration order is preserved so that compilation, and the choice of which
/// offending key gets reported, is deterministic. Keys are kept as written;
/// unknown keys survive until compilation so they can be reported in order.
///
/// # Examples
///
/// ```rust
/// use constraint_directive::core::ConstraintOptions;
///
/// let options = ConstraintOptions::new()
///     .with("minLength", 3)
///     .with("maxLength", 5);
///
/// assert_eq!(options.len(), 2);
/// assert_eq!(options.keys().collect::<Vec<_>>(), vec!["minLength", "maxLength"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstraintOptions {
    entries: Vec<(String, OptionValue)>,
}

impl ConstraintOptions {
    /// Creates an empty option set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an option, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts an option. Re-inserting a key, or one of its aliases, replaces
    /// the entry in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) {
        let key = key.into();
        let value = value.into();
        match self
            .entries
            .iter_mut()
            .find(|(existing, _)| same_option(existing, &key))
        {
            Some(entry) => *entry = (key, value),
            None => self.entries.push((key, value)),
        }
    }

    /// Returns the value declared for `key` or one of its aliases, if any.
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.entries
            .iter()
            .find(|(existing, _)| same_option(existing, key))
            .map(|(_, value)| value)
    }

    /// Iterates over the options in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Iterates over the option names in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns whether the opt-out flag is set to `true`.
    ///
    /// A `withoutValidator` entry holding anything other than a boolean is an
    /// error; `false` behaves as if the flag were absent.
    pub fn is_suppressed(&self) -> Result<bool> {
        let mut suppressed = false;
        for (key, value) in &self.entries {
            if OptionKey::parse(key) == Some(OptionKey::WithoutValidator) {
                suppressed |= value.as_bool().ok_or_else(|| {
                    ConstraintError::invalid_value(key.as_str(), "a boolean", value.to_string())
                })?;
            }
        }
        Ok(suppressed)
    }

    /// Returns a copy without the opt-out flag.
    pub fn without_opt_out(&self) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|(key, _)| OptionKey::parse(key) != Some(OptionKey::WithoutValidator))
                .cloned()
                .collect(),
        }
    }

    /// Builds an option set from a JSON object of directive arguments.
    ///
    /// Object order is preserved. `null` values are treated as not supplied.
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        let object = value.as_object().ok_or_else(|| {
            ConstraintError::Configuration(format!(
                "constraint arguments must be a JSON object, found {value}"
            ))
        })?;

        let mut options = Self::new();
        for (key, raw) in object {
            if let Some(converted) = OptionValue::from_json(key, raw)? {
                options.insert(key.clone(), converted);
            }
        }
        Ok(options)
    }

    /// Parses a JSON document of directive arguments.
    pub fn from_json_str(input: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(input)?;
        Self::from_json(&value)
    }
}

/// Two option names refer to the same option when they are equal or are
/// spellings of the same declared key.
fn same_option(a: &str, b: &str) -> bool {
    a == b || matches!((OptionKey::parse(a), OptionKey::parse(b)), (Some(x), Some(y)) if x == y)
}

impl<K, V> FromIterator<(K, V)> for ConstraintOptions
where
    K: Into<String>,
    V: Into<OptionValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = Self::new();
        for (key, value) in iter {
            options.insert(key, value);
        }
        options
    }
}

impl Serialize for ConstraintOptions {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

//! Build-time vetting of constraint option values.
//!
//! Patterns declared in a schema end up being run against every request value
//! by the host's execution engine, which may use a backtracking regex
//! implementation. With `CompilerConfig::check_patterns` enabled, sources that
//! do not compile under the `regex` crate's dialect or that nest quantifiers
//! are rejected while the schema is still being built. Pattern vetting is
//! opt-in; bound and substring checks always apply.

use crate::error::{ConstraintError, Result};
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

/// Compiled-size ceiling used when test-compiling a pattern.
const PATTERN_SIZE_LIMIT: usize = 1 << 20;

/// Regex source validation.
pub struct PatternSecurity;

impl PatternSecurity {
    /// Validates a `pattern` option source.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::InvalidPattern`] when the source is longer
    /// than `max_length` bytes, contains a null byte, does not compile, or
    /// nests quantifiers in a way known to cause catastrophic backtracking.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use constraint_directive::security::PatternSecurity;
    ///
    /// assert!(PatternSecurity::validate_pattern("^[a-z]+$", 1024).is_ok());
    /// assert!(PatternSecurity::validate_pattern("[unclosed", 1024).is_err());
    /// ```
    pub fn validate_pattern(pattern: &str, max_length: usize) -> Result<()> {
        if pattern.len() > max_length {
            return Err(ConstraintError::invalid_pattern(
                pattern,
                format!("pattern too long (max {max_length} bytes)"),
            ));
        }

        if pattern.contains('\0') {
            return Err(ConstraintError::invalid_pattern(
                pattern,
                "pattern cannot contain null bytes",
            ));
        }

        RegexBuilder::new(pattern)
            .size_limit(PATTERN_SIZE_LIMIT)
            .build()
            .map_err(|e| ConstraintError::invalid_pattern(pattern, e.to_string()))?;

        Self::check_redos_patterns(pattern)
    }

    /// Rejects a quantified group whose body itself ends in a quantifier,
    /// e.g. `(a+)+` or `(.*)*`.
    fn check_redos_patterns(pattern: &str) -> Result<()> {
        static NESTED_QUANTIFIER: Lazy<Regex> = Lazy::new(|| {
            #[allow(clippy::expect_used)]
            Regex::new(r"\((?:[^()\\]|\\.)*[+*]\)[+*{]")
                .expect("Failed to compile nested quantifier regex")
        });

        if NESTED_QUANTIFIER.is_match(pattern) {
            return Err(ConstraintError::invalid_pattern(
                pattern,
                "nested quantifiers might cause catastrophic backtracking",
            ));
        }
        Ok(())
    }
}

/// Validation of non-pattern option values.
pub struct InputValidator;

impl InputValidator {
    /// Validates that a numeric bound is finite.
    pub fn validate_bound(value: f64, key: &str) -> Result<()> {
        if !value.is_finite() {
            return Err(ConstraintError::invalid_value(
                key,
                "a finite number",
                value.to_string(),
            ));
        }
        Ok(())
    }

    /// Validates that a string option contains no null bytes.
    pub fn validate_no_null_bytes(value: &str, key: &str) -> Result<()> {
        if value.contains('\0') {
            return Err(ConstraintError::invalid_value(
                key,
                "a string without null bytes",
                value.escape_default().to_string(),
            ));
        }
        Ok(())
    }
}

//! Unified error types for the domain layer
//!
//! Value objects report construction failures through [`DomainError`] so the
//! player layer can map them onto per-field form messages without string
//! matching.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Invalid ID format
    #[error("Invalid ID format: {0}")]
    InvalidId(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    ///
    /// Use this when a value is well-formed but breaks an invariant:
    /// - Required fields are empty or missing
    /// - Values are outside allowed ranges
    ///
    /// # Example
    /// ```ignore
    /// if name.is_empty() {
    ///     return Err(DomainError::validation("Monster name cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an invalid ID error
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this when raw user text cannot be read as the target type at all,
    /// e.g. `"4.5"` or `"4abc"` for a count.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("name cannot be empty");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(err.to_string(), "Validation failed: name cannot be empty");
    }

    #[test]
    fn test_invalid_id_error() {
        let err = DomainError::invalid_id("not-a-uuid");
        assert!(matches!(err, DomainError::InvalidId(_)));
        assert_eq!(err.to_string(), "Invalid ID format: not-a-uuid");
    }

    #[test]
    fn test_parse_error() {
        let err = DomainError::parse("'4.5' is not a whole number");
        assert!(matches!(err, DomainError::Parse(_)));
        assert!(err.to_string().starts_with("Parse error:"));
    }
}

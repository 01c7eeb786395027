//! Unified error type for the domain layer
//!
//! Every constructor and assembler in the pipeline reports failures through
//! [`DomainError`], so callers never have to juggle per-module error types.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// A required field is absent or blank
    #[error("missing required field: {0}")]
    MissingField(String),

    /// A field is present but carries the wrong JSON type
    #[error("field {field} must be {expected}, got {actual}")]
    WrongType {
        field: String,
        expected: &'static str,
        actual: String,
    },

    /// A numeric field violates its range invariant
    #[error("field {field} out of range: {reason}")]
    OutOfRange { field: String, reason: String },

    /// A unit-bearing string did not match any expected numeric pattern
    #[error("field {field} is not a parsable number: {value:?}")]
    UnparsableNumber { field: String, value: String },

    /// Two or more fields are individually valid but mutually inconsistent
    #[error("cross-field invariant violated: {0}")]
    CrossFieldInvariant(String),

    /// A container has the wrong shape (e.g. attributes is not an array)
    #[error("structural mismatch: {0}")]
    StructuralMismatch(String),

    /// Composite failure carrying every message collected by a constructor
    /// or by the equipment assembler
    #[error("validation failed:\n{}", .0.join("\n"))]
    Invalid(Vec<String>),
}

impl DomainError {
    /// Creates a missing-field error from a dotted field path.
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField(field.into())
    }

    /// Creates a wrong-type error. `actual` should describe what the document
    /// actually carried (e.g. "array", "null", "boolean").
    pub fn wrong_type(
        field: impl Into<String>,
        expected: &'static str,
        actual: impl Into<String>,
    ) -> Self {
        Self::WrongType {
            field: field.into(),
            expected,
            actual: actual.into(),
        }
    }

    /// Creates an out-of-range error for a numeric field.
    pub fn out_of_range(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::OutOfRange {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates an unparsable-number error for a unit-bearing string field.
    pub fn unparsable_number(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::UnparsableNumber {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Creates a cross-field invariant violation.
    pub fn cross_field(msg: impl Into<String>) -> Self {
        Self::CrossFieldInvariant(msg.into())
    }

    /// Creates a structural mismatch (wrong container type).
    pub fn structural(msg: impl Into<String>) -> Self {
        Self::StructuralMismatch(msg.into())
    }

    /// Wraps a list of collected messages into a composite failure.
    pub fn invalid(errors: Vec<String>) -> Self {
        Self::Invalid(errors)
    }

    /// Every message carried by this error, flattened to strings.
    ///
    /// Composite failures expand to their full list; every other variant
    /// yields its single display message.
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Invalid(errors) => errors.clone(),
            other => vec![other.to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message() {
        let err = DomainError::missing_field("profile.name");
        assert_eq!(err.to_string(), "missing required field: profile.name");
    }

    #[test]
    fn test_wrong_type_message() {
        let err = DomainError::wrong_type("attributes", "array", "object");
        assert_eq!(err.to_string(), "field attributes must be array, got object");
    }

    #[test]
    fn test_invalid_joins_messages() {
        let err = DomainError::invalid(vec!["first".into(), "second".into()]);
        assert_eq!(err.to_string(), "validation failed:\nfirst\nsecond");
    }

    #[test]
    fn test_messages_expands_composite() {
        let err = DomainError::invalid(vec!["a".into(), "b".into()]);
        assert_eq!(err.messages(), vec!["a".to_string(), "b".to_string()]);

        let single = DomainError::missing_field("id");
        assert_eq!(single.messages(), vec!["missing required field: id".to_string()]);
    }
}

//! # Error Types
//!
//! Domain-specific error types for stockroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockroom-core errors (this file)                                     │
//! │  ├── CoreError        - Domain errors (bad stored price)               │
//! │  └── ValidationError  - Operator input that breaks a rule              │
//! │                                                                         │
//! │  stockroom-db errors (separate crate)                                  │
//! │  └── DbError          - Connection and statement failures              │
//! │                                                                         │
//! │  Shell: every error becomes one console line, then the menu again      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A price value could not be coerced to a number.
    ///
    /// ## When This Occurs
    /// - A stored price column holds text that is not numeric
    #[error("Invalid price value: '{0}'")]
    InvalidPrice(String),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Each variant names the field and the rule it broke, so the shell can
/// print the message as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} cannot be empty")]
    Required { field: String },

    /// The first character must be alphabetic.
    #[error("{field} must start with a letter (A-Z)")]
    MustStartWithLetter { field: String },

    /// The value is not a whole number.
    #[error("You must enter an integer for {field}")]
    NotAnInteger { field: String },

    /// The value must be zero or greater.
    #[error("{field} shouldn't be < 0")]
    Negative { field: String },

    /// The value contains symbols or punctuation.
    #[error("Special characters (symbols) are not allowed in {field}")]
    InvalidCharacters { field: String },

    /// The value is not a (finite) decimal number.
    #[error("{field} should be a number")]
    NotANumber { field: String },

    /// The value must be strictly greater than zero.
    #[error("{field} should be a positive number")]
    MustBePositive { field: String },

    /// The value contains a space.
    #[error("{field} must not contain spaces")]
    ContainsWhitespace { field: String },
}

impl ValidationError {
    /// Returns the name of the field that failed validation.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::MustStartWithLetter { field }
            | ValidationError::NotAnInteger { field }
            | ValidationError::Negative { field }
            | ValidationError::InvalidCharacters { field }
            | ValidationError::NotANumber { field }
            | ValidationError::MustBePositive { field }
            | ValidationError::ContainsWhitespace { field } => field,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::MustStartWithLetter {
            field: "SKU".to_string(),
        };
        assert_eq!(err.to_string(), "SKU must start with a letter (A-Z)");

        let err = ValidationError::Negative {
            field: "Quantity".to_string(),
        };
        assert_eq!(err.to_string(), "Quantity shouldn't be < 0");
        assert_eq!(err.field(), "Quantity");
    }

    #[test]
    fn test_invalid_price_message() {
        let err = CoreError::InvalidPrice("n/a".to_string());
        assert_eq!(err.to_string(), "Invalid price value: 'n/a'");
    }
}

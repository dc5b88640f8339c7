//! # Validation Module
//!
//! Rules applied to free-text operator input before it reaches the database.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Shell (stockroom-cli)                                        │
//! │  └── Reads one line per field, stops at the first rejected field       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  └── Parses and checks the field, returns the cleaned value            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database                                                     │
//! │  └── UNIQUE constraints (sku, email)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every validator returns the value the caller should store, so the shell
//! never re-trims or re-parses.
//!
//! ## Usage
//! ```rust
//! use stockroom_core::validation::{validate_email, validate_sku};
//!
//! assert_eq!(validate_sku("  A1 ").unwrap(), "A1");
//! assert!(validate_sku("1abc").is_err());
//! assert!(validate_email("a @b.com").is_err());
//! ```

use crate::error::ValidationError;
use crate::price::round_to_cents;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

fn starts_with_letter(value: &str) -> bool {
    value.chars().next().is_some_and(char::is_alphabetic)
}

// =============================================================================
// Product Fields
// =============================================================================

/// Validates a SKU (Stock Keeping Unit).
///
/// ## Rules
/// - Surrounding whitespace is trimmed
/// - Must not be empty
/// - First character must be a letter
pub fn validate_sku(sku: &str) -> ValidationResult<String> {
    let sku = sku.trim();

    if sku.is_empty() {
        return Err(ValidationError::Required {
            field: "SKU".to_string(),
        });
    }

    if !starts_with_letter(sku) {
        return Err(ValidationError::MustStartWithLetter {
            field: "SKU".to_string(),
        });
    }

    Ok(sku.to_string())
}

/// Parses an initial stock quantity.
///
/// ## Rules
/// - Must parse as an integer
/// - Must be >= 0
pub fn parse_quantity(raw: &str) -> ValidationResult<i64> {
    let qty: i64 = raw.trim().parse().map_err(|_| ValidationError::NotAnInteger {
        field: "Quantity".to_string(),
    })?;

    if qty < 0 {
        return Err(ValidationError::Negative {
            field: "Quantity".to_string(),
        });
    }

    Ok(qty)
}

/// Validates a product name.
///
/// ## Rules
/// - Surrounding whitespace is trimmed
/// - Must not be empty
/// - Only letters, digits and spaces
pub fn validate_product_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "Name".to_string(),
        });
    }

    if !name
        .chars()
        .filter(|c| *c != ' ')
        .all(char::is_alphanumeric)
    {
        return Err(ValidationError::InvalidCharacters {
            field: "Name".to_string(),
        });
    }

    Ok(name.to_string())
}

/// Parses a unit price and rounds it to cents.
///
/// ## Rules
/// - Must parse as a finite decimal number
/// - Must be > 0 once rounded, so `0.004` is rejected
pub fn parse_price(raw: &str) -> ValidationResult<f64> {
    let price = raw
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite())
        .ok_or_else(|| ValidationError::NotANumber {
            field: "Price".to_string(),
        })
        .map(round_to_cents)?;

    if price <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: "Price".to_string(),
        });
    }

    Ok(price)
}

// =============================================================================
// Supplier Fields
// =============================================================================

/// Validates a supplier name.
///
/// ## Rules
/// - Must not be empty after trimming
pub fn validate_supplier_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "Supplier name".to_string(),
        });
    }

    Ok(name.to_string())
}

/// Validates a supplier email.
///
/// The value is not trimmed: a leading space is a rejected space.
///
/// ## Rules
/// - Must not be empty
/// - Must not contain spaces
/// - First character must be a letter
pub fn validate_email(email: &str) -> ValidationResult<String> {
    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "Email".to_string(),
        });
    }

    if email.chars().any(char::is_whitespace) {
        return Err(ValidationError::ContainsWhitespace {
            field: "Email".to_string(),
        });
    }

    if !starts_with_letter(email) {
        return Err(ValidationError::MustStartWithLetter {
            field: "Email".to_string(),
        });
    }

    Ok(email.to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================

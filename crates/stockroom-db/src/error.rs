//! # Database Error Types
//!
//! Error types for database operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  Driver error (sqlx::Error)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError (this module) ← Adds context and categorization               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Shell prints one line and shows the menu again                        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Database operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// The connection could not be opened.
    ///
    /// ## When This Occurs
    /// - Server unreachable
    /// - Bad credentials or unknown database
    /// - Malformed connection URL
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// No connection is held after an open attempt.
    #[error("No database connection available")]
    NotConnected,

    /// Connection settings cannot form a URL.
    #[error("Invalid database configuration: {0}")]
    InvalidConfig(String),

    /// Unique constraint violation.
    ///
    /// ## When This Occurs
    /// - Inserting a duplicate SKU
    /// - Inserting a duplicate supplier email
    #[error("Duplicate {field}: '{value}' already exists")]
    UniqueViolation { field: String, value: String },

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// A returned column could not be converted.
    #[error("Could not decode row: {0}")]
    Decode(String),

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates a UniqueViolation error.
    pub fn duplicate(field: impl Into<String>, value: impl Into<String>) -> Self {
        DbError::UniqueViolation {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Checks if this error is a unique constraint violation.
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, DbError::UniqueViolation { .. })
    }

    /// Attaches the offending value to a unique violation.
    ///
    /// Other errors pass through unchanged.
    pub fn with_duplicate_value(self, field: &str, value: &str) -> Self {
        match self {
            DbError::UniqueViolation { .. } => DbError::duplicate(field, value),
            other => other,
        }
    }
}

/// Extracts the column name from a driver's unique-violation message.
///
/// ```text
/// SQLite: "UNIQUE constraint failed: products.sku"      → "products.sku"
/// MySQL:  "Duplicate entry 'A1' for key 'products.sku'" → "products.sku"
/// ```
fn unique_field(msg: &str) -> String {
    if let Some(field) = msg.split("UNIQUE constraint failed: ").nth(1) {
        return field.trim().to_string();
    }

    msg.rsplit("for key ")
        .next()
        .filter(|_| msg.contains("for key "))
        .map(|key| key.trim().trim_matches('\'').to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::Database (unique)  → DbError::UniqueViolation
/// sqlx::Error::Database (other)   → DbError::QueryFailed
/// sqlx::Error::ColumnDecode/...   → DbError::Decode
/// sqlx::Error::Io / Tls / ...     → DbError::ConnectionFailed
/// Other                           → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();

                if db_err.is_unique_violation()
                    || msg.contains("UNIQUE constraint failed")
                    || msg.contains("Duplicate entry")
                {
                    DbError::UniqueViolation {
                        field: unique_field(msg),
                        value: "unknown".to_string(),
                    }
                } else {
                    DbError::QueryFailed(msg.to_string())
                }
            }

            sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::ColumnIndexOutOfBounds { .. }
            | sqlx::Error::Decode(_) => DbError::Decode(err.to_string()),

            sqlx::Error::Io(_) | sqlx::Error::Tls(_) | sqlx::Error::Configuration(_) => {
                DbError::ConnectionFailed(err.to_string())
            }

            _ => DbError::Internal(err.to_string()),
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

//! Error types for the office records core.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the failure modes of the record store and configuration loading.
//! Degenerate temporal input is never an error.

use thiserror::Error;

/// The main error type for the office records core.
///
/// # Example
///
/// ```
/// use office_records::error::StoreError;
///
/// let error = StoreError::UniquenessViolation {
///     entity: "client",
///     field: "name",
///     value: "Acme".to_string(),
/// };
/// assert_eq!(error.to_string(), "Uniqueness violation on client.name: 'Acme' already exists");
/// ```
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// A write would duplicate a value that must be unique.
    #[error("Uniqueness violation on {entity}.{field}: '{value}' already exists")]
    UniquenessViolation {
        /// The kind of record being written.
        entity: &'static str,
        /// The unique field (or field combination).
        field: &'static str,
        /// The offending value.
        value: String,
    },

    /// A requested or referenced record does not exist.
    #[error("{entity} {id} not found")]
    NotFound {
        /// The kind of record that was looked up.
        entity: &'static str,
        /// The id that was looked up.
        id: u64,
    },

    /// A string field exceeds the configured column width.
    #[error("Field {entity}.{field} exceeds {max} characters")]
    FieldTooLong {
        /// The kind of record being written.
        entity: &'static str,
        /// The field that is too long.
        field: &'static str,
        /// The maximum accepted length.
        max: usize,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl StoreError {
    /// Returns true for uniqueness violations.
    pub fn is_uniqueness_violation(&self) -> bool {
        matches!(self, StoreError::UniquenessViolation { .. })
    }
}

/// A type alias for Results that return StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

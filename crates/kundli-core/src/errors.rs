//! Cross-cutting error types for Kundli.
//!
//! Comparison and decoding errors live in `kundli-compare`; configuration
//! errors live in `kundli-config`.

use thiserror::Error;

/// Errors that can be raised by core types.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A birth record's date or time field could not be parsed.
    #[error("Invalid record {id}: {field} '{value}' does not match {format}")]
    InvalidRecord {
        id: i64,
        field: &'static str,
        value: String,
        format: &'static str,
    },

    /// Data failed validation (format, range, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}

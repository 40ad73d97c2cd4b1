//! Core error type.
//!
//! Configuration problems are reported against the JSON field name so the
//! caller can point at the exact input that needs fixing.

use thiserror::Error;

/// The top-level error type for `tp-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration field `{0}` is missing")]
    MissingField(&'static str),

    #[error("configuration field `{field}` is invalid: {reason}")]
    InvalidField {
        field:  &'static str,
        reason: String,
    },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// The configuration field this error refers to, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            CoreError::MissingField(field) | CoreError::InvalidField { field, .. } => Some(*field),
            _ => None,
        }
    }
}

/// Shorthand result type for all `tp-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;

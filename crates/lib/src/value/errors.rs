//! Error types for value conversions.

use thiserror::Error;

/// Structured error types for converting out of a [`Value`](super::Value).
#[non_exhaustive]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValueError {
    /// The value does not hold the requested type
    #[error("Value type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },
}

impl ValueError {
    /// Check if this error is related to type mismatches
    pub fn is_type_error(&self) -> bool {
        matches!(self, ValueError::TypeMismatch { .. })
    }
}

// Conversion from ValueError to the main Error type
impl From<ValueError> for crate::Error {
    fn from(err: ValueError) -> Self {
        crate::Error::Value(err)
    }
}

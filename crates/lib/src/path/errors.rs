//! Error types for property path parsing.
//!
//! Every variant describes a path string that does not follow the path
//! grammar. Parsing is the only place these errors are produced, so they are
//! always raised when an accessor is constructed, never when it is used.

use thiserror::Error;

/// Structured error types for path parsing.
#[non_exhaustive]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PathError {
    /// The path string was empty
    #[error("Invalid property path: path is empty")]
    Empty,

    /// A dot-separated token was empty (leading, trailing or doubled dot)
    #[error("Invalid property path '{path}': empty token at position {position}")]
    EmptyToken { path: String, position: usize },

    /// A token contained whitespace
    #[error("Invalid property path '{path}': token '{token}' contains whitespace")]
    Whitespace { path: String, token: String },

    /// A token had index groups but no field name in front of them
    #[error("Invalid property path '{path}': token '{token}' has no field name")]
    EmptyField { path: String, token: String },

    /// A token had a bracket that does not form a trailing `[index]` group
    #[error("Invalid property path '{path}': unbalanced bracket in token '{token}'")]
    UnbalancedBracket { path: String, token: String },

    /// A bracket group did not hold a non-negative integer
    #[error("Invalid property path '{path}': '{index}' is not a valid index")]
    InvalidIndex { path: String, index: String },

    /// A field name handed to a [`PathBuilder`](super::PathBuilder) was not a plain name
    #[error("Invalid field name '{field}'")]
    InvalidField { field: String },
}

impl PathError {
    /// Every path error means the path string itself is invalid.
    pub fn is_invalid_path(&self) -> bool {
        true
    }

    /// Check if this error is about a malformed index group
    pub fn is_index_error(&self) -> bool {
        matches!(
            self,
            PathError::InvalidIndex { .. } | PathError::UnbalancedBracket { .. }
        )
    }

    /// Get the offending path string, if the error carries one
    pub fn path(&self) -> Option<&str> {
        match self {
            PathError::Empty | PathError::InvalidField { .. } => None,
            PathError::EmptyToken { path, .. }
            | PathError::Whitespace { path, .. }
            | PathError::EmptyField { path, .. }
            | PathError::UnbalancedBracket { path, .. }
            | PathError::InvalidIndex { path, .. } => Some(path),
        }
    }
}

// Conversion from PathError to the main Error type
impl From<PathError> for crate::Error {
    fn from(err: PathError) -> Self {
        crate::Error::Path(err)
    }
}

//! Error types for accessor construction and writes.

use thiserror::Error;

use crate::container::NodeKind;

/// Structured error types for property accessors.
///
/// `InvalidContainer` and `MissingPath` are raised when an accessor is
/// built. `ShapeMismatch` and `IndexOutOfRange` are only raised by a write,
/// when the container's current shape cannot take the value.
#[non_exhaustive]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccessError {
    /// The root handed to an accessor builder is not a record or sequence
    #[error("Invalid data container: expected a record or sequence, found {found}")]
    InvalidContainer { found: String },

    /// The path has no segments
    #[error("Missing property path")]
    MissingPath,

    /// A node on the path has the wrong kind for the segment addressing it
    #[error("Cannot write '{path}' at '{segment}': expected {expected}, found {found}")]
    ShapeMismatch {
        path: String,
        segment: String,
        expected: NodeKind,
        found: String,
    },

    /// An index lies too far past the end of a sequence to pad up to
    #[error(
        "Cannot write '{path}': index {index} is out of range for a sequence of length {len}"
    )]
    IndexOutOfRange {
        path: String,
        index: usize,
        len: usize,
    },
}

impl AccessError {
    /// Check if the root container was rejected
    pub fn is_invalid_container(&self) -> bool {
        matches!(self, AccessError::InvalidContainer { .. })
    }

    /// Check if the path had no segments
    pub fn is_missing_path(&self) -> bool {
        matches!(self, AccessError::MissingPath)
    }

    /// Check if a write failed on an incompatible node
    pub fn is_shape_mismatch(&self) -> bool {
        matches!(self, AccessError::ShapeMismatch { .. })
    }

    /// Check if a write failed on an unreachable index
    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self, AccessError::IndexOutOfRange { .. })
    }

    /// Get the path if this is a path-related error
    pub fn path(&self) -> Option<&str> {
        match self {
            AccessError::ShapeMismatch { path, .. }
            | AccessError::IndexOutOfRange { path, .. } => Some(path),
            _ => None,
        }
    }
}

// Conversion from AccessError to the main Error type
impl From<AccessError> for crate::Error {
    fn from(err: AccessError) -> Self {
        crate::Error::Access(err)
    }
}
